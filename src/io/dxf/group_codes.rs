//! Header group-code table
//!
//! Maps every header variable to the group code(s) its value is written
//! under: a single code for scalars, two codes for 2D points and three codes
//! for 3D points.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Shape of a header variable's value in the DXF stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupCodes {
    /// One code, one value line
    Scalar(i32),
    /// X and Y codes of a 2D point
    Pair(i32, i32),
    /// X, Y and Z codes of a 3D point
    Triplet(i32, i32, i32),
}

impl GroupCodes {
    /// Number of code/value pairs this shape emits
    pub fn arity(&self) -> usize {
        match self {
            GroupCodes::Scalar(_) => 1,
            GroupCodes::Pair(..) => 2,
            GroupCodes::Triplet(..) => 3,
        }
    }

    /// Human-readable name of the value this shape expects
    pub fn expected(&self) -> &'static str {
        match self {
            GroupCodes::Scalar(_) => "scalar",
            GroupCodes::Pair(..) => "2D point",
            GroupCodes::Triplet(..) => "3D point",
        }
    }
}

use GroupCodes::{Pair, Scalar, Triplet};

const GROUP_CODE_TABLE: &[(&str, GroupCodes)] = &[
    ("$ACADVER", Scalar(1)),
    ("$ACADMAINTVER", Scalar(70)),
    ("$DWGCODEPAGE", Scalar(3)),
    ("$INSBASE", Triplet(10, 20, 30)),
    ("$EXTMIN", Triplet(10, 20, 30)),
    ("$EXTMAX", Triplet(10, 20, 30)),
    ("$LIMMIN", Pair(10, 20)),
    ("$LIMMAX", Pair(10, 20)),
    ("$ORTHOMODE", Scalar(70)),
    ("$REGENMODE", Scalar(70)),
    ("$FILLMODE", Scalar(70)),
    ("$QTEXTMODE", Scalar(70)),
    ("$MIRRTEXT", Scalar(70)),
    ("$LTSCALE", Scalar(40)),
    ("$ATTMODE", Scalar(70)),
    ("$TEXTSIZE", Scalar(40)),
    ("$TRACEWID", Scalar(40)),
    ("$TEXTSTYLE", Scalar(7)),
    ("$CLAYER", Scalar(8)),
    ("$CELTYPE", Scalar(6)),
    ("$CECOLOR", Scalar(62)),
    ("$CELTSCALE", Scalar(40)),
    ("$DISPSILH", Scalar(70)),
    ("$DIMSCALE", Scalar(40)),
    ("$DIMASZ", Scalar(40)),
    ("$DIMEXO", Scalar(40)),
    ("$DIMDLI", Scalar(40)),
    ("$DIMRND", Scalar(40)),
    ("$DIMDLE", Scalar(40)),
    ("$DIMEXE", Scalar(40)),
    ("$DIMTP", Scalar(40)),
    ("$DIMTM", Scalar(40)),
    ("$DIMTXT", Scalar(40)),
    ("$DIMCEN", Scalar(40)),
    ("$DIMTSZ", Scalar(40)),
    ("$DIMTOL", Scalar(70)),
    ("$DIMLIM", Scalar(70)),
    ("$DIMTIH", Scalar(70)),
    ("$DIMTOH", Scalar(70)),
    ("$DIMSE1", Scalar(70)),
    ("$DIMSE2", Scalar(70)),
    ("$DIMTAD", Scalar(70)),
    ("$DIMZIN", Scalar(70)),
    ("$DIMBLK", Scalar(1)),
    ("$DIMASO", Scalar(70)),
    ("$DIMSHO", Scalar(70)),
    ("$DIMPOST", Scalar(1)),
    ("$DIMAPOST", Scalar(1)),
    ("$DIMALT", Scalar(70)),
    ("$DIMALTD", Scalar(70)),
    ("$DIMALTF", Scalar(40)),
    ("$DIMLFAC", Scalar(40)),
    ("$DIMTOFL", Scalar(70)),
    ("$DIMTVP", Scalar(40)),
    ("$DIMTIX", Scalar(70)),
    ("$DIMSOXD", Scalar(70)),
    ("$DIMSAH", Scalar(70)),
    ("$DIMBLK1", Scalar(1)),
    ("$DIMBLK2", Scalar(1)),
    ("$DIMSTYLE", Scalar(2)),
    ("$DIMCLRD", Scalar(70)),
    ("$DIMCLRE", Scalar(70)),
    ("$DIMCLRT", Scalar(70)),
    ("$DIMTFAC", Scalar(40)),
    ("$DIMGAP", Scalar(40)),
    ("$DIMJUST", Scalar(70)),
    ("$DIMSD1", Scalar(70)),
    ("$DIMSD2", Scalar(70)),
    ("$DIMTOLJ", Scalar(70)),
    ("$DIMTZIN", Scalar(70)),
    ("$DIMALTZ", Scalar(70)),
    ("$DIMALTTZ", Scalar(70)),
    ("$DIMUPT", Scalar(70)),
    ("$DIMDEC", Scalar(70)),
    ("$DIMTDEC", Scalar(70)),
    ("$DIMALTU", Scalar(70)),
    ("$DIMALTTD", Scalar(70)),
    ("$DIMTXSTY", Scalar(7)),
    ("$DIMAUNIT", Scalar(70)),
    ("$DIMADEC", Scalar(70)),
    ("$DIMALTRND", Scalar(40)),
    ("$DIMAZIN", Scalar(70)),
    ("$DIMDSEP", Scalar(70)),
    ("$DIMATFIT", Scalar(70)),
    ("$DIMFAC", Scalar(40)),
    ("$DIMFRAC", Scalar(70)),
    ("$DIMLDRBLK", Scalar(1)),
    ("$DIMLUNIT", Scalar(70)),
    ("$DIMLWD", Scalar(70)),
    ("$DIMLWE", Scalar(70)),
    ("$DIMTMOVE", Scalar(70)),
    ("$DRAGVS", Scalar(349)),
    ("$LUNITS", Scalar(70)),
    ("$LUPREC", Scalar(70)),
    ("$SKETCHINC", Scalar(40)),
    ("$FILLETRAD", Scalar(30)),
    ("$AUNITS", Scalar(70)),
    ("$AUPREC", Scalar(70)),
    ("$MENU", Scalar(1)),
    ("$ELEVATION", Scalar(40)),
    ("$PELEVATION", Scalar(40)),
    ("$THICKNESS", Scalar(40)),
    ("$LIMCHECK", Scalar(70)),
    ("$CHAMFERA", Scalar(40)),
    ("$CHAMFERB", Scalar(40)),
    ("$CHAMFERC", Scalar(40)),
    ("$CHAMFERD", Scalar(40)),
    ("$SKPOLY", Scalar(70)),
    ("$TDCREATE", Scalar(40)),
    ("$TDUCREATE", Scalar(40)),
    ("$TDUPDATE", Scalar(40)),
    ("$TDUUPDATE", Scalar(40)),
    ("$TDINDWG", Scalar(40)),
    ("$TDUSRTIMER", Scalar(40)),
    ("$USRTIMER", Scalar(70)),
    ("$ANGBASE", Scalar(50)),
    ("$ANGDIR", Scalar(70)),
    ("$PDMODE", Scalar(70)),
    ("$PDSIZE", Scalar(40)),
    ("$PLINEWID", Scalar(40)),
    ("$SPLINETYPE", Scalar(70)),
    ("$SPLINESEGS", Scalar(70)),
    ("$HANDSEED", Scalar(5)),
    ("$SURFTAB1", Scalar(70)),
    ("$SURFTAB2", Scalar(70)),
    ("$SURFTYPE", Scalar(70)),
    ("$SURFU", Scalar(70)),
    ("$SURFV", Scalar(70)),
    ("$UCSBASE", Scalar(2)),
    ("$UCSNAME", Scalar(2)),
    ("$UCSORG", Triplet(10, 20, 30)),
    ("$UCSXDIR", Triplet(10, 20, 30)),
    ("$UCSYDIR", Triplet(10, 20, 30)),
    ("$UCSORTHOREF", Scalar(2)),
    ("$UCSORTHOVIEW", Scalar(70)),
    ("$UCSORGTOP", Triplet(10, 20, 30)),
    ("$UCSORGBOTTOM", Triplet(10, 20, 30)),
    ("$UCSORGLEFT", Triplet(10, 20, 30)),
    ("$UCSORGRIGHT", Triplet(10, 20, 30)),
    ("$UCSORGFRONT", Triplet(10, 20, 30)),
    ("$UCSORGBACK", Triplet(10, 20, 30)),
    ("$PUCSBASE", Scalar(2)),
    ("$PUCSNAME", Scalar(2)),
    ("$PUCSORG", Triplet(10, 20, 30)),
    ("$PUCSXDIR", Triplet(10, 20, 30)),
    ("$PUCSYDIR", Triplet(10, 20, 30)),
    ("$PUCSORTHOREF", Scalar(2)),
    ("$PUCSORTHOVIEW", Scalar(70)),
    ("$PUCSORGTOP", Triplet(10, 20, 30)),
    ("$PUCSORGBOTTOM", Triplet(10, 20, 30)),
    ("$PUCSORGLEFT", Triplet(10, 20, 30)),
    ("$PUCSORGRIGHT", Triplet(10, 20, 30)),
    ("$PUCSORGFRONT", Triplet(10, 20, 30)),
    ("$PUCSORGBACK", Triplet(10, 20, 30)),
    ("$USERI1", Scalar(70)),
    ("$USERI2", Scalar(70)),
    ("$USERI3", Scalar(70)),
    ("$USERI4", Scalar(70)),
    ("$USERI5", Scalar(70)),
    ("$USERR1", Scalar(40)),
    ("$USERR2", Scalar(40)),
    ("$USERR3", Scalar(40)),
    ("$USERR4", Scalar(40)),
    ("$USERR5", Scalar(40)),
    ("$WORLDVIEW", Scalar(70)),
    ("$SHADEDGE", Scalar(70)),
    ("$SHADEDIF", Scalar(70)),
    ("$TILEMODE", Scalar(70)),
    ("$MAXACTVP", Scalar(70)),
    ("$PINSBASE", Triplet(10, 20, 30)),
    ("$PLIMCHECK", Scalar(70)),
    ("$PEXTMIN", Triplet(10, 20, 30)),
    ("$PEXTMAX", Triplet(10, 20, 30)),
    ("$PLIMMIN", Pair(10, 20)),
    ("$PLIMMAX", Pair(10, 20)),
    ("$UNITMODE", Scalar(70)),
    ("$VISRETAIN", Scalar(70)),
    ("$PLINEGEN", Scalar(70)),
    ("$PSLTSCALE", Scalar(70)),
    ("$TREEDEPTH", Scalar(70)),
    ("$CMLSTYLE", Scalar(2)),
    ("$CMLJUST", Scalar(70)),
    ("$CMLSCALE", Scalar(40)),
    ("$PROXYGRAPHICS", Scalar(70)),
    ("$MEASUREMENT", Scalar(70)),
    ("$CELWEIGHT", Scalar(370)),
    ("$ENDCAPS", Scalar(280)),
    ("$JOINSTYLE", Scalar(280)),
    ("$LWDISPLAY", Scalar(290)),
    ("$INSUNITS", Scalar(70)),
    ("$HYPERLINKBASE", Scalar(1)),
    ("$XEDIT", Scalar(290)),
    ("$CEPSNTYPE", Scalar(380)),
    ("$CEPSNID", Scalar(390)),
    ("$PSTYLEMODE", Scalar(290)),
    ("$FINGERPRINTGUID", Scalar(2)),
    ("$VERSIONGUID", Scalar(2)),
    ("$EXTNAMES", Scalar(290)),
    ("$PSVPSCALE", Scalar(40)),
    ("$SORTENTS", Scalar(280)),
    ("$INDEXCTL", Scalar(280)),
    ("$HIDETEXT", Scalar(290)),
    ("$XCLIPFRAME", Scalar(290)),
    ("$HALOGAP", Scalar(280)),
    ("$OBSCOLOR", Scalar(70)),
    ("$OBSLTYPE", Scalar(280)),
    ("$INTERSECTIONDISPLAY", Scalar(290)),
    ("$INTERSECTIONCOLOR", Scalar(70)),
    ("$DIMASSOC", Scalar(280)),
    ("$PROJECTNAME", Scalar(1)),
    ("$INTERFERECOLOR", Scalar(62)),
    ("$CSHADOW", Scalar(280)),
    ("$SHADOWPLANELOCATION", Scalar(40)),
    ("$INTERFEREOBJVS", Scalar(345)),
    ("$INTERFEREVPVS", Scalar(346)),
    ("$DIMFXL", Scalar(40)),
    ("$DIMFXLON", Scalar(70)),
    ("$DIMJOGANG", Scalar(40)),
    ("$DIMTFILL", Scalar(70)),
    ("$DIMTFILLCLR", Scalar(70)),
    ("$DIMARCSYM", Scalar(70)),
    ("$DIMLTYPE", Scalar(6)),
    ("$DIMLTEX1", Scalar(6)),
    ("$DIMLTEX2", Scalar(6)),
    ("$DIMTXTDIRECTION", Scalar(70)),
    ("$SPLFRAME", Scalar(70)),
    ("$STYLESHEET", Scalar(1)),
    ("$LENSLENGTH", Scalar(40)),
    ("$CAMERAHEIGHT", Scalar(40)),
    ("$STEPSPERSEC", Scalar(40)),
    ("$STEPSIZE", Scalar(40)),
    ("$3DDWFPREC", Scalar(40)),
    ("$PSOLWIDTH", Scalar(40)),
    ("$PSOLHEIGHT", Scalar(40)),
    ("$LOFTANG1", Scalar(40)),
    ("$LOFTANG2", Scalar(40)),
    ("$LOFTMAG1", Scalar(40)),
    ("$LOFTMAG2", Scalar(40)),
    ("$LOFTPARAM", Scalar(70)),
    ("$LOFTNORMALS", Scalar(280)),
    ("$LATITUDE", Scalar(40)),
    ("$LONGITUDE", Scalar(40)),
    ("$NORTHDIRECTION", Scalar(40)),
    ("$TIMEZONE", Scalar(70)),
    ("$LIGHTGLYPHDISPLAY", Scalar(280)),
    ("$TILEMODELIGHTSYNCH", Scalar(280)),
    ("$CMATERIAL", Scalar(347)),
    ("$SOLIDHIST", Scalar(280)),
    ("$SHOWHIST", Scalar(280)),
    ("$DWFFRAME", Scalar(280)),
    ("$DGNFRAME", Scalar(280)),
    ("$CAMERADISPLAY", Scalar(290)),
    ("$REALWORLDSCALE", Scalar(290)),
    ("$OLESTARTUP", Scalar(290)),
];

static GROUP_CODES: Lazy<AHashMap<&'static str, GroupCodes>> =
    Lazy::new(|| GROUP_CODE_TABLE.iter().copied().collect());

/// Look up the group-code shape of a header variable
pub fn group_codes_for(key: &str) -> Option<GroupCodes> {
    GROUP_CODES.get(key).copied()
}

/// Number of header variables with a known shape
pub fn group_code_count() -> usize {
    GROUP_CODES.len()
}
