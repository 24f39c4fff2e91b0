//! Declared header variable order
//!
//! The HEADER section is emitted in this order regardless of the order the
//! keys appear in the input document. Every name here has an entry in the
//! header group-code table (`crate::io::dxf::group_codes`).

/// Every header variable the writer knows, in output order
pub const HEADER_VARIABLES: &[&str] = &[
    "$ACADVER",
    "$ACADMAINTVER",
    "$DWGCODEPAGE",
    "$INSBASE",
    "$EXTMIN",
    "$EXTMAX",
    "$LIMMIN",
    "$LIMMAX",
    "$ORTHOMODE",
    "$REGENMODE",
    "$FILLMODE",
    "$QTEXTMODE",
    "$MIRRTEXT",
    "$LTSCALE",
    "$ATTMODE",
    "$TEXTSIZE",
    "$TRACEWID",
    "$TEXTSTYLE",
    "$CLAYER",
    "$CELTYPE",
    "$CECOLOR",
    "$CELTSCALE",
    "$DISPSILH",
    "$DIMSCALE",
    "$DIMASZ",
    "$DIMEXO",
    "$DIMDLI",
    "$DIMRND",
    "$DIMDLE",
    "$DIMEXE",
    "$DIMTP",
    "$DIMTM",
    "$DIMTXT",
    "$DIMCEN",
    "$DIMTSZ",
    "$DIMTOL",
    "$DIMLIM",
    "$DIMTIH",
    "$DIMTOH",
    "$DIMSE1",
    "$DIMSE2",
    "$DIMTAD",
    "$DIMZIN",
    "$DIMBLK",
    "$DIMASO",
    "$DIMSHO",
    "$DIMPOST",
    "$DIMAPOST",
    "$DIMALT",
    "$DIMALTD",
    "$DIMALTF",
    "$DIMLFAC",
    "$DIMTOFL",
    "$DIMTVP",
    "$DIMTIX",
    "$DIMSOXD",
    "$DIMSAH",
    "$DIMBLK1",
    "$DIMBLK2",
    "$DIMSTYLE",
    "$DIMCLRD",
    "$DIMCLRE",
    "$DIMCLRT",
    "$DIMTFAC",
    "$DIMGAP",
    "$DIMJUST",
    "$DIMSD1",
    "$DIMSD2",
    "$DIMTOLJ",
    "$DIMTZIN",
    "$DIMALTZ",
    "$DIMALTTZ",
    "$DIMUPT",
    "$DIMDEC",
    "$DIMTDEC",
    "$DIMALTU",
    "$DIMALTTD",
    "$DIMTXSTY",
    "$DIMAUNIT",
    "$DIMADEC",
    "$DIMALTRND",
    "$DIMAZIN",
    "$DIMDSEP",
    "$DIMATFIT",
    "$DIMFAC",
    "$DIMFRAC",
    "$DIMLDRBLK",
    "$DIMLUNIT",
    "$DIMLWD",
    "$DIMLWE",
    "$DIMTMOVE",
    "$DIMFXL",
    "$DIMFXLON",
    "$DIMJOGANG",
    "$DIMTFILL",
    "$DIMTFILLCLR",
    "$DIMARCSYM",
    "$DIMLTYPE",
    "$DIMLTEX1",
    "$DIMLTEX2",
    "$DIMTXTDIRECTION",
    "$LUNITS",
    "$LUPREC",
    "$SKETCHINC",
    "$FILLETRAD",
    "$AUNITS",
    "$AUPREC",
    "$MENU",
    "$ELEVATION",
    "$PELEVATION",
    "$THICKNESS",
    "$LIMCHECK",
    "$CHAMFERA",
    "$CHAMFERB",
    "$CHAMFERC",
    "$CHAMFERD",
    "$SKPOLY",
    "$TDCREATE",
    "$TDUCREATE",
    "$TDUPDATE",
    "$TDUUPDATE",
    "$TDINDWG",
    "$TDUSRTIMER",
    "$USRTIMER",
    "$ANGBASE",
    "$ANGDIR",
    "$PDMODE",
    "$PDSIZE",
    "$PLINEWID",
    "$SPLFRAME",
    "$SPLINETYPE",
    "$SPLINESEGS",
    "$HANDSEED",
    "$SURFTAB1",
    "$SURFTAB2",
    "$SURFTYPE",
    "$SURFU",
    "$SURFV",
    "$UCSBASE",
    "$UCSNAME",
    "$UCSORG",
    "$UCSXDIR",
    "$UCSYDIR",
    "$UCSORTHOREF",
    "$UCSORTHOVIEW",
    "$UCSORGTOP",
    "$UCSORGBOTTOM",
    "$UCSORGLEFT",
    "$UCSORGRIGHT",
    "$UCSORGFRONT",
    "$UCSORGBACK",
    "$PUCSBASE",
    "$PUCSNAME",
    "$PUCSORG",
    "$PUCSXDIR",
    "$PUCSYDIR",
    "$PUCSORTHOREF",
    "$PUCSORTHOVIEW",
    "$PUCSORGTOP",
    "$PUCSORGBOTTOM",
    "$PUCSORGLEFT",
    "$PUCSORGRIGHT",
    "$PUCSORGFRONT",
    "$PUCSORGBACK",
    "$USERI1",
    "$USERI2",
    "$USERI3",
    "$USERI4",
    "$USERI5",
    "$USERR1",
    "$USERR2",
    "$USERR3",
    "$USERR4",
    "$USERR5",
    "$WORLDVIEW",
    "$SHADEDGE",
    "$SHADEDIF",
    "$TILEMODE",
    "$MAXACTVP",
    "$PINSBASE",
    "$PLIMCHECK",
    "$PEXTMIN",
    "$PEXTMAX",
    "$PLIMMIN",
    "$PLIMMAX",
    "$UNITMODE",
    "$VISRETAIN",
    "$PLINEGEN",
    "$PSLTSCALE",
    "$TREEDEPTH",
    "$CMLSTYLE",
    "$CMLJUST",
    "$CMLSCALE",
    "$PROXYGRAPHICS",
    "$MEASUREMENT",
    "$CELWEIGHT",
    "$ENDCAPS",
    "$JOINSTYLE",
    "$LWDISPLAY",
    "$INSUNITS",
    "$HYPERLINKBASE",
    "$STYLESHEET",
    "$XEDIT",
    "$CEPSNTYPE",
    "$CEPSNID",
    "$PSTYLEMODE",
    "$FINGERPRINTGUID",
    "$VERSIONGUID",
    "$EXTNAMES",
    "$PSVPSCALE",
    "$OLESTARTUP",
    "$SORTENTS",
    "$INDEXCTL",
    "$HIDETEXT",
    "$XCLIPFRAME",
    "$HALOGAP",
    "$OBSCOLOR",
    "$OBSLTYPE",
    "$INTERSECTIONDISPLAY",
    "$INTERSECTIONCOLOR",
    "$DIMASSOC",
    "$PROJECTNAME",
    "$CAMERADISPLAY",
    "$LENSLENGTH",
    "$CAMERAHEIGHT",
    "$STEPSPERSEC",
    "$STEPSIZE",
    "$3DDWFPREC",
    "$PSOLWIDTH",
    "$PSOLHEIGHT",
    "$LOFTANG1",
    "$LOFTANG2",
    "$LOFTMAG1",
    "$LOFTMAG2",
    "$LOFTPARAM",
    "$LOFTNORMALS",
    "$LATITUDE",
    "$LONGITUDE",
    "$NORTHDIRECTION",
    "$TIMEZONE",
    "$LIGHTGLYPHDISPLAY",
    "$TILEMODELIGHTSYNCH",
    "$CMATERIAL",
    "$SOLIDHIST",
    "$SHOWHIST",
    "$DWFFRAME",
    "$DGNFRAME",
    "$REALWORLDSCALE",
    "$INTERFERECOLOR",
    "$CSHADOW",
    "$SHADOWPLANELOCATION",
    "$DRAGVS",
    "$INTERFEREOBJVS",
    "$INTERFEREVPVS",
];

/// Whether `key` is one of the declared header variables
pub fn is_header_variable(key: &str) -> bool {
    HEADER_VARIABLES.contains(&key)
}
