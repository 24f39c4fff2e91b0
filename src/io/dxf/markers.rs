//! Structural markers
//!
//! Each marker is a fixed code/value pair emitted as a single token of two
//! physical lines. The `REFERENCE_*` table headers are the exception: they
//! reproduce existing output, which has no `100` line before the subclass.

pub const SECTION: &str = "  0\nSECTION";
pub const END_SECTION: &str = "  0\nENDSEC";
pub const EOF: &str = "  0\nEOF";

pub const HEADER: &str = "  2\nHEADER";
pub const TABLES: &str = "  2\nTABLES";
pub const BLOCKS: &str = "  2\nBLOCKS";
pub const ENTITIES: &str = "  2\nENTITIES";

pub const TABLE: &str = "  0\nTABLE";
pub const END_TABLE: &str = "  0\nENDTAB";

pub const VPORT_TABLE: &str = "  2\nVPORT";
pub const LTYPE_TABLE: &str = "  2\nLTYPE";
pub const LAYER_TABLE: &str = "  2\nLAYER";

pub const VPORT: &str = "  0\nVPORT";
pub const LTYPE: &str = "  0\nLTYPE";
pub const LAYER: &str = "  0\nLAYER";

pub const AC_DB_SYMBOL_TABLE: &str = "100\nAcDbSymbolTable";
/// Layer table header; the count line follows as its own token
pub const REFERENCE_SYMBOL_TABLE: &str = "AcDbSymbolTable\n70";
/// VPORT/LTYPE table header with its fixed count of one
pub const REFERENCE_BLANK_SYMBOL_TABLE: &str = "AcDbSymbolTable\n 70\n     1";
pub const AC_DB_SYMBOL_TABLE_RECORD: &str = "100\nAcDbSymbolTableRecord";
pub const AC_DB_VIEWPORT_TABLE_RECORD: &str = "100\nAcDbViewportTableRecord";
pub const AC_DB_LINETYPE_TABLE_RECORD: &str = "100\nAcDbLinetypeTableRecord";
pub const AC_DB_LAYER_TABLE_RECORD: &str = "100\nAcDbLayerTableRecord";

pub const BLOCK: &str = "  0\nBLOCK";
pub const END_BLOCK: &str = "  0\nENDBLK";
pub const AC_DB_ENTITY: &str = "100\nAcDbEntity";
pub const AC_DB_BLOCK_BEGIN: &str = "100\nAcDbBlockBegin";
pub const AC_DB_BLOCK_END: &str = "100\nAcDbBlockEnd";

pub const LWPOLYLINE: &str = "  0\nLWPOLYLINE";
pub const AC_DB_POLYLINE: &str = "100\nAcDbPolyline";
