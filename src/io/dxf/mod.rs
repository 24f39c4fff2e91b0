//! DXF (Drawing Exchange Format) writing

pub mod code_page;
pub mod group_codes;
pub mod markers;
mod writer;

pub use code_page::{encoding_for_header, encoding_from_code_page};
pub use group_codes::{group_codes_for, GroupCodes};
pub use writer::{
    encode_document, format_code, format_double, format_i16, format_i32, write_dxf,
    BlockEndHandle, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter, DxfWriter,
    DxfWriterConfiguration, EncodedDxf, OutputLayout, RecordHandleAllocator, RecordHandles,
    SectionWriter, SymbolTable, TokenWriter,
};
