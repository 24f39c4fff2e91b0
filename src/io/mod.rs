//! I/O module for writing drawings as DXF

pub mod dxf;

pub use dxf::{encode_document, write_dxf, DxfWriter, DxfWriterConfiguration};
