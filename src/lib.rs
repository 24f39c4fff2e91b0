//! # dxf_json_writer
//!
//! Converts a JSON description of a drawing into an ASCII DXF file.
//!
//! The input document carries the header variables, the VPORT, LTYPE and
//! LAYER symbol tables, block definitions and entities. The encoder turns it
//! into the DXF token sequence: HEADER, TABLES, BLOCKS and ENTITIES sections
//! followed by the EOF marker.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxf_json_writer::{Document, DxfWriter};
//!
//! let doc = Document::from_file("drawing.json")?;
//! doc.validate()?;
//!
//! let writer = DxfWriter::new(&doc);
//! for notification in writer.write_to_file("drawing.dxf")?.iter() {
//!     eprintln!("{}", notification);
//! }
//! # Ok::<(), dxf_json_writer::error::DxfError>(())
//! ```
//!
//! ## Output
//!
//! Encoding never fails and never changes the document. By default the
//! field padding matches existing output byte for byte; see [`OutputLayout`]
//! for the fixed-width alternative. Structural markers such as `  0` /
//! `SECTION` are single two-line tokens. Records the writer cannot encode
//! (for example `POLYLINE` entities) are skipped and reported as
//! [`Notification`]s alongside the output.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod blocks;
pub mod document;
pub mod entities;
pub mod error;
pub mod header;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Handle, ObjectHandles, Point2, Point3};

pub use blocks::{is_model_space, Block, BlockMap};
pub use entities::{is_lwpolyline, Entity, LwPolyline, Polyline, UnsupportedEntity, Vertex};
pub use header::{Header, HeaderValue};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use tables::{
    Layer, LayerTable, LineType, LineTypeTable, TableEntry, Tables, Viewport, ViewportTable,
};

// Re-export document
pub use document::Document;

// Re-export I/O types
pub use io::dxf::{
    encode_document, write_dxf, BlockEndHandle, DxfWriter, DxfWriterConfiguration, EncodedDxf,
    OutputLayout, RecordHandles,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
