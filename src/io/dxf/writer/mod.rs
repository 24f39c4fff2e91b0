//! DXF writer module

mod configuration;
mod section_writer;
mod stream_writer;
mod text_writer;

pub use configuration::{
    BlockEndHandle, DxfWriterConfiguration, OutputLayout, RecordHandleAllocator, RecordHandles,
    SymbolTable,
};
pub use section_writer::SectionWriter;
pub use stream_writer::{
    format_code, format_double, format_i16, format_i32, DxfStreamWriter, DxfStreamWriterExt,
    TokenWriter,
};
pub use text_writer::DxfTextWriter;

use crate::document::Document;
use crate::error::Result;
use crate::io::dxf::code_page::encoding_for_header;
use crate::notification::NotificationCollection;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Result of encoding a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedDxf {
    /// Output tokens in order, ending with the EOF marker
    pub tokens: Vec<String>,
    /// Anything the encoder skipped
    pub notifications: NotificationCollection,
}

impl EncodedDxf {
    /// The DXF text, one token per line
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for token in &self.tokens {
            text.push_str(token);
            text.push('\n');
        }
        text
    }
}

/// DXF file writer
pub struct DxfWriter<'a> {
    document: &'a Document,
    configuration: DxfWriterConfiguration,
}

impl<'a> DxfWriter<'a> {
    /// Create a writer with the default configuration
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            configuration: DxfWriterConfiguration::default(),
        }
    }

    /// Create a writer with a custom configuration
    pub fn with_configuration(document: &'a Document, configuration: DxfWriterConfiguration) -> Self {
        Self {
            document,
            configuration,
        }
    }

    /// Encode the document into its token sequence
    pub fn encode(&self) -> EncodedDxf {
        let mut tokens = TokenWriter::new();
        let mut notifications = NotificationCollection::new();
        self.write_dxf(&mut tokens, &mut notifications);

        tracing::debug!(
            tokens = tokens.len(),
            notifications = notifications.len(),
            "encoded DXF document"
        );

        EncodedDxf {
            tokens: tokens.into_tokens(),
            notifications,
        }
    }

    /// Write DXF content to a stream writer
    fn write_dxf<W: DxfStreamWriter>(&self, writer: &mut W, notifications: &mut NotificationCollection) {
        let mut section_writer = SectionWriter::new(writer, &self.configuration, notifications);

        section_writer.write_header(&self.document.header);
        section_writer.write_tables(&self.document.tables);
        section_writer.write_blocks(&self.document.blocks);
        section_writer.write_entities(&self.document.entities);

        writer.write_eof();
    }

    /// Write to any writer
    ///
    /// Returns the notifications collected while encoding.
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<NotificationCollection> {
        let encoded = self.encode();

        let encoding = if self.configuration.transcode {
            encoding_for_header(&self.document.header)
        } else {
            None
        };

        let mut text_writer = match encoding {
            Some(encoding) => {
                tracing::debug!(encoding = encoding.name(), "transcoding DXF output");
                DxfTextWriter::with_encoding(writer, encoding)
            }
            None => DxfTextWriter::new(writer),
        };
        text_writer.write_tokens(&encoded.tokens)?;
        text_writer.flush()?;

        Ok(encoded.notifications)
    }

    /// Write to a byte vector (useful for testing)
    pub fn write_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<NotificationCollection> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Get a reference to the document
    pub fn document(&self) -> &Document {
        self.document
    }

    pub fn configuration(&self) -> &DxfWriterConfiguration {
        &self.configuration
    }
}

/// Encode a document with the default configuration
pub fn encode_document(document: &Document) -> Vec<String> {
    DxfWriter::new(document).encode().tokens
}

/// Convenience function to write a document to a file
pub fn write_dxf<P: AsRef<Path>>(document: &Document, path: P) -> Result<NotificationCollection> {
    DxfWriter::new(document).write_to_file(path)
}
