//! Drawing document structure

use crate::blocks::BlockMap;
use crate::entities::Entity;
use crate::header::Header;
use crate::tables::Tables;
use crate::Result;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A drawing as read from its JSON description
///
/// The writer only reads the document; encoding never modifies it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    /// Header variables
    pub header: Header,
    /// VPORT, LTYPE and LAYER tables
    pub tables: Tables,
    /// Block definitions, in document order
    pub blocks: BlockMap,
    /// Drawing entities, in document order
    pub entities: Vec<Entity>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a JSON byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(BufReader::new(reader))?)
    }

    /// Read a document from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let document = Self::from_reader(File::open(path)?)?;
        tracing::info!(
            path = %path.display(),
            header = document.header.len(),
            blocks = document.blocks.len(),
            entities = document.entities.len(),
            "loaded document"
        );
        Ok(document)
    }

    /// Check header values against their group-code shapes
    pub fn validate(&self) -> Result<()> {
        self.header.validate()
    }

    /// Number of entities the ENTITIES section will contain
    pub fn encoded_entity_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_encoded()).count()
    }
}
