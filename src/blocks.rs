//! BLOCKS section: block definitions
//!
//! The input keeps blocks in a map whose keys are never written; each
//! block's own `name` is what appears in the DXF stream.

use crate::types::{Handle, ObjectHandles, Point3};
use indexmap::IndexMap;
use serde::Deserialize;

/// Substring marking a model-space block name (`*Model_Space`)
pub const MODEL_SPACE: &str = "Model_Space";

/// Blocks keyed by an arbitrary map key, in input order
pub type BlockMap = IndexMap<String, Block>;

/// Whether a block name denotes model space
///
/// This is a substring test, so `*Model_Space` and `Model_Space_Copy` both
/// match; every other block is written with the paper-space flag.
pub fn is_model_space(name: &str) -> bool {
    name.contains(MODEL_SPACE)
}

/// A block definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub handle: Handle,
    pub owner_handle: Handle,
    /// Layer the BLOCK and ENDBLK records sit on
    pub layer: String,
    /// Paper-space flag as recorded in the source drawing; the written flag
    /// follows the block name, see [`is_model_space`]
    #[serde(default)]
    pub paper_space: Option<bool>,
    /// Block name (group code 2)
    pub name: String,
    /// Base point
    pub position: Point3,
    /// Secondary block name (group code 3)
    pub name2: String,
    /// X-ref path name (group code 1)
    pub xref_path: String,
}

impl Block {
    /// Create a new block on layer "0" at the origin
    pub fn new(name: impl Into<String>, handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        let name = name.into();
        Self {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            layer: "0".to_string(),
            paper_space: None,
            name2: name.clone(),
            name,
            position: Point3::ZERO,
            xref_path: String::new(),
        }
    }

    /// Builder: Set the base point
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Builder: Set the layer
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    /// Builder: Set the xref path
    pub fn with_xref_path(mut self, xref_path: impl Into<String>) -> Self {
        self.xref_path = xref_path.into();
        self
    }

    pub fn is_model_space(&self) -> bool {
        is_model_space(&self.name)
    }
}

impl ObjectHandles for Block {
    fn handle(&self) -> &Handle {
        &self.handle
    }

    fn owner_handle(&self) -> &Handle {
        &self.owner_handle
    }
}
