//! TABLES section: viewport, line-type and layer symbol tables

use crate::types::{Handle, ObjectHandles};
use serde::Deserialize;

pub mod layer;
pub mod linetype;
pub mod vport;

pub use layer::{Layer, LayerFlags, LayerTable};
pub use linetype::{LineType, LineTypeTable};
pub use vport::{Viewport, ViewportTable};

/// Base trait for all table entries
pub trait TableEntry {
    /// Get the entry's name (group code 2)
    fn name(&self) -> &str;
}

/// The symbol tables of a document
///
/// A table that is absent from the input is not written at all.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tables {
    #[serde(rename = "viewPort")]
    pub viewport: Option<ViewportTable>,
    #[serde(rename = "lineType")]
    pub line_type: Option<LineTypeTable>,
    pub layer: Option<LayerTable>,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no table container is present
    pub fn is_empty(&self) -> bool {
        self.viewport.is_none() && self.line_type.is_none() && self.layer.is_none()
    }
}

macro_rules! impl_object_handles {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ObjectHandles for $ty {
                fn handle(&self) -> &Handle {
                    &self.handle
                }

                fn owner_handle(&self) -> &Handle {
                    &self.owner_handle
                }
            }
        )+
    };
}

impl_object_handles!(ViewportTable, LineTypeTable, LayerTable);
