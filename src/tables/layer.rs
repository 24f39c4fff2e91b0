//! Layer table entry

use super::TableEntry;
use crate::types::Handle;
use bitflags::bitflags;
use indexmap::IndexMap;
use serde::Deserialize;

bitflags! {
    /// Layer standard flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayerFlags: i16 {
        /// Layer is frozen
        const FROZEN = 1;
    }
}

/// A layer table entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Layer name
    pub name: String,
    pub frozen: bool,
    /// Layer is on; an off layer is written with a negative color
    pub visible: bool,
    /// ACI color number
    pub color_index: i16,
    /// Raw 24-bit color as read from the source drawing; not written
    #[serde(default)]
    pub color: i64,
}

impl Layer {
    /// Create a new visible, thawed layer with color 7
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            frozen: false,
            visible: true,
            color_index: 7,
            color: 0xFFFFFF,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Self::new("0")
    }

    pub fn flags(&self) -> LayerFlags {
        let mut flags = LayerFlags::empty();
        flags.set(LayerFlags::FROZEN, self.frozen);
        flags
    }

    /// Color number as written to group 62 (negative if the layer is off)
    pub fn color_number(&self) -> i16 {
        if self.visible {
            self.color_index
        } else {
            self.color_index.saturating_neg()
        }
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::layer_0()
    }
}

impl TableEntry for Layer {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The LAYER table container
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerTable {
    pub handle: Handle,
    pub owner_handle: Handle,
    /// Entries keyed by an arbitrary map key, in input order
    #[serde(default)]
    pub layers: IndexMap<String, Layer>,
}

impl LayerTable {
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        Self {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            layers: IndexMap::new(),
        }
    }

    /// Add an entry keyed by its name
    pub fn add(&mut self, layer: Layer) {
        self.layers.insert(layer.name.clone(), layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }
}
