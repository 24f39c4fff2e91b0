//! Polyline entity and its vertex sub-entities
//!
//! These are read so that documents containing them load, but the ENTITIES
//! writer does not emit them.

use crate::types::{Handle, Point3};
use serde::Deserialize;

/// A polyline vertex sub-entity
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    pub handle: Handle,
    pub owner_handle: Handle,
    /// Vertex location, flattened as `x`/`y`/`z`
    #[serde(flatten)]
    pub location: Point3,
}

impl Vertex {
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>, location: Point3) -> Self {
        Vertex {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            location,
        }
    }
}

/// A heavyweight polyline made of vertex sub-entities
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub handle: Handle,
    pub owner_handle: Handle,
    #[serde(default)]
    pub layer: String,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub shape: bool,
}

impl Polyline {
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        Polyline {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            layer: "0".to_string(),
            vertices: Vec::new(),
            shape: false,
        }
    }

    /// Add a vertex
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }
}
