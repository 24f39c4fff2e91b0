//! Lightweight polyline entity (2D polyline)

use crate::types::{Handle, ObjectHandles, Point2};
use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Polyline flags (group code 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PolylineFlags: i16 {
        /// Closed polyline
        const CLOSED = 1;
    }
}

/// A lightweight (2D) polyline entity
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LwPolyline {
    pub handle: Handle,
    pub owner_handle: Handle,
    pub layer: String,
    /// Vertices of the polyline
    pub vertices: Vec<Point2>,
    /// Is the polyline closed?
    #[serde(default)]
    pub shape: bool,
}

impl LwPolyline {
    /// Create a new empty open polyline on layer "0"
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        LwPolyline {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            layer: "0".to_string(),
            vertices: Vec::new(),
            shape: false,
        }
    }

    /// Create a polyline through the given points
    pub fn from_points(
        handle: impl Into<Handle>,
        owner_handle: impl Into<Handle>,
        points: impl IntoIterator<Item = Point2>,
    ) -> Self {
        let mut poly = Self::new(handle, owner_handle);
        poly.vertices.extend(points);
        poly
    }

    /// Add a vertex
    pub fn add_point(&mut self, point: Point2) {
        self.vertices.push(point);
    }

    /// Builder: Close the polyline
    pub fn closed(mut self) -> Self {
        self.shape = true;
        self
    }

    /// Builder: Set the layer
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn flags(&self) -> PolylineFlags {
        let mut flags = PolylineFlags::empty();
        flags.set(PolylineFlags::CLOSED, self.shape);
        flags
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl ObjectHandles for LwPolyline {
    fn handle(&self) -> &Handle {
        &self.handle
    }

    fn owner_handle(&self) -> &Handle {
        &self.owner_handle
    }
}
