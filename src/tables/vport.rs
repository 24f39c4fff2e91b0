//! Viewport table entry

use super::TableEntry;
use crate::types::{Handle, Point2, Point3};
use serde::Deserialize;

/// A viewport table entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Viewport name
    pub name: String,
    /// Owner as recorded in the source drawing; records are written as
    /// owned by their table
    #[serde(default)]
    pub owner_handle: Option<Handle>,
    pub lower_left_corner: Point2,
    pub upper_right_corner: Point2,
    pub center: Point2,
    pub snap_base_point: Point2,
    pub snap_spacing: Point2,
    pub grid_spacing: Point2,
    pub view_direction_from_target: Point3,
    pub view_target: Point3,
    /// View height (group code 40), written only when present
    #[serde(default)]
    pub view_height: Option<f64>,
    /// Viewport aspect ratio (group code 41), written only when present
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    pub lens_length: f64,
    pub front_clipping_plane: f64,
    pub back_clipping_plane: f64,
    pub snap_rotation_angle: f64,
    pub view_twist_angle: f64,
    pub render_mode: i16,
    pub ucs_origin: Point3,
    pub ucs_x_axis: Point3,
    pub ucs_y_axis: Point3,
    pub orthographic_type: i16,
    pub default_lighting_on: bool,
    pub ambient_color: i16,
}

impl Viewport {
    /// Create a new viewport looking down the Z axis
    pub fn new(name: impl Into<String>) -> Self {
        Viewport {
            name: name.into(),
            owner_handle: None,
            lower_left_corner: Point2::ZERO,
            upper_right_corner: Point2::new(1.0, 1.0),
            center: Point2::ZERO,
            snap_base_point: Point2::ZERO,
            snap_spacing: Point2::new(0.5, 0.5),
            grid_spacing: Point2::new(0.5, 0.5),
            view_direction_from_target: Point3::new(0.0, 0.0, 1.0),
            view_target: Point3::ZERO,
            view_height: None,
            aspect_ratio: None,
            lens_length: 50.0,
            front_clipping_plane: 0.0,
            back_clipping_plane: 0.0,
            snap_rotation_angle: 0.0,
            view_twist_angle: 0.0,
            render_mode: 0,
            ucs_origin: Point3::ZERO,
            ucs_x_axis: Point3::new(1.0, 0.0, 0.0),
            ucs_y_axis: Point3::new(0.0, 1.0, 0.0),
            orthographic_type: 0,
            default_lighting_on: true,
            ambient_color: 250,
        }
    }

    /// Create the standard "*Active" viewport
    pub fn active() -> Self {
        Self::new("*Active")
    }
}

impl TableEntry for Viewport {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The VPORT table container
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTable {
    pub handle: Handle,
    pub owner_handle: Handle,
    #[serde(rename = "viewPorts", default)]
    pub viewports: Vec<Viewport>,
}

impl ViewportTable {
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        Self {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            viewports: Vec::new(),
        }
    }

    pub fn add(&mut self, viewport: Viewport) {
        self.viewports.push(viewport);
    }

    pub fn len(&self) -> usize {
        self.viewports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewports.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Viewport> {
        self.viewports.iter()
    }
}
