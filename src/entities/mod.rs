//! ENTITIES section: drawing entities
//!
//! Entities are tagged by their `type` field. `LWPOLYLINE` is written;
//! `POLYLINE` and `VERTEX` are recognized and kept but produce no output, and
//! any other tag is carried as [`UnsupportedEntity`].

use crate::types::{Handle, ObjectHandles};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

pub mod lwpolyline;
pub mod polyline;

pub use lwpolyline::{LwPolyline, PolylineFlags};
pub use polyline::{Polyline, Vertex};

/// Type tag of a lightweight polyline
pub const LWPOLYLINE: &str = "LWPOLYLINE";
/// Type tag of a heavyweight polyline
pub const POLYLINE: &str = "POLYLINE";
/// Type tag of a polyline vertex
pub const VERTEX: &str = "VERTEX";

/// Whether a type tag names a lightweight polyline
pub fn is_lwpolyline(type_tag: &str) -> bool {
    type_tag == LWPOLYLINE
}

/// Whether a type tag names a heavyweight polyline
pub fn is_polyline(type_tag: &str) -> bool {
    type_tag == POLYLINE
}

/// Whether a type tag names a polyline vertex
pub fn is_vertex(type_tag: &str) -> bool {
    type_tag == VERTEX
}

/// An entity whose type tag the writer does not know
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsupportedEntity {
    pub type_tag: String,
    pub handle: Handle,
    pub owner_handle: Handle,
}

/// A drawing entity
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    LwPolyline(LwPolyline),
    Polyline(Polyline),
    Vertex(Vertex),
    Unsupported(UnsupportedEntity),
}

impl Entity {
    /// The entity's `type` tag
    pub fn type_tag(&self) -> &str {
        match self {
            Entity::LwPolyline(_) => LWPOLYLINE,
            Entity::Polyline(_) => POLYLINE,
            Entity::Vertex(_) => VERTEX,
            Entity::Unsupported(e) => &e.type_tag,
        }
    }

    /// Whether the ENTITIES writer emits anything for this entity
    pub fn is_encoded(&self) -> bool {
        matches!(self, Entity::LwPolyline(_))
    }

    pub fn as_lwpolyline(&self) -> Option<&LwPolyline> {
        match self {
            Entity::LwPolyline(e) => Some(e),
            _ => None,
        }
    }
}

impl ObjectHandles for Entity {
    fn handle(&self) -> &Handle {
        match self {
            Entity::LwPolyline(e) => &e.handle,
            Entity::Polyline(e) => &e.handle,
            Entity::Vertex(e) => &e.handle,
            Entity::Unsupported(e) => &e.handle,
        }
    }

    fn owner_handle(&self) -> &Handle {
        match self {
            Entity::LwPolyline(e) => &e.owner_handle,
            Entity::Polyline(e) => &e.owner_handle,
            Entity::Vertex(e) => &e.owner_handle,
            Entity::Unsupported(e) => &e.owner_handle,
        }
    }
}

impl From<LwPolyline> for Entity {
    fn from(value: LwPolyline) -> Self {
        Entity::LwPolyline(value)
    }
}

impl From<Polyline> for Entity {
    fn from(value: Polyline) -> Self {
        Entity::Polyline(value)
    }
}

impl From<Vertex> for Entity {
    fn from(value: Vertex) -> Self {
        Entity::Vertex(value)
    }
}

fn handle_field(value: &Value, key: &str) -> Handle {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(Handle::from)
        .unwrap_or_default()
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let type_tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?
            .to_string();

        if is_lwpolyline(&type_tag) {
            serde_json::from_value(value)
                .map(Entity::LwPolyline)
                .map_err(de::Error::custom)
        } else if is_polyline(&type_tag) {
            serde_json::from_value(value)
                .map(Entity::Polyline)
                .map_err(de::Error::custom)
        } else if is_vertex(&type_tag) {
            serde_json::from_value(value)
                .map(Entity::Vertex)
                .map_err(de::Error::custom)
        } else {
            Ok(Entity::Unsupported(UnsupportedEntity {
                handle: handle_field(&value, "handle"),
                owner_handle: handle_field(&value, "ownerHandle"),
                type_tag,
            }))
        }
    }
}
