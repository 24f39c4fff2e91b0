//! Handle type for drawing records
//!
//! Handles in the input document are opaque strings (conventionally upper-case
//! hexadecimal, e.g. `"1C"`). The writer copies them verbatim; only the
//! optional handle strategies ever read them as numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque record identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Create a handle from its textual form
    pub fn new(value: impl Into<String>) -> Self {
        Handle(value.into())
    }

    /// Create a handle from a numeric value, formatted as upper-case hex
    pub fn from_value(value: u64) -> Self {
        Handle(format!("{:X}", value))
    }

    /// The handle text exactly as it appears in the document
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the handle as hexadecimal
    ///
    /// Returns `None` for empty or non-hex handles.
    pub fn value(&self) -> Option<u64> {
        u64::from_str_radix(&self.0, 16).ok()
    }

    /// The handle one past this one, if this handle is hexadecimal
    pub fn next(&self) -> Option<Handle> {
        self.value()
            .and_then(|v| v.checked_add(1))
            .map(Handle::from_value)
    }
}

impl From<&str> for Handle {
    fn from(value: &str) -> Self {
        Handle(value.to_string())
    }
}

impl From<String> for Handle {
    fn from(value: String) -> Self {
        Handle(value)
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Records that carry their own handle and the handle of their owner
/// (group codes 5 and 330).
pub trait ObjectHandles {
    /// This record's handle
    fn handle(&self) -> &Handle;

    /// The owning record's handle
    fn owner_handle(&self) -> &Handle;
}
