//! Line type table entry

use super::TableEntry;
use crate::types::Handle;
use indexmap::IndexMap;
use serde::Deserialize;

/// A line type table entry
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineType {
    /// Line type name
    pub name: String,
    /// Descriptive text (group code 3)
    pub description: String,
    /// Total pattern length (group code 40)
    pub pattern_length: f64,
}

impl LineType {
    /// Create a new line type with an empty pattern
    pub fn new(name: impl Into<String>) -> Self {
        LineType {
            name: name.into(),
            description: String::new(),
            pattern_length: 0.0,
        }
    }

    /// Create the standard "Continuous" line type
    pub fn continuous() -> Self {
        LineType {
            description: "Solid line".to_string(),
            ..Self::new("Continuous")
        }
    }
}

impl TableEntry for LineType {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The LTYPE table container
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTypeTable {
    pub handle: Handle,
    pub owner_handle: Handle,
    /// Entries keyed by an arbitrary map key, in input order
    #[serde(default)]
    pub line_types: IndexMap<String, LineType>,
}

impl LineTypeTable {
    pub fn new(handle: impl Into<Handle>, owner_handle: impl Into<Handle>) -> Self {
        Self {
            handle: handle.into(),
            owner_handle: owner_handle.into(),
            line_types: IndexMap::new(),
        }
    }

    /// Add an entry keyed by its name
    pub fn add(&mut self, line_type: LineType) {
        self.line_types.insert(line_type.name.clone(), line_type);
    }

    pub fn len(&self) -> usize {
        self.line_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineType> {
        self.line_types.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_type_from_json() {
        let lt: LineType = serde_json::from_str(
            r#"{"name": "Continuous", "description": "Solid line", "patternLength": 0}"#,
        )
        .unwrap();
        assert_eq!(lt, LineType::continuous());
    }

    #[test]
    fn test_map_order_preserved() {
        let table: LineTypeTable = serde_json::from_str(
            r#"{
                "handle": "5", "ownerHandle": "0",
                "lineTypes": {
                    "Dashed": {"name": "DASHED", "description": "__ __", "patternLength": 0.75},
                    "ByBlock": {"name": "ByBlock", "description": "", "patternLength": 0}
                }
            }"#,
        )
        .unwrap();
        let names: Vec<_> = table.iter().map(|lt| lt.name()).collect();
        assert_eq!(names, vec!["DASHED", "ByBlock"]);
    }
}
