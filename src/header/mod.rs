//! HEADER section variables
//!
//! The header is a map from `$`-prefixed variable names to values whose
//! type depends on the variable. Keys keep the order they had in the input,
//! but the writer emits them in [`variables::HEADER_VARIABLES`] order.

pub mod variables;

use crate::error::{DxfError, Result};
use crate::io::dxf::group_codes::{group_codes_for, GroupCodes};
use crate::types::{Point2, Point3};
use indexmap::IndexMap;
use serde::Deserialize;

pub use variables::{is_header_variable, HEADER_VARIABLES};

/// Value of one header variable
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Flag(bool),
    Number(f64),
    Text(String),
    Point3(Point3),
    Point2(Point2),
}

impl HeaderValue {
    /// Text written under a single group code, `None` for points
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            HeaderValue::Flag(value) => Some(if *value { "1" } else { "0" }.to_string()),
            HeaderValue::Number(value) => Some(format!("{}", value)),
            HeaderValue::Text(value) => Some(value.clone()),
            HeaderValue::Point2(_) | HeaderValue::Point3(_) => None,
        }
    }

    /// Whether this value can be written under the given shape
    pub fn fits(&self, codes: GroupCodes) -> bool {
        match codes {
            GroupCodes::Scalar(_) => self.scalar_text().is_some(),
            GroupCodes::Pair(..) => matches!(self, HeaderValue::Point2(_) | HeaderValue::Point3(_)),
            GroupCodes::Triplet(..) => matches!(self, HeaderValue::Point3(_)),
        }
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Flag(value)
    }
}

impl From<f64> for HeaderValue {
    fn from(value: f64) -> Self {
        HeaderValue::Number(value)
    }
}

impl From<i32> for HeaderValue {
    fn from(value: i32) -> Self {
        HeaderValue::Number(f64::from(value))
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::Text(value)
    }
}

impl From<Point2> for HeaderValue {
    fn from(value: Point2) -> Self {
        HeaderValue::Point2(value)
    }
}

impl From<Point3> for HeaderValue {
    fn from(value: Point3) -> Self {
        HeaderValue::Point3(value)
    }
}

/// The document header
///
/// `null` values in the input are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, Option<HeaderValue>>")]
pub struct Header {
    values: IndexMap<String, HeaderValue>,
}

impl From<IndexMap<String, Option<HeaderValue>>> for Header {
    fn from(raw: IndexMap<String, Option<HeaderValue>>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();
        Header { values }
    }
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<HeaderValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`Header::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<HeaderValue> {
        self.values.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Present variables in declared output order
    pub fn declared(&self) -> impl Iterator<Item = (&'static str, &HeaderValue)> {
        HEADER_VARIABLES
            .iter()
            .filter_map(move |key| self.values.get(*key).map(|value| (*key, value)))
    }

    /// Keys in the input that are not declared header variables
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !is_header_variable(key))
    }

    /// `$ACADVER`, if present as text
    pub fn version(&self) -> Option<&str> {
        match self.get("$ACADVER") {
            Some(HeaderValue::Text(version)) => Some(version),
            _ => None,
        }
    }

    /// `$DWGCODEPAGE`, if present as text
    pub fn code_page(&self) -> Option<&str> {
        match self.get("$DWGCODEPAGE") {
            Some(HeaderValue::Text(code_page)) => Some(code_page),
            _ => None,
        }
    }

    /// Check every known variable's value against its group-code shape
    ///
    /// Unknown keys are not an error; the writer skips them.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in self.declared() {
            if let Some(codes) = group_codes_for(key) {
                if !value.fits(codes) {
                    return Err(DxfError::InvalidHeaderValue {
                        key: key.to_string(),
                        expected: codes.expected(),
                    });
                }
            }
        }
        Ok(())
    }
}
