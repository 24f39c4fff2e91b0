//! DXF stream writer trait and the token-sequence sink

use super::configuration::OutputLayout;
use crate::io::dxf::markers;
use crate::types::{Handle, ObjectHandles, Point2, Point3};

/// Format a group code right-aligned in a three-character field
pub fn format_code(code: i32) -> String {
    format!("{:>3}", code)
}

/// Format a 16-bit integer right-aligned in a six-character field
pub fn format_i16(value: i16) -> String {
    format!("{:>6}", value)
}

/// Format a 32-bit integer right-aligned in a nine-character field
pub fn format_i32(value: i32) -> String {
    format!("{:>9}", value)
}

/// Format a real value in its shortest decimal form (`0`, `1.5`, `-12.25`)
pub fn format_double(value: f64) -> String {
    format!("{}", value)
}

/// Trait for writing DXF code/value pairs
///
/// Implementors only decide where lines go; the provided methods fix the
/// per-field formatting.
pub trait DxfStreamWriter {
    /// Write a structural marker (a fixed two-line literal) as one token
    fn write_marker(&mut self, marker: &str);

    /// Write one physical line (a group code or a value)
    fn write_line(&mut self, line: String);

    /// Write a group code line
    fn write_code(&mut self, code: i32) {
        self.write_line(format_code(code));
    }

    /// Write a code/value pair with a string value, copied verbatim
    fn write_string(&mut self, code: i32, value: &str) {
        self.write_code(code);
        self.write_line(value.to_string());
    }

    /// Write a 16-bit integer, right-aligned in a six-character field
    fn write_i16(&mut self, code: i32, value: i16) {
        self.write_code(code);
        self.write_line(format_i16(value));
    }

    /// Write a 32-bit integer, right-aligned in a nine-character field
    fn write_i32(&mut self, code: i32, value: i32) {
        self.write_code(code);
        self.write_line(format_i32(value));
    }

    /// Write a real value
    fn write_double(&mut self, code: i32, value: f64) {
        self.write_code(code);
        self.write_line(format_double(value));
    }

    /// Write a boolean flag as a 16-bit `1`/`0`
    fn write_bool(&mut self, code: i32, value: bool) {
        self.write_i16(code, i16::from(value));
    }

    /// Write a handle verbatim
    fn write_handle(&mut self, code: i32, handle: &Handle) {
        self.write_string(code, handle.as_str());
    }
}

/// Extension trait for the composite writes every section shares
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 2D point under explicit X/Y codes
    fn write_point2d(&mut self, x_code: i32, y_code: i32, point: Point2) {
        self.write_double(x_code, point.x);
        self.write_double(y_code, point.y);
    }

    /// Write a 3D point under explicit X/Y/Z codes
    fn write_point3d(&mut self, x_code: i32, y_code: i32, z_code: i32, point: Point3) {
        self.write_double(x_code, point.x);
        self.write_double(y_code, point.y);
        self.write_double(z_code, point.z);
    }

    /// Write a 16-bit integer padded the way `layout` pads it
    fn write_short(&mut self, layout: OutputLayout, code: i32, value: i16) {
        self.write_code(code);
        self.write_line(layout.format_short(value));
    }

    /// Write a 32-bit integer padded the way `layout` pads it
    fn write_long(&mut self, layout: OutputLayout, code: i32, value: i32) {
        self.write_code(code);
        self.write_line(layout.format_long(value));
    }

    /// Write a record's own handle (5) followed by its owner handle (330)
    fn write_handle_pair<R: ObjectHandles + ?Sized>(&mut self, record: &R) {
        self.write_handle(5, record.handle());
        self.write_handle(330, record.owner_handle());
    }

    /// Write section start
    fn write_section_start(&mut self, name_marker: &str) {
        self.write_marker(markers::SECTION);
        self.write_marker(name_marker);
    }

    /// Write section end
    fn write_section_end(&mut self) {
        self.write_marker(markers::END_SECTION);
    }

    /// Write end of file
    fn write_eof(&mut self) {
        self.write_marker(markers::EOF);
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: DxfStreamWriter> DxfStreamWriterExt for T {}

/// Collects the emitted tokens in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenWriter {
    tokens: Vec<String>,
}

impl TokenWriter {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// The tokens written so far
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Consume the writer, returning the token sequence
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl DxfStreamWriter for TokenWriter {
    fn write_marker(&mut self, marker: &str) {
        self.tokens.push(marker.to_string());
    }

    fn write_line(&mut self, line: String) {
        self.tokens.push(line);
    }
}
