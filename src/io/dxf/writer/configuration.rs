//! DXF writer configuration

use super::stream_writer::{format_code, format_i16, format_i32};
use crate::io::dxf::markers;
use crate::types::Handle;

/// Field padding and record layout of the emitted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Reproduces existing output byte for byte. Header group codes carry a
    /// single leading space (` 1`, ` 10`, ` 290`). Integer values carry a
    /// fixed prefix: five spaces for 16-bit fields, eight for the vertex
    /// count and three for the viewport ambient color. Table headers are
    /// written without their `100` line, viewport records repeat
    /// `AcDbSymbolTableRecord` as their subclass, and the UCS Y axis reuses
    /// codes 110/120/130.
    #[default]
    Reference,
    /// Group codes right-aligned to three characters, 16-bit integers to six
    /// and 32-bit integers to nine. Table headers carry `100 AcDbSymbolTable`,
    /// viewport records use `AcDbViewportTableRecord` and the UCS Y axis is
    /// written under 112/122/132.
    Aligned,
}

impl OutputLayout {
    /// Group code line of a header variable
    pub fn format_header_code(self, code: i32) -> String {
        match self {
            OutputLayout::Reference => format!(" {}", code),
            OutputLayout::Aligned => format_code(code),
        }
    }

    /// Value line of a 16-bit integer field
    pub fn format_short(self, value: i16) -> String {
        match self {
            OutputLayout::Reference => format!("     {}", value),
            OutputLayout::Aligned => format_i16(value),
        }
    }

    /// Value line of a 32-bit integer field
    pub fn format_long(self, value: i32) -> String {
        match self {
            OutputLayout::Reference => format!("        {}", value),
            OutputLayout::Aligned => format_i32(value),
        }
    }

    /// Value line of the viewport ambient color (group 63)
    pub fn format_ambient_color(self, value: i16) -> String {
        match self {
            OutputLayout::Reference => format!("   {}", value),
            OutputLayout::Aligned => format_i16(value),
        }
    }

    /// Codes of the viewport UCS Y axis
    pub fn ucs_y_axis_codes(self) -> (i32, i32, i32) {
        match self {
            OutputLayout::Reference => (110, 120, 130),
            OutputLayout::Aligned => (112, 122, 132),
        }
    }
}

/// How symbol-table records get their own handle (group code 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordHandles {
    /// Every record of a table shares one literal handle: `29` for VPORT,
    /// `14` for LTYPE and `10` for LAYER. Matches existing output byte for
    /// byte, at the cost of duplicate handles in multi-record tables.
    #[default]
    Fixed,
    /// Records are numbered consecutively in hex starting one past the
    /// table's own handle.
    Sequential,
}

/// Which handle the ENDBLK half of a block definition carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockEndHandle {
    /// Repeat the BLOCK handle
    #[default]
    Reuse,
    /// BLOCK handle plus one (`1C` -> `1D`)
    Increment,
}

/// DXF writer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DxfWriterConfiguration {
    /// Handle strategy for VPORT/LTYPE/LAYER records.
    ///
    /// Default: [`RecordHandles::Fixed`].
    pub record_handles: RecordHandles,

    /// Handle strategy for ENDBLK.
    ///
    /// Default: [`BlockEndHandle::Reuse`].
    pub block_end_handle: BlockEndHandle,

    /// When `true`, byte output for drawings older than AC1021 is encoded in
    /// the code page named by `$DWGCODEPAGE`; otherwise output is UTF-8.
    ///
    /// Default: `false`.
    pub transcode: bool,

    /// Field padding and record layout.
    ///
    /// Default: [`OutputLayout::Reference`].
    pub layout: OutputLayout,
}

impl DxfWriterConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record_handles(mut self, record_handles: RecordHandles) -> Self {
        self.record_handles = record_handles;
        self
    }

    pub fn with_block_end_handle(mut self, block_end_handle: BlockEndHandle) -> Self {
        self.block_end_handle = block_end_handle;
        self
    }

    pub fn with_transcode(mut self, transcode: bool) -> Self {
        self.transcode = transcode;
        self
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// The three symbol tables the writer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolTable {
    Viewport,
    LineType,
    Layer,
}

impl SymbolTable {
    /// DXF table name
    pub fn name(&self) -> &'static str {
        match self {
            SymbolTable::Viewport => "VPORT",
            SymbolTable::LineType => "LTYPE",
            SymbolTable::Layer => "LAYER",
        }
    }

    /// Marker naming the table inside `TABLE`
    pub fn table_marker(&self) -> &'static str {
        match self {
            SymbolTable::Viewport => markers::VPORT_TABLE,
            SymbolTable::LineType => markers::LTYPE_TABLE,
            SymbolTable::Layer => markers::LAYER_TABLE,
        }
    }

    /// Marker opening each record of the table
    pub fn record_marker(&self) -> &'static str {
        match self {
            SymbolTable::Viewport => markers::VPORT,
            SymbolTable::LineType => markers::LTYPE,
            SymbolTable::Layer => markers::LAYER,
        }
    }

    /// Subclass marker specific to the table's records
    pub fn record_subclass(&self, layout: OutputLayout) -> &'static str {
        match self {
            SymbolTable::Viewport => match layout {
                OutputLayout::Reference => markers::AC_DB_SYMBOL_TABLE_RECORD,
                OutputLayout::Aligned => markers::AC_DB_VIEWPORT_TABLE_RECORD,
            },
            SymbolTable::LineType => markers::AC_DB_LINETYPE_TABLE_RECORD,
            SymbolTable::Layer => markers::AC_DB_LAYER_TABLE_RECORD,
        }
    }

    /// Literal record handle used by [`RecordHandles::Fixed`]
    pub fn fixed_record_handle(&self) -> &'static str {
        match self {
            SymbolTable::Viewport => "29",
            SymbolTable::LineType => "14",
            SymbolTable::Layer => "10",
        }
    }
}

/// Hands out record handles for one table
#[derive(Debug, Clone)]
pub struct RecordHandleAllocator {
    fixed: Handle,
    next: Option<u64>,
}

impl RecordHandleAllocator {
    /// Allocator that always returns the table's literal handle
    pub fn fixed(table: SymbolTable) -> Self {
        Self {
            fixed: Handle::new(table.fixed_record_handle()),
            next: None,
        }
    }

    /// Allocator counting up from `container + 1`
    ///
    /// Returns `None` when the container handle is not hexadecimal.
    pub fn sequential(table: SymbolTable, container: &Handle) -> Option<Self> {
        let start = container.value()?.checked_add(1)?;
        Some(Self {
            fixed: Handle::new(table.fixed_record_handle()),
            next: Some(start),
        })
    }

    /// Handle for the next record
    pub fn next_handle(&mut self) -> Handle {
        match self.next {
            Some(value) => {
                self.next = value.checked_add(1);
                Handle::from_value(value)
            }
            None => self.fixed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = DxfWriterConfiguration::default();
        assert_eq!(config.record_handles, RecordHandles::Fixed);
        assert_eq!(config.block_end_handle, BlockEndHandle::Reuse);
        assert!(!config.transcode);
        assert_eq!(config.layout, OutputLayout::Reference);
    }

    #[test]
    fn test_builder() {
        let config = DxfWriterConfiguration::new()
            .with_record_handles(RecordHandles::Sequential)
            .with_block_end_handle(BlockEndHandle::Increment)
            .with_transcode(true)
            .with_layout(OutputLayout::Aligned);
        assert_eq!(config.record_handles, RecordHandles::Sequential);
        assert_eq!(config.block_end_handle, BlockEndHandle::Increment);
        assert!(config.transcode);
        assert_eq!(config.layout, OutputLayout::Aligned);
    }

    #[test]
    fn test_reference_layout_prefixes() {
        let layout = OutputLayout::Reference;
        assert_eq!(layout.format_header_code(1), " 1");
        assert_eq!(layout.format_header_code(290), " 290");
        assert_eq!(layout.format_short(250), "     250");
        assert_eq!(layout.format_short(-3), "     -3");
        assert_eq!(layout.format_long(12), "        12");
        assert_eq!(layout.format_ambient_color(250), "   250");
        assert_eq!(layout.ucs_y_axis_codes(), (110, 120, 130));
    }

    #[test]
    fn test_aligned_layout_widths() {
        let layout = OutputLayout::Aligned;
        assert_eq!(layout.format_header_code(1), "  1");
        assert_eq!(layout.format_header_code(290), "290");
        assert_eq!(layout.format_short(250), "   250");
        assert_eq!(layout.format_long(12), "       12");
        assert_eq!(layout.format_ambient_color(250), "   250");
        assert_eq!(layout.ucs_y_axis_codes(), (112, 122, 132));
    }

    #[test]
    fn test_viewport_subclass_follows_layout() {
        assert_eq!(
            SymbolTable::Viewport.record_subclass(OutputLayout::Reference),
            markers::AC_DB_SYMBOL_TABLE_RECORD
        );
        assert_eq!(
            SymbolTable::Viewport.record_subclass(OutputLayout::Aligned),
            markers::AC_DB_VIEWPORT_TABLE_RECORD
        );
        assert_eq!(
            SymbolTable::Layer.record_subclass(OutputLayout::Reference),
            markers::AC_DB_LAYER_TABLE_RECORD
        );
    }

    #[test]
    fn test_fixed_allocator_repeats() {
        let mut alloc = RecordHandleAllocator::fixed(SymbolTable::Layer);
        assert_eq!(alloc.next_handle(), Handle::new("10"));
        assert_eq!(alloc.next_handle(), Handle::new("10"));
    }

    #[test]
    fn test_sequential_allocator_counts_from_container() {
        let mut alloc =
            RecordHandleAllocator::sequential(SymbolTable::LineType, &Handle::new("5")).unwrap();
        assert_eq!(alloc.next_handle(), Handle::new("6"));
        assert_eq!(alloc.next_handle(), Handle::new("7"));

        let mut alloc =
            RecordHandleAllocator::sequential(SymbolTable::Viewport, &Handle::new("F")).unwrap();
        assert_eq!(alloc.next_handle(), Handle::new("10"));
    }

    #[test]
    fn test_sequential_allocator_rejects_non_hex() {
        assert!(RecordHandleAllocator::sequential(SymbolTable::Layer, &Handle::new("root")).is_none());
    }

    #[test]
    fn test_symbol_table_literals() {
        assert_eq!(SymbolTable::Viewport.fixed_record_handle(), "29");
        assert_eq!(SymbolTable::LineType.fixed_record_handle(), "14");
        assert_eq!(SymbolTable::Layer.fixed_record_handle(), "10");
        assert_eq!(SymbolTable::Layer.name(), "LAYER");
    }
}
