//! DXF section writers
//!
//! One method per section: HEADER, TABLES, BLOCKS and ENTITIES. Each writes
//! its framing markers and records to the underlying [`DxfStreamWriter`] and
//! records anything it had to skip in the notification collection.

use crate::blocks::{is_model_space, Block, BlockMap};
use crate::entities::{Entity, LwPolyline};
use crate::header::{Header, HeaderValue};
use crate::io::dxf::group_codes::{group_codes_for, GroupCodes};
use crate::io::dxf::markers;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{Layer, LayerTable, LineType, LineTypeTable, Tables, Viewport, ViewportTable};
use crate::types::{Handle, ObjectHandles};
use std::fmt::Display;

use super::configuration::{
    BlockEndHandle, DxfWriterConfiguration, OutputLayout, RecordHandleAllocator, RecordHandles,
    SymbolTable,
};
use super::stream_writer::{format_double, DxfStreamWriter, DxfStreamWriterExt};

/// Writes all DXF sections
pub struct SectionWriter<'a, W: DxfStreamWriter> {
    writer: &'a mut W,
    configuration: &'a DxfWriterConfiguration,
    notifications: &'a mut NotificationCollection,
}

impl<'a, W: DxfStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(
        writer: &'a mut W,
        configuration: &'a DxfWriterConfiguration,
        notifications: &'a mut NotificationCollection,
    ) -> Self {
        Self {
            writer,
            configuration,
            notifications,
        }
    }

    /// Write the HEADER section
    ///
    /// Variables are written in declared order, whatever order the input
    /// had them in.
    pub fn write_header(&mut self, header: &Header) {
        tracing::debug!(variables = header.len(), "writing HEADER section");
        self.writer.write_section_start(markers::HEADER);

        for (key, value) in header.declared() {
            let Some(codes) = group_codes_for(key) else {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!("header variable {} has no group code", key),
                );
                continue;
            };

            if !value.fits(codes) {
                self.notifications.notify(
                    NotificationType::Warning,
                    format!("header variable {} is not a {}; skipped", key, codes.expected()),
                );
                continue;
            }

            let fields: Vec<(i32, String)> = match (codes, value) {
                (GroupCodes::Scalar(code), value) => value
                    .scalar_text()
                    .map(|text| vec![(code, text)])
                    .unwrap_or_default(),
                (GroupCodes::Pair(x, y), HeaderValue::Point2(point)) => {
                    vec![(x, format_double(point.x)), (y, format_double(point.y))]
                }
                (GroupCodes::Pair(x, y), HeaderValue::Point3(point)) => {
                    vec![(x, format_double(point.x)), (y, format_double(point.y))]
                }
                (GroupCodes::Triplet(x, y, z), HeaderValue::Point3(point)) => vec![
                    (x, format_double(point.x)),
                    (y, format_double(point.y)),
                    (z, format_double(point.z)),
                ],
                _ => Vec::new(),
            };

            let layout = self.configuration.layout;
            self.write_header_variable(key, |w| {
                for (code, text) in fields {
                    w.write_line(layout.format_header_code(code));
                    w.write_line(text);
                }
            });
        }

        for key in header.unknown_keys() {
            self.notifications.notify(
                NotificationType::NotSupported,
                format!("header variable {} is not a known DXF variable; skipped", key),
            );
        }

        self.writer.write_section_end();
    }

    /// Write a header variable with its group 9 name
    fn write_header_variable<F>(&mut self, name: &str, f: F)
    where
        F: FnOnce(&mut W),
    {
        self.writer.write_string(9, name);
        f(self.writer);
    }

    /// Write the TABLES section
    pub fn write_tables(&mut self, tables: &Tables) {
        tracing::debug!("writing TABLES section");
        self.writer.write_section_start(markers::TABLES);

        if let Some(table) = &tables.viewport {
            self.write_vport_table(table);
        }
        if let Some(table) = &tables.line_type {
            self.write_ltype_table(table);
        }
        if let Some(table) = &tables.layer {
            self.write_layer_table(table);
        }

        self.writer.write_section_end();
    }

    fn write_table_start<T: ObjectHandles>(&mut self, table: SymbolTable, container: &T, count: i16) {
        let layout = self.configuration.layout;
        self.writer.write_marker(markers::TABLE);
        self.writer.write_marker(table.table_marker());
        self.writer.write_handle_pair(container);
        match (layout, table) {
            (OutputLayout::Aligned, _) => {
                self.writer.write_marker(markers::AC_DB_SYMBOL_TABLE);
                self.writer.write_short(layout, 70, count);
            }
            (OutputLayout::Reference, SymbolTable::Layer) => {
                self.writer.write_marker(markers::REFERENCE_SYMBOL_TABLE);
                self.writer.write_line(layout.format_short(count));
            }
            (OutputLayout::Reference, _) => {
                self.writer.write_marker(markers::REFERENCE_BLANK_SYMBOL_TABLE);
            }
        }
    }

    /// Convert a record count to an integer field, clamping to `max`
    fn count_value<T>(&mut self, what: &str, handle: &Handle, len: usize, max: T) -> T
    where
        T: TryFrom<usize> + Display + Copy,
    {
        T::try_from(len).unwrap_or_else(|_| {
            self.notifications.notify_record(
                NotificationType::Warning,
                handle,
                format!("{} count {} does not fit its field; written as {}", what, len, max),
            );
            max
        })
    }

    fn write_table_end(&mut self) {
        self.writer.write_marker(markers::END_TABLE);
    }

    /// Pick the record handle source for one table
    fn record_handles(&mut self, table: SymbolTable, container: &Handle) -> RecordHandleAllocator {
        match self.configuration.record_handles {
            RecordHandles::Fixed => RecordHandleAllocator::fixed(table),
            RecordHandles::Sequential => RecordHandleAllocator::sequential(table, container)
                .unwrap_or_else(|| {
                    self.notifications.notify(
                        NotificationType::Warning,
                        format!(
                            "{} table handle {} is not hexadecimal; using fixed record handles",
                            table.name(),
                            container
                        ),
                    );
                    RecordHandleAllocator::fixed(table)
                }),
        }
    }

    /// Common record prefix: record marker, handles and subclass markers
    fn write_record_start(&mut self, table: SymbolTable, handle: &Handle, container: &Handle) {
        self.writer.write_marker(table.record_marker());
        self.writer.write_handle(5, handle);
        self.writer.write_handle(330, container);
        self.writer.write_marker(markers::AC_DB_SYMBOL_TABLE_RECORD);
        self.writer.write_marker(table.record_subclass(self.configuration.layout));
    }

    fn write_vport_table(&mut self, table: &ViewportTable) {
        let kind = SymbolTable::Viewport;
        let mut handles = self.record_handles(kind, &table.handle);

        self.write_table_start(kind, table, 1);
        for vport in table.iter() {
            let handle = handles.next_handle();
            self.write_record_start(kind, &handle, &table.handle);
            self.write_vport(vport);
        }
        self.write_table_end();
    }

    fn write_vport(&mut self, vport: &Viewport) {
        let layout = self.configuration.layout;
        let w = &mut *self.writer;
        w.write_string(2, &vport.name);
        w.write_short(layout, 70, 0);

        w.write_point2d(10, 20, vport.lower_left_corner);
        w.write_point2d(11, 21, vport.upper_right_corner);
        w.write_point2d(12, 22, vport.center);
        w.write_point2d(13, 23, vport.snap_base_point);
        w.write_point2d(14, 24, vport.snap_spacing);
        w.write_point2d(15, 25, vport.grid_spacing);
        w.write_point3d(16, 26, 36, vport.view_direction_from_target);
        w.write_point3d(17, 27, 37, vport.view_target);

        if let Some(height) = vport.view_height {
            w.write_double(40, height);
        }
        if let Some(ratio) = vport.aspect_ratio {
            w.write_double(41, ratio);
        }
        w.write_double(42, vport.lens_length);
        w.write_double(43, vport.front_clipping_plane);
        w.write_double(44, vport.back_clipping_plane);
        w.write_double(50, vport.snap_rotation_angle);
        w.write_double(51, vport.view_twist_angle);
        w.write_short(layout, 281, vport.render_mode);

        w.write_point3d(110, 120, 130, vport.ucs_origin);
        w.write_point3d(111, 121, 131, vport.ucs_x_axis);
        let (y_x, y_y, y_z) = layout.ucs_y_axis_codes();
        w.write_point3d(y_x, y_y, y_z, vport.ucs_y_axis);
        w.write_short(layout, 79, vport.orthographic_type);

        if vport.default_lighting_on {
            w.write_bool(292, true);
        }
        w.write_code(63);
        w.write_line(layout.format_ambient_color(vport.ambient_color));
    }

    fn write_ltype_table(&mut self, table: &LineTypeTable) {
        let kind = SymbolTable::LineType;
        let mut handles = self.record_handles(kind, &table.handle);

        self.write_table_start(kind, table, 1);
        for line_type in table.iter() {
            let handle = handles.next_handle();
            self.write_record_start(kind, &handle, &table.handle);
            self.write_ltype(line_type);
        }
        self.write_table_end();
    }

    fn write_ltype(&mut self, line_type: &LineType) {
        let layout = self.configuration.layout;
        let w = &mut *self.writer;
        w.write_string(2, &line_type.name);
        w.write_short(layout, 70, 0);
        w.write_string(3, &line_type.description);
        // Alignment code, always 'A'
        w.write_i16(72, 65);
        w.write_short(layout, 73, 0);
        w.write_double(40, line_type.pattern_length);
    }

    fn write_layer_table(&mut self, table: &LayerTable) {
        let kind = SymbolTable::Layer;
        let mut handles = self.record_handles(kind, &table.handle);
        let count = self.count_value("LAYER record", &table.handle, table.len(), i16::MAX);

        self.write_table_start(kind, table, count);
        for layer in table.iter() {
            let handle = handles.next_handle();
            self.write_record_start(kind, &handle, &table.handle);
            self.write_layer(layer);
        }
        self.write_table_end();
    }

    fn write_layer(&mut self, layer: &Layer) {
        let layout = self.configuration.layout;
        let w = &mut *self.writer;
        w.write_string(2, &layer.name);
        w.write_short(layout, 70, layer.flags().bits());
        w.write_short(layout, 62, layer.color_number());
        w.write_string(6, "Continuous");
        // Lineweight: default
        w.write_i16(370, -3);
        w.write_string(390, "F");
        w.write_string(347, "3E");
        w.write_string(348, "0");
    }

    /// Write the BLOCKS section
    pub fn write_blocks(&mut self, blocks: &BlockMap) {
        tracing::debug!(blocks = blocks.len(), "writing BLOCKS section");
        self.writer.write_section_start(markers::BLOCKS);

        for block in blocks.values() {
            self.write_block(block);
        }

        self.writer.write_section_end();
    }

    fn write_block(&mut self, block: &Block) {
        let layout = self.configuration.layout;
        let paper_space = !is_model_space(&block.name);

        self.writer.write_marker(markers::BLOCK);
        self.writer.write_handle_pair(block);
        self.writer.write_marker(markers::AC_DB_ENTITY);
        if paper_space {
            self.writer.write_short(layout, 67, 1);
        }
        self.writer.write_string(8, &block.layer);
        self.writer.write_marker(markers::AC_DB_BLOCK_BEGIN);
        self.writer.write_string(2, &block.name);
        self.writer.write_short(layout, 70, 0);
        self.writer.write_point3d(10, 20, 30, block.position);
        self.writer.write_string(3, &block.name2);
        self.writer.write_string(1, &block.xref_path);

        let end_handle = self.block_end_handle(block);
        self.writer.write_marker(markers::END_BLOCK);
        self.writer.write_handle(5, &end_handle);
        self.writer.write_handle(330, &block.owner_handle);
        if paper_space {
            self.writer.write_short(layout, 67, 1);
        }
        self.writer.write_string(8, &block.layer);
        self.writer.write_marker(markers::AC_DB_BLOCK_END);
    }

    fn block_end_handle(&mut self, block: &Block) -> Handle {
        match self.configuration.block_end_handle {
            BlockEndHandle::Reuse => block.handle.clone(),
            BlockEndHandle::Increment => block.handle.next().unwrap_or_else(|| {
                self.notifications.notify_record(
                    NotificationType::Warning,
                    &block.handle,
                    format!("block {} handle is not hexadecimal; ENDBLK reuses it", block.name),
                );
                block.handle.clone()
            }),
        }
    }

    /// Write the ENTITIES section
    pub fn write_entities(&mut self, entities: &[Entity]) {
        tracing::debug!(entities = entities.len(), "writing ENTITIES section");
        self.writer.write_section_start(markers::ENTITIES);

        for entity in entities {
            match entity {
                Entity::LwPolyline(polyline) => self.write_lwpolyline(polyline),
                other => self.notifications.notify_record(
                    NotificationType::NotImplemented,
                    other.handle(),
                    format!("{} entity is not written", other.type_tag()),
                ),
            }
        }

        self.writer.write_section_end();
    }

    fn write_lwpolyline(&mut self, polyline: &LwPolyline) {
        let layout = self.configuration.layout;
        let vertex_count =
            self.count_value("LWPOLYLINE vertex", &polyline.handle, polyline.vertex_count(), i32::MAX);
        let w = &mut *self.writer;
        w.write_marker(markers::LWPOLYLINE);
        w.write_handle_pair(polyline);
        w.write_marker(markers::AC_DB_ENTITY);
        w.write_string(8, &polyline.layer);
        w.write_marker(markers::AC_DB_POLYLINE);
        w.write_long(layout, 90, vertex_count);
        w.write_short(layout, 70, polyline.flags().bits());
        // Constant width
        w.write_string(43, "0.0");
        for vertex in &polyline.vertices {
            w.write_point2d(10, 20, *vertex);
        }
    }
}
