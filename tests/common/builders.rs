//! Test document builders.

#![allow(dead_code)]

use dxf_json_writer::tables::{LayerTable, LineTypeTable, ViewportTable};
use dxf_json_writer::{
    Block, Document, Entity, Layer, LineType, LwPolyline, Point2, Point3, Viewport,
};

/// Three corners of the unit square.
pub fn triangle_points() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
    ]
}

/// A closed LWPOLYLINE through [`triangle_points`].
pub fn closed_triangle(handle: &str) -> Entity {
    LwPolyline::from_points(handle, "1F", triangle_points())
        .closed()
        .into()
}

/// A document with all three tables, model and paper space blocks and
/// one polyline.
pub fn create_drawing_document() -> Document {
    let mut doc = Document::new();

    doc.header.set("$ACADVER", "AC1024");
    doc.header.set("$DWGCODEPAGE", "ANSI_1252");
    doc.header.set("$INSBASE", Point3::ZERO);
    doc.header.set("$EXTMIN", Point3::new(0.0, 0.0, 0.0));
    doc.header.set("$EXTMAX", Point3::new(1.0, 1.0, 0.0));
    doc.header.set("$LIMMAX", Point2::new(420.0, 297.0));
    doc.header.set("$CLAYER", "0");

    let mut vports = ViewportTable::new("8", "0");
    vports.add(Viewport::active());
    doc.tables.viewport = Some(vports);

    let mut line_types = LineTypeTable::new("5", "0");
    line_types.add(LineType::new("ByBlock"));
    line_types.add(LineType::new("ByLayer"));
    line_types.add(LineType::continuous());
    doc.tables.line_type = Some(line_types);

    let mut layers = LayerTable::new("2", "0");
    layers.add(Layer::layer_0());
    doc.tables.layer = Some(layers);

    doc.blocks.insert(
        "*Model_Space".to_string(),
        Block::new("*Model_Space", "1F", "1C"),
    );
    doc.blocks.insert(
        "*Paper_Space".to_string(),
        Block::new("*Paper_Space", "1B", "1A"),
    );

    doc.entities.push(closed_triangle("2A"));
    doc
}
