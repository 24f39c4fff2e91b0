//! Encoding tests: section framing, record layouts and writer output.

mod common;

use common::builders::{closed_triangle, create_drawing_document, triangle_points};
use common::{contains_run, count, load_fixture, section, section_body, values_for_code};
use dxf_json_writer::entities::{Polyline, Vertex};
use dxf_json_writer::{
    encode_document, BlockEndHandle, Document, DxfWriter, DxfWriterConfiguration, Entity,
    LwPolyline, NotificationType, OutputLayout, Point2, Point3, RecordHandles,
};

// ===========================================================================
// Document framing
// ===========================================================================

#[test]
fn test_minimal_document_framing() {
    let tokens = encode_document(&load_fixture("minimal.json"));
    assert_eq!(
        tokens,
        [
            "  0\nSECTION", "  2\nHEADER", "  0\nENDSEC",
            "  0\nSECTION", "  2\nTABLES", "  0\nENDSEC",
            "  0\nSECTION", "  2\nBLOCKS", "  0\nENDSEC",
            "  0\nSECTION", "  2\nENTITIES", "  0\nENDSEC",
            "  0\nEOF",
        ]
    );
}

#[test]
fn test_sections_in_fixed_order() {
    let tokens = encode_document(&create_drawing_document());
    let names: Vec<_> = tokens
        .windows(2)
        .filter(|w| w[0] == "  0\nSECTION")
        .map(|w| w[1].as_str())
        .collect();
    assert_eq!(names, ["  2\nHEADER", "  2\nTABLES", "  2\nBLOCKS", "  2\nENTITIES"]);
    assert_eq!(tokens.last().map(String::as_str), Some("  0\nEOF"));
    assert_eq!(count(&tokens, "  0\nEOF"), 1);
}

#[test]
fn test_encoding_is_idempotent() {
    let doc = load_fixture("drawing.json");
    let first = DxfWriter::new(&doc).write_to_vec().unwrap();
    let second = DxfWriter::new(&doc).write_to_vec().unwrap();
    assert_eq!(first, second);
}

// ===========================================================================
// HEADER
// ===========================================================================

#[test]
fn test_header_from_fixture() {
    let doc = load_fixture("drawing.json");
    let tokens = encode_document(&doc);
    let body = section_body(&tokens, "HEADER");

    let names: Vec<_> = values_for_code(body, "  9");
    assert_eq!(
        names,
        [
            "$ACADVER", "$ACADMAINTVER", "$DWGCODEPAGE", "$INSBASE", "$EXTMIN", "$EXTMAX",
            "$LIMMIN", "$LIMMAX", "$ORTHOMODE", "$LTSCALE", "$CLAYER",
        ]
    );
    assert!(contains_run(body, &["  9", "$ACADMAINTVER", " 70", "6"]));
    assert!(contains_run(
        body,
        &["  9", "$EXTMAX", " 10", "100", " 20", "50", " 30", "0"]
    ));
    assert!(contains_run(body, &["  9", "$LIMMAX", " 10", "420", " 20", "297"]));
    assert!(contains_run(body, &["  9", "$ORTHOMODE", " 70", "0"]));
}

#[test]
fn test_header_null_and_unknown_keys_emit_nothing() {
    let doc = load_fixture("drawing.json");
    let encoded = DxfWriter::new(&doc).encode();
    let body = section_body(&encoded.tokens, "HEADER");
    assert_eq!(count(body, "$DIMFAC"), 0);
    assert_eq!(count(body, "$CUSTOMVAR"), 0);
    assert!(encoded
        .notifications
        .of_type(NotificationType::NotSupported)
        .iter()
        .any(|n| n.message.contains("$CUSTOMVAR")));
}

// ===========================================================================
// TABLES
// ===========================================================================

#[test]
fn test_tables_from_fixture() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "TABLES");

    assert_eq!(count(body, "  0\nTABLE"), 3);
    assert_eq!(count(body, "  0\nENDTAB"), 3);
    assert_eq!(count(body, "  0\nVPORT"), 1);
    assert_eq!(count(body, "  0\nLTYPE"), 3);
    assert_eq!(count(body, "  0\nLAYER"), 3);

    assert!(contains_run(
        body,
        &["  0\nTABLE", "  2\nLAYER", "  5", "2", "330", "0", "AcDbSymbolTable\n70", "     3"]
    ));
    assert!(contains_run(
        body,
        &["  0\nTABLE", "  2\nLTYPE", "  5", "5", "330", "0", "AcDbSymbolTable\n 70\n     1"]
    ));
}

#[test]
fn test_aligned_layout_tables() {
    let doc = load_fixture("drawing.json");
    let config = DxfWriterConfiguration::new().with_layout(OutputLayout::Aligned);
    let tokens = DxfWriter::with_configuration(&doc, config).encode().tokens;
    let body = section_body(&tokens, "TABLES");

    assert!(contains_run(
        body,
        &["  0\nTABLE", "  2\nLAYER", "  5", "2", "330", "0", "100\nAcDbSymbolTable", " 70", "     3"]
    ));
    assert!(contains_run(
        body,
        &["  0\nTABLE", "  2\nVPORT", "  5", "8", "330", "0", "100\nAcDbSymbolTable", " 70", "     1"]
    ));
    assert!(contains_run(body, &["  2", "Wände", " 70", "     0", " 62", "    -1"]));
    assert!(contains_run(
        body,
        &["100\nAcDbSymbolTableRecord", "100\nAcDbViewportTableRecord", "  2", "*Active"]
    ));
    assert!(contains_run(body, &["112", "0", "122", "1", "132", "0"]));
}

#[test]
fn test_table_order_is_vport_ltype_layer() {
    let tokens = encode_document(&create_drawing_document());
    let body = section_body(&tokens, "TABLES");
    let names: Vec<_> = body
        .windows(2)
        .filter(|w| w[0] == "  0\nTABLE")
        .map(|w| w[1].as_str())
        .collect();
    assert_eq!(names, ["  2\nVPORT", "  2\nLTYPE", "  2\nLAYER"]);
}

#[test]
fn test_layer_records_keep_document_order() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "TABLES");
    let layer_names: Vec<_> = body
        .windows(9)
        .filter(|w| w[0] == "  0\nLAYER")
        .map(|w| w[8].as_str())
        .collect();
    assert_eq!(layer_names, ["0", "Wände", "Archive"]);
}

#[test]
fn test_layer_visibility_and_frozen_flags() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "TABLES");
    assert!(contains_run(
        body,
        &["  2", "Wände", " 70", "     0", " 62", "     -1", "  6", "Continuous"]
    ));
    assert!(contains_run(body, &["  2", "Archive", " 70", "     1", " 62", "     8"]));
    assert!(contains_run(
        body,
        &["370", "    -3", "390", "F", "347", "3E", "348", "0"]
    ));
}

#[test]
fn test_viewport_record() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "TABLES");
    assert!(contains_run(
        body,
        &[
            "  0\nVPORT", "  5", "29", "330", "8",
            "100\nAcDbSymbolTableRecord", "100\nAcDbSymbolTableRecord",
            "  2", "*Active", " 70", "     0",
            " 10", "0", " 20", "0",
            " 11", "1", " 21", "1",
            " 12", "210", " 22", "148.5",
        ]
    ));
    assert!(contains_run(body, &[" 40", "297", " 41", "1.414", " 42", "50"]));
    assert!(contains_run(
        body,
        &["292", "     1", " 63", "   250", "  0\nENDTAB"]
    ));
    assert!(contains_run(
        body,
        &["111", "1", "121", "0", "131", "0", "110", "0", "120", "1", "130", "0"]
    ));
}

#[test]
fn test_fixed_record_handles_repeat() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "TABLES");
    let ltype_handles: Vec<_> = body
        .windows(3)
        .filter(|w| w[0] == "  0\nLTYPE")
        .map(|w| w[2].as_str())
        .collect();
    assert_eq!(ltype_handles, ["14", "14", "14"]);
}

#[test]
fn test_sequential_record_handles() {
    let doc = load_fixture("drawing.json");
    let config = DxfWriterConfiguration::new().with_record_handles(RecordHandles::Sequential);
    let encoded = DxfWriter::with_configuration(&doc, config).encode();
    let body = section_body(&encoded.tokens, "TABLES");

    let handles = |marker: &str| -> Vec<String> {
        body.windows(3)
            .filter(|w| w[0] == marker)
            .map(|w| w[2].clone())
            .collect()
    };
    assert_eq!(handles("  0\nVPORT"), ["9"]);
    assert_eq!(handles("  0\nLTYPE"), ["6", "7", "8"]);
    assert_eq!(handles("  0\nLAYER"), ["3", "4", "5"]);
}

// ===========================================================================
// BLOCKS
// ===========================================================================

#[test]
fn test_blocks_from_fixture() {
    let tokens = encode_document(&load_fixture("drawing.json"));
    let body = section_body(&tokens, "BLOCKS");

    assert_eq!(count(body, "  0\nBLOCK"), 2);
    assert_eq!(count(body, "  0\nENDBLK"), 2);

    let model = [
        "  0\nBLOCK", "  5", "1F", "330", "1C", "100\nAcDbEntity",
        "  8", "0", "100\nAcDbBlockBegin", "  2", "*Model_Space", " 70", "     0",
        " 10", "0", " 20", "0", " 30", "0",
        "  3", "*Model_Space", "  1", "",
        "  0\nENDBLK", "  5", "1F", "330", "1C", "  8", "0", "100\nAcDbBlockEnd",
    ];
    assert!(contains_run(body, &model));

    let paper = [
        "  0\nBLOCK", "  5", "1B", "330", "1A", "100\nAcDbEntity", " 67", "     1",
        "  8", "0", "100\nAcDbBlockBegin", "  2", "*Paper_Space",
    ];
    assert!(contains_run(body, &paper));
    assert!(contains_run(
        body,
        &["  0\nENDBLK", "  5", "1B", "330", "1A", " 67", "     1", "  8", "0", "100\nAcDbBlockEnd"]
    ));
}

#[test]
fn test_block_order_follows_document() {
    let json = r#"{"blocks": {
        "b": {"handle": "30", "ownerHandle": "2F", "layer": "0", "name": "Zeta",
              "position": {"x": 0, "y": 0, "z": 0}, "name2": "Zeta", "xrefPath": ""},
        "a": {"handle": "20", "ownerHandle": "1F", "layer": "0", "name": "Alpha",
              "position": {"x": 0, "y": 0, "z": 0}, "name2": "Alpha", "xrefPath": ""}
    }}"#;
    let tokens = encode_document(&Document::from_json_str(json).unwrap());
    let names = values_for_code(section_body(&tokens, "BLOCKS"), "  2");
    assert_eq!(names, ["Zeta", "Alpha"]);
}

#[test]
fn test_block_end_handle_increment() {
    let doc = load_fixture("drawing.json");
    let config = DxfWriterConfiguration::new().with_block_end_handle(BlockEndHandle::Increment);
    let tokens = DxfWriter::with_configuration(&doc, config).encode().tokens;
    let body = section_body(&tokens, "BLOCKS");
    let end_handles: Vec<_> = body
        .windows(3)
        .filter(|w| w[0] == "  0\nENDBLK")
        .map(|w| w[2].as_str())
        .collect();
    assert_eq!(end_handles, ["20", "1C"]);
}

// ===========================================================================
// ENTITIES
// ===========================================================================

#[test]
fn test_lwpolyline_layout() {
    let mut doc = Document::new();
    doc.entities.push(closed_triangle("2A"));
    let tokens = encode_document(&doc);
    assert_eq!(
        section_body(&tokens, "ENTITIES"),
        [
            "  0\nLWPOLYLINE", "  5", "2A", "330", "1F", "100\nAcDbEntity",
            "  8", "0", "100\nAcDbPolyline",
            " 90", "        3", " 70", "     1", " 43", "0.0",
            " 10", "0", " 20", "0",
            " 10", "1", " 20", "0",
            " 10", "1", " 20", "1",
        ]
    );
}

#[test]
fn test_open_polyline_flag() {
    let mut doc = Document::new();
    doc.entities
        .push(LwPolyline::from_points("2A", "1F", triangle_points()).into());
    let tokens = encode_document(&doc);
    assert_eq!(values_for_code(&tokens, " 70"), ["     0"]);
}

#[test]
fn test_polyline_only_entities_section_is_empty() {
    let mut polyline = Polyline::new("30", "1F");
    polyline.add_vertex(Vertex::new("31", "30", Point3::new(1.0, 2.0, 0.0)));
    let mut doc = Document::new();
    doc.entities.push(Entity::from(polyline));

    let encoded = DxfWriter::new(&doc).encode();
    assert_eq!(
        section(&encoded.tokens, "ENTITIES"),
        ["  0\nSECTION", "  2\nENTITIES", "  0\nENDSEC"]
    );
    assert!(encoded.notifications.has_type(NotificationType::NotImplemented));
}

#[test]
fn test_fixture_entities_only_lwpolyline_written() {
    let doc = load_fixture("drawing.json");
    let encoded = DxfWriter::new(&doc).encode();
    let body = section_body(&encoded.tokens, "ENTITIES");
    assert_eq!(count(body, "  0\nLWPOLYLINE"), 1);
    assert_eq!(values_for_code(body, " 90"), ["        4"]);
    assert_eq!(
        encoded.notifications.of_type(NotificationType::NotImplemented).len(),
        2
    );
}

#[test]
fn test_multi_digit_values_keep_fixed_prefix() {
    let points: Vec<Point2> = (0..12).map(|i| Point2::new(f64::from(i), 1.0)).collect();
    let mut doc = Document::new();
    doc.header.set("$ACADVER", "AC1024");
    doc.header.set("$MEASUREMENT", 1);
    doc.entities
        .push(LwPolyline::from_points("2A", "1F", points.clone()).into());

    let tokens = encode_document(&doc);
    let header = section_body(&tokens, "HEADER");
    assert!(contains_run(header, &["  9", "$ACADVER", " 1", "AC1024"]));
    assert_eq!(values_for_code(section_body(&tokens, "ENTITIES"), " 90"), ["        12"]);

    let config = DxfWriterConfiguration::new().with_layout(OutputLayout::Aligned);
    let tokens = DxfWriter::with_configuration(&doc, config).encode().tokens;
    assert!(contains_run(section_body(&tokens, "HEADER"), &["  9", "$ACADVER", "  1", "AC1024"]));
    assert_eq!(values_for_code(section_body(&tokens, "ENTITIES"), " 90"), ["       12"]);
}

#[test]
fn test_vertices_written_in_order() {
    let points = [Point2::new(3.0, -1.0), Point2::new(-2.5, 0.25)];
    let mut doc = Document::new();
    doc.entities
        .push(LwPolyline::from_points("2A", "1F", points).into());
    let tokens = encode_document(&doc);
    assert_eq!(values_for_code(&tokens, " 10"), ["3", "-2.5"]);
    assert_eq!(values_for_code(&tokens, " 20"), ["-1", "0.25"]);
}

// ===========================================================================
// Byte output
// ===========================================================================

#[test]
fn test_write_to_file() {
    let doc = create_drawing_document();
    let path = std::env::temp_dir().join(format!("dxf_json_writer_{}.dxf", std::process::id()));
    let notifications = dxf_json_writer::write_dxf(&doc, &path).unwrap();
    assert!(notifications.is_empty());

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert!(text.starts_with("  0\nSECTION\n  2\nHEADER\n  9\n$ACADVER\n 1\nAC1024\n"));
    assert!(text.ends_with("  0\nENDSEC\n  0\nEOF\n"));
}

#[test]
fn test_transcoded_output() {
    let doc = load_fixture("drawing.json");
    let config = DxfWriterConfiguration::new().with_transcode(true);
    let bytes = DxfWriter::with_configuration(&doc, config).write_to_vec().unwrap();
    assert!(bytes.windows(7).any(|w| w == b"\nW\xE4nde\n"));
    assert!(std::str::from_utf8(&bytes).is_err());
}

#[test]
fn test_utf8_output_by_default() {
    let doc = load_fixture("drawing.json");
    let bytes = DxfWriter::new(&doc).write_to_vec().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\nWände\n"));
}
