//! Integration tests for rendering shapes into paths

mod common;

use common::builders::minimal_files;
use common::{assert_point_close, demo_font, DEMO_SHAPES_SHP};
use proptest::prelude::*;
use shx_fonts::{
    render_shapes, shp_loads, shx_loadb, PathSegment, RenderConfiguration, ShapeFileError,
    Vector2,
};
use std::collections::HashMap;

#[test]
fn test_minimal_glyph_in_all_formats() {
    for (format, data) in minimal_files() {
        let font = shx_loadb(&data).unwrap();
        let path = font.render_shape(0x41, false).unwrap();
        assert_eq!(path.len(), 1, "{}", format);
        assert_eq!(path.start(), Vector2::ZERO, "{}", format);
        assert_eq!(path.end(), Vector2::new(5.0, 0.0), "{}", format);
    }
}

#[test]
fn test_render_text() {
    let font = demo_font();
    let path = font.render_text("AB", false).unwrap();
    // B leaves the pen at (7, 1), the baseline reset moves it down
    assert_point_close(path.end(), (7.0, 0.0));
    assert_eq!(path.sub_path_count(), 2);
}

#[test]
fn test_render_text_without_baseline_reset() {
    let font = demo_font();
    let path = font.render_shapes(&[0x41, 0x42], false).unwrap();
    assert_point_close(path.end(), (7.0, 1.0));
}

#[test]
fn test_sub_shape_renders_referenced_glyph() {
    let font = demo_font();
    let a = font.render_shape(0x41, false).unwrap();
    let c = font.render_shape(0x43, false).unwrap();
    assert_eq!(a.segments(), c.segments());
}

#[test]
fn test_unknown_characters_render_nothing() {
    let font = demo_font();
    let path = font.render_text("xyz", false).unwrap();
    assert!(path.is_empty());
    assert_eq!(path.end(), Vector2::ZERO);
}

#[test]
fn test_closed_box() {
    let shapes = shp_loads(DEMO_SHAPES_SHP).unwrap();
    let path = shapes.render_shape(2, false).unwrap();
    assert_eq!(path.len(), 4);
    assert_point_close(path.end(), (0.0, 0.0));

    let bbox = path.bounding_box();
    assert_eq!(bbox.width(), 1.0);
    assert_eq!(bbox.height(), 1.0);
}

#[test]
fn test_vertical_only_commands() {
    let mut shapes = HashMap::new();
    shapes.insert(1, vec![14, 8, 0, -10, 8, 3, 0, 0]);

    let horizontal = render_shapes(&[1], &shapes, false, Vector2::ZERO, false).unwrap();
    assert_point_close(horizontal.end(), (3.0, 0.0));

    let stacked = render_shapes(&[1], &shapes, true, Vector2::ZERO, false).unwrap();
    assert_point_close(stacked.end(), (3.0, -10.0));
}

#[test]
fn test_start_location_sets_baseline() {
    let font = demo_font();
    let config = RenderConfiguration::default()
        .with_start(Vector2::new(100.0, 50.0))
        .with_reset_to_baseline(true);
    let path = font.render_with(&[0x42], &config).unwrap();
    assert_eq!(path.start(), Vector2::new(101.0, 50.0));
    assert_point_close(path.end(), (102.0, 50.0));
}

#[test]
fn test_vector_length_scales_glyphs() {
    let font = demo_font();
    let config = RenderConfiguration::default().with_vector_length(2.5);
    let path = font.render_with(&[0x41], &config).unwrap();
    assert_point_close(path.end(), (12.5, 0.0));
}

#[test]
fn test_stack_underflow_names_rendered_shape() {
    let shapes = shp_loads("*1,2,A\n8,1,0,0\n*2,2,POP\n6,0\n*3,2,REF\n7,2,0\n").unwrap();
    let err = shapes.render_shapes(&[1, 3], false).unwrap_err();
    assert!(matches!(err, ShapeFileError::StackUnderflow { shape_number: 3 }));
    assert_eq!(
        err.to_string(),
        "stack underflow while rendering shape number 3"
    );
}

#[test]
fn test_truncated_program_fails_at_render_time() {
    let shapes = shp_loads("*1,2,BAD\n8,0\n").unwrap();
    let err = shapes.render_shape(1, false).unwrap_err();
    assert!(matches!(err, ShapeFileError::TruncatedProgram { shape_number: 1, code: 8 }));
}

#[test]
fn test_self_referencing_shape() {
    let shapes = shp_loads("*1,3,LOOP\n7,1,0\n").unwrap();
    let err = shapes.render_shape(1, false).unwrap_err();
    assert!(matches!(err, ShapeFileError::RecursionLimit { depth: 64, .. }));
}

#[test]
fn test_arc_glyph_flattening() {
    let mut shapes = HashMap::new();
    // full circle with radius 2
    shapes.insert(1, vec![10, 2, 0x00, 0]);
    let path = render_shapes(&[1], &shapes, false, Vector2::ZERO, false).unwrap();
    assert!(matches!(path.segments()[0], PathSegment::ArcTo { .. }));

    let polylines = path.flattening(0.01);
    assert_eq!(polylines.len(), 1);
    let vertices = &polylines[0];
    assert!(vertices.len() > 8);
    let center = Vector2::new(-2.0, 0.0);
    for vertex in vertices {
        assert!((vertex.distance(&center) - 2.0).abs() < 1e-9);
    }

    let bbox = path.bounding_box();
    assert!((bbox.width() - 4.0).abs() < 1e-9);
    assert!((bbox.height() - 4.0).abs() < 1e-9);
}

fn direction(angle: i32) -> (f64, f64) {
    const X: [f64; 16] = [1.0, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -0.5, 0.0, 0.5, 1.0, 1.0];
    const Y: [f64; 16] = [0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -0.5];
    (X[angle as usize], Y[angle as usize])
}

proptest! {
    #[test]
    fn prop_packed_vectors_sum_up(vectors in prop::collection::vec(0x10i32..=0xFF, 1..50)) {
        let mut program = vectors.clone();
        program.push(0);
        let mut shapes = HashMap::new();
        shapes.insert(1, program);

        let path = render_shapes(&[1], &shapes, false, Vector2::ZERO, false).unwrap();
        prop_assert_eq!(path.len(), vectors.len());

        let (mut x, mut y) = (0.0, 0.0);
        for code in &vectors {
            let length = ((code >> 4) & 0xF) as f64;
            let (dx, dy) = direction(code & 0xF);
            x += dx * length;
            y += dy * length;
        }
        prop_assert!((path.end().x - x).abs() < 1e-9);
        prop_assert!((path.end().y - y).abs() < 1e-9);
    }

    #[test]
    fn prop_baseline_reset_returns_to_start_height(
        dy in -100i32..100,
        start_y in -1000.0f64..1000.0,
    ) {
        let mut shapes = HashMap::new();
        shapes.insert(1, vec![8, 1, dy, 0]);
        let start = Vector2::new(0.0, start_y);
        let path = render_shapes(&[1, 1, 1], &shapes, false, start, true).unwrap();
        prop_assert_eq!(path.end().y, start_y);
        prop_assert!((path.end().x - 3.0).abs() < 1e-9);
    }
}
