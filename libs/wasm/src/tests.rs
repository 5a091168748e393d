//! Tests for the WASM-facing helpers.

use super::*;

/// Grid queries return flat pixel coordinates.
#[test]
fn grid_handle_flattens_points() {
    let grid = GridHandle::from_parts(60.0, 0.0, 0.0, true).expect("valid grid");
    assert_eq!(grid.center(1, 1), vec![52.0, 120.0]);
    assert_eq!(
        grid.vertices(1, 1),
        vec![52.0, 60.0, 104.0, 150.0, 0.0, 150.0]
    );
    assert_eq!(grid.bounding_box(1, 1), vec![0.0, 60.0, 104.0, 90.0]);
    assert_eq!(grid.orientation_theta(1, 1), -std::f64::consts::FRAC_PI_2);
}

/// Invalid parameters are rejected before a grid exists.
#[test]
fn grid_handle_rejects_bad_radius() {
    assert!(GridHandle::from_parts(0.0, 0.0, 0.0, true).is_err());
    assert!(GridHandle::from_parts(10.0, f64::NAN, 0.0, true).is_err());
}

/// Range queries return six numbers per cell, row-major.
#[test]
fn grid_handle_range_vertices() {
    let grid = GridHandle::from_parts(30.0, 5.0, 5.0, false).expect("valid grid");
    let flat = grid
        .vertices_in(trigrid::GridRange::new(0..2, 0..3))
        .expect("within budget");
    assert_eq!(flat.len(), 2 * 3 * 6);
    assert_eq!(&flat[6..12], &grid.vertices(0, 1)[..]);
    let center = grid.center(1, 2);
    assert_eq!(grid.cell_at(center[0], center[1]), vec![1, 2]);
}

/// Oversized range queries are refused before allocating.
#[test]
fn grid_handle_range_over_budget() {
    let grid = GridHandle::from_parts(30.0, 0.0, 0.0, true).expect("valid grid");
    for range in [
        trigrid::GridRange::square(5_000),
        trigrid::GridRange::new(i32::MIN..i32::MAX, i32::MIN..i32::MAX),
    ] {
        let err = grid.vertices_in(range).unwrap_err();
        assert!(matches!(err, trigrid::MeshError::TooManyVertices { .. }));
    }
}

/// Surface radii go through the same validation as grids.
#[test]
fn wavy_surface_rejects_bad_radius() {
    for radius in [0.0, -1.0, f64::NAN] {
        let err = build_wavy_surface_internal(radius, 5, 0.22, 5.0, 4.0).unwrap_err();
        assert!(
            matches!(err, SketchError::Mesh(trigrid::MeshError::InvalidConfig(_))),
            "radius {radius}"
        );
    }
}

/// Surface handles expose consistent buffer sizes.
#[test]
fn wavy_surface_buffers() {
    let mesh = build_wavy_surface_internal(10.0, 5, 0.22, 5.0, 4.0).expect("within budget");
    assert_eq!(mesh.triangle_count(), 100);
    assert_eq!(mesh.vertex_count(), 300);
    assert_eq!(mesh.vertex_buffer().len(), 900);
    assert_eq!(mesh.index_buffer().len(), 300);
    assert_eq!(mesh.normal_buffer().map(<[f32]>::len), Some(900));
    assert!(mesh.has_normals());
    assert!(!mesh.is_empty());
    for &idx in mesh.index_buffer() {
        assert!(idx < mesh.vertex_count());
    }
}

/// Oversized surfaces surface the budget error.
#[test]
fn wavy_surface_over_budget() {
    let err = build_wavy_surface_internal(1.0, 5000, 0.22, 5.0, 4.0).unwrap_err();
    assert!(err.to_string().contains("Too many"));
}

/// Rendering is deterministic per seed and serializes to tagged JSON.
#[test]
fn render_sketch_is_seeded() {
    let a = render_sketch_internal("splotches", 5, 400, 400).expect("known sketch");
    let b = render_sketch_internal("splotches", 5, 400, 400).expect("known sketch");
    assert_eq!(a, b);

    let json = serde_json::to_string(&a).expect("serializable");
    assert!(json.starts_with("[{\"op\":"));
}

/// Unknown names are reported, not panicked on.
#[test]
fn render_sketch_rejects_unknown() {
    let err = render_sketch_internal("spirals", 0, 10, 10).unwrap_err();
    assert!(matches!(err, SketchError::UnknownSketch(_)));
}

#[test]
fn sketch_names_cover_registry() {
    let names = sketch_names();
    assert_eq!(names.len(), SketchKind::ALL.len());
    assert!(names.iter().all(|name| render_sketch_internal(name, 0, 200, 200).is_ok()));
}
