use super::*;
use approx::assert_relative_eq;
use config::constants::PIXEL_TOLERANCE;
use std::f64::consts::FRAC_PI_2;

fn pixel(radius: f64) -> TriangleMesh {
    TriangleMesh::new(radius, CoordMode::Pixel)
}

fn close(a: Point, b: Point, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

fn shared_vertices(a: &Triangle, b: &Triangle, tolerance: f64) -> usize {
    let other = b.vertices();
    a.vertices()
        .iter()
        .filter(|v| other.iter().any(|w| close(**v, *w, tolerance)))
        .count()
}

// =============================================================================
// CENTER
// =============================================================================

/// Hand-computed centers for radius 60: dx = 51.96, dy = 30.
#[test]
fn test_center_reference_table() {
    let expected: [[(f64, f64); 4]; 4] = [
        [(0.0, 30.0), (52.0, 0.0), (104.0, 30.0), (156.0, 0.0)],
        [(0.0, 90.0), (52.0, 120.0), (104.0, 90.0), (156.0, 120.0)],
        [(0.0, 210.0), (52.0, 180.0), (104.0, 210.0), (156.0, 180.0)],
        [(0.0, 270.0), (52.0, 300.0), (104.0, 270.0), (156.0, 300.0)],
    ];

    let mesh = pixel(60.0);
    for (i, row) in expected.iter().enumerate() {
        for (j, &(x, y)) in row.iter().enumerate() {
            assert_eq!(
                mesh.center(i as i32, j as i32),
                Point::new(x, y),
                "center({i}, {j})"
            );
        }
    }
}

#[test]
fn test_center_column_shift_only_in_y() {
    let mesh = pixel(60.0);
    let a = mesh.center(1, 1);
    let b = mesh.center(2, 1);
    assert_eq!(a.x, b.x);
    assert_eq!(b.y - a.y, 60.0);
}

#[test]
fn test_odd_columns_skip_correction() {
    let mesh = TriangleMesh::new(60.0, CoordMode::Continuous);
    // Uncorrected base position is (4i - 2·floor(i/2))·dy
    for i in -4..4i32 {
        let base = f64::from(4 * i - 2 * i.div_euclid(2)) * mesh.dy();
        assert_relative_eq!(mesh.center(i, 3).y, base);
        assert_relative_eq!(mesh.center(i, -1).y, base);
    }
}

#[test]
fn test_center_total_at_extreme_indices() {
    let mesh = TriangleMesh::new(60.0, CoordMode::Continuous);
    let far = mesh.center(600_000_000, 1);
    assert_relative_eq!(far.y, (4.0 * 600_000_000.0 - 2.0 * 300_000_000.0) * 30.0);

    for (i, j) in [(i32::MAX, i32::MAX), (i32::MIN, i32::MIN), (i32::MIN, i32::MAX)] {
        let center = mesh.center(i, j);
        assert!(center.x.is_finite() && center.y.is_finite(), "center({i}, {j})");
        assert!(pixel(60.0).center(i, j).y.is_finite());
    }
}

#[test]
fn test_negative_rows_continue_pattern() {
    let mesh = pixel(60.0);
    assert_eq!(mesh.center(-1, 0), Point::new(0.0, -90.0));
    assert_eq!(mesh.center(-1, -1), Point::new(-52.0, -60.0));
    assert_eq!(mesh.center(-2, 3), Point::new(156.0, -180.0));
}

#[test]
fn test_origin_offsets_centers() {
    let base = pixel(60.0);
    let shifted = TriangleMesh::with_origin(60.0, DVec2::new(100.0, -20.0), CoordMode::Pixel);
    for (i, j) in [(0, 0), (1, 3), (-2, -5)] {
        assert_eq!(shifted.center(i, j), base.center(i, j) + DVec2::new(100.0, -20.0));
    }
}

#[test]
fn test_continuous_mode_does_not_round() {
    let mesh = TriangleMesh::new(60.0, CoordMode::Continuous);
    let c = mesh.center(0, 1);
    assert_relative_eq!(c.x, 3.0_f64.sqrt() / 2.0 * 60.0);
    assert_ne!(c.x.fract(), 0.0);
}

#[test]
fn test_queries_are_deterministic() {
    let mesh = pixel(37.0);
    for (i, j) in [(0, 0), (7, -3), (-11, 12)] {
        assert_eq!(mesh.center(i, j), mesh.center(i, j));
        assert_eq!(
            mesh.triangle_at(i, j).vertices(),
            mesh.vertices(&mesh.triangle_at(i, j))
        );
    }
}

// =============================================================================
// ORIENTATION
// =============================================================================

#[test]
fn test_orientation_checkerboard() {
    let mesh = pixel(10.0);
    for i in -5..5 {
        for j in -5..5 {
            let t = mesh.orientation_theta(i, j);
            assert_ne!(t, mesh.orientation_theta(i, j + 1), "({i}, {j}) vs right");
            assert_ne!(t, mesh.orientation_theta(i + 1, j), "({i}, {j}) vs below");
        }
    }
}

#[test]
fn test_orientation_values() {
    let mesh = pixel(10.0);
    assert_eq!(mesh.orientation_theta(0, 0), -FRAC_PI_2);
    assert_eq!(mesh.orientation_theta(0, 1), FRAC_PI_2);
    assert_eq!(mesh.orientation_theta(-1, 0), FRAC_PI_2);
    assert_eq!(mesh.orientation(2, 2), Orientation::Up);
}

#[test]
fn test_orientation_parity_at_lattice_edge() {
    let mesh = pixel(10.0);
    assert_eq!(mesh.orientation_theta(i32::MAX, 1), -FRAC_PI_2);
    assert_eq!(mesh.orientation(i32::MAX, i32::MAX), Orientation::Up);
    assert_eq!(mesh.orientation(i32::MIN, i32::MAX), Orientation::Down);
    assert_eq!(mesh.orientation(i32::MIN, -1), Orientation::Down);
}

// =============================================================================
// TRIANGLES
// =============================================================================

#[test]
fn test_origin_triangle_vertices() {
    // radius 10, theta -π/2: vertices at -90°, 30°, 150° around the center
    let mesh = pixel(10.0);
    let tri = mesh.triangle_at(0, 0);
    assert_eq!(tri.theta, -FRAC_PI_2);
    assert_eq!(tri.center, Point::new(0.0, 5.0));
    assert_eq!(
        mesh.vertices(&tri),
        [Point::new(0.0, -5.0), Point::new(9.0, 10.0), Point::new(-9.0, 10.0)]
    );
}

#[test]
fn test_horizontal_neighbours_share_one_edge() {
    for radius in [7.0, 10.0, 17.3, 30.0, 33.0, 60.0] {
        let mesh = pixel(radius);
        for i in -6..6 {
            for j in -6..6 {
                let a = mesh.triangle_at(i, j);
                let b = mesh.triangle_at(i, j + 1);
                assert_eq!(
                    shared_vertices(&a, &b, PIXEL_TOLERANCE),
                    2,
                    "radius {radius}: ({i}, {j}) and ({i}, {})",
                    j + 1
                );
            }
        }
    }
}

#[test]
fn test_vertical_neighbours_share_base_of_up_triangles() {
    // An up triangle's base is the top edge of the cell below it; a down
    // triangle only touches the cell below at its apex.
    let mesh = TriangleMesh::new(60.0, CoordMode::Continuous);
    for i in -4..4 {
        for j in -4..4 {
            let a = mesh.triangle_at(i, j);
            let b = mesh.triangle_at(i + 1, j);
            let expected = match mesh.orientation(i, j) {
                Orientation::Up => 2,
                Orientation::Down => 1,
            };
            assert_eq!(shared_vertices(&a, &b, 1e-9), expected, "({i}, {j})");
        }
    }
}

#[test]
fn test_no_overlap_between_cells() {
    // Every cell center lies in its own triangle and no other.
    let mesh = TriangleMesh::new(25.0, CoordMode::Continuous);
    let range = GridRange::new(-3..4, -3..4);
    for (cell, tri) in mesh.triangles(range.clone()) {
        assert!(tri.contains(tri.center));
        for (other, other_tri) in mesh.triangles(range.clone()) {
            if other != cell {
                assert!(!other_tri.contains(tri.center), "{cell:?} center inside {other:?}");
            }
        }
    }
}

#[test]
fn test_bounding_box_contains_vertices() {
    let mesh = pixel(60.0);
    for (_, tri) in mesh.triangles(GridRange::square(4)) {
        let bbox = mesh.bounding_box(&tri);
        assert!(bbox.width > 0.0 && bbox.height > 0.0);
        for v in tri.vertices() {
            assert!(bbox.contains(v));
        }
    }
}

#[test]
fn test_doubling_radius_doubles_vertex_distance() {
    let small = TriangleMesh::new(20.0, CoordMode::Continuous);
    let large = TriangleMesh::new(40.0, CoordMode::Continuous);
    for (i, j) in [(0, 0), (3, 2), (-1, 5)] {
        let (a, b) = (small.triangle_at(i, j), large.triangle_at(i, j));
        assert_eq!(a.theta, b.theta);
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            assert_relative_eq!(
                (vb - b.center).length(),
                2.0 * (*va - a.center).length(),
                epsilon = 1e-9
            );
        }
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_cell_at_inverts_center() {
    let mesh = TriangleMesh::with_origin(30.0, DVec2::new(7.0, -3.0), CoordMode::Pixel);
    for cell in GridRange::square(6).cells() {
        let center = mesh.with_mode(CoordMode::Continuous).triangle(cell).center;
        assert_eq!(mesh.cell_at(center), cell);
    }
}

#[test]
fn test_cell_at_clamps_far_points() {
    let mesh = TriangleMesh::new(30.0, CoordMode::Continuous);
    let below = mesh.cell_at(Point::new(0.0, 1e12));
    assert!(below.i > 1_000_000);
    assert_eq!(below.j, 0);

    let corner = mesh.cell_at(Point::new(-1e12, -1e12));
    assert!(corner.i < -1_000_000 && corner.j < -1_000_000);

    let beyond = mesh.cell_at(Point::new(f64::MAX, f64::MIN));
    assert!(beyond.i < 0 && beyond.j > 0);
}

#[test]
fn test_from_config_and_default() {
    let mesh = TriangleMesh::default();
    assert_eq!(mesh.mode(), CoordMode::Pixel);
    assert_eq!(mesh.origin(), Point::ZERO);
    assert_eq!(mesh.radius(), config::constants::DEFAULT_RADIUS);
}
