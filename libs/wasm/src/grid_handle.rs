//! # Grid Handle
//!
//! Exposes [`TriangleMesh`] queries to JavaScript as the `TriangleGrid`
//! class. Points come back as flat `Float64Array`s: `[x, y]` for a point,
//! `[x0, y0, x1, y1, x2, y2]` for vertices.

use config::constants::{GridConfig, MAX_VERTICES};
use trigrid::{GridRange, MeshError, MeshResult, Point, TriangleMesh};
use wasm_bindgen::prelude::*;

/// A triangular grid queried from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const grid = new TriangleGrid(60, 0, 0, true);
/// const [x, y] = grid.center(1, 1);        // 52, 120
/// const verts = grid.vertices(1, 1);       // 6 numbers, vertex order 0, 1, 2
/// ```
#[wasm_bindgen(js_name = TriangleGrid)]
#[derive(Debug, Clone, Copy)]
pub struct GridHandle {
    mesh: TriangleMesh,
}

#[wasm_bindgen(js_class = TriangleGrid)]
impl GridHandle {
    /// Creates a grid; rejects a non-positive or non-finite radius and
    /// non-finite origins.
    #[wasm_bindgen(constructor)]
    pub fn new(
        radius: f64,
        origin_x: f64,
        origin_y: f64,
        pixel_snap: bool,
    ) -> Result<GridHandle, JsValue> {
        Self::from_parts(radius, origin_x, origin_y, pixel_snap)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Circumradius of every triangle.
    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.mesh.radius()
    }

    /// Center of cell `(i, j)` as `[x, y]`.
    pub fn center(&self, i: i32, j: i32) -> Vec<f64> {
        flatten(&[self.mesh.center(i, j)])
    }

    /// Vertices of cell `(i, j)` as `[x0, y0, x1, y1, x2, y2]`.
    pub fn vertices(&self, i: i32, j: i32) -> Vec<f64> {
        flatten(&self.mesh.triangle_at(i, j).vertices())
    }

    /// Bounding box of cell `(i, j)` as `[x, y, width, height]`.
    pub fn bounding_box(&self, i: i32, j: i32) -> Vec<f64> {
        let rect = self.mesh.triangle_at(i, j).bounding_box();
        vec![rect.x, rect.y, rect.width, rect.height]
    }

    /// Rotation of vertex 0 for cell `(i, j)`, `±π/2`.
    pub fn orientation_theta(&self, i: i32, j: i32) -> f64 {
        self.mesh.orientation_theta(i, j)
    }

    /// Cell containing the point `(x, y)` as `[i, j]`.
    pub fn cell_at(&self, x: f64, y: f64) -> Vec<i32> {
        let cell = self.mesh.cell_at(Point::new(x, y));
        vec![cell.i, cell.j]
    }

    /// Vertices of every cell in `rows × cols`, row-major, six numbers per
    /// cell. Throws when the range holds more than `MAX_VERTICES` vertices.
    pub fn range_vertices(
        &self,
        row_start: i32,
        row_end: i32,
        col_start: i32,
        col_end: i32,
    ) -> Result<Vec<f64>, JsValue> {
        let range = GridRange::new(row_start..row_end, col_start..col_end);
        self.vertices_in(range)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl GridHandle {
    /// Validating constructor usable without a JS host.
    pub fn from_parts(
        radius: f64,
        origin_x: f64,
        origin_y: f64,
        pixel_snap: bool,
    ) -> Result<Self, config::constants::ConfigError> {
        let config = GridConfig::new(radius, origin_x, origin_y, pixel_snap)?;
        Ok(Self {
            mesh: TriangleMesh::from_config(&config),
        })
    }

    /// Flat vertices of every cell in `range`, checked against the vertex
    /// budget before anything is allocated.
    pub fn vertices_in(&self, range: GridRange) -> MeshResult<Vec<f64>> {
        let vertices = range.len().saturating_mul(3);
        if vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices,
                max: MAX_VERTICES,
            });
        }

        let mut out = Vec::with_capacity(vertices * 2);
        for (_, triangle) in self.mesh.triangles(range) {
            out.extend(flatten(&triangle.vertices()));
        }
        Ok(out)
    }

    /// The wrapped grid.
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }
}

fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}
