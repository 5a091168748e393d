//! # Mesh Buffer
//!
//! Indexed triangle buffer handed to 3D renderers: positions, faces and
//! optional per-vertex normals.

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;

/// A triangle mesh with vertices and indices.
///
/// Geometry is kept in f64; conversion to f32 only happens when exporting
/// GPU buffers.
///
/// # Example
///
/// ```rust
/// use trigrid::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_flat_face([DVec3::ZERO, DVec3::X, DVec3::Z], DVec3::Y);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.normals().unwrap()[2], DVec3::Y);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Appends a face with its own three vertices, all carrying `normal`.
    ///
    /// Faces added this way share no vertices, which gives flat shading. If
    /// the mesh had no normals yet, earlier vertices get a zero normal.
    pub fn add_flat_face(&mut self, positions: [DVec3; 3], normal: DVec3) {
        let existing = self.vertices.len();
        let normals = self
            .normals
            .get_or_insert_with(|| vec![DVec3::ZERO; existing]);
        normals.extend([normal; 3]);

        let [a, b, c] = positions.map(|p| self.add_vertex(p));
        self.add_triangle(a, b, c);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Positions of a triangle's corners.
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        self.triangles[index].map(|v| self.vertices[v as usize])
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Unit normal of every triangle, `(v0 - v1) × (v1 - v2)` normalized.
    ///
    /// Degenerate triangles get a zero normal.
    pub fn face_normals(&self) -> Vec<DVec3> {
        (0..self.triangles.len())
            .map(|index| {
                let [a, b, c] = self.triangle_positions(index);
                face_normal(a, b, c)
            })
            .collect()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - No zero-area triangles
    /// - Normals, when present, match the vertex count
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let normals_aligned = self
            .normals
            .as_ref()
            .map_or(true, |n| n.len() == self.vertices.len());
        if !normals_aligned {
            return false;
        }

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|v| *v >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [a, b, c] = tri.map(|v| self.vertices[v as usize]);
            (b - a).cross(c - a).length() > EPSILON_TOLERANCE
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

/// Unit normal of the face `a, b, c`, or zero when degenerate.
///
/// The normal is `(a - b) × (b - c)`: a face wound from +x towards +z
/// faces down the y axis.
///
/// # Example
///
/// ```rust
/// use trigrid::mesh::face_normal;
/// use glam::DVec3;
///
/// let n = face_normal(DVec3::ZERO, DVec3::X, DVec3::new(1.0, 0.0, 1.0));
/// assert_eq!(n, DVec3::NEG_Y);
/// assert_eq!(face_normal(DVec3::ZERO, DVec3::Z, DVec3::new(1.0, 0.0, 1.0)), DVec3::Y);
/// ```
pub fn face_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    (a - b).cross(b - c).normalize_or_zero()
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.extend([v.x as f32, v.y as f32, v.z as f32]);
    }
    result
}
