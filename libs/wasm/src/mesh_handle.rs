//! # Mesh Handle
//!
//! Flattened surface buffers handed to JavaScript, ready for a three.js
//! `BufferGeometry`.

use trigrid::Mesh;
use wasm_bindgen::prelude::*;

/// A lifted surface, flattened once into GPU-ready buffers.
///
/// Every face owns its three vertices, so `vertex_count == 3 * triangle_count`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_wavy_surface(10.0, 50, 0.22, 5.0, 4.0);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// `[x, height, y]` per vertex.
    positions: Vec<f32>,
    indices: Vec<u32>,
    /// Face normal repeated on each of the face's vertices.
    normals: Option<Vec<f32>>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Lifted vertices in the buffers.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Faces, one per grid cell.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Positions, three floats per vertex.
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.positions.as_slice())
    }

    /// Face indices, three per triangle, in vertex order 0, 1, 2.
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.indices.as_slice())
    }

    /// Normals aligned with `vertices()`, or `undefined`.
    pub fn normals(&self) -> Option<js_sys::Float32Array> {
        self.normal_buffer().map(js_sys::Float32Array::from)
    }

    /// Whether `normals()` returns a buffer.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// An empty grid range lifts to an empty handle.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Flattens a mesh into GPU buffers.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            positions: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32(),
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }

    /// Position buffer, for host-side callers.
    pub fn vertex_buffer(&self) -> &[f32] {
        &self.positions
    }

    /// Index buffer, for host-side callers.
    pub fn index_buffer(&self) -> &[u32] {
        &self.indices
    }

    /// Normal buffer, for host-side callers.
    pub fn normal_buffer(&self) -> Option<&[f32]> {
        self.normals.as_deref()
    }
}
