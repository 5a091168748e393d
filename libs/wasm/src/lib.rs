//! WASM-facing entry points for the triangular grid and its sketches.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests go through the `*_internal` helpers, which
//! return Rust types and errors instead of `JsValue`s.
//!
//! ```
//! let commands = trigrid_wasm::render_sketch_internal("triangle-grid", 1, 600, 600).unwrap();
//! assert!(!commands.is_empty());
//! ```

mod grid_handle;
mod mesh_handle;

pub use grid_handle::GridHandle;
pub use mesh_handle::MeshHandle;

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen_rayon::init_thread_pool;

use config::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_RADIUS, DEFAULT_SEED,
};
use sketches::heightfield::{build_surface, wave};
use sketches::{run, SketchError, SketchKind};
use trigrid::{CommandRecorder, DrawCommand};
use wasm_bindgen::prelude::*;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "trigrid-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default triangle circumradius, in pixels.
///
/// # Examples
/// ```
/// assert!(trigrid_wasm::default_radius() > 0.0);
/// ```
#[wasm_bindgen]
pub fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// Names of every sketch `render_sketch` accepts.
#[wasm_bindgen]
pub fn sketch_names() -> Vec<String> {
    SketchKind::ALL.iter().map(|kind| kind.to_string()).collect()
}

/// Builds a wave height-field surface over `-extent..extent` cells.
///
/// # Errors
/// Returns a JavaScript error for a radius that is not finite and positive,
/// or when the surface exceeds the mesh budget.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = build_wavy_surface(10.0, 50, 0.22, 5.0, 4.0);
/// // console.log(mesh.triangle_count); // 10000
/// ```
#[wasm_bindgen]
pub fn build_wavy_surface(
    radius: f64,
    extent: i32,
    amplitude: f64,
    frequency: f64,
    base: f64,
) -> Result<MeshHandle, JsValue> {
    build_wavy_surface_internal(radius, extent, amplitude, frequency, base).map_err(to_js_error)
}

/// Host-only helper behind [`build_wavy_surface`].
pub fn build_wavy_surface_internal(
    radius: f64,
    extent: i32,
    amplitude: f64,
    frequency: f64,
    base: f64,
) -> Result<MeshHandle, SketchError> {
    let mesh = build_surface(radius, extent, wave(amplitude, frequency, base))?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Runs a sketch for one frame and returns its draw commands as a JSON
/// array for the host to replay on a canvas.
///
/// Missing arguments fall back to the default seed and canvas size.
///
/// # Errors
/// Returns a JavaScript error for an unknown sketch name.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const commands = JSON.parse(render_sketch("drips", 42, 1000, 1000));
/// // replay(ctx, commands);
/// ```
#[wasm_bindgen]
pub fn render_sketch(
    name: &str,
    seed: Option<u64>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<String, JsValue> {
    let commands = render_sketch_internal(
        name,
        seed.unwrap_or(DEFAULT_SEED),
        width.unwrap_or(DEFAULT_CANVAS_WIDTH),
        height.unwrap_or(DEFAULT_CANVAS_HEIGHT),
    )
    .map_err(to_js_error)?;
    serde_json::to_string(&commands).map_err(to_js_error)
}

/// Host-only helper behind [`render_sketch`].
pub fn render_sketch_internal(
    name: &str,
    seed: u64,
    width: u32,
    height: u32,
) -> Result<Vec<DrawCommand>, SketchError> {
    let kind: SketchKind = name.parse()?;
    let mut sketch = kind.build(width, height);
    let mut canvas = CommandRecorder::new();
    run(sketch.as_mut(), seed, 1, &mut canvas);
    Ok(canvas.into_commands())
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
