//! # Config Crate
//!
//! Centralized configuration constants for the triangular grid workspace.
//! All magic numbers and tunable parameters are defined here so the lattice,
//! the surface builder and the sketches agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GridConfig, DEFAULT_RADIUS, SQRT_3_OVER_2};
//!
//! // Horizontal step between neighbouring triangle centers
//! let dx = SQRT_3_OVER_2 * DEFAULT_RADIUS;
//! assert!(dx > 0.0);
//!
//! // Validated grid parameters
//! let cfg = GridConfig::new(60.0, 0.0, 0.0, true).unwrap();
//! assert_eq!(cfg.radius, 60.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Dependency-Free**: Downstream crates can depend on it from anywhere

pub mod constants;
