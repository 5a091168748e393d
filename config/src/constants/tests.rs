//! Tests for the grid configuration builder.

use super::*;

/// Ensures the default configuration is usable without validation.
#[test]
fn default_config_is_valid() {
    let cfg = GridConfig::default();
    assert!(cfg.radius > 0.0);
    assert_eq!(cfg.origin_x, 0.0);
    assert_eq!(cfg.origin_y, 0.0);
    assert_eq!(GridConfig::new(cfg.radius, 0.0, 0.0, true), Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GridConfig;
/// assert!(GridConfig::new(0.0, 0.0, 0.0, true).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GridConfig::new(0.0, 0.0, 0.0, true).unwrap_err(),
        ConfigError::InvalidRadius(0.0)
    );
    assert_eq!(
        GridConfig::new(-3.0, 0.0, 0.0, true).unwrap_err(),
        ConfigError::InvalidRadius(-3.0)
    );
    assert!(matches!(
        GridConfig::new(f64::NAN, 0.0, 0.0, true),
        Err(ConfigError::InvalidRadius(_))
    ));
    assert!(matches!(
        GridConfig::new(10.0, f64::INFINITY, 0.0, true),
        Err(ConfigError::InvalidOrigin(_, _))
    ));
}

#[test]
fn continuous_keeps_geometry() {
    let cfg = GridConfig::new(12.0, 3.0, 4.0, true).unwrap().continuous();
    assert!(!cfg.pixel_snap);
    assert_eq!(cfg.radius, 12.0);
    assert_eq!((cfg.origin_x, cfg.origin_y), (3.0, 4.0));
}

#[test]
fn errors_render_offending_values() {
    let msg = ConfigError::InvalidRadius(-2.5).to_string();
    assert!(msg.contains("-2.5"));
    let msg = ConfigError::InvalidOrigin(1.0, f64::NAN).to_string();
    assert!(msg.contains("NaN"));
}
