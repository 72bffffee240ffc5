//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.large_coordinate_threshold > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.max_loop_iterations >= MIN_LOOP_ITERATIONS);
    assert!(cfg.large_coordinate_threshold > 0.0);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(2, 1.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(2, 1.0e6).unwrap_err(),
        ConfigError::InvalidLoopLimit(2)
    );
    assert_eq!(
        GlobalConfig::new(64, 0.0).unwrap_err(),
        ConfigError::InvalidCoordinateThreshold(0.0)
    );
    assert!(GlobalConfig::new(64, f64::NAN).is_err());
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidLoopLimit(1);
    assert!(err.to_string().contains("max_loop_iterations"));
    let err = ConfigError::InvalidCoordinateThreshold(-1.0);
    assert!(err.to_string().contains("large_coordinate_threshold"));
}
