//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_loop_limit_fits_large_faces() {
    assert!(
        MAX_LOOP_ITERATIONS >= 65_536,
        "MAX_LOOP_ITERATIONS must not cut off legitimately large faces"
    );
}

#[test]
fn test_min_loop_limit_is_a_triangle() {
    assert_eq!(MIN_LOOP_ITERATIONS, 3);
}

#[test]
fn test_minimum_loop_limit_is_accepted() {
    assert!(GlobalConfig::new(MIN_LOOP_ITERATIONS, 1.0).is_ok());
}

// =============================================================================
// THRESHOLD TESTS
// =============================================================================

#[test]
fn test_large_coordinate_threshold_is_positive() {
    assert!(LARGE_COORDINATE_THRESHOLD > 0.0);
}

#[test]
fn test_custom_threshold_round_trips() {
    let cfg = GlobalConfig::new(128, 250.0).unwrap();
    assert_eq!(cfg.large_coordinate_threshold, 250.0);
    assert_eq!(cfg.max_loop_iterations, 128);
}
