//! Configuration values shared by the mesh kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

/// Upper bound on the number of steps any boundary-loop or vertex-fan walk
/// may take before it is treated as unclosed.
///
/// A well-formed loop always closes long before this; the bound only exists
/// so that walking a corrupted graph terminates.
///
/// # Examples
/// ```
/// use config::constants::MAX_LOOP_ITERATIONS;
/// assert!(MAX_LOOP_ITERATIONS >= 1024);
/// ```
pub const MAX_LOOP_ITERATIONS: usize = 1 << 20;

/// Coordinate magnitude above which the validator warns that a vertex
/// position may never have been initialized.
///
/// # Examples
/// ```
/// use config::constants::LARGE_COORDINATE_THRESHOLD;
/// assert_eq!(LARGE_COORDINATE_THRESHOLD, 1.0e6);
/// ```
pub const LARGE_COORDINATE_THRESHOLD: f64 = 1.0e6;

/// Smallest loop bound accepted by [`GlobalConfig::new`]. Every face needs at
/// least three steps to close.
///
/// # Examples
/// ```
/// use config::constants::MIN_LOOP_ITERATIONS;
/// assert_eq!(MIN_LOOP_ITERATIONS, 3);
/// ```
pub const MIN_LOOP_ITERATIONS: usize = 3;

/// Immutable snapshot of global configuration settings.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.max_loop_iterations > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Maximum number of steps a loop or fan walk may take.
    pub max_loop_iterations: usize,
    /// Coordinate magnitude that triggers the "may be uninitialized" warning.
    pub large_coordinate_threshold: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// loop bound and coordinate threshold.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(4096, 1.0e3).expect("valid config");
    /// assert_eq!(cfg.max_loop_iterations, 4096);
    /// ```
    pub fn new(
        max_loop_iterations: usize,
        large_coordinate_threshold: f64,
    ) -> Result<Self, ConfigError> {
        if max_loop_iterations < MIN_LOOP_ITERATIONS {
            return Err(ConfigError::InvalidLoopLimit(max_loop_iterations));
        }
        if large_coordinate_threshold.is_nan() || large_coordinate_threshold <= 0.0 {
            return Err(ConfigError::InvalidCoordinateThreshold(
                large_coordinate_threshold,
            ));
        }
        Ok(Self {
            max_loop_iterations,
            large_coordinate_threshold,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            max_loop_iterations: MAX_LOOP_ITERATIONS,
            large_coordinate_threshold: LARGE_COORDINATE_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the loop bound cannot fit even a triangle.
    InvalidLoopLimit(usize),
    /// Raised when the coordinate threshold is zero, negative or NaN.
    InvalidCoordinateThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLoopLimit(value) => {
                write!(f, "max_loop_iterations must be >= {MIN_LOOP_ITERATIONS}: {value}")
            }
            ConfigError::InvalidCoordinateThreshold(value) => {
                write!(f, "large_coordinate_threshold must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
