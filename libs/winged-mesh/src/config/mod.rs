//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so traversals and the
//! validator stay decoupled from literal limits.

use config::constants::{
    ConfigError, GlobalConfig, LARGE_COORDINATE_THRESHOLD, MAX_LOOP_ITERATIONS,
};

/// Kernel configuration wrapper.
///
/// # Examples
/// ```
/// use winged_mesh::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.max_loop_iterations > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Maximum number of steps a boundary-loop or vertex-fan walk may take.
    pub max_loop_iterations: usize,
    /// Coordinate magnitude above which the validator warns about a vertex.
    pub large_coordinate_threshold: f64,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use winged_mesh::config::KernelConfig;
    /// let cfg = KernelConfig::new(1024, 50.0).unwrap();
    /// assert_eq!(cfg.max_loop_iterations, 1024);
    /// ```
    pub fn new(
        max_loop_iterations: usize,
        large_coordinate_threshold: f64,
    ) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(max_loop_iterations, large_coordinate_threshold)
            .map(|cfg| Self {
                max_loop_iterations: cfg.max_loop_iterations,
                large_coordinate_threshold: cfg.large_coordinate_threshold,
            })
            .map_err(KernelConfigError)
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            max_loop_iterations: MAX_LOOP_ITERATIONS,
            large_coordinate_threshold: LARGE_COORDINATE_THRESHOLD,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq)]
pub struct KernelConfigError(ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}
