//! # Config Crate
//!
//! Centralized configuration constants for the winged mesh kernel.
//! Traversal bounds and validator thresholds live here so the kernel never
//! hard-codes a literal limit.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, LARGE_COORDINATE_THRESHOLD, MAX_LOOP_ITERATIONS};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.max_loop_iterations, MAX_LOOP_ITERATIONS);
//! assert_eq!(cfg.large_coordinate_threshold, LARGE_COORDINATE_THRESHOLD);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Custom values go through [`constants::GlobalConfig::new`]
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
