//! Core data structures and types for the winged kernel.
//!
//! Includes the vector alias (`Vec3`), the entity handles and the entity
//! records stored by [`Surface`](crate::Surface).

pub mod half_edge;
pub mod vec3;
