//! Bootstrap of the cgs rendering engine.
//!
//! The crate exposes the identity of a project ([project]), the small linear algebra library
//! used by the engine ([math]) and the renderer object with its entry points ([renderer]).
//! The GPU backend is compiled only with the `vulkan` feature.

/// Module containing the application and engine identity aggregates.
pub mod project;
/// Module containing basic linear algebra like Vectors and Matrices.
pub mod math;
/// Module containing the renderer and the entry points used to bootstrap it.
pub mod renderer;
#[cfg(feature = "vulkan")]
mod vulkan;
