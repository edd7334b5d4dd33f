//! wgpu-triangle
//!
//! A minimal windowed renderer: one static triangle, shaders loaded from
//! WGSL files, drawn in a loop until the window is closed.

pub mod config;
pub mod render;
pub mod shader;
