//! GPU-compatible vertex data
//!
//! Types are `#[repr(C)]` and derive Pod and Zeroable so they can be
//! uploaded to GPU buffers directly.

use bytemuck::{Pod, Zeroable};

/// A vertex in normalized device coordinates
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in NDC (x, y, z)
    pub position: [f32; 3],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

/// The one and only triangle: three points in NDC, counter-clockwise
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0] }, // left
    Vertex { position: [0.5, -0.5, 0.0] },  // right
    Vertex { position: [0.0, 0.5, 0.0] },   // top
];
