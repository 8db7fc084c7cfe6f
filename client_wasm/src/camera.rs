//! Camera for Pong game
//!
//! Maps playfield pixels straight to the screen: origin top-left, y down.

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera over a `width` x `height` pixel playfield
    pub fn screen(width: f32, height: f32) -> Self {
        // bottom = height, top = 0 flips y to match canvas coordinates
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}
