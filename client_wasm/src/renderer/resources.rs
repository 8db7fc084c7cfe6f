use crate::camera::{Camera, CameraUniform};
use game_core::render::DrawRect;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Most rectangles drawn in one frame; anything past this is dropped
pub const MAX_INSTANCES: usize = 1024;

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Draw rects are top-left anchored, the quad mesh is centred
    pub fn from_rect(rect: &DrawRect, tint: [f32; 4]) -> Self {
        Self {
            transform: [rect.x + rect.w / 2.0, rect.y + rect.h / 2.0, rect.w, rect.h],
            tint,
        }
    }
}

pub struct GameBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
    pub capacity: usize,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        instances,
        capacity: MAX_INSTANCES,
    }
}
