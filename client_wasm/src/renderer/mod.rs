pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_rectangle, Mesh};
use game_core::render::Frame;
use resources::{GameBuffers, InstanceData};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub size: (u32, u32),

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub quad: Mesh,

    // Reused staging for per-frame instance uploads
    pub instances: Vec<InstanceData>,
}

impl Renderer {
    pub async fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::screen(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipe = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad = create_rectangle(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipe.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let instances = Vec::with_capacity(buffers.capacity);

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            size: ctx.size,
            main_pipeline: pipe.main_pipeline,
            camera_bind_group,
            buffers,
            quad,
            instances,
        })
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), String> {
        draw::draw_frame(self, frame)
    }
}
