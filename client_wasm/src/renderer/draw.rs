use super::resources::{InstanceData, WHITE};
use super::Renderer;
use game_core::render::Frame;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let count = update_instances(renderer, frame);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_rects(renderer, &mut pass, count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Upload the frame's rectangles, returning how many were written
fn update_instances(renderer: &mut Renderer, frame: &Frame) -> u32 {
    let capacity = renderer.buffers.capacity;
    if frame.rects.len() > capacity {
        log::warn!(
            "Frame has {} rects, drawing the first {}",
            frame.rects.len(),
            capacity
        );
    }

    renderer.instances.clear();
    renderer.instances.extend(
        frame
            .rects
            .iter()
            .take(capacity)
            .map(|rect| InstanceData::from_rect(rect, WHITE)),
    );

    if !renderer.instances.is_empty() {
        renderer.queue.write_buffer(
            &renderer.buffers.instances,
            0,
            bytemuck::cast_slice(&renderer.instances),
        );
    }
    renderer.instances.len() as u32
}

fn draw_rects<'a>(renderer: &'a Renderer, pass: &mut RenderPass<'a>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}
