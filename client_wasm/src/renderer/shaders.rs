/// Instanced rectangles in pixel space
pub const PONG_SHADER: &str = include_str!("../../shaders/pong.wgsl");
