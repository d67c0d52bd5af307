/// Software rendering: painter's-algorithm pipeline and a CPU draw target
pub mod framebuffer;
pub mod pipeline;
pub mod surface;

pub use framebuffer::Framebuffer;
pub use pipeline::{
    denormalize, order_blocks, visible_faces, FrameStats, RenderConfig, Renderer,
};
pub use surface::DrawSurface;
