mod canvas;
mod context;
mod render;

pub use canvas::{Canvas2d, CanvasVertex};
pub use context::GpuContext;
pub use render::CanvasRenderer;
