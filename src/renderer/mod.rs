pub mod renderable;
pub mod renderer;

pub use renderable::Renderable;
pub use renderer::{RenderError, Renderer};
