//! Minimal real-time 3D scene renderer over an OpenGL-style graphics
//! context.
//!
//! The host windowing runtime owns context creation and drives the
//! [`Renderer`] lifecycle serially on one thread: `init` once, `reshape` on
//! viewport changes, `display` once per frame and `dispose` at teardown.

pub mod graphics;
pub mod renderer;
pub mod scene;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use graphics::{
    GlContext, GraphicsContext, GraphicsError, PrimitiveMode, ShaderError, ShaderProgram,
    ShaderSource, ShaderStage, VertexArray, VertexBuffer, VertexLayout,
};
pub use renderer::{RenderError, Renderable, Renderer};
pub use scene::{
    Camera, Geometry, Node, NodeId, NodeKind, OrthographicCamera, PerspectiveCamera, Scene,
};
pub use settings::RenderSettings;
