pub mod buffer;
pub mod context;
pub mod gl;
pub mod shader;
pub mod source;

pub use buffer::{VertexArray, VertexBuffer, VertexLayout};
pub use context::{GraphicsContext, GraphicsError, PrimitiveMode, ShaderStage};
pub use gl::GlContext;
pub use shader::{ShaderError, ShaderProgram};
pub use source::ShaderSource;
