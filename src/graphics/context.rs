use std::fmt;
use std::hash::Hash;

use glam::Mat4;
use thiserror::Error;

/// A GPU-side object could not be allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("graphics object allocation failed: {0}")]
pub struct GraphicsError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Primitive topology for array draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

/// The slice of the graphics API the renderer drives.
///
/// The renderer consumes this surface and never implements it; the production
/// backend is [`GlContext`](crate::graphics::GlContext). Every call must be
/// made on the thread that owns the underlying context. Handle types are
/// plain copyable ids; dropping one does not free the GPU object, the
/// matching `delete_*` call does.
pub trait GraphicsContext {
    type Shader: Copy + Eq + Hash + fmt::Debug;
    type Program: Copy + Eq + Hash + fmt::Debug;
    type Buffer: Copy + Eq + Hash + fmt::Debug;
    type VertexArray: Copy + Eq + Hash + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, GraphicsError>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Full compiler diagnostic text, never truncated. Backends query the
    /// log length first and then fetch exactly that many bytes as UTF-8.
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, GraphicsError>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn validate_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_validate_status(&self, program: Self::Program) -> bool;
    /// Full linker diagnostic text, fetched the same way as
    /// [`shader_info_log`](Self::shader_info_log).
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn set_uniform_matrix(&self, location: &Self::UniformLocation, matrix: &Mat4);

    fn create_buffer(&self) -> Result<Self::Buffer, GraphicsError>;
    fn bind_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the currently bound buffer.
    fn buffer_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GraphicsError>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    /// Declares one enabled f32 attribute of the bound vertex array, sourced
    /// from the bound buffer at the given stride and byte offset.
    fn vertex_attribute(&self, index: u32, components: i32, stride: i32, offset: i32);

    fn enable_depth_test(&self);
    /// Clears the color and depth buffers to the given background color.
    fn clear(&self, color: [f32; 4]);
    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32);
}
