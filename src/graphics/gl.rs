use glam::Mat4;
use glow::HasContext;

use super::context::{GraphicsContext, GraphicsError, PrimitiveMode, ShaderStage};

/// OpenGL 3.3 core backend over a host-created [`glow::Context`].
///
/// The host owns window and context creation; this wrapper only issues calls,
/// and must stay on the thread the context was made current on.
pub struct GlContext {
    gl: glow::Context,
}

impl GlContext {
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Escape hatch for host glue that needs the raw context.
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }
}

fn stage_kind(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn mode_kind(mode: PrimitiveMode) -> u32 {
    match mode {
        PrimitiveMode::Points => glow::POINTS,
        PrimitiveMode::Lines => glow::LINES,
        PrimitiveMode::LineStrip => glow::LINE_STRIP,
        PrimitiveMode::LineLoop => glow::LINE_LOOP,
        PrimitiveMode::Triangles => glow::TRIANGLES,
        PrimitiveMode::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveMode::TriangleFan => glow::TRIANGLE_FAN,
    }
}

impl GraphicsContext for GlContext {
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type Buffer = glow::NativeBuffer;
    type VertexArray = glow::NativeVertexArray;
    type UniformLocation = glow::NativeUniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, GraphicsError> {
        unsafe { self.gl.create_shader(stage_kind(stage)).map_err(GraphicsError) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        // glow queries INFO_LOG_LENGTH and reads exactly that many bytes, so
        // long compiler diagnostics come back whole.
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, GraphicsError> {
        unsafe { self.gl.create_program().map_err(GraphicsError) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn validate_program(&self, program: Self::Program) {
        unsafe { self.gl.validate_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_validate_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_parameter_i32(program, glow::VALIDATE_STATUS) != 0 }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn set_uniform_matrix(&self, location: &Self::UniformLocation, matrix: &Mat4) {
        unsafe {
            self.gl
                .uniform_matrix_4_f32_slice(Some(location), false, &matrix.to_cols_array())
        }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, GraphicsError> {
        unsafe { self.gl.create_buffer().map_err(GraphicsError) }
    }

    fn bind_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer) }
    }

    fn buffer_data(&self, data: &[u8]) {
        unsafe {
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW)
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, GraphicsError> {
        unsafe { self.gl.create_vertex_array().map_err(GraphicsError) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn vertex_attribute(&self, index: u32, components: i32, stride: i32, offset: i32) {
        unsafe {
            self.gl.enable_vertex_attrib_array(index);
            self.gl
                .vertex_attrib_pointer_f32(index, components, glow::FLOAT, false, stride, offset);
        }
    }

    fn enable_depth_test(&self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) }
    }

    fn clear(&self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(mode_kind(mode), first, count) }
    }
}
