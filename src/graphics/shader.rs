use std::fmt;

use thiserror::Error;

use super::context::{GraphicsContext, GraphicsError, ShaderStage};
use super::source::ShaderSource;

#[derive(Debug, Error)]
pub enum ShaderError {
    /// The shader text has content before any stage marker line.
    #[error("shader source has content before any stage marker")]
    MalformedSource,
    #[error("failed to read shader source: {0}")]
    Io(#[from] std::io::Error),
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("shader program failed to link: {log}")]
    Link { log: String },
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}

/// A linked and validated GPU program built from a vertex and a fragment
/// stage.
///
/// A value of this type always refers to a usable program: construction fails
/// instead of handing out a handle that did not compile, link, or validate.
/// [`release`](Self::release) consumes the value, so a freed handle cannot be
/// activated or freed twice.
pub struct ShaderProgram<C: GraphicsContext> {
    id: C::Program,
}

impl<C: GraphicsContext> fmt::Debug for ShaderProgram<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaderProgram").field("id", &self.id).finish()
    }
}

impl<C: GraphicsContext> ShaderProgram<C> {
    /// Compiles both stages and links them into a program.
    ///
    /// The fragment stage is not compiled if the vertex stage fails, so the
    /// first diagnostic is the real one. Stage objects are deleted on every
    /// path once the link outcome is known, and a program object that failed
    /// to link or validate is deleted before the error is returned.
    pub fn new(gl: &C, vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vertex = Self::compile_stage(gl, ShaderStage::Vertex, vertex_source)?;
        let fragment = match Self::compile_stage(gl, ShaderStage::Fragment, fragment_source) {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(err) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(err.into());
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.validate_program(program);

        // The stage objects are no longer needed once linked, on success or
        // failure.
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if !gl.program_link_status(program) || !gl.program_validate_status(program) {
            let log = gl.program_info_log(program);
            gl.delete_program(program);
            return Err(ShaderError::Link { log });
        }

        Ok(Self { id: program })
    }

    /// Builds a program straight from tagged two-section shader text.
    pub fn from_source(gl: &C, text: &str) -> Result<Self, ShaderError> {
        let source = ShaderSource::parse(text)?;
        Self::new(gl, source.vertex(), source.fragment())
    }

    pub fn id(&self) -> C::Program {
        self.id
    }

    /// Makes this program the active one for subsequent draw calls.
    pub fn activate(&self, gl: &C) {
        gl.use_program(Some(self.id));
    }

    /// Frees the GPU program object.
    pub fn release(self, gl: &C) {
        gl.delete_program(self.id);
    }

    fn compile_stage(gl: &C, stage: ShaderStage, source: &str) -> Result<C::Shader, ShaderError> {
        let shader = gl.create_shader(stage)?;

        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.shader_compile_status(shader) {
            let log = gl.shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(shader)
    }
}
