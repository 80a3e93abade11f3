use glam::Mat4;
use log::{error, info, trace};
use thiserror::Error;

use crate::graphics::{GraphicsContext, GraphicsError, ShaderError, ShaderProgram, VertexArray, VertexBuffer};
use crate::renderer::Renderable;
use crate::scene::{Camera, Scene};
use crate::settings::RenderSettings;

const DEFAULT_SHADER: &str = include_str!("../shader/scene.glsl");

const MODEL_UNIFORM: &str = "model";
const VIEW_UNIFORM: &str = "view";
const PROJECTION_UNIFORM: &str = "projection";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}

/// Renders a scene with a camera through a [`GraphicsContext`].
///
/// The host windowing runtime drives the four lifecycle entry points serially
/// on the context thread: [`init`](Self::init) once, [`reshape`](Self::reshape)
/// on viewport changes, [`display`](Self::display) once per frame and
/// [`dispose`](Self::dispose) at teardown.
pub struct Renderer<C: GraphicsContext> {
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
    shader_override: Option<String>,
    program: Option<ShaderProgram<C>>,
    renderables: Vec<Renderable<C>>,
}

impl<C: GraphicsContext> Renderer<C> {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self::with_settings(scene, camera, RenderSettings::default())
    }

    pub fn with_settings(scene: Scene, camera: Camera, settings: RenderSettings) -> Self {
        Self {
            scene,
            camera,
            settings,
            shader_override: None,
            program: None,
            renderables: Vec::new(),
        }
    }

    /// Replaces the configured shader text with an explicit source blob.
    /// Takes precedence over `shader_path` in the settings.
    pub fn with_shader_source(mut self, source: impl Into<String>) -> Self {
        self.shader_override = Some(source.into());
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// One-time setup: enables depth testing, builds the shader program and
    /// makes it active. A failure is logged and returned; the renderer stays
    /// unusable until a later `init` succeeds.
    pub fn init(&mut self, gl: &C) -> Result<(), RenderError> {
        gl.enable_depth_test();

        if let Some(previous) = self.program.take() {
            previous.release(gl);
        }

        match self.build_program(gl) {
            Ok(program) => {
                program.activate(gl);
                self.program = Some(program);
                info!("scene shader program linked and active");
                Ok(())
            }
            Err(err) => {
                error!("renderer init failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Feeds new viewport dimensions to the camera, which recomputes its
    /// projection. A zero height is clamped before the aspect division.
    pub fn reshape(&mut self, width: u32, height: u32) {
        let width = width as f32;
        let height = height.max(1) as f32;
        self.camera.resize(width, height);
    }

    /// Renders one frame: clears the target, re-activates the program,
    /// rebuilds the renderable set from the current scene graph and draws it.
    ///
    /// The rebuild discards every GPU resource of the previous frame before
    /// allocating fresh ones; there is no reuse across frames.
    pub fn display(&mut self, gl: &C) -> Result<(), RenderError> {
        gl.clear(self.settings.clear_color);

        // Host glue may have changed the program binding between callbacks,
        // so the program is re-activated every frame.
        self.program
            .as_ref()
            .expect("display() called before a successful init()")
            .activate(gl);

        self.release_renderables(gl);
        self.build_renderables(gl)?;
        self.draw(gl);
        Ok(())
    }

    /// Releases all GPU resources. Safe to call more than once.
    pub fn dispose(&mut self, gl: &C) {
        self.release_renderables(gl);
        if let Some(program) = self.program.take() {
            program.release(gl);
        }
    }

    fn build_program(&self, gl: &C) -> Result<ShaderProgram<C>, ShaderError> {
        let text = match (&self.shader_override, &self.settings.shader_path) {
            (Some(source), _) => source.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => DEFAULT_SHADER.to_owned(),
        };
        ShaderProgram::from_source(gl, &text)
    }

    fn release_renderables(&mut self, gl: &C) {
        gl.bind_vertex_array(None);
        for renderable in self.renderables.drain(..) {
            renderable.release(gl);
        }
    }

    /// Walks the scene depth-first in pre-order and allocates a fresh vertex
    /// array and buffer for every geometry node.
    ///
    /// On a mid-traversal failure the half-built pair is released before the
    /// error propagates; renderables recorded so far stay tracked and are
    /// freed by the next release pass.
    fn build_renderables(&mut self, gl: &C) -> Result<(), RenderError> {
        for id in self.scene.iter() {
            let Some(geometry) = self.scene.node(id).geometry() else {
                continue;
            };

            let vertex_array = VertexArray::new(gl)?;
            vertex_array.bind(gl);

            let vertex_buffer = match VertexBuffer::new(gl, geometry.data()) {
                Ok(buffer) => buffer,
                Err(err) => {
                    vertex_array.release(gl);
                    return Err(err.into());
                }
            };

            vertex_array.attach_buffer(gl, &vertex_buffer, geometry.layout());
            self.renderables.push(Renderable::new(id, vertex_array, vertex_buffer));
        }

        trace!("rebuilt {} renderables", self.renderables.len());
        Ok(())
    }

    /// Issues one draw call per renderable whose node is visible and still a
    /// geometry, in traversal order. Occlusion is left to the depth buffer.
    fn draw(&self, gl: &C) {
        let Some(program) = &self.program else {
            return;
        };

        for renderable in &self.renderables {
            let node = self.scene.node(renderable.node());
            if !node.is_visible() {
                continue;
            }
            let Some(geometry) = node.geometry() else {
                continue;
            };

            renderable.vertex_array().bind(gl);
            self.upload_matrices(gl, program, node.world());
            gl.draw_arrays(geometry.mode(), 0, geometry.vertex_count());
        }
    }

    fn upload_matrices(&self, gl: &C, program: &ShaderProgram<C>, model: Mat4) {
        let uniforms = [
            (MODEL_UNIFORM, model),
            (VIEW_UNIFORM, self.camera.world()),
            (PROJECTION_UNIFORM, self.camera.projection()),
        ];

        for (name, matrix) in uniforms {
            if let Some(location) = gl.uniform_location(program.id(), name) {
                gl.set_uniform_matrix(&location, &matrix);
            }
        }
    }
}
