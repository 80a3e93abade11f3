//! In-memory graphics context used by the unit tests.
//!
//! Hands out integer handles, tracks which objects are alive and records
//! every draw-relevant call so tests can assert on resource lifetimes and
//! submitted work without a real GPU. Compile, link and validation failures
//! can be scripted with a synthetic diagnostic log.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use glam::Mat4;

use crate::graphics::{GraphicsContext, GraphicsError, PrimitiveMode, ShaderStage};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawCall {
    pub mode: PrimitiveMode,
    pub first: i32,
    pub count: i32,
    pub vertex_array: Option<u32>,
    pub program: Option<u32>,
}

#[derive(Default)]
struct State {
    next_handle: u32,
    stages: HashMap<u32, ShaderStage>,
    created_stages: Vec<ShaderStage>,
    live_shaders: HashSet<u32>,
    live_programs: HashSet<u32>,
    live_buffers: HashSet<u32>,
    live_vertex_arrays: HashSet<u32>,
    created_vertex_arrays: Vec<u32>,
    released_vertex_arrays: Vec<u32>,
    bound_vertex_array: Option<u32>,
    bound_buffer: Option<u32>,
    active_program: Option<u32>,
    buffer_uploads: Vec<Vec<u8>>,
    attributes: Vec<(u32, i32, i32, i32)>,
    uniform_uploads: Vec<(String, Mat4)>,
    draw_calls: Vec<DrawCall>,
    clears: Vec<[f32; 4]>,
    depth_test_enabled: bool,
    fail_compile: HashSet<ShaderStage>,
    fail_link: bool,
    fail_validate: bool,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

#[derive(Default)]
pub(crate) struct RecordingContext {
    state: RefCell<State>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compile_failure(self, stage: ShaderStage) -> Self {
        self.state.borrow_mut().fail_compile.insert(stage);
        self
    }

    pub fn with_link_failure(self) -> Self {
        self.state.borrow_mut().fail_link = true;
        self
    }

    pub fn with_validate_failure(self) -> Self {
        self.state.borrow_mut().fail_validate = true;
        self
    }

    pub fn live_object_count(&self) -> usize {
        let state = self.state.borrow();
        state.live_shaders.len()
            + state.live_programs.len()
            + state.live_buffers.len()
            + state.live_vertex_arrays.len()
    }

    pub fn live_shaders(&self) -> usize {
        self.state.borrow().live_shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.state.borrow().live_programs.len()
    }

    pub fn created_stages(&self) -> Vec<ShaderStage> {
        self.state.borrow().created_stages.clone()
    }

    pub fn created_vertex_arrays(&self) -> Vec<u32> {
        self.state.borrow().created_vertex_arrays.clone()
    }

    pub fn released_vertex_arrays(&self) -> Vec<u32> {
        self.state.borrow().released_vertex_arrays.clone()
    }

    pub fn active_program(&self) -> Option<u32> {
        self.state.borrow().active_program
    }

    pub fn bound_buffer(&self) -> Option<u32> {
        self.state.borrow().bound_buffer
    }

    pub fn depth_test_enabled(&self) -> bool {
        self.state.borrow().depth_test_enabled
    }

    pub fn buffer_uploads(&self) -> Vec<Vec<u8>> {
        self.state.borrow().buffer_uploads.clone()
    }

    pub fn attributes(&self) -> Vec<(u32, i32, i32, i32)> {
        self.state.borrow().attributes.clone()
    }

    pub fn uniform_uploads(&self) -> Vec<(String, Mat4)> {
        self.state.borrow().uniform_uploads.clone()
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.state.borrow().draw_calls.clone()
    }

    pub fn clears(&self) -> Vec<[f32; 4]> {
        self.state.borrow().clears.clone()
    }
}

impl GraphicsContext for RecordingContext {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, GraphicsError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        state.stages.insert(id, stage);
        state.created_stages.push(stage);
        state.live_shaders.insert(id);
        Ok(id)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {}

    fn compile_shader(&self, _shader: u32) {}

    fn shader_compile_status(&self, shader: u32) -> bool {
        let state = self.state.borrow();
        let stage = state.stages[&shader];
        !state.fail_compile.contains(&stage)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1: synthetic compile failure".to_owned()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.state.borrow_mut().live_shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, GraphicsError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        state.live_programs.insert(id);
        Ok(id)
    }

    fn attach_shader(&self, _program: u32, _shader: u32) {}

    fn link_program(&self, _program: u32) {}

    fn validate_program(&self, _program: u32) {}

    fn program_link_status(&self, _program: u32) -> bool {
        !self.state.borrow().fail_link
    }

    fn program_validate_status(&self, _program: u32) -> bool {
        !self.state.borrow().fail_validate
    }

    fn program_info_log(&self, _program: u32) -> String {
        let state = self.state.borrow();
        if state.fail_link || state.fail_validate {
            "synthetic link failure".to_owned()
        } else {
            String::new()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.state.borrow_mut().active_program = program;
    }

    fn delete_program(&self, program: u32) {
        self.state.borrow_mut().live_programs.remove(&program);
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<String> {
        Some(name.to_owned())
    }

    fn set_uniform_matrix(&self, location: &String, matrix: &Mat4) {
        self.state
            .borrow_mut()
            .uniform_uploads
            .push((location.clone(), *matrix));
    }

    fn create_buffer(&self) -> Result<u32, GraphicsError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        state.live_buffers.insert(id);
        Ok(id)
    }

    fn bind_buffer(&self, buffer: Option<u32>) {
        self.state.borrow_mut().bound_buffer = buffer;
    }

    fn buffer_data(&self, data: &[u8]) {
        self.state.borrow_mut().buffer_uploads.push(data.to_vec());
    }

    fn delete_buffer(&self, buffer: u32) {
        self.state.borrow_mut().live_buffers.remove(&buffer);
    }

    fn create_vertex_array(&self) -> Result<u32, GraphicsError> {
        let mut state = self.state.borrow_mut();
        let id = state.alloc();
        state.live_vertex_arrays.insert(id);
        state.created_vertex_arrays.push(id);
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.state.borrow_mut().bound_vertex_array = vertex_array;
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut state = self.state.borrow_mut();
        state.live_vertex_arrays.remove(&vertex_array);
        state.released_vertex_arrays.push(vertex_array);
    }

    fn vertex_attribute(&self, index: u32, components: i32, stride: i32, offset: i32) {
        self.state
            .borrow_mut()
            .attributes
            .push((index, components, stride, offset));
    }

    fn enable_depth_test(&self) {
        self.state.borrow_mut().depth_test_enabled = true;
    }

    fn clear(&self, color: [f32; 4]) {
        self.state.borrow_mut().clears.push(color);
    }

    fn draw_arrays(&self, mode: PrimitiveMode, first: i32, count: i32) {
        let mut state = self.state.borrow_mut();
        let call = DrawCall {
            mode,
            first,
            count,
            vertex_array: state.bound_vertex_array,
            program: state.active_program,
        };
        state.draw_calls.push(call);
    }
}
