use std::mem;

use super::context::{GraphicsContext, GraphicsError};

/// Interleaved f32 attribute layout of a vertex buffer.
///
/// Attributes are listed in location order as component counts, e.g.
/// `VertexLayout::new().with(3).with(3)` for a position plus a color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLayout {
    attributes: Vec<u32>,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, components: u32) -> Self {
        self.push(components);
        self
    }

    pub fn push(&mut self, components: u32) {
        self.attributes.push(components);
    }

    pub fn attributes(&self) -> &[u32] {
        &self.attributes
    }

    pub fn components_per_vertex(&self) -> u32 {
        self.attributes.iter().sum()
    }

    pub fn stride(&self) -> i32 {
        (self.components_per_vertex() as usize * mem::size_of::<f32>()) as i32
    }
}

/// An owned GPU buffer holding interleaved f32 vertex data.
pub struct VertexBuffer<C: GraphicsContext> {
    id: C::Buffer,
}

impl<C: GraphicsContext> VertexBuffer<C> {
    /// Allocates a buffer and uploads `data` into it, leaving it bound.
    pub fn new(gl: &C, data: &[f32]) -> Result<Self, GraphicsError> {
        let id = gl.create_buffer()?;
        gl.bind_buffer(Some(id));
        gl.buffer_data(bytemuck::cast_slice(data));
        Ok(Self { id })
    }

    pub fn id(&self) -> C::Buffer {
        self.id
    }

    pub fn bind(&self, gl: &C) {
        gl.bind_buffer(Some(self.id));
    }

    pub fn release(self, gl: &C) {
        gl.delete_buffer(self.id);
    }
}

/// An owned GPU vertex array object.
pub struct VertexArray<C: GraphicsContext> {
    id: C::VertexArray,
}

impl<C: GraphicsContext> VertexArray<C> {
    pub fn new(gl: &C) -> Result<Self, GraphicsError> {
        let id = gl.create_vertex_array()?;
        Ok(Self { id })
    }

    pub fn id(&self) -> C::VertexArray {
        self.id
    }

    pub fn bind(&self, gl: &C) {
        gl.bind_vertex_array(Some(self.id));
    }

    /// Declares `layout` over `buffer` for this vertex array, enabling one
    /// attribute slot per layout entry with interleaved offsets.
    pub fn attach_buffer(&self, gl: &C, buffer: &VertexBuffer<C>, layout: &VertexLayout) {
        self.bind(gl);
        buffer.bind(gl);

        let stride = layout.stride();
        let mut offset = 0i32;

        for (index, &components) in layout.attributes().iter().enumerate() {
            gl.vertex_attribute(index as u32, components as i32, stride, offset);
            offset += (components as usize * mem::size_of::<f32>()) as i32;
        }
    }

    pub fn release(self, gl: &C) {
        gl.delete_vertex_array(self.id);
    }
}
