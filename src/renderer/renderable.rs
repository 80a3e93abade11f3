use crate::graphics::{GraphicsContext, VertexArray, VertexBuffer};
use crate::scene::NodeId;

/// A drawable node paired with the GPU resources uploaded for it this frame.
///
/// The node itself stays owned by the scene; the vertex array and its backing
/// buffer are owned here and released when the renderable set is rebuilt or
/// the renderer is disposed.
pub struct Renderable<C: GraphicsContext> {
    node: NodeId,
    vertex_array: VertexArray<C>,
    vertex_buffer: VertexBuffer<C>,
}

impl<C: GraphicsContext> Renderable<C> {
    pub(crate) fn new(
        node: NodeId,
        vertex_array: VertexArray<C>,
        vertex_buffer: VertexBuffer<C>,
    ) -> Self {
        Self {
            node,
            vertex_array,
            vertex_buffer,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn vertex_array(&self) -> &VertexArray<C> {
        &self.vertex_array
    }

    pub(crate) fn release(self, gl: &C) {
        self.vertex_buffer.release(gl);
        self.vertex_array.release(gl);
    }
}
