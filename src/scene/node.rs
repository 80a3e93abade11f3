use glam::Mat4;

use crate::graphics::{PrimitiveMode, VertexLayout};

/// Index of a node inside its [`Scene`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Drawable vertex data with its attribute layout and topology.
#[derive(Debug, Clone)]
pub struct Geometry {
    data: Vec<f32>,
    layout: VertexLayout,
    mode: PrimitiveMode,
}

impl Geometry {
    pub fn new(data: Vec<f32>, layout: VertexLayout, mode: PrimitiveMode) -> Self {
        Self { data, layout, mode }
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    pub fn vertex_count(&self) -> i32 {
        let components = self.layout.components_per_vertex() as usize;
        if components == 0 {
            0
        } else {
            (self.data.len() / components) as i32
        }
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Group,
    Geometry(Geometry),
}

/// A scene-graph node: a visibility flag, a world transform maintained by the
/// host, and either grouping structure or drawable geometry.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    visible: bool,
    world: Mat4,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.kind {
            NodeKind::Geometry(geometry) => Some(geometry),
            NodeKind::Group => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn world(&self) -> Mat4 {
        self.world
    }

    pub fn set_world(&mut self, world: Mat4) {
        self.world = world;
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed scene graph.
///
/// Nodes are stored flat and addressed by [`NodeId`]; the tree shape lives in
/// per-node child lists. World matrices are supplied by the host when nodes
/// are added or updated, there is no hierarchy propagation here.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self, parent: Option<NodeId>, world: Mat4) -> NodeId {
        self.insert(parent, NodeKind::Group, world)
    }

    pub fn add_geometry(
        &mut self,
        parent: Option<NodeId>,
        world: Mat4,
        geometry: Geometry,
    ) -> NodeId {
        self.insert(parent, NodeKind::Geometry(geometry), world)
    }

    fn insert(&mut self, parent: Option<NodeId>, kind: NodeKind, world: Mat4) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            visible: true,
            world,
            children: Vec::new(),
        });

        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }

        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first pre-order traversal over all node ids.
    pub fn iter(&self) -> SceneIter<'_> {
        let mut stack = Vec::with_capacity(self.roots.len());
        stack.extend(self.roots.iter().rev());
        SceneIter { scene: self, stack }
    }
}

pub struct SceneIter<'a> {
    scene: &'a Scene,
    stack: Vec<NodeId>,
}

impl Iterator for SceneIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for &child in self.scene.nodes[id.0].children.iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
