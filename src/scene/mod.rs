pub mod camera;
pub mod node;

pub use camera::{Camera, OrthographicCamera, PerspectiveCamera};
pub use node::{Geometry, Node, NodeId, NodeKind, Scene};
