mod constraint;
mod context;
mod edges;
mod error;
mod front;
mod hull;
pub mod loader;
mod polygon;
mod shape;
mod triangles;
mod triangulation;
mod triangulator;
mod utils;
pub mod validate;
mod vertices;

pub use error::Error;
pub use triangulation::{Edge, Triangle, Triangulation};
pub use triangulator::{Observer, Triangulator, TriangulatorBuilder};

/// exported to enable observer
pub use context::Context;
pub use edges::{EdgeId, EdgeStore};
pub use front::{Insertion, SweepFront};
pub use shape::{InnerEdge, InnerTriangle, Point, Vertex};
pub use triangles::{TriangleId, TriangleStore};
pub use utils::{in_circle, orient_2d, Orientation};
pub use vertices::{VertexId, Vertices};
