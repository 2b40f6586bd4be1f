use crate::{
    edges::{EdgeId, EdgeStore},
    front::SweepFront,
    shape::{InnerTriangle, Point},
    triangles::{TriangleId, TriangleStore},
    utils::orient_2d,
    vertices::{VertexId, Vertices},
};

/// Mesh state of one triangulation run. Exposed to [`crate::Observer`]s.
pub struct Context {
    pub vertices: Vertices,
    pub edges: EdgeStore,
    pub triangles: TriangleStore,
    pub front: SweepFront,

    // reusable legalize task queue to reduce alloc overhead
    pub(crate) legalize_queue: Vec<EdgeId>,
}

impl Context {
    /// Build the seed triangle over the two synthetic vertices and the first
    /// swept vertex, and the initial front.
    pub fn new(vertices: Vertices) -> Self {
        let capacity = vertices.len() * 3;
        let mut context = Self {
            edges: EdgeStore::with_capacity(capacity),
            triangles: TriangleStore::with_capacity(capacity * 2),
            front: SweepFront {
                head: EdgeId::INVALID,
                tail: EdgeId::INVALID,
            },
            legalize_queue: Vec::with_capacity(32),
            vertices,
        };

        let left = context.vertices.synthetic_left;
        let right = context.vertices.synthetic_right;
        let first = context
            .vertices
            .get_id_by_order(0)
            .expect("vertices are validated to hold at least 3 points");

        let base = context.edges.insert(left, right);
        let left_edge = context.edges.insert(left, first);
        let right_edge = context.edges.insert(first, right);
        context.create_triangle([left, right, first], [right_edge, left_edge, base]);
        context.front = SweepFront::new(left_edge, right_edge, &mut context.edges);

        context
    }

    pub fn point(&self, v: VertexId) -> Point {
        self.vertices.point(v)
    }

    /// input index of a vertex, negative for the synthetic ones
    pub fn index(&self, v: VertexId) -> isize {
        self.vertices.vertex(v).index
    }

    pub fn find_edge(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.edges.find(a, b)
    }

    pub fn create_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        self.edges.insert(a, b)
    }

    /// Create a triangle and register it with its edges.
    /// `edges[i]` must join the two vertices other than `vertices[i]`.
    pub fn create_triangle(&mut self, vertices: [VertexId; 3], edges: [EdgeId; 3]) -> TriangleId {
        debug_assert!(
            orient_2d(
                self.point(vertices[0]),
                self.point(vertices[1]),
                self.point(vertices[2])
            )
            .is_ccw(),
            "triangle {vertices:?} is not counter clockwise"
        );
        debug_assert!(
            (0..3).all(|i| {
                edges[i]
                    .get(&self.edges)
                    .connects(vertices[(i + 1) % 3], vertices[(i + 2) % 3])
            }),
            "triangle edges do not border triangle {vertices:?}"
        );

        let id = self.triangles.insert(InnerTriangle::new(vertices, edges));
        for edge in edges {
            self.edges.get_mut_unchecked(edge).attach(id);
        }
        id
    }

    /// Remove the triangle and detach it from its edges
    pub fn remove_triangle(&mut self, id: TriangleId) -> InnerTriangle {
        let Some(triangle) = self.triangles.remove(id) else {
            panic!("triangle {id:?} is not alive");
        };
        for edge in triangle.edges {
            self.edges.get_mut_unchecked(edge).detach(id);
        }
        triangle
    }

    /// Remove a detached edge
    pub fn remove_edge(&mut self, id: EdgeId) {
        let edge = id.get(&self.edges);
        assert_eq!(edge.triangle_count(), 0, "edge still borders triangles");
        self.edges.remove(id);
    }

    /// whether the vertex is one of the two synthetic ones
    pub fn is_synthetic(&self, v: VertexId) -> bool {
        self.vertices.is_synthetic(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_triangle() {
        let vertices = Vertices::new(
            &[Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)],
            &[],
            0.4,
        )
        .unwrap();
        let context = Context::new(vertices);

        assert_eq!(context.triangles.len(), 1);
        assert_eq!(context.edges.len(), 3);

        let first = context.vertices.get_id_by_order(0).unwrap();
        assert_eq!(
            context.front.vertices(&context.edges),
            vec![
                context.vertices.synthetic_left,
                first,
                context.vertices.synthetic_right
            ]
        );

        let base = context
            .find_edge(
                context.vertices.synthetic_left,
                context.vertices.synthetic_right,
            )
            .unwrap();
        assert_eq!(base.get(&context.edges).triangle_count(), 1);
    }

    #[test]
    fn test_create_and_remove() {
        let vertices = Vertices::new(
            &[Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)],
            &[],
            0.4,
        )
        .unwrap();
        let mut context = Context::new(vertices);
        let [a, b, c] = [0, 1, 2].map(VertexId::from_index);

        let ea = context.create_edge(b, c);
        let eb = context.create_edge(c, a);
        let ec = context.create_edge(a, b);
        let t = context.create_triangle([a, b, c], [ea, eb, ec]);
        assert_eq!(t.get(&context.triangles).vertices, [a, b, c]);
        assert_eq!(context.triangles.len(), 2);
        assert_eq!(ea.get(&context.edges).first_triangle(), Some(t));

        let removed = context.remove_triangle(t);
        for edge in removed.edges {
            assert_eq!(edge.get(&context.edges).triangle_count(), 0);
            context.remove_edge(edge);
        }
        assert!(context.find_edge(a, b).is_none());
    }
}
