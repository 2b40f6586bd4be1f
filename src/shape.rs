use crate::{edges::EdgeId, triangles::TriangleId, vertices::VertexId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Default for Point {
    fn default() -> Self {
        Self { x: 0., y: 0. }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Vertex stored in the mesh.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub point: Point,
    /// input order, `-1` and `-2` are the synthetic left and right vertices
    pub index: isize,
    /// position in sweep order, synthetic vertices have none
    pub sorted_index: Option<usize>,
    /// earlier vertices (in sweep order) this one must be joined to
    pub constrained: Vec<VertexId>,
}

impl Vertex {
    pub(crate) fn new(point: Point, index: isize) -> Self {
        Self {
            point,
            index,
            sorted_index: None,
            constrained: Vec::new(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.index < 0
    }
}

/// The edge struct used internally.
#[derive(Debug, Clone, Copy)]
pub struct InnerEdge {
    /// while on the sweep front, `vertices[0]` is the left end
    pub vertices: [VertexId; 2],
    triangles: [TriangleId; 2],
    pub next: EdgeId,
    pub prev: EdgeId,
    pub constrained: bool,
}

impl InnerEdge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        debug_assert!(a != b, "edge needs two distinct vertices");
        Self {
            vertices: [a, b],
            triangles: [TriangleId::INVALID; 2],
            next: EdgeId::INVALID,
            prev: EdgeId::INVALID,
            constrained: false,
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertices[0] == v || self.vertices[1] == v
    }

    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.vertices[0] == a && self.vertices[1] == b)
            || (self.vertices[0] == b && self.vertices[1] == a)
    }

    /// The end which is not `v`
    pub fn other_vertex(&self, v: VertexId) -> VertexId {
        if self.vertices[0] == v {
            self.vertices[1]
        } else if self.vertices[1] == v {
            self.vertices[0]
        } else {
            panic!("vertex not part of this edge");
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.iter().filter(|t| !t.invalid()).count()
    }

    /// edge with two incident triangles
    pub fn is_internal(&self) -> bool {
        self.triangle_count() == 2
    }

    pub fn triangles(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.triangles.iter().copied().filter(|t| !t.invalid())
    }

    /// Both triangle slots, copied out so the edge store can be mutated
    /// right after
    pub fn triangle_pair(&self) -> [Option<TriangleId>; 2] {
        self.triangles.map(TriangleId::into_option)
    }

    /// First incident triangle, if any
    pub fn first_triangle(&self) -> Option<TriangleId> {
        self.triangles().next()
    }

    /// The triangle across this edge from `t`, `None` on the boundary
    pub fn other_triangle(&self, t: TriangleId) -> Option<TriangleId> {
        if self.triangles[0] == t {
            self.triangles[1].into_option()
        } else if self.triangles[1] == t {
            self.triangles[0].into_option()
        } else {
            panic!("edge not part of this triangle");
        }
    }

    pub(crate) fn attach(&mut self, t: TriangleId) {
        if self.triangles[0].invalid() {
            self.triangles[0] = t;
        } else if self.triangles[1].invalid() {
            self.triangles[1] = t;
        } else {
            panic!("edge already has two triangles");
        }
    }

    pub(crate) fn detach(&mut self, t: TriangleId) {
        if self.triangles[0] == t {
            self.triangles[0] = TriangleId::INVALID;
        } else if self.triangles[1] == t {
            self.triangles[1] = TriangleId::INVALID;
        } else {
            panic!("edge not part of this triangle");
        }
    }

    pub(crate) fn unlink(&mut self) {
        self.next = EdgeId::INVALID;
        self.prev = EdgeId::INVALID;
    }
}

/// The triangle struct used internally.
#[derive(Debug, Clone, Copy)]
pub struct InnerTriangle {
    /// counter clockwise
    pub vertices: [VertexId; 3],
    /// `edges[i]` is opposite to `vertices[i]`
    pub edges: [EdgeId; 3],
}

impl InnerTriangle {
    pub fn new(vertices: [VertexId; 3], edges: [EdgeId; 3]) -> Self {
        Self { vertices, edges }
    }

    #[inline(always)]
    pub fn vertex_index(&self, v: VertexId) -> Option<usize> {
        if self.vertices[0] == v {
            Some(0)
        } else if self.vertices[1] == v {
            Some(1)
        } else if self.vertices[2] == v {
            Some(2)
        } else {
            None
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.vertex_index(v).is_some()
    }

    pub fn edge_index(&self, e: EdgeId) -> Option<usize> {
        self.edges.iter().position(|x| *x == e)
    }

    pub fn edge_opposite(&self, v: VertexId) -> EdgeId {
        let Some(index) = self.vertex_index(v) else {
            panic!("vertex not part of this triangle");
        };
        self.edges[index]
    }

    pub fn vertex_opposite(&self, e: EdgeId) -> VertexId {
        let Some(index) = self.edge_index(e) else {
            panic!("edge not part of this triangle");
        };
        self.vertices[index]
    }

    /// The vertex which is neither `a` nor `b`
    pub fn third_vertex(&self, a: VertexId, b: VertexId) -> VertexId {
        match self
            .vertices
            .iter()
            .find(|v| **v != a && **v != b)
        {
            Some(v) => *v,
            None => panic!("triangle has no third vertex"),
        }
    }

    /// The vertex counter-clockwise to given vertex
    pub fn vertex_ccw(&self, v: VertexId) -> VertexId {
        match self.vertex_index(v) {
            Some(i) => self.vertices[(i + 1) % 3],
            None => panic!("vertex not part of this triangle"),
        }
    }

    /// The vertex clockwise to given vertex
    pub fn vertex_cw(&self, v: VertexId) -> VertexId {
        match self.vertex_index(v) {
            Some(i) => self.vertices[(i + 2) % 3],
            None => panic!("vertex not part of this triangle"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::from_index(i as usize)
    }

    fn e(i: usize) -> EdgeId {
        EdgeId::from_index(i)
    }

    #[test]
    fn test_triangle_accessors() {
        let t = InnerTriangle::new([v(1), v(2), v(3)], [e(10), e(11), e(12)]);
        assert_eq!(t.edge_opposite(v(2)), e(11));
        assert_eq!(t.vertex_opposite(e(12)), v(3));
        assert_eq!(t.third_vertex(v(3), v(1)), v(2));
        assert_eq!(t.vertex_ccw(v(3)), v(1));
        assert_eq!(t.vertex_cw(v(1)), v(3));
        assert!(t.contains(v(1)));
        assert!(!t.contains(v(4)));
    }

    #[test]
    #[should_panic(expected = "vertex not part of this triangle")]
    fn test_edge_opposite_foreign_vertex() {
        let t = InnerTriangle::new([v(1), v(2), v(3)], [e(10), e(11), e(12)]);
        t.edge_opposite(v(7));
    }

    #[test]
    fn test_edge_triangles() {
        let mut edge = InnerEdge::new(v(0), v(1));
        assert_eq!(edge.triangle_count(), 0);

        edge.attach(TriangleId::from_index(4));
        edge.attach(TriangleId::from_index(9));
        assert!(edge.is_internal());
        assert_eq!(
            edge.other_triangle(TriangleId::from_index(4)),
            Some(TriangleId::from_index(9))
        );

        edge.detach(TriangleId::from_index(4));
        assert_eq!(edge.triangle_count(), 1);
        assert_eq!(edge.other_triangle(TriangleId::from_index(9)), None);
        assert_eq!(edge.other_vertex(v(1)), v(0));
        assert!(edge.connects(v(1), v(0)));
    }

    #[test]
    #[should_panic(expected = "edge already has two triangles")]
    fn test_edge_third_triangle() {
        let mut edge = InnerEdge::new(v(0), v(1));
        edge.attach(TriangleId::from_index(0));
        edge.attach(TriangleId::from_index(1));
        edge.attach(TriangleId::from_index(2));
    }

    #[test]
    fn test_triangle_pair() {
        let mut edge = InnerEdge::new(v(0), v(1));
        assert_eq!(edge.triangle_pair(), [None, None]);

        edge.attach(TriangleId::from_index(3));
        edge.attach(TriangleId::from_index(5));
        edge.detach(TriangleId::from_index(3));
        assert_eq!(edge.triangle_pair(), [None, Some(TriangleId::from_index(5))]);

        edge.attach(TriangleId::from_index(8));
        assert_eq!(
            edge.triangle_pair(),
            [Some(TriangleId::from_index(8)), Some(TriangleId::from_index(5))]
        );
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(3., 4.);
        let b = Point::new(1., 1.);
        let d = a - b;
        assert_eq!(d, Point::new(2., 3.));
        assert_eq!(d.dot(Point::new(1., 0.)), 2.);
        assert!(!Point::new(f64::NAN, 0.).is_finite());
    }
}
