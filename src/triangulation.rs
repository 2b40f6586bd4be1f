use rustc_hash::FxHashMap;

use crate::{
    context::Context,
    edges::EdgeId,
    shape::Point,
    triangles::TriangleId,
    validate::{self, Violation},
    vertices::VertexId,
};

/// Output triangle, in input indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// counter clockwise
    pub vertices: [usize; 3],
    pub points: [Point; 3],
    /// `edges[i]` is opposite `vertices[i]`, index into [`Triangulation::edges`]
    pub edges: [usize; 3],
}

/// Output edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub vertices: [usize; 2],
    /// index into [`Triangulation::triangles`], the first slot is always set
    pub triangles: [Option<usize>; 2],
    pub constrained: bool,
}

impl Edge {
    pub fn triangle_count(&self) -> usize {
        self.triangles.iter().flatten().count()
    }

    /// whether the edge borders two triangles
    pub fn is_internal(&self) -> bool {
        self.triangle_count() == 2
    }
}

/// The result of triangulate
#[derive(Debug, Clone)]
pub struct Triangulation {
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    edges: Vec<Edge>,
    hull: Vec<usize>,
}

impl Triangulation {
    pub(crate) fn from_context(context: &Context, hull: &[VertexId]) -> Self {
        let index = |v: VertexId| context.index(v) as usize;

        let mut edge_map = FxHashMap::<EdgeId, usize>::default();
        let mut edges = Vec::with_capacity(context.edges.len());
        for (id, edge) in context.edges.iter() {
            edge_map.insert(id, edges.len());
            edges.push(Edge {
                vertices: edge.vertices.map(index),
                triangles: [None; 2],
                constrained: edge.constrained,
            });
        }

        let mut triangle_map = FxHashMap::<TriangleId, usize>::default();
        let mut triangles = Vec::with_capacity(context.triangles.len());
        for (id, triangle) in context.triangles.iter() {
            let at = triangles.len();
            triangle_map.insert(id, at);
            triangles.push(Triangle {
                vertices: triangle.vertices.map(index),
                points: triangle.vertices.map(|v| context.point(v)),
                edges: triangle.edges.map(|e| edge_map[&e]),
            });
        }

        for (id, edge) in context.edges.iter() {
            let out = &mut edges[edge_map[&id]];
            for (slot, t) in out.triangles.iter_mut().zip(edge.triangles()) {
                *slot = Some(triangle_map[&t]);
            }
        }

        Self {
            points: context.vertices.input_points().collect(),
            triangles,
            edges,
            hull: hull.iter().map(|v| index(*v)).collect(),
        }
    }

    /// input points, indexed by input index
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn constrained_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|e| e.constrained)
    }

    /// Convex hull, input indices in counter clockwise order starting at the
    /// lowest point
    pub fn hull(&self) -> &[usize] {
        &self.hull
    }

    /// triangle vertex indices, three per triangle, ready for an index buffer
    pub fn triangle_list_indices(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .flat_map(|t| t.vertices.map(|v| v as u32))
            .collect()
    }

    /// Check the structural and geometric properties of the result
    pub fn check(&self) -> Result<(), Violation> {
        validate::check_triangulation(self)
    }
}

impl<'a> IntoIterator for &'a Triangulation {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
