use crate::{
    context::Context,
    edges::EdgeId,
    shape::Point,
    triangles::TriangleId,
    triangulator::{Observer, Triangulator},
    utils::{orient_2d, segments_intersect, Orientation},
    vertices::VertexId,
    Error,
};

/// Cavity of triangles crossed by a constraint segment `p→q`
#[derive(Debug, Default)]
struct EdgeEvent {
    triangles: Vec<TriangleId>,
    crossed: Vec<EdgeId>,
    /// vertices left of `p→q`, from `p` towards `q`
    left: Vec<VertexId>,
    /// vertices right of `p→q`, from `p` towards `q`
    right: Vec<VertexId>,
}

/// Constrained edge related methods
impl Triangulator {
    /// Enforce the constraints homed on a freshly swept vertex. `left_edge`
    /// is the vertex's left front edge.
    pub(crate) fn constrain_edges(
        vertex: VertexId,
        left_edge: EdgeId,
        context: &mut Context,
        observer: &mut impl Observer,
    ) -> Result<(), Error> {
        if context.vertices.vertex(vertex).constrained.is_empty() {
            return Ok(());
        }
        let targets = context.vertices.vertex(vertex).constrained.clone();

        for target in targets {
            if let Some(edge) = context.find_edge(vertex, target) {
                context.edges.get_mut_unchecked(edge).constrained = true;
                observer.edge_constrained(edge, context);
                continue;
            }

            let event = match Self::walk_edge_event(vertex, target, left_edge, context) {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "constraint can not be enforced");
                    return Err(e);
                }
            };
            tracing::trace!(
                from = context.index(vertex),
                to = context.index(target),
                crossed = event.crossed.len(),
                "recover constrained edge"
            );
            Self::apply_edge_event(vertex, target, event, context, observer)?;
        }

        Ok(())
    }

    /// Collect the triangles and edges crossed by `p→q`, without touching the
    /// mesh.
    fn walk_edge_event(
        p: VertexId,
        q: VertexId,
        left_edge: EdgeId,
        context: &Context,
    ) -> Result<EdgeEvent, Error> {
        let from = context.index(p) as usize;
        let to = context.index(q) as usize;
        let outside = Error::ConstraintOutsideFront { from, to };
        let pp = context.point(p);
        let qp = context.point(q);

        // vertex strictly between p and q
        let check_through = |v: VertexId| -> Result<(), Error> {
            let vp = context.point(v);
            if v != q && orient_2d(pp, qp, vp).is_collinear() && is_between(pp, qp, vp) {
                return Err(Error::ConstraintThroughVertex {
                    from,
                    to,
                    through: context.index(v),
                });
            }
            Ok(())
        };

        // rotate around p, from its left front edge, to the triangle whose
        // far edge crosses the segment
        let mut edge = left_edge;
        let mut triangle = edge
            .get(&context.edges)
            .first_triangle()
            .ok_or(outside.clone())?;
        let (start, u, w) = loop {
            let t = triangle.get(&context.triangles);
            let u = edge.get(&context.edges).other_vertex(p);
            let w = t.third_vertex(p, u);
            check_through(u)?;
            check_through(w)?;

            if segments_intersect(pp, qp, context.point(u), context.point(w)) {
                break (triangle, u, w);
            }

            let next_edge = t.edge_opposite(u);
            match next_edge.get(&context.edges).other_triangle(triangle) {
                Some(next) => {
                    edge = next_edge;
                    triangle = next;
                }
                None => return Err(outside),
            }
        };

        let (mut left, mut right) = match orient_2d(pp, qp, context.point(u)) {
            Orientation::CCW => (u, w),
            _ => (w, u),
        };
        let mut event = EdgeEvent {
            triangles: vec![start],
            left: vec![left],
            right: vec![right],
            ..Default::default()
        };

        let mut triangle = start;
        loop {
            let crossed = context.find_edge(left, right).ok_or(outside.clone())?;
            if crossed.get(&context.edges).constrained {
                return Err(Error::CrossingConstraints { from, to });
            }
            event.crossed.push(crossed);

            let next = crossed
                .get(&context.edges)
                .other_triangle(triangle)
                .ok_or(outside.clone())?;
            event.triangles.push(next);
            if event.triangles.len() > context.triangles.len() {
                return Err(outside);
            }

            let v = next.get(&context.triangles).third_vertex(left, right);
            if v == q {
                break;
            }
            match orient_2d(pp, qp, context.point(v)) {
                Orientation::CCW => {
                    left = v;
                    event.left.push(v);
                }
                Orientation::CW => {
                    right = v;
                    event.right.push(v);
                }
                Orientation::Collinear => {
                    return Err(Error::ConstraintThroughVertex {
                        from,
                        to,
                        through: context.index(v),
                    })
                }
            }
            triangle = next;
        }

        Ok(event)
    }

    /// Replace the cavity with the constrained edge and re-triangulate the
    /// polygon on each side of it
    fn apply_edge_event(
        p: VertexId,
        q: VertexId,
        event: EdgeEvent,
        context: &mut Context,
        observer: &mut impl Observer,
    ) -> Result<(), Error> {
        for triangle in event.triangles.iter() {
            context.remove_triangle(*triangle);
        }
        for edge in event.crossed.iter() {
            context.remove_edge(*edge);
        }

        let constrained = context.create_edge(p, q);
        context.edges.get_mut_unchecked(constrained).constrained = true;
        observer.edge_constrained(constrained, context);

        let mut left_polygon = vec![p, q];
        left_polygon.extend(event.left.iter().rev());
        let mut right_polygon = vec![q, p];
        right_polygon.extend(event.right.iter());

        // a vertex whose whole fan got crossed shows up twice in its chain,
        // the edge it hangs from stays and is clipped from both sides
        let mut created = Vec::with_capacity(event.triangles.len());
        for polygon in [left_polygon, right_polygon] {
            created.extend(Self::triangulate_polygon(&polygon, context)?);
        }

        let edges = created
            .iter()
            .flat_map(|t| t.get(&context.triangles).edges)
            .collect::<Vec<_>>();
        Self::legalize_edges(edges, context, observer);

        Ok(())
    }
}

/// whether `v`, on the line through `p` and `q`, lies strictly between them
fn is_between(p: Point, q: Point, v: Point) -> bool {
    let d = q - p;
    let t = (v - p).dot(d);
    t > 0. && t < d.dot(d)
}
