use crate::{
    context::Context,
    front::SweepFront,
    triangulator::{Observer, Triangulator},
    utils::orient_2d,
    vertices::VertexId,
};

/// Finalize related methods
impl Triangulator {
    /// Close the front, strip the triangles of the synthetic vertices and
    /// fill the concave pockets left on the hull. Returns the hull in counter
    /// clockwise order, starting at the lowest vertex.
    pub(crate) fn finalize_mesh(context: &mut Context, observer: &mut impl Observer) -> Vec<VertexId> {
        Self::close_front(context, observer);

        let front = context.front.vertices(&context.edges);
        // front minus the synthetic ends
        let front = front[1..front.len() - 1].to_vec();
        let back = Self::strip_synthetic(context);

        let mut hull = back;
        hull.extend(front.iter().rev().skip(1));
        hull.pop();

        Self::close_hull(&mut hull, context, observer);

        if let Some(lowest) = context.vertices.get_id_by_order(0) {
            if let Some(at) = hull.iter().position(|v| *v == lowest) {
                hull.rotate_left(at);
            }
        }
        hull
    }

    /// Fill the remaining convex dips of the front between real vertices
    fn close_front(context: &mut Context, observer: &mut impl Observer) {
        let mut cursor = context.front.head;
        while let Some(next) = context.front.next(cursor, &context.edges) {
            let a = SweepFront::left(cursor, &context.edges);
            let b = SweepFront::right(cursor, &context.edges);
            let c = SweepFront::right(next, &context.edges);

            if context.is_synthetic(a)
                || context.is_synthetic(c)
                || !orient_2d(context.point(a), context.point(b), context.point(c)).is_ccw()
            {
                cursor = next;
                continue;
            }

            let edge = Self::fill_wedge(cursor, next, context, observer);
            // the dip before may have become convex
            cursor = context.front.prev(edge, &context.edges).unwrap_or(edge);
        }
    }

    /// Remove every triangle and edge touching a synthetic vertex. Returns the
    /// lower boundary of what is left, from the leftmost front vertex to the
    /// rightmost one.
    fn strip_synthetic(context: &mut Context) -> Vec<VertexId> {
        let left = context.vertices.synthetic_left;
        let right = context.vertices.synthetic_right;

        // walk the fan around the left synthetic vertex, then over the bridge
        // triangle to the fan around the right one
        let mut pivot = left;
        let mut edge = context.front.head;
        let mut back = vec![edge.get(&context.edges).other_vertex(left)];
        let mut triangle = edge.get(&context.edges).first_triangle();

        while let Some(t) = triangle {
            let tri = t.get(&context.triangles);
            let far = edge.get(&context.edges).other_vertex(pivot);
            let third = tri.third_vertex(pivot, far);

            if pivot == left && third == right {
                pivot = right;
                edge = tri.edge_opposite(left);
            } else {
                back.push(third);
                edge = tri.edge_opposite(far);
            }
            triangle = edge.get(&context.edges).other_triangle(t);
        }

        let synthetic_triangles = context
            .triangles
            .iter()
            .filter(|(_, t)| t.vertices.iter().any(|v| context.is_synthetic(*v)))
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        for t in synthetic_triangles {
            context.remove_triangle(t);
        }

        let front = context.front.iter(&context.edges).collect::<Vec<_>>();
        for e in front {
            context.edges.get_mut_unchecked(e).unlink();
        }

        let synthetic_edges = context
            .edges
            .iter()
            .filter(|(_, e)| e.vertices.iter().any(|v| context.is_synthetic(*v)))
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        for e in synthetic_edges {
            context.remove_edge(e);
        }

        tracing::trace!(back = back.len(), "synthetic vertices stripped");
        back
    }

    /// Fill reflex vertices of the counter clockwise boundary cycle until it
    /// is convex
    fn close_hull(hull: &mut Vec<VertexId>, context: &mut Context, observer: &mut impl Observer) {
        let mut i = 0;
        let mut convex_run = 0;
        while hull.len() > 3 && convex_run < hull.len() {
            let len = hull.len();
            let prev = hull[(i + len - 1) % len];
            let cur = hull[i];
            let next = hull[(i + 1) % len];

            if !orient_2d(context.point(prev), context.point(cur), context.point(next)).is_cw() {
                i = (i + 1) % len;
                convex_run += 1;
                continue;
            }

            let (Some(first), Some(second)) =
                (context.find_edge(prev, cur), context.find_edge(cur, next))
            else {
                panic!("hull vertex {cur:?} misses its boundary edges");
            };

            let chord = context.create_edge(prev, next);
            context.create_triangle([prev, next, cur], [second, first, chord]);
            hull.remove(i);
            Self::legalize_edges([first, second], context, observer);

            // back to prev, the corner at it changed
            i = (i + len - 2) % (len - 1);
            convex_run = 0;
        }
    }
}
