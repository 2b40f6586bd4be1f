use crate::{
    context::Context,
    triangles::TriangleId,
    triangulator::Triangulator,
    utils::{in_triangle, orient_2d},
    vertices::VertexId,
    Error,
};

impl Triangulator {
    /// Triangulate a polygon given as a closed counter clockwise ring of
    /// vertices whose sides are existing edges, by ear clipping. The chords
    /// are created along the way. Returns the new triangles.
    ///
    /// The ring may be weakly simple: an edge hanging into the polygon shows
    /// up as `.., a, b, a, ..` and ends up with a triangle on each side.
    pub(crate) fn triangulate_polygon(
        ring: &[VertexId],
        context: &mut Context,
    ) -> Result<Vec<TriangleId>, Error> {
        let n = ring.len();
        if n < 3 {
            return Err(Error::NoEar(n));
        }

        // sides[i] joins ring[i] and ring[i + 1]
        let mut sides = (0..n)
            .map(|i| {
                let (a, b) = (ring[i], ring[(i + 1) % n]);
                match context.find_edge(a, b) {
                    Some(edge) => edge,
                    None => panic!("polygon side {a:?} {b:?} is not an edge"),
                }
            })
            .collect::<Vec<_>>();
        let mut ring = ring.to_vec();
        let mut result = Vec::with_capacity(n - 2);

        let mut i = 0;
        let mut misses = 0;
        while ring.len() > 3 {
            let len = ring.len();
            let prev = (i + len - 1) % len;
            let next = (i + 1) % len;

            if !is_ear(&ring, prev, i, next, context) {
                misses += 1;
                if misses > len {
                    tracing::warn!(vertices = len, "no ear left in polygon");
                    return Err(Error::NoEar(len));
                }
                i = next;
                continue;
            }

            let chord = context.create_edge(ring[prev], ring[next]);
            result.push(
                context.create_triangle([ring[prev], ring[i], ring[next]], [sides[i], chord, sides[prev]]),
            );
            sides[prev] = chord;
            ring.remove(i);
            sides.remove(i);

            // restart at the vertex before the cut, it may be an ear now
            i = if prev < i { prev } else { prev - 1 };
            misses = 0;
        }

        let [a, b, c] = [ring[0], ring[1], ring[2]];
        if !orient_2d(context.point(a), context.point(b), context.point(c)).is_ccw() {
            return Err(Error::NoEar(3));
        }
        result.push(context.create_triangle([a, b, c], [sides[1], sides[2], sides[0]]));

        Ok(result)
    }
}

/// `ring[cur]` is an ear when the corner is convex and no other vertex lies
/// in the triangle or on its border. Repeated entries of the corner vertices
/// are the corners themselves.
fn is_ear(ring: &[VertexId], prev: usize, cur: usize, next: usize, context: &Context) -> bool {
    let corners = [ring[prev], ring[cur], ring[next]];
    let [a, b, c] = corners.map(|v| context.point(v));
    if !orient_2d(a, b, c).is_ccw() {
        return false;
    }

    let x0 = a.x.min(b.x.min(c.x));
    let y0 = a.y.min(b.y.min(c.y));
    let x1 = a.x.max(b.x.max(c.x));
    let y1 = a.y.max(b.y.max(c.y));

    !ring.iter().any(|v| {
        if corners.contains(v) {
            return false;
        }
        let p = context.point(*v);
        p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1 && in_triangle(a, b, c, p)
    })
}
