use crate::{
    context::Context,
    front::SweepFront,
    triangulation::Triangulation,
    utils::{in_circle, orient_2d},
};

/// A broken mesh property, reported by the checks below
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("triangle {0} is not counter clockwise")]
    NotCounterClockwise(usize),

    #[error("triangle {triangle} and edge {edge} do not reference each other")]
    BrokenLink { triangle: usize, edge: usize },

    #[error("edge {0} borders no triangle")]
    DanglingEdge(usize),

    #[error("edge {0} is missing from the vertex pair lookup")]
    LookupMismatch(usize),

    #[error("edges between triangles {0} and {1} break the empty circle condition")]
    NotDelaunay(usize, usize),

    #[error("front is broken at edge {0}")]
    BrokenFront(usize),

    #[error("euler characteristic is {0}, expected 1")]
    Euler(isize),

    #[error("hull is not convex at point {0}")]
    HullNotConvex(usize),

    #[error("point {0} lies outside the hull")]
    OutsideHull(usize),

    #[error("hull has {hull} points but {boundary} boundary edges")]
    HullMismatch { hull: usize, boundary: usize },
}

/// Structural checks on the working mesh, synthetic vertices included
pub fn check_mesh(context: &Context) -> Result<(), Violation> {
    for (id, triangle) in context.triangles.iter() {
        let [a, b, c] = triangle.vertices.map(|v| context.point(v));
        if !orient_2d(a, b, c).is_ccw() {
            return Err(Violation::NotCounterClockwise(id.as_usize()));
        }
        for i in 0..3 {
            let broken = Violation::BrokenLink {
                triangle: id.as_usize(),
                edge: triangle.edges[i].as_usize(),
            };
            let Some(edge) = context.edges.get(triangle.edges[i]) else {
                return Err(broken);
            };
            if !edge.connects(triangle.vertices[(i + 1) % 3], triangle.vertices[(i + 2) % 3])
                || !edge.triangles().any(|t| t == id)
            {
                return Err(broken);
            }
        }
    }

    for (id, edge) in context.edges.iter() {
        if context.find_edge(edge.vertices[0], edge.vertices[1]) != Some(id) {
            return Err(Violation::LookupMismatch(id.as_usize()));
        }
        if edge.triangle_count() == 0 {
            return Err(Violation::DanglingEdge(id.as_usize()));
        }
        for t in edge.triangles() {
            match context.triangles.get(t) {
                Some(triangle) if triangle.edge_index(id).is_some() => {}
                _ => {
                    return Err(Violation::BrokenLink {
                        triangle: t.as_usize(),
                        edge: id.as_usize(),
                    })
                }
            }
        }
    }

    check_front(context)
}

fn check_front(context: &Context) -> Result<(), Violation> {
    let front = &context.front;
    let edges = &context.edges;
    if SweepFront::left(front.head, edges) != context.vertices.synthetic_left {
        return Err(Violation::BrokenFront(front.head.as_usize()));
    }
    if SweepFront::right(front.tail, edges) != context.vertices.synthetic_right {
        return Err(Violation::BrokenFront(front.tail.as_usize()));
    }

    let mut last = None;
    for e in front.iter(edges) {
        let broken = Violation::BrokenFront(e.as_usize());
        let edge = e.get(edges);
        if edge.triangle_count() != 1 || edge.prev.into_option() != last {
            return Err(broken);
        }
        let left = SweepFront::left(e, edges);
        let right = SweepFront::right(e, edges);
        if context.point(left).x >= context.point(right).x {
            return Err(broken);
        }
        if let Some(prev) = last {
            if SweepFront::right(prev, edges) != left {
                return Err(broken);
            }
        }
        last = Some(e);
    }
    if last != Some(front.tail) {
        return Err(Violation::BrokenFront(front.tail.as_usize()));
    }

    Ok(())
}

/// Checks on a finished triangulation: orientation, links, euler
/// characteristic, empty circles of unconstrained edges and the hull.
pub fn check_triangulation(triangulation: &Triangulation) -> Result<(), Violation> {
    let points = triangulation.points();
    let triangles = triangulation.triangles();
    let edges = triangulation.edges();

    for (i, t) in triangles.iter().enumerate() {
        if !orient_2d(t.points[0], t.points[1], t.points[2]).is_ccw() {
            return Err(Violation::NotCounterClockwise(i));
        }
        for k in 0..3 {
            let edge = &edges[t.edges[k]];
            let mut expected = [t.vertices[(k + 1) % 3], t.vertices[(k + 2) % 3]];
            let mut found = edge.vertices;
            expected.sort_unstable();
            found.sort_unstable();
            if expected != found || !edge.triangles.contains(&Some(i)) {
                return Err(Violation::BrokenLink {
                    triangle: i,
                    edge: t.edges[k],
                });
            }
        }
    }

    let mut boundary = 0;
    for (i, edge) in edges.iter().enumerate() {
        match edge.triangles {
            [Some(t1), Some(t2)] => {
                if edge.constrained {
                    continue;
                }
                let (a, b) = (&triangles[t1], &triangles[t2]);
                let opposite = |t: &crate::Triangle| {
                    t.vertices
                        .iter()
                        .position(|v| !edge.vertices.contains(v))
                        .map(|k| t.points[k])
                };
                let (Some(pa), Some(pb)) = (opposite(a), opposite(b)) else {
                    return Err(Violation::BrokenLink { triangle: t1, edge: i });
                };
                if in_circle(a.points[0], a.points[1], a.points[2], pb)
                    || in_circle(b.points[0], b.points[1], b.points[2], pa)
                {
                    return Err(Violation::NotDelaunay(t1, t2));
                }
            }
            [Some(_), None] => boundary += 1,
            _ => return Err(Violation::DanglingEdge(i)),
        }
    }

    let euler = points.len() as isize - edges.len() as isize + triangles.len() as isize;
    if euler != 1 {
        return Err(Violation::Euler(euler));
    }

    let hull = triangulation.hull();
    if hull.len() != boundary {
        return Err(Violation::HullMismatch {
            hull: hull.len(),
            boundary,
        });
    }
    let n = hull.len();
    for i in 0..n {
        let a = points[hull[i]];
        let b = points[hull[(i + 1) % n]];
        let c = points[hull[(i + 2) % n]];
        if orient_2d(a, b, c).is_cw() {
            return Err(Violation::HullNotConvex(hull[(i + 1) % n]));
        }
    }
    for (index, p) in points.iter().enumerate() {
        let outside = (0..n).any(|i| orient_2d(points[hull[i]], points[hull[(i + 1) % n]], *p).is_cw());
        if outside {
            return Err(Violation::OutsideHull(index));
        }
    }

    Ok(())
}
