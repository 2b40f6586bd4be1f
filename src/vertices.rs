use crate::{
    shape::{Point, Vertex},
    utils::orient_2d,
    Error,
};

/// Type alias to the underlying type for VertexId.
/// VertexId compare is in hot path, e.g, edge lookup, triangle vertex
/// search, so keep it small.
type NumType = u32;

/// new type for vertex id, the index in [`Vertices`]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VertexId(pub(crate) NumType);

impl VertexId {
    pub const INVALID: VertexId = VertexId(NumType::MAX);

    /// Get the inner value as usize
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as NumType)
    }
}

/// Vertex store: the input vertices in input order followed by the two
/// synthetic vertices, plus the sweep order.
#[derive(Debug, Clone)]
pub struct Vertices {
    vertices: Vec<Vertex>,
    sorted: Vec<VertexId>,
    pub synthetic_left: VertexId,
    pub synthetic_right: VertexId,
}

impl Vertices {
    /// Validate the input, sort it and re-home the constraints onto the
    /// later vertex of each pair.
    pub fn new(
        points: &[Point],
        constraints: &[(usize, usize)],
        margin: f64,
    ) -> Result<Self, Error> {
        if points.len() < 3 {
            return Err(Error::NotEnoughPoints(points.len()));
        }
        if !(margin.is_finite() && margin > 0.) {
            return Err(Error::InvalidMargin(margin));
        }
        if points.len() >= NumType::MAX as usize - 2 {
            return Err(Error::TooManyPoints(points.len()));
        }

        let mut xmax = f64::MIN;
        let mut xmin = f64::MAX;
        let mut ymax = f64::MIN;
        let mut ymin = f64::MAX;

        let mut vertices = Vec::with_capacity(points.len() + 2);
        for (idx, p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(Error::NonFinitePoint {
                    index: idx,
                    x: p.x,
                    y: p.y,
                });
            }
            xmax = xmax.max(p.x);
            xmin = xmin.min(p.x);
            ymax = ymax.max(p.y);
            ymin = ymin.min(p.y);
            vertices.push(Vertex::new(*p, idx as isize));
        }

        // sort by y, then x
        let mut sorted = (0..points.len())
            .map(VertexId::from_index)
            .collect::<Vec<_>>();
        sorted.sort_by(|a, b| {
            let pa = points[a.as_usize()];
            let pb = points[b.as_usize()];
            pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
        });

        for pair in sorted.windows(2) {
            if points[pair[0].as_usize()] == points[pair[1].as_usize()] {
                let (first, second) = if pair[0] < pair[1] {
                    (pair[0], pair[1])
                } else {
                    (pair[1], pair[0])
                };
                return Err(Error::DuplicatePoint {
                    first: first.as_usize(),
                    second: second.as_usize(),
                });
            }
        }

        {
            // all distinct, so the first two sorted points define a line
            let a = points[sorted[0].as_usize()];
            let b = points[sorted[1].as_usize()];
            if sorted[2..]
                .iter()
                .all(|id| orient_2d(a, b, points[id.as_usize()]).is_collinear())
            {
                return Err(Error::Collinear);
            }
        }

        for (order, id) in sorted.iter().enumerate() {
            vertices[id.as_usize()].sorted_index = Some(order);
        }

        for &(first, second) in constraints {
            if first >= points.len() || second >= points.len() {
                return Err(Error::ConstraintOutOfRange {
                    first,
                    second,
                    len: points.len(),
                });
            }
            if first == second {
                return Err(Error::SelfConstraint(first));
            }

            let (later, earlier) = if vertices[first].sorted_index > vertices[second].sorted_index
            {
                (first, second)
            } else {
                (second, first)
            };
            let earlier = VertexId::from_index(earlier);
            let constrained = &mut vertices[later].constrained;
            if !constrained.contains(&earlier) {
                constrained.push(earlier);
            }
        }

        let (synthetic_left, synthetic_right) = {
            let dx = (xmax - xmin) * margin;
            let dy = (ymax - ymin) * margin;

            let left = VertexId::from_index(vertices.len());
            vertices.push(Vertex::new(Point::new(xmin - dx, ymin - dy), -1));

            let right = VertexId::from_index(vertices.len());
            vertices.push(Vertex::new(Point::new(xmax + dx, ymin - dy), -2));
            (left, right)
        };

        Ok(Self {
            vertices,
            sorted,
            synthetic_left,
            synthetic_right,
        })
    }

    /// Number of vertices, including the synthetic ones
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of input vertices
    pub fn input_len(&self) -> usize {
        self.sorted.len()
    }

    pub fn get(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    /// point for id, panics for an unknown id
    pub fn point(&self, id: VertexId) -> Point {
        self.vertices[id.as_usize()].point
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.as_usize()]
    }

    pub fn is_synthetic(&self, id: VertexId) -> bool {
        id == self.synthetic_left || id == self.synthetic_right
    }

    /// get vertex id by sweep order
    pub fn get_id_by_order(&self, order: usize) -> Option<VertexId> {
        self.sorted.get(order).copied()
    }

    /// input points, without the synthetic ones
    pub fn input_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices[..self.input_len()].iter().map(|v| v.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]
    }

    #[test]
    fn test_sweep_order() {
        let vertices = Vertices::new(&square(), &[], 0.4).unwrap();
        let order = (0..4)
            .filter_map(|i| vertices.get_id_by_order(i))
            .map(|id| id.as_usize())
            .collect::<Vec<_>>();
        assert_eq!(order, vec![0, 1, 3, 2]);
        assert_eq!(vertices.vertex(VertexId(3)).sorted_index, Some(2));
        assert_eq!(vertices.get_id_by_order(4), None);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices.input_len(), 4);
    }

    #[test]
    fn test_synthetic_vertices() {
        let vertices = Vertices::new(&square(), &[], 0.4).unwrap();
        let left = vertices.vertex(vertices.synthetic_left);
        let right = vertices.vertex(vertices.synthetic_right);
        assert_eq!(left.point, Point::new(-0.4, -0.4));
        assert_eq!(right.point, Point::new(1.4, -0.4));
        assert_eq!(left.index, -1);
        assert_eq!(right.index, -2);
        assert!(left.is_synthetic());
        assert!(vertices.is_synthetic(vertices.synthetic_right));
        assert_eq!(left.sorted_index, None);
    }

    #[test]
    fn test_constraint_on_later_vertex() {
        // 2 is swept after 0, 3 after 1
        let vertices = Vertices::new(&square(), &[(0, 2), (3, 1)], 0.4).unwrap();
        assert_eq!(vertices.vertex(VertexId(2)).constrained, vec![VertexId(0)]);
        assert_eq!(vertices.vertex(VertexId(3)).constrained, vec![VertexId(1)]);
        assert!(vertices.vertex(VertexId(0)).constrained.is_empty());
        assert!(vertices.vertex(VertexId(1)).constrained.is_empty());
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            Vertices::new(&square()[..2], &[], 0.4).unwrap_err(),
            Error::NotEnoughPoints(2)
        );

        let mut points = square();
        points[2] = Point::new(f64::INFINITY, 1.);
        assert!(matches!(
            Vertices::new(&points, &[], 0.4).unwrap_err(),
            Error::NonFinitePoint { index: 2, .. }
        ));

        let mut points = square();
        points.push(Point::new(1., 0.));
        assert_eq!(
            Vertices::new(&points, &[], 0.4).unwrap_err(),
            Error::DuplicatePoint {
                first: 1,
                second: 4
            }
        );

        assert_eq!(
            Vertices::new(&square(), &[(0, 4)], 0.4).unwrap_err(),
            Error::ConstraintOutOfRange {
                first: 0,
                second: 4,
                len: 4
            }
        );
        assert_eq!(
            Vertices::new(&square(), &[(1, 1)], 0.4).unwrap_err(),
            Error::SelfConstraint(1)
        );
        assert_eq!(
            Vertices::new(&square(), &[], 0.).unwrap_err(),
            Error::InvalidMargin(0.)
        );
    }

    #[test]
    fn test_collinear() {
        let points = vec![Point::new(0., 0.), Point::new(1., 0.), Point::new(2., 0.)];
        assert_eq!(
            Vertices::new(&points, &[], 0.4).unwrap_err(),
            Error::Collinear
        );

        let points = vec![Point::new(0., 0.), Point::new(1., 1.), Point::new(3., 3.)];
        assert_eq!(
            Vertices::new(&points, &[], 0.4).unwrap_err(),
            Error::Collinear
        );
    }
}
