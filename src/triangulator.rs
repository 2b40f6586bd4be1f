use crate::{
    context::Context,
    edges::EdgeId,
    front::{Insertion, SweepFront},
    shape::Point,
    triangles::TriangleId,
    triangulation::Triangulation,
    utils::{in_circle, orient_2d, Angle},
    vertices::{VertexId, Vertices},
    Error,
};

/// Observer for the triangulator, used to monitor how the sweep works. Quite
/// useful for visual debugging when things go wrong, check demo's draw.
#[allow(unused_variables)]
pub trait Observer {
    /// A vertex is about to be swept
    fn enter_step(&mut self, vertex: VertexId, context: &Context) {}

    /// A vertex and its constraints are processed
    fn exit_step(&mut self, vertex: VertexId, context: &Context) {}

    /// An edge got constrained, either found or recovered
    fn edge_constrained(&mut self, edge: EdgeId, context: &Context) {}

    /// About to check the edge for the empty circle condition
    #[inline]
    fn will_legalize(&mut self, edge: EdgeId, context: &Context) {}

    /// An edge flipped, `old` is gone and `new` is the other diagonal
    #[inline]
    fn edge_flipped(&mut self, old: EdgeId, new: EdgeId, context: &Context) {}

    /// A front wedge got filled with a triangle
    #[inline]
    fn front_filled(&mut self, triangle: TriangleId, context: &Context) {}

    /// Sweep process done
    fn sweep_done(&mut self, context: &Context) {}

    /// The result finalized, synthetic vertices removed and the hull closed.
    fn finalized(&mut self, context: &Context) {}
}

/// Default dummy observer, blank impl, so all calls should be optimized out by compiler.
impl Observer for () {}

/// Triangulator Builder
///
/// # Example
/// ```rust
///    use sweep_cdt::{TriangulatorBuilder, Point};
///
///    let triangulation = TriangulatorBuilder::new(vec![
///        Point::new(0., 0.),
///        Point::new(1., 0.),
///        Point::new(1., 1.),
///        Point::new(0., 1.),
///    ])
///    .add_constraint(0, 2)
///    .build()
///    .and_then(|t| t.triangulate())
///    .unwrap();
///
///    assert_eq!(triangulation.triangles().len(), 2);
///    assert!(triangulation.edges().iter().any(|e| e.constrained));
/// ```
#[derive(Clone, Debug)]
pub struct TriangulatorBuilder {
    points: Vec<Point>,
    constraints: Vec<(usize, usize)>,
    margin: f64,
}

impl TriangulatorBuilder {
    /// Extent of the synthetic vertices, as a fraction of the bounding box
    pub const DEFAULT_MARGIN: f64 = 0.4;

    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            constraints: vec![],
            margin: Self::DEFAULT_MARGIN,
        }
    }

    /// Add a single point, returns the builder. The point's index is the
    /// number of points added before it.
    pub fn add_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    /// Add multiple [`Point`], batch version for `Self::add_point`
    pub fn add_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(points);
        self
    }

    /// Require the segment between two input points to be an edge of the
    /// result
    pub fn add_constraint(mut self, first: usize, second: usize) -> Self {
        self.constraints.push((first, second));
        self
    }

    pub fn add_constraints(mut self, constraints: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    /// Set the margin factor of the synthetic vertices, must be positive
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn constraints(&self) -> &[(usize, usize)] {
        &self.constraints
    }

    /// validate the input and build the triangulator
    pub fn build(self) -> Result<Triangulator, Error> {
        let vertices = Vertices::new(&self.points, &self.constraints, self.margin)?;
        Ok(Triangulator::from_vertices(vertices))
    }
}

/// Main interface. Sweeps the vertices one at a time with [`Triangulator::step`],
/// or all at once with [`Triangulator::triangulate`].
///
/// Once an operation returned an error the mesh is left half processed, the
/// triangulator should be dropped.
pub struct Triangulator {
    context: Context,
    /// sweep order of the next vertex to insert
    next: usize,
    sweep_done: bool,
}

impl Triangulator {
    /// Create a triangulator with the default margin
    pub fn new(points: &[Point], constraints: &[(usize, usize)]) -> Result<Self, Error> {
        let vertices = Vertices::new(points, constraints, TriangulatorBuilder::DEFAULT_MARGIN)?;
        Ok(Self::from_vertices(vertices))
    }

    fn from_vertices(vertices: Vertices) -> Self {
        tracing::debug!(
            points = vertices.input_len(),
            "seed triangle built over the lowest point"
        );
        Self {
            context: Context::new(vertices),
            // the lowest vertex is part of the seed triangle
            next: 1,
            sweep_done: false,
        }
    }

    /// current mesh, synthetic vertices included while sweeping
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// number of vertices still to sweep
    pub fn remaining(&self) -> usize {
        self.context.vertices.input_len() - self.next
    }

    /// Sweep the next vertex, returns false once every vertex is consumed
    pub fn step(&mut self) -> Result<bool, Error> {
        self.step_with_observer(&mut ())
    }

    pub fn step_with_observer(&mut self, observer: &mut impl Observer) -> Result<bool, Error> {
        let Some(vertex) = self.context.vertices.get_id_by_order(self.next) else {
            if !self.sweep_done {
                self.sweep_done = true;
                observer.sweep_done(&self.context);
            }
            return Ok(false);
        };
        self.next += 1;

        observer.enter_step(vertex, &self.context);
        Self::insert_vertex(vertex, &mut self.context, observer)?;
        observer.exit_step(vertex, &self.context);

        #[cfg(debug_assertions)]
        if let Err(violation) = crate::validate::check_mesh(&self.context) {
            panic!(
                "mesh invariant broken after sweeping {}: {violation}",
                self.context.index(vertex)
            );
        }

        Ok(true)
    }

    /// Run triangulate with dummy observer
    pub fn triangulate(self) -> Result<Triangulation, Error> {
        self.triangulate_with_observer(&mut ())
    }

    /// Run triangulate with observer
    pub fn triangulate_with_observer(
        mut self,
        observer: &mut impl Observer,
    ) -> Result<Triangulation, Error> {
        while self.step_with_observer(observer)? {}
        self.finalize_with_observer(observer)
    }

    /// Remove the synthetic vertices and close the hull. Vertices not swept
    /// yet are swept first.
    pub fn finalize(self) -> Result<Triangulation, Error> {
        self.finalize_with_observer(&mut ())
    }

    pub fn finalize_with_observer(
        mut self,
        observer: &mut impl Observer,
    ) -> Result<Triangulation, Error> {
        while self.step_with_observer(observer)? {}

        let hull = Self::finalize_mesh(&mut self.context, observer);
        observer.finalized(&self.context);

        tracing::debug!(
            triangles = self.context.triangles.len(),
            edges = self.context.edges.len(),
            hull = hull.len(),
            "triangulation finalized"
        );

        Ok(Triangulation::from_context(&self.context, &hull))
    }
}

/// Vertex insertion related methods
impl Triangulator {
    fn insert_vertex(
        vertex: VertexId,
        context: &mut Context,
        observer: &mut impl Observer,
    ) -> Result<(), Error> {
        let point = context.point(vertex);
        let insertion = context
            .front
            .locate(point, &context.vertices, &context.edges)
            .ok_or(Error::FrontExhausted(context.index(vertex) as usize))?;

        let (left_edge, right_edge) = match insertion {
            Insertion::Edge(edge) => {
                tracing::trace!(index = context.index(vertex), "insert above front edge");
                let left = SweepFront::left(edge, &context.edges);
                let right = SweepFront::right(edge, &context.edges);

                let left_edge = context.create_edge(left, vertex);
                let right_edge = context.create_edge(vertex, right);
                context.create_triangle([left, right, vertex], [right_edge, left_edge, edge]);
                context
                    .front
                    .splice(edge, edge, &[left_edge, right_edge], &mut context.edges);

                Self::legalize_edges([edge], context, observer);
                (left_edge, right_edge)
            }
            Insertion::Vertex { left, right } => {
                tracing::trace!(index = context.index(vertex), "insert above front vertex");
                let l = SweepFront::left(left, &context.edges);
                let v = SweepFront::right(left, &context.edges);
                let r = SweepFront::right(right, &context.edges);

                let left_edge = context.create_edge(l, vertex);
                let middle = context.create_edge(v, vertex);
                let right_edge = context.create_edge(vertex, r);
                context.create_triangle([l, v, vertex], [middle, left_edge, left]);
                context.create_triangle([v, r, vertex], [right_edge, middle, right]);
                context
                    .front
                    .splice(left, right, &[left_edge, right_edge], &mut context.edges);

                Self::legalize_edges([left, right, middle], context, observer);
                (left_edge, right_edge)
            }
        };

        let (left_edge, _) =
            Self::add_acute_angle_fill(vertex, left_edge, right_edge, context, observer);

        Self::constrain_edges(vertex, left_edge, context, observer)
    }

    /// Fill the dips next to a fresh vertex while the angle at the dip is
    /// acute. Returns the vertex's front edges afterwards.
    fn add_acute_angle_fill(
        vertex: VertexId,
        mut left_edge: EdgeId,
        mut right_edge: EdgeId,
        context: &mut Context,
        observer: &mut impl Observer,
    ) -> (EdgeId, EdgeId) {
        let p = context.point(vertex);

        while let Some(next) = context.front.next(right_edge, &context.edges) {
            let r = context.point(SweepFront::right(right_edge, &context.edges));
            let rr = context.point(SweepFront::right(next, &context.edges));
            if !(orient_2d(p, r, rr).is_ccw() && Angle::new(r, rr, p).is_acute()) {
                break;
            }
            right_edge = Self::fill_wedge(right_edge, next, context, observer);
        }

        while let Some(prev) = context.front.prev(left_edge, &context.edges) {
            let l = context.point(SweepFront::left(left_edge, &context.edges));
            let ll = context.point(SweepFront::left(prev, &context.edges));
            if !(orient_2d(ll, l, p).is_ccw() && Angle::new(l, ll, p).is_acute()) {
                break;
            }
            left_edge = Self::fill_wedge(prev, left_edge, context, observer);
        }

        (left_edge, right_edge)
    }

    /// Fill the dip between the consecutive front edges `a→b` and `b→c`
    /// with triangle `abc`, returns the new front edge `a→c`.
    pub(crate) fn fill_wedge(
        first: EdgeId,
        second: EdgeId,
        context: &mut Context,
        observer: &mut impl Observer,
    ) -> EdgeId {
        let a = SweepFront::left(first, &context.edges);
        let b = SweepFront::right(first, &context.edges);
        let c = SweepFront::right(second, &context.edges);
        debug_assert_eq!(b, SweepFront::left(second, &context.edges));

        let edge = context.create_edge(a, c);
        let triangle = context.create_triangle([a, b, c], [second, edge, first]);
        context
            .front
            .splice(first, second, &[edge], &mut context.edges);
        observer.front_filled(triangle, context);

        Self::legalize_edges([first, second], context, observer);
        edge
    }
}

/// Legalization related methods
impl Triangulator {
    /// Restore the empty circle condition around the given edges, flipping
    /// until no queued edge is illegal. Flipped edges queue their four
    /// neighbours.
    pub(crate) fn legalize_edges(
        edges: impl IntoIterator<Item = EdgeId>,
        context: &mut Context,
        observer: &mut impl Observer,
    ) {
        // reuse the queue owned by context
        let mut queue = std::mem::take(&mut context.legalize_queue);
        queue.extend(edges);

        while let Some(edge_id) = queue.pop() {
            let Some(edge) = context.edges.get(edge_id) else {
                // flipped away meanwhile
                continue;
            };
            if edge.constrained || !edge.is_internal() {
                continue;
            }
            observer.will_legalize(edge_id, context);

            let [Some(t1), Some(t2)] = edge.triangle_pair() else {
                continue;
            };
            let tri1 = *t1.get(&context.triangles);
            let tri2 = *t2.get(&context.triangles);
            let a = tri1.vertex_opposite(edge_id);
            let b = tri2.vertex_opposite(edge_id);

            let illegal = {
                let [p0, p1, p2] = tri1.vertices.map(|v| context.point(v));
                let [q0, q1, q2] = tri2.vertices.map(|v| context.point(v));
                in_circle(p0, p1, p2, context.point(b)) || in_circle(q0, q1, q2, context.point(a))
            };
            if !illegal {
                continue;
            }

            // quad a, u, b, w is counter clockwise
            let u = tri1.vertex_ccw(a);
            let w = tri1.vertex_cw(a);
            let au = tri1.edge_opposite(w);
            let aw = tri1.edge_opposite(u);
            let bu = tri2.edge_opposite(w);
            let bw = tri2.edge_opposite(u);

            context.remove_triangle(t1);
            context.remove_triangle(t2);
            context.remove_edge(edge_id);

            let flipped = context.create_edge(a, b);
            context.create_triangle([a, u, b], [bu, flipped, au]);
            context.create_triangle([a, b, w], [bw, aw, flipped]);
            observer.edge_flipped(edge_id, flipped, context);

            queue.extend([au, aw, bu, bw]);
        }

        context.legalize_queue = queue;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::utils::Orientation;

    #[derive(Default)]
    struct CountObserver {
        steps: usize,
        exits: usize,
        flips: usize,
        legalize_checks: usize,
        fills: usize,
        constrained: usize,
        sweep_done: usize,
        finalized: usize,
    }

    impl Observer for CountObserver {
        fn enter_step(&mut self, _vertex: VertexId, _context: &Context) {
            self.steps += 1;
        }

        fn exit_step(&mut self, _vertex: VertexId, _context: &Context) {
            self.exits += 1;
        }

        fn edge_constrained(&mut self, edge: EdgeId, context: &Context) {
            assert!(edge.get(&context.edges).constrained);
            self.constrained += 1;
        }

        fn will_legalize(&mut self, _edge: EdgeId, _context: &Context) {
            self.legalize_checks += 1;
        }

        fn edge_flipped(&mut self, old: EdgeId, new: EdgeId, context: &Context) {
            assert!(!context.edges.contains(old));
            assert_eq!(new.get(&context.edges).triangle_count(), 2);
            self.flips += 1;
        }

        fn front_filled(&mut self, _triangle: TriangleId, _context: &Context) {
            self.fills += 1;
        }

        fn sweep_done(&mut self, _context: &Context) {
            self.sweep_done += 1;
        }

        fn finalized(&mut self, context: &Context) {
            assert!(context
                .triangles
                .iter()
                .all(|(_, t)| t.vertices.iter().all(|v| !context.is_synthetic(*v))));
            self.finalized += 1;
        }
    }

    fn square() -> Vec<Point> {
        vec![
            Point::new(0., 0.),
            Point::new(1., 0.),
            Point::new(1., 1.),
            Point::new(0., 1.),
        ]
    }

    fn random_points(seed: u64, count: usize) -> Vec<Point> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Point::new(rng.gen_range(0.0..800.), rng.gen_range(0.0..800.)))
            .collect()
    }

    #[test]
    fn test_triangle() {
        let triangulation = Triangulator::new(
            &[Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)],
            &[],
        )
        .unwrap()
        .triangulate()
        .unwrap();

        assert_eq!(triangulation.triangles().len(), 1);
        assert_eq!(triangulation.edges().len(), 3);
        assert_eq!(triangulation.triangles()[0].vertices, [0, 1, 2]);
        assert_eq!(triangulation.hull(), &[0, 1, 2]);
    }

    #[test]
    fn test_square() {
        let triangulation = Triangulator::new(&square(), &[])
            .unwrap()
            .triangulate()
            .unwrap();

        assert_eq!(triangulation.triangles().len(), 2);
        assert_eq!(triangulation.edges().len(), 5);
        assert_eq!(triangulation.hull().len(), 4);
        triangulation.check().unwrap();
    }

    #[test]
    fn test_square_with_constraint() {
        for constraint in [(0, 2), (2, 0), (1, 3)] {
            let triangulation = Triangulator::new(&square(), &[constraint])
                .unwrap()
                .triangulate()
                .unwrap();

            assert_eq!(triangulation.triangles().len(), 2);
            let constrained = triangulation
                .edges()
                .iter()
                .filter(|e| e.constrained)
                .collect::<Vec<_>>();
            assert_eq!(constrained.len(), 1);

            let mut expected = [constraint.0, constraint.1];
            expected.sort();
            let mut found = constrained[0].vertices;
            found.sort();
            assert_eq!(found, expected);
            assert!(constrained[0].is_internal());
        }
    }

    #[test]
    fn test_step() {
        let mut triangulator = Triangulator::new(&square(), &[]).unwrap();
        assert_eq!(triangulator.remaining(), 3);
        // seed triangle
        assert_eq!(triangulator.context().triangles.len(), 1);

        assert!(triangulator.step().unwrap());
        // (1, 0) lands right of the first vertex
        assert_eq!(triangulator.context().triangles.len(), 2);
        assert_eq!(triangulator.remaining(), 2);

        assert!(triangulator.step().unwrap());
        assert!(triangulator.step().unwrap());
        assert!(!triangulator.step().unwrap());
        assert!(!triangulator.step().unwrap());

        let front = triangulator.context().front.vertices(&triangulator.context().edges);
        assert_eq!(front.len(), 4);

        let triangulation = triangulator.finalize().unwrap();
        assert_eq!(triangulation.triangles().len(), 2);
    }

    #[test]
    fn test_finalize_sweeps_remaining() {
        let mut triangulator = Triangulator::new(&random_points(7, 30), &[]).unwrap();
        assert!(triangulator.step().unwrap());
        let triangulation = triangulator.finalize().unwrap();
        assert_eq!(triangulation.points().len(), 30);
        triangulation.check().unwrap();
    }

    #[test]
    fn test_observer() {
        let points = random_points(11, 100);
        let mut observer = CountObserver::default();
        let triangulation = Triangulator::new(&points, &[])
            .unwrap()
            .triangulate_with_observer(&mut observer)
            .unwrap();

        assert_eq!(observer.steps, 99);
        assert_eq!(observer.exits, 99);
        assert_eq!(observer.sweep_done, 1);
        assert_eq!(observer.finalized, 1);
        assert_eq!(observer.constrained, 0);
        assert!(observer.flips > 0);
        assert!(observer.legalize_checks >= observer.flips);
        assert!(observer.fills > 0);
        triangulation.check().unwrap();
    }

    #[test]
    fn test_random() {
        for seed in 0..20 {
            let points = random_points(seed, 50 + seed as usize * 10);
            let triangulation = Triangulator::new(&points, &[])
                .unwrap()
                .triangulate()
                .unwrap();
            triangulation.check().unwrap();
        }
    }

    #[test]
    fn test_grid() {
        // many cocircular and collinear points
        let mut points = vec![];
        for y in 0..8 {
            for x in 0..8 {
                points.push(Point::new(x as f64, y as f64));
            }
        }
        let triangulation = TriangulatorBuilder::new(points)
            .build()
            .unwrap()
            .triangulate()
            .unwrap();
        triangulation.check().unwrap();

        // a square cut into triangles, all of the same area
        assert_eq!(triangulation.triangles().len(), 2 * 7 * 7);
        // every border point lies on the hull
        assert_eq!(triangulation.hull().len(), 4 * 7);
    }

    #[test]
    fn test_grid_with_constraints() {
        let size = 6;
        let mut points = vec![];
        for y in 0..size {
            for x in 0..size {
                points.push(Point::new(x as f64, y as f64));
            }
        }
        let at = |x: usize, y: usize| y * size + x;

        // steep segments which do not pass through other grid points
        let constraints = vec![(at(1, 0), at(2, 4)), (at(4, 1), at(3, 5))];
        let triangulation = TriangulatorBuilder::new(points)
            .add_constraints(constraints.clone())
            .build()
            .unwrap()
            .triangulate()
            .unwrap();
        triangulation.check().unwrap();

        for (a, b) in constraints {
            let edge = triangulation
                .edges()
                .iter()
                .find(|e| e.vertices.contains(&a) && e.vertices.contains(&b))
                .expect("constrained edge is present");
            assert!(edge.constrained);
        }
    }

    #[test]
    fn test_long_constraint() {
        // corner to corner of a 10 x 10 grid, missing every grid point on the
        // way, so the segment crosses a long run of edges
        let size = 10;
        let mut points = vec![];
        for y in 0..size {
            for x in 0..size {
                points.push(Point::new(x as f64, y as f64));
            }
        }
        let at = |x: usize, y: usize| y * size + x;

        let mut observer = CountObserver::default();
        let triangulation = Triangulator::new(&points, &[(at(0, 0), at(8, 9))])
            .unwrap()
            .triangulate_with_observer(&mut observer)
            .unwrap();
        triangulation.check().unwrap();
        assert_eq!(observer.constrained, 1);
        assert_eq!(triangulation.triangles().len(), 2 * 9 * 9);

        let edge = triangulation
            .edges()
            .iter()
            .find(|e| e.constrained)
            .unwrap();
        let mut found = edge.vertices;
        found.sort();
        assert_eq!(found, [at(0, 0), at(8, 9)]);
        assert!(edge.is_internal());
    }

    #[test]
    fn test_random_single_constraint() {
        let cases = 60;
        let mut succeeded = 0;
        for seed in 0..cases {
            let mut rng = StdRng::seed_from_u64(1000 + seed);
            let points = (0..60)
                .map(|_| Point::new(rng.gen_range(0.0..100.), rng.gen_range(0.0..100.)))
                .collect::<Vec<_>>();
            let first = rng.gen_range(0..60);
            let second = (first + rng.gen_range(1..60)) % 60;

            match Triangulator::new(&points, &[(first, second)])
                .unwrap()
                .triangulate()
            {
                Ok(triangulation) => {
                    triangulation.check().unwrap();
                    assert!(triangulation.constrained_edges().any(|e| {
                        e.vertices.contains(&first) && e.vertices.contains(&second)
                    }));
                    succeeded += 1;
                }
                // a single segment between random points can only be refused
                // when it runs above the front
                Err(Error::ConstraintOutsideFront { .. }) => {}
                Err(e) => panic!("seed {seed}: unexpected error {e}"),
            }
        }
        assert!(
            succeeded * 2 > cases,
            "only {succeeded} of {cases} constraints enforced"
        );
    }

    #[test]
    fn test_constraint_already_an_edge() {
        // (1, 0) - (1, 1) is always an edge of the square
        let mut observer = CountObserver::default();
        let triangulation = Triangulator::new(&square(), &[(1, 2), (2, 1)])
            .unwrap()
            .triangulate_with_observer(&mut observer)
            .unwrap();
        assert_eq!(observer.constrained, 1);
        assert_eq!(triangulation.edges().iter().filter(|e| e.constrained).count(), 1);
    }

    #[test]
    fn test_constraint_through_vertex() {
        let points = vec![
            Point::new(0., 0.),
            Point::new(1., 1.),
            Point::new(2., 2.),
            Point::new(2., 0.),
            Point::new(0., 2.),
        ];
        let result = Triangulator::new(&points, &[(0, 2)])
            .unwrap()
            .triangulate();
        assert!(matches!(
            result,
            Err(Error::ConstraintThroughVertex {
                through: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_random_with_constraints() {
        // constraints are either honoured or refused with an error
        for seed in 0..10 {
            let points = random_points(100 + seed, 80);
            let mut rng = StdRng::seed_from_u64(seed);
            let constraints = (0..3)
                .map(|_| (rng.gen_range(0..40), rng.gen_range(40..80)))
                .collect::<Vec<_>>();

            match Triangulator::new(&points, &constraints)
                .unwrap()
                .triangulate()
            {
                Ok(triangulation) => {
                    triangulation.check().unwrap();
                    for (a, b) in constraints {
                        assert!(triangulation
                            .edges()
                            .iter()
                            .any(|e| e.constrained && e.vertices.contains(&a) && e.vertices.contains(&b)));
                    }
                }
                Err(
                    Error::ConstraintOutsideFront { .. }
                    | Error::ConstraintThroughVertex { .. }
                    | Error::CrossingConstraints { .. },
                ) => {}
                Err(e) => panic!("unexpected error {e}"),
            }
        }
    }

    #[test]
    fn test_empty_circle_diagonal() {
        // the circle through 3, 1 and 0 holds 2, so 2-3 is the diagonal
        let points = vec![
            Point::new(0., 0.),
            Point::new(3., 1.),
            Point::new(1.5, 1.1),
            Point::new(1.5, -1.),
        ];
        let triangulation = Triangulator::new(&points, &[])
            .unwrap()
            .triangulate()
            .unwrap();
        triangulation.check().unwrap();
        assert_eq!(triangulation.triangles().len(), 2);
        assert!(triangulation
            .edges()
            .iter()
            .any(|e| e.vertices.contains(&2) && e.vertices.contains(&3)));
        for t in triangulation.triangles() {
            assert_eq!(
                orient_2d(t.points[0], t.points[1], t.points[2]),
                Orientation::CCW
            );
        }
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            Triangulator::new(&square()[..2], &[]).err(),
            Some(Error::NotEnoughPoints(2))
        );
        assert_eq!(
            TriangulatorBuilder::new(square()).with_margin(-1.).build().err(),
            Some(Error::InvalidMargin(-1.))
        );
    }
}
