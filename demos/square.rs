use rand::Rng;
use sweep_cdt::{Point, TriangulatorBuilder};
mod utils;

fn main() {
    // the corners of a square, then random points inside
    let mut points = vec![
        Point::new(-10., -10.),
        Point::new(810., -10.),
        Point::new(810., 810.),
        Point::new(-10., 810.),
    ];
    for _ in 0..100 {
        let x: f64 = rand::thread_rng().gen_range(0.0..800.);
        let y: f64 = rand::thread_rng().gen_range(0.0..800.);
        points.push(Point::new(x, y));
    }

    let builder = TriangulatorBuilder::new(points)
        .add_constraint(0, 2)
        .add_constraint(1, 3);

    match builder.build().and_then(|t| t.triangulate()) {
        Ok(triangulation) => utils::draw_svg(&triangulation, "square.svg".into()),
        // the diagonals may cross each other or run into the random points
        Err(e) => eprintln!("triangulation failed: {e}"),
    }
}
