use std::io::Write as _;

use rand::Rng;
use sweep_cdt::{Point, TriangulatorBuilder};

fn main() {
    tracing_subscriber::fmt::init();
    test_forever_rand();
}

fn test_forever_rand() {
    let mut idx = 0;
    loop {
        idx += 1;
        println!("run {idx}");
        test_rand();
    }
}

fn test_rand() {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(3..2000);
    let points = (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..800.), rng.gen_range(0.0..800.)))
        .collect::<Vec<_>>();
    let constraints = (0..rng.gen_range(0..4))
        .map(|_| (rng.gen_range(0..count), rng.gen_range(0..count)))
        .filter(|(a, b)| a != b)
        .collect::<Vec<_>>();

    let result = TriangulatorBuilder::new(points.clone())
        .add_constraints(constraints.clone())
        .build()
        .and_then(|t| t.triangulate());

    let failure = match result {
        Ok(triangulation) => triangulation.check().err().map(|e| e.to_string()),
        // refused constraints are expected
        Err(
            sweep_cdt::Error::ConstraintOutsideFront { .. }
            | sweep_cdt::Error::ConstraintThroughVertex { .. }
            | sweep_cdt::Error::CrossingConstraints { .. },
        ) => None,
        Err(e) => Some(e.to_string()),
    };

    if let Some(failure) = failure {
        let path = format!("stress_failure_{}.dat", std::process::id());
        println!("failure: {failure}, input saved to {path}");
        save_to_file(&points, &constraints, &path);
        std::process::exit(1);
    }
}

/// same format as the plain file loader
fn save_to_file(points: &[Point], constraints: &[(usize, usize)], path: &str) {
    use std::fmt::Write;
    let mut value = "".to_string();
    for p in points {
        writeln!(value, "{} {}", p.x, p.y).unwrap();
    }
    if !constraints.is_empty() {
        writeln!(value, "CONSTRAINTS").unwrap();
        for (a, b) in constraints {
            writeln!(value, "{a} {b}").unwrap();
        }
    }
    let mut f = std::fs::File::create(path).unwrap();
    f.write_all(value.as_bytes()).unwrap();
}
