use crate::{Point, TriangulatorBuilder};

#[derive(thiserror::Error, Debug)]
pub enum LoaderError {
    #[error("IO error")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected a point as `x y`")]
    BadPoint { line: usize },
    #[error("line {line}: expected a constraint as `first second`")]
    BadConstraint { line: usize },
}

/// Loader loads source to a [`TriangulatorBuilder`].
/// e.g: PlainFileLoader load from file path, one `x y` point per line,
/// optionally followed by a `CONSTRAINTS` line and one `first second` index
/// pair per line.
pub trait Loader {
    fn load(&mut self, source: &str) -> Result<TriangulatorBuilder, LoaderError>;
}

/// Loaders can load data from file
#[derive(Default)]
pub struct PlainFileLoader {}

#[derive(Default)]
enum ParseState {
    #[default]
    Points,
    Constraints,
}

impl Loader for PlainFileLoader {
    fn load(&mut self, path: &str) -> Result<TriangulatorBuilder, LoaderError> {
        let value = std::fs::read_to_string(path)?;
        parse(&value)
    }
}

/// Parse the plain text format, see [`Loader`]
pub fn parse(value: &str) -> Result<TriangulatorBuilder, LoaderError> {
    let mut state = ParseState::default();
    let mut points = vec![];
    let mut constraints = vec![];

    for (idx, line) in value.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq("CONSTRAINTS") {
            state = ParseState::Constraints;
            continue;
        }

        match state {
            ParseState::Points => {
                let point = parse_pair::<f64>(line)
                    .map(|(x, y)| Point::new(x, y))
                    .ok_or(LoaderError::BadPoint { line: idx + 1 })?;
                points.push(point);
            }
            ParseState::Constraints => {
                let constraint =
                    parse_pair::<usize>(line).ok_or(LoaderError::BadConstraint { line: idx + 1 })?;
                constraints.push(constraint);
            }
        }
    }

    Ok(TriangulatorBuilder::new(points).add_constraints(constraints))
}

fn parse_pair<T: std::str::FromStr>(line: &str) -> Option<(T, T)> {
    let mut iter = line.split_whitespace();
    let a = iter.next()?.parse::<T>().ok()?;
    let b = iter.next()?.parse::<T>().ok()?;
    if iter.next().is_some() {
        return None;
    }
    Some((a, b))
}
