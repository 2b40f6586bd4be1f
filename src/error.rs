/// Errors reported by the triangulator. Indices are input point indices.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("at least 3 points are required, got {0}")]
    NotEnoughPoints(usize),

    #[error("too many points: {0}")]
    TooManyPoints(usize),

    #[error("point {index} is not finite: ({x}, {y})")]
    NonFinitePoint { index: usize, x: f64, y: f64 },

    #[error("points {first} and {second} have the same coordinates")]
    DuplicatePoint { first: usize, second: usize },

    #[error("all points are collinear")]
    Collinear,

    #[error("margin factor must be positive and finite, got {0}")]
    InvalidMargin(f64),

    #[error("constraint ({first}, {second}) is out of range for {len} points")]
    ConstraintOutOfRange {
        first: usize,
        second: usize,
        len: usize,
    },

    #[error("constraint joins point {0} to itself")]
    SelfConstraint(usize),

    #[error("no sweep front edge found above point {0}")]
    FrontExhausted(usize),

    #[error("constraint ({from}, {to}) leaves the swept region, not supported")]
    ConstraintOutsideFront { from: usize, to: usize },

    #[error("constraint ({from}, {to}) runs through point {through}, not supported")]
    ConstraintThroughVertex {
        from: usize,
        to: usize,
        through: isize,
    },

    #[error("constraint ({from}, {to}) crosses another constraint, not supported")]
    CrossingConstraints { from: usize, to: usize },

    #[error("no ear found in polygon with {0} vertices")]
    NoEar(usize),
}
