use robust::Coord;

use crate::shape::Point;

/// Relative tolerance of the barycentric inside test used by ear clipping
pub const BARYCENTRIC_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clock Wise
    ///
    ///  a     b
    ///             c
    ///
    CW,
    /// Counter Clock Wise
    ///             c
    ///  a     b
    CCW,
    /// Collinear
    ///  a     b    c
    Collinear,
}

impl Orientation {
    pub fn is_cw(&self) -> bool {
        matches!(self, Self::CW)
    }

    pub fn is_ccw(&self) -> bool {
        matches!(self, Self::CCW)
    }

    pub fn is_collinear(&self) -> bool {
        matches!(self, Self::Collinear)
    }
}

#[inline(always)]
fn coord(p: Point) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Twice the signed area of `abc`, exact in sign
pub fn signed_area(a: Point, b: Point, c: Point) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

pub fn orient_2d(a: Point, b: Point, c: Point) -> Orientation {
    let val = signed_area(a, b, c);

    if val > 0. {
        Orientation::CCW
    } else if val < 0. {
        Orientation::CW
    } else {
        Orientation::Collinear
    }
}

/// check whether pd is strictly inside the circle defined by pa, pb, pc
/// requirements: pa, pb, pc are counter clockwise.
pub fn in_circle(pa: Point, pb: Point, pc: Point, pd: Point) -> bool {
    robust::incircle(coord(pa), coord(pb), coord(pc), coord(pd)) > 0.
}

/// whether segment `ab` and segment `cd` cross at a single point interior
/// to both
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orient_2d(a, b, c);
    let o2 = orient_2d(a, b, d);
    let o3 = orient_2d(c, d, a);
    let o4 = orient_2d(c, d, b);

    !o1.is_collinear()
        && !o2.is_collinear()
        && !o3.is_collinear()
        && !o4.is_collinear()
        && o1 != o2
        && o3 != o4
}

/// whether `p` lies inside or on the border of triangle `abc`, computed with
/// barycentric coordinates and a small tolerance
pub fn in_triangle(a: Point, b: Point, c: Point, p: Point) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(v0);
    let dot01 = v0.dot(v1);
    let dot02 = v0.dot(v2);
    let dot11 = v1.dot(v1);
    let dot12 = v1.dot(v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom == 0. {
        return false;
    }
    let u = (dot11 * dot02 - dot01 * dot12) / denom;
    let v = (dot00 * dot12 - dot01 * dot02) / denom;

    u >= -BARYCENTRIC_EPSILON && v >= -BARYCENTRIC_EPSILON && u + v <= 1. + BARYCENTRIC_EPSILON
}

/// Angle `aob`, kept as the dot product of its two legs
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    dot: f64,
}

impl Angle {
    pub fn new(o: Point, a: Point, b: Point) -> Self {
        Angle {
            dot: (a - o).dot(b - o),
        }
    }

    /// whether the angle is strictly less than PI / 2
    pub fn is_acute(&self) -> bool {
        self.dot > 0.
    }
}
