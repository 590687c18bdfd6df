//! Left-to-right component-wise folds over point sequences.
//!
//! Every operation starts from the first point and applies its operator
//! with each following point in order, so `subtract(&[a, b])` is `a - b`.

use crate::{GeometryError, Point, Result, Vec3};

fn fold(points: &[Point], name: &str, op: impl Fn(Vec3, &Vec3) -> Vec3) -> Result<Point> {
    let (first, rest) = points.split_first().ok_or_else(|| {
        GeometryError::InvalidArgument(format!("{name} requires at least one point"))
    })?;
    let folded = rest.iter().fold(*first.xyz(), |acc, p| op(acc, p.xyz()));
    Ok(Point::from_vec(folded))
}

/// Sum of all points.
pub fn add(points: &[Point]) -> Result<Point> {
    fold(points, "add", |acc, v| acc + v)
}

/// First point minus every following point.
pub fn subtract(points: &[Point]) -> Result<Point> {
    fold(points, "subtract", |acc, v| acc - v)
}

/// Component-wise product of all points.
pub fn multiply(points: &[Point]) -> Result<Point> {
    fold(points, "multiply", |acc, v| acc.component_mul(v))
}

/// First point divided component-wise by every following point.
///
/// Zero components in a divisor yield infinities, as in IEEE division.
pub fn divide(points: &[Point]) -> Result<Point> {
    fold(points, "divide", |acc, v| acc.component_div(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_single() {
        let p = Point::new(1.0, -2.0, 3.5);
        assert_eq!(add(&[p]).unwrap(), p);
    }

    #[test]
    fn test_add_pair() {
        let p = Point::new(1.0, 2.0, 3.0);
        let q = Point::new(4.0, 5.0, 6.0);
        assert_eq!(add(&[p, q]).unwrap(), Point::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn test_subtract_is_left_fold() {
        let a = Point::new(10.0, 10.0, 10.0);
        let b = Point::new(1.0, 2.0, 3.0);
        let c = Point::new(1.0, 1.0, 1.0);
        assert_eq!(subtract(&[a, b, c]).unwrap(), Point::new(8.0, 7.0, 6.0));
    }

    #[test]
    fn test_multiply_divide() {
        let a = Point::new(2.0, 3.0, 4.0);
        let b = Point::new(0.5, 2.0, -1.0);
        assert_eq!(multiply(&[a, b]).unwrap(), Point::new(1.0, 6.0, -4.0));
        assert_eq!(divide(&[a, b]).unwrap(), Point::new(4.0, 1.5, -4.0));
    }

    #[test]
    fn test_empty_sequence() {
        for result in [add(&[]), subtract(&[]), multiply(&[]), divide(&[])] {
            assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
        }
    }
}
