use std::cmp::Ordering;

use num_rational::Ratio;
use num_traits::Zero;

/// Turn direction of three ordered points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Counter-clockwise
    LeftTurn,
    /// Clockwise
    RightTurn,
    Collinear,
}

impl Orientation {
    /// Interpret the sign of a determinant, positive meaning counter-clockwise.
    pub fn from_sign(sign: Ordering) -> Self {
        match sign {
            Ordering::Greater => Self::LeftTurn,
            Ordering::Less => Self::RightTurn,
            Ordering::Equal => Self::Collinear,
        }
    }

    /// The orientation of the same three points traversed backwards.
    pub fn reversed(self) -> Self {
        match self {
            Self::LeftTurn => Self::RightTurn,
            Self::RightTurn => Self::LeftTurn,
            Self::Collinear => Self::Collinear,
        }
    }

    pub fn is_left_turn(self) -> bool {
        self == Self::LeftTurn
    }

    pub fn is_right_turn(self) -> bool {
        self == Self::RightTurn
    }

    pub fn is_collinear(self) -> bool {
        self == Self::Collinear
    }
}

/// An orientation test over points of type `P`.
///
/// Implementations must be total and exact: coincident points and collinear
/// triples are [`Orientation::Collinear`], and there is no tolerance. The hull
/// scans only ever consult the test, so an inexact one (e.g. naive floating
/// point) silently breaks their convexity guarantees.
pub trait Orientation2D<P: ?Sized> {
    fn orientation(&self, p: &P, q: &P, r: &P) -> Orientation;
}

impl<P: ?Sized, O: Orientation2D<P> + ?Sized> Orientation2D<P> for &O {
    fn orientation(&self, p: &P, q: &P, r: &P) -> Orientation {
        (**self).orientation(p, q, r)
    }
}

/// Orientation test backed by a closure, see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Use a closure as an [`Orientation2D`].
pub fn from_fn<P, F>(f: F) -> FromFn<F>
where
    F: Fn(&P, &P, &P) -> Orientation,
{
    FromFn(f)
}

impl<P, F> Orientation2D<P> for FromFn<F>
where
    F: Fn(&P, &P, &P) -> Orientation,
{
    fn orientation(&self, p: &P, q: &P, r: &P) -> Orientation {
        (self.0)(p, q, r)
    }
}

/// Exact orientation of integer lattice points.
///
/// Evaluates the determinant of `[q - p, r - p]` with differences widened to
/// `i128`. The two products are compared by sign and unsigned magnitude, which
/// never overflows for any pair of `i64` coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lattice;

impl<T> Orientation2D<[T; 2]> for Lattice
where
    T: Copy + Into<i64>,
{
    fn orientation(&self, p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> Orientation {
        let [px, py] = widen(p);
        let [qx, qy] = widen(q);
        let [rx, ry] = widen(r);
        Orientation::from_sign(compare_products(qx - px, ry - py, qy - py, rx - px))
    }
}

fn widen<T: Copy + Into<i64>>(point: &[T; 2]) -> [i128; 2] {
    point.map(|c| {
        let c: i64 = c.into();
        i128::from(c)
    })
}

/// Compare `a * b` against `c * d` for factors of magnitude below 2^64.
fn compare_products(a: i128, b: i128, c: i128, d: i128) -> Ordering {
    let lhs_sign = a.signum() * b.signum();
    let rhs_sign = c.signum() * d.signum();
    match lhs_sign.cmp(&rhs_sign) {
        Ordering::Equal => {
            let lhs = a.unsigned_abs() * b.unsigned_abs();
            let rhs = c.unsigned_abs() * d.unsigned_abs();
            if lhs_sign < 0 {
                rhs.cmp(&lhs)
            } else {
                lhs.cmp(&rhs)
            }
        }
        ordering => ordering,
    }
}

/// Exact orientation of points with rational coordinates.
///
/// Exact as long as the intermediate numerators and denominators fit in the
/// underlying integer type; overflow follows `num_rational`'s own behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rational;

macro_rules! impl_rational_orientation {
    ($($int: ty),*) => {
        $(
            impl Orientation2D<[Ratio<$int>; 2]> for Rational {
                fn orientation(
                    &self,
                    p: &[Ratio<$int>; 2],
                    q: &[Ratio<$int>; 2],
                    r: &[Ratio<$int>; 2],
                ) -> Orientation {
                    let determinant =
                        (q[0] - p[0]) * (r[1] - p[1]) - (q[1] - p[1]) * (r[0] - p[0]);
                    Orientation::from_sign(determinant.cmp(&Ratio::zero()))
                }
            }
        )*
    };
}

impl_rational_orientation!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_detects_turns() {
        assert_eq!(
            Lattice.orientation(&[0, 0], &[5, 0], &[10, 5]),
            Orientation::LeftTurn
        );
        assert_eq!(
            Lattice.orientation(&[0, 0], &[5, 0], &[10, -5]),
            Orientation::RightTurn
        );
        assert_eq!(
            Lattice.orientation(&[0, 0], &[5, 0], &[10, 0]),
            Orientation::Collinear
        );
    }

    #[test]
    fn lattice_degenerate_triples_are_collinear() {
        let p = [3i32, -7];
        assert_eq!(Lattice.orientation(&p, &p, &p), Orientation::Collinear);
        assert_eq!(
            Lattice.orientation(&p, &p, &[10, 10]),
            Orientation::Collinear
        );
        assert_eq!(
            Lattice.orientation(&[10, 10], &p, &p),
            Orientation::Collinear
        );
    }

    #[test]
    fn lattice_is_exact_at_extreme_coordinates() {
        let min = i64::MIN;
        let max = i64::MAX;
        assert_eq!(
            Lattice.orientation(&[min, min], &[max, min], &[max, max]),
            Orientation::LeftTurn
        );
        assert_eq!(
            Lattice.orientation(&[min, min], &[max, max], &[max, min]),
            Orientation::RightTurn
        );
        assert_eq!(
            Lattice.orientation(&[min, min], &[0, 0], &[max, max]),
            Orientation::Collinear
        );
        // Off by one from collinear, far beyond f64 precision
        assert_eq!(
            Lattice.orientation(&[min, min], &[0, 0], &[max, max - 1]),
            Orientation::RightTurn
        );
    }

    #[test]
    fn lattice_accepts_narrow_unsigned_coordinates() {
        assert_eq!(
            Lattice.orientation(&[0u8, 0], &[255, 0], &[255, 255]),
            Orientation::LeftTurn
        );
    }

    #[test]
    fn swapping_the_last_two_points_reverses_orientation() {
        let triples = [
            ([0, 0], [5, 0], [10, 5]),
            ([1, 2], [-4, 7], [3, 3]),
            ([0, 0], [1, 1], [2, 2]),
        ];
        for (p, q, r) in triples {
            assert_eq!(
                Lattice.orientation(&p, &r, &q),
                Lattice.orientation(&p, &q, &r).reversed()
            );
        }
    }

    #[test]
    fn rational_matches_scaled_lattice() {
        let half = |n: i64| Ratio::new(n, 2);
        let p = [half(0), half(0)];
        let q = [half(5), half(0)];
        assert_eq!(
            Rational.orientation(&p, &q, &[half(10), half(5)]),
            Orientation::LeftTurn
        );
        assert_eq!(
            Rational.orientation(&p, &q, &[half(10), half(-5)]),
            Orientation::RightTurn
        );
        assert_eq!(
            Rational.orientation(&p, &q, &[half(10), half(0)]),
            Orientation::Collinear
        );
    }

    #[test]
    fn rational_resolves_thirds_exactly() {
        let third = |n: i32| Ratio::new(n, 3);
        assert_eq!(
            Rational.orientation(
                &[third(0), third(0)],
                &[third(1), third(1)],
                &[third(2), third(2)]
            ),
            Orientation::Collinear
        );
    }

    #[test]
    fn closures_are_orientation_tests() {
        let always_left = from_fn(|_: &u8, _: &u8, _: &u8| Orientation::LeftTurn);
        assert!(always_left.orientation(&0, &1, &2).is_left_turn());
        assert!((&always_left).orientation(&0, &1, &2).is_left_turn());
    }
}
