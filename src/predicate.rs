use crate::orientation::{Orientation, Orientation2D};

/// Decides whether `b` stays on a hull chain that runs `a -> b -> c`.
pub trait HullPredicate<P: ?Sized> {
    fn keeps(&self, a: &P, b: &P, c: &P) -> bool;
}

impl<P: ?Sized, H: HullPredicate<P> + ?Sized> HullPredicate<P> for &H {
    fn keeps(&self, a: &P, b: &P, c: &P) -> bool {
        (**self).keeps(a, b, c)
    }
}

/// A [`HullPredicate`] that accepts a fixed set of orientations.
///
/// [`TurnFilter::counter_clockwise`] is the usual choice for a chain that winds
/// counter-clockwise: only strict left turns survive, so both reflex and
/// collinear middle points are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnFilter<O> {
    orientation: O,
    accept_left: bool,
    accept_right: bool,
    accept_collinear: bool,
}

impl<O> TurnFilter<O> {
    /// Keep strict left turns.
    pub fn counter_clockwise(orientation: O) -> Self {
        Self {
            orientation,
            accept_left: true,
            accept_right: false,
            accept_collinear: false,
        }
    }

    /// Keep strict right turns.
    pub fn clockwise(orientation: O) -> Self {
        Self {
            orientation,
            accept_left: false,
            accept_right: true,
            accept_collinear: false,
        }
    }

    /// Also keep middle points that are collinear with their neighbors.
    ///
    /// Duplicate points are collinear too, so with this enabled a chain may
    /// hold repeated or backtracking points.
    pub fn with_collinear(mut self, accept_collinear: bool) -> Self {
        self.accept_collinear = accept_collinear;
        self
    }

    pub fn accepts(&self, orientation: Orientation) -> bool {
        match orientation {
            Orientation::LeftTurn => self.accept_left,
            Orientation::RightTurn => self.accept_right,
            Orientation::Collinear => self.accept_collinear,
        }
    }

    pub fn orientation(&self) -> &O {
        &self.orientation
    }
}

impl<P: ?Sized, O: Orientation2D<P>> HullPredicate<P> for TurnFilter<O> {
    fn keeps(&self, a: &P, b: &P, c: &P) -> bool {
        self.accepts(self.orientation.orientation(a, b, c))
    }
}
