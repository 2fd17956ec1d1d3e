use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    orientation::Orientation2D,
    predicate::{HullPredicate, TurnFilter},
};

/// Graham scan of an already ordered sequence into an open convex chain.
///
/// Every point is pushed once; before a push, the chain's last point is popped
/// for as long as it would make a non-left turn with its predecessor and the new
/// point. Collinear middle points are dropped. The input order is trusted: an
/// input that is not arranged for a hull (e.g. by angle around a pivot, or
/// lexicographically for a monotone chain) still yields a convex chain, just
/// not necessarily the hull.
///
/// <https://en.wikipedia.org/wiki/Graham_scan>
pub fn open_scan<P, I, O>(points: I, orientation: &O) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    O: Orientation2D<P> + ?Sized,
{
    open_scan_with(points, &TurnFilter::counter_clockwise(orientation))
}

/// [`open_scan`] with a custom rule for which middle points survive.
pub fn open_scan_with<P, I, H>(points: I, predicate: &H) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    H: HullPredicate<P> + ?Sized,
{
    let (input_len, chain) = scan_chain(points, predicate);
    debug!(input_len, output_len = chain.len(), "open scan");
    chain
}

/// [`open_scan_with`], appending the chain to `sink`.
pub fn open_scan_into<P, I, H, E>(points: I, predicate: &H, sink: &mut E)
where
    I: IntoIterator<Item = P>,
    H: HullPredicate<P> + ?Sized,
    E: Extend<P>,
{
    sink.extend(open_scan_with(points, predicate));
}

/// Graham scan of an already ordered sequence into a closed convex polygon.
///
/// Runs [`open_scan`], then repairs the seam between the last and first
/// points, which the linear pass never compares. Points on either side of the
/// seam that fail the turn test are dropped; this can cascade into the chain
/// from both ends, so the first input point is not guaranteed to survive.
pub fn closed_scan<P, I, O>(points: I, orientation: &O) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    O: Orientation2D<P> + ?Sized,
{
    closed_scan_with(points, &TurnFilter::counter_clockwise(orientation))
}

/// [`closed_scan`] with a custom rule for which middle points survive.
pub fn closed_scan_with<P, I, H>(points: I, predicate: &H) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    H: HullPredicate<P> + ?Sized,
{
    let (input_len, chain) = scan_chain(points, predicate);
    let mut polygon = VecDeque::from(chain);
    let open_len = polygon.len();
    close_seam(&mut polygon, predicate);
    debug!(
        input_len,
        open_len,
        output_len = polygon.len(),
        "closed scan"
    );
    Vec::from(polygon)
}

/// [`closed_scan_with`], appending the polygon to `sink`.
pub fn closed_scan_into<P, I, H, E>(points: I, predicate: &H, sink: &mut E)
where
    I: IntoIterator<Item = P>,
    H: HullPredicate<P> + ?Sized,
    E: Extend<P>,
{
    sink.extend(closed_scan_with(points, predicate));
}

/// Whether `predicate` keeps every middle point of every consecutive triple.
pub fn is_convex_chain<P, H>(points: &[P], predicate: &H) -> bool
where
    H: HullPredicate<P> + ?Sized,
{
    points
        .windows(3)
        .all(|triple| predicate.keeps(&triple[0], &triple[1], &triple[2]))
}

/// Like [`is_convex_chain`], but also checks the two triples around the seam.
pub fn is_convex_polygon<P, H>(points: &[P], predicate: &H) -> bool
where
    H: HullPredicate<P> + ?Sized,
{
    let n = points.len();
    n < 3
        || (0..n).all(|i| {
            predicate.keeps(&points[i], &points[(i + 1) % n], &points[(i + 2) % n])
        })
}

/// Returns the number of points consumed along with the chain.
fn scan_chain<P, I, H>(points: I, predicate: &H) -> (usize, Vec<P>)
where
    I: IntoIterator<Item = P>,
    H: HullPredicate<P> + ?Sized,
{
    let points = points.into_iter();
    let mut chain = Vec::with_capacity(points.size_hint().0);
    let mut input_len = 0;
    for point in points {
        input_len += 1;
        while chain.len() >= 2
            && !predicate.keeps(&chain[chain.len() - 2], &chain[chain.len() - 1], &point)
        {
            chain.pop();
        }
        chain.push(point);
    }
    (input_len, chain)
}

/// Drop points until both triples spanning the seam `last -> first` are kept.
///
/// Every iteration removes a point or stops, so this is linear in the worst case.
fn close_seam<P, H>(polygon: &mut VecDeque<P>, predicate: &H)
where
    H: HullPredicate<P> + ?Sized,
{
    while polygon.len() > 2 {
        let n = polygon.len();
        if !predicate.keeps(&polygon[n - 2], &polygon[n - 1], &polygon[0]) {
            trace!(remaining = n - 1, "dropping last point before the seam");
            polygon.pop_back();
        } else if !predicate.keeps(&polygon[n - 1], &polygon[0], &polygon[1]) {
            trace!(remaining = n - 1, "dropping first point after the seam");
            polygon.pop_front();
        } else {
            break;
        }
    }
}
