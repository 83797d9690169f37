/// Degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Euclidean distance between two points on a plane.
#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Linearly re-map `value` from `[start1, stop1]` onto `[start2, stop2]`.
///
/// The mapping is not clamped: values outside the source range extrapolate.
/// A degenerate source range (`start1 == stop1`) returns `start2`.
#[inline]
pub fn map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    let span = stop1 - start1;
    if span == 0.0 {
        return start2;
    }
    (value - start1) / span * (stop2 - start2) + start2
}
