//! Perspective projection from 4D to 3D

use crate::Vec4;

/// Project a 4D point into 3D space with a perspective divide.
///
/// The point's own distance from the origin, `d = |point|`, stands in for
/// the camera distance, and the w coordinate acts as depth:
///
/// `(x, y, z, w)  ->  (d / (d - w)) * (x, y, z)`
///
/// Points with positive w land closer to the implied camera and come out
/// magnified; points with negative w shrink toward the origin.
///
/// # Degenerate input
///
/// When `d - w` reaches zero the divide has no finite answer. No clamping
/// is applied: the IEEE infinity or NaN propagates into the result and the
/// caller sees the point leave the view, which is the intended behavior of
/// this projection model. This function never panics.
pub fn project(point: Vec4) -> [f32; 3] {
    let d = point.length();
    let scale = d / (d - point.w);
    [point.x * scale, point.y * scale, point.z * scale]
}
