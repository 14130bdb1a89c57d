//! Plane rotations in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! A plane rotation mixes the two coordinates of its plane with a standard
//! 2D rotation matrix embedded in an otherwise-identity 4x4 matrix; the
//! other two coordinates pass through unchanged. Rotations on different
//! planes do not commute in general, so composition order matters.

use crate::Vec4;

/// The 6 rotation planes in 4D space, named by the pair of axes they mix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes, in axis order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Indices of the two axes mixed by this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }
}

/// Rotate a 4D point by `angle` radians within a single coordinate plane.
///
/// For a plane mixing axes (a, b):
/// `a' = a*cos - b*sin`, `b' = a*sin + b*cos`, the other two axes are fixed.
///
/// The map is orthogonal: the Euclidean norm of the input is preserved
/// (within floating-point tolerance) for every plane and angle.
///
/// # Example
/// ```
/// use wire4d_math::{rotate, RotationPlane, Vec4};
/// use std::f32::consts::FRAC_PI_2;
/// // A quarter turn in the XY plane carries X onto Y
/// let v = rotate(Vec4::X, RotationPlane::XY, FRAC_PI_2);
/// assert!((v.y - 1.0).abs() < 1e-6);
/// ```
pub fn rotate(point: Vec4, plane: RotationPlane, angle: f32) -> Vec4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut c = [point.x, point.y, point.z, point.w];
    let (a, b) = plane.axes();
    let (ca, cb) = (c[a], c[b]);
    c[a] = ca * cs - cb * sn;
    c[b] = ca * sn + cb * cs;

    Vec4::new(c[0], c[1], c[2], c[3])
}
