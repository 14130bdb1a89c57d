//! Per-frame recomputation of the projected wireframe
//!
//! Every frame, each edge endpoint is carried through the four active
//! plane rotations and the perspective divide, and the resulting 3D
//! coordinates overwrite that edge's slot in the output buffer. The
//! recomputation is total and unconditional, with no dirty tracking: at 32
//! edges the whole pass is 64 rotations and projections.

use bytemuck::{Pod, Zeroable};
use wire4d_math::{project, rotate, RotationPlane, Vec4};

use crate::{OrbitState, Tesseract};
use crate::tesseract::EDGE_COUNT;

/// Projected endpoints of one tesseract edge
///
/// Laid out to match line-list vertex data: six floats per edge, ready for
/// upload by the rendering side.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct EdgeSegment {
    /// Projected 3D position of the first endpoint
    pub start: [f32; 3],
    /// Projected 3D position of the second endpoint
    pub end: [f32; 3],
}

/// Recomputes the projected edge buffer once per frame tick
///
/// Owns the polytope and the output buffer; the orbit state is passed in
/// by the caller so input handlers can mutate it between ticks.
pub struct FrameSystem {
    tesseract: Tesseract,
    segments: [EdgeSegment; EDGE_COUNT],
}

impl FrameSystem {
    /// Create a frame system for the given polytope
    pub fn new(tesseract: Tesseract) -> Self {
        Self {
            tesseract,
            segments: [EdgeSegment::default(); EDGE_COUNT],
        }
    }

    /// Run one frame tick
    ///
    /// Advances the orbit (a no-op while a drag is in progress), then
    /// rewrites every edge slot from scratch with the current angles.
    pub fn update(&mut self, orbit: &mut OrbitState) {
        orbit.advance_frame();

        for (slot, edge) in self.segments.iter_mut().zip(self.tesseract.edges()) {
            slot.start = transform_vertex(self.tesseract.vertex(edge[0]), orbit);
            slot.end = transform_vertex(self.tesseract.vertex(edge[1]), orbit);
        }
    }

    /// The projected segments, one per edge, as written by the last update
    #[inline]
    pub fn segments(&self) -> &[EdgeSegment] {
        &self.segments
    }

    /// The segment buffer as flat position data: 32 edges x 2 endpoints
    /// x 3 coordinates = 192 floats
    #[inline]
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.segments)
    }

    /// The polytope being displayed
    #[inline]
    pub fn tesseract(&self) -> &Tesseract {
        &self.tesseract
    }
}

/// Rotate one vertex by the four active angles and project it to 3D
///
/// The application order XZ, ZW, YW, XW is a contract: plane rotations in
/// 4D do not commute, and reordering changes the visible animation.
fn transform_vertex(vertex: Vec4, orbit: &OrbitState) -> [f32; 3] {
    let p = rotate(vertex, RotationPlane::XZ, orbit.angle_xz());
    let p = rotate(p, RotationPlane::ZW, orbit.angle_zw());
    let p = rotate(p, RotationPlane::YW, orbit.angle_yw());
    let p = rotate(p, RotationPlane::XW, orbit.angle_xw());
    project(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OrbitParams;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn point_approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        approx_eq(a[0], b[0]) && approx_eq(a[1], b[1]) && approx_eq(a[2], b[2])
    }

    #[test]
    fn test_buffer_shape() {
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::default();
        system.update(&mut orbit);

        assert_eq!(system.segments().len(), 32);
        assert_eq!(system.position_data().len(), 192);
    }

    #[test]
    fn test_first_tick_advances_then_projects() {
        // One tick from rest: both auto angles step to 0.01 and the buffer
        // reflects exactly those angles
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::default();
        system.update(&mut orbit);

        assert!(approx_eq(orbit.angle_xz(), 0.01));
        assert!(approx_eq(orbit.angle_zw(), 0.01));

        for (slot, edge) in system.segments().iter().zip(system.tesseract().edges()) {
            for (&index, actual) in edge.iter().zip([slot.start, slot.end]) {
                let v = system.tesseract().vertex(index);
                let expected = project(rotate(
                    rotate(v, RotationPlane::XZ, 0.01),
                    RotationPlane::ZW,
                    0.01,
                ));
                assert!(point_approx_eq(actual, expected),
                    "Vertex {}: expected {:?}, got {:?}", index, expected, actual);
            }
        }
    }

    #[test]
    fn test_zero_angles_project_the_rest_pose() {
        // With auto-orbit disabled and no drag, the buffer is the plain
        // projection of the unrotated tesseract
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::new(OrbitParams::default().with_auto_rate(0.0));
        system.update(&mut orbit);

        // Vertex 15 = (1,1,1,1) has |v| = 2 and projects to (2,2,2)
        let corner = [2.0, 2.0, 2.0];
        let found = system
            .segments()
            .iter()
            .any(|s| point_approx_eq(s.start, corner) || point_approx_eq(s.end, corner));
        assert!(found, "No segment endpoint landed on (2,2,2)");
    }

    #[test]
    fn test_rotation_order_is_fixed() {
        // Make all four angles distinct via a drag, then check the buffer
        // against the contractual order XZ, ZW, YW, XW
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::default();

        system.update(&mut orbit);
        orbit.pointer_down(0.0, 0.0);
        orbit.pointer_move(30.0, -70.0);
        orbit.pointer_up();
        system.update(&mut orbit);

        let (xz, zw, yw, xw) = (
            orbit.angle_xz(),
            orbit.angle_zw(),
            orbit.angle_yw(),
            orbit.angle_xw(),
        );
        assert!(approx_eq(xw, -0.3) && approx_eq(yw, 0.7));

        let edge = system.tesseract().edges()[0];
        let v = system.tesseract().vertex(edge[0]);
        let expected = project(rotate(
            rotate(
                rotate(rotate(v, RotationPlane::XZ, xz), RotationPlane::ZW, zw),
                RotationPlane::YW,
                yw,
            ),
            RotationPlane::XW,
            xw,
        ));
        assert!(point_approx_eq(system.segments()[0].start, expected),
            "Expected {:?}, got {:?}", expected, system.segments()[0].start);
    }

    #[test]
    fn test_buffer_overwritten_each_frame() {
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::default();

        system.update(&mut orbit);
        let first: Vec<EdgeSegment> = system.segments().to_vec();
        system.update(&mut orbit);

        // Same shape, new contents: the angles moved on, so at least the
        // first segment differs from the previous frame
        assert_eq!(system.segments().len(), first.len());
        assert_ne!(system.segments()[0], first[0]);
    }

    #[test]
    fn test_drag_holds_the_picture_still() {
        let mut system = FrameSystem::new(Tesseract::default());
        let mut orbit = OrbitState::default();
        system.update(&mut orbit);

        orbit.pointer_down(10.0, 10.0);
        system.update(&mut orbit);
        let held: Vec<EdgeSegment> = system.segments().to_vec();

        // No pointer motion: further ticks while dragging change nothing
        for _ in 0..3 {
            system.update(&mut orbit);
        }
        assert_eq!(system.segments(), &held[..]);
    }
}
