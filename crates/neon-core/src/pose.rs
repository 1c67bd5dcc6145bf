//! Pose snapshot types and the landmark topology delivered by the tracker.
//!
//! The tracker reports 33 landmarks per frame in normalized \[0,1\]
//! coordinates. The camera feed is mirrored, so every canvas-space mapping
//! flips X; collision and overlay drawing must agree on this or hits land
//! beside the drawn skeleton.

use glam::Vec2;

pub const NOSE: usize = 0;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

pub const LANDMARK_COUNT: usize = 33;

/// The joints that can collect targets: nose plus the four extremities.
pub const ACTIVE_JOINTS: [usize; 5] = [
    NOSE,
    LEFT_INDEX,
    RIGHT_INDEX,
    LEFT_FOOT_INDEX,
    RIGHT_FOOT_INDEX,
];

/// Skeleton edges of the 33-landmark topology, drawn by the overlay.
pub const POSE_CONNECTIONS: [(usize, usize); 35] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 7),
    (0, 4),
    (4, 5),
    (5, 6),
    (6, 8),
    (9, 10),
    (11, 12),
    (11, 13),
    (13, 15),
    (15, 17),
    (15, 19),
    (15, 21),
    (17, 19),
    (12, 14),
    (14, 16),
    (16, 18),
    (16, 20),
    (16, 22),
    (18, 20),
    (11, 23),
    (12, 24),
    (23, 24),
    (23, 25),
    (24, 26),
    (25, 27),
    (26, 28),
    (27, 29),
    (28, 30),
    (29, 31),
    (30, 32),
    (27, 31),
    (28, 32),
];

/// One tracked landmark. `z` is the relative depth the tracker reports; the
/// game only uses `x` and `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Joint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Joint {
    /// Mirrored pixel-space position on a `width` x `height` canvas.
    #[inline]
    pub fn to_canvas(&self, width: f32, height: f32) -> Vec2 {
        Vec2::new((1.0 - self.x) * width, self.y * height)
    }
}

/// The full joint set detected in one video frame. Fully replaced each
/// frame, never merged across frames.
#[derive(Clone, Debug)]
pub struct PoseSnapshot {
    joints: [Joint; LANDMARK_COUNT],
}

impl PoseSnapshot {
    pub fn from_joints(joints: [Joint; LANDMARK_COUNT]) -> Self {
        Self { joints }
    }

    /// Decode the flat `x, y, z` wire layout. `None` when the length is not
    /// exactly `LANDMARK_COUNT * 3`.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != LANDMARK_COUNT * 3 {
            return None;
        }
        let mut joints = [Joint::default(); LANDMARK_COUNT];
        for (i, joint) in joints.iter_mut().enumerate() {
            *joint = Joint {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        Some(Self { joints })
    }

    #[inline]
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    #[inline]
    pub fn joints(&self) -> &[Joint; LANDMARK_COUNT] {
        &self.joints
    }
}
