//! Landmark ingress from the JS pose driver.

use neon_core::pose::{PoseSnapshot, LANDMARK_COUNT};

/// Decode one frame of landmarks. An empty slice means the tracker saw no
/// body this frame; a wrong-length payload is dropped with a warning.
pub fn decode_pose(data: &[f32]) -> Option<PoseSnapshot> {
    if data.is_empty() {
        return None;
    }
    match PoseSnapshot::from_flat(data) {
        Some(pose) => Some(pose),
        None => {
            log::warn!(
                "invalid landmark payload: {} values (expected {})",
                data.len(),
                LANDMARK_COUNT * 3
            );
            None
        }
    }
}
