use crate::pose::{PoseSnapshot, ACTIVE_JOINTS};
use crate::target::Target;
use glam::Vec2;
use smallvec::SmallVec;

/// One collected target: its id and canvas position (the burst origin).
#[derive(Clone, Copy, Debug)]
pub struct HitEvent {
    pub target_id: u64,
    pub pos: Vec2,
}

/// Test every target against the active joints and remove the ones that
/// were hit, in the same pass. A target is hit when any active joint's
/// mirrored pixel position is within `target.size` of its center. Without a
/// pose nothing is evaluated and every target is retained.
pub fn detect(
    pose: Option<&PoseSnapshot>,
    width: f32,
    height: f32,
    targets: &mut Vec<Target>,
) -> SmallVec<[HitEvent; 4]> {
    let mut hits = SmallVec::new();
    let pose = match pose {
        Some(p) => p,
        None => return hits,
    };
    targets.retain(|target| {
        let hit = ACTIVE_JOINTS.iter().any(|&idx| {
            pose.joint(idx)
                .map(|j| j.to_canvas(width, height).distance(target.pos) < target.size)
                .unwrap_or(false)
        });
        if hit {
            hits.push(HitEvent {
                target_id: target.id,
                pos: target.pos,
            });
        }
        !hit
    });
    hits
}
