use crate::target::{Target, TARGET_GLYPHS};
use glam::Vec2;
use rand::Rng;

/// Independent per-frame chance that a new collectible appears.
pub const SPAWN_CHANCE: f64 = 0.02;
/// Concurrent collectible cap.
pub const MAX_TARGETS: usize = 5;

pub const TARGET_SIZE_MIN: f32 = 40.0;
pub const TARGET_SIZE_SPAN: f32 = 20.0;

/// Roll the spawn chance for this frame. Produces a target at a uniform
/// random canvas position only while the cap is not reached; the RNG is not
/// consumed at the cap.
pub fn maybe_spawn(
    width: f32,
    height: f32,
    current: usize,
    next_id: u64,
    rng: &mut impl Rng,
) -> Option<Target> {
    if current >= MAX_TARGETS || rng.gen::<f64>() >= SPAWN_CHANCE {
        return None;
    }
    Some(Target {
        id: next_id,
        pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
        glyph: TARGET_GLYPHS[rng.gen_range(0..TARGET_GLYPHS.len())],
        size: TARGET_SIZE_MIN + rng.gen::<f32>() * TARGET_SIZE_SPAN,
    })
}
