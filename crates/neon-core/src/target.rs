use glam::Vec2;

/// Glyphs a collectible can display, picked uniformly at spawn.
pub const TARGET_GLYPHS: [char; 6] = ['🍬', '⭐', '🚀', '💎', '🔥', '🤖'];

/// A collectible on the canvas. `size` doubles as the hit radius and the
/// rendered glyph size in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub id: u64,
    pub pos: Vec2,
    pub glyph: char,
    pub size: f32,
}
