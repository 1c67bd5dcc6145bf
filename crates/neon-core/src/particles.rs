use glam::Vec2;
use rand::Rng;

/// Neon palette for burst particles.
pub const PARTICLE_COLORS: [&str; 4] = ["#0ff", "#f0f", "#ff0", "#0f0"];

/// Particles per hit burst.
pub const BURST_SIZE: usize = 15;
/// Life lost per simulated frame; a particle lasts about 20 frames.
pub const LIFE_DECAY: f32 = 0.05;

const VELOCITY_SPAN: f32 = 10.0;

/// A short-lived burst fragment. `life` is in \[0,1\] and doubles as the
/// render alpha.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub color: &'static str,
}

#[derive(Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one hit burst at `origin`: 15 particles with velocity
    /// components uniform in \[-5, 5) on both axes, full life.
    pub fn burst(&mut self, origin: Vec2, rng: &mut impl Rng) {
        for _ in 0..BURST_SIZE {
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * VELOCITY_SPAN,
                    (rng.gen::<f32>() - 0.5) * VELOCITY_SPAN,
                ),
                life: 1.0,
                color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())],
            });
        }
    }

    /// Advance every particle one frame and retire the ones that burned out.
    /// A retired particle is never seen by the renderer.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.life -= LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
