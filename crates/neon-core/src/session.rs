//! Session state and the per-frame logic sequence.
//!
//! `GameSession::advance` is the logic half of the frame coordinator: it
//! runs once per pose result, before any draw call, so a just-hit target is
//! never rendered and the beat scale is already current when the caller
//! starts drawing.

use crate::collision::{self, HitEvent};
use crate::limiter::CommentaryLimiter;
use crate::loudness::{beat_scale_from_mean, LoudnessSource, BEAT_SCALE_MIN};
use crate::particles::ParticleSystem;
use crate::pose::PoseSnapshot;
use crate::spawn;
use crate::target::Target;
use instant::Instant;
use rand::Rng;
use smallvec::SmallVec;

/// Points awarded per collected target.
pub const HIT_SCORE: u32 = 10;
/// Score interval between commentary milestones.
pub const MILESTONE_STEP: u32 = 50;

/// What one `advance` produced, for the caller to render and react to.
#[derive(Debug, Default)]
pub struct FrameEvents {
    /// Id of the target spawned this frame, if the roll passed.
    pub spawned: Option<u64>,
    pub hits: SmallVec<[HitEvent; 4]>,
    /// Milestone scores crossed this frame, in hit order. Each entry is one
    /// commentary trigger, still subject to the rate limiter.
    pub milestones: SmallVec<[u32; 1]>,
}

pub struct GameSession {
    pub targets: Vec<Target>,
    pub particles: ParticleSystem,
    /// Latest pose snapshot; `None` when the last frame saw no body.
    pub pose: Option<PoseSnapshot>,
    pub beat_scale: f32,
    pub score: u32,
    pub playing: bool,
    pub last_hit: Option<Instant>,
    pub limiter: CommentaryLimiter,
    last_milestone_score: u32,
    next_target_id: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            particles: ParticleSystem::new(),
            pose: None,
            beat_scale: BEAT_SCALE_MIN,
            score: 0,
            playing: false,
            last_hit: None,
            limiter: CommentaryLimiter::new(),
            last_milestone_score: 0,
            next_target_id: 0,
        }
    }

    /// Flip between idle and active. Pausing freezes targets and particles
    /// in place; nothing is reset.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn last_milestone_score(&self) -> u32 {
        self.last_milestone_score
    }

    /// Advance one frame: sample loudness, replace the pose snapshot, and —
    /// only while playing — spawn, collide, and step particles, in that
    /// order.
    pub fn advance(
        &mut self,
        pose: Option<PoseSnapshot>,
        width: f32,
        height: f32,
        loudness: Option<&mut dyn LoudnessSource>,
        rng: &mut impl Rng,
        now: Instant,
    ) -> FrameEvents {
        if let Some(source) = loudness {
            if let Some(avg) = source.sample() {
                self.beat_scale = beat_scale_from_mean(avg);
            }
        }
        self.pose = pose;

        let mut events = FrameEvents::default();
        if !self.playing {
            return events;
        }

        if let Some(target) =
            spawn::maybe_spawn(width, height, self.targets.len(), self.next_target_id, rng)
        {
            self.next_target_id += 1;
            events.spawned = Some(target.id);
            self.targets.push(target);
        }

        let hits = collision::detect(self.pose.as_ref(), width, height, &mut self.targets);
        for hit in &hits {
            self.score += HIT_SCORE;
            self.last_hit = Some(now);
            self.particles.burst(hit.pos, rng);
            if milestone_crossed(self.last_milestone_score, self.score) {
                self.last_milestone_score = self.score;
                events.milestones.push(self.score);
            }
        }
        events.hits = hits;

        self.particles.step();
        events
    }
}

/// One commentary trigger per 50-point bucket, no matter how many hits land
/// in a single frame.
#[inline]
pub fn milestone_crossed(baseline: u32, score: u32) -> bool {
    score > 0 && score / MILESTONE_STEP > baseline / MILESTONE_STEP
}
