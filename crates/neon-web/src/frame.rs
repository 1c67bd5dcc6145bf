//! The per-frame coordinator, driven once per pose result.

use crate::audio::{AnalyserLoudness, AudioChain};
use crate::genai;
use crate::overlay;
use crate::render;
use instant::Instant;
use neon_core::{GameSession, LoudnessSource, PoseSnapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Everything the frame callback and the user-gesture handlers touch.
/// Single-threaded by construction; the pose driver does not overlap
/// invocations.
pub struct App {
    pub session: GameSession,
    pub rng: StdRng,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub document: web::Document,
    pub audio: Option<AudioChain>,
    pub loudness: Option<AnalyserLoudness>,
    pub audio_url: Option<String>,
    pub camera_error: bool,
    pub loading: bool,
}

impl App {
    pub fn new(
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
    ) -> Self {
        Self {
            session: GameSession::new(),
            rng: StdRng::from_entropy(),
            canvas,
            ctx,
            document,
            audio: None,
            loudness: None,
            audio_url: None,
            camera_error: false,
            loading: true,
        }
    }

    /// One coordinator frame. Logic runs first (so a just-hit target is
    /// never drawn and the beat scale is current), then the draw sequence,
    /// then the HUD and any milestone commentary.
    pub fn frame(&mut self, pose: Option<PoseSnapshot>) {
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;

        render::clear(&self.ctx, f64::from(width), f64::from(height));

        let loudness = self
            .loudness
            .as_mut()
            .map(|l| l as &mut dyn LoudnessSource);
        let events = self.session.advance(
            pose,
            width,
            height,
            loudness,
            &mut self.rng,
            Instant::now(),
        );

        if let Some(snapshot) = self.session.pose.as_ref() {
            render::draw_skeleton(&self.ctx, snapshot, width, height, self.session.beat_scale);
        }
        if self.session.playing {
            render::draw_targets(&self.ctx, &self.session.targets);
            render::draw_particles(&self.ctx, &self.session.particles, self.session.beat_scale);
        }

        if !events.hits.is_empty() {
            overlay::set_score(&self.document, self.session.score);
        }
        for score in events.milestones {
            // Clear the stale comment while the new one is in flight; the
            // limiter may still swallow the request.
            overlay::set_comment(&self.document, "");
            genai::request_comment(&self.document, &mut self.session.limiter, score);
        }
    }
}
