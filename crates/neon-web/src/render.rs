//! Canvas 2D drawing for the skeleton overlay and the game elements.

use crate::constants::{
    GRADIENT_END, GRADIENT_START, JOINT_FILL, JOINT_RING_GLOW_BLUR, JOINT_RING_RADIUS,
    PARTICLE_RADIUS, SKELETON_GLOW_BLUR, SKELETON_LINE_WIDTH,
};
use neon_core::particles::ParticleSystem;
use neon_core::pose::{PoseSnapshot, ACTIVE_JOINTS, POSE_CONNECTIONS};
use neon_core::target::Target;
use std::f64::consts::TAU;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Neon skeleton: a cyan-to-magenta gradient stroke per bone, plus glowing
/// rings on the joints that can collect targets. Stroke width, glow radius,
/// and ring size all pulse with the beat scale.
pub fn draw_skeleton(
    ctx: &web::CanvasRenderingContext2d,
    pose: &PoseSnapshot,
    width: f32,
    height: f32,
    beat_scale: f32,
) {
    let beat = beat_scale as f64;
    ctx.set_line_width(SKELETON_LINE_WIDTH * beat);
    ctx.set_line_cap("round");
    ctx.set_shadow_color(GRADIENT_START);
    ctx.set_shadow_blur(SKELETON_GLOW_BLUR * beat);

    for &(a, b) in POSE_CONNECTIONS.iter() {
        let (p1, p2) = match (pose.joint(a), pose.joint(b)) {
            (Some(p1), Some(p2)) => (p1, p2),
            _ => continue,
        };
        let c1 = p1.to_canvas(width, height);
        let c2 = p2.to_canvas(width, height);

        let gradient =
            ctx.create_linear_gradient(c1.x as f64, c1.y as f64, c2.x as f64, c2.y as f64);
        _ = gradient.add_color_stop(0.0, GRADIENT_START);
        _ = gradient.add_color_stop(1.0, GRADIENT_END);
        ctx.set_stroke_style_canvas_gradient(&gradient);

        ctx.begin_path();
        ctx.move_to(c1.x as f64, c1.y as f64);
        ctx.line_to(c2.x as f64, c2.y as f64);
        ctx.stroke();
    }

    ctx.set_fill_style_str(JOINT_FILL);
    ctx.set_shadow_color(GRADIENT_START);
    ctx.set_shadow_blur(JOINT_RING_GLOW_BLUR * beat);
    for &index in ACTIVE_JOINTS.iter() {
        if let Some(joint) = pose.joint(index) {
            let c = joint.to_canvas(width, height);
            ctx.begin_path();
            _ = ctx.arc(c.x as f64, c.y as f64, JOINT_RING_RADIUS * beat, 0.0, TAU);
            ctx.fill();
        }
    }
}

/// Glyph targets, drawn shadow-free so they read as collectibles rather
/// than part of the glow layer.
pub fn draw_targets(ctx: &web::CanvasRenderingContext2d, targets: &[Target]) {
    ctx.set_shadow_blur(0.0);
    let mut glyph_buf = [0u8; 4];
    for target in targets {
        ctx.set_font(&format!("{:.0}px serif", target.size));
        _ = ctx.fill_text(
            target.glyph.encode_utf8(&mut glyph_buf),
            f64::from(target.pos.x - target.size / 2.0),
            f64::from(target.pos.y + target.size / 2.0),
        );
    }
}

/// Burst particles fade out with their remaining life and swell with the
/// beat.
pub fn draw_particles(
    ctx: &web::CanvasRenderingContext2d,
    particles: &ParticleSystem,
    beat_scale: f32,
) {
    for p in particles.iter() {
        ctx.set_global_alpha(f64::from(p.life));
        ctx.set_fill_style_str(p.color);
        ctx.begin_path();
        _ = ctx.arc(
            f64::from(p.pos.x),
            f64::from(p.pos.y),
            PARTICLE_RADIUS * beat_scale as f64,
            0.0,
            TAU,
        );
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
