// Collision detector: mirrored-coordinate mapping and hit semantics.

use glam::Vec2;
use neon_core::{collision, Joint, PoseSnapshot, Target, LANDMARK_COUNT, LEFT_INDEX, NOSE};

const WIDTH: f32 = 1000.0;
const HEIGHT: f32 = 720.0;

fn pose_with_joint(index: usize, x: f32, y: f32) -> PoseSnapshot {
    let mut joints = [Joint::default(); LANDMARK_COUNT];
    joints[index] = Joint { x, y, z: 0.0 };
    PoseSnapshot::from_joints(joints)
}

fn target_at(id: u64, x: f32, y: f32, size: f32) -> Target {
    Target {
        id,
        pos: Vec2::new(x, y),
        glyph: '💎',
        size,
    }
}

#[test]
fn mirrored_coordinate_maps_x03_to_700() {
    let joint = Joint {
        x: 0.3,
        y: 0.5,
        z: 0.0,
    };
    let px = joint.to_canvas(WIDTH, HEIGHT);
    assert!((px.x - 700.0).abs() < 1e-3);
    assert!((px.y - 360.0).abs() < 1e-3);
}

#[test]
fn joint_at_x03_hits_target_at_700() {
    let pose = pose_with_joint(NOSE, 0.3, 0.5);
    let mut targets = vec![target_at(1, 700.0, 360.0, 50.0)];
    let hits = collision::detect(Some(&pose), WIDTH, HEIGHT, &mut targets);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].target_id, 1);
    assert!(targets.is_empty(), "hit target must be removed in-pass");
}

#[test]
fn hit_threshold_is_strictly_inside_size() {
    let pose = pose_with_joint(NOSE, 0.3, 0.5);
    // Exactly `size` away: no hit.
    let mut at_edge = vec![target_at(1, 750.0, 360.0, 50.0)];
    assert!(collision::detect(Some(&pose), WIDTH, HEIGHT, &mut at_edge).is_empty());
    assert_eq!(at_edge.len(), 1);
    // A hair inside: hit.
    let mut inside = vec![target_at(2, 749.0, 360.0, 50.0)];
    assert_eq!(collision::detect(Some(&pose), WIDTH, HEIGHT, &mut inside).len(), 1);
}

#[test]
fn absent_pose_evaluates_nothing() {
    let mut targets = vec![
        target_at(1, 700.0, 360.0, 50.0),
        target_at(2, 100.0, 100.0, 60.0),
    ];
    let hits = collision::detect(None, WIDTH, HEIGHT, &mut targets);
    assert!(hits.is_empty());
    assert_eq!(targets.len(), 2);
}

#[test]
fn simultaneous_hits_are_independent() {
    // Two targets inside the nose radius, one inside a fingertip radius.
    let mut joints = [Joint::default(); LANDMARK_COUNT];
    joints[NOSE] = Joint {
        x: 0.3,
        y: 0.5,
        z: 0.0,
    };
    joints[LEFT_INDEX] = Joint {
        x: 0.8,
        y: 0.25,
        z: 0.0,
    };
    let pose = PoseSnapshot::from_joints(joints);

    let mut targets = vec![
        target_at(1, 700.0, 360.0, 50.0),
        target_at(2, 690.0, 350.0, 50.0),
        target_at(3, 200.0, 180.0, 45.0),
        target_at(4, 450.0, 600.0, 40.0),
    ];
    let hits = collision::detect(Some(&pose), WIDTH, HEIGHT, &mut targets);
    assert_eq!(hits.len(), 3);
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].id, 4, "missed target survives unchanged");
}

#[test]
fn inactive_joints_do_not_collect() {
    // Index 12 (a shoulder) is not in the active set.
    let pose = pose_with_joint(12, 0.3, 0.5);
    let mut targets = vec![target_at(1, 700.0, 360.0, 50.0)];
    let hits = collision::detect(Some(&pose), WIDTH, HEIGHT, &mut targets);
    assert!(hits.is_empty());
    assert_eq!(targets.len(), 1);
}
