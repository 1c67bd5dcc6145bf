//! DOM ids, capture configuration, and overlay styling values.
//!
//! The capture and tracker options are fixed at initialization and exported
//! to the JS driver through the getters in `lib.rs`.

// Element ids the front-end binds.
pub const CANVAS_ID: &str = "game-canvas";
pub const SCORE_ID: &str = "score-value";
pub const COMMENT_ID: &str = "ai-comment";
pub const PLAY_BUTTON_ID: &str = "play-toggle";
pub const AUDIO_INPUT_ID: &str = "audio-upload";
pub const AUDIO_LABEL_ID: &str = "audio-label";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const ERROR_BANNER_ID: &str = "error-banner";

// Camera capture resolution requested from the driver.
pub const CAPTURE_WIDTH: u32 = 1280;
pub const CAPTURE_HEIGHT: u32 = 720;

// Tracker options.
pub const MODEL_COMPLEXITY: u32 = 1;
pub const MIN_DETECTION_CONFIDENCE: f64 = 0.5;
pub const MIN_TRACKING_CONFIDENCE: f64 = 0.5;

// Analyser resolution; half of this many frequency bins per sample.
pub const ANALYSER_FFT_SIZE: u32 = 256;

// Overlay styling. Blur radii and stroke widths scale with the beat.
pub const SKELETON_LINE_WIDTH: f64 = 4.0;
pub const SKELETON_GLOW_BLUR: f64 = 15.0;
pub const JOINT_RING_RADIUS: f64 = 8.0;
pub const JOINT_RING_GLOW_BLUR: f64 = 20.0;
pub const PARTICLE_RADIUS: f64 = 5.0;
pub const GRADIENT_START: &str = "#00f2ff";
pub const GRADIENT_END: &str = "#ff00ff";
pub const JOINT_FILL: &str = "#ffffff";

// Control labels.
pub const LABEL_PLAY: &str = "INITIATE LINK";
pub const LABEL_PAUSE: &str = "PAUSE SIMULATION";
pub const LABEL_AUDIO_LOADED: &str = "Audio track loaded";
pub const CAMERA_ERROR_MESSAGE: &str = "Camera failed to start. Check permissions.";
