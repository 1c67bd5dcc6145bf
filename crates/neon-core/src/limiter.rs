//! Rate limiting and request shaping for the commentary service.

use instant::Instant;
use std::time::Duration;
use thiserror::Error;

/// Rolling window length for commentary requests.
pub const WINDOW: Duration = Duration::from_secs(60);
/// Maximum requests allowed inside one window.
pub const MAX_IN_WINDOW: usize = 5;

/// Sentinel shown when the service answers with empty text.
pub const FALLBACK_COMMENT: &str = "Keep it up!";

/// Rolling-window limiter over request timestamps. Denials are silent
/// no-ops apart from the debug log.
#[derive(Debug, Default)]
pub struct CommentaryLimiter {
    sent: Vec<Instant>,
}

impl CommentaryLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prune timestamps that fell out of the window, then decide whether one
    /// more request may go out at `now`. Allowed requests are recorded.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        self.sent.retain(|t| now.duration_since(*t) < WINDOW);
        if self.sent.len() >= MAX_IN_WINDOW {
            log::debug!(
                "commentary suppressed: {} requests in the last minute",
                self.sent.len()
            );
            return false;
        }
        self.sent.push(now);
        true
    }

    /// Requests still inside the window as of the last `try_acquire`.
    pub fn in_window(&self) -> usize {
        self.sent.len()
    }
}

/// Prompt sent to the text-generation service for a score milestone.
pub fn comment_prompt(score: u32) -> String {
    format!(
        "User is playing a motion game. Score: {score}. \
         Give a VERY short (max 6 words), energetic, cyberpunk-style compliment."
    )
}

/// How a failed commentary request affects the display. Configuration
/// problems keep the previous comment on screen; anything else clears it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiFailure {
    /// Bad key, unknown model, malformed request.
    #[error("text service configuration error: {0}")]
    Config(String),
    /// Network failures, server errors, unreadable bodies.
    #[error("text service error: {0}")]
    Service(String),
}

/// Classify a failure by HTTP status and message text.
pub fn classify_failure(status: Option<u16>, message: &str) -> AiFailure {
    let config_status = matches!(status, Some(400) | Some(403) | Some(404));
    let config_message = message.contains("404")
        || message.contains("not found")
        || message.contains("API_KEY")
        || message.contains("API key");
    if config_status || config_message {
        AiFailure::Config(message.to_string())
    } else {
        AiFailure::Service(message.to_string())
    }
}
