use rand::Rng;
use std::time::Duration;

/// Inclusive window the simulated "thinking" delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min_ms: u64,
    max_ms: u64,
}

impl DelayWindow {
    /// Builds a window; bounds given in the wrong order are swapped.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self { min_ms: max_ms, max_ms: min_ms }
        }
    }

    pub fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Draws a delay uniformly from the window.
    pub fn sample(&self) -> Duration {
        let ms = rand::thread_rng().gen_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

/// Delays used by a chat session for its canned replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTiming {
    pub text_reply: DelayWindow,
    pub file_ack: Duration,
    pub location_reply: Duration,
}

impl Default for ReplyTiming {
    fn default() -> Self {
        Self {
            text_reply: DelayWindow::new(1_000, 2_000),
            file_ack: Duration::from_millis(1_500),
            location_reply: Duration::from_millis(1_000),
        }
    }
}
