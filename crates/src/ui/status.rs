use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Inactive,
    Default,
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// Holds at most one ephemeral message. A new message always replaces the
/// old one and restarts the expiry clock.
#[derive(Clone, Debug)]
pub struct StatusLine {
    message: Option<StatusMessage>,
    timeout: Duration,
    position: (usize, usize),
}

impl StatusLine {
    pub fn new(timeout: Duration) -> Self {
        Self {
            message: None,
            timeout,
            position: (0, 0),
        }
    }

    pub fn set(&mut self, severity: Severity, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if severity == Severity::Inactive || text.is_empty() {
            self.message = None;
            return;
        }
        self.message = Some(StatusMessage {
            text,
            severity,
            created_at: now,
        });
    }

    // expire once the full timeout has elapsed
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|m| now.saturating_duration_since(m.created_at) >= self.timeout);
        if expired {
            self.message = None;
        }
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn severity(&self) -> Severity {
        self.message
            .as_ref()
            .map_or(Severity::Inactive, |m| m.severity)
    }

    pub fn text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }

    pub fn set_position(&mut self, x: usize, y: usize) {
        self.position = (x, y);
    }

    pub fn position(&self) -> (usize, usize) {
        self.position
    }
}
