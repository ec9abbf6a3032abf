use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);
/// Tail of the TTL during which the notice draws dimmed.
pub const NOTICE_FADE: Duration = Duration::from_millis(500);

/// Notice severity, which picks the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

impl Notice {
    fn new(message: String, kind: NoticeKind, now: Instant) -> Self {
        Self {
            message,
            kind,
            shown_at: now,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTICE_TTL
    }

    /// True inside the fade tail, when the notice draws dimmed.
    pub fn fading(&self, now: Instant) -> bool {
        let age = now.duration_since(self.shown_at);
        age < NOTICE_TTL && age >= NOTICE_TTL - NOTICE_FADE
    }
}

/// Single-slot notification state: a new notice replaces the visible one,
/// so at most one exists at any time. The clock is passed in rather than
/// read, which keeps expiry testable without sleeping.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notice>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NoticeKind::Success, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, NoticeKind::Error, now);
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.current = Some(Notice::new(message.into(), kind, now));
    }

    /// Drops the notice once its time is up. Called on every tick.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|notice| notice.expired(now)) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
