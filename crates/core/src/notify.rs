//! Transient user feedback.
//!
//! At most one notice is visible at a time. Each `show` bumps a generation
//! counter; an auto-dismiss timer remembers the generation it was scheduled
//! for and calls [`Notifier::dismiss_if_current`], so a timer that was
//! superseded by a newer notice becomes a no-op instead of hiding it early.

/// How long the view keeps a notice on screen before auto-dismissing it.
pub const AUTO_DISMISS_MS: i32 = 3000;

/// Message shown after a record is created.
pub const MSG_ADDED: &str = "Product added";

/// Message shown after a record is updated.
pub const MSG_UPDATED: &str = "Product updated";

/// Message shown after a record is deleted.
pub const MSG_DELETED: &str = "Product deleted";

/// Aggregate message shown when a submitted draft fails validation.
pub const MSG_CHECK_INPUT: &str = "Check your input again";

/// Visual severity of a notice. Presentation only; no functional effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A completed operation.
    Success,

    /// A failed validation.
    Danger,
}

/// A transient message shown in the toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text shown to the user.
    pub message: String,

    /// Color of the toast.
    pub severity: Severity,
}

/// Holder of the current notice and its generation.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notice>,
    generation: u64,
}

impl Notifier {
    /// Show a notice, replacing whatever was visible. Returns the generation
    /// the caller should hand back to [`Self::dismiss_if_current`] when its
    /// auto-dismiss timer fires.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation = self.generation.saturating_add(1);
        self.current = Some(Notice {
            message: message.into(),
            severity,
        });

        self.generation
    }

    /// The visible notice, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Generation of the most recently shown notice.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Hide the notice unconditionally (explicit user dismissal).
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Hide the notice only when no newer one has been shown since
    /// `generation`. Returns whether anything was hidden.
    pub fn dismiss_if_current(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.current.is_some() {
            self.current = None;
            return true;
        }

        false
    }
}
