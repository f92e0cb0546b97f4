//! Long-press-to-copy for the hero email and phone links.
//!
//! Holding a link for [`LONG_PRESS`] (mouse or touch) or right-clicking it
//! copies the value instead of following the link. The browser side arms
//! and stops the timer; [`PressTracker`] decides what each event means.

use std::time::Duration;

use crate::profile::Profile;

pub const LONG_PRESS: Duration = Duration::from_millis(600);

/// How long the "copied" toast stays up.
pub const COPY_TOAST_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Email,
    Phone,
}

impl CopyTarget {
    pub fn value(self, profile: &Profile) -> &'static str {
        match self {
            Self::Email => profile.email,
            Self::Phone => profile.phone,
        }
    }

    pub fn toast(self) -> &'static str {
        match self {
            Self::Email => "Email copied!",
            Self::Phone => "Phone copied!",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Email => "Click to Email / Long-press to Copy",
            Self::Phone => "Tap to Call / Long-press to Copy",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PressTracker {
    held: bool,
    long_pressed: bool,
}

impl PressTracker {
    /// Mouse down or touch start. The caller arms the [`LONG_PRESS`] timer.
    pub fn start(&mut self) {
        self.held = true;
        self.long_pressed = false;
    }

    /// Mouse up, pointer left or touch end. The caller stops the timer.
    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// The long-press timer fired. Returns true when the press is still
    /// held, meaning the value should be copied now.
    pub fn elapse(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.long_pressed = true;
        true
    }

    /// Called for the link's click. Returns true once for the click that
    /// ends a long press; that click must not follow the link.
    pub fn suppress_click(&mut self) -> bool {
        std::mem::take(&mut self.long_pressed)
    }
}
