// SPDX-License-Identifier: MPL-2.0
//! Image preview overlay state machine.
//!
//! ```text
//! Closed --open(img)--> Opening(img) --open tick--> Open(img)
//! Open(img) --close()--> Closing(img) --close tick--> Closed
//! ```
//!
//! The two timed transitions exist so that the overlay is first drawn in its
//! faded-out frame and only then in its visible frame. Each scheduled
//! transition is identified by a [`Ticket`]; only the most recent ticket can
//! advance the machine, so a timer that fires after the user re-triggered
//! open/close is ignored.

use std::time::Duration;

/// Identifies one scheduled transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Which timed transition a ticket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// `Opening` → `Open`.
    OpenKickoff,
    /// `Closing` → `Closed`.
    CloseTeardown,
}

/// A transition the caller must schedule after `delay`, then report back
/// through [`ModalViewer::on_timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub ticket: Ticket,
    pub kind: TimerKind,
    pub delay: Duration,
}

/// Phase of the overlay. The image reference lives only while not `Closed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening(String),
    Open(String),
    Closing(String),
}

/// Delays of the two timed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTimings {
    pub open_delay: Duration,
    pub close_delay: Duration,
}

impl Default for ModalTimings {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(10),
            close_delay: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalViewer {
    phase: ModalPhase,
    timings: ModalTimings,
    next_ticket: u64,
    pending: Option<Ticket>,
}

impl ModalViewer {
    #[must_use]
    pub fn new(timings: ModalTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    #[must_use]
    pub fn timings(&self) -> ModalTimings {
        self.timings
    }

    /// Returns `true` while the overlay must be rendered (any phase but `Closed`).
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, ModalPhase::Closed)
    }

    /// Returns `true` only in the fully shown frame.
    ///
    /// Renderers use this to pick between the faded-out and the visible style.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.phase, ModalPhase::Open(_))
    }

    /// Image currently held by the overlay.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        match &self.phase {
            ModalPhase::Closed => None,
            ModalPhase::Opening(image) | ModalPhase::Open(image) | ModalPhase::Closing(image) => {
                Some(image)
            }
        }
    }

    /// Ticket of the transition currently waiting for its timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Starts showing `image`.
    ///
    /// Opening the image already opening or open is a no-op. Any other image,
    /// or a request during `Closing`, restarts the opening sequence and
    /// supersedes the pending timer.
    pub fn open(&mut self, image: impl Into<String>) -> Option<ScheduledTransition> {
        let image = image.into();
        let already_showing = matches!(
            &self.phase,
            ModalPhase::Opening(current) | ModalPhase::Open(current) if *current == image
        );
        if already_showing {
            return None;
        }

        self.phase = ModalPhase::Opening(image);
        let delay = self.timings.open_delay;
        Some(self.schedule(TimerKind::OpenKickoff, delay))
    }

    /// Starts hiding the overlay. No-op when already closed or closing.
    pub fn close(&mut self) -> Option<ScheduledTransition> {
        match std::mem::take(&mut self.phase) {
            ModalPhase::Opening(image) | ModalPhase::Open(image) => {
                self.phase = ModalPhase::Closing(image);
                let delay = self.timings.close_delay;
                Some(self.schedule(TimerKind::CloseTeardown, delay))
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Reports that the timer for `ticket` elapsed.
    ///
    /// Returns `false` and leaves the state untouched when the ticket was
    /// superseded.
    pub fn on_timer(&mut self, ticket: Ticket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;

        self.phase = match std::mem::take(&mut self.phase) {
            ModalPhase::Opening(image) => ModalPhase::Open(image),
            ModalPhase::Closing(_) => ModalPhase::Closed,
            other => other,
        };
        true
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration) -> ScheduledTransition {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = Ticket(self.next_ticket);
        self.pending = Some(ticket);
        ScheduledTransition {
            ticket,
            kind,
            delay,
        }
    }
}
