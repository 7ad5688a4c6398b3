//! Layout transition state machine.
//!
//! The controller is either `Idle` or `Animating` between two layout modes.
//! Time is injected (`now` in seconds, e.g. egui's `InputState::time`) so
//! tests can drive ticks with a fake clock. The logical mode switches at
//! request time; this controller only drives the visual catch-up.

use std::f64::consts::PI;

use crate::data::point::LayoutMode;

/// Wall-clock duration of one layout transition, in seconds.
pub const TRANSITION_SECS: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Idle,
    Animating {
        source: LayoutMode,
        target: LayoutMode,
        start: f64,
    },
}

/// Drives the eased blend progress consumed by renderer and hit tester.
#[derive(Debug)]
pub struct TransitionController {
    state: TransitionState,
    progress: f64,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self {
            state: TransitionState::Idle,
            progress: 1.0,
        }
    }
}

impl TransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a transition from `current` to `target` starting at `now`.
    ///
    /// Returns `false` (and changes nothing) when `target` is already the
    /// current mode. When called while already animating, `current` is the
    /// logical mode the caller has on record, which may itself not be
    /// visually settled yet; the new transition starts from that mode's
    /// projection rather than the interpolated position.
    pub fn request(&mut self, current: LayoutMode, target: LayoutMode, now: f64) -> bool {
        if target == current {
            return false;
        }
        self.state = TransitionState::Animating {
            source: current,
            target,
            start: now,
        };
        self.progress = 0.0;
        true
    }

    /// Advance the animation and return the eased progress in `[0, 1]`.
    ///
    /// Progress snaps to exactly 1 when the duration has elapsed, and the
    /// controller returns to `Idle`. Idle ticks keep returning 1.
    pub fn tick(&mut self, now: f64) -> f64 {
        if let TransitionState::Animating { start, .. } = self.state {
            let linear = ((now - start) / TRANSITION_SECS).clamp(0.0, 1.0);
            if linear >= 1.0 {
                self.progress = 1.0;
                self.state = TransitionState::Idle;
            } else {
                // Raised-cosine ease: smooth start and end, monotonic.
                self.progress = 0.5 - 0.5 * (PI * linear).cos();
            }
        }
        self.progress
    }

    /// Abort any in-flight animation (dataset replaced, view torn down).
    pub fn cancel(&mut self) {
        self.state = TransitionState::Idle;
        self.progress = 1.0;
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, TransitionState::Animating { .. })
    }

    /// The last progress computed by [`tick`](Self::tick). Renderer and hit
    /// tester must both read this rather than resampling the clock.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Source and target modes while animating, `None` when idle.
    pub fn blend_modes(&self) -> Option<(LayoutMode, LayoutMode)> {
        match self.state {
            TransitionState::Animating { source, target, .. } => Some((source, target)),
            TransitionState::Idle => None,
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }
}
