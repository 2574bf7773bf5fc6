//! Mount/unmount lifecycle of a flyout
//!
//! A flyout stays mounted while it animates out, so "visible" (the caller's
//! wish) and "mounted" (whether the subtree exists) are tracked separately.
//! Reversing mid-animation retargets the running values instead of jumping.

use fluent_ui::{AnimatedValue, Transition};

use crate::animation::{select_exit, FLYOUT_DURATION};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityState {
    /// Not mounted
    #[default]
    Absent,
    Entering,
    Visible,
    /// Still mounted until the exit finishes
    Exiting,
}

/// Visibility state plus the animated values of the current transition
///
/// `alpha` drives the fade, `motion` the placement-dependent scale or
/// slide; both run from 0 to 1 while entering.
#[derive(Debug, Clone, Copy)]
pub struct FlyoutVisibility {
    state: VisibilityState,
    target: bool,
    alpha: AnimatedValue,
    motion: AnimatedValue,
    enter: Transition,
    exit: Transition,
}

impl FlyoutVisibility {
    pub fn new() -> Self {
        Self::with_transitions(
            Transition::new(FLYOUT_DURATION, fluent_ui::fast_invoke),
            select_exit().transition,
        )
    }

    pub fn with_transitions(enter: Transition, exit: Transition) -> Self {
        Self {
            state: VisibilityState::Absent,
            target: false,
            alpha: AnimatedValue::new(0.0),
            motion: AnimatedValue::new(0.0),
            enter,
            exit,
        }
    }

    /// Apply the caller's visibility wish, returning the new state if it changed
    pub fn set_target(&mut self, visible: bool) -> Option<VisibilityState> {
        if visible == self.target {
            return None;
        }
        self.target = visible;

        let previous = self.state;
        self.state = match (previous, visible) {
            (VisibilityState::Absent, true) => {
                self.alpha.snap_to(0.0);
                self.motion.snap_to(0.0);
                self.alpha.retarget(1.0, self.enter);
                self.motion.retarget(1.0, self.enter);
                VisibilityState::Entering
            }
            (VisibilityState::Exiting, true) => {
                self.alpha.retarget_proportional(1.0, self.enter, 1.0);
                VisibilityState::Entering
            }
            (VisibilityState::Entering | VisibilityState::Visible, false) => {
                self.alpha.retarget_proportional(0.0, self.exit, 1.0);
                self.motion.retarget_proportional(1.0, self.exit, 1.0);
                VisibilityState::Exiting
            }
            (state, _) => state,
        };

        (self.state != previous).then_some(self.state)
    }

    /// Advance the running transition by `dt` seconds
    ///
    /// Returns the new state when a transition completed.
    pub fn tick(&mut self, dt: f32) -> Option<VisibilityState> {
        self.alpha.tick(dt);
        self.motion.tick(dt);

        let previous = self.state;
        self.state = match previous {
            VisibilityState::Entering if self.alpha.is_finished() && self.motion.is_finished() => {
                VisibilityState::Visible
            }
            VisibilityState::Exiting if self.alpha.is_finished() => VisibilityState::Absent,
            state => state,
        };

        (self.state != previous).then_some(self.state)
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// The last value passed to [`set_target`](Self::set_target)
    pub fn target(&self) -> bool {
        self.target
    }

    /// Whether the flyout subtree must exist this frame
    pub fn is_mounted(&self) -> bool {
        self.state != VisibilityState::Absent
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            VisibilityState::Entering | VisibilityState::Exiting
        )
    }

    /// Current fade value (0 = transparent)
    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    /// Current enter-motion progress (1 = at rest)
    pub fn motion(&self) -> f32 {
        self.motion.value()
    }
}

impl Default for FlyoutVisibility {
    fn default() -> Self {
        Self::new()
    }
}
