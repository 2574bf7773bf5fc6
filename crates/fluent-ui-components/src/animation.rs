//! Enter and exit transitions for flyouts
//!
//! Entering always fades in together with one motion chosen from the
//! effective placement: a scale-up for centred flyouts, otherwise a slide
//! from the side the flyout opens towards. Exiting only fades out.

use fluent_ui::{fast_dismiss, fast_invoke, lerp_f32, FluentDuration, LayoutDirection, Transition};
use glam::Vec2;

use crate::placement::FlyoutPlacement;

/// Duration of flyout enter and exit transitions, in seconds
pub const FLYOUT_DURATION: f32 = FluentDuration::SHORT;

/// The motion played while a flyout enters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnterMotion {
    /// Grow from `initial_scale` about the content centre
    Scale { initial_scale: f32 },
    /// Slide in from an offset expressed in content sizes
    Slide { initial_offset: Vec2 },
}

#[derive(Debug, Clone, Copy)]
pub struct EnterTransition {
    pub motion: EnterMotion,
    /// Timing shared by the fade and the motion
    pub transition: Transition,
}

#[derive(Debug, Clone, Copy)]
pub struct ExitTransition {
    pub transition: Transition,
}

/// Visual state of a flyout at one point of its transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedFrame {
    pub opacity: f32,
    pub scale: f32,
    pub translation: Vec2,
}

impl AnimatedFrame {
    /// The settled, fully visible frame
    pub const REST: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

impl EnterTransition {
    /// Frame at eased `progress` (0 = start of the enter, 1 = rest)
    pub fn frame(&self, progress: f32, content_size: Vec2) -> AnimatedFrame {
        let progress = progress.clamp(0.0, 1.0);
        match self.motion {
            EnterMotion::Scale { initial_scale } => AnimatedFrame {
                opacity: progress,
                scale: lerp_f32(initial_scale, 1.0, progress),
                translation: Vec2::ZERO,
            },
            EnterMotion::Slide { initial_offset } => AnimatedFrame {
                opacity: progress,
                scale: 1.0,
                translation: initial_offset * content_size * (1.0 - progress),
            },
        }
    }
}

/// Pick the enter transition for the placement a flyout ended up with
pub fn select_enter(placement: FlyoutPlacement, direction: LayoutDirection) -> EnterTransition {
    use FlyoutPlacement::*;

    // Start/End offsets point towards the side the flyout opens on
    let towards_start = match direction {
        LayoutDirection::Ltr => -1.0,
        LayoutDirection::Rtl => 1.0,
    };

    let motion = match placement {
        Auto | Full => EnterMotion::Scale { initial_scale: 0.0 },
        Top | TopAlignedStart | TopAlignedEnd => EnterMotion::Slide {
            initial_offset: Vec2::new(0.0, -0.5),
        },
        Bottom | BottomAlignedStart | BottomAlignedEnd => EnterMotion::Slide {
            initial_offset: Vec2::new(0.0, 1.0),
        },
        Start | StartAlignedTop | StartAlignedBottom => EnterMotion::Slide {
            initial_offset: Vec2::new(0.5 * towards_start, 0.0),
        },
        End | EndAlignedTop | EndAlignedBottom => EnterMotion::Slide {
            initial_offset: Vec2::new(-towards_start, 0.0),
        },
    };

    EnterTransition {
        motion,
        transition: Transition::new(FLYOUT_DURATION, fast_invoke),
    }
}

pub fn select_exit() -> ExitTransition {
    ExitTransition {
        transition: Transition::new(FLYOUT_DURATION, fast_dismiss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(80.0, 40.0);

    #[test]
    fn test_every_enter_fades_and_settles() {
        for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            for placement in FlyoutPlacement::ALL {
                let enter = select_enter(placement, direction);
                assert_eq!(enter.frame(0.0, SIZE).opacity, 0.0);
                assert_eq!(enter.frame(1.0, SIZE), AnimatedFrame::REST);
                assert_eq!(enter.transition.duration, FLYOUT_DURATION);
            }
        }
    }

    #[test]
    fn test_centred_placements_scale_in() {
        for placement in [FlyoutPlacement::Auto, FlyoutPlacement::Full] {
            let start = select_enter(placement, LayoutDirection::Ltr).frame(0.0, SIZE);
            assert_eq!(start.scale, 0.0);
            assert_eq!(start.translation, Vec2::ZERO);
        }
    }

    #[test]
    fn test_slide_offsets() {
        let start = |p| select_enter(p, LayoutDirection::Ltr).frame(0.0, SIZE).translation;

        assert_eq!(start(FlyoutPlacement::Top), Vec2::new(0.0, -20.0));
        assert_eq!(start(FlyoutPlacement::BottomAlignedEnd), Vec2::new(0.0, 40.0));
        assert_eq!(start(FlyoutPlacement::StartAlignedTop), Vec2::new(-40.0, 0.0));
        assert_eq!(start(FlyoutPlacement::End), Vec2::new(80.0, 0.0));
    }

    #[test]
    fn test_horizontal_slides_mirror_in_rtl() {
        let start = |p| select_enter(p, LayoutDirection::Rtl).frame(0.0, SIZE).translation;

        assert_eq!(start(FlyoutPlacement::Start), Vec2::new(40.0, 0.0));
        assert_eq!(start(FlyoutPlacement::End), Vec2::new(-80.0, 0.0));
        assert_eq!(start(FlyoutPlacement::Top), Vec2::new(0.0, -20.0));
    }

    #[test]
    fn test_exit_uses_dismiss_curve() {
        let exit = select_exit();
        assert_eq!(exit.transition.duration, FLYOUT_DURATION);
        let enter = select_enter(FlyoutPlacement::Top, LayoutDirection::Ltr);
        assert!((exit.transition.easing)(0.3) < (enter.transition.easing)(0.3));
    }
}
