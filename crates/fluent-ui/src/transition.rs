use crate::color::Color;

/// Easing function type: takes progress (0.0 to 1.0) and returns eased value (0.0 to 1.0)
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (no easing)
pub fn linear(t: f32) -> f32 {
    t
}

/// Ease out (quadratic) - fast start, decelerating
pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Ease in-out (quadratic) - slow start and end, fast middle
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Evaluate a CSS-style `cubic-bezier(x1, y1, x2, y2)` curve at progress `t`
///
/// Solves the curve's x polynomial for `t` (Newton steps with a bisection
/// fallback) and returns the matching y.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let bezier = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let bezier_slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    let mut s = t;
    for _ in 0..8 {
        let x = bezier(x1, x2, s) - t;
        if x.abs() < 1e-6 {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= x / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = bezier(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier(y1, y2, s)
}

/// Fluent "fast invoke" curve, `cubic-bezier(0, 0, 0, 1)`: quick start, long settle
pub fn fast_invoke(t: f32) -> f32 {
    cubic_bezier(0.0, 0.0, 0.0, 1.0, t)
}

/// Fluent "fast dismiss" curve, `cubic-bezier(1, 0, 1, 1)`: slow start, quick finish
pub fn fast_dismiss(t: f32) -> f32 {
    cubic_bezier(1.0, 0.0, 1.0, 1.0, t)
}

/// Linearly interpolate between two f32 values
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two colors
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: lerp_f32(a.r, b.r, t),
        g: lerp_f32(a.g, b.g, t),
        b: lerp_f32(a.b, b.b, t),
        a: lerp_f32(a.a, b.a, t),
    }
}

/// Fluent motion durations, in seconds
pub struct FluentDuration;

impl FluentDuration {
    pub const QUICK: f32 = 0.083;
    pub const SHORT: f32 = 0.167;
    pub const MEDIUM: f32 = 0.250;
    pub const LONG: f32 = 0.333;
}

/// Transition configuration
///
/// Defines how long a transition takes and what easing function to use.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// Duration in seconds
    pub duration: f32,

    /// Easing function to apply
    pub easing: EasingFn,
}

impl Transition {
    /// Create a new transition with custom duration and easing
    pub fn new(duration: f32, easing: EasingFn) -> Self {
        Self { duration, easing }
    }

    /// Instant transition (no animation, duration = 0)
    pub fn instant() -> Self {
        Self {
            duration: 0.0,
            easing: linear,
        }
    }

    /// Quick transition (150ms, ease-out)
    pub fn quick() -> Self {
        Self {
            duration: 0.15,
            easing: ease_out,
        }
    }

    /// Standard transition (250ms, ease-in-out)
    pub fn standard() -> Self {
        Self {
            duration: 0.25,
            easing: ease_in_out,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single animated scalar that can be retargeted mid-flight
///
/// Retargeting restarts the interpolation from the value currently shown, so a
/// reversed animation never jumps.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedValue {
    from: f32,
    to: f32,
    elapsed: f32,
    transition: Transition,
}

impl AnimatedValue {
    /// A settled value
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            transition: Transition::instant(),
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = (self.elapsed / self.transition.duration).clamp(0.0, 1.0);
        lerp_f32(self.from, self.to, (self.transition.easing)(t))
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.transition.duration
    }

    /// Animate towards `target`, starting from the current value
    ///
    /// Retargeting to the value already being animated towards keeps the
    /// running animation untouched.
    pub fn retarget(&mut self, target: f32, transition: Transition) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
        self.transition = transition;
    }

    /// Like [`retarget`](Self::retarget), but shortens the duration to the
    /// share of `full_distance` that is still left to travel
    pub fn retarget_proportional(&mut self, target: f32, transition: Transition, full_distance: f32) {
        if target == self.to {
            return;
        }
        let remaining = if full_distance > 0.0 {
            ((target - self.value()).abs() / full_distance).min(1.0)
        } else {
            1.0
        };
        self.retarget(
            target,
            Transition {
                duration: transition.duration * remaining,
                ..transition
            },
        );
    }

    /// Jump to `value` without animating
    pub fn snap_to(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !self.is_finished() {
            self.elapsed += dt.max(0.0);
        }
    }
}
