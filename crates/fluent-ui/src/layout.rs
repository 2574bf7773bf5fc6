use crate::primitives::Rect;

/// Size specification that can be fixed, relative to the available space, or derived from content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Size {
    /// Fixed size in logical pixels
    Fixed(f32),
    /// Relative size as a fraction of the available space (0.0 to 1.0)
    Relative(f32),
    /// Size to the minimum that fits content (text metrics or children), plus padding.
    FitContent,
}

impl Size {
    /// Create a fixed size in pixels
    pub const fn px(pixels: f32) -> Self {
        Self::Fixed(pixels)
    }

    /// Create a relative size as a fraction (0.0 to 1.0)
    pub const fn fraction(fraction: f32) -> Self {
        Self::Relative(fraction)
    }

    /// Try to resolve the size, returning None for FitContent
    pub fn try_resolve(&self, available: f32) -> Option<f32> {
        match self {
            Size::Fixed(px) => Some(*px),
            Size::Relative(fraction) => Some(available * fraction),
            Size::FitContent => None,
        }
    }

    pub const fn is_fit_content(&self) -> bool {
        matches!(self, Size::FitContent)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::FitContent
    }
}

/// Layout mode for arranging children
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    /// Children are arranged horizontally (left to right)
    Horizontal,
    /// Children are arranged vertically (top to bottom)
    #[default]
    Vertical,
    /// Children are stacked at the same origin (overlapping, later children on top)
    Stack,
}

/// Reading direction, used to resolve `Start`/`End` to physical sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Start = left, End = right
    #[default]
    Ltr,
    /// Start = right, End = left
    Rtl,
}

/// Rendering order for overlapping nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const DEFAULT: Self = Self(0);
    /// Layer used by popups and flyouts, above regular content
    pub const OVERLAY: Self = Self(1000);
}

/// 2D translation offset
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<glam::Vec2> for Translation {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Transform origin for scaling (CSS-like percentage + pixel offset)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOrigin {
    /// X position as percentage of width (0.0 = left, 0.5 = center, 1.0 = right)
    pub x_percent: f32,
    /// Y position as percentage of height (0.0 = top, 0.5 = center, 1.0 = bottom)
    pub y_percent: f32,
}

impl TransformOrigin {
    pub const fn new(x_percent: f32, y_percent: f32) -> Self {
        Self {
            x_percent,
            y_percent,
        }
    }

    pub const fn center() -> Self {
        Self::new(0.5, 0.5)
    }

    pub const fn top_left() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Compute absolute position given rect size
    pub fn resolve(&self, width: f32, height: f32) -> (f32, f32) {
        (self.x_percent * width, self.y_percent * height)
    }
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self::center()
    }
}

/// Post-layout transform: uniform scale about an origin, then translation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub translation: Translation,
    pub scale: f32,
    pub origin: TransformOrigin,
}

impl Transform2D {
    pub const IDENTITY: Self = Self {
        translation: Translation::ZERO,
        scale: 1.0,
        origin: TransformOrigin::center(),
    };

    /// Map a rect through this transform
    pub fn apply_rect(&self, rect: Rect) -> Rect {
        let (ox, oy) = self.origin.resolve(rect.width(), rect.height());
        let origin = [rect.min[0] + ox, rect.min[1] + oy];
        let map = |p: [f32; 2]| {
            [
                origin[0] + (p[0] - origin[0]) * self.scale + self.translation.x,
                origin[1] + (p[1] - origin[1]) * self.scale + self.translation.y,
            ]
        };
        Rect::new(map(rect.min), map(rect.max))
    }

    /// Compose with a child transform (translations accumulate, scales multiply)
    pub fn then(&self, child: &Transform2D) -> Transform2D {
        Transform2D {
            translation: Translation {
                x: self.translation.x + child.translation.x,
                y: self.translation.y + child.translation.y,
            },
            scale: self.scale * child.scale,
            origin: child.origin,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computed layout information after tree traversal
#[derive(Clone, Copy, Debug)]
pub struct ComputedLayout {
    /// Absolute position in screen coordinates (before transforms)
    pub rect: Rect,
}

impl ComputedLayout {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// Spacing/padding around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use fluent_ui::Spacing;
    /// let spacing = Spacing::symmetric(10.0, 20.0);
    /// assert_eq!(spacing.left, 10.0);
    /// assert_eq!(spacing.top, 20.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }

    /// Grow every side by `amount`
    pub fn expand(self, amount: f32) -> Self {
        Self::trbl(
            self.top + amount,
            self.right + amount,
            self.bottom + amount,
            self.left + amount,
        )
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Self::all(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_try_resolve() {
        assert_eq!(Size::px(12.0).try_resolve(100.0), Some(12.0));
        assert_eq!(Size::fraction(0.5).try_resolve(100.0), Some(50.0));
        assert_eq!(Size::FitContent.try_resolve(100.0), None);
    }

    #[test]
    fn test_scale_about_center() {
        let transform = Transform2D {
            scale: 0.5,
            ..Transform2D::IDENTITY
        };
        let rect = transform.apply_rect(Rect::from_xywh(0.0, 0.0, 100.0, 40.0));
        assert_eq!(rect, Rect::from_xywh(25.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_translation_applies_after_scale() {
        let transform = Transform2D {
            translation: Translation::new(0.0, -10.0),
            ..Transform2D::IDENTITY
        };
        let rect = transform.apply_rect(Rect::from_xywh(0.0, 20.0, 10.0, 10.0));
        assert_eq!(rect, Rect::from_xywh(0.0, 10.0, 10.0, 10.0));
    }
}
