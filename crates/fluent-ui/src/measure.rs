//! Intrinsic content measurement for layout resolution.
//!
//! Layout asks a [`ContentMeasurer`] for the size of text so that
//! `Size::FitContent` can resolve to real dimensions. The trait is backend
//! agnostic; a text engine implements it.

use crate::content::TextContent;

/// Request to measure the intrinsic size of a run of text.
#[derive(Debug, Clone)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Maximum width constraint for wrapping (None = no constraint)
    pub max_width: Option<f32>,
    /// Line height as a multiplier of font size
    pub line_height_multiplier: f32,
}

impl<'a> MeasureTextRequest<'a> {
    pub fn from_text_content(content: &'a TextContent) -> Self {
        Self {
            text: &content.text,
            font_size: content.font_size,
            max_width: None,
            line_height_multiplier: content.line_height_multiplier,
        }
    }
}

/// Intrinsic size measurement result.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Unbounded size, used when no viewport constrains measurement
    pub const fn unbounded() -> Self {
        Self {
            width: f32::INFINITY,
            height: f32::INFINITY,
        }
    }

    /// Grow by `amount` on every side
    pub fn expand(self, amount: f32) -> Self {
        Self::new(self.width + amount * 2.0, self.height + amount * 2.0)
    }

    pub fn as_array(self) -> [f32; 2] {
        [self.width, self.height]
    }
}

impl From<IntrinsicSize> for glam::Vec2 {
    fn from(size: IntrinsicSize) -> Self {
        glam::Vec2::new(size.width, size.height)
    }
}

/// Backend-agnostic content measurement.
///
/// Core layout must not depend on a specific text engine, so the text
/// backend implements this trait and is handed to the `UiContext`.
pub trait ContentMeasurer {
    /// Measure the bounding box of the shaped text, excluding padding.
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}

/// Approximate measurer assuming every glyph advances by a fixed fraction of the font size
///
/// Useful for headless layout and tests where no text engine is available.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Glyph advance as a fraction of font size
    pub advance: f32,
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl ContentMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        let glyph = request.font_size * self.advance;
        let line_height = request.font_size * request.line_height_multiplier;

        let longest = request
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f32;
        let line_count = request.text.lines().count().max(1) as f32;

        match request.max_width {
            Some(max) if max > 0.0 && longest * glyph > max => {
                let per_line = (max / glyph).floor().max(1.0);
                let wrapped = (longest / per_line).ceil() * line_count;
                IntrinsicSize::new(per_line * glyph, wrapped * line_height)
            }
            _ => IntrinsicSize::new(longest * glyph, line_count * line_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_advance_single_line() {
        let content = TextContent::new("abcd").with_font_size(10.0);
        let size = FixedAdvanceMeasurer::default()
            .measure_text(MeasureTextRequest::from_text_content(&content));
        assert_eq!(size, IntrinsicSize::new(20.0, 14.0));
    }

    #[test]
    fn test_fixed_advance_wraps() {
        let content = TextContent::new("abcdefgh").with_font_size(10.0);
        let mut request = MeasureTextRequest::from_text_content(&content);
        request.max_width = Some(20.0);
        let size = FixedAdvanceMeasurer::default().measure_text(request);
        assert_eq!(size.width, 20.0);
        assert_eq!(size.height, 2.0 * 14.0);
    }
}
