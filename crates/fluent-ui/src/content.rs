use crate::color::Color;

/// Content that can be displayed in a node
///
/// Content nodes are leaf nodes that cannot have children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Text content with styling
    Text(TextContent),
}

/// Text content configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    /// Font size in logical pixels
    pub font_size: f32,
    /// Text color
    pub color: Color,
    /// Line height as a multiplier of font size
    pub line_height_multiplier: f32,
}

impl TextContent {
    /// Create new text content with the Fluent body font size (14px)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 14.0,
            color: Color::rgb(1.0, 1.0, 1.0),
            line_height_multiplier: 1.4,
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
