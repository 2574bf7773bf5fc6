//! Bordered, elevated surface that hosts flyout content

use fluent_ui::{
    Color, Component, CornerShape, ElevationDefaults, FluentTheme, Node, Rect, Shape, Spacing,
    Stroke, StyledRect, UiContext,
};
use fluent_ui_macros::WithBuilders;

/// Which edge of the border the background fill extends to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundSizing {
    /// Fill stops inside the border
    #[default]
    InnerBorderEdge,
    /// Fill runs underneath the border
    OuterBorderEdge,
}

#[derive(Debug, Clone, WithBuilders)]
pub struct LayerStyle {
    pub corner_shape: CornerShape,
    pub border: Stroke,
    /// Shadow depth in logical pixels
    pub elevation: f32,
    pub fill: Color,
    pub background_sizing: BackgroundSizing,
    /// Space between the border and the content
    #[with_builders(into)]
    pub padding: Spacing,
}

impl LayerStyle {
    /// Flyout surface for `theme`
    ///
    /// With acrylic popups the fill stays transparent so the material
    /// placeholder underneath shows through.
    pub fn flyout(theme: &FluentTheme) -> Self {
        Self {
            corner_shape: theme.shapes.overlay,
            border: Stroke::new(1.0, theme.colors.stroke_flyout),
            elevation: ElevationDefaults::FLYOUT,
            fill: if theme.use_acrylic_popup {
                Color::transparent()
            } else {
                theme.colors.acrylic_default
            },
            background_sizing: BackgroundSizing::InnerBorderEdge,
            padding: Spacing::zero(),
        }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::flyout(&FluentTheme::default())
    }
}

/// A surface with border, corner shape, shadow and fill around its content
pub struct Layer {
    style: LayerStyle,
    content: Node,
}

impl Layer {
    pub fn new(content: Node) -> Self {
        Self {
            style: LayerStyle::default(),
            content,
        }
    }

    pub fn with_style(mut self, style: LayerStyle) -> Self {
        self.style = style;
        self
    }
}

impl Component for Layer {
    fn node(self, _ctx: &mut UiContext) -> Node {
        let style = self.style;
        let fill_inset = match style.background_sizing {
            BackgroundSizing::InnerBorderEdge => style.border.width,
            BackgroundSizing::OuterBorderEdge => 0.0,
        };

        let surface = StyledRect::new(Rect::default(), style.fill)
            .with_corner_shape(style.corner_shape)
            .with_stroke(style.border)
            .with_elevation(style.elevation)
            .with_fill_inset(fill_inset);

        Node::new()
            .with_padding(style.padding.expand(style.border.width))
            .with_shape(Shape::Rect(surface))
            .with_child(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_ui::{FixedAdvanceMeasurer, IntrinsicSize, ThemeSettings};

    #[test]
    fn test_fill_follows_acrylic_setting() {
        let acrylic = FluentTheme::new(ThemeSettings {
            acrylic_popup_enabled: true,
            ..Default::default()
        });
        assert!(LayerStyle::flyout(&acrylic).fill.is_transparent());

        let solid = FluentTheme::new(ThemeSettings {
            acrylic_popup_enabled: false,
            ..Default::default()
        });
        assert_eq!(LayerStyle::flyout(&solid).fill, solid.colors.acrylic_default);
    }

    #[test]
    fn test_border_and_padding_grow_the_layer() {
        let mut ctx = UiContext::new();
        let node = Layer::new(Node::new().with_size(50.0, 20.0))
            .with_style(LayerStyle::default().with_padding(12.0))
            .node(&mut ctx);

        let size = node.measure(
            &mut FixedAdvanceMeasurer::default(),
            IntrinsicSize::new(800.0, 600.0),
        );
        assert_eq!(size, IntrinsicSize::new(76.0, 46.0));
    }

    #[test]
    fn test_inner_border_edge_insets_fill() {
        let mut ctx = UiContext::new();
        let node = Layer::new(Node::new()).node(&mut ctx);
        let Some(Shape::Rect(surface)) = node.shape() else {
            panic!("layer should paint a rect");
        };
        assert_eq!(surface.fill_inset, 1.0);
        assert_eq!(surface.elevation, ElevationDefaults::FLYOUT);
    }
}
