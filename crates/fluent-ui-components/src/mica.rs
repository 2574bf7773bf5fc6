//! Window background layer

use fluent_ui::{Component, CornerShape, Layout, MaterialDefaults, Node, Shape, Size, UiContext};

type ContentBuilder = Box<dyn FnOnce(&mut UiContext) -> Node>;

/// Fills its parent with the Mica background and hosts the window content
///
/// Without a background this is the solid mica base color. With one, the
/// background is painted first and the Mica material is laid over it.
/// Content built inside a `Mica` defaults to the theme's primary text color.
pub struct Mica {
    background: Option<Node>,
    content: ContentBuilder,
}

impl Mica {
    pub fn new(content: impl FnOnce(&mut UiContext) -> Node + 'static) -> Self {
        Self {
            background: None,
            content: Box::new(content),
        }
    }

    /// Picture painted under the Mica material, such as a wallpaper gradient
    pub fn with_background(mut self, background: Node) -> Self {
        self.background = Some(background);
        self
    }
}

fn fill() -> Node {
    Node::new()
        .with_width(Size::Relative(1.0))
        .with_height(Size::Relative(1.0))
}

impl Component for Mica {
    fn node(self, ctx: &mut UiContext) -> Node {
        let theme = ctx.theme();
        let mut layers = match self.background {
            Some(background) => vec![
                fill().with_child(background),
                fill().with_shape(Shape::material(
                    MaterialDefaults::mica(theme),
                    CornerShape::None,
                )),
            ],
            None => vec![fill().with_shape(Shape::rect(theme.colors.mica_base))],
        };
        let text_color = theme.colors.text_primary;

        layers.push(ctx.with_content_color(text_color, self.content));

        fill()
            .with_layout_direction(Layout::Stack)
            .with_children(layers)
    }
}
