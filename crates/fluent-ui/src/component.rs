//! Component trait for building reusable UI widgets
//!
//! Components encapsulate the logic for creating nodes with specific
//! behavior and styling. They are built fresh every frame; anything that has
//! to survive between frames goes into the context's widget memory.
//!
//! # Example
//!
//! ```
//! use fluent_ui::{Component, Content, Node, TextContent, UiContext};
//!
//! struct Label {
//!     text: String,
//! }
//!
//! impl Component for Label {
//!     fn node(self, ctx: &mut UiContext) -> Node {
//!         let id = ctx.generate_id("label");
//!         Node::new().with_id(id).with_content(Content::Text(
//!             TextContent::new(self.text).with_color(ctx.content_color()),
//!         ))
//!     }
//! }
//!
//! let mut ctx = UiContext::new();
//! let node = Label { text: "Saved".into() }.node(&mut ctx);
//! assert_eq!(node.id().map(|id| id.as_str()), Some("label_0"));
//! ```

use crate::{Node, UiContext};

/// A component that can be rendered as a UI node
///
/// The trait takes `self` by value: components are created inline, own
/// their callbacks and content, and are done once they produced a `Node`.
pub trait Component {
    /// Build the node tree for this component
    fn node(self, ctx: &mut UiContext) -> Node;
}

/// Extension trait for optional components
pub trait ComponentExt: Component + Sized {
    /// Render the component if `condition` holds, otherwise an empty node
    fn when(self, condition: bool, ctx: &mut UiContext) -> Node {
        if condition {
            self.node(ctx)
        } else {
            Node::new()
        }
    }
}

impl<T: Component> ComponentExt for T {}

/// Plain nodes are components that render as themselves
impl Component for Node {
    fn node(self, _ctx: &mut UiContext) -> Node {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Swatch {
        size: f32,
    }

    impl Component for Swatch {
        fn node(self, ctx: &mut UiContext) -> Node {
            let id = ctx.generate_id("swatch");
            Node::new().with_id(id).with_size(self.size, self.size)
        }
    }

    #[test]
    fn test_component_node() {
        let mut ctx = UiContext::new();
        let node = Swatch { size: 8.0 }.node(&mut ctx);
        assert_eq!(node.id().map(|id| id.as_str()), Some("swatch_0"));
    }

    #[test]
    fn test_component_when() {
        let mut ctx = UiContext::new();

        let shown = Swatch { size: 8.0 }.when(true, &mut ctx);
        assert!(shown.id().is_some());

        let hidden = Swatch { size: 8.0 }.when(false, &mut ctx);
        assert!(hidden.is_empty());
    }

    #[test]
    fn test_node_is_a_component() {
        let mut ctx = UiContext::new();
        let node = Node::new().with_id("plain").node(&mut ctx);
        assert_eq!(node.id().map(|id| id.as_str()), Some("plain"));
    }
}
