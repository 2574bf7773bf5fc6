//! Popup host: mounts content on the overlay layer at an absolute position
//!
//! The popup never hides itself. Pointer presses outside its last laid-out
//! rect and unhandled Escape presses are reported through
//! `on_dismiss_request`; the owner decides whether to stop showing it.

use fluent_ui::{
    Component, KeyEvent, NamedKey, Node, NodeId, Point, UiContext, WidgetStateId, ZIndex,
};

/// Key handler; returns `true` when the event was consumed
pub type KeyHandler = Box<dyn FnMut(&KeyEvent) -> bool>;

/// Behaviour switches of a popup window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupProperties {
    /// Whether the popup takes keyboard focus while shown
    pub focusable: bool,
    /// Keep the popup inside the viewport
    pub clipping_enabled: bool,
    pub dismiss_on_click_outside: bool,
    pub dismiss_on_escape: bool,
}

impl Default for PopupProperties {
    fn default() -> Self {
        Self {
            focusable: false,
            clipping_enabled: true,
            dismiss_on_click_outside: true,
            dismiss_on_escape: true,
        }
    }
}

/// Per-popup bookkeeping kept while the popup is mounted
#[derive(Debug, Clone, Default)]
struct PopupState {
    /// Focus owner before the popup took focus
    previous_focus: Option<NodeId>,
}

/// Overlay host component
///
/// # Example
///
/// ```ignore
/// Popup::new(menu_node)
///     .with_id("menu")
///     .position(Point::new(120.0, 40.0))
///     .on_dismiss_request(move || open.set(false))
///     .node(&mut ctx)
/// ```
pub struct Popup {
    id: Option<String>,
    position: Point,
    properties: PopupProperties,
    on_dismiss_request: Option<Box<dyn FnMut()>>,
    on_preview_key_event: Option<KeyHandler>,
    on_key_event: Option<KeyHandler>,
    content: Node,
}

impl Popup {
    pub fn new(content: Node) -> Self {
        Self {
            id: None,
            position: Point::zero(),
            properties: PopupProperties::default(),
            on_dismiss_request: None,
            on_preview_key_event: None,
            on_key_event: None,
            content,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Top-left corner of the popup in screen space
    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn properties(mut self, properties: PopupProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn on_dismiss_request(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_dismiss_request = Some(Box::new(f));
        self
    }

    /// Handler that sees key events before the regular handler; makes the popup focusable
    pub fn on_preview_key_event(mut self, f: impl FnMut(&KeyEvent) -> bool + 'static) -> Self {
        self.on_preview_key_event = Some(Box::new(f));
        self.properties.focusable = true;
        self
    }

    /// Regular key handler; makes the popup focusable
    pub fn on_key_event(mut self, f: impl FnMut(&KeyEvent) -> bool + 'static) -> Self {
        self.on_key_event = Some(Box::new(f));
        self.properties.focusable = true;
        self
    }

    pub(crate) fn set_key_handlers(
        mut self,
        preview: Option<KeyHandler>,
        regular: Option<KeyHandler>,
    ) -> Self {
        self.properties.focusable |= preview.is_some() || regular.is_some();
        self.on_preview_key_event = preview;
        self.on_key_event = regular;
        self
    }

    pub(crate) fn set_dismiss_handler(mut self, handler: Option<Box<dyn FnMut()>>) -> Self {
        self.on_dismiss_request = handler;
        self
    }

    /// Forget a popup that is no longer mounted, handing focus back
    pub fn release(ctx: &mut UiContext, id: &str) {
        let state_id = WidgetStateId::with_suffix(id, "popup");
        let Some(state) = ctx.memory_ref().get::<PopupState>(state_id.clone()).cloned() else {
            return;
        };
        ctx.memory().remove(state_id);

        if ctx.is_focused(id) {
            log::debug!("popup {id} released, restoring focus to {:?}", state.previous_focus);
            ctx.set_focus(state.previous_focus.as_ref().map(NodeId::as_str));
        }
    }

    fn take_focus(ctx: &mut UiContext, id: &str) {
        let state_id = WidgetStateId::with_suffix(id, "popup");
        if ctx.memory_ref().contains(state_id.clone()) {
            return;
        }
        let previous_focus = ctx.focused_widget().cloned();
        ctx.memory().insert(state_id, PopupState { previous_focus });
        ctx.set_focus(Some(id));
    }

    fn pressed_outside(ctx: &UiContext, id: &str) -> bool {
        if !ctx.input().any_button_just_pressed() {
            return false;
        }
        // Unknown until the popup has been laid out once
        match (ctx.last_rect(id), ctx.cursor_position()) {
            (Some(rect), Some(cursor)) => !rect.contains(cursor),
            _ => false,
        }
    }

    fn clip_to_viewport(&self, ctx: &UiContext, id: &str) -> Point {
        let (Some(viewport), Some(last)) = (ctx.viewport(), ctx.last_rect(id)) else {
            return self.position;
        };
        let axis = |pos: f32, extent: f32, min: f32, max: f32| {
            if extent <= max - min {
                pos.clamp(min, max - extent)
            } else {
                min
            }
        };
        Point::new(
            axis(self.position.x, last.width(), viewport.left(), viewport.right()),
            axis(self.position.y, last.height(), viewport.top(), viewport.bottom()),
        )
    }
}

impl Component for Popup {
    fn node(mut self, ctx: &mut UiContext) -> Node {
        let id = self.id.take().unwrap_or_else(|| ctx.generate_id("popup"));
        let focusable = self.properties.focusable;

        if focusable {
            Self::take_focus(ctx, &id);
        }

        let mut dismiss = self.properties.dismiss_on_click_outside && Self::pressed_outside(ctx, &id);

        if focusable && ctx.is_focused(&id) {
            let events = ctx.input().key_events.clone();
            for event in &events {
                let consumed = self
                    .on_preview_key_event
                    .as_mut()
                    .is_some_and(|handler| handler(event))
                    || self
                        .on_key_event
                        .as_mut()
                        .is_some_and(|handler| handler(event));

                if !consumed && self.properties.dismiss_on_escape && event.is_named(NamedKey::Escape)
                {
                    dismiss = true;
                }
            }
        }

        if dismiss {
            log::debug!("popup {id} requested dismissal");
            if let Some(on_dismiss_request) = self.on_dismiss_request.as_mut() {
                on_dismiss_request();
            }
        }

        let position = if self.properties.clipping_enabled {
            self.clip_to_viewport(ctx, &id)
        } else {
            self.position
        };

        Node::new()
            .with_id(id)
            .with_position(position)
            .with_z_index(ZIndex::OVERLAY)
            .with_focusable(focusable)
            .with_child(self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_ui::{Key, MouseButton, Rect};
    use std::cell::Cell;
    use std::rc::Rc;

    struct Harness {
        ctx: UiContext,
        dismissals: Rc<Cell<u32>>,
    }

    impl Harness {
        fn new() -> Self {
            let mut ctx = UiContext::new();
            ctx.set_viewport(Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
            Self {
                ctx,
                dismissals: Rc::new(Cell::new(0)),
            }
        }

        fn frame(&mut self, build: impl FnOnce(Popup) -> Popup) -> Node {
            self.ctx.begin_frame();
            let dismissals = self.dismissals.clone();
            let popup = Popup::new(Node::new().with_size(100.0, 50.0))
                .with_id("menu")
                .position(Point::new(200.0, 200.0))
                .on_dismiss_request(move || dismissals.set(dismissals.get() + 1));
            let mut root = build(popup).node(&mut self.ctx);
            self.ctx.end_frame(&mut root);
            root
        }

        fn press_at(&mut self, x: f32, y: f32) {
            let input = self.ctx.input_mut();
            input.set_cursor_position(Some(Point::new(x, y)));
            input.press_button(MouseButton::Left);
        }

        fn press_escape(&mut self) {
            self.ctx
                .input_mut()
                .press_key(Key::Named(NamedKey::Escape), false, false);
        }
    }

    #[test]
    fn test_popup_is_placed_on_overlay_layer() {
        let mut harness = Harness::new();
        let root = harness.frame(|p| p);

        assert_eq!(root.z_index(), Some(ZIndex::OVERLAY));
        assert_eq!(
            harness.ctx.last_rect("menu"),
            Some(Rect::from_xywh(200.0, 200.0, 100.0, 50.0))
        );
    }

    #[test]
    fn test_outside_press_requests_dismissal() {
        let mut harness = Harness::new();
        harness.frame(|p| p);

        harness.press_at(10.0, 10.0);
        harness.frame(|p| p);
        assert_eq!(harness.dismissals.get(), 1);

        // Press state is per frame
        harness.frame(|p| p);
        assert_eq!(harness.dismissals.get(), 1);
    }

    #[test]
    fn test_inside_press_is_ignored() {
        let mut harness = Harness::new();
        harness.frame(|p| p);
        harness.press_at(250.0, 220.0);
        harness.frame(|p| p);
        assert_eq!(harness.dismissals.get(), 0);
    }

    #[test]
    fn test_no_dismissal_before_first_layout() {
        let mut harness = Harness::new();
        harness.press_at(10.0, 10.0);
        harness.frame(|p| p);
        assert_eq!(harness.dismissals.get(), 0);
    }

    #[test]
    fn test_escape_without_key_handlers_does_nothing() {
        let mut harness = Harness::new();
        harness.frame(|p| p);
        assert!(harness.ctx.focused_widget().is_none());

        harness.press_escape();
        harness.frame(|p| p);
        assert_eq!(harness.dismissals.get(), 0);
    }

    #[test]
    fn test_unhandled_escape_dismisses_focusable_popup() {
        let mut harness = Harness::new();
        harness.frame(|p| p.on_key_event(|_| false));
        assert!(harness.ctx.is_focused("menu"));

        harness.press_escape();
        harness.frame(|p| p.on_key_event(|_| false));
        assert_eq!(harness.dismissals.get(), 1);
    }

    #[test]
    fn test_preview_handler_can_consume_escape() {
        let mut harness = Harness::new();
        let seen = Rc::new(Cell::new(0));

        harness.frame(|p| p.on_preview_key_event(|_| true));
        harness.press_escape();
        let regular_seen = seen.clone();
        harness.frame(move |p| {
            p.on_preview_key_event(|event| event.is_named(NamedKey::Escape))
                .on_key_event(move |_| {
                    regular_seen.set(regular_seen.get() + 1);
                    false
                })
        });

        assert_eq!(harness.dismissals.get(), 0);
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn test_release_restores_focus() {
        let mut harness = Harness::new();
        harness.ctx.set_focus(Some("search"));

        harness.frame(|p| p.on_key_event(|_| false));
        assert!(harness.ctx.is_focused("menu"));

        Popup::release(&mut harness.ctx, "menu");
        assert!(harness.ctx.is_focused("search"));
    }

    #[test]
    fn test_clipping_keeps_popup_in_viewport() {
        let mut harness = Harness::new();
        harness.frame(|p| p);
        let root = harness.frame(|p| p.position(Point::new(780.0, 590.0)));
        assert_eq!(root.position(), Some(Point::new(700.0, 550.0)));

        let unclipped = harness.frame(|p| {
            p.position(Point::new(780.0, 590.0))
                .properties(PopupProperties {
                    clipping_enabled: false,
                    ..Default::default()
                })
        });
        assert_eq!(unclipped.position(), Some(Point::new(780.0, 590.0)));
    }
}
