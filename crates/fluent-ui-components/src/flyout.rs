//! Flyouts: light-dismiss surfaces anchored to another element
//!
//! A [`Flyout`] is driven by a single `visible` flag. Every frame it
//! reconciles that flag with its [`FlyoutVisibility`], measures its content,
//! resolves a placement against the anchor and viewport, and mounts the
//! animated surface through a [`Popup`].

use std::cell::Cell;
use std::rc::Rc;

use fluent_ui::{
    Component, CornerShape, ElevationDefaults, IntrinsicSize, KeyEvent, Layout, LayoutDirection,
    MaterialDefaults, Node, Point, Rect, Spacing, TransformOrigin, Translation, UiContext,
    WidgetStateId,
};
use fluent_ui_macros::WithBuilders;

use crate::animation::select_enter;
use crate::layer::{Layer, LayerStyle};
use crate::material_layout::MaterialOverlayLayout;
use crate::placement::{FlyoutPlacement, FlyoutPositionProvider};
use crate::popup::{KeyHandler, Popup, PopupProperties};
use crate::visibility::{FlyoutVisibility, VisibilityState};

/// Visual configuration of a flyout surface
#[derive(Debug, Clone, WithBuilders)]
pub struct FlyoutStyle {
    /// Space between the flyout border and its content
    #[with_builders(into)]
    pub content_padding: Spacing,
    /// None = the theme's overlay shape
    #[with_builders(into)]
    pub corner_shape: Option<CornerShape>,
    pub elevation: f32,
    pub stroke_width: f32,
    pub layout_direction: LayoutDirection,
}

impl Default for FlyoutStyle {
    fn default() -> Self {
        Self {
            content_padding: Spacing::all(12.0),
            corner_shape: None,
            elevation: ElevationDefaults::FLYOUT,
            stroke_width: 1.0,
            layout_direction: LayoutDirection::Ltr,
        }
    }
}

/// Per-flyout state persisted in widget memory
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyoutState {
    pub visibility: FlyoutVisibility,
    /// Placement used in the last resolved frame
    pub placement: Option<FlyoutPlacement>,
}

impl FlyoutState {
    pub fn memory_id(id: &str) -> WidgetStateId {
        WidgetStateId::with_suffix(id, "flyout")
    }
}

/// A flyout anchored to a rect
///
/// # Example
///
/// ```ignore
/// Flyout::new(menu_open)
///     .anchor(ctx.last_rect("share_button"))
///     .placement(FlyoutPlacement::Bottom)
///     .adaptive_placement(true)
///     .on_dismiss_request(move || menu_open_flag.set(false))
///     .content(menu_items)
///     .node(&mut ctx)
/// ```
pub struct Flyout {
    visible: bool,
    id: Option<String>,
    anchor: Option<Rect>,
    placement: FlyoutPlacement,
    adaptive: bool,
    style: FlyoutStyle,
    on_dismiss_request: Option<Box<dyn FnMut()>>,
    on_preview_key_event: Option<KeyHandler>,
    on_key_event: Option<KeyHandler>,
    content: Node,
}

impl Flyout {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            id: None,
            anchor: None,
            placement: FlyoutPlacement::Auto,
            adaptive: false,
            style: FlyoutStyle::default(),
            on_dismiss_request: None,
            on_preview_key_event: None,
            on_key_event: None,
            content: Node::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Rect the flyout is positioned against; `None` while not laid out yet
    pub fn anchor(mut self, anchor: impl Into<Option<Rect>>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn placement(mut self, placement: FlyoutPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Flip to the opposite side when the preferred one has no room
    pub fn adaptive_placement(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    pub fn with_style(mut self, style: FlyoutStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_dismiss_request(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_dismiss_request = Some(Box::new(f));
        self
    }

    pub fn on_key_event(mut self, f: impl FnMut(&KeyEvent) -> bool + 'static) -> Self {
        self.on_key_event = Some(Box::new(f));
        self
    }

    pub fn on_preview_key_event(mut self, f: impl FnMut(&KeyEvent) -> bool + 'static) -> Self {
        self.on_preview_key_event = Some(Box::new(f));
        self
    }

    pub fn content(mut self, content: Node) -> Self {
        self.content = content;
        self
    }

    fn surface(&self, ctx: &mut UiContext, content: Node) -> MaterialOverlayLayout {
        let theme = ctx.theme().clone();
        let corner_shape = self.style.corner_shape.unwrap_or(theme.shapes.overlay);

        let mut layer_style = LayerStyle::flyout(&theme)
            .with_corner_shape(corner_shape)
            .with_elevation(self.style.elevation)
            .with_padding(self.style.content_padding);
        layer_style.border.width = self.style.stroke_width;

        let layer = Layer::new(content).with_style(layer_style).node(ctx);
        MaterialOverlayLayout::new(MaterialDefaults::acrylic_default(&theme), layer)
            .with_corner_shape(corner_shape)
    }

    /// Invisible stand-in while the flyout cannot be placed yet
    fn pending_placeholder(size: Option<IntrinsicSize>) -> Node {
        let size = size.unwrap_or_default();
        Node::new()
            .with_size(size.width, size.height)
            .with_opacity(0.0)
    }

    /// Host `content` in the popup layer, wired to this flyout's handlers
    ///
    /// The position is already clamped by the resolver against the current
    /// size, so the popup must not clip again with last frame's size.
    fn mount(self, ctx: &mut UiContext, id: String, content: Node, position: Point) -> Node {
        Popup::new(content)
            .with_id(id)
            .position(position)
            .properties(PopupProperties {
                clipping_enabled: false,
                ..Default::default()
            })
            .set_key_handlers(self.on_preview_key_event, self.on_key_event)
            .set_dismiss_handler(self.on_dismiss_request)
            .node(ctx)
    }
}

impl Component for Flyout {
    fn node(mut self, ctx: &mut UiContext) -> Node {
        let id = self.id.take().unwrap_or_else(|| ctx.generate_id("flyout"));
        let memory_id = FlyoutState::memory_id(&id);
        let mut state = *ctx.memory().get_or_default::<FlyoutState>(memory_id.clone());

        if let Some(changed) = state.visibility.set_target(self.visible) {
            log::debug!("flyout {id}: {changed:?}");
        }

        if !state.visibility.is_mounted() {
            Popup::release(ctx, &id);
            ctx.memory().insert(memory_id, state);
            return Node::new();
        }

        let content = std::mem::take(&mut self.content);
        let surface = self.surface(ctx, content);
        let measured = surface.measure(ctx);

        let provider =
            FlyoutPositionProvider::new(self.placement, self.adaptive, self.style.layout_direction);
        let viewport = ctx.viewport();
        let placed = measured.and_then(|size| {
            provider
                .resolve(self.anchor, viewport, Some(size))
                .map(|resolved| (resolved, size))
        });

        let (resolved, size) = match placed {
            Ok(placed) => placed,
            Err(err) => {
                // Retried on the next layout pass; the enter transition waits
                log::trace!("flyout {id} pending: {err}");
                if state.visibility.state() == VisibilityState::Exiting
                    && state.visibility.tick(ctx.frame_delta()) == Some(VisibilityState::Absent)
                {
                    Popup::release(ctx, &id);
                    ctx.memory().insert(memory_id, state);
                    return Node::new();
                }
                ctx.memory().insert(memory_id, state);
                ctx.request_animation_frame();
                let origin = self.anchor.map(|a| a.min_point()).unwrap_or_default();
                let placeholder = Self::pending_placeholder(measured.ok());
                return self.mount(ctx, id, placeholder, origin);
            }
        };

        if state.placement != Some(resolved.placement) {
            if resolved.placement != self.placement {
                log::debug!(
                    "flyout {id}: {:?} adapted to {:?}",
                    self.placement,
                    resolved.placement
                );
            }
            state.placement = Some(resolved.placement);
        }

        if let Some(changed) = state.visibility.tick(ctx.frame_delta()) {
            log::debug!("flyout {id}: {changed:?}");
        }
        if state.visibility.state() == VisibilityState::Absent {
            Popup::release(ctx, &id);
            ctx.memory().insert(memory_id, state);
            return Node::new();
        }

        let frame = select_enter(resolved.placement, self.style.layout_direction)
            .frame(state.visibility.motion(), size.into())
            .with_opacity(state.visibility.alpha());

        let animated = surface
            .compose(size)
            .with_opacity(frame.opacity)
            .with_scale(frame.scale)
            .with_translation(Translation::from(frame.translation))
            .with_transform_origin(TransformOrigin::center());

        if state.visibility.is_animating() {
            ctx.request_animation_frame();
        }
        ctx.memory().insert(memory_id, state);

        self.mount(ctx, id, animated, resolved.position)
    }
}

/// What the content and flyout builders of a [`FlyoutContainer`] can see and change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyoutScope {
    visible: bool,
}

impl FlyoutScope {
    pub fn is_flyout_visible(&self) -> bool {
        self.visible
    }

    pub fn set_flyout_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

type ScopedBuilder = Box<dyn FnOnce(&mut FlyoutScope, &mut UiContext) -> Node>;

/// Content plus a flyout anchored to it, owning the visibility flag
///
/// The flag survives between frames and is cleared when the flyout asks to
/// be dismissed.
pub struct FlyoutContainer {
    initial_visible: bool,
    placement: FlyoutPlacement,
    adaptive: bool,
    style: FlyoutStyle,
    content: ScopedBuilder,
    flyout: ScopedBuilder,
}

impl FlyoutContainer {
    pub fn new(
        content: impl FnOnce(&mut FlyoutScope, &mut UiContext) -> Node + 'static,
        flyout: impl FnOnce(&mut FlyoutScope, &mut UiContext) -> Node + 'static,
    ) -> Self {
        Self {
            initial_visible: false,
            placement: FlyoutPlacement::Auto,
            adaptive: false,
            style: FlyoutStyle::default(),
            content: Box::new(content),
            flyout: Box::new(flyout),
        }
    }

    pub fn initial_visible(mut self, visible: bool) -> Self {
        self.initial_visible = visible;
        self
    }

    pub fn placement(mut self, placement: FlyoutPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn adaptive_placement(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    pub fn with_style(mut self, style: FlyoutStyle) -> Self {
        self.style = style;
        self
    }
}

impl Component for FlyoutContainer {
    fn node(self, ctx: &mut UiContext) -> Node {
        let id = ctx.generate_id("flyout_container");
        let anchor_id = format!("{id}_anchor");
        let visible_id = WidgetStateId::with_suffix(&id, "visible");

        let visible = *ctx
            .memory()
            .get_or_insert(visible_id.clone(), self.initial_visible);
        let mut scope = FlyoutScope { visible };

        let content = (self.content)(&mut scope, ctx);
        let flyout_content = (self.flyout)(&mut scope, ctx);

        let dismissed = Rc::new(Cell::new(false));
        let on_dismiss = dismissed.clone();
        let flyout = Flyout::new(scope.visible)
            .with_id(format!("{id}_flyout"))
            .anchor(ctx.last_rect(&anchor_id))
            .placement(self.placement)
            .adaptive_placement(self.adaptive)
            .with_style(self.style)
            .on_dismiss_request(move || on_dismiss.set(true))
            .content(flyout_content)
            .node(ctx);

        if dismissed.get() {
            scope.visible = false;
        }
        ctx.memory().insert(visible_id, scope.visible);

        Node::new()
            .with_layout_direction(Layout::Stack)
            .with_children(vec![Node::new().with_id(anchor_id).with_child(content), flyout])
    }
}
