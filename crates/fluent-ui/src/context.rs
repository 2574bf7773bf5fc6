//! UI Context for managing the immediate mode UI lifecycle
//!
//! The `UiContext` is the central coordinator for the UI system. It holds all
//! the "plumbing" that components need to function:
//! - Input state (mouse, keyboard)
//! - Widget memory (visibility animations, popup focus bookkeeping)
//! - Content measurer (for text measurement)
//! - Layout rects of the previous frame (anchors, hit-testing)
//! - The active theme and content color
//! - ID stack (for generating unique widget IDs)

use crate::{
    Color, ContentMeasurer, FixedAdvanceMeasurer, FluentTheme, InputState, IntrinsicSize, Node,
    NodeId, Point, Rect, WidgetMemory,
};
use std::collections::HashMap;

/// The main UI context that coordinates all UI operations
///
/// # Example
///
/// ```
/// use fluent_ui::{Node, Rect, UiContext};
///
/// let mut ctx = UiContext::new();
/// ctx.set_viewport(Rect::from_xywh(0.0, 0.0, 800.0, 600.0));
///
/// ctx.begin_frame();
/// let mut root = Node::new().with_id("root").with_size(100.0, 40.0);
/// ctx.end_frame(&mut root);
///
/// assert_eq!(ctx.last_rect("root"), Some(Rect::from_xywh(0.0, 0.0, 100.0, 40.0)));
/// ```
pub struct UiContext {
    input: InputState,

    memory: WidgetMemory,

    /// Content measurer for text measurement
    measurer: Option<Box<dyn ContentMeasurer>>,

    /// ID stack for hierarchical ID generation
    id_stack: Vec<String>,

    /// Counter for generating unique IDs within a scope
    id_counter: usize,

    theme: FluentTheme,

    /// Innermost entry wins
    content_colors: Vec<Color>,

    viewport: Option<Rect>,

    /// Seconds since the previous frame
    frame_delta: f32,

    /// Rects of identified nodes as laid out at the end of the previous frame
    last_rects: HashMap<NodeId, Rect>,

    focused: Option<NodeId>,

    /// Set by components that still animate; cleared every frame
    active_transitions: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            memory: WidgetMemory::new(),
            measurer: None,
            id_stack: Vec::new(),
            id_counter: 0,
            theme: FluentTheme::default(),
            content_colors: Vec::new(),
            viewport: None,
            frame_delta: 0.0,
            last_rects: HashMap::new(),
            focused: None,
            active_transitions: false,
        }
    }

    /// Create a new UI context with a content measurer
    pub fn with_measurer(measurer: impl ContentMeasurer + 'static) -> Self {
        Self {
            measurer: Some(Box::new(measurer)),
            ..Self::new()
        }
    }

    pub fn set_measurer(&mut self, measurer: impl ContentMeasurer + 'static) {
        self.measurer = Some(Box::new(measurer));
    }

    pub fn has_measurer(&self) -> bool {
        self.measurer.is_some()
    }

    // ========== Frame Lifecycle ==========

    /// Begin a new frame
    ///
    /// Input for this frame must already be recorded via `input_mut()`.
    pub fn begin_frame(&mut self) {
        self.id_counter = 0;
        self.active_transitions = false;
    }

    /// End the current frame
    ///
    /// Lays out `root` inside the viewport, remembers the rect of every
    /// identified node for the next frame, and clears per-frame input.
    pub fn end_frame(&mut self, root: &mut Node) {
        let available = self
            .viewport
            .unwrap_or_else(|| Rect::from_min_size([0.0, 0.0], [f32::INFINITY, f32::INFINITY]));

        match self.measurer.as_mut() {
            Some(measurer) => root.compute_layout(available, &mut **measurer),
            None => {
                if root.contains_text() {
                    log::trace!("laying out text without a measurer, using fixed advances");
                }
                root.compute_layout(available, &mut FixedAdvanceMeasurer::default());
            }
        }

        self.last_rects.clear();
        let rects = &mut self.last_rects;
        root.for_each_laid_out(&mut |id, rect| {
            rects.insert(id.clone(), rect);
        });

        self.input.begin_frame();
    }

    /// Seconds elapsed since the previous frame; drives animations
    pub fn set_frame_delta(&mut self, seconds: f32) {
        self.frame_delta = seconds.max(0.0);
    }

    pub fn frame_delta(&self) -> f32 {
        self.frame_delta
    }

    /// Ask for another frame because something is still animating
    pub fn request_animation_frame(&mut self) {
        self.active_transitions = true;
    }

    /// Check if any transitions are currently active
    ///
    /// Use this to determine if continuous redraws are needed.
    pub fn has_active_transitions(&self) -> bool {
        self.active_transitions
    }

    // ========== Viewport & Layout ==========

    /// Set the window bounds popups are positioned within
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = Some(viewport);
    }

    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Rect of a node as laid out at the end of the previous frame
    pub fn last_rect(&self, id: &str) -> Option<Rect> {
        self.last_rects.get(&NodeId::new(id)).copied()
    }

    /// Measure a node's outer size against the viewport
    ///
    /// Uses the same measurer `end_frame` lays out with, so a measured size
    /// always matches the rect the node gets. Returns `None` when the size is
    /// not finite, e.g. a relative size without a viewport.
    pub fn measure_node(&mut self, node: &Node) -> Option<IntrinsicSize> {
        let available = self
            .viewport
            .map(|v| IntrinsicSize::new(v.width(), v.height()))
            .unwrap_or_else(IntrinsicSize::unbounded);

        let size = match self.measurer.as_mut() {
            Some(measurer) => node.measure(&mut **measurer, available),
            None => node.measure(&mut FixedAdvanceMeasurer::default(), available),
        };
        (size.width.is_finite() && size.height.is_finite()).then_some(size)
    }

    // ========== Input State Access ==========

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn cursor_position(&self) -> Option<Point> {
        self.input.cursor_position
    }

    /// Whether the cursor is over the node's rect from the previous frame
    pub fn is_hovered(&self, id: &str) -> bool {
        match (self.last_rect(id), self.input.cursor_position) {
            (Some(rect), Some(cursor)) => rect.contains(cursor),
            _ => false,
        }
    }

    // ========== Theme ==========

    pub fn theme(&self) -> &FluentTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: FluentTheme) {
        self.theme = theme;
    }

    /// Color for text and icons in the current scope
    pub fn content_color(&self) -> Color {
        self.content_colors
            .last()
            .copied()
            .unwrap_or(self.theme.colors.text_primary)
    }

    /// Run `f` with `color` as the content color
    pub fn with_content_color<R>(&mut self, color: Color, f: impl FnOnce(&mut Self) -> R) -> R {
        self.content_colors.push(color);
        let result = f(self);
        self.content_colors.pop();
        result
    }

    // ========== Focus Management ==========

    pub fn focused_widget(&self) -> Option<&NodeId> {
        self.focused.as_ref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused
            .as_ref()
            .is_some_and(|focused| focused.as_str() == id)
    }

    pub fn set_focus(&mut self, id: Option<&str>) {
        self.focused = id.map(NodeId::new);
    }

    // ========== Widget Memory ==========

    /// Get access to widget memory for storing internal state
    pub fn memory(&mut self) -> &mut WidgetMemory {
        &mut self.memory
    }

    pub fn memory_ref(&self) -> &WidgetMemory {
        &self.memory
    }

    // ========== ID Generation ==========

    /// Generate a unique ID for a widget
    ///
    /// IDs are generated based on:
    /// 1. The current ID stack (parent scopes)
    /// 2. The provided label/name
    /// 3. A counter for disambiguation
    ///
    /// IDs stay stable across frames as long as the UI structure does.
    pub fn generate_id(&mut self, label: &str) -> String {
        let id = self.peek_id(label);
        self.id_counter += 1;
        id
    }

    /// Generate an ID without incrementing the counter
    pub fn peek_id(&self, label: &str) -> String {
        if self.id_stack.is_empty() {
            format!("{}_{}", label, self.id_counter)
        } else {
            format!("{}/{}_{}", self.id_stack.join("/"), label, self.id_counter)
        }
    }

    /// Push a scope onto the ID stack
    pub fn push_id(&mut self, scope: impl Into<String>) {
        self.id_stack.push(scope.into());
    }

    pub fn pop_id(&mut self) {
        self.id_stack.pop();
    }

    /// Execute a closure with a temporary ID scope
    pub fn with_id_scope<R>(
        &mut self,
        scope: impl Into<String>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.push_id(scope);
        let result = f(self);
        self.pop_id();
        result
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UiContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiContext")
            .field("memory", &self.memory)
            .field("id_stack", &self.id_stack)
            .field("viewport", &self.viewport)
            .field("focused", &self.focused)
            .field("last_rects", &self.last_rects.len())
            .finish()
    }
}
