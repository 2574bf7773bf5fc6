use crate::content::Content;
use crate::layout::{
    ComputedLayout, Layout, Size, Spacing, Transform2D, TransformOrigin, Translation, ZIndex,
};
use crate::measure::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};
use crate::primitives::{PaintedShape, Point, Rect, Shape, TextShape};

/// Unique identifier for a node, used for hit-testing and layout lookups
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for NodeId {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

/// A UI node that can contain a shape, content, and/or children
///
/// All fields are private - use the builder pattern methods (`with_*`) to configure nodes.
#[derive(Debug, Clone)]
pub struct Node {
    /// Optional identifier (used for layout lookups and event routing)
    id: Option<NodeId>,
    width: Size,
    height: Size,
    /// Absolute position in screen space; the node leaves the parent's flow
    position: Option<Point>,
    padding: Spacing,
    /// Gap between children in the layout direction
    gap: f32,
    layout_direction: Layout,
    /// Opacity of this node and all its children
    opacity: f32,
    /// Translation from the laid-out position (post-layout transform)
    translation: Translation,
    /// Uniform scale factor about `transform_origin`
    scale: f32,
    transform_origin: TransformOrigin,
    /// None = inherit from parent
    z_index: Option<ZIndex>,
    /// Whether the node may take keyboard focus
    focusable: bool,
    /// Optional shape to render for this node (background)
    shape: Option<Shape>,
    /// Optional content - content nodes cannot have children
    content: Option<Content>,
    children: Vec<Node>,
    /// Filled during layout
    computed: Option<ComputedLayout>,
}

impl Node {
    pub fn new() -> Self {
        Self {
            id: None,
            width: Size::FitContent,
            height: Size::FitContent,
            position: None,
            padding: Spacing::zero(),
            gap: 0.0,
            layout_direction: Layout::Vertical,
            opacity: 1.0,
            translation: Translation::ZERO,
            scale: 1.0,
            transform_origin: TransformOrigin::center(),
            z_index: None,
            focusable: false,
            shape: None,
            content: None,
            children: Vec::new(),
            computed: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    /// Fixed width and height in logical pixels
    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(Size::px(width)).with_height(Size::px(height))
    }

    /// Place the node at an absolute screen position, outside the parent's flow
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_layout_direction(mut self, direction: Layout) -> Self {
        self.layout_direction = direction;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_transform_origin(mut self, origin: TransformOrigin) -> Self {
        self.transform_origin = origin;
        self
    }

    pub fn with_z_index(mut self, z_index: ZIndex) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Set content; content nodes cannot have children
    pub fn with_content(mut self, content: Content) -> Self {
        debug_assert!(
            self.children.is_empty(),
            "content nodes cannot have children"
        );
        self.content = Some(content);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        debug_assert!(self.content.is_none(), "content nodes cannot have children");
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        debug_assert!(self.content.is_none(), "content nodes cannot have children");
        self.children.extend(children);
        self
    }

    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn height(&self) -> Size {
        self.height
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn layout_direction(&self) -> Layout {
        self.layout_direction
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    pub fn translation(&self) -> Translation {
        self.translation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn z_index(&self) -> Option<ZIndex> {
        self.z_index
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn computed_layout(&self) -> Option<&ComputedLayout> {
        self.computed.as_ref()
    }

    /// Whether this node has nothing to show (no shape, content or children)
    pub fn is_empty(&self) -> bool {
        self.shape.is_none() && self.content.is_none() && self.children.is_empty()
    }

    /// Whether any node in this subtree needs text measurement
    pub fn contains_text(&self) -> bool {
        matches!(self.content, Some(Content::Text(_)))
            || self.children.iter().any(Node::contains_text)
    }

    /// Depth-first search for a node by id
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_ref().is_some_and(|own| own.as_str() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Visit every laid-out node that has an id
    pub fn for_each_laid_out(&self, f: &mut impl FnMut(&NodeId, Rect)) {
        if let (Some(id), Some(computed)) = (&self.id, &self.computed) {
            f(id, computed.rect);
        }
        for child in &self.children {
            child.for_each_laid_out(f);
        }
    }

    // ========== Measurement ==========

    /// Measure the outer size of this node (content + padding, or its fixed size)
    ///
    /// `available` is the space offered by the parent; it resolves relative
    /// sizes and bounds text wrapping.
    pub fn measure(
        &self,
        measurer: &mut dyn ContentMeasurer,
        available: IntrinsicSize,
    ) -> IntrinsicSize {
        let fixed_w = self.width.try_resolve(available.width);
        let fixed_h = self.height.try_resolve(available.height);

        if let (Some(width), Some(height)) = (fixed_w, fixed_h) {
            return IntrinsicSize::new(width, height);
        }

        let inner_available = IntrinsicSize::new(
            (fixed_w.unwrap_or(available.width) - self.padding.get_horizontal()).max(0.0),
            (fixed_h.unwrap_or(available.height) - self.padding.get_vertical()).max(0.0),
        );
        let content = self.measure_content(measurer, inner_available);

        IntrinsicSize::new(
            fixed_w.unwrap_or(content.width + self.padding.get_horizontal()),
            fixed_h.unwrap_or(content.height + self.padding.get_vertical()),
        )
    }

    fn measure_content(
        &self,
        measurer: &mut dyn ContentMeasurer,
        available: IntrinsicSize,
    ) -> IntrinsicSize {
        if let Some(Content::Text(text)) = &self.content {
            let mut request = MeasureTextRequest::from_text_content(text);
            if available.width.is_finite() {
                request.max_width = Some(available.width);
            }
            return measurer.measure_text(request);
        }

        let mut total = IntrinsicSize::zero();
        let mut in_flow = 0usize;
        for child in self.children.iter().filter(|c| c.position.is_none()) {
            let size = child.measure(measurer, available);
            match self.layout_direction {
                Layout::Stack => {
                    total.width = total.width.max(size.width);
                    total.height = total.height.max(size.height);
                }
                Layout::Vertical => {
                    total.width = total.width.max(size.width);
                    total.height += size.height;
                }
                Layout::Horizontal => {
                    total.width += size.width;
                    total.height = total.height.max(size.height);
                }
            }
            in_flow += 1;
        }

        let gaps = self.gap * in_flow.saturating_sub(1) as f32;
        match self.layout_direction {
            Layout::Stack => {}
            Layout::Vertical => total.height += gaps,
            Layout::Horizontal => total.width += gaps,
        }
        total
    }

    // ========== Layout ==========

    /// Lay out this subtree inside `available_rect`
    pub fn compute_layout(&mut self, available_rect: Rect, measurer: &mut dyn ContentMeasurer) {
        let viewport = IntrinsicSize::new(available_rect.width(), available_rect.height());
        self.layout_recursive(available_rect.min, viewport, viewport, measurer);
    }

    fn layout_recursive(
        &mut self,
        origin: [f32; 2],
        available: IntrinsicSize,
        viewport: IntrinsicSize,
        measurer: &mut dyn ContentMeasurer,
    ) {
        let size = self.measure(measurer, available);
        let origin = self.position.map(<[f32; 2]>::from).unwrap_or(origin);
        let rect = Rect::from_min_size(origin, size.as_array());
        self.computed = Some(ComputedLayout::new(rect));

        let inner = Rect::new(
            [origin[0] + self.padding.left, origin[1] + self.padding.top],
            [
                rect.max[0] - self.padding.right,
                rect.max[1] - self.padding.bottom,
            ],
        );

        if let Some(shape) = &mut self.shape {
            shape.set_rect(rect);
        }

        let inner_available = IntrinsicSize::new(inner.width().max(0.0), inner.height().max(0.0));
        let mut cursor = inner.min;
        for child in &mut self.children {
            if child.position.is_some() {
                child.layout_recursive([0.0, 0.0], viewport, viewport, measurer);
                continue;
            }

            child.layout_recursive(cursor, inner_available, viewport, measurer);
            let child_rect = child.computed.map(|c| c.rect).unwrap_or_default();
            match self.layout_direction {
                Layout::Vertical => cursor[1] += child_rect.height() + self.gap,
                Layout::Horizontal => cursor[0] += child_rect.width() + self.gap,
                Layout::Stack => {}
            }
        }
    }

    // ========== Output ==========

    /// Collect all shapes in paint order (z-index, then tree order)
    pub fn collect_shapes(&self) -> Vec<PaintedShape> {
        let mut shapes = Vec::new();
        self.collect_recursive(&mut shapes, Transform2D::IDENTITY, 1.0, ZIndex::DEFAULT);
        shapes.sort_by_key(|s| (s.z_index, s.tree_index));
        shapes
    }

    fn collect_recursive(
        &self,
        shapes: &mut Vec<PaintedShape>,
        parent_transform: Transform2D,
        parent_opacity: f32,
        parent_z: ZIndex,
    ) {
        let Some(computed) = self.computed else {
            return;
        };

        let transform = parent_transform.then(&Transform2D {
            translation: self.translation,
            scale: self.scale,
            origin: self.transform_origin,
        });
        let opacity = parent_opacity * self.opacity;
        let z_index = self.z_index.unwrap_or(parent_z);

        let push = |shape: Shape, shapes: &mut Vec<PaintedShape>| {
            let tree_index = shapes.len();
            shapes.push(PaintedShape {
                shape,
                transform,
                opacity,
                z_index,
                tree_index,
            });
        };

        if let Some(shape) = &self.shape {
            push(shape.clone(), shapes);
        }

        if let Some(Content::Text(text)) = &self.content {
            let rect = Rect::new(
                [
                    computed.rect.min[0] + self.padding.left,
                    computed.rect.min[1] + self.padding.top,
                ],
                [
                    computed.rect.max[0] - self.padding.right,
                    computed.rect.max[1] - self.padding.bottom,
                ],
            );
            push(
                Shape::Text(TextShape {
                    rect,
                    text: text.text.clone(),
                    font_size: text.font_size,
                    color: text.color,
                }),
                shapes,
            );
        }

        for child in &self.children {
            child.collect_recursive(shapes, transform, opacity, z_index);
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::content::TextContent;
    use crate::measure::FixedAdvanceMeasurer;

    fn viewport() -> Rect {
        Rect::from_xywh(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_fixed_size_measure() {
        let node = Node::new().with_size(40.0, 20.0);
        let size = node.measure(
            &mut FixedAdvanceMeasurer::default(),
            IntrinsicSize::new(800.0, 600.0),
        );
        assert_eq!(size, IntrinsicSize::new(40.0, 20.0));
    }

    #[test]
    fn test_fit_content_includes_padding_and_gaps() {
        let node = Node::new()
            .with_padding(Spacing::all(12.0))
            .with_gap(4.0)
            .with_children(vec![
                Node::new().with_size(100.0, 20.0),
                Node::new().with_size(60.0, 30.0),
            ]);
        let size = node.measure(
            &mut FixedAdvanceMeasurer::default(),
            IntrinsicSize::new(800.0, 600.0),
        );
        assert_eq!(size, IntrinsicSize::new(124.0, 78.0));
    }

    #[test]
    fn test_stack_children_share_origin() {
        let mut node = Node::new()
            .with_layout_direction(Layout::Stack)
            .with_children(vec![
                Node::new().with_id("a").with_size(50.0, 10.0),
                Node::new().with_id("b").with_size(20.0, 40.0),
            ]);
        node.compute_layout(viewport(), &mut FixedAdvanceMeasurer::default());

        let a = node.find("a").and_then(|n| n.computed_layout()).map(|c| c.rect);
        let b = node.find("b").and_then(|n| n.computed_layout()).map(|c| c.rect);
        assert_eq!(a.map(|r| r.min), Some([0.0, 0.0]));
        assert_eq!(b.map(|r| r.min), Some([0.0, 0.0]));
        assert_eq!(
            node.computed_layout().map(|c| c.rect),
            Some(Rect::from_xywh(0.0, 0.0, 50.0, 40.0))
        );
    }

    #[test]
    fn test_positioned_child_leaves_flow() {
        let mut node = Node::new().with_children(vec![
            Node::new().with_id("flow").with_size(10.0, 10.0),
            Node::new()
                .with_id("overlay")
                .with_size(100.0, 100.0)
                .with_position(Point::new(300.0, 200.0)),
        ]);
        node.compute_layout(viewport(), &mut FixedAdvanceMeasurer::default());

        assert_eq!(
            node.computed_layout().map(|c| c.rect),
            Some(Rect::from_xywh(0.0, 0.0, 10.0, 10.0))
        );
        let overlay = node.find("overlay").and_then(|n| n.computed_layout());
        assert_eq!(
            overlay.map(|c| c.rect),
            Some(Rect::from_xywh(300.0, 200.0, 100.0, 100.0))
        );
    }

    #[test]
    fn test_text_is_measured() {
        let node = Node::new()
            .with_padding(Spacing::all(2.0))
            .with_content(Content::Text(TextContent::new("abcd").with_font_size(10.0)));
        assert!(node.contains_text());
        let size = node.measure(
            &mut FixedAdvanceMeasurer::default(),
            IntrinsicSize::new(800.0, 600.0),
        );
        assert_eq!(size, IntrinsicSize::new(24.0, 18.0));
    }

    #[test]
    fn test_collect_shapes_orders_by_z_then_tree() {
        let mut node = Node::new()
            .with_layout_direction(Layout::Stack)
            .with_children(vec![
                Node::new()
                    .with_size(10.0, 10.0)
                    .with_z_index(ZIndex::OVERLAY)
                    .with_shape(Shape::rect(Color::rgb(1.0, 0.0, 0.0))),
                Node::new()
                    .with_size(10.0, 10.0)
                    .with_shape(Shape::rect(Color::rgb(0.0, 1.0, 0.0))),
            ]);
        node.compute_layout(viewport(), &mut FixedAdvanceMeasurer::default());

        let shapes = node.collect_shapes();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].z_index, ZIndex::DEFAULT);
        assert_eq!(shapes[1].z_index, ZIndex::OVERLAY);
    }

    #[test]
    fn test_opacity_multiplies_down_the_tree() {
        let mut node = Node::new().with_opacity(0.5).with_child(
            Node::new()
                .with_size(10.0, 10.0)
                .with_opacity(0.5)
                .with_shape(Shape::rect(Color::rgb(1.0, 1.0, 1.0))),
        );
        node.compute_layout(viewport(), &mut FixedAdvanceMeasurer::default());
        assert_eq!(node.collect_shapes()[0].opacity, 0.25);
    }
}
