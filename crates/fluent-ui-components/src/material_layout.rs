//! Two-pass composition of a material backdrop under overlay content
//!
//! The content is measured first; the material placeholder is then forced
//! to exactly that size and stacked underneath, so the backdrop never
//! extends past (or falls short of) the surface drawn above it.

use fluent_ui::{
    CornerShape, IntrinsicSize, Layout, MaterialSpec, Measurement, Node, PlacementError, Shape,
    Spacing, UiContext,
};

/// Distance between the content edge and the material, keeping the backdrop inside the border
pub const MATERIAL_INSET: f32 = 1.0;

pub struct MaterialOverlayLayout {
    material: MaterialSpec,
    corner_shape: CornerShape,
    inset: f32,
    content: Node,
}

impl MaterialOverlayLayout {
    pub fn new(material: MaterialSpec, content: Node) -> Self {
        Self {
            material,
            corner_shape: CornerShape::None,
            inset: MATERIAL_INSET,
            content,
        }
    }

    pub fn with_corner_shape(mut self, corner_shape: CornerShape) -> Self {
        self.corner_shape = corner_shape;
        self
    }

    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    /// First pass: the outer size of the content
    pub fn measure(&self, ctx: &mut UiContext) -> Result<IntrinsicSize, PlacementError> {
        ctx.measure_node(&self.content)
            .ok_or(PlacementError::MeasurementUnavailable(Measurement::Content))
    }

    /// Second pass: stack the sized placeholder and the content at one origin
    pub fn compose(self, size: IntrinsicSize) -> Node {
        let placeholder_w = (size.width - self.inset * 2.0).max(0.0);
        let placeholder_h = (size.height - self.inset * 2.0).max(0.0);

        let placeholder = Node::new()
            .with_size(size.width, size.height)
            .with_padding(Spacing::all(self.inset))
            .with_child(
                Node::new()
                    .with_size(placeholder_w, placeholder_h)
                    .with_shape(Shape::material(self.material, self.corner_shape)),
            );

        Node::new()
            .with_layout_direction(Layout::Stack)
            .with_children(vec![placeholder, self.content])
    }

    /// Both passes at once
    pub fn build(self, ctx: &mut UiContext) -> Result<(Node, IntrinsicSize), PlacementError> {
        let size = self.measure(ctx)?;
        Ok((self.compose(size), size))
    }
}
