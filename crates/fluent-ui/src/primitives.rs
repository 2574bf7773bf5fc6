use crate::color::Color;
use crate::layout::{Transform2D, ZIndex};
use crate::material::MaterialSpec;

/// A 2D point in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0)
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl From<[f32; 2]> for Point {
    fn from(arr: [f32; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }
}

impl From<Point> for [f32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<Point> for glam::Vec2 {
    fn from(point: Point) -> Self {
        glam::Vec2::new(point.x, point.y)
    }
}

/// Stroke definition with width and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Axis-aligned rectangle defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    /// Rectangle from `x, y, width, height`
    ///
    /// ```
    /// # use fluent_ui::Rect;
    /// let r = Rect::from_xywh(100.0, 100.0, 50.0, 20.0);
    /// assert_eq!(r.max, [150.0, 120.0]);
    /// ```
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_min_size([x, y], [width, height])
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn left(&self) -> f32 {
        self.min[0]
    }

    pub fn top(&self) -> f32 {
        self.min[1]
    }

    pub fn right(&self) -> f32 {
        self.max[0]
    }

    pub fn bottom(&self) -> f32 {
        self.max[1]
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
        )
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min[0]
            && point.x <= self.max[0]
            && point.y >= self.min[1]
            && point.y <= self.max[1]
    }

    /// Check if `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min[0] >= self.min[0]
            && other.min[1] >= self.min[1]
            && other.max[0] <= self.max[0]
            && other.max[1] <= self.max[1]
    }

    /// Get the intersection of this rect with another
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min_x = self.min[0].max(other.min[0]);
        let min_y = self.min[1].max(other.min[1]);
        let max_x = self.max[0].min(other.max[0]);
        let max_y = self.max[1].min(other.max[1]);

        if min_x <= max_x && min_y <= max_y {
            Some(Rect {
                min: [min_x, min_y],
                max: [max_x, max_y],
            })
        } else {
            None
        }
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect {
            min: [self.min[0] + amount, self.min[1] + amount],
            max: [self.max[0] - amount, self.max[1] - amount],
        }
    }

    /// Convert min corner to Point
    pub fn min_point(&self) -> Point {
        Point::new(self.min[0], self.min[1])
    }

    /// Convert max corner to Point
    pub fn max_point(&self) -> Point {
        Point::new(self.max[0], self.max[1])
    }
}

/// Corner shape for rectangles
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CornerShape {
    /// Sharp 90-degree corners
    None,
    /// Circular arc rounding with specified radius
    Round(f32),
}

impl CornerShape {
    /// Get the maximum distance this corner shape extends from the corner point
    pub fn extent(&self) -> f32 {
        match self {
            CornerShape::None => 0.0,
            CornerShape::Round(r) => *r,
        }
    }
}

/// Rectangle with corner shape, fill, optional stroke and drop shadow
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRect {
    pub rect: Rect,
    pub corner_shape: CornerShape,
    pub fill: Color,
    pub stroke: Option<Stroke>,
    /// Shadow depth in logical pixels (0 = no shadow)
    pub elevation: f32,
    /// Distance the fill is pulled in from the rect edge (e.g. to sit inside the border)
    pub fill_inset: f32,
}

impl StyledRect {
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self {
            rect,
            corner_shape: CornerShape::None,
            fill,
            stroke: None,
            elevation: 0.0,
            fill_inset: 0.0,
        }
    }

    pub fn with_corner_shape(mut self, corner_shape: CornerShape) -> Self {
        self.corner_shape = corner_shape;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_fill_inset(mut self, inset: f32) -> Self {
        self.fill_inset = inset;
        self
    }
}

/// Background material region (backdrop blur, tint, or opaque fill)
///
/// The actual blur is produced by the rendering backend; this only describes it.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialShape {
    pub rect: Rect,
    pub corner_shape: CornerShape,
    pub material: MaterialSpec,
}

/// Text shape for rendering text content
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub rect: Rect,
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

/// Shapes that can be rendered
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect(StyledRect),
    Material(MaterialShape),
    Text(TextShape),
}

impl Shape {
    /// Create a rectangle shape; the rect is filled in during layout
    pub fn rect(fill: Color) -> Self {
        Shape::Rect(StyledRect::new(Rect::default(), fill))
    }

    /// Create a material shape; the rect is filled in during layout
    pub fn material(material: MaterialSpec, corner_shape: CornerShape) -> Self {
        Shape::Material(MaterialShape {
            rect: Rect::default(),
            corner_shape,
            material,
        })
    }

    /// Move the shape to the given rect
    pub fn set_rect(&mut self, rect: Rect) {
        match self {
            Shape::Rect(r) => r.rect = rect,
            Shape::Material(m) => m.rect = rect,
            Shape::Text(t) => t.rect = rect,
        }
    }

    pub fn rect_ref(&self) -> &Rect {
        match self {
            Shape::Rect(r) => &r.rect,
            Shape::Material(m) => &m.rect,
            Shape::Text(t) => &t.rect,
        }
    }
}

/// A shape ready for a backend: laid-out rect, accumulated transform and opacity
#[derive(Clone, Debug)]
pub struct PaintedShape {
    pub shape: Shape,
    pub transform: Transform2D,
    pub opacity: f32,
    pub z_index: ZIndex,
    /// Position in tree traversal (for stable sort)
    pub tree_index: usize,
}
