//! Drawable primitives produced by the layout engine
//!
//! All coordinates are absolute, in millimetres, with the origin at the
//! top-left of the figure and y growing downwards.

/// A point in figure coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fill and stroke of a closed shape
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    /// Any SVG `fill` value
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

/// A rectangle with rounded corners
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    /// Top-left corner
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub style: ShapeStyle,
}

/// A circle; wells are drawn as circles
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub center: Point,
    pub radius: f32,
    pub style: ShapeStyle,
}

/// Horizontal text alignment relative to the insert point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// A single line of text, used for row and column labels
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub insert: Point,
    pub anchor: TextAnchor,
    pub font_size: f32,
    pub font_family: String,
    /// Baseline centered vertically on the insert point
    pub middle_baseline: bool,
}

/// One drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectShape),
    Circle(CircleShape),
    Text(TextLabel),
}

impl Primitive {
    pub fn as_rect(&self) -> Option<&RectShape> {
        match self {
            Primitive::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&CircleShape> {
        match self {
            Primitive::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextLabel> {
        match self {
            Primitive::Text(label) => Some(label),
            _ => None,
        }
    }
}
