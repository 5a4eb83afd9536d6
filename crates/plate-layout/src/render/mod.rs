//! Drawing backends
//!
//! The layout engine only emits [`Primitive`](crate::layout::Primitive)s; a
//! [`Canvas`] decides what to do with them. [`SvgDrawing`] collects them into
//! an SVG document sized in millimetres.

mod canvas;
mod svg;

pub use canvas::Canvas;
pub use svg::SvgDrawing;
