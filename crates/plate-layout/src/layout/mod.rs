//! Layout calculation for paper plates
//!
//! This module handles all the geometric calculations:
//! - Plate geometry (edges, well centers, label positions)
//! - Per-well fill colors
//! - Emission of drawing primitives in paint order

mod fill;
mod grid;
mod plan;
mod types;

pub use fill::*;
pub use grid::*;
pub use plan::*;
pub use types::*;
