//! Plate geometry
//!
//! Pure functions mapping plate parameters to absolute coordinates. Row 0 is
//! the top row (A), column 0 the leftmost column (1), matching how the plate
//! sits on the bench.

use crate::constants::{
    COLUMN_LABEL_OFFSET_FACTOR, LABEL_BASELINE_DIVISOR, MAX_LABELLED_ROWS, ROW_LABEL_OFFSET_FACTOR,
};
use crate::options::PlateParams;

use super::Point;

// =============================================================================
// Figure
// =============================================================================

/// Figure size as (width, height): the plate footprint plus a margin on every side
pub fn viewport_size(params: &PlateParams) -> (f32, f32) {
    (
        params.plate_length_mm + 2.0 * params.margin_mm,
        params.plate_width_mm + 2.0 * params.margin_mm,
    )
}

/// Center of well A1
pub fn grid_origin(params: &PlateParams) -> Point {
    Point::new(
        params.margin_mm + params.left_padding_mm,
        params.margin_mm + params.top_padding_mm,
    )
}

// =============================================================================
// Edges
// =============================================================================

/// Outer edge as (top-left corner, width, height, corner radius)
pub fn outer_edge(params: &PlateParams) -> (Point, f32, f32, f32) {
    (
        Point::new(params.margin_mm, params.margin_mm),
        params.plate_length_mm,
        params.plate_width_mm,
        params.edge_corner_radius_mm,
    )
}

/// Inner edge, inset by `edges_distance_mm` on every side.
///
/// The corner radius shrinks by the same amount and is not clamped.
pub fn inner_edge(params: &PlateParams) -> (Point, f32, f32, f32) {
    let inset = params.edges_distance_mm;
    (
        Point::new(params.margin_mm + inset, params.margin_mm + inset),
        params.plate_length_mm - 2.0 * inset,
        params.plate_width_mm - 2.0 * inset,
        params.edge_corner_radius_mm - inset,
    )
}

// =============================================================================
// Wells
// =============================================================================

pub fn well_center(params: &PlateParams, row: usize, col: usize) -> Point {
    let origin = grid_origin(params);
    Point::new(
        origin.x + col as f32 * params.well_separation_mm,
        origin.y + row as f32 * params.well_separation_mm,
    )
}

pub fn well_radius(params: &PlateParams) -> f32 {
    params.well_diameter_mm / 2.0
}

// =============================================================================
// Labels
// =============================================================================

/// Letter identifying a row (`0 -> 'A'`), `None` past `'Z'`
pub fn row_label(row: usize) -> Option<char> {
    if row < MAX_LABELLED_ROWS {
        Some((b'A' + row as u8) as char)
    } else {
        None
    }
}

/// One-based column number
pub fn column_label(col: usize) -> String {
    (col + 1).to_string()
}

pub fn row_label_position(params: &PlateParams, row: usize) -> Point {
    let origin = grid_origin(params);
    let sep = params.well_separation_mm;
    Point::new(
        origin.x - ROW_LABEL_OFFSET_FACTOR * sep,
        origin.y + row as f32 * sep + params.label_font_size / LABEL_BASELINE_DIVISOR,
    )
}

pub fn column_label_position(params: &PlateParams, col: usize) -> Point {
    let origin = grid_origin(params);
    let sep = params.well_separation_mm;
    Point::new(
        origin.x + col as f32 * sep,
        origin.y
            - COLUMN_LABEL_OFFSET_FACTOR * sep
            - params.label_font_size / LABEL_BASELINE_DIVISOR,
    )
}

// =============================================================================
// Tests
// =============================================================================
