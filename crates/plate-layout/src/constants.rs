//! Shared constants for plate drawing
//!
//! This module centralizes the plate format dimensions and drawing defaults
//! used throughout layout and export.

// =============================================================================
// Plate Footprint (ANSI/SLAS 1-2004)
// =============================================================================

/// Outer plate length in mm, parallel to the rows
pub const PLATE_LENGTH_MM: f32 = 127.76;

/// Outer plate width in mm, parallel to the columns
pub const PLATE_WIDTH_MM: f32 = 85.48;

/// Corner radius of the outer plate edge in mm
pub const PLATE_CORNER_RADIUS_MM: f32 = 3.18;

// =============================================================================
// 96-well Format (ANSI/SLAS 4-2004)
// =============================================================================

pub const PLATE_96_ROWS: usize = 8;
pub const PLATE_96_COLS: usize = 12;

/// Distance between neighbouring well centers in mm
pub const PLATE_96_WELL_SEPARATION_MM: f32 = 9.0;

/// Left outer edge to the center of column 1, in mm
pub const PLATE_96_LEFT_PADDING_MM: f32 = 14.38;

/// Top outer edge to the center of row A, in mm
pub const PLATE_96_TOP_PADDING_MM: f32 = 11.24;

pub const PLATE_96_LABEL_FONT_SIZE: f32 = 4.0;

// =============================================================================
// 384-well Format (ANSI/SLAS 4-2004)
// =============================================================================

pub const PLATE_384_ROWS: usize = 16;
pub const PLATE_384_COLS: usize = 24;
pub const PLATE_384_WELL_SEPARATION_MM: f32 = 4.5;
pub const PLATE_384_LEFT_PADDING_MM: f32 = 12.7;
pub const PLATE_384_TOP_PADDING_MM: f32 = 8.99;
pub const PLATE_384_LABEL_FONT_SIZE: f32 = 3.0;

// =============================================================================
// Preset Defaults
// =============================================================================

/// Line thickness of the inner and outer edges in mm
pub const DEFAULT_EDGE_THICKNESS_MM: f32 = 0.75;

/// Distance between the outer and inner edge in mm
pub const DEFAULT_EDGE_DISTANCE_MM: f32 = 1.0;

pub const DEFAULT_WELL_FILL: &str = "white";

// =============================================================================
// Drawing Style
// =============================================================================

pub const EDGE_FILL: &str = "white";
pub const STROKE_COLOR: &str = "black";
pub const LABEL_FONT_FAMILY: &str = "Futura";

/// Row labels sit this many well separations left of column 1
pub const ROW_LABEL_OFFSET_FACTOR: f32 = 0.75;

/// Column labels sit this many well separations above row A
pub const COLUMN_LABEL_OFFSET_FACTOR: f32 = 0.55;

/// Labels are nudged by `font_size / LABEL_BASELINE_DIVISOR` to look centered
pub const LABEL_BASELINE_DIVISOR: f32 = 8.0;

/// Row labels are the letters `A..=Z`
pub const MAX_LABELLED_ROWS: usize = 26;

/// Slack allowed when comparing summed lengths, in mm
pub const LENGTH_TOLERANCE_MM: f32 = 1e-4;

// =============================================================================
// Converter
// =============================================================================

/// Command name looked up on `PATH`
pub const INKSCAPE_COMMAND: &str = "inkscape";

/// Fallback location of the macOS application bundle
pub const INKSCAPE_MACOS_PATH: &str = "/Applications/Inkscape.app/Contents/Resources/bin/inkscape";
