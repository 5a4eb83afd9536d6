//! Standard plate formats
//!
//! Both formats share the ANSI/SLAS footprint and only differ in grid size,
//! pitch, padding and label size. A preset is nothing more than a filled-in
//! [`PlateParams`].

use crate::constants::*;
use crate::options::PlateParams;
use crate::types::WellFill;

/// The standard microplate formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlateFormat {
    /// 8 x 12 wells, 9 mm pitch
    Standard96,
    /// 16 x 24 wells, 4.5 mm pitch
    Standard384,
}

impl PlateFormat {
    pub fn name(self) -> &'static str {
        match self {
            PlateFormat::Standard96 => "96-well",
            PlateFormat::Standard384 => "384-well",
        }
    }

    /// Grid dimensions as (rows, cols)
    pub fn grid_dimensions(self) -> (usize, usize) {
        match self {
            PlateFormat::Standard96 => (PLATE_96_ROWS, PLATE_96_COLS),
            PlateFormat::Standard384 => (PLATE_384_ROWS, PLATE_384_COLS),
        }
    }

    pub fn well_count(self) -> usize {
        let (rows, cols) = self.grid_dimensions();
        rows * cols
    }

    pub fn params(self, options: &PresetOptions) -> PlateParams {
        match self {
            PlateFormat::Standard96 => standard_96(options),
            PlateFormat::Standard384 => standard_384(options),
        }
    }
}

/// The values a caller chooses when drawing a standard plate
#[derive(Debug, Clone, PartialEq)]
pub struct PresetOptions {
    pub barrier_thickness_mm: f32,
    pub well_diameter_mm: f32,
    pub margin_mm: f32,
    pub edge_thickness_mm: f32,
    pub edge_distance_mm: f32,
    pub well_fill: WellFill,
}

impl PresetOptions {
    pub fn new(barrier_thickness_mm: f32, well_diameter_mm: f32, margin_mm: f32) -> Self {
        Self {
            barrier_thickness_mm,
            well_diameter_mm,
            margin_mm,
            edge_thickness_mm: DEFAULT_EDGE_THICKNESS_MM,
            edge_distance_mm: DEFAULT_EDGE_DISTANCE_MM,
            well_fill: WellFill::default(),
        }
    }

    pub fn with_edge_thickness(mut self, edge_thickness_mm: f32) -> Self {
        self.edge_thickness_mm = edge_thickness_mm;
        self
    }

    pub fn with_edge_distance(mut self, edge_distance_mm: f32) -> Self {
        self.edge_distance_mm = edge_distance_mm;
        self
    }

    pub fn with_well_fill(mut self, well_fill: impl Into<WellFill>) -> Self {
        self.well_fill = well_fill.into();
        self
    }
}

/// 96-well plate following ANSI/SLAS 4-2004
pub fn standard_96(options: &PresetOptions) -> PlateParams {
    PlateParams {
        rows: PLATE_96_ROWS,
        cols: PLATE_96_COLS,
        plate_length_mm: PLATE_LENGTH_MM,
        plate_width_mm: PLATE_WIDTH_MM,
        barrier_thickness_mm: options.barrier_thickness_mm,
        well_diameter_mm: options.well_diameter_mm,
        well_separation_mm: PLATE_96_WELL_SEPARATION_MM,
        margin_mm: options.margin_mm,
        left_padding_mm: PLATE_96_LEFT_PADDING_MM,
        top_padding_mm: PLATE_96_TOP_PADDING_MM,
        edge_corner_radius_mm: PLATE_CORNER_RADIUS_MM,
        edge_thickness_mm: options.edge_thickness_mm,
        edges_distance_mm: options.edge_distance_mm,
        label_font_size: PLATE_96_LABEL_FONT_SIZE,
        well_fill: options.well_fill.clone(),
    }
}

/// 384-well plate following ANSI/SLAS 4-2004
pub fn standard_384(options: &PresetOptions) -> PlateParams {
    PlateParams {
        rows: PLATE_384_ROWS,
        cols: PLATE_384_COLS,
        plate_length_mm: PLATE_LENGTH_MM,
        plate_width_mm: PLATE_WIDTH_MM,
        barrier_thickness_mm: options.barrier_thickness_mm,
        well_diameter_mm: options.well_diameter_mm,
        well_separation_mm: PLATE_384_WELL_SEPARATION_MM,
        margin_mm: options.margin_mm,
        left_padding_mm: PLATE_384_LEFT_PADDING_MM,
        top_padding_mm: PLATE_384_TOP_PADDING_MM,
        edge_corner_radius_mm: PLATE_CORNER_RADIUS_MM,
        edge_thickness_mm: options.edge_thickness_mm,
        edges_distance_mm: options.edge_distance_mm,
        label_font_size: PLATE_384_LABEL_FONT_SIZE,
        well_fill: options.well_fill.clone(),
    }
}
