use crate::constants::{LENGTH_TOLERANCE_MM, MAX_LABELLED_ROWS};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full parameter set of a paper plate, all lengths in millimetres
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlateParams {
    // Well grid
    pub rows: usize,
    pub cols: usize,

    // Outer footprint
    pub plate_length_mm: f32,
    pub plate_width_mm: f32,

    // Wells
    pub barrier_thickness_mm: f32,
    pub well_diameter_mm: f32,
    /// Center-to-center distance between neighbouring wells
    pub well_separation_mm: f32,

    // Placement of the grid inside the figure
    /// Blank space between the outer edge and the figure border
    pub margin_mm: f32,
    /// Left outer edge to the center of the first column
    pub left_padding_mm: f32,
    /// Top outer edge to the center of the first row
    pub top_padding_mm: f32,

    // Edges
    pub edge_corner_radius_mm: f32,
    pub edge_thickness_mm: f32,
    /// Gap between the outer and inner edge
    pub edges_distance_mm: f32,

    // Labels
    pub label_font_size: f32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub well_fill: WellFill,
}

impl PlateParams {
    /// Load parameters from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let params = serde_json::from_slice(&bytes)
            .map_err(|e| PlateError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(params)
    }

    /// Save parameters to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PlateError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the parameters.
    ///
    /// Every check runs before anything is drawn, so a plate either builds
    /// completely or not at all.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PlateError::InvalidLayout(format!(
                "Plate needs at least one row and one column, got {}x{}",
                self.rows, self.cols
            )));
        }

        if self.rows > MAX_LABELLED_ROWS {
            return Err(PlateError::InvalidLayout(format!(
                "Row labels run from A to Z, so at most {} rows are supported (got {})",
                MAX_LABELLED_ROWS, self.rows
            )));
        }

        for (name, value) in self.lengths() {
            if !value.is_finite() || value < 0.0 {
                return Err(PlateError::InvalidLayout(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let footprint = self.well_diameter_mm + self.barrier_thickness_mm;
        if self.well_separation_mm + LENGTH_TOLERANCE_MM < footprint {
            return Err(PlateError::InvalidLayout(format!(
                "Wells overlap: separation {} mm is less than diameter {} mm + barrier {} mm",
                self.well_separation_mm, self.well_diameter_mm, self.barrier_thickness_mm
            )));
        }

        if let WellFill::PerWell(matrix) = &self.well_fill {
            if matrix.len() != self.rows {
                return Err(PlateError::InvalidLayout(format!(
                    "Fill matrix has {} rows, plate has {}",
                    matrix.len(),
                    self.rows
                )));
            }
            if let Some((row, colors)) = matrix
                .iter()
                .enumerate()
                .find(|(_, colors)| colors.len() != self.cols)
            {
                return Err(PlateError::InvalidLayout(format!(
                    "Fill matrix row {} has {} colors, plate has {} columns",
                    row,
                    colors.len(),
                    self.cols
                )));
            }
        }

        Ok(())
    }

    fn lengths(&self) -> [(&'static str, f32); 12] {
        [
            ("plate_length_mm", self.plate_length_mm),
            ("plate_width_mm", self.plate_width_mm),
            ("barrier_thickness_mm", self.barrier_thickness_mm),
            ("well_diameter_mm", self.well_diameter_mm),
            ("well_separation_mm", self.well_separation_mm),
            ("margin_mm", self.margin_mm),
            ("left_padding_mm", self.left_padding_mm),
            ("top_padding_mm", self.top_padding_mm),
            ("edge_corner_radius_mm", self.edge_corner_radius_mm),
            ("edge_thickness_mm", self.edge_thickness_mm),
            ("edges_distance_mm", self.edges_distance_mm),
            ("label_font_size", self.label_font_size),
        ]
    }
}
