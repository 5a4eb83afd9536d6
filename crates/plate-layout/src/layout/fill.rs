use crate::types::{PlateError, Result, WellFill};

/// Per-well fill colors, always exactly `rows x cols`
#[derive(Debug, Clone, PartialEq)]
pub struct FillMatrix {
    rows: usize,
    cols: usize,
    colors: Vec<String>,
}

impl FillMatrix {
    /// Build the matrix for a `rows x cols` grid.
    ///
    /// A uniform fill is broadcast to every well. A per-well fill is copied,
    /// so later changes to the caller's matrix never reach the plate.
    pub fn new(fill: &WellFill, rows: usize, cols: usize) -> Result<Self> {
        let colors = match fill {
            WellFill::Uniform(color) => vec![color.clone(); rows * cols],
            WellFill::PerWell(matrix) => {
                if matrix.len() != rows || matrix.iter().any(|row| row.len() != cols) {
                    return Err(PlateError::InvalidLayout(format!(
                        "Fill matrix must be {}x{}",
                        rows, cols
                    )));
                }
                matrix.iter().flatten().cloned().collect()
            }
        };

        Ok(Self { rows, cols, colors })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.rows && col < self.cols {
            Some(&self.colors[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate the rows of the matrix, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.colors.chunks(self.cols.max(1))
    }

    /// Copy back into the nested `[row][col]` form
    pub fn to_nested(&self) -> Vec<Vec<String>> {
        self.iter_rows().map(|row| row.to_vec()).collect()
    }
}
