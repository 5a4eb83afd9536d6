//! Paper plate construction
//!
//! A [`PaperPlate`] is built once from validated parameters: edges, wells and
//! labels are drawn straight away and the drawing is never modified again.

use crate::layout::{self, FillMatrix, Point, Primitive};
use crate::options::PlateParams;
use crate::presets::{PlateFormat, PresetOptions};
use crate::render::{Canvas, SvgDrawing};
use crate::types::Result;
use log::debug;

/// A fully drawn paper microplate
#[derive(Debug, Clone)]
pub struct PaperPlate {
    params: PlateParams,
    fill: FillMatrix,
    drawing: SvgDrawing,
}

impl PaperPlate {
    /// Validate the parameters and draw the plate.
    ///
    /// Fails with [`PlateError::InvalidLayout`](crate::PlateError::InvalidLayout)
    /// before anything is drawn.
    pub fn new(params: PlateParams) -> Result<Self> {
        params.validate()?;

        let fill = FillMatrix::new(&params.well_fill, params.rows, params.cols)?;
        let (width, height) = layout::viewport_size(&params);
        let mut drawing = SvgDrawing::new(width, height);
        drawing.draw_all(&layout::plan_plate(&params, &fill));

        debug!(
            "Drew {}x{} plate on a {}x{} mm figure ({} primitives)",
            params.rows,
            params.cols,
            width,
            height,
            drawing.primitives().len()
        );

        Ok(Self {
            params,
            fill,
            drawing,
        })
    }

    /// Draw one of the standard formats
    pub fn from_format(format: PlateFormat, options: &PresetOptions) -> Result<Self> {
        Self::new(format.params(options))
    }

    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    pub fn rows(&self) -> usize {
        self.params.rows
    }

    pub fn cols(&self) -> usize {
        self.params.cols
    }

    pub fn fill_matrix(&self) -> &FillMatrix {
        &self.fill
    }

    /// Figure size as (width, height) in mm
    pub fn viewport_size(&self) -> (f32, f32) {
        self.drawing.size_mm()
    }

    /// Center of the well at `row`, `col` (both zero-based)
    pub fn well_center(&self, row: usize, col: usize) -> Option<Point> {
        if row < self.params.rows && col < self.params.cols {
            Some(layout::well_center(&self.params, row, col))
        } else {
            None
        }
    }

    pub fn drawing(&self) -> &SvgDrawing {
        &self.drawing
    }

    pub fn primitives(&self) -> &[Primitive] {
        self.drawing.primitives()
    }

    /// Replay the plate onto another backend
    pub fn render_to<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_all(self.primitives());
    }

    pub fn to_svg_string(&self) -> String {
        self.drawing.to_svg_string()
    }
}
