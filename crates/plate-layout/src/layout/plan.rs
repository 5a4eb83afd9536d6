//! Primitive emission
//!
//! Turns validated plate parameters into the ordered list of drawing
//! commands. Order is paint order: edges first, then wells, then labels.

use crate::constants::{EDGE_FILL, LABEL_FONT_FAMILY, STROKE_COLOR};
use crate::options::PlateParams;

use super::grid::{
    column_label, column_label_position, inner_edge, outer_edge, row_label, row_label_position,
    well_center, well_radius,
};
use super::{
    CircleShape, FillMatrix, Point, Primitive, RectShape, ShapeStyle, TextAnchor, TextLabel,
};

/// All primitives for a plate, in paint order
pub fn plan_plate(params: &PlateParams, fill: &FillMatrix) -> Vec<Primitive> {
    let wells = params.rows * params.cols;
    let mut primitives = Vec::with_capacity(2 + wells + params.rows + params.cols);
    primitives.extend(edge_primitives(params));
    primitives.extend(well_primitives(params, fill));
    primitives.extend(label_primitives(params));
    primitives
}

/// Outer and inner rounded edges
pub fn edge_primitives(params: &PlateParams) -> Vec<Primitive> {
    [outer_edge(params), inner_edge(params)]
        .into_iter()
        .map(|(origin, width, height, corner_radius)| {
            Primitive::Rect(RectShape {
                origin,
                width,
                height,
                corner_radius,
                style: ShapeStyle {
                    fill: EDGE_FILL.to_string(),
                    stroke: STROKE_COLOR.to_string(),
                    stroke_width: params.edge_thickness_mm,
                },
            })
        })
        .collect()
}

/// One circle per well, row by row
pub fn well_primitives(params: &PlateParams, fill: &FillMatrix) -> Vec<Primitive> {
    let radius = well_radius(params);
    let mut wells = Vec::with_capacity(params.rows * params.cols);

    for (row, colors) in fill.iter_rows().enumerate().take(params.rows) {
        for (col, color) in colors.iter().enumerate() {
            wells.push(Primitive::Circle(CircleShape {
                center: well_center(params, row, col),
                radius,
                style: ShapeStyle {
                    fill: color.clone(),
                    stroke: STROKE_COLOR.to_string(),
                    stroke_width: params.barrier_thickness_mm,
                },
            }));
        }
    }

    wells
}

/// Row letters left of the grid, then column numbers above it
pub fn label_primitives(params: &PlateParams) -> Vec<Primitive> {
    let mut labels = Vec::with_capacity(params.rows + params.cols);

    for row in 0..params.rows {
        if let Some(letter) = row_label(row) {
            let insert = row_label_position(params, row);
            labels.push(label(params, letter.to_string(), insert));
        }
    }
    for col in 0..params.cols {
        let insert = column_label_position(params, col);
        labels.push(label(params, column_label(col), insert));
    }

    labels
}

fn label(params: &PlateParams, text: String, insert: Point) -> Primitive {
    Primitive::Text(TextLabel {
        text,
        insert,
        anchor: TextAnchor::Middle,
        font_size: params.label_font_size,
        font_family: LABEL_FONT_FAMILY.to_string(),
        middle_baseline: true,
    })
}
