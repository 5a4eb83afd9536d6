use plate_layout::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn preset_plate(format: PlateFormat, diameter: f32) -> Result<PaperPlate> {
    let options = PresetOptions::new(0.5, diameter, 5.0);
    PaperPlate::from_format(format, &options)
}

#[test]
fn test_standard_96_params() {
    let params = standard_96(&PresetOptions::new(0.5, 6.0, 5.0));

    assert_eq!(params.rows, 8);
    assert_eq!(params.cols, 12);
    assert_eq!(params.plate_length_mm, 127.76);
    assert_eq!(params.plate_width_mm, 85.48);
    assert_eq!(params.well_separation_mm, 9.0);
    assert_eq!(params.left_padding_mm, 14.38);
    assert_eq!(params.top_padding_mm, 11.24);
    assert_eq!(params.edge_corner_radius_mm, 3.18);
    assert_eq!(params.label_font_size, 4.0);

    // Caller-supplied values are forwarded unchanged
    assert_eq!(params.barrier_thickness_mm, 0.5);
    assert_eq!(params.well_diameter_mm, 6.0);
    assert_eq!(params.margin_mm, 5.0);
}

#[test]
fn test_standard_384_params() {
    let params = standard_384(&PresetOptions::new(0.5, 3.5, 5.0));

    assert_eq!(params.rows, 16);
    assert_eq!(params.cols, 24);
    assert_eq!(params.plate_length_mm, 127.76);
    assert_eq!(params.plate_width_mm, 85.48);
    assert_eq!(params.well_separation_mm, 4.5);
    assert_eq!(params.left_padding_mm, 12.7);
    assert_eq!(params.top_padding_mm, 8.99);
    assert_eq!(params.edge_corner_radius_mm, 3.18);
    assert_eq!(params.label_font_size, 3.0);
}

#[test]
fn test_preset_defaults() {
    let options = PresetOptions::new(0.5, 6.0, 5.0);
    assert_eq!(options.edge_thickness_mm, 0.75);
    assert_eq!(options.edge_distance_mm, 1.0);
    assert_eq!(options.well_fill, WellFill::Uniform("white".to_string()));

    let params = standard_96(&options);
    assert_eq!(params.edge_thickness_mm, 0.75);
    assert_eq!(params.edges_distance_mm, 1.0);
}

#[test]
fn test_preset_overrides() {
    let options = PresetOptions::new(0.3, 5.0, 2.0)
        .with_edge_thickness(0.5)
        .with_edge_distance(1.5)
        .with_well_fill("#eeeeee");
    let params = standard_384(&options);
    assert_eq!(params.edge_thickness_mm, 0.5);
    assert_eq!(params.edges_distance_mm, 1.5);
    assert_eq!(params.well_fill, WellFill::Uniform("#eeeeee".to_string()));
}

#[test]
fn test_format_dispatch() {
    let options = PresetOptions::new(0.5, 3.5, 5.0);
    let params = PlateFormat::Standard96.params(&options);
    assert_eq!(params, standard_96(&options));
    let params = PlateFormat::Standard384.params(&options);
    assert_eq!(params, standard_384(&options));

    assert_eq!(PlateFormat::Standard96.well_count(), 96);
    assert_eq!(PlateFormat::Standard384.well_count(), 384);
    assert_eq!(PlateFormat::Standard96.grid_dimensions(), (8, 12));
    assert_eq!(PlateFormat::Standard384.name(), "384-well");
}

#[test]
fn test_standard_96_well_positions() {
    let plate = preset_plate(PlateFormat::Standard96, 6.0).unwrap();

    let a1 = plate.well_center(0, 0).unwrap();
    assert_close(a1.x, 19.38);
    assert_close(a1.y, 16.24);

    let h12 = plate.well_center(7, 11).unwrap();
    assert_close(h12.x, 118.38);
    assert_close(h12.y, 79.24);

    assert!(plate.well_center(8, 0).is_none());
    assert!(plate.well_center(0, 12).is_none());
}

#[test]
fn test_standard_384_well_positions() {
    let plate = preset_plate(PlateFormat::Standard384, 3.5).unwrap();

    assert_eq!(plate.rows(), 16);
    assert_eq!(plate.cols(), 24);

    let a1 = plate.well_center(0, 0).unwrap();
    assert_close(a1.x, 17.7);
    assert_close(a1.y, 13.99);

    // P24
    let p24 = plate.well_center(15, 23).unwrap();
    assert_close(p24.x, 17.7 + 23.0 * 4.5);
    assert_close(p24.y, 13.99 + 15.0 * 4.5);
}

#[test]
fn test_384_with_96_sized_wells_overlaps() {
    let result = preset_plate(PlateFormat::Standard384, 6.0);
    assert!(matches!(result, Err(PlateError::InvalidLayout(_))));
}
