use babel::{AxisRange, Layout, LayoutConfig, Meter};
use validator::ValidationErrors;

#[test]
fn test_config_validation() {
    let config = LayoutConfig {
        radius: Meter(0.0),            // invalid
        wall_inset: Meter(-1.0),       // invalid
        floor_height: Meter(30.0),     // valid
        a_range: AxisRange::new(4, -4), // invalid (inverted)
        b_range: AxisRange::new(0, 8), // valid
        layers: 10_000,                // valid (count is unbounded)
        ..Default::default()
    };

    // This is a bit of a lazy check but it works well enough
    let err = Layout::generate(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["a_range", "radius", "wall_inset"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_inset_must_sit_inside_the_cell() {
    // All fields are individually fine, but the inset reaches past the
    // cell boundary
    let config = LayoutConfig {
        radius: Meter(23.0),
        wall_inset: Meter(23.0),
        ..Default::default()
    };
    assert!(Layout::generate(config).is_err());
}
