use babel::{AxisRange, Layout, LayoutConfig};

#[test]
fn test_layout_gen_default() {
    let layout = Layout::generate(LayoutConfig::default()).unwrap();
    // 9*9 cells on 3 floors; with the default tables every cell gets one
    // shell, six walls, and exactly one vestibule
    assert_eq!(layout.records().len(), 9 * 9 * 3 * 8);
}

#[test]
fn test_layout_gen_large() {
    let config = LayoutConfig {
        a_range: AxisRange::new(-10, 10),
        b_range: AxisRange::new(-10, 10),
        layers: 5,
        ..Default::default()
    };
    let layout = Layout::generate(config).unwrap();
    assert_eq!(layout.records().len(), 21 * 21 * 5 * 8);
}

#[test]
fn test_layout_gen_tall_tower() {
    // Layer count is unbounded, so a single-cell 600-floor tower is valid
    let config = LayoutConfig {
        a_range: AxisRange::new(0, 0),
        b_range: AxisRange::new(0, 0),
        layers: 600,
        ..Default::default()
    };
    let layout = Layout::generate(config).unwrap();
    assert_eq!(layout.records().len(), 600 * 8);
}

#[test]
fn test_layout_gen_single_floor_slice() {
    // A 1-wide strip exercises negative coordinates and residue wrapping
    let config = LayoutConfig {
        a_range: AxisRange::new(-7, 7),
        b_range: AxisRange::new(0, 0),
        layers: 1,
        ..Default::default()
    };
    let layout = Layout::generate(config).unwrap();
    assert_eq!(layout.records().len(), 15 * 8);

    // Cells three apart in `a` get identical wall treatments
    let template_of = |key: &str| {
        &layout
            .records()
            .iter()
            .find(|r| r.instance_key == key)
            .unwrap()
            .template
    };
    for s in 0..6 {
        assert_eq!(
            template_of(&format!("wall_-6_0_0_s{}", s)),
            template_of(&format!("wall_-3_0_0_s{}", s)),
        );
        assert_eq!(
            template_of(&format!("wall_-3_0_0_s{}", s)),
            template_of(&format!("wall_0_0_0_s{}", s)),
        );
    }
}
