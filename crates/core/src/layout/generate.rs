use crate::{
    config::LayoutConfig,
    layout::{
        hex::{CellAddress, Side},
        pattern::{VestibuleKind, WallKind},
        record::PlacementRecord,
    },
    util::unit::{Meter, Radian},
};
use log::info;
use std::f64::consts::PI;

/// Height of a wall segment's anchor point above the floor plane.
const WALL_LIFT: Meter = Meter(12.0);
/// Vestibules sit just above the floor plane.
const VESTIBULE_LIFT: Meter = Meter(0.5);

/// A single-use builder that walks the configured grid and emits placement
/// records in a fixed nested order: layer, then `a` ascending, then `b`
/// ascending; per cell, the cell shell first, then sides `0..6` with each
/// side's wall segment before its vestibule. The order is part of the
/// output contract, so that generated layouts diff cleanly.
///
/// The builder holds no state beyond a borrow of the config, so any number
/// of builds may run concurrently on different configs.
pub struct LayoutBuilder<'a> {
    config: &'a LayoutConfig,
}

impl<'a> LayoutBuilder<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Upper bound on the record count: one cell shell plus, per side, a
    /// wall and at most one vestibule.
    fn capacity(&self) -> usize {
        let cells = self.config.a_range.len()
            * self.config.b_range.len()
            * self.config.layers as usize;
        cells * (1 + 2 * Side::COUNT)
    }

    /// Emit all placement records for the configured grid. Fails before
    /// emitting anything if the vestibule table references a kind with no
    /// bound template; partial layouts are never returned.
    pub fn build(self) -> anyhow::Result<Vec<PlacementRecord>> {
        let config = self.config;
        config.templates.ensure_resolved(&config.vestibules)?;

        let mut records = Vec::with_capacity(self.capacity());
        for layer in 0..config.layers {
            for a in config.a_range.iter() {
                for b in config.b_range.iter() {
                    self.emit_cell(CellAddress::new(a, b, layer), &mut records)?;
                }
            }
        }

        info!("Generated {} placement records", records.len());
        Ok(records)
    }

    fn emit_cell(
        &self,
        address: CellAddress,
        records: &mut Vec<PlacementRecord>,
    ) -> anyhow::Result<()> {
        let config = self.config;
        let center =
            address.world_center(config.radius, config.floor_height);

        records.push(self.cell_record(address, center));
        for side in Side::ALL {
            records.push(self.wall_record(address, center, side));
            if let Some(kind) =
                config.vestibules.get(address.a, address.b, side)
            {
                records.push(
                    self.vestibule_record(address, center, side, kind)?,
                );
            }
        }
        Ok(())
    }

    fn cell_record(
        &self,
        address: CellAddress,
        center: nalgebra::Point3<f64>,
    ) -> PlacementRecord {
        PlacementRecord {
            template: self.config.templates.cell.clone(),
            instance_key: format!(
                "cell_{}_{}_{}",
                address.a, address.b, address.layer
            ),
            position: center.into(),
            rotation_y: Radian(0.0),
            collidable: true,
            pickable: false,
        }
    }

    fn wall_record(
        &self,
        address: CellAddress,
        center: nalgebra::Point3<f64>,
        side: Side,
    ) -> PlacementRecord {
        let config = self.config;
        let kind = config.walls.get(address.a, address.b, side);

        let inset_radius = config.radius - config.wall_inset;
        let mut position = center + side.direction() * inset_radius.0;
        position.y += WALL_LIFT.0;

        // The shelf template's front face is authored facing the opposite
        // way from the doorway template's, hence the extra half turn
        let flip = match kind {
            WallKind::Shelf => PI,
            WallKind::Doorway => 0.0,
        };

        PlacementRecord {
            template: config.templates.wall(kind).clone(),
            instance_key: format!(
                "wall_{}_{}_{}_s{}",
                address.a,
                address.b,
                address.layer,
                side.index()
            ),
            position: position.into(),
            rotation_y: Radian(side.rotation().0 + flip),
            collidable: true,
            pickable: false,
        }
    }

    fn vestibule_record(
        &self,
        address: CellAddress,
        center: nalgebra::Point3<f64>,
        side: Side,
        kind: VestibuleKind,
    ) -> anyhow::Result<PlacementRecord> {
        let config = self.config;

        // One wall thickness farther out than the wall segment itself
        let mut position = center + side.direction() * config.radius.0;
        position.y += VESTIBULE_LIFT.0;

        Ok(PlacementRecord {
            template: config.templates.vestibule(kind)?.clone(),
            instance_key: format!(
                "vestibule_{}_{}_{}_s{}",
                address.a,
                address.b,
                address.layer,
                side.index()
            ),
            position: position.into(),
            rotation_y: side.rotation(),
            collidable: true,
            pickable: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AxisRange, layout::hex::COS_PI_6};
    use assert_approx_eq::assert_approx_eq;

    /// A config that covers exactly one cell at the origin
    fn single_cell_config() -> LayoutConfig {
        LayoutConfig {
            a_range: AxisRange::new(0, 0),
            b_range: AxisRange::new(0, 0),
            layers: 1,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_deterministic_output() {
        let config = LayoutConfig::default();
        let first = LayoutBuilder::new(&config).build().unwrap();
        let second = LayoutBuilder::new(&config).build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_cell_record_set() {
        let config = single_cell_config();
        let records = LayoutBuilder::new(&config).build().unwrap();

        // One cell shell, six walls, and however many vestibules the
        // residue class (0, 0) calls for (one in the default table)
        let cells = records
            .iter()
            .filter(|r| r.instance_key.starts_with("cell_"))
            .count();
        let walls = records
            .iter()
            .filter(|r| r.instance_key.starts_with("wall_"))
            .count();
        let vestibules = records
            .iter()
            .filter(|r| r.instance_key.starts_with("vestibule_"))
            .count();
        assert_eq!(cells, 1);
        assert_eq!(walls, 6);
        assert_eq!(vestibules, 1);
        assert!(records.len() <= 13);
    }

    #[test]
    fn test_emission_order() {
        let config = single_cell_config();
        let records = LayoutBuilder::new(&config).build().unwrap();

        // Cell shell comes first, then walls in side order, with the lone
        // vestibule (side 2 in the default table) right after its wall
        let keys: Vec<&str> =
            records.iter().map(|r| r.instance_key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "cell_0_0_0",
                "wall_0_0_0_s0",
                "wall_0_0_0_s1",
                "wall_0_0_0_s2",
                "vestibule_0_0_0_s2",
                "wall_0_0_0_s3",
                "wall_0_0_0_s4",
                "wall_0_0_0_s5",
            ]
        );
    }

    #[test]
    fn test_instance_keys_are_unique() {
        let config = LayoutConfig::default();
        let records = LayoutBuilder::new(&config).build().unwrap();
        let mut keys: Vec<&str> =
            records.iter().map(|r| r.instance_key.as_str()).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_wall_placement_math() {
        // radius=23, inset=10: the side-0 wall sits 13 units out from the
        // cell center along the 30° direction, and the default table makes
        // it a shelf, so it gets the half-turn flip
        let config = single_cell_config();
        let records = LayoutBuilder::new(&config).build().unwrap();
        let wall = records
            .iter()
            .find(|r| r.instance_key == "wall_0_0_0_s0")
            .unwrap();

        let center_x = 23.0 * COS_PI_6 * 2.0;
        assert_approx_eq!(wall.position.x, center_x + 13.0 * COS_PI_6);
        assert_approx_eq!(wall.position.z, 13.0 * 0.5);
        assert_approx_eq!(wall.position.y, WALL_LIFT.0);
        assert_approx_eq!(wall.rotation_y.0, PI);
        assert_eq!(wall.template.0, "shelf");
        assert!(wall.collidable);
        assert!(!wall.pickable);
    }

    #[test]
    fn test_vestibule_placement_math() {
        // Vestibules sit at the full radius, one wall thickness beyond the
        // wall segment, with no template flip
        let config = single_cell_config();
        let records = LayoutBuilder::new(&config).build().unwrap();
        let vestibule = records
            .iter()
            .find(|r| r.instance_key == "vestibule_0_0_0_s2")
            .unwrap();

        let center_x = 23.0 * COS_PI_6 * 2.0;
        assert_approx_eq!(vestibule.position.x, center_x - 23.0 * COS_PI_6);
        assert_approx_eq!(vestibule.position.z, 23.0 * 0.5);
        assert_approx_eq!(vestibule.position.y, VESTIBULE_LIFT.0);
        assert_approx_eq!(
            vestibule.rotation_y.0,
            -2.0 * std::f64::consts::FRAC_PI_3
        );
        assert_eq!(vestibule.template.0, "vestibule_floor");
    }

    #[test]
    fn test_wall_kinds_repeat_with_period_three() {
        let config = LayoutConfig {
            a_range: AxisRange::new(0, 8),
            b_range: AxisRange::new(0, 8),
            layers: 1,
            ..LayoutConfig::default()
        };
        let records = LayoutBuilder::new(&config).build().unwrap();

        let template_of = |a: i32, b: i32, s: usize| {
            &records
                .iter()
                .find(|r| r.instance_key == format!("wall_{a}_{b}_0_s{s}"))
                .unwrap()
                .template
        };
        for a in 0..6 {
            for b in 0..6 {
                for s in 0..Side::COUNT {
                    assert_eq!(template_of(a, b, s), template_of(a + 3, b, s));
                    assert_eq!(template_of(a, b, s), template_of(a, b + 3, s));
                }
            }
        }
    }

    #[test]
    fn test_zero_layers_yields_nothing() {
        let config = LayoutConfig {
            layers: 0,
            ..LayoutConfig::default()
        };
        let records = LayoutBuilder::new(&config).build().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unbound_ladder_template_fails_before_emission() {
        let mut config = single_cell_config();
        let mut entries = [[[None; 6]; 3]; 3];
        entries[0][0][1] = Some(VestibuleKind::Ladder);
        config.vestibules = crate::PatternTable::new(entries);

        // Default template set binds no ladder template
        let result = LayoutBuilder::new(&config).build();
        assert!(result.unwrap_err().to_string().contains("ladder"));
    }
}
