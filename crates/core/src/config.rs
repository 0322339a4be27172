use crate::{
    layout::{
        pattern::{PatternTable, VestibuleKind, WallKind},
        template::TemplateSet,
    },
    util::unit::Meter,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use validator::{Validate, ValidationError};

/// An inclusive range of lattice coordinates along one axis.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}]", "self.min", "self.max")]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Iterate the coordinates in this range, ascending.
    pub fn iter(self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Number of coordinates in the range. Only meaningful for validated
    /// ranges (`min <= max`). Widened to i64 so the full i32 span doesn't
    /// overflow.
    pub fn len(self) -> usize {
        (self.max as i64 - self.min as i64 + 1).max(0) as usize
    }

    pub fn is_empty(self) -> bool {
        self.min > self.max
    }
}

/// Configuration that defines a layout generation run. Generation is a pure
/// function of this config: two layouts generated with the same config are
/// always identical, record for record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_layout_config"))]
pub struct LayoutConfig {
    /// Distance from a cell's center to the midpoint of each of its walls.
    /// Must be positive; it sets the scale of the whole lattice.
    #[validate(custom = "validate_positive")]
    pub radius: Meter,

    /// How far inside the cell boundary the wall segments sit. Wall-segment
    /// instances are placed at `radius - wall_inset` from the cell center;
    /// vestibules sit at the full `radius`, one wall thickness farther out.
    /// Must be non-negative and smaller than `radius`.
    #[validate(custom = "validate_non_negative")]
    pub wall_inset: Meter,

    /// Vertical spacing between stacked floors.
    #[validate(custom = "validate_positive")]
    pub floor_height: Meter,

    /// Range of the `a` lattice coordinate to generate, inclusive.
    #[validate(custom = "validate_axis_range")]
    pub a_range: AxisRange,

    /// Range of the `b` lattice coordinate to generate, inclusive.
    #[validate(custom = "validate_axis_range")]
    pub b_range: AxisRange,

    /// Number of stacked floors. Any count is allowed; zero yields an empty
    /// layout.
    pub layers: u32,

    /// Which wall segment kind each cell side gets, periodic with period 3
    /// in both lattice axes.
    pub walls: PatternTable<WallKind>,

    /// Which vestibule structure (if any) each cell side gets, same
    /// periodicity as `walls`. Any vestibule kind this table references must
    /// have a template bound in `templates`.
    pub vestibules: PatternTable<Option<VestibuleKind>>,

    /// Template bindings the records refer to.
    pub templates: TemplateSet,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        use WallKind::{Doorway as D, Shelf as S};
        const N: Option<VestibuleKind> = None;
        const F: Option<VestibuleKind> = Some(VestibuleKind::Floor);

        // This is the source of truth for a "nice library": a mostly-shelved
        // grid with one or two doorways per cell and vestibule floors
        // outside a few of them. Whether adjoining cells agree about their
        // shared walls is up to the table author; nothing here enforces it.
        Self {
            radius: Meter(23.0),
            wall_inset: Meter(10.0),
            floor_height: Meter(30.0),
            a_range: AxisRange::new(-4, 4),
            b_range: AxisRange::new(-4, 4),
            layers: 3,
            walls: PatternTable::new([
                [
                    [S, S, D, S, S, D],
                    [S, D, S, S, S, S],
                    [D, S, S, S, D, S],
                ],
                [
                    [S, S, S, D, S, S],
                    [D, S, D, S, S, S],
                    [S, S, S, S, D, S],
                ],
                [
                    [S, D, S, S, S, D],
                    [S, S, S, D, S, S],
                    [D, S, S, S, S, D],
                ],
            ]),
            vestibules: PatternTable::new([
                [
                    [N, N, F, N, N, N],
                    [N, F, N, N, N, N],
                    [F, N, N, N, N, N],
                ],
                [
                    [N, N, N, F, N, N],
                    [N, N, F, N, N, N],
                    [N, N, N, N, F, N],
                ],
                [
                    [N, F, N, N, N, N],
                    [N, N, N, F, N, N],
                    [N, N, N, N, N, F],
                ],
            ]),
            templates: TemplateSet::default(),
        }
    }
}

fn validate_positive(value: &Meter) -> Result<(), ValidationError> {
    if value.0 > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("must be positive"))
    }
}

fn validate_non_negative(value: &Meter) -> Result<(), ValidationError> {
    if value.0 >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("must be non-negative"))
    }
}

fn validate_axis_range(range: &AxisRange) -> Result<(), ValidationError> {
    if range.min <= range.max {
        Ok(())
    } else {
        Err(ValidationError::new("min must not exceed max"))
    }
}

fn validate_layout_config(
    config: &LayoutConfig,
) -> Result<(), ValidationError> {
    // The wall segment has to sit strictly inside the cell boundary
    if config.wall_inset.0 >= config.radius.0 {
        return Err(ValidationError::new(
            "wall_inset must be smaller than radius",
        ));
    }
    Ok(())
}
