//! Basic types for the hex coordinate system that cells live on.
//!
//! Cells are addressed by a pair of signed axial coordinates `(a, b)` plus a
//! vertical floor index. The lattice is "brick-offset": stepping `a` or `b`
//! by one moves to one of the six surrounding cell positions. The projection
//! to world space is:
//!
//! ```text
//! x = radius * cos(pi/6) * (b - a + 2)
//! z = radius * 1.5 * (a + b)
//! y = layer * floor_height
//! ```
//!
//! which is a bijection from `(a, b)` (for a fixed layer) to lattice points
//! at spacing `radius`. The `+2` term is an origin shift inherited from the
//! original layout, kept so that existing worlds keep their exact positions.

use crate::util::unit::{Meter, Radian};
use derive_more::Display;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;

/// cos(pi/6), aka sqrt(3)/2. Also the ratio between a hexagon's side radius
/// (center to edge midpoint) and its vertex radius.
pub const COS_PI_6: f64 = 0.866_025_403_784_438_6;

/// Origin shift applied on the x axis, in cell widths. Keeps the seed grid in
/// positive x.
const ORIGIN_SHIFT: f64 = 2.0;

/// The address of one cell in the library: axial lattice coordinates plus a
/// floor index. Addresses are never stored with derived positions; positions
/// are always recomputed from the address so the two can't drift apart.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, floor {})", "self.a", "self.b", "self.layer")]
pub struct CellAddress {
    pub a: i32,
    pub b: i32,
    pub layer: u32,
}

impl CellAddress {
    pub const fn new(a: i32, b: i32, layer: u32) -> Self {
        Self { a, b, layer }
    }

    /// Project this address to the world-space center of its cell. `radius`
    /// is the cell's center-to-wall distance and `floor_height` the vertical
    /// spacing between floors. Pure; distinct `(a, b)` pairs always map to
    /// distinct `(x, z)`.
    pub fn world_center(self, radius: Meter, floor_height: Meter) -> Point3<f64> {
        let x =
            radius.0 * COS_PI_6 * ((self.b - self.a) as f64 + ORIGIN_SHIFT);
        let z = radius.0 * 1.5 * (self.a + self.b) as f64;
        let y = f64::from(self.layer) * floor_height.0;
        Point3::new(x, y, z)
    }
}

/// One of the six edges of a hexagonal cell, identified by an index in
/// `[0, 6)`. Sides are ordered at 60° rotational increments, with side 0
/// pointing 30° up from the +x axis (towards +z). This is deliberately an
/// index rather than a named enum: the pattern tables are arrays indexed by
/// side, and keeping the index explicit keeps the table lookups direct.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display(fmt = "side {}", "self.0")]
pub struct Side(u8);

/// Unit direction from a cell center to the midpoint of each side, as
/// `(x, z)` components. Index `s` sits at angle `pi/6 + s * pi/3` from the
/// +x axis. Precomputed once; everything that needs a side direction reads
/// this table.
const SIDE_DIRECTIONS: [(f64, f64); 6] = [
    (COS_PI_6, 0.5),
    (0.0, 1.0),
    (-COS_PI_6, 0.5),
    (-COS_PI_6, -0.5),
    (0.0, -1.0),
    (COS_PI_6, -0.5),
];

impl Side {
    pub const COUNT: usize = 6;

    /// All six sides, in emission order.
    pub const ALL: [Self; Self::COUNT] =
        [Self(0), Self(1), Self(2), Self(3), Self(4), Self(5)];

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Unit vector from the cell center to the midpoint of this side. The
    /// vector lies in the horizontal (xz) plane.
    pub fn direction(self) -> Vector3<f64> {
        let (x, z) = SIDE_DIRECTIONS[self.index()];
        Vector3::new(x, 0.0, z)
    }

    /// The Y-axis rotation that turns a wall-segment template to face this
    /// side: `-side * 60°`. Template-specific flips (e.g. the shelf
    /// template's reversed front face) are applied on top of this by the
    /// generator.
    pub fn rotation(self) -> Radian {
        Radian(-(self.0 as f64) * FRAC_PI_3)
    }
}
