//! Periodic pattern tables that decide what gets built on each side of each
//! cell. The library repeats with period 3 in both lattice axes: a cell's
//! treatment depends only on `(a mod 3, b mod 3)` and the side index. The
//! tables are plain data so they stay trivially testable and so table-driven
//! dispatch never degenerates into per-cell branching.

use crate::layout::hex::Side;
use serde::{Deserialize, Serialize};
use strum::Display;

/// What kind of wall segment occupies a cell side. Determines the template
/// instanced there and whether the side is passable.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WallKind {
    /// A full shelving unit; impassable.
    Shelf,
    /// An open doorway to whatever lies beyond; passable.
    Doorway,
}

/// An auxiliary structure placed just beyond a cell's wall on a given side,
/// e.g. the landing outside a doorway. Absence of a vestibule is modeled as
/// `None` in an `Option`, not as a variant here.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VestibuleKind {
    /// A flat vestibule floor outside the wall.
    Floor,
    /// A ladder well connecting floors. Only usable when a ladder template
    /// is bound in the [TemplateSet](crate::TemplateSet).
    Ladder,
}

/// Normalize a lattice coordinate to its residue class in `[0, 3)`.
/// `a` and `b` range over negative integers too, and `%` is remainder rather
/// than modulus, so this must go through `rem_euclid`.
pub(crate) fn residue(n: i32) -> usize {
    n.rem_euclid(3) as usize
}

/// A 3×3 grid of per-side values, one 6-element array per
/// `(a mod 3, b mod 3)` residue class. Lookups normalize the coordinates, so
/// behavior is periodic with period 3 in both axes. The 3×3×6 shape is part
/// of the type, so a malformed table in an external config file fails at
/// deserialization, before any generation work.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternTable<K> {
    entries: [[[K; Side::COUNT]; 3]; 3],
}

impl<K: Copy> PatternTable<K> {
    pub const fn new(entries: [[[K; Side::COUNT]; 3]; 3]) -> Self {
        Self { entries }
    }

    /// Look up the value for a cell side. `a` and `b` are the cell's full
    /// lattice coordinates; they are reduced to residue classes here.
    pub fn get(&self, a: i32, b: i32, side: Side) -> K {
        self.entries[residue(a)][residue(b)][side.index()]
    }

    /// Iterate every entry in the table, in residue-class order.
    pub fn values(&self) -> impl Iterator<Item = K> + '_ {
        self.entries
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|class| class.iter())
            .copied()
    }
}
