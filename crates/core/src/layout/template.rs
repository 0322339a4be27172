//! Template bindings. The original application held loaded mesh templates in
//! long-lived fields that were mutated once during asset loading; here the
//! bindings are an immutable piece of configuration handed to the generator,
//! and the generator refuses to run if a kind it needs has no template.

use crate::layout::pattern::{PatternTable, VestibuleKind, WallKind};
use anyhow::anyhow;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The name of a mesh template known to the instancing engine. The engine is
/// responsible for resolving ids to loaded meshes before it consumes any
/// placement records; this crate only ever treats them as opaque names.
#[derive(
    Clone, Debug, Display, From, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// The set of template bindings a layout is generated against. Cell, shelf
/// and doorway templates are always required. Vestibule templates are
/// optional, but a pattern table may only reference a vestibule kind whose
/// template is bound; [TemplateSet::ensure_resolved] checks this before
/// generation emits anything.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSet {
    /// Hexagonal cell shell (floor and ceiling).
    pub cell: TemplateId,
    /// Full shelving wall segment.
    pub shelf: TemplateId,
    /// Doorway wall segment.
    pub doorway: TemplateId,
    /// Flat vestibule floor outside a wall.
    pub vestibule_floor: Option<TemplateId>,
    /// Ladder well between floors. Unbound by default; no template for it
    /// has been authored yet.
    pub vestibule_ladder: Option<TemplateId>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            cell: TemplateId::new("cell"),
            shelf: TemplateId::new("shelf"),
            doorway: TemplateId::new("doorway"),
            vestibule_floor: Some(TemplateId::new("vestibule_floor")),
            vestibule_ladder: None,
        }
    }
}

impl TemplateSet {
    /// The template instanced for a wall segment of the given kind.
    pub fn wall(&self, kind: WallKind) -> &TemplateId {
        match kind {
            WallKind::Shelf => &self.shelf,
            WallKind::Doorway => &self.doorway,
        }
    }

    /// The template instanced for a vestibule of the given kind, or an error
    /// if that kind has no bound template.
    pub fn vestibule(&self, kind: VestibuleKind) -> anyhow::Result<&TemplateId> {
        let binding = match kind {
            VestibuleKind::Floor => &self.vestibule_floor,
            VestibuleKind::Ladder => &self.vestibule_ladder,
        };
        binding
            .as_ref()
            .ok_or_else(|| anyhow!("no template bound for {} vestibule", kind))
    }

    /// Check that every vestibule kind the given table references has a bound
    /// template. Run before emission so that a bad binding fails the whole
    /// generation instead of silently skipping placements.
    pub fn ensure_resolved(
        &self,
        vestibules: &PatternTable<Option<VestibuleKind>>,
    ) -> anyhow::Result<()> {
        for kind in vestibules.values().flatten() {
            self.vestibule(kind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_bindings() {
        let templates = TemplateSet::default();
        assert_eq!(templates.wall(WallKind::Shelf).0, "shelf");
        assert_eq!(templates.wall(WallKind::Doorway).0, "doorway");
    }

    #[test]
    fn test_unbound_ladder_is_an_error() {
        let templates = TemplateSet::default();
        assert!(templates.vestibule(VestibuleKind::Floor).is_ok());
        let error =
            templates.vestibule(VestibuleKind::Ladder).unwrap_err();
        assert!(error.to_string().contains("ladder"));
    }

    #[test]
    fn test_ensure_resolved_scans_the_table() {
        let templates = TemplateSet::default();
        let empty = PatternTable::new([[[None; 6]; 3]; 3]);
        assert!(templates.ensure_resolved(&empty).is_ok());

        let mut entries = [[[None; 6]; 3]; 3];
        entries[2][1][4] = Some(VestibuleKind::Ladder);
        let with_ladder = PatternTable::new(entries);
        assert!(templates.ensure_resolved(&with_ladder).is_err());

        let mut bound = templates;
        bound.vestibule_ladder = Some(TemplateId::new("ladder"));
        assert!(bound.ensure_resolved(&with_ladder).is_ok());
    }
}
