mod generate;
pub mod hex;
pub mod pattern;
pub mod record;
pub mod template;

use crate::{
    config::LayoutConfig, layout::generate::LayoutBuilder,
    layout::record::PlacementRecord, timed,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A fully generated library layout: the ordered placement records plus the
/// configuration they were generated from. Layouts are immutable once
/// generated.
///
/// ## Serialization
/// With the `json` feature enabled, layouts can be serialized to and from
/// JSON ([Layout::to_json] / [Layout::from_json]). The format is
/// snake-cased throughout and the record list preserves generation order, so
/// two serialized layouts from the same config are byte-identical.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    /// The config used to generate this layout. Generation is deterministic
    /// based on the config, and once the layout has been generated, the
    /// config can never change.
    config: LayoutConfig,

    /// The placement records, in emission order.
    records: Vec<PlacementRecord>,
}

impl Layout {
    /// Generate a new layout with the given config. Returns an error if the
    /// config is invalid (non-positive radius, inverted ranges, inset not
    /// inside the radius) or if a pattern table references a template that
    /// isn't bound; in either case the error is reported before any record
    /// is produced.
    ///
    /// This is a pure computation: no I/O, no shared state, and safe to run
    /// concurrently with other generations.
    pub fn generate(config: LayoutConfig) -> anyhow::Result<Self> {
        info!("Generating layout with config {:#?}", config);

        config.validate().context("invalid config")?;

        let records = timed!(
            "Layout generation",
            log::Level::Info,
            LayoutBuilder::new(&config).build()
        )?;

        Ok(Self { config, records })
    }

    /// Get a reference to the config that defines this layout.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The placement records, in emission order.
    pub fn records(&self) -> &[PlacementRecord] {
        &self.records
    }

    /// Consume the layout, returning the owned record list.
    pub fn into_records(self) -> Vec<PlacementRecord> {
        self.records
    }

    /// Deserialize a layout from JSON, as produced by [Layout::to_json].
    /// Will fail if the input is malformed.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing layout")
    }

    /// Serialize this layout into JSON. This is a recoverable format, which
    /// can be loaded back into a [Layout] with [Layout::from_json].
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing layout")
    }
}
