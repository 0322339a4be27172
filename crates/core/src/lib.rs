//! Babel is a hex cell-based library layout generation system. This crate
//! contains all the core layout logic: given a [LayoutConfig], it produces an
//! ordered sequence of [PlacementRecord]s describing where a rendering engine
//! should instance each structural element (cell shells, wall segments,
//! vestibules). Engine integration lives elsewhere.
//!
//! ```
//! use babel::{Layout, LayoutConfig};
//!
//! let config = LayoutConfig::default();
//! let layout = Layout::generate(config).unwrap();
//! println!("{} placements", layout.records().len());
//! // From here you can feed the records to whatever instancing engine you
//! // like.
//! ```
//!
//! Generation is fully deterministic: two runs with the same config produce
//! identical record sequences, in a fixed order (layer, then `a` ascending,
//! then `b` ascending, then cell shell, then sides `0..6` with the wall
//! segment before the vestibule). See [LayoutConfig] for the available knobs.

mod config;
mod layout;
#[cfg(feature = "svg")]
mod render;
mod util;

pub use crate::{
    config::{AxisRange, LayoutConfig},
    layout::{
        hex::{CellAddress, Side},
        pattern::{PatternTable, VestibuleKind, WallKind},
        record::PlacementRecord,
        template::{TemplateId, TemplateSet},
        Layout,
    },
    util::unit::{Meter, Point3, Radian},
};
#[cfg(feature = "svg")]
pub use crate::render::{LayoutRenderer, RenderConfig};
