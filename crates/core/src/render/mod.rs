mod svg;
mod unit;

pub use self::unit::{Color3, Point2};

use crate::{
    layout::{hex::CellAddress, pattern::WallKind},
    Layout, VestibuleKind,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Renders a layout as a top-down 2D floor plan, one layer at a time. This
/// is a diagnostic view, mainly useful while authoring pattern tables: every
/// cell of the chosen layer is drawn as a hexagon with its wall segments
/// marked by kind, so periodicity mistakes and unreachable rooms show up at
/// a glance.
///
/// A renderer is created with a particular [RenderConfig] and can then
/// render any number of layouts. Renderers are cheap to create, so to change
/// config, just make a new one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutRenderer {
    render_config: RenderConfig,
}

impl LayoutRenderer {
    /// Ratio between a hexagon's vertex radius (center to corner) and its
    /// side radius (center to edge midpoint): `1 / cos(pi/6)`.
    pub const VERTEX_RADIUS_RATIO: f64 = 1.154_700_538_379_251_7;

    /// Initialize a new renderer with the given options. Returns an error
    /// if the render config is invalid.
    pub fn new(render_config: RenderConfig) -> anyhow::Result<Self> {
        render_config.validate()?;
        Ok(Self { render_config })
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render_config
    }

    /// Project a cell address onto the 2D plan: world x maps to plan x,
    /// world z maps to plan y (so the plan is the world seen from above).
    pub fn cell_position(&self, layout: &Layout, address: CellAddress) -> Point2 {
        let config = layout.config();
        let center =
            address.world_center(config.radius, config.floor_height);
        Point2 {
            x: center.x,
            y: center.z,
        }
    }

    /// Marker color for a wall segment of the given kind.
    pub fn wall_color(&self, kind: WallKind) -> Color3 {
        match kind {
            WallKind::Shelf => Color3::new_int(139, 94, 60),
            WallKind::Doorway => Color3::new_int(40, 40, 40),
        }
    }

    /// Marker color for a vestibule of the given kind.
    pub fn vestibule_color(&self, kind: VestibuleKind) -> Color3 {
        match kind {
            VestibuleKind::Floor => Color3::new_int(72, 144, 240),
            VestibuleKind::Ladder => Color3::new_int(214, 69, 65),
        }
    }

    /// Fill color for cell interiors.
    pub fn cell_color(&self) -> Color3 {
        Color3::new_int(232, 220, 192)
    }

    /// Render one layer of the layout as an SVG floor plan. Returns the SVG
    /// in a string.
    pub fn render_as_svg(&self, layout: &Layout) -> String {
        let svg = svg::layout_to_svg(layout, self);
        svg.to_string()
    }
}

/// Options controlling floor-plan rendering. **This is different from the
/// layout config.** The layout config controls how the library is generated;
/// the render config just controls how it's presented afterwards.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RenderConfig {
    /// Which floor to draw. Layers beyond the layout's own count just
    /// produce an empty plan.
    pub layer: u32,

    /// Draw vestibule markers outside the walls?
    pub show_vestibules: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layer: 0,
            show_vestibules: true,
        }
    }
}
