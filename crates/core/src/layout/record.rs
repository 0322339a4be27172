use crate::{
    layout::template::TemplateId,
    util::unit::{Point3, Radian},
};
use serde::{Deserialize, Serialize};

/// One placement instruction for the instancing engine: instance `template`
/// at `position`, rotated `rotation_y` around the vertical axis, with the
/// given collision/picking flags, named `instance_key`.
///
/// Records can't be constructed directly; they are only produced by layout
/// generation (see [Layout::generate](crate::Layout::generate)) and never
/// mutated afterwards. Every field is a pure function of the generating cell
/// address (plus side, for wall/vestibule records) and the layout config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// The template mesh to instance.
    pub template: TemplateId,

    /// Unique name for this instance, derived deterministically from
    /// `(a, b, layer, side, role)`. The engine uses it to name and
    /// deduplicate instances.
    pub instance_key: String,

    /// World-space position of the instance.
    pub position: Point3,

    /// Rotation around the vertical axis, in radians.
    pub rotation_y: Radian,

    /// Whether the engine should enable collision checks on the instance.
    pub collidable: bool,

    /// Whether the instance should respond to picking/raycasts.
    pub pickable: bool,
}
