use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// Unit used for world-space distances (cell radius, wall inset, floor
/// spacing, etc.).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{} m", "self.0")]
pub struct Meter(pub f64);

/// Unit used for rotations around the vertical (Y) axis. Positive values
/// rotate counterclockwise when viewed from above. Values are not normalized
/// into any particular interval; they are emitted exactly as computed so that
/// output stays reproducible.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{} rad", "self.0")]
pub struct Radian(pub f64);

/// A point in 3D world space. The Y axis is vertical. This is the type that
/// appears in generator output; internal math uses [nalgebra] types and
/// converts at the boundary.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(other: nalgebra::Point3<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
            z: other.z,
        }
    }
}
