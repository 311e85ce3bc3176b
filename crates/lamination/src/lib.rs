//! Hole-bearing laminations and their mid-yoke radius.
//!
//! Purpose
//! - Model a lamination (`LamHole`) by its inner/outer radii and a collection
//!   of holes, and reduce it to the radius of the yoke midline.
//! - Holes are a tagged union: the plain variant carries no geometry, shaped
//!   variants expose radial bounds through `RadiusBounds`.
//!
//! Layout
//! - `yoke`: the min/max fold shared by every caller (generic over hole types).
//! - `hole`: hole variants, their radial bounds, and validation.
//! - `lam`: the lamination document, JSON loading, and the public operations.
//! - `rand`: reproducible random layouts for experiments and benchmarks.

pub mod error;
pub mod hole;
pub mod lam;
pub mod rand;
pub mod yoke;

pub use error::{HoleError, LamError};
pub use hole::{
    Hole, HoleUD, PlainHole, RadiusBounds, VentilationCirc, VentilationPolar, VentilationTrap,
};
pub use lam::LamHole;
pub use yoke::{mid_yoke_radius, yoke_bounds};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hole::{
        Hole, HoleUD, PlainHole, RadiusBounds, VentilationCirc, VentilationPolar, VentilationTrap,
    };
    pub use crate::lam::LamHole;
    pub use crate::rand::{draw_lamination, HoleCount, RandomLayoutCfg, ReplayToken};
    pub use crate::yoke::{mid_yoke_radius, yoke_bounds};
    pub use crate::{HoleError, LamError};
}
