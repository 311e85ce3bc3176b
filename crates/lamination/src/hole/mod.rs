//! Holes cut into a lamination.
//!
//! Purpose
//! - A closed set of hole variants behind one tagged enum (`Hole`).
//! - Only shaped variants carry a radial footprint; they implement
//!   `RadiusBounds`. The plain variant is a unit-like record and is skipped by
//!   every radial computation.
//!
//! Conventions
//! - Lengths in meters, angles in radians, polar origin at the machine axis.
//! - Field names on the wire follow the CAD library documents (`Zh`, `H0`, ...);
//!   the variant tag is `"__class__"`.
//! - `Zh` and `Alpha0` describe angular placement only; they never change the
//!   radial bounds.

mod user;
mod vent;

use serde::{Deserialize, Serialize};

use crate::error::HoleError;

pub use user::HoleUD;
pub use vent::{VentilationCirc, VentilationPolar, VentilationTrap};

/// Capability of holes with a geometric footprint.
pub trait RadiusBounds {
    /// Smallest and largest distance from the machine axis spanned by the hole.
    ///
    /// Callers must not assume the pair is ordered.
    fn radius_bounds(&self) -> Result<(f64, f64), HoleError>;
}

/// Hole without geometry (placeholder in a hole list).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlainHole {
    #[serde(rename = "Zh", default = "default_zh")]
    pub zh: u32,
}

impl Default for PlainHole {
    fn default() -> Self {
        Self { zh: default_zh() }
    }
}

pub(crate) fn default_zh() -> u32 {
    1
}

/// Any hole a lamination may carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Hole {
    #[serde(rename = "Hole")]
    Plain(PlainHole),
    VentilationCirc(VentilationCirc),
    VentilationPolar(VentilationPolar),
    VentilationTrap(VentilationTrap),
    #[serde(rename = "HoleUD")]
    UserDefined(HoleUD),
}

impl Hole {
    /// Class name as written in documents.
    pub fn class_name(&self) -> &'static str {
        match self {
            Hole::Plain(_) => "Hole",
            Hole::VentilationCirc(_) => "VentilationCirc",
            Hole::VentilationPolar(_) => "VentilationPolar",
            Hole::VentilationTrap(_) => "VentilationTrap",
            Hole::UserDefined(_) => "HoleUD",
        }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Hole::Plain(_))
    }

    /// Number of identical holes around the circumference.
    pub fn zh(&self) -> u32 {
        match self {
            Hole::Plain(h) => h.zh,
            Hole::VentilationCirc(h) => h.zh,
            Hole::VentilationPolar(h) => h.zh,
            Hole::VentilationTrap(h) => h.zh,
            Hole::UserDefined(h) => h.zh,
        }
    }

    /// The radius-bounds capability, `None` for the plain variant.
    pub fn shape(&self) -> Option<&dyn RadiusBounds> {
        match self {
            Hole::Plain(_) => None,
            Hole::VentilationCirc(h) => Some(h as &dyn RadiusBounds),
            Hole::VentilationPolar(h) => Some(h as &dyn RadiusBounds),
            Hole::VentilationTrap(h) => Some(h as &dyn RadiusBounds),
            Hole::UserDefined(h) => Some(h as &dyn RadiusBounds),
        }
    }

    /// Radial bounds of shaped holes; `None` for the plain variant.
    pub fn radius_bounds(&self) -> Option<Result<(f64, f64), HoleError>> {
        self.shape().map(|h| h.radius_bounds())
    }

    /// Validate parameters (finite values, admissible ranges).
    pub fn check(&self) -> Result<(), HoleError> {
        match self {
            Hole::Plain(h) => check_zh("Hole", h.zh),
            Hole::VentilationCirc(h) => h.check(),
            Hole::VentilationPolar(h) => h.check(),
            Hole::VentilationTrap(h) => h.check(),
            Hole::UserDefined(h) => h.check(),
        }
    }
}

impl From<PlainHole> for Hole {
    fn from(h: PlainHole) -> Self {
        Hole::Plain(h)
    }
}
impl From<VentilationCirc> for Hole {
    fn from(h: VentilationCirc) -> Self {
        Hole::VentilationCirc(h)
    }
}
impl From<VentilationPolar> for Hole {
    fn from(h: VentilationPolar) -> Self {
        Hole::VentilationPolar(h)
    }
}
impl From<VentilationTrap> for Hole {
    fn from(h: VentilationTrap) -> Self {
        Hole::VentilationTrap(h)
    }
}
impl From<HoleUD> for Hole {
    fn from(h: HoleUD) -> Self {
        Hole::UserDefined(h)
    }
}

// Parameter checks shared by the variants.

pub(crate) fn check_zh(class: &'static str, zh: u32) -> Result<(), HoleError> {
    if zh == 0 {
        return Err(HoleError::OutOfRange {
            class,
            field: "Zh",
            value: 0.0,
            constraint: ">= 1",
        });
    }
    Ok(())
}

pub(crate) fn check_finite(
    class: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), HoleError> {
    if !value.is_finite() {
        return Err(HoleError::NonFinite {
            class,
            field,
            value,
        });
    }
    Ok(())
}

pub(crate) fn check_positive(
    class: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), HoleError> {
    check_finite(class, field, value)?;
    if value <= 0.0 {
        return Err(HoleError::OutOfRange {
            class,
            field,
            value,
            constraint: "> 0",
        });
    }
    Ok(())
}

pub(crate) fn check_non_negative(
    class: &'static str,
    field: &'static str,
    value: f64,
) -> Result<(), HoleError> {
    check_finite(class, field, value)?;
    if value < 0.0 {
        return Err(HoleError::OutOfRange {
            class,
            field,
            value,
            constraint: ">= 0",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
