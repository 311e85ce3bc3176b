//! Ventilation ducts: circular, polar sector, and trapezoidal.
//!
//! Each duct is placed at angle `Alpha0` and repeated `Zh` times; the radial
//! reference `H0` is measured from the machine axis.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::user::polygon_radius_bounds;
use super::{check_finite, check_non_negative, check_positive, check_zh, default_zh, RadiusBounds};
use crate::error::HoleError;

/// Circular duct of diameter `D0` centred at radius `H0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VentilationCirc {
    #[serde(rename = "Zh", default = "default_zh")]
    pub zh: u32,
    #[serde(rename = "Alpha0", default)]
    pub alpha0: f64,
    #[serde(rename = "D0")]
    pub d0: f64,
    #[serde(rename = "H0")]
    pub h0: f64,
}

impl VentilationCirc {
    pub fn new(zh: u32, d0: f64, h0: f64) -> Self {
        Self {
            zh,
            alpha0: 0.0,
            d0,
            h0,
        }
    }

    pub fn check(&self) -> Result<(), HoleError> {
        const CLASS: &str = "VentilationCirc";
        check_zh(CLASS, self.zh)?;
        check_finite(CLASS, "Alpha0", self.alpha0)?;
        check_positive(CLASS, "D0", self.d0)?;
        check_non_negative(CLASS, "H0", self.h0)
    }
}

impl RadiusBounds for VentilationCirc {
    fn radius_bounds(&self) -> Result<(f64, f64), HoleError> {
        let r = self.d0 / 2.0;
        Ok((self.h0 - r, self.h0 + r))
    }
}

/// Annular sector: radial depth `D0` from bottom radius `H0`, angular width `W1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VentilationPolar {
    #[serde(rename = "Zh", default = "default_zh")]
    pub zh: u32,
    #[serde(rename = "Alpha0", default)]
    pub alpha0: f64,
    #[serde(rename = "D0")]
    pub d0: f64,
    #[serde(rename = "H0")]
    pub h0: f64,
    #[serde(rename = "W1")]
    pub w1: f64,
}

impl VentilationPolar {
    pub fn new(zh: u32, d0: f64, h0: f64, w1: f64) -> Self {
        Self {
            zh,
            alpha0: 0.0,
            d0,
            h0,
            w1,
        }
    }

    pub fn check(&self) -> Result<(), HoleError> {
        const CLASS: &str = "VentilationPolar";
        check_zh(CLASS, self.zh)?;
        check_finite(CLASS, "Alpha0", self.alpha0)?;
        check_positive(CLASS, "D0", self.d0)?;
        check_non_negative(CLASS, "H0", self.h0)?;
        check_positive(CLASS, "W1", self.w1)?;
        if self.w1 >= std::f64::consts::TAU {
            return Err(HoleError::OutOfRange {
                class: CLASS,
                field: "W1",
                value: self.w1,
                constraint: "< 2π",
            });
        }
        Ok(())
    }
}

impl RadiusBounds for VentilationPolar {
    fn radius_bounds(&self) -> Result<(f64, f64), HoleError> {
        Ok((self.h0, self.h0 + self.d0))
    }
}

/// Trapezoid: bottom width `W1` at radius `H0`, top width `W2` at `H0 + D0`.
/// Both parallel sides are perpendicular to the duct's radial axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VentilationTrap {
    #[serde(rename = "Zh", default = "default_zh")]
    pub zh: u32,
    #[serde(rename = "Alpha0", default)]
    pub alpha0: f64,
    #[serde(rename = "D0")]
    pub d0: f64,
    #[serde(rename = "H0")]
    pub h0: f64,
    #[serde(rename = "W1")]
    pub w1: f64,
    #[serde(rename = "W2")]
    pub w2: f64,
}

impl VentilationTrap {
    pub fn new(zh: u32, d0: f64, h0: f64, w1: f64, w2: f64) -> Self {
        Self {
            zh,
            alpha0: 0.0,
            d0,
            h0,
            w1,
            w2,
        }
    }

    /// Corners in the duct's own frame (radial axis along +x), counterclockwise.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        let top = self.h0 + self.d0;
        [
            Vector2::new(self.h0, -self.w1 / 2.0),
            Vector2::new(top, -self.w2 / 2.0),
            Vector2::new(top, self.w2 / 2.0),
            Vector2::new(self.h0, self.w1 / 2.0),
        ]
    }

    pub fn check(&self) -> Result<(), HoleError> {
        const CLASS: &str = "VentilationTrap";
        check_zh(CLASS, self.zh)?;
        check_finite(CLASS, "Alpha0", self.alpha0)?;
        check_positive(CLASS, "D0", self.d0)?;
        check_non_negative(CLASS, "H0", self.h0)?;
        check_non_negative(CLASS, "W1", self.w1)?;
        check_non_negative(CLASS, "W2", self.w2)?;
        if self.w1 == 0.0 && self.w2 == 0.0 {
            return Err(HoleError::OutOfRange {
                class: CLASS,
                field: "W2",
                value: self.w2,
                constraint: "W1 + W2 > 0",
            });
        }
        Ok(())
    }
}

impl RadiusBounds for VentilationTrap {
    // Radii are rotation invariant, so Alpha0 is ignored.
    fn radius_bounds(&self) -> Result<(f64, f64), HoleError> {
        polygon_radius_bounds(&self.corners())
    }
}
