//! Lamination with holes (`LamHole`).
//!
//! A lamination document carries its two radii and a hole list. Loading is
//! plain serde; validation is explicit (`check`) and never implied by the
//! radial computations, which accept whatever numbers they are given.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HoleError, LamError, LamResult};
use crate::hole::{Hole, RadiusBounds};
use crate::yoke;

/// Lamination described by inner/outer radius and its holes.
///
/// Invariants (not enforced on construction, see `check`):
/// - `rint`, `rext` finite and non-negative; either may be the larger one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LamHole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Rint")]
    pub rint: f64,
    #[serde(rename = "Rext")]
    pub rext: f64,
    #[serde(rename = "hole", default)]
    pub holes: Vec<Hole>,
}

impl LamHole {
    pub fn new(rint: f64, rext: f64) -> Self {
        Self {
            name: None,
            rint,
            rext,
            holes: Vec::new(),
        }
    }

    pub fn with_hole(mut self, hole: impl Into<Hole>) -> Self {
        self.holes.push(hole.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse one lamination document.
    pub fn from_json_str(doc: &str) -> LamResult<Self> {
        Ok(serde_json::from_str(doc)?)
    }

    /// Load one lamination document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> LamResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load a batch: either a single document or an array of documents.
    pub fn batch_from_file<P: AsRef<Path>>(path: P) -> LamResult<Vec<Self>> {
        let contents = std::fs::read_to_string(path)?;
        Self::batch_from_json_str(&contents)
    }

    pub fn batch_from_json_str(doc: &str) -> LamResult<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Batch {
            Many(Vec<LamHole>),
            One(Box<LamHole>),
        }
        Ok(match serde_json::from_str(doc)? {
            Batch::Many(lams) => lams,
            Batch::One(lam) => vec![*lam],
        })
    }

    /// Holes that carry a radial footprint, in list order.
    pub fn shaped_holes(&self) -> impl Iterator<Item = &dyn RadiusBounds> + '_ {
        self.holes.iter().filter_map(Hole::shape)
    }

    /// Radial extent `(r_min, r_max)` of the yoke widened by every shaped hole.
    pub fn yoke_radius_bounds(&self) -> Result<(f64, f64), HoleError> {
        yoke::yoke_bounds(
            self.rext,
            self.rint,
            self.shaped_holes().map(|h| h.radius_bounds()),
        )
    }

    /// Radius of the middle of the yoke [m].
    pub fn comp_radius_mid_yoke(&self) -> Result<f64, HoleError> {
        yoke::mid_yoke_radius(
            self.rext,
            self.rint,
            self.shaped_holes().map(|h| h.radius_bounds()),
        )
    }

    /// Radial thickness spanned by the yoke and its holes [m].
    pub fn comp_height_yoke(&self) -> Result<f64, HoleError> {
        let (r_min, r_max) = self.yoke_radius_bounds()?;
        Ok(r_max - r_min)
    }

    /// Validate radii, then every hole in order. The first failure is returned.
    pub fn check(&self) -> LamResult<()> {
        check_radius("Rint", self.rint)?;
        check_radius("Rext", self.rext)?;
        for (index, hole) in self.holes.iter().enumerate() {
            hole.check()
                .map_err(|source| LamError::Hole { index, source })?;
        }
        Ok(())
    }
}

fn check_radius(field: &'static str, value: f64) -> LamResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(LamError::InvalidRadius { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::{HoleUD, PlainHole, VentilationCirc, VentilationPolar};

    #[test]
    fn mid_yoke_without_holes() {
        let lam = LamHole::new(0.05, 0.1);
        let ry = lam.comp_radius_mid_yoke().unwrap();
        assert!((ry - 0.075).abs() < 1e-15);
    }

    #[test]
    fn swapped_radii_give_same_result() {
        let a = LamHole::new(0.05, 0.1).with_hole(VentilationCirc::new(8, 0.01, 0.02));
        let b = LamHole::new(0.1, 0.05).with_hole(VentilationCirc::new(8, 0.01, 0.02));
        assert_eq!(
            a.comp_radius_mid_yoke().unwrap(),
            b.comp_radius_mid_yoke().unwrap()
        );
    }

    #[test]
    fn hole_below_bore_extends_yoke() {
        // Polar duct spanning [0.05, 0.15] on a [0.1, 0.2] lamination.
        let lam = LamHole::new(0.1, 0.2).with_hole(VentilationPolar::new(4, 0.1, 0.05, 0.3));
        let (lo, hi) = lam.yoke_radius_bounds().unwrap();
        assert_eq!((lo, hi), (0.05, 0.2));
        assert!((lam.comp_radius_mid_yoke().unwrap() - 0.125).abs() < 1e-15);
        assert!((lam.comp_height_yoke().unwrap() - 0.15).abs() < 1e-15);
    }

    #[test]
    fn plain_holes_are_skipped() {
        let base = LamHole::new(0.1, 0.2).with_hole(VentilationCirc::new(8, 0.02, 0.1));
        let with_plain = base.clone().with_hole(PlainHole { zh: 12 });
        assert_eq!(with_plain.shaped_holes().count(), 1);
        assert_eq!(
            base.comp_radius_mid_yoke().unwrap(),
            with_plain.comp_radius_mid_yoke().unwrap()
        );
    }

    #[test]
    fn hole_failure_propagates_unmodified() {
        let lam = LamHole::new(0.1, 0.2)
            .with_hole(VentilationCirc::new(8, 0.02, 0.1))
            .with_hole(HoleUD::new(1, vec![[0.1, 0.0]]));
        assert_eq!(
            lam.comp_radius_mid_yoke(),
            Err(HoleError::DegeneratePolygon { vertices: 1 })
        );
    }

    #[test]
    fn nan_polygon_hole_is_skipped_by_the_fold() {
        let base = LamHole::new(0.1, 0.2).with_hole(VentilationPolar::new(4, 0.1, 0.05, 0.3));
        let with_nan = base
            .clone()
            .with_hole(HoleUD::new(1, vec![[f64::NAN, 0.0], [0.3, 0.0], [0.3, 0.1]]));
        assert!(with_nan.check().is_err());
        assert_eq!(
            with_nan.comp_radius_mid_yoke().unwrap(),
            base.comp_radius_mid_yoke().unwrap()
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let lam = LamHole::new(0.02, 0.1).with_hole(VentilationCirc::new(8, 0.01, 0.05));
        let first = lam.comp_radius_mid_yoke().unwrap();
        let second = lam.comp_radius_mid_yoke().unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn check_reports_radius_then_hole_index() {
        let bad_radius = LamHole::new(-0.01, 0.1);
        assert!(matches!(
            bad_radius.check(),
            Err(LamError::InvalidRadius { field: "Rint", .. })
        ));

        let bad_hole = LamHole::new(0.01, 0.1)
            .with_hole(PlainHole::default())
            .with_hole(VentilationCirc::new(1, 0.0, 0.05));
        match bad_hole.check() {
            Err(LamError::Hole { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(source, HoleError::OutOfRange { field: "D0", .. }));
            }
            other => panic!("expected hole error, got {other:?}"),
        }
    }

    #[test]
    fn document_round_trip_keeps_library_names() {
        let doc = r#"{
            "name": "rotor",
            "Rint": 0.02,
            "Rext": 0.1,
            "hole": [{"__class__": "VentilationCirc", "Zh": 8, "Alpha0": 0.0, "D0": 0.01, "H0": 0.05}]
        }"#;
        let lam = LamHole::from_json_str(doc).unwrap();
        assert_eq!(lam.name.as_deref(), Some("rotor"));
        assert_eq!(lam.holes.len(), 1);
        let value = serde_json::to_value(&lam).unwrap();
        assert_eq!(value["Rext"], 0.1);
        assert_eq!(value["hole"][0]["__class__"], "VentilationCirc");
    }

    #[test]
    fn batch_accepts_single_or_array() {
        let one = LamHole::batch_from_json_str(r#"{"Rint": 0.0, "Rext": 1.0}"#).unwrap();
        assert_eq!(one.len(), 1);
        assert!(one[0].holes.is_empty());
        let many =
            LamHole::batch_from_json_str(r#"[{"Rint": 0.0, "Rext": 1.0}, {"Rint": 1.0, "Rext": 2.0}]"#)
                .unwrap();
        assert_eq!(many.len(), 2);
        assert!(LamHole::batch_from_json_str("42").is_err());
    }
}
