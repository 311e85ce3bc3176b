//! User-defined polygonal hole (`HoleUD`).

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{check_finite, check_zh, default_zh, RadiusBounds};
use crate::error::HoleError;

/// Closed polygon given by its vertices in lamination coordinates.
/// Orientation and convexity are not required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoleUD {
    #[serde(rename = "Zh", default = "default_zh")]
    pub zh: u32,
    pub vertices: Vec<[f64; 2]>,
}

impl HoleUD {
    pub fn new(zh: u32, vertices: Vec<[f64; 2]>) -> Self {
        Self { zh, vertices }
    }

    pub fn points(&self) -> Vec<Vector2<f64>> {
        self.vertices
            .iter()
            .map(|&[x, y]| Vector2::new(x, y))
            .collect()
    }

    pub fn check(&self) -> Result<(), HoleError> {
        const CLASS: &str = "HoleUD";
        check_zh(CLASS, self.zh)?;
        if self.vertices.len() < 3 {
            return Err(HoleError::DegeneratePolygon {
                vertices: self.vertices.len(),
            });
        }
        for &[x, y] in &self.vertices {
            check_finite(CLASS, "vertices", x)?;
            check_finite(CLASS, "vertices", y)?;
        }
        Ok(())
    }
}

impl RadiusBounds for HoleUD {
    fn radius_bounds(&self) -> Result<(f64, f64), HoleError> {
        polygon_radius_bounds(&self.points())
    }
}

/// Exact radial bounds of a closed polygon around the origin.
///
/// - max: largest vertex norm (the distance is convex along each edge).
/// - min: 0 if the polygon encloses the origin, else the smallest
///   point-to-segment distance over all edges.
///
/// NaN coordinates yield `(NaN, NaN)` rather than a partial finite extent;
/// the yoke fold then skips the pair.
pub(crate) fn polygon_radius_bounds(vertices: &[Vector2<f64>]) -> Result<(f64, f64), HoleError> {
    let n = vertices.len();
    if n < 3 {
        return Err(HoleError::DegeneratePolygon { vertices: n });
    }
    if vertices.iter().any(|v| v.x.is_nan() || v.y.is_nan()) {
        return Ok((f64::NAN, f64::NAN));
    }
    let r_max = vertices
        .iter()
        .map(|v| v.norm())
        .fold(f64::NEG_INFINITY, f64::max);
    if encloses_origin(vertices) {
        return Ok((0.0, r_max));
    }
    let r_min = (0..n)
        .map(|k| segment_distance_to_origin(vertices[k], vertices[(k + 1) % n]))
        .fold(f64::INFINITY, f64::min);
    Ok((r_min, r_max))
}

#[inline]
fn segment_distance_to_origin(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let d = b - a;
    let len2 = d.norm_squared();
    if len2 <= 0.0 {
        return a.norm();
    }
    let t = (-a.dot(&d) / len2).clamp(0.0, 1.0);
    (a + d * t).norm()
}

/// Crossing-number test of the origin against the polygon (ray along +x).
fn encloses_origin(vertices: &[Vector2<f64>]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    for k in 0..n {
        let a = vertices[k];
        let b = vertices[(k + 1) % n];
        if (a.y > 0.0) != (b.y > 0.0) {
            let x = a.x - a.y * (b.x - a.x) / (b.y - a.y);
            if x > 0.0 {
                inside = !inside;
            }
        }
    }
    inside
}
