//! Mid-yoke radius fold.
//!
//! The fold starts from the lamination's own radial extent and widens it with
//! every hole's radial bounds. Both hole bounds enter both accumulators, so a
//! pair returned as `(max, min)` is handled like `(min, max)`.
//!
//! NaN policy: an accumulator is only replaced by a strictly smaller (larger)
//! value, and every comparison with NaN is false. A NaN hole bound or a NaN
//! `rint` is therefore skipped once the accumulator is finite, while a NaN
//! `rext` seeds both accumulators and poisons the result.

/// Keep `acc` unless `x` is strictly smaller.
#[inline]
fn fold_min(acc: f64, x: f64) -> f64 {
    if x < acc {
        x
    } else {
        acc
    }
}

/// Keep `acc` unless `x` is strictly larger.
#[inline]
fn fold_max(acc: f64, x: f64) -> f64 {
    if x > acc {
        x
    } else {
        acc
    }
}

/// Accumulated radial bounds `(r_min, r_max)` of a lamination and its holes.
///
/// `holes` yields one bound pair per shaped hole; plain holes must be left out
/// by the caller. The first `Err` is returned as is and stops the scan.
pub fn yoke_bounds<I, E>(rext: f64, rint: f64, holes: I) -> Result<(f64, f64), E>
where
    I: IntoIterator<Item = Result<(f64, f64), E>>,
{
    let mut r_min = fold_min(rext, rint);
    let mut r_max = fold_max(rext, rint);
    for bounds in holes {
        let (a, b) = bounds?;
        r_min = fold_min(fold_min(r_min, a), b);
        r_max = fold_max(fold_max(r_max, a), b);
    }
    Ok((r_min, r_max))
}

/// Radius of the yoke midline: the average of [`yoke_bounds`].
///
/// Pre: `rext`, `rint` finite (their order is irrelevant).
/// Post: `(rext + rint) / 2` when `holes` is empty.
pub fn mid_yoke_radius<I, E>(rext: f64, rint: f64, holes: I) -> Result<f64, E>
where
    I: IntoIterator<Item = Result<(f64, f64), E>>,
{
    let (r_min, r_max) = yoke_bounds(rext, rint, holes)?;
    Ok((r_min + r_max) / 2.0)
}
