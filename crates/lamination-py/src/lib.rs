//! PyO3 bindings for the `lamination` crate.
//!
//! Notes
//! - Keep bindings thin: documents cross the boundary as JSON strings in the
//!   same layout the CLI reads, so Python callers can pass `json.dumps(obj)`.
//! - Every library error becomes a `ValueError` carrying its message.

use lamination::{LamHole, RadiusBounds, VentilationCirc};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn value_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Mid-yoke radius [m] of a lamination document (JSON string).
#[pyfunction]
#[pyo3(signature = (doc, check = true))]
fn comp_radius_mid_yoke(doc: &str, check: bool) -> PyResult<f64> {
    let lam = LamHole::from_json_str(doc).map_err(value_err)?;
    if check {
        lam.check().map_err(value_err)?;
    }
    lam.comp_radius_mid_yoke().map_err(value_err)
}

/// `(Rmin, Rmax)` of the yoke widened by its holes.
#[pyfunction]
fn yoke_radius_bounds(doc: &str) -> PyResult<(f64, f64)> {
    let lam = LamHole::from_json_str(doc).map_err(value_err)?;
    lam.yoke_radius_bounds().map_err(value_err)
}

/// Radial bounds of a circular duct of diameter `d0` centred at radius `h0`.
#[pyfunction]
fn ventilation_circ_bounds(h0: f64, d0: f64) -> PyResult<(f64, f64)> {
    VentilationCirc::new(1, d0, h0)
        .radius_bounds()
        .map_err(value_err)
}

#[pymodule]
fn lamination_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", lamination::VERSION)?;
    m.add_function(wrap_pyfunction!(comp_radius_mid_yoke, m)?)?;
    m.add_function(wrap_pyfunction!(yoke_radius_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(ventilation_circ_bounds, m)?)?;
    Ok(())
}
