//! Batch evaluation of lamination documents into a results table.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use lamination::LamHole;
use polars::prelude::*;

/// One evaluated lamination.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub name: String,
    pub rint: f64,
    pub rext: f64,
    pub n_holes: u64,
    pub r_min: f64,
    pub r_max: f64,
    pub r_mid: f64,
}

/// Evaluate every lamination; stops at the first invalid document or hole failure.
pub fn evaluate(lams: &[LamHole], check: bool) -> Result<Vec<Row>> {
    let mut rows = Vec::with_capacity(lams.len());
    for (i, lam) in lams.iter().enumerate() {
        let name = lam.name.clone().unwrap_or_else(|| format!("lam-{i}"));
        if check {
            lam.check().with_context(|| format!("checking {name}"))?;
        }
        let (r_min, r_max) = lam
            .yoke_radius_bounds()
            .with_context(|| format!("radius bounds of {name}"))?;
        rows.push(Row {
            name,
            rint: lam.rint,
            rext: lam.rext,
            n_holes: lam.holes.len() as u64,
            r_min,
            r_max,
            r_mid: (r_min + r_max) / 2.0,
        });
    }
    Ok(rows)
}

pub fn to_frame(rows: &[Row]) -> Result<DataFrame> {
    let names: Vec<String> = rows.iter().map(|r| r.name.clone()).collect();
    let col = |f: fn(&Row) -> f64| rows.iter().map(f).collect::<Vec<f64>>();
    let df = DataFrame::new(vec![
        Series::new("name".into(), names),
        Series::new("rint".into(), col(|r| r.rint)),
        Series::new("rext".into(), col(|r| r.rext)),
        Series::new(
            "n_holes".into(),
            rows.iter().map(|r| r.n_holes).collect::<Vec<u64>>(),
        ),
        Series::new("r_min".into(), col(|r| r.r_min)),
        Series::new("r_max".into(), col(|r| r.r_max)),
        Series::new("r_mid".into(), col(|r| r.r_mid)),
    ])?;
    Ok(df)
}

/// Write rows as CSV, or as Parquet when `out` ends with `.parquet`.
pub fn write_rows(rows: &[Row], out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut df = to_frame(rows)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if out.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    }
    Ok(())
}
