mod batch;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lamination::rand::{draw_laminations, RandomLayoutCfg};
use lamination::LamHole;
use provenance::Payload;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Mid-yoke radius of hole-bearing laminations")]
struct Cmd {
    /// Optional free-form label; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the mid-yoke radius of one lamination document
    MidYoke {
        #[arg(long)]
        input: PathBuf,
        /// Skip parameter validation before computing
        #[arg(long)]
        no_check: bool,
    },
    /// Evaluate a batch file and write a CSV (or .parquet) table
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        no_check: bool,
    },
    /// Write random lamination documents as a JSON array
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 16)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::MidYoke { input, no_check } => mid_yoke(&input, !no_check, cmd.tag),
        Action::Run {
            input,
            out,
            no_check,
        } => run(&input, &out, !no_check, cmd.tag),
        Action::Sample { seed, count, out } => sample(seed, count, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn mid_yoke(input: &Path, check: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), check, tag = ?tag, "mid_yoke");
    let lam = LamHole::from_file(input).with_context(|| format!("loading {}", input.display()))?;
    if check {
        lam.check()?;
    }
    let ry = lam.comp_radius_mid_yoke()?;
    tracing::info!(holes = lam.holes.len(), ry, "mid_yoke_done");
    println!("{ry}");
    Ok(())
}

fn run(input: &Path, out: &Path, check: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), check, tag = ?tag, "run");
    let lams = LamHole::batch_from_file(input)
        .with_context(|| format!("loading {}", input.display()))?;
    let rows = batch::evaluate(&lams, check)?;
    batch::write_rows(&rows, out)?;
    tracing::info!(rows = rows.len(), "run_rows_written");

    let payload = Payload::new(
        serde_json::json!({
            "command": "run",
            "input": input.to_string_lossy(),
            "check": check,
            "rows": rows.len()
        }),
        tag,
    );
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(provenance = %prov.display(), "provenance_written");
    Ok(())
}

fn sample(seed: u64, count: u64, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(seed, count, out = %out.display(), tag = ?tag, "sample");
    let lams = draw_laminations(RandomLayoutCfg::default(), seed, count);
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&lams)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(
        serde_json::json!({
            "command": "sample",
            "seed": seed,
            "count": count
        }),
        tag,
    );
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::document(Payload::new(serde_json::json!({}), tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
