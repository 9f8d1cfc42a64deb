//! Command bodies: analysis, readings template, pan layout.

use eyre::{Result, WrapErr};
use std::path::Path;

use swath_core::{PanTable, SessionCfg, analyze, format_width, prepare_table};

use crate::report::{layout_json, render_json, render_text};

/// Snap a manual width onto the control's range and step, the way a slider
/// bounded to `[floor(N/2)*s, (N-1)*s]` would.
fn clamp_override(width: f64, table: &PanTable) -> f64 {
    let s = table.spacing();
    let n = table.len();
    let lo = (n / 2) as f64 * s;
    let hi = (n - 1) as f64 * s;
    let snapped = ((width / s).round() * s).clamp(lo, hi);
    if (snapped - width).abs() > f64::EPSILON * width.abs().max(1.0) {
        tracing::warn!(requested = width, used = snapped, lo, hi, "override width adjusted to pan grid");
    }
    snapped
}

pub fn run_analyze(
    cfg: &swath_config::Config,
    readings: &Path,
    impute: &[usize],
    width: Option<f64>,
    json: bool,
) -> Result<()> {
    let session = SessionCfg::from(cfg);
    let rows = swath_config::load_readings_csv(readings)
        .wrap_err_with(|| format!("invalid readings {}", readings.display()))?;
    if rows.len() != session.count {
        tracing::info!(
            rows = rows.len(),
            count = session.count,
            "readings row count differs from pans.count; resizing"
        );
    }
    let amounts: Vec<&str> = rows.iter().map(|r| r.amount.as_str()).collect();

    let mut table = prepare_table(&session, &amounts)?;
    let changed = table.impute_selected(impute);
    tracing::debug!(requested = impute.len(), changed, "applied command-line imputations");

    let width = match width.or(session.override_width) {
        Some(w) if w.is_finite() && w >= 0.0 => Some(clamp_override(w, &table)),
        other => other,
    };
    let report = analyze(&table, width)?;
    tracing::info!(
        pans = table.len(),
        optimal_width = report.optimal_width(),
        fallback = report.sweep.fallback,
        "analysis complete"
    );

    if json {
        println!("{}", render_json(&report, session.unit));
    } else {
        print!("{}", render_text(&report, session.unit));
    }
    Ok(())
}

fn layout_table(cfg: &swath_config::Config, count: Option<usize>, spacing: Option<f64>) -> Result<PanTable> {
    let session = SessionCfg::from(cfg);
    PanTable::new(
        count.unwrap_or(session.count),
        spacing.unwrap_or(session.spacing),
    )
}

pub fn run_template(
    cfg: &swath_config::Config,
    count: Option<usize>,
    spacing: Option<f64>,
    json: bool,
) -> Result<()> {
    let table = layout_table(cfg, count, spacing)?;
    let unit: swath_core::Unit = cfg.pans.unit.into();
    if json {
        println!("{}", layout_json(&table, unit));
        return Ok(());
    }
    println!("pan,amount");
    for r in table.readings() {
        println!("{},0", r.number);
        eprintln!("# pan {} at {} {}", r.number, format_width(r.distance), unit);
    }
    Ok(())
}

pub fn run_layout(cfg: &swath_config::Config, json: bool) -> Result<()> {
    let table = layout_table(cfg, None, None)?;
    let unit: swath_core::Unit = cfg.pans.unit.into();
    if json {
        println!("{}", layout_json(&table, unit));
        return Ok(());
    }
    println!("{:>5}  {:>12}", "pan", format!("distance ({unit})"));
    for r in table.readings() {
        println!("{:>5}  {:>12.3}", r.number, r.distance);
    }
    Ok(())
}
