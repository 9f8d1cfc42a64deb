//! One-call pipeline: table snapshot in, everything the charts need out.

use crate::config::{SessionCfg, Unit};
use crate::distribution::{Distribution, distribute};
use crate::error::Result;
use crate::optimizer::{SwathSweep, optimize};
use crate::overlap::{OverlapProfile, render_at};
use crate::table::{PanReading, PanTable};

/// Full result of analysing one snapshot of the pan table.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationReport {
    pub readings: Vec<PanReading>,
    pub spacing: f64,
    pub distribution: Distribution,
    pub sweep: SwathSweep,
    /// Overlay at the override width, or at the optimum when none was given.
    pub overlap: OverlapProfile,
    /// True when `overlap` was rendered at a caller-supplied width.
    pub overridden: bool,
}

impl CalibrationReport {
    pub fn optimal_width(&self) -> f64 {
        self.sweep.optimal_width
    }

    /// Operator-facing recommendation line.
    pub fn recommendation(&self, unit: Unit) -> String {
        format!(
            "The optimal swath width is: {} {} between passes.",
            format_width(self.sweep.optimal_width),
            unit.label()
        )
    }
}

/// Render widths without trailing noise: `2`, `2.5`, `0.333`.
pub fn format_width(width: f64) -> String {
    let s = format!("{width:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Run the pipeline on `table`. The table is only read.
pub fn analyze(table: &PanTable, override_width: Option<f64>) -> Result<CalibrationReport> {
    let spacing = table.spacing();
    let distribution = distribute(table);
    let sweep = optimize(&distribution.normalized, spacing);
    let width = override_width.unwrap_or(sweep.optimal_width);
    let overlap = render_at(&distribution.normalized, width, spacing)?;

    tracing::debug!(
        pans = table.len(),
        optimal_width = sweep.optimal_width,
        overlay_width = overlap.width,
        "analysis complete"
    );

    Ok(CalibrationReport {
        readings: table.readings().to_vec(),
        spacing,
        distribution,
        sweep,
        overlap,
        overridden: override_width.is_some(),
    })
}

/// Build the session's table from raw amount strings, then apply the
/// configured imputations. Only the first `session.count` amounts are
/// parsed; missing pans read zero.
pub fn prepare_table<S: AsRef<str>>(session: &SessionCfg, amounts: &[S]) -> Result<PanTable> {
    use eyre::WrapErr;

    let mut table = PanTable::new(session.count, session.spacing)?;
    for (position, text) in amounts.iter().take(session.count).enumerate() {
        table
            .set_amount_str(position, text.as_ref())
            .wrap_err_with(|| format!("pan {}", position + 1))?;
    }
    table.impute_selected(&session.selected);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_width_trims_zeros() {
        assert_eq!(format_width(2.0), "2");
        assert_eq!(format_width(2.5), "2.5");
        assert_eq!(format_width(1.0 / 3.0), "0.333");
        assert_eq!(format_width(0.0), "0");
        assert_eq!(format_width(-0.0), "0");
        assert_eq!(format_width(-1.5), "-1.5");
        assert_eq!(format_width(10.0), "10");
    }
}
