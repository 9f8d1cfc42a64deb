//! Human and JSON renderings of a calibration report.

use serde_json::{Value, json};
use std::fmt::Write as _;

use swath_core::{CalibrationReport, PanTable, Unit, format_width};

pub fn render_text(report: &CalibrationReport, unit: Unit) -> String {
    let mut out = String::new();
    let d = &report.distribution;

    let _ = writeln!(out, "Pan readings (spacing {} {unit})", format_width(report.spacing));
    let _ = writeln!(
        out,
        "{:>5}  {:>12}  {:>10}  {:>11}  {:>10}",
        "pan",
        format!("distance ({unit})"),
        "amount",
        "symmetric",
        "normalized"
    );
    for (i, r) in report.readings.iter().enumerate() {
        let sym = d.symmetrized.get(i).copied().unwrap_or(0.0);
        let norm = d.normalized.values().get(i).copied().unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:>5}  {:>12.3}  {:>10.3}  {:>11.3}  {:>10.4}",
            r.number, r.distance, r.amount, sym, norm
        );
    }
    if d.normalized.is_degenerate() {
        let _ = writeln!(out, "No distribution: every pan reads zero.");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>12}  {:>8}", format!("width ({unit})"), "CV (%)");
    let best = report.sweep.optimal_index();
    for (idx, w) in report.sweep.widths_in_units().iter().enumerate() {
        let cv = if report.sweep.fallback {
            "-".to_string()
        } else {
            report
                .sweep
                .cvs
                .get(idx)
                .map_or_else(|| "-".to_string(), |cv| format!("{cv:.2}"))
        };
        let mark = if idx == best { "  <" } else { "" };
        let _ = writeln!(out, "{:>12}  {:>8}{mark}", format_width(*w), cv);
    }
    if report.sweep.fallback {
        let _ = writeln!(out, "All candidate widths are equally even; defaulting to the narrowest.");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.recommendation(unit));

    let o = &report.overlap;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Expected distribution between swaths at {} {unit}{} (CV {:.2}%)",
        format_width(o.width),
        if report.overridden { " (manual)" } else { "" },
        o.cv
    );
    for (x, y) in o.xs.iter().zip(&o.ys) {
        let _ = writeln!(out, "{:>12.3}  {:>10.4}", x, y);
    }
    out
}

pub fn render_json(report: &CalibrationReport, unit: Unit) -> Value {
    let readings: Vec<Value> = report
        .readings
        .iter()
        .map(|r| json!({ "number": r.number, "amount": r.amount, "distance": r.distance }))
        .collect();
    let (lo, hi, step) = report.sweep.override_bounds();
    json!({
        "unit": unit.label(),
        "spacing": report.spacing,
        "readings": readings,
        "symmetrized": report.distribution.symmetrized,
        "normalized": report.distribution.normalized.values(),
        "degenerate": report.distribution.normalized.is_degenerate(),
        "sweep": {
            "widths": report.sweep.widths_in_units(),
            "cvs": report.sweep.cvs,
            "fallback": report.sweep.fallback,
            "override_bounds": { "min": lo, "max": hi, "step": step },
        },
        "optimal_width": report.optimal_width(),
        "recommendation": report.recommendation(unit),
        "overlap": {
            "width": report.overlap.width,
            "manual": report.overridden,
            "cv": report.overlap.cv,
            "xs": report.overlap.xs,
            "ys": report.overlap.ys,
        },
    })
}

pub fn layout_json(table: &PanTable, unit: Unit) -> Value {
    let pans: Vec<Value> = table
        .readings()
        .iter()
        .map(|r| json!({ "number": r.number, "distance": r.distance }))
        .collect();
    json!({ "unit": unit.label(), "spacing": table.spacing(), "pans": pans })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swath_core::analyze;

    fn triangle() -> CalibrationReport {
        let table = PanTable::from_amounts(&[2.0, 4.0, 6.0, 4.0, 2.0], 1.0).unwrap();
        analyze(&table, None).unwrap()
    }

    #[test]
    fn text_report_contains_recommendation_and_marker() {
        let text = render_text(&triangle(), Unit::Meter);
        assert!(text.contains("The optimal swath width is: 2 m between passes."));
        assert!(text.contains("22.22"));
        assert!(text.contains("  <"));
    }

    #[test]
    fn json_report_has_series() {
        let v = render_json(&triangle(), Unit::Foot);
        assert_eq!(v["optimal_width"].as_f64(), Some(2.0));
        assert_eq!(v["sweep"]["widths"].as_array().map(Vec::len), Some(3));
        assert_eq!(v["overlap"]["xs"].as_array().map(Vec::len), Some(5));
        assert_eq!(v["unit"], "ft");
        assert_eq!(v["degenerate"], false);
    }

    #[test]
    fn degenerate_report_says_so() {
        let table = PanTable::new(4, 1.0).unwrap();
        let text = render_text(&analyze(&table, None).unwrap(), Unit::Foot);
        assert!(text.contains("No distribution"));
        assert!(text.contains("equally even"));
    }
}
