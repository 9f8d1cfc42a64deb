//! Swath-width sweep scored by coefficient of variation.
//!
//! For each candidate width `k` (in pan spacings) the normalized curve is
//! laid down twice, once shifted `k` to the right and once left in place,
//! and summed. That models the passes on either side of a gap. The span
//! between the two centerlines is `combined[N/2 .. N/2 + k]`, and its CV
//! (sample standard deviation over mean, in percent) is the score. The
//! smallest CV wins; ties go to the narrowest width.
//!
//! Candidates run over `[N/2, N-1]`. Narrower widths leave too short a
//! window to say anything about evenness.

use crate::distribution::NormalizedCurve;

/// Placeholder scores used when every candidate scored exactly 0, so the
/// selection still resolves to index 0. Its length does not track the
/// candidate count.
pub const FALLBACK_CVS: [f64; 3] = [1.0, 2.0, 3.0];

/// Result of one sweep. Ephemeral; recomputed on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct SwathSweep {
    /// Candidate widths in pan spacings, ascending.
    pub widths: Vec<usize>,
    /// CV (%) per candidate, or [`FALLBACK_CVS`] when `fallback` is set.
    pub cvs: Vec<f64>,
    /// Recommended swath width in physical units.
    pub optimal_width: f64,
    /// True when every candidate scored 0 and the placeholder was used.
    pub fallback: bool,
    spacing: f64,
    pans: usize,
}

impl SwathSweep {
    /// Index of the winning candidate.
    pub fn optimal_index(&self) -> usize {
        argmin(&self.cvs)
    }

    /// CV for a width given in physical units, when it is a scored candidate.
    pub fn cv_at(&self, width: f64) -> Option<f64> {
        if self.fallback || !(width.is_finite() && width >= 0.0) {
            return None;
        }
        let k = (width / self.spacing).round() as usize;
        self.widths
            .iter()
            .position(|&w| w == k)
            .and_then(|idx| self.cvs.get(idx).copied())
    }

    /// `(min, max, step)` for a manual width control, in physical units.
    pub fn override_bounds(&self) -> (f64, f64, f64) {
        let lo = (self.pans / 2) as f64 * self.spacing;
        let hi = self.pans.saturating_sub(1) as f64 * self.spacing;
        (lo, hi, self.spacing)
    }

    /// Candidate widths in physical units.
    pub fn widths_in_units(&self) -> Vec<f64> {
        self.widths
            .iter()
            .map(|&k| k as f64 * self.spacing)
            .collect()
    }
}

/// Sum of the curve and its copy shifted right by `k`, restricted to the
/// span between the two pass centerlines.
fn overlap_window(curve: &[f64], k: usize) -> Vec<f64> {
    let n = curve.len();
    let start = n / 2;
    (start..start + k)
        .map(|i| {
            // right-padded copy: curve[i] while i < n
            let right = curve.get(i).copied().unwrap_or(0.0);
            // left-padded copy: curve[i - k] once i >= k
            let left = i.checked_sub(k).and_then(|j| curve.get(j)).copied().unwrap_or(0.0);
            left + right
        })
        .collect()
}

/// Coefficient of variation in percent, using the sample standard deviation.
/// Windows with fewer than two samples or a zero mean score 0.
fn sample_cv(window: &[f64]) -> f64 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }
    let mean = window.iter().sum::<f64>() / n as f64;
    if mean == 0.0 {
        return 0.0;
    }
    let ss: f64 = window.iter().map(|&x| (x - mean).powi(2)).sum();
    let sd = (ss / (n as f64 - 1.0)).sqrt();
    100.0 * sd / mean
}

/// CV (%) of the overlap window for a swath of `k` pan spacings.
pub fn window_cv(curve: &[f64], k: usize) -> f64 {
    sample_cv(&overlap_window(curve, k))
}

/// First index of the minimum; 0 for an empty slice.
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = idx;
        }
    }
    best
}

/// Sweep candidate widths over `curve` and pick the most even one.
///
/// `spacing` converts the winning candidate from pan spacings to units.
pub fn optimize(curve: &NormalizedCurve, spacing: f64) -> SwathSweep {
    let values = curve.values();
    let n = values.len();
    let lo = n / 2;
    let widths: Vec<usize> = (lo..n).collect();
    let mut cvs: Vec<f64> = widths.iter().map(|&k| window_cv(values, k)).collect();

    let fallback = cvs.iter().all(|&cv| cv == 0.0);
    if fallback {
        tracing::warn!(
            pans = n,
            "every candidate width scored zero CV; using placeholder scores"
        );
        cvs = FALLBACK_CVS.to_vec();
    }

    let idx = argmin(&cvs);
    let optimal_width = (idx + lo) as f64 * spacing;
    tracing::debug!(pans = n, candidates = widths.len(), idx, optimal_width, "swath sweep done");

    SwathSweep {
        widths,
        cvs,
        optimal_width,
        fallback,
        spacing,
        pans: n,
    }
}
