//! Expected deposition between two adjacent passes at a chosen swath width.

use crate::distribution::NormalizedCurve;
use crate::error::{Result, invalid};
use crate::optimizer::window_cv;

/// Overlay series for one swath width.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapProfile {
    /// Offsets from the centre pass, `-v*s ..= v*s` in steps of `s`.
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Width actually rendered: `v * spacing`.
    pub width: f64,
    /// Overlap-window CV (%) at this width.
    pub cv: f64,
}

/// Render the overlapped curve for a swath of `width` units.
///
/// The width snaps to the nearest whole number of pan spacings `v`. Three
/// copies of the curve (shifted `2v` right, unshifted, and centred with `v`
/// zeros on each side) are summed, and the `2v + 1` samples centred on the
/// middle pass are kept. Widths beyond `2N` spacings are rejected.
pub fn render_at(curve: &NormalizedCurve, width: f64, spacing: f64) -> Result<OverlapProfile> {
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(invalid(format!(
            "pan spacing must be a finite value > 0, got {spacing}"
        )));
    }
    if !(width.is_finite() && width >= 0.0) {
        return Err(invalid(format!(
            "swath width must be a finite value >= 0, got {width}"
        )));
    }

    let c = curve.values();
    let n = c.len();
    // past 2N spacings the three copies no longer touch
    let max_spacings = 2 * n;
    let steps = (width / spacing).round();
    if !steps.is_finite() || steps > max_spacings as f64 {
        return Err(invalid(format!(
            "swath width must be at most {} for {n} pans, got {width}",
            max_spacings as f64 * spacing
        )));
    }
    let v = steps as usize;
    let at = |i: isize| -> f64 {
        usize::try_from(i)
            .ok()
            .and_then(|i| c.get(i))
            .copied()
            .unwrap_or(0.0)
    };

    let start = n / 2;
    let ys: Vec<f64> = (start..=start + 2 * v)
        .map(|i| {
            let i = i as isize;
            let v = v as isize;
            // left-padded by 2v, right-padded by 2v, centred with v each side
            at(i - 2 * v) + at(i) + at(i - v)
        })
        .collect();
    let xs: Vec<f64> = (0..=2 * v)
        .map(|j| (j as f64 - v as f64) * spacing)
        .collect();

    Ok(OverlapProfile {
        xs,
        ys,
        width: v as f64 * spacing,
        cv: window_cv(c, v),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_keeps_single_centre_sample() {
        let curve = NormalizedCurve::from_values(vec![0.25, 0.5, 0.25]);
        let p = render_at(&curve, 0.2, 1.0).unwrap();
        assert_eq!(p.xs, vec![0.0]);
        // all three copies overlap in place
        assert_eq!(p.ys, vec![1.5]);
        assert_eq!(p.width, 0.0);
    }

    #[test]
    fn rejects_negative_width() {
        let curve = NormalizedCurve::from_values(vec![0.5, 0.0, 0.5]);
        assert!(render_at(&curve, -1.0, 1.0).is_err());
        assert!(render_at(&curve, 1.0, 0.0).is_err());
    }
}
