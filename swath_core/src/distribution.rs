//! Symmetrized, normalized deposition curve for a single pass.

use crate::table::PanTable;

/// Deposition density of one pass, folded left/right and scaled to sum to 1.
/// An all-zero curve stands for "no distribution".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedCurve {
    values: Vec<f64>,
}

impl NormalizedCurve {
    /// Wrap values that are already normalized (or all zero).
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the raw readings summed to zero.
    pub fn is_degenerate(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}

/// Both curves the charts need.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// `amount[i] + amount[N-1-i]`, unscaled.
    pub symmetrized: Vec<f64>,
    pub normalized: NormalizedCurve,
}

/// Fold the left and right halves together: `out[i] = a[i] + a[N-1-i]`.
pub fn symmetrize(amounts: &[f64]) -> Vec<f64> {
    amounts
        .iter()
        .zip(amounts.iter().rev())
        .map(|(l, r)| l + r)
        .collect()
}

/// Scale `symmetrized` to unit sum; a zero total yields a zero curve.
fn scale_to_unit(symmetrized: &[f64]) -> NormalizedCurve {
    let total: f64 = symmetrized.iter().sum();
    if total == 0.0 {
        tracing::debug!(len = symmetrized.len(), "zero total deposition; returning zero curve");
        return NormalizedCurve::from_values(vec![0.0; symmetrized.len()]);
    }
    NormalizedCurve::from_values(symmetrized.iter().map(|v| v / total).collect())
}

/// Normalized deposition curve for `table`.
pub fn normalize(table: &PanTable) -> NormalizedCurve {
    distribute(table).normalized
}

/// Raw folded curve together with its normalized form.
pub fn distribute(table: &PanTable) -> Distribution {
    let symmetrized = symmetrize(&table.amounts());
    let normalized = scale_to_unit(&symmetrized);
    Distribution {
        symmetrized,
        normalized,
    }
}
