//! Pan table: ordered catch-pan readings and their signed distances.
//!
//! Distances are always derived from the pan count and spacing, never
//! entered. The table is symmetric about the machine centerline: odd
//! tables put the middle pan at 0, even tables straddle 0 by half a
//! spacing on each side.

use crate::error::{Result, SwathError, invalid};

/// Smallest table the engine accepts.
pub const MIN_PANS: usize = 3;

/// One catch pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanReading {
    /// 1-based position; stable identity within a session.
    pub number: u32,
    /// Collected material, >= 0.
    pub amount: f64,
    /// Signed offset from the machine centerline.
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanTable {
    readings: Vec<PanReading>,
    spacing: f64,
}

/// Signed distance of the pan at 1-based `number` in a table of `n` pans.
#[inline]
pub fn pan_distance(number: usize, n: usize, spacing: f64) -> f64 {
    let half = (n / 2) as f64;
    let i = number as f64;
    if n % 2 == 1 {
        (i - half - 1.0) * spacing
    } else {
        (i - half - 0.5) * spacing
    }
}

/// Parse an amount as typed into the table: trimmed, numeric, finite, >= 0.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid(format!("amount '{trimmed}' is not a number")))?;
    check_amount(value)?;
    Ok(value)
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(invalid(format!(
            "amount must be a finite value >= 0, got {amount}"
        )));
    }
    Ok(())
}

fn check_spacing(spacing: f64) -> Result<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(invalid(format!(
            "pan spacing must be a finite value > 0, got {spacing}"
        )));
    }
    Ok(())
}

fn check_count(count: usize) -> Result<()> {
    if count < MIN_PANS {
        return Err(invalid(format!(
            "pan count must be >= {MIN_PANS}, got {count}"
        )));
    }
    Ok(())
}

impl PanTable {
    /// Build a table of `count` empty pans.
    pub fn new(count: usize, spacing: f64) -> Result<Self> {
        Self::from_amounts(&vec![0.0; count], spacing)
    }

    /// Build a table from amounts listed in pan order.
    pub fn from_amounts(amounts: &[f64], spacing: f64) -> Result<Self> {
        check_count(amounts.len())?;
        check_spacing(spacing)?;
        for &a in amounts {
            check_amount(a)?;
        }
        let n = amounts.len();
        let readings = amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| PanReading {
                number: (idx + 1) as u32,
                amount,
                distance: pan_distance(idx + 1, n, spacing),
            })
            .collect();
        Ok(Self { readings, spacing })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn readings(&self) -> &[PanReading] {
        &self.readings
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.amount).collect()
    }

    pub fn distances(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.distance).collect()
    }

    /// Grow with empty pans or drop pans from the tail until the table holds
    /// `target` pans. Existing amounts keep their positions; all distances are
    /// re-derived.
    pub fn resize(&mut self, target: usize) -> Result<()> {
        check_count(target)?;
        if target == self.readings.len() {
            return Ok(());
        }
        tracing::debug!(from = self.readings.len(), to = target, "resizing pan table");
        self.readings.truncate(target);
        while self.readings.len() < target {
            let number = (self.readings.len() + 1) as u32;
            self.readings.push(PanReading {
                number,
                amount: 0.0,
                distance: 0.0,
            });
        }
        self.rederive();
        Ok(())
    }

    /// Adopt `spacing` and re-derive every pan's distance.
    pub fn recompute_distances(&mut self, spacing: f64) -> Result<()> {
        check_spacing(spacing)?;
        self.spacing = spacing;
        self.rederive();
        Ok(())
    }

    fn rederive(&mut self) {
        let n = self.readings.len();
        let spacing = self.spacing;
        for (idx, r) in self.readings.iter_mut().enumerate() {
            r.distance = pan_distance(idx + 1, n, spacing);
        }
    }

    /// Overwrite the amount at 0-based `position`.
    pub fn set_amount(&mut self, position: usize, amount: f64) -> Result<()> {
        check_amount(amount)?;
        let len = self.readings.len();
        let reading = self
            .readings
            .get_mut(position)
            .ok_or_else(|| eyre::Report::new(SwathError::PositionOutOfRange { position, len }))?;
        reading.amount = amount;
        Ok(())
    }

    /// Overwrite the amount at `position` from text as the operator typed it.
    pub fn set_amount_str(&mut self, position: usize, text: &str) -> Result<()> {
        let amount = parse_amount(text)?;
        self.set_amount(position, amount)
    }

    /// Replace each selected pan's amount with the mean of its two neighbours.
    ///
    /// Positions are 0-based and applied in the order given. Each imputation
    /// reads the neighbours' *current* amounts, so adjacent selections in one
    /// batch see earlier results. Edge pans have only one neighbour and are
    /// skipped, as are positions past the end. Returns how many pans changed.
    pub fn impute_selected(&mut self, positions: &[usize]) -> usize {
        let n = self.readings.len();
        let mut applied = 0;
        for &p in positions {
            if p == 0 || p + 1 >= n {
                tracing::debug!(position = p, len = n, "skipping imputation without two neighbours");
                continue;
            }
            let left = self.readings[p - 1].amount;
            let right = self.readings[p + 1].amount;
            self.readings[p].amount = (right + left) / 2.0;
            applied += 1;
        }
        applied
    }
}
