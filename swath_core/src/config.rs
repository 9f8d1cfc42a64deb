//! Configuration types for the swath engine.
//!
//! These are the runtime configuration structs used by the pipeline.
//! They are separate from the TOML-deserialized config in `swath_config`.

use std::fmt;
use std::str::FromStr;

use crate::error::{SwathError, invalid};

/// Display unit for distances and widths. Arithmetic is unit-free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    Inch,
    #[default]
    Foot,
    Centimeter,
    Meter,
}

impl Unit {
    /// Short label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = SwathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inch),
            "ft" | "foot" | "feet" => Ok(Unit::Foot),
            "cm" | "centimeter" | "centimeters" => Ok(Unit::Centimeter),
            "m" | "meter" | "meters" => Ok(Unit::Meter),
            other => Err(SwathError::InvalidConfiguration(format!(
                "unknown unit '{other}'"
            ))),
        }
    }
}

/// Session-level settings shared by every pan in the table.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionCfg {
    /// Number of pans (>= 3).
    pub count: usize,
    /// Distance between adjacent pans (> 0).
    pub spacing: f64,
    pub unit: Unit,
    /// 0-based positions to impute, in application order.
    pub selected: Vec<usize>,
    /// Manual swath width for the overlay view; `None` uses the optimum.
    pub override_width: Option<f64>,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            count: 3,
            spacing: 1.0,
            unit: Unit::Foot,
            selected: Vec::new(),
            override_width: None,
        }
    }
}

/// Derive pan spacing from the expected throw distance: the outermost pans
/// sit at the edges of the throw, so `count - 1` gaps span it.
pub fn spacing_from_throw_distance(throw_distance: f64, count: usize) -> crate::error::Result<f64> {
    if count < 3 {
        return Err(invalid(format!("pan count must be >= 3, got {count}")));
    }
    if !(throw_distance.is_finite() && throw_distance > 0.0) {
        return Err(invalid(format!(
            "throw distance must be a finite value > 0, got {throw_distance}"
        )));
    }
    Ok(throw_distance / (count - 1) as f64)
}
