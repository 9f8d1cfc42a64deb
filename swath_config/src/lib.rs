#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas and pan-reading parsing for the swath calibration tool.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - The readings CSV loader enforces headers and pan numbering; amount
//!   text is handed to the engine untouched so it can apply its own parsing.
use serde::Deserialize;
use std::io::Read;

/// Readings CSV schema.
///
/// Expected headers:
/// pan,amount
///
/// Example:
/// pan,amount
/// 1,2.0
/// 2,4.5
/// 3,2.0
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PanRow {
    pub pan: u32,
    /// Raw cell text; parsed into a number by the engine.
    pub amount: String,
}

/// Display unit for distances and widths. Arithmetic never depends on it.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitCfg {
    #[serde(rename = "in", alias = "inch", alias = "inches")]
    Inch,
    #[default]
    #[serde(rename = "ft", alias = "foot", alias = "feet")]
    Foot,
    #[serde(rename = "cm", alias = "centimeter", alias = "centimeters")]
    Centimeter,
    #[serde(rename = "m", alias = "meter", alias = "meters")]
    Meter,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PansCfg {
    /// Number of catch pans across the machine width (>= 3).
    pub count: usize,
    /// Distance between adjacent pans, in `unit`.
    pub spacing: f64,
    pub unit: UnitCfg,
    /// Expected throw distance; when set, spacing is derived as
    /// `throw_distance / (count - 1)` and `spacing` is ignored.
    pub throw_distance: Option<f64>,
}

impl Default for PansCfg {
    fn default() -> Self {
        Self {
            count: 3,
            spacing: 1.0,
            unit: UnitCfg::Foot,
            throw_distance: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ImputationCfg {
    /// 0-based row positions to impute, applied in the listed order.
    pub selected: Vec<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct OverlayCfg {
    /// Manual swath width override (in units). Absent: use the optimum.
    pub width: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pans: PansCfg,
    pub imputation: ImputationCfg,
    pub overlay: OverlayCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Load pan rows from a CSV file with the exact headers `pan,amount`.
pub fn load_readings_csv(path: &std::path::Path) -> eyre::Result<Vec<PanRow>> {
    let file = std::fs::File::open(path)
        .map_err(|e| eyre::eyre!("open readings CSV {:?}: {}", path, e))?;
    read_readings(file)
}

/// Same as [`load_readings_csv`] over any reader.
pub fn read_readings<R: Read>(reader: R) -> eyre::Result<Vec<PanRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Enforce exact headers
    let headers = rdr
        .headers()
        .map_err(|e| eyre::eyre!("read CSV headers: {}", e))?
        .clone();
    let expected = ["pan", "amount"];
    let actual: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
    if actual != expected {
        eyre::bail!(
            "readings CSV must have headers 'pan,amount', got: {}",
            actual.join(",")
        );
    }

    let mut rows: Vec<PanRow> = Vec::new();
    for (idx, rec) in rdr.deserialize::<PanRow>().enumerate() {
        let row = rec.map_err(|e| eyre::eyre!("invalid CSV row {}: {}", idx + 2, e))?;
        let expected_pan = rows.len() as u32 + 1;
        if row.pan != expected_pan {
            eyre::bail!(
                "invalid CSV row {}: pan numbers must run 1..=N in order (expected {}, got {})",
                idx + 2,
                expected_pan,
                row.pan
            );
        }
        rows.push(row);
    }

    if rows.is_empty() {
        eyre::bail!("readings CSV has no rows");
    }
    Ok(rows)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Pans
        if self.pans.count < 3 {
            eyre::bail!("pans.count must be >= 3");
        }
        if !self.pans.spacing.is_finite() || self.pans.spacing <= 0.0 {
            eyre::bail!("pans.spacing must be a finite value > 0");
        }
        if let Some(throw) = self.pans.throw_distance
            && !(throw.is_finite() && throw > 0.0)
        {
            eyre::bail!("pans.throw_distance must be a finite value > 0");
        }

        // Imputation: positions are checked against the table at apply time

        // Overlay
        if let Some(width) = self.overlay.width
            && !(width.is_finite() && width >= 0.0)
        {
            eyre::bail!("overlay.width must be a finite value >= 0");
        }

        // Logging
        if let Some(rotation) = self.logging.rotation.as_deref()
            && !matches!(rotation, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_accepts_short_and_long_names() {
        for (text, unit) in [
            ("in", UnitCfg::Inch),
            ("feet", UnitCfg::Foot),
            ("centimeter", UnitCfg::Centimeter),
            ("m", UnitCfg::Meter),
        ] {
            let cfg = load_toml(&format!("[pans]\nunit = \"{text}\"\n")).unwrap();
            assert_eq!(cfg.pans.unit, unit);
        }
    }

    #[test]
    fn throw_distance_is_optional() {
        let cfg = load_toml("[pans]\nspacing = 1.5\n").unwrap();
        assert!((cfg.pans.spacing - 1.5).abs() < 1e-12);
        assert_eq!(cfg.pans.throw_distance, None);
    }
}
