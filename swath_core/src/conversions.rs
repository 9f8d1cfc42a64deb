//! `From` implementations bridging `swath_config` types to `swath_core` types.

use crate::config::{SessionCfg, Unit, spacing_from_throw_distance};

// ── Unit ─────────────────────────────────────────────────────────────────────

impl From<swath_config::UnitCfg> for Unit {
    fn from(u: swath_config::UnitCfg) -> Self {
        match u {
            swath_config::UnitCfg::Inch => Unit::Inch,
            swath_config::UnitCfg::Foot => Unit::Foot,
            swath_config::UnitCfg::Centimeter => Unit::Centimeter,
            swath_config::UnitCfg::Meter => Unit::Meter,
        }
    }
}

// ── SessionCfg ───────────────────────────────────────────────────────────────

impl From<&swath_config::Config> for SessionCfg {
    fn from(c: &swath_config::Config) -> Self {
        Self {
            count: c.pans.count,
            // an unusable throw distance falls back to the plain spacing
            spacing: c
                .pans
                .throw_distance
                .and_then(|t| spacing_from_throw_distance(t, c.pans.count).ok())
                .unwrap_or(c.pans.spacing),
            unit: c.pans.unit.into(),
            selected: c.imputation.selected.clone(),
            override_width: c.overlay.width,
        }
    }
}
