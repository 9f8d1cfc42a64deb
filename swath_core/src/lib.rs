#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Pan distribution and swath optimization engine (I/O free).
//!
//! An operator lays catch pans across the spreader's width, weighs what
//! lands in each, and this crate recommends the distance between passes
//! that gives the most even coverage when passes overlap.
//!
//! ## Pipeline
//!
//! - **Table**: pan readings with derived signed distances, resize and
//!   neighbour imputation (`table` module)
//! - **Distribution**: left/right fold and unit-sum normalization
//!   (`distribution` module)
//! - **Optimizer**: CV sweep over candidate widths (`optimizer` module)
//! - **Overlap**: overlaid curve at any chosen width (`overlap` module)
//!
//! Every stage is a pure function of its inputs. Only `PanTable::resize`,
//! `PanTable::impute_selected` and the amount setters mutate, and they need
//! `&mut` access to the one table the caller owns.

// Module declarations
pub mod analysis;
pub mod config;
pub mod conversions;
pub mod distribution;
pub mod error;
pub mod optimizer;
pub mod overlap;
pub mod table;

pub use analysis::{CalibrationReport, analyze, format_width, prepare_table};
pub use config::{SessionCfg, Unit, spacing_from_throw_distance};
pub use distribution::{Distribution, NormalizedCurve, distribute, normalize, symmetrize};
pub use error::{Result, SwathError};
pub use optimizer::{FALLBACK_CVS, SwathSweep, optimize, window_cv};
pub use overlap::{OverlapProfile, render_at};
pub use table::{MIN_PANS, PanReading, PanTable, parse_amount};
