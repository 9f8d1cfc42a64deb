//! Human-readable error descriptions and structured JSON error formatting.

use swath_core::SwathError;

/// Coarse error class used for exit codes and the JSON `reason` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorClass {
    /// The config TOML (or a logging setting in it) is unusable.
    Config,
    /// The readings CSV could not be read or has the wrong shape.
    Readings,
    /// The engine rejected a pan value, count, spacing or width.
    PanData,
    Other,
}

fn classify(err: &eyre::Report) -> ErrorClass {
    if err.downcast_ref::<SwathError>().is_some() {
        return ErrorClass::PanData;
    }
    let top = err.to_string().to_ascii_lowercase();
    if top.starts_with("invalid config") {
        ErrorClass::Config
    } else if top.starts_with("invalid readings") {
        ErrorClass::Readings
    } else {
        ErrorClass::Other
    }
}

fn reason_name(class: ErrorClass) -> &'static str {
    match class {
        ErrorClass::Config => "InvalidConfiguration",
        ErrorClass::Readings => "InvalidReadings",
        ErrorClass::PanData => "InvalidPanData",
        ErrorClass::Other => "Error",
    }
}

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(se) = err.downcast_ref::<SwathError>() {
        // Context (e.g. "pan 4") sits on top of the typed error
        let full = format!("{err:#}");
        return match se {
            SwathError::InvalidConfiguration(msg) => format!(
                "What happened: Invalid pan data or layout ({msg}).\nLikely causes: A blank, non-numeric or negative amount, fewer than 3 pans, or a non-positive spacing or width.\nHow to fix: Correct the value ({full}) and rerun."
            ),
            SwathError::PositionOutOfRange { position, len } => format!(
                "What happened: Row {position} does not exist in a table of {len} pans.\nLikely causes: Readings and pans.count disagree.\nHow to fix: Check pans.count and the readings CSV."
            ),
            SwathError::DegenerateInput(msg) => format!(
                "What happened: No usable distribution ({msg}).\nLikely causes: Every pan reads zero.\nHow to fix: Enter the pan measurements and rerun."
            ),
        };
    }

    let msg = err.to_string();
    let lower = format!("{err:#}").to_ascii_lowercase();

    // Readings CSV header special-case
    if lower.contains("must have headers") {
        return "Invalid headers in readings CSV. Expected 'pan,amount'.".to_string();
    }

    match classify(err) {
        ErrorClass::Config => {
            let mut cause = String::new();
            if let Some(src) = err.chain().nth(1) {
                cause = format!(" ({src})");
            }
            return format!(
                "What happened: {msg}{cause}.\nLikely causes: A malformed TOML file, or an out-of-range value under [pans], [overlay] or [logging].\nHow to fix: Edit the config file, then rerun."
            );
        }
        ErrorClass::Readings => {
            let mut cause = String::new();
            if let Some(src) = err.chain().nth(1) {
                cause = format!(" ({src})");
            }
            return format!(
                "What happened: {msg}{cause}.\nLikely causes: Missing file, wrong headers, or pan numbers not running 1..=N in order.\nHow to fix: Start from `swath template` and fill in the amounts."
            );
        }
        ErrorClass::PanData | ErrorClass::Other => {}
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.chain().nth(1) {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable exit codes: 2 config, 2 readings file, 3 pan data, 1 otherwise.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    match classify(err) {
        ErrorClass::Config | ErrorClass::Readings => 2,
        ErrorClass::PanData => 3,
        ErrorClass::Other => 1,
    }
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    json!({ "reason": reason_name(classify(err)), "message": humanize(err) }).to_string()
}
