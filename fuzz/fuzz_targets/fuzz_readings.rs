#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // CSV rows through the whole pipeline: errors are fine, panics are not.
    let Ok(rows) = swath_config::read_readings(data) else {
        return;
    };
    if rows.len() > 4_096 {
        return;
    }
    let amounts: Vec<&str> = rows.iter().map(|r| r.amount.as_str()).collect();
    let session = swath_core::SessionCfg {
        count: rows.len().max(swath_core::MIN_PANS),
        ..swath_core::SessionCfg::default()
    };
    if let Ok(table) = swath_core::prepare_table(&session, &amounts) {
        let _ = swath_core::analyze(&table, None);
    }
});
