#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Config parsing and validation must reject bad input without panicking.
    // A config that validates must also yield a usable pan layout.
    let Ok(cfg) = toml::from_str::<swath_config::Config>(data) else {
        return;
    };
    if cfg.validate().is_err() {
        return;
    }
    let session = swath_core::SessionCfg::from(&cfg);
    if session.count <= 10_000 {
        let _ = swath_core::PanTable::new(session.count, session.spacing);
    }
});
