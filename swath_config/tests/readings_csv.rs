use std::fs::File;
use std::io::Write;

use rstest::rstest;
use swath_config::{PanRow, load_readings_csv, read_readings};
use tempfile::tempdir;

#[rstest]
fn loads_rows_in_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pans.csv");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "pan,amount").unwrap();
    writeln!(f, "1,2.0").unwrap();
    writeln!(f, "2, 4.5 ").unwrap();
    writeln!(f, "3,2").unwrap();

    let rows = load_readings_csv(&path).unwrap();
    assert_eq!(
        rows,
        vec![
            PanRow { pan: 1, amount: "2.0".into() },
            PanRow { pan: 2, amount: "4.5".into() },
            PanRow { pan: 3, amount: "2".into() },
        ]
    );
}

#[rstest]
#[case("pan,weight\n1,0\n2,0\n3,0\n", "headers 'pan,amount'")]
#[case("pan,amount\n1,0\n3,0\n", "expected 2, got 3")]
#[case("pan,amount\n", "no rows")]
#[case("pan,amount\nx,0\n", "invalid csv row 2")]
fn rejects_malformed_csv(#[case] text: &str, #[case] needle: &str) {
    let err = read_readings(text.as_bytes()).expect_err("should reject");
    assert!(
        format!("{err}").to_lowercase().contains(&needle.to_lowercase()),
        "unexpected error: {err}"
    );
}

#[rstest]
fn amount_text_is_kept_verbatim() {
    // Non-numeric text is the engine's call, not the loader's
    let rows = read_readings("pan,amount\n1,abc\n".as_bytes()).unwrap();
    assert_eq!(rows[0].amount, "abc");
}

#[rstest]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let err = load_readings_csv(&dir.path().join("nope.csv")).expect_err("missing file");
    assert!(format!("{err}").contains("open readings CSV"));
}
