use swath_core::{PanTable, SessionCfg, SwathError, analyze, prepare_table};

#[test]
fn zero_distribution_is_a_result_not_an_error() {
    let table = PanTable::new(5, 1.0).unwrap();
    let report = analyze(&table, None).expect("degenerate input must still render");
    assert!(report.distribution.normalized.is_degenerate());
    assert!(report.sweep.fallback);
    assert_eq!(report.optimal_width(), 2.0);
}

#[test]
fn bad_amount_text_maps_to_invalid_configuration() {
    let session = SessionCfg {
        count: 3,
        ..SessionCfg::default()
    };
    let err = prepare_table(&session, &["1", "two", "3"]).expect_err("should reject");
    match err.downcast_ref::<SwathError>() {
        Some(SwathError::InvalidConfiguration(msg)) => assert!(msg.contains("two")),
        other => panic!("unexpected error variant: {other:?}"),
    }
    // context names the offending pan
    assert!(format!("{err:#}").contains("pan 2"));
}

#[test]
fn override_width_must_be_finite() {
    let table = PanTable::from_amounts(&[1.0, 2.0, 1.0], 1.0).unwrap();
    let err = analyze(&table, Some(f64::NAN)).expect_err("NaN width");
    assert!(matches!(
        err.downcast_ref::<SwathError>(),
        Some(SwathError::InvalidConfiguration(_))
    ));
}

#[test]
fn edge_imputation_is_silent() {
    let mut table = PanTable::from_amounts(&[5.0, 1.0, 5.0], 1.0).unwrap();
    assert_eq!(table.impute_selected(&[0, 2]), 0);
    assert_eq!(table.amounts(), vec![5.0, 1.0, 5.0]);
}
