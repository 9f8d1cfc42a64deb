use rstest::rstest;
use swath_core::{PanTable, SwathError};

#[rstest]
#[case(3, vec![-1.0, 0.0, 1.0])]
#[case(4, vec![-1.5, -0.5, 0.5, 1.5])]
#[case(5, vec![-2.0, -1.0, 0.0, 1.0, 2.0])]
#[case(6, vec![-2.5, -1.5, -0.5, 0.5, 1.5, 2.5])]
fn distances_by_count(#[case] count: usize, #[case] expected: Vec<f64>) {
    let t = PanTable::new(count, 1.0).unwrap();
    assert_eq!(t.distances(), expected);
}

#[test]
fn resize_preserves_amounts_and_rederives_distances() {
    let mut t = PanTable::from_amounts(&[1.0, 2.0, 3.0], 1.0).unwrap();
    t.resize(5).unwrap();
    assert_eq!(t.amounts(), vec![1.0, 2.0, 3.0, 0.0, 0.0]);
    assert_eq!(t.distances(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    let numbers: Vec<u32> = t.readings().iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);

    t.resize(4).unwrap();
    assert_eq!(t.amounts(), vec![1.0, 2.0, 3.0, 0.0]);
    assert_eq!(t.distances(), vec![-1.5, -0.5, 0.5, 1.5]);
}

#[test]
fn resize_below_minimum_is_rejected_and_table_untouched() {
    let mut t = PanTable::from_amounts(&[1.0, 2.0, 3.0, 4.0], 1.0).unwrap();
    let err = t.resize(2).expect_err("count 2 must fail");
    assert!(matches!(
        err.downcast_ref::<SwathError>(),
        Some(SwathError::InvalidConfiguration(_))
    ));
    assert_eq!(t.len(), 4);
}

#[test]
fn spacing_change_rederives_distances() {
    let mut t = PanTable::new(3, 1.0).unwrap();
    t.recompute_distances(2.5).unwrap();
    assert_eq!(t.spacing(), 2.5);
    assert_eq!(t.distances(), vec![-2.5, 0.0, 2.5]);
    assert!(t.recompute_distances(0.0).is_err());
    assert!(t.recompute_distances(f64::NAN).is_err());
    assert_eq!(t.spacing(), 2.5);
}

#[test]
fn impute_middle_of_three_is_exact_mean() {
    let mut t = PanTable::from_amounts(&[1.25, 99.0, 3.5], 1.0).unwrap();
    assert_eq!(t.impute_selected(&[1]), 1);
    assert_eq!(t.amounts()[1], (1.25 + 3.5) / 2.0);
}

#[test]
fn impute_order_matters_for_adjacent_selection() {
    let base = [4.0, 0.0, 0.0, 8.0];

    let mut forward = PanTable::from_amounts(&base, 1.0).unwrap();
    forward.impute_selected(&[1, 2]);
    assert_eq!(forward.amounts(), vec![4.0, 2.0, 5.0, 8.0]);

    let mut backward = PanTable::from_amounts(&base, 1.0).unwrap();
    backward.impute_selected(&[2, 1]);
    assert_eq!(backward.amounts(), vec![4.0, 4.0, 4.0, 8.0]);
}

#[test]
fn string_amounts_are_parsed_at_the_boundary() {
    let mut t = PanTable::new(3, 1.0).unwrap();
    t.set_amount_str(1, " 7.5").unwrap();
    assert_eq!(t.amounts(), vec![0.0, 7.5, 0.0]);

    let err = t.set_amount_str(0, "lots").expect_err("non-numeric");
    assert!(format!("{err}").contains("not a number"));

    let err = t.set_amount(3, 1.0).expect_err("past the end");
    assert_eq!(
        err.downcast_ref::<SwathError>(),
        Some(&SwathError::PositionOutOfRange { position: 3, len: 3 })
    );
}

#[rstest]
#[case(vec![1.0, 2.0], 1.0)]
#[case(vec![1.0, 2.0, 3.0], 0.0)]
#[case(vec![1.0, 2.0, 3.0], -1.0)]
#[case(vec![1.0, -2.0, 3.0], 1.0)]
#[case(vec![1.0, f64::INFINITY, 3.0], 1.0)]
fn invalid_tables_are_rejected(#[case] amounts: Vec<f64>, #[case] spacing: f64) {
    let err = PanTable::from_amounts(&amounts, spacing).expect_err("should reject");
    assert!(matches!(
        err.downcast_ref::<SwathError>(),
        Some(SwathError::InvalidConfiguration(_))
    ));
}
