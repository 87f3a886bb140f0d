use dashlink_rs::core::catalog::{COST_BIN_BOUNDARIES, COST_BIN_LABELS};
use dashlink_rs::core::{Record, bin_numeric, count_by_category, percentage_of};
use proptest::prelude::*;

const CAREERS: [&str; 5] = [
    "Back-End Developer",
    "Front-End Developer",
    "Data Scientist",
    "Game Developer",
    "Not interested in software development",
];

proptest! {
    #[test]
    fn count_by_category_partitions_any_record_set(
        choices in proptest::collection::vec(0usize..CAREERS.len(), 0..200)
    ) {
        let records: Vec<Record> = choices
            .iter()
            .enumerate()
            .map(|(i, &career)| {
                Record::new(format!("r{i}")).with_interested_career(CAREERS[career])
            })
            .collect();

        let counts = count_by_category(&records, |r| r.interested_career.clone());

        prop_assert_eq!(counts.values().sum::<usize>(), records.len());
        for (category, count) in &counts {
            let occurrences = records
                .iter()
                .filter(|r| r.interested_career == *category)
                .count();
            prop_assert_eq!(*count, occurrences);
        }
    }

    #[test]
    fn bin_numeric_is_total_over_the_cost_domain(value in 0.0f64..1.0e9) {
        let label = bin_numeric(value, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS);
        prop_assert!(label.is_some());
        prop_assert!(COST_BIN_LABELS.contains(&label.expect("label")));
    }

    #[test]
    fn bin_numeric_is_monotone_in_the_value(
        a in 0.0f64..200_000.0,
        b in 0.0f64..200_000.0
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_index = COST_BIN_LABELS
            .iter()
            .position(|l| Some(*l) == bin_numeric(lo, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS))
            .expect("lo label");
        let hi_index = COST_BIN_LABELS
            .iter()
            .position(|l| Some(*l) == bin_numeric(hi, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS))
            .expect("hi label");
        prop_assert!(lo_index <= hi_index);
    }

    #[test]
    fn percentage_stays_within_bounds(count in 0usize..10_000, extra in 0usize..10_000) {
        let total = count + extra;
        let percentage = percentage_of(count, total);
        prop_assert!(percentage >= rust_decimal::Decimal::ZERO);
        prop_assert!(percentage <= rust_decimal::Decimal::ONE_HUNDRED);
    }
}
