use dashlink_rs::core::{
    CostBinner, Record, ResourceChannel, bin_numeric, count_by_category, group_and_count_nested,
    modal_value_per_group, percentage_of, tag_frequency,
};
use dashlink_rs::core::catalog::{COST_BIN_BOUNDARIES, COST_BIN_LABELS, keyword_catalogs};
use rust_decimal::Decimal;

fn respondent(id: &str, career: &str, salary: &str) -> Record {
    Record::new(id)
        .with_interested_career(career)
        .with_expected_salary_band(salary)
}

#[test]
fn count_by_category_partitions_the_record_set() {
    let records = vec![
        respondent("1", "Back-End Developer", "$0 to $4,999"),
        respondent("2", "Back-End Developer", "$5,000 to $9,999"),
        respondent("3", "Data Scientist", "$0 to $4,999"),
    ];

    let counts = count_by_category(&records, |r| r.interested_career.clone());

    assert_eq!(counts["Back-End Developer"], 2);
    assert_eq!(counts["Data Scientist"], 1);
    assert_eq!(counts.values().sum::<usize>(), records.len());
}

#[test]
fn count_by_category_keeps_first_encounter_order() {
    let records = vec![
        respondent("1", "Zoologist", ""),
        respondent("2", "Artist", ""),
        respondent("3", "Zoologist", ""),
    ];

    let counts = count_by_category(&records, |r| r.interested_career.clone());
    let keys: Vec<&str> = counts.keys().map(String::as_str).collect();

    assert_eq!(keys, ["Zoologist", "Artist"]);
}

#[test]
fn count_by_category_over_empty_input_is_empty() {
    let counts = count_by_category(&[], |r| r.interested_career.clone());
    assert!(counts.is_empty());
}

#[test]
fn nested_grouping_emits_only_nonempty_pairs() {
    let mut binned = Record::new("1").with_location("North America");
    binned.cost_of_learning_bin = Some("$0-100".to_owned());
    let mut binned_again = Record::new("2").with_location("North America");
    binned_again.cost_of_learning_bin = Some("$0-100".to_owned());
    let unbinned = Record::new("3").with_location("South Asia");

    let rows = group_and_count_nested(
        &[binned, binned_again, unbinned],
        |r| Some(r.location.clone()),
        |r| r.cost_of_learning_bin.clone(),
    );

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].outer, "North America");
    assert_eq!(rows[0].inner, "$0-100");
    assert_eq!(rows[0].count, 2);
}

#[test]
fn modal_value_per_group_picks_most_frequent_value() {
    let records = vec![
        respondent("1", "Back-End Developer", "$5,000 to $9,999"),
        respondent("2", "Back-End Developer", "$5,000 to $9,999"),
        respondent("3", "Back-End Developer", "$0 to $4,999"),
    ];

    let modal = modal_value_per_group(
        &records,
        |r| r.interested_career.clone(),
        |r| r.expected_salary_band.clone(),
    );

    assert_eq!(modal["Back-End Developer"], "$5,000 to $9,999");
}

#[test]
fn modal_tie_break_is_lexicographic_regardless_of_input_order() {
    let forward = vec![
        respondent("1", "dev", "$5,000 to $9,999"),
        respondent("2", "dev", "$0 to $4,999"),
    ];
    let reversed: Vec<Record> = forward.iter().rev().cloned().collect();

    let modal_forward = modal_value_per_group(
        &forward,
        |r| r.interested_career.clone(),
        |r| r.expected_salary_band.clone(),
    );
    let modal_reversed = modal_value_per_group(
        &reversed,
        |r| r.interested_career.clone(),
        |r| r.expected_salary_band.clone(),
    );

    assert_eq!(modal_forward["dev"], "$0 to $4,999");
    assert_eq!(modal_forward, modal_reversed);
}

#[test]
fn tag_frequency_percentages_sum_to_one_hundred_per_catalog() {
    let records = vec![
        Record::new("1").with_tags(ResourceChannel::OnlineResources, ["freeCodeCamp"]),
        Record::new("2").with_tags(ResourceChannel::OnlineResources, ["freeCodeCamp", "EdX"]),
        Record::new("3").with_tags(ResourceChannel::OnlineResources, ["EdX", "Udemy"]),
    ];

    let rows = tag_frequency(&records, &keyword_catalogs());
    let sum: Decimal = rows.iter().map(|row| row.percentage).sum();

    let tolerance = Decimal::new(5, 2);
    assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance, "sum was {sum}");
}

#[test]
fn tag_frequency_counts_each_record_once_per_tag() {
    let records = vec![Record::new("1").with_tags(
        ResourceChannel::Podcasts,
        ["Syntax.fm", "Syntax.fm", "Darknet Diaries"],
    )];

    let rows = tag_frequency(&records, &keyword_catalogs());
    let syntax = rows.iter().find(|row| row.tag == "Syntax.fm").expect("row");

    assert_eq!(syntax.count, 1);
}

#[test]
fn tag_frequency_ignores_tags_outside_the_catalog() {
    let records = vec![Record::new("1").with_tags(
        ResourceChannel::OnlineResources,
        ["freeCodeCamp", "My Cousin's Blog"],
    )];

    let rows = tag_frequency(&records, &keyword_catalogs());

    assert!(rows.iter().all(|row| row.tag != "My Cousin's Blog"));
    let fcc = rows.iter().find(|row| row.tag == "freeCodeCamp").expect("row");
    assert_eq!(fcc.percentage, Decimal::ONE_HUNDRED);
}

#[test]
fn tag_frequency_is_sorted_by_count_descending() {
    let records = vec![
        Record::new("1").with_tags(ResourceChannel::OnlineResources, ["freeCodeCamp", "EdX"]),
        Record::new("2").with_tags(ResourceChannel::OnlineResources, ["freeCodeCamp"]),
        Record::new("3").with_tags(ResourceChannel::Podcasts, ["Syntax.fm"]),
    ];

    let rows = tag_frequency(&records, &keyword_catalogs());
    let counts: Vec<usize> = rows.iter().map(|row| row.count).collect();
    let mut sorted = counts.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    assert_eq!(counts, sorted);
}

#[test]
fn tag_frequency_over_empty_input_is_empty() {
    let rows = tag_frequency(&[], &keyword_catalogs());
    assert!(rows.is_empty());
}

#[test]
fn percentage_is_defined_as_zero_on_zero_total() {
    assert_eq!(percentage_of(0, 0), Decimal::ZERO);
}

#[test]
fn percentage_rounds_to_two_decimals() {
    // 1/3 of 100 rounds to 33.33.
    assert_eq!(percentage_of(1, 3), Decimal::new(3333, 2));
}

#[test]
fn bin_numeric_respects_half_open_boundaries() {
    assert_eq!(
        bin_numeric(99.0, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS),
        Some("$0-100")
    );
    assert_eq!(
        bin_numeric(100.0, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS),
        Some("$101-500")
    );
    assert_eq!(
        bin_numeric(1000.0, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS),
        Some("$1001-10000")
    );
}

#[test]
fn bin_numeric_clamps_values_beyond_the_last_boundary() {
    assert_eq!(
        bin_numeric(1_000_000.0, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS),
        Some("$>10000")
    );
}

#[test]
fn bin_numeric_leaves_out_of_domain_values_unbinned() {
    assert_eq!(bin_numeric(-1.0, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS), None);
    assert_eq!(
        bin_numeric(f64::NAN, &COST_BIN_BOUNDARIES, &COST_BIN_LABELS),
        None
    );
}

#[test]
fn cost_binner_matches_the_static_catalog() {
    let binner = CostBinner::cost_of_learning();
    assert_eq!(binner.bin(0.0), Some("$0-100"));
    assert_eq!(binner.bin(750.0), Some("$501-1000"));
    assert_eq!(binner.bin(99_999.0), Some("$>10000"));
}
