use std::io::Write as _;
use std::path::Path;

use dashlink_rs::DashError;
use dashlink_rs::core::{Record, ResourceChannel};
use dashlink_rs::dataset::{load_records, preprocess_records, read_records};

const HEADER: &str = "ID,Interested_Careers,Expected_Salary,Top_Reason,Location,Age,\
Self_Perception,University_Study,Money_Spent_on_Learning,Helpful_Online_Resources,\
Helpful_Podcasts,Helpful_YouTube_Channels,Helpful_In_Person_Events";

fn sample_csv() -> String {
    format!(
        "{HEADER}\n\
         1,I am not interested in a software development career,\"$0 to $4,999\",As a hobby,\
         North America,19-27,Female,Mathematics or statistics,250,\"freeCodeCamp, EdX\",\
         Syntax.fm,Fireship,Meetup.com events\n\
         2,Back-End Developer,\"$50,000 to $74,999\",To change careers,South Asia,28-36,Male,\
         Education,not sure,freeCodeCamp,,,workshops\n\
         3,Data Scientist,\"$30,000 to $49,999\",To change careers,North America,19-27,\
         Nonbinary,Education,25000,,,,\n"
    )
}

#[test]
fn load_records_reads_and_preprocesses_the_csv() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", sample_csv()).expect("write csv");

    let records = load_records(file.path()).expect("load");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id.as_str(), "1");
    assert_eq!(records[0].expected_salary_band, "$0 to $4,999");
}

#[test]
fn loader_collapses_the_long_career_label() {
    let records = read_records(sample_csv().as_bytes()).expect("load");
    assert_eq!(
        records[0].interested_career,
        "Not interested in software development"
    );
    assert_eq!(records[1].interested_career, "Back-End Developer");
}

#[test]
fn loader_bins_money_spent_on_learning() {
    let records = read_records(sample_csv().as_bytes()).expect("load");
    assert_eq!(records[0].money_spent_on_learning, Some(250.0));
    assert_eq!(records[0].cost_of_learning_bin.as_deref(), Some("$101-500"));
    assert_eq!(records[2].cost_of_learning_bin.as_deref(), Some("$>10000"));
}

#[test]
fn malformed_money_field_leaves_the_record_unbinned() {
    let records = read_records(sample_csv().as_bytes()).expect("load");
    assert_eq!(records[1].money_spent_on_learning, None);
    assert_eq!(records[1].cost_of_learning_bin, None);
}

#[test]
fn loader_splits_tag_lists_but_keeps_events_whole() {
    let records = read_records(sample_csv().as_bytes()).expect("load");

    let online: Vec<&str> = records[0]
        .tags(ResourceChannel::OnlineResources)
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(online, ["freeCodeCamp", "EdX"]);

    let events: Vec<&str> = records[0]
        .tags(ResourceChannel::InPersonEvents)
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(events, ["Meetup.com events"]);

    assert!(records[2].tags(ResourceChannel::OnlineResources).is_empty());
}

#[test]
fn missing_column_is_a_fatal_load_error() {
    let csv = "ID,Interested_Careers\n1,Back-End Developer\n";
    let err = read_records(csv.as_bytes()).expect_err("should fail");
    assert!(matches!(err, DashError::DatasetLoad(_)));
}

#[test]
fn unreadable_file_is_a_fatal_load_error() {
    let err = load_records(Path::new("/nonexistent/survey.csv")).expect_err("should fail");
    assert!(matches!(err, DashError::DatasetLoad(_)));
}

#[test]
fn preprocess_records_normalizes_in_memory_records() {
    let mut records = vec![
        Record::new("1")
            .with_interested_career("I am not interested in a software development career")
            .with_money_spent_on_learning(40.0),
    ];

    preprocess_records(&mut records);

    assert_eq!(
        records[0].interested_career,
        "Not interested in software development"
    );
    assert_eq!(records[0].cost_of_learning_bin.as_deref(), Some("$0-100"));
}
