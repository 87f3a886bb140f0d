//! CSV ingestion and one-time preprocessing for the survey dataset.
//!
//! Loading happens once at startup. Rows deserialize into a raw shape that
//! mirrors the CSV header, then preprocessing splits tag lists, collapses the
//! oversized career label, and bins money spent on learning. A missing or
//! malformed numeric field leaves the record unbinned instead of failing the
//! load; an unreadable file or missing column is fatal.

use std::io;
use std::path::Path;

use serde::Deserialize;
use smallvec::smallvec;
use tracing::debug;

use crate::core::aggregate::CostBinner;
use crate::core::catalog::normalize_career;
use crate::core::record::{Record, RespondentId, TagList};
use crate::error::{DashError, DashResult};

/// Raw CSV row as exported by the survey tool.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Interested_Careers")]
    interested_careers: String,
    #[serde(rename = "Expected_Salary")]
    expected_salary: String,
    #[serde(rename = "Top_Reason")]
    top_reason: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Age")]
    age: String,
    #[serde(rename = "Self_Perception")]
    self_perception: String,
    #[serde(rename = "University_Study")]
    university_study: String,
    #[serde(rename = "Money_Spent_on_Learning")]
    money_spent_on_learning: String,
    #[serde(rename = "Helpful_Online_Resources")]
    helpful_online_resources: String,
    #[serde(rename = "Helpful_Podcasts")]
    helpful_podcasts: String,
    #[serde(rename = "Helpful_YouTube_Channels")]
    helpful_youtube_channels: String,
    #[serde(rename = "Helpful_In_Person_Events")]
    helpful_in_person_events: String,
}

/// Loads and preprocesses the survey dataset from a CSV file.
pub fn load_records(path: &Path) -> DashResult<Vec<Record>> {
    let reader = csv::Reader::from_path(path)
        .map_err(|e| DashError::DatasetLoad(format!("failed to open `{}`: {e}", path.display())))?;
    read_rows(reader)
}

/// Loads and preprocesses the survey dataset from any reader.
pub fn read_records<R: io::Read>(input: R) -> DashResult<Vec<Record>> {
    read_rows(csv::Reader::from_reader(input))
}

fn read_rows<R: io::Read>(mut reader: csv::Reader<R>) -> DashResult<Vec<Record>> {
    let binner = CostBinner::cost_of_learning();
    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let row = row.map_err(|e| DashError::DatasetLoad(format!("malformed row: {e}")))?;
        records.push(record_from_row(row, binner));
    }
    debug!(count = records.len(), "loaded survey records");
    Ok(records)
}

fn record_from_row(row: RawRow, binner: CostBinner) -> Record {
    let money_spent_on_learning = parse_money(&row.money_spent_on_learning);
    let cost_of_learning_bin = money_spent_on_learning
        .and_then(|spent| binner.bin(spent))
        .map(str::to_owned);

    Record {
        id: RespondentId::new(row.id),
        interested_career: normalize_career(&row.interested_careers).to_owned(),
        expected_salary_band: row.expected_salary,
        top_reason: row.top_reason,
        location: row.location,
        age_band: row.age,
        self_perception: row.self_perception,
        university_study: row.university_study,
        money_spent_on_learning,
        cost_of_learning_bin,
        helpful_online_resources: split_tags(&row.helpful_online_resources),
        helpful_podcasts: split_tags(&row.helpful_podcasts),
        helpful_youtube_channels: split_tags(&row.helpful_youtube_channels),
        // The events column holds a single whole answer; keep it unsplit so
        // matching stays byte-exact against the event catalog.
        helpful_in_person_events: whole_tag(&row.helpful_in_person_events),
    }
}

fn parse_money(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn split_tags(raw: &str) -> TagList {
    if raw.is_empty() {
        return TagList::new();
    }
    raw.split(", ").map(str::to_owned).collect()
}

fn whole_tag(raw: &str) -> TagList {
    if raw.is_empty() {
        return TagList::new();
    }
    smallvec![raw.to_owned()]
}

/// Applies load-time preprocessing to records built in memory: career-label
/// normalization and cost-of-learning binning.
pub fn preprocess_records(records: &mut [Record]) {
    let binner = CostBinner::cost_of_learning();
    for record in records {
        record.interested_career = normalize_career(&record.interested_career).to_owned();
        record.cost_of_learning_bin = record
            .money_spent_on_learning
            .and_then(|spent| binner.bin(spent))
            .map(str::to_owned);
    }
}
