//! Typed schema for one survey respondent.
//!
//! Replaces the ad-hoc string-keyed field access of the source dataset with
//! explicit fields and accessors. Records are immutable after the dataset
//! loader finishes preprocessing them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::catalog::{self, ResourceChannel};

/// Grouping key used throughout the aggregation pipeline.
pub type Category = String;

/// Tag lists are short; four inline entries cover the common case.
pub type TagList = SmallVec<[String; 4]>;

/// Unique, string-backed respondent identifier from the dataset's `ID` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RespondentId(String);

impl RespondentId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RespondentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dimension the unit grid can be sorted and colored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDimension {
    #[default]
    Gender,
    Age,
    Location,
    UniversityStudy,
}

impl SortDimension {
    /// Parses the fixed string enums produced by the host's sort selector.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "gender" => Some(Self::Gender),
            "age" => Some(Self::Age),
            "location" => Some(Self::Location),
            "university-study" => Some(Self::UniversityStudy),
            _ => None,
        }
    }
}

/// One survey respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RespondentId,
    pub interested_career: Category,
    pub expected_salary_band: Category,
    pub top_reason: Category,
    pub location: Category,
    pub age_band: Category,
    pub self_perception: Category,
    pub university_study: Category,
    /// Raw dollars spent on learning; `None` when the field was empty or malformed.
    pub money_spent_on_learning: Option<f64>,
    /// Derived once at load time; `None` means the record stays unbinned.
    pub cost_of_learning_bin: Option<Category>,
    pub helpful_online_resources: TagList,
    pub helpful_podcasts: TagList,
    pub helpful_youtube_channels: TagList,
    pub helpful_in_person_events: TagList,
}

impl Record {
    /// Creates an empty record with the given id; pair with the `with_*`
    /// builders when constructing records in memory.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RespondentId::new(id),
            interested_career: String::new(),
            expected_salary_band: String::new(),
            top_reason: String::new(),
            location: String::new(),
            age_band: String::new(),
            self_perception: String::new(),
            university_study: String::new(),
            money_spent_on_learning: None,
            cost_of_learning_bin: None,
            helpful_online_resources: TagList::new(),
            helpful_podcasts: TagList::new(),
            helpful_youtube_channels: TagList::new(),
            helpful_in_person_events: TagList::new(),
        }
    }

    #[must_use]
    pub fn with_interested_career(mut self, value: impl Into<String>) -> Self {
        self.interested_career = value.into();
        self
    }

    #[must_use]
    pub fn with_expected_salary_band(mut self, value: impl Into<String>) -> Self {
        self.expected_salary_band = value.into();
        self
    }

    #[must_use]
    pub fn with_top_reason(mut self, value: impl Into<String>) -> Self {
        self.top_reason = value.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, value: impl Into<String>) -> Self {
        self.location = value.into();
        self
    }

    #[must_use]
    pub fn with_age_band(mut self, value: impl Into<String>) -> Self {
        self.age_band = value.into();
        self
    }

    #[must_use]
    pub fn with_self_perception(mut self, value: impl Into<String>) -> Self {
        self.self_perception = value.into();
        self
    }

    #[must_use]
    pub fn with_university_study(mut self, value: impl Into<String>) -> Self {
        self.university_study = value.into();
        self
    }

    #[must_use]
    pub fn with_money_spent_on_learning(mut self, value: f64) -> Self {
        self.money_spent_on_learning = Some(value);
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, channel: ResourceChannel, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list: TagList = tags.into_iter().map(Into::into).collect();
        match channel {
            ResourceChannel::OnlineResources => self.helpful_online_resources = list,
            ResourceChannel::Podcasts => self.helpful_podcasts = list,
            ResourceChannel::YoutubeChannels => self.helpful_youtube_channels = list,
            ResourceChannel::InPersonEvents => self.helpful_in_person_events = list,
        }
        self
    }

    /// Tag list carried by this record for one resource channel.
    #[must_use]
    pub fn tags(&self, channel: ResourceChannel) -> &[String] {
        match channel {
            ResourceChannel::OnlineResources => &self.helpful_online_resources,
            ResourceChannel::Podcasts => &self.helpful_podcasts,
            ResourceChannel::YoutubeChannels => &self.helpful_youtube_channels,
            ResourceChannel::InPersonEvents => &self.helpful_in_person_events,
        }
    }

    /// Category used for both sorting and legend fill under a sort dimension.
    ///
    /// For `UniversityStudy` the free-text answer maps to its aggregate study
    /// group; unmatched answers pass through verbatim.
    #[must_use]
    pub fn sort_key(&self, dimension: SortDimension) -> Category {
        match dimension {
            SortDimension::Gender => self.self_perception.clone(),
            SortDimension::Age => self.age_band.clone(),
            SortDimension::Location => self.location.clone(),
            SortDimension::UniversityStudy => catalog::study_group_for(&self.university_study)
                .map_or_else(|| self.university_study.clone(), str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_maps_university_study_to_aggregate_group() {
        let record = Record::new("r1").with_university_study("Mathematics or statistics");
        assert_eq!(record.sort_key(SortDimension::UniversityStudy), "Math");
    }

    #[test]
    fn sort_key_passes_unknown_study_through_verbatim() {
        let record = Record::new("r1").with_university_study("circus school");
        assert_eq!(
            record.sort_key(SortDimension::UniversityStudy),
            "circus school"
        );
    }

    #[test]
    fn sort_dimension_parses_host_selector_values() {
        assert_eq!(SortDimension::parse("gender"), Some(SortDimension::Gender));
        assert_eq!(
            SortDimension::parse("university-study"),
            Some(SortDimension::UniversityStudy)
        );
        assert_eq!(SortDimension::parse("shoe-size"), None);
    }
}
