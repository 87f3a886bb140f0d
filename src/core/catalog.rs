//! Static catalogs for the 2021 new-coder survey dataset.
//!
//! Everything here is enumerated at build time: ordinal salary bands,
//! cost-of-learning bin edges, aggregate study groups, the keyword lists used
//! for tag matching, and the legend domains per sort dimension. Lookup
//! functions never fail; values outside a catalog pass through verbatim and
//! surface downstream as their own bucket.

use serde::{Deserialize, Serialize};

use crate::core::record::SortDimension;

/// Expected-salary bands in ordinal order, lowest first.
pub const SALARY_BANDS: [&str; 12] = [
    "$0 to $4,999",
    "$5,000 to $9,999",
    "$10,000 to $20,999",
    "$20,000 to $29,999",
    "$30,000 to $49,999",
    "$50,000 to $74,999",
    "$75,000 to $99,999",
    "$100,000 to $124,999",
    "$125,000 to $159,999",
    "$160,000 to $199,999",
    "$200,000 to $249,999",
    "$250,000 or over",
];

/// Position of a salary band on the ordinal axis.
#[must_use]
pub fn salary_band_index(band: &str) -> Option<usize> {
    SALARY_BANDS.iter().position(|b| *b == band)
}

/// Half-open bin edges for money spent on learning, in US dollars.
pub const COST_BIN_BOUNDARIES: [f64; 6] = [0.0, 100.0, 500.0, 1000.0, 10_000.0, 100_000.0];

/// Labels for the cost-of-learning bins, in ordinal order.
pub const COST_BIN_LABELS: [&str; 5] = ["$0-100", "$101-500", "$501-1000", "$1001-10000", "$>10000"];

/// Position of a cost bin label on the ordinal axis.
#[must_use]
pub fn cost_bin_index(label: &str) -> Option<usize> {
    COST_BIN_LABELS.iter().position(|l| *l == label)
}

/// Long survey answer collapsed into a short display label at load time.
pub const CAREER_LABEL_LONG: &str = "I am not interested in a software development career";
pub const CAREER_LABEL_SHORT: &str = "Not interested in software development";

/// Collapses the one oversized career answer; every other value is unchanged.
#[must_use]
pub fn normalize_career(raw: &str) -> &str {
    if raw == CAREER_LABEL_LONG {
        CAREER_LABEL_SHORT
    } else {
        raw
    }
}

/// Aggregate study groups and the exact free-text answers each one covers.
pub const STUDY_GROUPS: [(&str, &[&str]); 8] = [
    (
        "Science",
        &[
            "A social science (e.g., sociology, psychology, political science, economics)",
            "A natural science (e.g., biology, chemistry, physics)",
            "A health science (e.g., nursing, pharmacy, radiology)",
            "Environmental science (e.g., earth sciences, sustainability)",
        ],
    ),
    (
        "Humanities",
        &[
            "A humanities discipline (e.g., literature, history, philosophy)",
            "Education",
        ],
    ),
    (
        "Information Technology",
        &[
            "Information systems, information technology, or system administration",
            "Computer science, computer engineering, software engineering or data science",
        ],
    ),
    ("Math", &["Mathematics or statistics"]),
    (
        "Arts",
        &["Fine arts or performing arts (e.g., graphic design, music, studio, art)"],
    ),
    (
        "Business",
        &["A business discipline (e.g., accounting, finance, marketing)"],
    ),
    (
        "Engineering",
        &["Another engineering discipline (e.g., civil, electrical, mechanical)"],
    ),
    ("Other", &["I didn't attend a university", "Undecided or no major"]),
];

/// Maps a free-text university study answer to its aggregate group.
///
/// Returns `None` for answers outside the catalog; callers keep the raw value
/// in that case rather than failing.
#[must_use]
pub fn study_group_for(university_study: &str) -> Option<&'static str> {
    STUDY_GROUPS
        .iter()
        .find(|(_, members)| members.contains(&university_study))
        .map(|(group, _)| *group)
}

/// One channel of learning-resource tags carried by each survey record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceChannel {
    OnlineResources,
    Podcasts,
    YoutubeChannels,
    InPersonEvents,
}

impl ResourceChannel {
    /// Human-readable channel label used by legends and tooltips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnlineResources => "Helpful Online Resources",
            Self::Podcasts => "Helpful Podcasts",
            Self::YoutubeChannels => "Helpful YouTube Channels",
            Self::InPersonEvents => "Helpful In Person Events",
        }
    }
}

/// Fixed tag list recognized for one resource channel.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCatalog {
    pub channel: ResourceChannel,
    pub tags: &'static [&'static str],
}

pub const ONLINE_RESOURCE_TAGS: [&str; 15] = [
    "freeCodeCamp",
    "Mozilla Developer Network (MDN)",
    "EdX",
    "Codecademy",
    "Udemy",
    "Code Wars",
    "Front End Masters",
    "Lynda.com",
    "CSS Tricks",
    "Coursera",
    "Khan Academy",
    "Pluralsight",
    "HackerRank",
    "Stack Overflow",
    "W3Schools",
];

pub const PODCAST_TAGS: [&str; 13] = [
    "Code Newbie Podcast",
    "Darknet Diaries",
    "Syntax.fm",
    "Learn To Code With Me",
    "Talk Python to Me",
    "Cyberwire Daily",
    "The Changelog",
    "Indie Hackers",
    "Developer Tea",
    "JS PARTY",
    "Ladybug Podcast",
    "Software Engineering Daily",
    "Practical AI",
];

pub const YOUTUBE_CHANNEL_TAGS: [&str; 16] = [
    "Ben Awad",
    // Spelled as exported by the survey tool; must match the raw data bytes.
    "Code with Ania KubÃ³w",
    "CodeStacker",
    "Coding Train",
    "Dev Ed",
    "freeCodeCamp",
    "Google Developers",
    "James Q Quick",
    "Kevin Powell",
    "The Net Ninja",
    "Traversy Media",
    "CS Dojo",
    "Programming With Mosh",
    "Fireship",
    "Coding Addict",
    "DesignCourse",
];

pub const IN_PERSON_EVENT_TAGS: [&str; 8] = [
    "workshops",
    "hackathons",
    "freeCodeCamp study groups",
    "conferences",
    "weekend bootcamps",
    "Women Who Code",
    "Meetup.com events",
    "school",
];

/// The four keyword catalogs in display order.
#[must_use]
pub fn keyword_catalogs() -> [KeywordCatalog; 4] {
    [
        KeywordCatalog {
            channel: ResourceChannel::OnlineResources,
            tags: &ONLINE_RESOURCE_TAGS,
        },
        KeywordCatalog {
            channel: ResourceChannel::Podcasts,
            tags: &PODCAST_TAGS,
        },
        KeywordCatalog {
            channel: ResourceChannel::YoutubeChannels,
            tags: &YOUTUBE_CHANNEL_TAGS,
        },
        KeywordCatalog {
            channel: ResourceChannel::InPersonEvents,
            tags: &IN_PERSON_EVENT_TAGS,
        },
    ]
}

pub const GENDER_CATEGORIES: [&str; 4] = ["Female", "Male", "Nonbinary", "None of the Above"];

pub const AGE_BANDS: [&str; 8] = [
    "10-18", "19-27", "28-36", "37-45", "46-54", "55-63", "64-72", "73+",
];

pub const LOCATIONS: [&str; 8] = [
    "East Asia and Pacific",
    "Europe and Central Asia",
    "Latin America and Caribbean",
    "Middle East and North Africa",
    "North America",
    "South Asia",
    "Southeast Asia",
    "Sub-Saharan Africa",
];

pub const STUDY_GROUP_NAMES: [&str; 8] = [
    "Arts",
    "Business",
    "Engineering",
    "Humanities",
    "Information Technology",
    "Math",
    "Other",
    "Science",
];

/// Legend categories shown for a unit-grid sort dimension.
#[must_use]
pub fn legend_domain(dimension: SortDimension) -> &'static [&'static str] {
    match dimension {
        SortDimension::Gender => &GENDER_CATEGORIES,
        SortDimension::Age => &AGE_BANDS,
        SortDimension::Location => &LOCATIONS,
        SortDimension::UniversityStudy => &STUDY_GROUP_NAMES,
    }
}

/// Record count at which the unit grid switches to its compact layout.
pub const COMPACT_GRID_THRESHOLD: usize = 768;
