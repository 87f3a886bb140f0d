pub mod aggregate;
pub mod catalog;
pub mod record;
pub mod scale;

pub use aggregate::{
    CostBinner, GroupedCount, TagCount, bin_numeric, count_by_category, group_and_count_nested,
    modal_value_per_group, percentage_of, tag_frequency,
};
pub use catalog::{KeywordCatalog, ResourceChannel};
pub use record::{Category, Record, RespondentId, SortDimension};
pub use scale::{LinearScale, SqrtScale};
