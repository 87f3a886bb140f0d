//! Pure aggregation operations over survey records.
//!
//! Every function here is stateless: records in, summary out. Results keep
//! first-encounter order (`IndexMap`) so callers get deterministic output for
//! deterministic input; unrecognized category values pass through verbatim
//! instead of failing the pipeline. Empty record sets yield empty results.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::catalog::{COST_BIN_BOUNDARIES, COST_BIN_LABELS, KeywordCatalog, ResourceChannel};
use crate::core::record::{Category, Record};
use crate::error::{DashError, DashResult};

/// Counts records per category.
///
/// The counts partition the input: they always sum to `records.len()`.
pub fn count_by_category<F>(records: &[Record], key_fn: F) -> IndexMap<Category, usize>
where
    F: Fn(&Record) -> Category,
{
    let mut counts: IndexMap<Category, usize> = IndexMap::new();
    for record in records {
        *counts.entry(key_fn(record)).or_insert(0) += 1;
    }
    counts
}

/// One nonempty (outer, inner) cell of a nested grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    pub outer: Category,
    pub inner: Category,
    pub count: usize,
}

/// Groups records by an outer then an inner key, counting each pair.
///
/// Records for which either key function returns `None` are skipped, and only
/// pairs that actually occur are emitted; a zero-count pair never appears.
/// Rows come out in first-encounter order of the (outer, inner) pair.
pub fn group_and_count_nested<F, G>(records: &[Record], outer_fn: F, inner_fn: G) -> Vec<GroupedCount>
where
    F: Fn(&Record) -> Option<Category>,
    G: Fn(&Record) -> Option<Category>,
{
    let mut counts: IndexMap<(Category, Category), usize> = IndexMap::new();
    for record in records {
        let (Some(outer), Some(inner)) = (outer_fn(record), inner_fn(record)) else {
            continue;
        };
        *counts.entry((outer, inner)).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((outer, inner), count)| GroupedCount {
            outer,
            inner,
            count,
        })
        .collect()
}

/// Picks the most frequent value per group.
///
/// Ties break deterministically: among equally frequent values the
/// lexicographically smallest wins, regardless of input order.
pub fn modal_value_per_group<F, G>(
    records: &[Record],
    group_fn: F,
    value_fn: G,
) -> IndexMap<Category, Category>
where
    F: Fn(&Record) -> Category,
    G: Fn(&Record) -> Category,
{
    let mut groups: IndexMap<Category, IndexMap<Category, usize>> = IndexMap::new();
    for record in records {
        *groups
            .entry(group_fn(record))
            .or_default()
            .entry(value_fn(record))
            .or_insert(0) += 1;
    }

    let mut modal: IndexMap<Category, Category> = IndexMap::with_capacity(groups.len());
    for (group, value_counts) in groups {
        let mut best: Option<(Category, usize)> = None;
        for (value, count) in value_counts {
            let replace = match &best {
                None => true,
                Some((best_value, best_count)) => {
                    count > *best_count || (count == *best_count && value < *best_value)
                }
            };
            if replace {
                best = Some((value, count));
            }
        }
        if let Some((value, _)) = best {
            modal.insert(group, value);
        }
    }
    modal
}

/// One recognized tag with its frequency within a channel catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub channel: ResourceChannel,
    pub tag: Category,
    pub count: usize,
    /// Share of the channel's total recognized tags, rounded to 2 decimals.
    pub percentage: Decimal,
}

/// Share of `count` in `total` as a percentage rounded to 2 decimal places.
///
/// Defined as 0 when the total is 0, so empty catalogs never divide by zero.
#[must_use]
pub fn percentage_of(count: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(count as u64) / Decimal::from(total as u64) * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Counts how many records' tag lists contain each recognized tag, per catalog.
///
/// A record counts at most once per tag even if its list repeats the tag.
/// Tags outside a catalog are ignored; zero-count tags are not emitted, so an
/// empty record set produces an empty result. Rows are generated in catalog
/// order and then stably sorted by count descending across all catalogs.
pub fn tag_frequency(records: &[Record], catalogs: &[KeywordCatalog]) -> Vec<TagCount> {
    let mut rows: Vec<TagCount> = Vec::new();
    for catalog in catalogs {
        let tag_counts: Vec<(&'static str, usize)> = catalog
            .tags
            .iter()
            .map(|tag| {
                let count = records
                    .iter()
                    .filter(|record| record.tags(catalog.channel).iter().any(|t| t == tag))
                    .count();
                (*tag, count)
            })
            .collect();

        let total: usize = tag_counts.iter().map(|(_, count)| count).sum();
        for (tag, count) in tag_counts {
            if count == 0 {
                continue;
            }
            rows.push(TagCount {
                channel: catalog.channel,
                tag: tag.to_owned(),
                count,
                percentage: percentage_of(count, total),
            });
        }
    }
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Maps a numeric value to the label of the half-open interval
/// `[boundaries[i], boundaries[i + 1])` it falls in.
///
/// A value at or above the last boundary clamps to the last label. Values
/// below the first boundary, NaN, and mismatched boundary/label lengths are
/// unbinned (`None`).
#[must_use]
pub fn bin_numeric<'a>(value: f64, boundaries: &[f64], labels: &'a [&'a str]) -> Option<&'a str> {
    if value.is_nan() || labels.is_empty() || labels.len() + 1 != boundaries.len() {
        return None;
    }
    if value < boundaries[0] {
        return None;
    }
    for (i, label) in labels.iter().enumerate() {
        if value < boundaries[i + 1] {
            return Some(label);
        }
    }
    labels.last().copied()
}

/// Cost-of-learning binner applied once by the dataset loader.
#[derive(Debug, Clone, Copy)]
pub struct CostBinner {
    boundaries: &'static [f64],
    labels: &'static [&'static str],
}

impl CostBinner {
    pub fn new(
        boundaries: &'static [f64],
        labels: &'static [&'static str],
    ) -> DashResult<Self> {
        if labels.is_empty() || labels.len() + 1 != boundaries.len() {
            return Err(DashError::InvalidCatalog(format!(
                "bin labels ({}) must number one fewer than boundaries ({})",
                labels.len(),
                boundaries.len()
            )));
        }
        if !boundaries.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(DashError::InvalidCatalog(
                "bin boundaries must be strictly increasing".to_owned(),
            ));
        }
        Ok(Self { boundaries, labels })
    }

    /// The binner for the fixed cost-of-learning catalog.
    #[must_use]
    pub fn cost_of_learning() -> Self {
        Self {
            boundaries: &COST_BIN_BOUNDARIES,
            labels: &COST_BIN_LABELS,
        }
    }

    #[must_use]
    pub fn bin(&self, value: f64) -> Option<&'static str> {
        bin_numeric(value, self.boundaries, self.labels)
    }
}
