//! Shaped per-view scenes handed to rendering backends.
//!
//! Each mark carries a stable key (a category label or respondent id) so
//! backends can reconcile against existing output instead of appending
//! blindly; `validate` enforces key uniqueness along with basic numeric
//! sanity. Scenes carry no colors or geometry.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::catalog::ResourceChannel;
use crate::core::record::{Category, RespondentId};
use crate::error::{DashError, DashResult};

/// One career bar plus its modal-salary line point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrendMark {
    pub category: Category,
    pub count: usize,
    pub modal_salary_band: Option<Category>,
    /// Position of the modal band on the ordinal salary axis, when the band
    /// is in the catalog.
    pub salary_band_index: Option<usize>,
    pub emphasized: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTrendScene {
    /// Sorted count descending, ties alphabetical.
    pub marks: Vec<CategoryTrendMark>,
    /// The ordinal salary-band domain for the right-hand axis.
    pub salary_axis: Vec<Category>,
    pub selected: Option<Category>,
}

/// One bubble for a recognized tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMark {
    pub channel: ResourceChannel,
    pub tag: Category,
    pub count: usize,
    pub percentage: Decimal,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterScene {
    /// Sorted count descending.
    pub marks: Vec<ClusterMark>,
}

/// One dot per respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMark {
    pub id: RespondentId,
    pub fill_category: Category,
    pub emphasized: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridDensity {
    Roomy,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitGridScene {
    /// In active-sort order.
    pub marks: Vec<UnitMark>,
    /// Legend categories for the active sort dimension.
    pub legend: Vec<Category>,
    pub density: GridDensity,
}

/// One weighted edge between two nodes, by index into `FlowScene::nodes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub weight: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowScene {
    /// Source locations in first-encounter order, then cost bins in catalog
    /// order.
    pub nodes: Vec<Category>,
    /// Only nonzero weights.
    pub links: Vec<FlowLink>,
}

/// One treemap region for a top reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMark {
    pub reason: Category,
    pub count: usize,
    pub selected: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionScene {
    /// Sorted count descending, ties alphabetical.
    pub marks: Vec<RegionMark>,
}

/// Shaped output of one view's render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scene {
    CategoryTrend(CategoryTrendScene),
    Cluster(ClusterScene),
    UnitGrid(UnitGridScene),
    Flow(FlowScene),
    Region(RegionScene),
}

impl Scene {
    pub fn validate(&self) -> DashResult<()> {
        match self {
            Self::CategoryTrend(scene) => scene.validate(),
            Self::Cluster(scene) => scene.validate(),
            Self::UnitGrid(scene) => scene.validate(),
            Self::Flow(scene) => scene.validate(),
            Self::Region(scene) => scene.validate(),
        }
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        match self {
            Self::CategoryTrend(scene) => scene.marks.len(),
            Self::Cluster(scene) => scene.marks.len(),
            Self::UnitGrid(scene) => scene.marks.len(),
            Self::Flow(scene) => scene.links.len(),
            Self::Region(scene) => scene.marks.len(),
        }
    }
}

fn ensure_unique<'a, I>(keys: I, what: &str) -> DashResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DashError::InvalidScene(format!(
                "duplicate {what} `{key}`"
            )));
        }
    }
    Ok(())
}

impl CategoryTrendScene {
    pub fn validate(&self) -> DashResult<()> {
        ensure_unique(self.marks.iter().map(|m| m.category.as_str()), "category")?;
        for mark in &self.marks {
            if mark.count == 0 {
                return Err(DashError::InvalidScene(format!(
                    "category `{}` has zero count",
                    mark.category
                )));
            }
            if let Some(index) = mark.salary_band_index {
                if index >= self.salary_axis.len() {
                    return Err(DashError::InvalidScene(format!(
                        "salary band index {index} outside axis of {} bands",
                        self.salary_axis.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl ClusterScene {
    pub fn validate(&self) -> DashResult<()> {
        let mut seen: HashSet<(ResourceChannel, &str)> = HashSet::new();
        for mark in &self.marks {
            if !seen.insert((mark.channel, mark.tag.as_str())) {
                return Err(DashError::InvalidScene(format!(
                    "duplicate tag `{}` in channel {:?}",
                    mark.tag, mark.channel
                )));
            }
            if mark.count == 0 {
                return Err(DashError::InvalidScene(format!(
                    "tag `{}` has zero count",
                    mark.tag
                )));
            }
            if !mark.radius.is_finite() || mark.radius <= 0.0 {
                return Err(DashError::InvalidScene(format!(
                    "tag `{}` has non-positive radius",
                    mark.tag
                )));
            }
        }
        Ok(())
    }
}

impl UnitGridScene {
    pub fn validate(&self) -> DashResult<()> {
        ensure_unique(self.marks.iter().map(|m| m.id.as_str()), "respondent id")
    }
}

impl FlowScene {
    pub fn validate(&self) -> DashResult<()> {
        ensure_unique(self.nodes.iter().map(String::as_str), "flow node")?;
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for link in &self.links {
            if link.source >= self.nodes.len() || link.target >= self.nodes.len() {
                return Err(DashError::InvalidScene(format!(
                    "link {} -> {} outside {} nodes",
                    link.source,
                    link.target,
                    self.nodes.len()
                )));
            }
            if link.weight == 0 {
                return Err(DashError::InvalidScene(format!(
                    "link {} -> {} has zero weight",
                    link.source, link.target
                )));
            }
            if !seen.insert((link.source, link.target)) {
                return Err(DashError::InvalidScene(format!(
                    "duplicate link {} -> {}",
                    link.source, link.target
                )));
            }
        }
        Ok(())
    }
}

impl RegionScene {
    pub fn validate(&self) -> DashResult<()> {
        ensure_unique(self.marks.iter().map(|m| m.reason.as_str()), "reason")?;
        for mark in &self.marks {
            if mark.count == 0 {
                return Err(DashError::InvalidScene(format!(
                    "reason `{}` has zero count",
                    mark.reason
                )));
            }
        }
        Ok(())
    }
}
