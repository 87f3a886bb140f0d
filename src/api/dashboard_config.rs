use serde::{Deserialize, Serialize};

use crate::core::catalog::COMPACT_GRID_THRESHOLD;
use crate::core::record::SortDimension;
use crate::error::{DashError, DashResult};

/// Dashboard bootstrap configuration.
///
/// This type is serializable so host applications can persist/load dashboard
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial sort dimension of the unit grid.
    #[serde(default)]
    pub sort_dimension: SortDimension,
    /// Record count at which the unit grid switches to its compact layout.
    #[serde(default = "default_compact_grid_threshold")]
    pub compact_grid_threshold: usize,
    /// Bubble radius range `(min, max)` for the cluster view.
    #[serde(default = "default_bubble_radius_range")]
    pub bubble_radius_range: (f64, f64),
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sort_dimension(mut self, dimension: SortDimension) -> Self {
        self.sort_dimension = dimension;
        self
    }

    #[must_use]
    pub fn with_compact_grid_threshold(mut self, threshold: usize) -> Self {
        self.compact_grid_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_bubble_radius_range(mut self, min: f64, max: f64) -> Self {
        self.bubble_radius_range = (min, max);
        self
    }

    pub fn validate(&self) -> DashResult<()> {
        let (min, max) = self.bubble_radius_range;
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(DashError::InvalidData(format!(
                "bubble radius range ({min}, {max}) must be finite, positive, and ordered"
            )));
        }
        if self.compact_grid_threshold == 0 {
            return Err(DashError::InvalidData(
                "compact grid threshold must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sort_dimension: SortDimension::default(),
            compact_grid_threshold: default_compact_grid_threshold(),
            bubble_radius_range: default_bubble_radius_range(),
        }
    }
}

fn default_compact_grid_threshold() -> usize {
    COMPACT_GRID_THRESHOLD
}

fn default_bubble_radius_range() -> (f64, f64) {
    (5.0, 90.0)
}
