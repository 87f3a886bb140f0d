//! Bubble cluster of recognized learning-resource tags.
//!
//! Counts tag frequency across the four keyword catalogs; bubble radius maps
//! the count through a square-root scale so mark area tracks popularity.
//! This view publishes nothing and reacts to reason filtering only through
//! coordinator-driven `update` calls.

use crate::core::aggregate::tag_frequency;
use crate::core::catalog::keyword_catalogs;
use crate::core::record::Record;
use crate::core::scale::SqrtScale;
use crate::error::DashResult;
use crate::render::{ClusterMark, ClusterScene, Renderer, Scene};

use super::view_phase::{ViewPhase, ensure_ready};

/// Default radius range the count domain maps onto.
const DEFAULT_RADIUS_RANGE: (f64, f64) = (5.0, 90.0);

pub struct ClusterView<R: Renderer> {
    renderer: R,
    phase: ViewPhase,
    radius_range: (f64, f64),
    marks: Vec<ClusterMark>,
}

impl<R: Renderer> ClusterView<R> {
    pub fn new(renderer: R, records: &[Record]) -> DashResult<Self> {
        Self::with_radius_range(renderer, records, DEFAULT_RADIUS_RANGE)
    }

    pub fn with_radius_range(
        renderer: R,
        records: &[Record],
        radius_range: (f64, f64),
    ) -> DashResult<Self> {
        let mut view = Self {
            renderer,
            phase: ViewPhase::Uninitialized,
            radius_range,
            marks: Vec::new(),
        };
        view.aggregate(records)?;
        view.phase = ViewPhase::Ready;
        view.render()?;
        Ok(view)
    }

    fn aggregate(&mut self, records: &[Record]) -> DashResult<()> {
        let rows = tag_frequency(records, &keyword_catalogs());
        // Rows are count-descending, so the first row carries the domain max.
        let max_count = rows.first().map_or(0, |row| row.count);
        let scale = SqrtScale::new(max_count as f64, self.radius_range.0, self.radius_range.1)?;
        self.marks = rows
            .into_iter()
            .map(|row| ClusterMark {
                radius: scale.radius(row.count as f64),
                channel: row.channel,
                tag: row.tag,
                count: row.count,
                percentage: row.percentage,
            })
            .collect();
        Ok(())
    }

    /// Re-aggregates over a new record set and re-renders.
    pub fn update(&mut self, records: &[Record]) -> DashResult<()> {
        ensure_ready(self.phase, "cluster")?;
        self.aggregate(records)?;
        self.render()
    }

    #[must_use]
    pub fn scene(&self) -> ClusterScene {
        ClusterScene {
            marks: self.marks.clone(),
        }
    }

    pub fn render(&mut self) -> DashResult<()> {
        let scene = Scene::Cluster(self.scene());
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
