//! Location-to-cost flow diagram.
//!
//! Nested grouping by respondent location then cost-of-learning bin produces
//! the flow-edge weights. Unbinned records (no usable spend figure) are
//! skipped rather than surfacing a dangling node. The view publishes nothing
//! and reacts to reason filtering only through coordinator-driven `update`
//! calls.

use crate::core::aggregate::{GroupedCount, group_and_count_nested};
use crate::core::catalog::cost_bin_index;
use crate::core::record::{Category, Record};
use crate::error::DashResult;
use crate::render::{FlowLink, FlowScene, Renderer, Scene};

use super::view_phase::{ViewPhase, ensure_ready};

pub struct FlowView<R: Renderer> {
    renderer: R,
    phase: ViewPhase,
    rows: Vec<GroupedCount>,
}

impl<R: Renderer> FlowView<R> {
    pub fn new(renderer: R, records: &[Record]) -> DashResult<Self> {
        let mut view = Self {
            renderer,
            phase: ViewPhase::Uninitialized,
            rows: Vec::new(),
        };
        view.aggregate(records);
        view.phase = ViewPhase::Ready;
        view.render()?;
        Ok(view)
    }

    fn aggregate(&mut self, records: &[Record]) {
        self.rows = group_and_count_nested(
            records,
            |r| Some(r.location.clone()),
            |r| r.cost_of_learning_bin.clone(),
        );
    }

    /// Re-aggregates over a new record set and re-renders.
    pub fn update(&mut self, records: &[Record]) -> DashResult<()> {
        ensure_ready(self.phase, "flow")?;
        self.aggregate(records);
        self.render()
    }

    #[must_use]
    pub fn scene(&self) -> FlowScene {
        // Source locations in first-encounter order, then the cost bins that
        // actually occur, in catalog order.
        let mut nodes: Vec<Category> = Vec::new();
        for row in &self.rows {
            if !nodes.contains(&row.outer) {
                nodes.push(row.outer.clone());
            }
        }
        let mut bins: Vec<Category> = Vec::new();
        for row in &self.rows {
            if !bins.contains(&row.inner) {
                bins.push(row.inner.clone());
            }
        }
        bins.sort_by_key(|bin| cost_bin_index(bin).unwrap_or(usize::MAX));
        nodes.extend(bins);

        let links = self
            .rows
            .iter()
            .filter_map(|row| {
                let source = nodes.iter().position(|n| *n == row.outer)?;
                let target = nodes.iter().position(|n| *n == row.inner)?;
                Some(FlowLink {
                    source,
                    target,
                    weight: row.count,
                })
            })
            .collect();

        FlowScene { nodes, links }
    }

    pub fn render(&mut self) -> DashResult<()> {
        let scene = Scene::Flow(self.scene());
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn rows(&self) -> &[GroupedCount] {
        &self.rows
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
