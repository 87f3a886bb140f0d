//! Treemap of top reasons for learning to code.
//!
//! This view owns the reason filter trigger: clicking a region toggles the
//! reason selection that the coordinator fans out to every other view. Its
//! own aggregation always covers the full dataset, so region sizes stay
//! stable while the rest of the dashboard filters.

use indexmap::IndexMap;

use crate::core::aggregate::count_by_category;
use crate::core::record::{Category, Record};
use crate::error::DashResult;
use crate::render::{RegionMark, RegionScene, Renderer, Scene};

use super::view_phase::{ViewPhase, ensure_ready};

pub struct RegionView<R: Renderer> {
    renderer: R,
    phase: ViewPhase,
    reason_counts: IndexMap<Category, usize>,
    selected_reason: Option<Category>,
}

impl<R: Renderer> RegionView<R> {
    pub fn new(renderer: R, records: &[Record]) -> DashResult<Self> {
        let mut view = Self {
            renderer,
            phase: ViewPhase::Uninitialized,
            reason_counts: IndexMap::new(),
            selected_reason: None,
        };
        view.reason_counts = count_by_category(records, |r| r.top_reason.clone());
        view.phase = ViewPhase::Ready;
        view.render()?;
        Ok(view)
    }

    /// Re-aggregates over a new record set and re-renders.
    ///
    /// The coordinator never routes reason-filtered data here; this exists
    /// for hosts that replace the dataset wholesale.
    pub fn update(&mut self, records: &[Record]) -> DashResult<()> {
        ensure_ready(self.phase, "region")?;
        self.reason_counts = count_by_category(records, |r| r.top_reason.clone());
        self.render()
    }

    /// Applies a reason selection and re-renders the highlight.
    pub fn set_selected_reason(&mut self, selection: Option<Category>) -> DashResult<()> {
        ensure_ready(self.phase, "region")?;
        self.selected_reason = selection;
        self.render()
    }

    #[must_use]
    pub fn scene(&self) -> RegionScene {
        let mut marks: Vec<RegionMark> = self
            .reason_counts
            .iter()
            .map(|(reason, &count)| {
                let selected = self.selected_reason.as_deref() == Some(reason.as_str());
                RegionMark {
                    reason: reason.clone(),
                    count,
                    selected,
                    dimmed: self.selected_reason.is_some() && !selected,
                }
            })
            .collect();
        marks.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.reason.cmp(&b.reason))
        });
        RegionScene { marks }
    }

    pub fn render(&mut self) -> DashResult<()> {
        let scene = Scene::Region(self.scene());
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn selected_reason(&self) -> Option<&Category> {
        self.selected_reason.as_ref()
    }

    #[must_use]
    pub fn reason_counts(&self) -> &IndexMap<Category, usize> {
        &self.reason_counts
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.reason_counts.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
