//! One-dot-per-respondent matrix.
//!
//! Pass-through aggregation: the view keeps a sorted copy of the records,
//! ordered and colored by the active sort dimension. Clicking a dot toggles
//! the career selection (routed through the dashboard); career changes from
//! elsewhere re-render the highlight only.

use crate::core::catalog::{COMPACT_GRID_THRESHOLD, legend_domain};
use crate::core::record::{Category, Record, RespondentId, SortDimension};
use crate::error::DashResult;
use crate::render::{GridDensity, Renderer, Scene, UnitGridScene, UnitMark};

use super::view_phase::{ViewPhase, ensure_ready};

pub struct UnitDotView<R: Renderer> {
    renderer: R,
    phase: ViewPhase,
    records: Vec<Record>,
    sort_dimension: SortDimension,
    compact_threshold: usize,
    selected_career: Option<Category>,
}

impl<R: Renderer> UnitDotView<R> {
    pub fn new(renderer: R, records: &[Record]) -> DashResult<Self> {
        Self::with_layout(
            renderer,
            records,
            SortDimension::default(),
            COMPACT_GRID_THRESHOLD,
        )
    }

    pub fn with_layout(
        renderer: R,
        records: &[Record],
        sort_dimension: SortDimension,
        compact_threshold: usize,
    ) -> DashResult<Self> {
        let mut view = Self {
            renderer,
            phase: ViewPhase::Uninitialized,
            records: records.to_vec(),
            sort_dimension,
            compact_threshold,
            selected_career: None,
        };
        view.resort();
        view.phase = ViewPhase::Ready;
        view.render()?;
        Ok(view)
    }

    fn resort(&mut self) {
        let dimension = self.sort_dimension;
        // Stable sort keeps the incoming order within equal categories.
        self.records.sort_by_cached_key(|r| r.sort_key(dimension));
    }

    /// Replaces the record set, re-sorts, and re-renders.
    pub fn update(&mut self, records: &[Record]) -> DashResult<()> {
        ensure_ready(self.phase, "unit dot")?;
        self.records = records.to_vec();
        self.resort();
        self.render()
    }

    /// Switches the active sort dimension, re-sorts, and re-renders.
    pub fn set_sort_dimension(&mut self, dimension: SortDimension) -> DashResult<()> {
        ensure_ready(self.phase, "unit dot")?;
        self.sort_dimension = dimension;
        self.resort();
        self.render()
    }

    /// Applies a career selection and re-renders the highlight.
    pub fn set_selected_career(&mut self, selection: Option<Category>) -> DashResult<()> {
        ensure_ready(self.phase, "unit dot")?;
        self.selected_career = selection;
        self.render()
    }

    /// Career of the respondent behind one dot, if present in this view.
    #[must_use]
    pub fn career_of(&self, id: &RespondentId) -> Option<&Category> {
        self.records
            .iter()
            .find(|r| r.id == *id)
            .map(|r| &r.interested_career)
    }

    #[must_use]
    pub fn scene(&self) -> UnitGridScene {
        let marks = self
            .records
            .iter()
            .map(|record| {
                let emphasized =
                    self.selected_career.as_deref() == Some(record.interested_career.as_str());
                UnitMark {
                    id: record.id.clone(),
                    fill_category: record.sort_key(self.sort_dimension),
                    emphasized,
                    dimmed: self.selected_career.is_some() && !emphasized,
                }
            })
            .collect();
        let density = if self.records.len() < self.compact_threshold {
            GridDensity::Roomy
        } else {
            GridDensity::Compact
        };

        UnitGridScene {
            marks,
            legend: legend_domain(self.sort_dimension)
                .iter()
                .map(|category| (*category).to_owned())
                .collect(),
            density,
        }
    }

    pub fn render(&mut self) -> DashResult<()> {
        let scene = Scene::UnitGrid(self.scene());
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn sort_dimension(&self) -> SortDimension {
        self.sort_dimension
    }

    #[must_use]
    pub fn selected_career(&self) -> Option<&Category> {
        self.selected_career.as_ref()
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
