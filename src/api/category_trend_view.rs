//! Bar+line combo over interested careers.
//!
//! Bars count respondents per career; the line overlays the modal expected
//! salary band per career on the ordinal salary axis. Career selection
//! changes re-render the highlight only, without re-aggregating.

use indexmap::IndexMap;

use crate::core::aggregate::{count_by_category, modal_value_per_group};
use crate::core::catalog::{SALARY_BANDS, salary_band_index};
use crate::core::record::{Category, Record};
use crate::error::DashResult;
use crate::render::{CategoryTrendMark, CategoryTrendScene, Renderer, Scene};

use super::view_phase::{ViewPhase, ensure_ready};

pub struct CategoryTrendView<R: Renderer> {
    renderer: R,
    phase: ViewPhase,
    career_counts: IndexMap<Category, usize>,
    modal_salary_bands: IndexMap<Category, Category>,
    selected_career: Option<Category>,
}

impl<R: Renderer> CategoryTrendView<R> {
    pub fn new(renderer: R, records: &[Record]) -> DashResult<Self> {
        let mut view = Self {
            renderer,
            phase: ViewPhase::Uninitialized,
            career_counts: IndexMap::new(),
            modal_salary_bands: IndexMap::new(),
            selected_career: None,
        };
        view.aggregate(records);
        view.phase = ViewPhase::Ready;
        view.render()?;
        Ok(view)
    }

    fn aggregate(&mut self, records: &[Record]) {
        self.career_counts = count_by_category(records, |r| r.interested_career.clone());
        self.modal_salary_bands = modal_value_per_group(
            records,
            |r| r.interested_career.clone(),
            |r| r.expected_salary_band.clone(),
        );
    }

    /// Re-aggregates over a new record set and re-renders.
    pub fn update(&mut self, records: &[Record]) -> DashResult<()> {
        ensure_ready(self.phase, "category trend")?;
        self.aggregate(records);
        self.render()
    }

    /// Applies a career selection and re-renders the highlight.
    pub fn set_selected_career(&mut self, selection: Option<Category>) -> DashResult<()> {
        ensure_ready(self.phase, "category trend")?;
        self.selected_career = selection;
        self.render()
    }

    #[must_use]
    pub fn scene(&self) -> CategoryTrendScene {
        let mut marks: Vec<CategoryTrendMark> = self
            .career_counts
            .iter()
            .map(|(career, &count)| {
                let modal = self.modal_salary_bands.get(career).cloned();
                let emphasized = self.selected_career.as_deref() == Some(career.as_str());
                CategoryTrendMark {
                    category: career.clone(),
                    count,
                    salary_band_index: modal.as_deref().and_then(salary_band_index),
                    modal_salary_band: modal,
                    emphasized,
                    dimmed: self.selected_career.is_some() && !emphasized,
                }
            })
            .collect();
        marks.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category.cmp(&b.category))
        });

        CategoryTrendScene {
            marks,
            salary_axis: SALARY_BANDS.iter().map(|band| (*band).to_owned()).collect(),
            selected: self.selected_career.clone(),
        }
    }

    pub fn render(&mut self) -> DashResult<()> {
        let scene = Scene::CategoryTrend(self.scene());
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn selected_career(&self) -> Option<&Category> {
        self.selected_career.as_ref()
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.career_counts.len()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
