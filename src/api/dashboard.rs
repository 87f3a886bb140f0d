//! Dashboard coordinator.
//!
//! Owns the one-time dataset load, instantiates the five views wired to one
//! selection bus, and fans reason-filter changes out to every view except
//! the region view (which owns the filter trigger and keeps its full-data
//! aggregation). Bus handlers hold weak view references, so dropping the
//! dashboard tears everything down without leaking subscriptions.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::core::record::{Category, Record, RespondentId, SortDimension};
use crate::dataset::load_records;
use crate::error::{DashError, DashResult};
use crate::interaction::{SelectionBus, SelectionState, SelectionTopic, toggle_selection};
use crate::render::Renderer;

use super::category_trend_view::CategoryTrendView;
use super::cluster_view::ClusterView;
use super::dashboard_config::DashboardConfig;
use super::flow_view::FlowView;
use super::region_view::RegionView;
use super::snapshot::{DashboardSnapshot, ViewSnapshot};
use super::unit_dot_view::UnitDotView;

impl<R: Renderer> std::fmt::Debug for Dashboard<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("records", &self.records.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

pub struct Dashboard<R: Renderer> {
    records: Rc<Vec<Record>>,
    config: DashboardConfig,
    bus: SelectionBus,
    filtered_count: Rc<Cell<usize>>,
    trend: Rc<RefCell<CategoryTrendView<R>>>,
    cluster: Rc<RefCell<ClusterView<R>>>,
    unit_dot: Rc<RefCell<UnitDotView<R>>>,
    flow: Rc<RefCell<FlowView<R>>>,
    region: Rc<RefCell<RegionView<R>>>,
}

impl<R: Renderer + 'static> Dashboard<R> {
    /// Builds the dashboard over an already-preprocessed record set, with
    /// the default configuration.
    pub fn new(records: Vec<Record>, make_renderer: impl FnMut() -> R) -> DashResult<Self> {
        Self::with_config(records, DashboardConfig::default(), make_renderer)
    }

    /// Builds the dashboard over an already-preprocessed record set.
    ///
    /// `make_renderer` is called once per view; each view owns its renderer.
    pub fn with_config(
        records: Vec<Record>,
        config: DashboardConfig,
        mut make_renderer: impl FnMut() -> R,
    ) -> DashResult<Self> {
        config.validate()?;
        let records = Rc::new(records);
        debug!(count = records.len(), "constructing dashboard views");

        let trend = Rc::new(RefCell::new(CategoryTrendView::new(
            make_renderer(),
            &records,
        )?));
        let cluster = Rc::new(RefCell::new(ClusterView::with_radius_range(
            make_renderer(),
            &records,
            config.bubble_radius_range,
        )?));
        let unit_dot = Rc::new(RefCell::new(UnitDotView::with_layout(
            make_renderer(),
            &records,
            config.sort_dimension,
            config.compact_grid_threshold,
        )?));
        let flow = Rc::new(RefCell::new(FlowView::new(make_renderer(), &records)?));
        let region = Rc::new(RefCell::new(RegionView::new(make_renderer(), &records)?));

        let filtered_count = Rc::new(Cell::new(records.len()));

        let mut bus = SelectionBus::new();
        subscribe_career_highlight(&mut bus, "category-trend", &trend);
        subscribe_unit_highlight(&mut bus, "unit-dot", &unit_dot);
        subscribe_reason_filter(
            &mut bus,
            &records,
            &filtered_count,
            &trend,
            &cluster,
            &unit_dot,
            &flow,
        );

        Ok(Self {
            records,
            config,
            bus,
            filtered_count,
            trend,
            cluster,
            unit_dot,
            flow,
            region,
        })
    }

    /// Loads the dataset from a CSV file and builds the dashboard over it.
    ///
    /// A load failure is fatal: no views are constructed.
    pub fn from_csv(path: &Path, make_renderer: impl FnMut() -> R) -> DashResult<Self> {
        let records = load_records(path)?;
        Self::new(records, make_renderer)
    }

    /// Routes a click on a career bar: toggles the career selection.
    pub fn click_career(&mut self, category: &str) -> DashResult<()> {
        let current = self.trend.borrow().selected_career().cloned();
        let next = toggle_selection(current.as_deref(), category);
        self.bus.publish(SelectionTopic::CareerChanged, next);
        Ok(())
    }

    /// Routes a click on a unit dot: toggles the career of that respondent.
    pub fn click_unit(&mut self, id: &RespondentId) -> DashResult<()> {
        let career = self
            .records
            .iter()
            .find(|r| r.id == *id)
            .map(|r| r.interested_career.clone())
            .ok_or_else(|| DashError::InvalidData(format!("unknown respondent id `{id}`")))?;
        let current = self.unit_dot.borrow().selected_career().cloned();
        let next = toggle_selection(current.as_deref(), &career);
        self.bus.publish(SelectionTopic::CareerChanged, next);
        Ok(())
    }

    /// Routes a click on a treemap region: toggles the reason filter.
    ///
    /// The region view applies its own highlight before the broadcast, since
    /// it does not subscribe to the topic it publishes.
    pub fn click_region(&mut self, reason: &str) -> DashResult<()> {
        let current = self.region.borrow().selected_reason().cloned();
        let next = toggle_selection(current.as_deref(), reason);
        self.region.borrow_mut().set_selected_reason(next.clone())?;
        self.bus.publish(SelectionTopic::ReasonChanged, next);
        Ok(())
    }

    /// Switches the unit grid's sort dimension.
    pub fn set_sort_dimension(&mut self, dimension: SortDimension) -> DashResult<()> {
        self.unit_dot.borrow_mut().set_sort_dimension(dimension)
    }

    /// Re-renders every view from its current state.
    pub fn render_all(&mut self) -> DashResult<()> {
        self.trend.borrow_mut().render()?;
        self.cluster.borrow_mut().render()?;
        self.unit_dot.borrow_mut().render()?;
        self.flow.borrow_mut().render()?;
        self.region.borrow_mut().render()
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.bus.selection()
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn record(&self, id: &RespondentId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == *id)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let trend = self.trend.borrow();
        let cluster = self.cluster.borrow();
        let unit_dot = self.unit_dot.borrow();
        let flow = self.flow.borrow();
        let region = self.region.borrow();
        DashboardSnapshot {
            record_count: self.records.len(),
            filtered_count: self.filtered_count.get(),
            selection: self.bus.selection().clone(),
            category_trend: ViewSnapshot {
                phase: trend.phase(),
                mark_count: trend.mark_count(),
            },
            cluster: ViewSnapshot {
                phase: cluster.phase(),
                mark_count: cluster.mark_count(),
            },
            unit_grid: ViewSnapshot {
                phase: unit_dot.phase(),
                mark_count: unit_dot.mark_count(),
            },
            flow: ViewSnapshot {
                phase: flow.phase(),
                mark_count: flow.mark_count(),
            },
            region: ViewSnapshot {
                phase: region.phase(),
                mark_count: region.mark_count(),
            },
            region_counts: region.reason_counts().clone(),
        }
    }

    #[must_use]
    pub fn category_trend_view(&self) -> Rc<RefCell<CategoryTrendView<R>>> {
        Rc::clone(&self.trend)
    }

    #[must_use]
    pub fn cluster_view(&self) -> Rc<RefCell<ClusterView<R>>> {
        Rc::clone(&self.cluster)
    }

    #[must_use]
    pub fn unit_dot_view(&self) -> Rc<RefCell<UnitDotView<R>>> {
        Rc::clone(&self.unit_dot)
    }

    #[must_use]
    pub fn flow_view(&self) -> Rc<RefCell<FlowView<R>>> {
        Rc::clone(&self.flow)
    }

    #[must_use]
    pub fn region_view(&self) -> Rc<RefCell<RegionView<R>>> {
        Rc::clone(&self.region)
    }
}

fn subscribe_career_highlight<R: Renderer + 'static>(
    bus: &mut SelectionBus,
    handler_id: &str,
    view: &Rc<RefCell<CategoryTrendView<R>>>,
) {
    let weak: Weak<RefCell<CategoryTrendView<R>>> = Rc::downgrade(view);
    bus.subscribe(
        SelectionTopic::CareerChanged,
        handler_id,
        Box::new(move |payload| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            if let Err(err) = view.borrow_mut().set_selected_career(payload.cloned()) {
                warn!(error = %err, "skipping category trend highlight");
            }
        }),
    );
}

fn subscribe_unit_highlight<R: Renderer + 'static>(
    bus: &mut SelectionBus,
    handler_id: &str,
    view: &Rc<RefCell<UnitDotView<R>>>,
) {
    let weak: Weak<RefCell<UnitDotView<R>>> = Rc::downgrade(view);
    bus.subscribe(
        SelectionTopic::CareerChanged,
        handler_id,
        Box::new(move |payload| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            if let Err(err) = view.borrow_mut().set_selected_career(payload.cloned()) {
                warn!(error = %err, "skipping unit dot highlight");
            }
        }),
    );
}

fn subscribe_reason_filter<R: Renderer + 'static>(
    bus: &mut SelectionBus,
    records: &Rc<Vec<Record>>,
    filtered_count: &Rc<Cell<usize>>,
    trend: &Rc<RefCell<CategoryTrendView<R>>>,
    cluster: &Rc<RefCell<ClusterView<R>>>,
    unit_dot: &Rc<RefCell<UnitDotView<R>>>,
    flow: &Rc<RefCell<FlowView<R>>>,
) {
    let all = Rc::clone(records);
    let count_cell = Rc::clone(filtered_count);
    let weak_trend = Rc::downgrade(trend);
    let weak_cluster = Rc::downgrade(cluster);
    let weak_unit = Rc::downgrade(unit_dot);
    let weak_flow = Rc::downgrade(flow);
    bus.subscribe(
        SelectionTopic::ReasonChanged,
        "dashboard-filter",
        Box::new(move |reason| {
            let filtered: Vec<Record> = match reason {
                Some(reason) => all
                    .iter()
                    .filter(|r| r.top_reason == *reason)
                    .cloned()
                    .collect(),
                None => all.as_ref().clone(),
            };
            count_cell.set(filtered.len());
            debug!(?reason, count = filtered.len(), "refiltering views");

            if let Some(view) = weak_trend.upgrade() {
                if let Err(err) = view.borrow_mut().update(&filtered) {
                    warn!(error = %err, "skipping category trend refilter");
                }
            }
            if let Some(view) = weak_cluster.upgrade() {
                if let Err(err) = view.borrow_mut().update(&filtered) {
                    warn!(error = %err, "skipping cluster refilter");
                }
            }
            if let Some(view) = weak_unit.upgrade() {
                if let Err(err) = view.borrow_mut().update(&filtered) {
                    warn!(error = %err, "skipping unit dot refilter");
                }
            }
            if let Some(view) = weak_flow.upgrade() {
                if let Err(err) = view.borrow_mut().update(&filtered) {
                    warn!(error = %err, "skipping flow refilter");
                }
            }
        }),
    );
}
