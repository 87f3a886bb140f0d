use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult};

/// Lifecycle of a chart view.
///
/// The `Uninitialized -> Ready` transition happens exactly once, during
/// construction; `Ready` is the only steady state and every update or
/// selection handler leaves the view in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPhase {
    Uninitialized,
    Ready,
}

pub(crate) fn ensure_ready(phase: ViewPhase, view: &str) -> DashResult<()> {
    if phase == ViewPhase::Ready {
        Ok(())
    } else {
        Err(DashError::PhaseViolation(format!(
            "{view} view is {phase:?}; operation requires Ready"
        )))
    }
}
