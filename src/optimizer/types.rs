use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, warn};

use crate::domain::{
    BatteryParameters, BuildError, ForecastDemandSeries, Schedule, ScheduleStatus,
};

use super::{fallback, lp};

/// What the linear program minimizes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Objective {
    /// Minimize total unmet demand over the horizon.
    #[default]
    MinimizeUnmet,
    /// Minimize total exported/curtailed surplus over the horizon.
    MaximizeSelfConsumption,
    /// Minimize unmet demand plus half-weighted surplus.
    Balanced,
}

/// Multi-hour battery schedule optimizer.
///
/// Stateless per invocation: each call to [`optimize`](Self::optimize) builds,
/// solves and discards its own problem instance, so concurrent callers need no
/// coordination.
pub struct ScheduleOptimizer {
    /// Objective the linear program minimizes.
    pub objective: Objective,
    /// Advisory, unenforced solve budget in seconds. good_lp does not expose
    /// time limits in a backend-independent way, so enforcement is left to
    /// the embedding application; an aborted solve surfaces as a failed
    /// schedule either way.
    pub advisory_solve_budget_seconds: u64,
}

impl Default for ScheduleOptimizer {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            advisory_solve_budget_seconds: 30,
        }
    }
}

impl ScheduleOptimizer {
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            ..Default::default()
        }
    }

    /// Compute an hour-by-hour charge/discharge schedule.
    ///
    /// Input validation errors are returned synchronously. Solver
    /// non-optimality is not an error: it degrades to the deterministic hold
    /// fallback with `status == Failed`, so a caller with valid inputs always
    /// receives a schedule covering the full horizon.
    pub fn optimize(
        &self,
        params: &BatteryParameters,
        series: &ForecastDemandSeries,
    ) -> Result<Schedule, BuildError> {
        params.validate()?;

        if series.is_empty() {
            // Nothing to schedule; trivially optimal.
            return Ok(Schedule {
                status: ScheduleStatus::Success,
                entries: Vec::new(),
            });
        }

        debug!(
            horizon = series.horizon(),
            objective = %self.objective,
            "building battery schedule LP"
        );

        match lp::solve(params, series, self.objective) {
            Ok(schedule) => Ok(schedule),
            Err(err) => {
                warn!(error = %err, "solver did not reach an optimal solution, emitting hold fallback");
                Ok(fallback::hold_schedule(params, series))
            }
        }
    }
}
