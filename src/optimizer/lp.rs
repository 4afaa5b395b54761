//! Linear-program formulation and solve for the battery schedule.
//!
//! Per hour `t` the program holds five decision variables: `charge`,
//! `discharge`, `soc`, `unmet` and `excess`. The state-of-charge recurrence
//! couples the hours; the energy-balance constraint turns any forecast/demand
//! gap into unmet demand or excess production rather than leaving it
//! unconstrained.

use good_lp::{
    constraint, default_solver, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel,
};
use tracing::warn;

use crate::domain::{
    BatteryParameters, ForecastDemandSeries, Schedule, ScheduleEntry, ScheduleStatus,
};

use super::types::Objective;

/// Weight on total excess in the balanced objective.
const BALANCED_EXCESS_WEIGHT: f64 = 0.5;

/// Tie-break weight on total battery movement. Among equal-cost optima the
/// solver must prefer the zero-movement vertex; orders of magnitude below the
/// 1e-4 reporting tolerance so it never shifts the primary optimum.
const MOVEMENT_TIEBREAK_WEIGHT: f64 = 1e-6;

/// Build the LP, solve it and extract the schedule.
///
/// Any non-optimal resolution is returned as an error for the caller to absorb
/// into the fallback path.
pub(crate) fn solve(
    params: &BatteryParameters,
    series: &ForecastDemandSeries,
    objective: Objective,
) -> Result<Schedule, ResolutionError> {
    let horizon = series.horizon();
    let forecast = series.forecast_kwh();
    let demand = series.demand_kwh();

    if horizon > 48 {
        warn!(
            horizon,
            "large scheduling horizon; LP solve time grows with the number of periods"
        );
    }

    let mut vars = ProblemVariables::new();
    let charge = vars.add_vector(variable().min(0.0).max(params.charge_rate_max_kw), horizon);
    let discharge = vars.add_vector(
        variable().min(0.0).max(params.discharge_rate_max_kw),
        horizon,
    );
    let soc = vars.add_vector(variable().min(0.0).max(params.capacity_kwh), horizon);
    let unmet = vars.add_vector(variable().min(0.0), horizon);
    let excess = vars.add_vector(variable().min(0.0), horizon);

    let total_unmet: Expression = unmet.iter().copied().sum();
    let total_excess: Expression = excess.iter().copied().sum();
    // Charge and discharge are free under every primary objective, so the LP
    // has equal-cost vertices that pointlessly cycle the battery (e.g. on
    // exactly balanced inputs, discharging everything into excess). The
    // movement term breaks those ties toward zero movement.
    let total_movement: Expression = charge.iter().chain(discharge.iter()).copied().sum();
    let primary = match objective {
        Objective::MinimizeUnmet => total_unmet,
        Objective::MaximizeSelfConsumption => total_excess,
        Objective::Balanced => total_unmet + total_excess * BALANCED_EXCESS_WEIGHT,
    };
    let objective_expr = primary + total_movement * MOVEMENT_TIEBREAK_WEIGHT;

    let mut model = vars.minimise(objective_expr).using(default_solver);

    let eff = params.roundtrip_eff;
    let rate_ceiling = params.rate_ceiling_kw();
    for t in 0..horizon {
        // SoC recurrence. Round-trip loss is applied once, on the charging leg.
        if t == 0 {
            model = model.with(constraint!(
                soc[t] == charge[t] * eff - discharge[t] + params.initial_soc_kwh
            ));
        } else {
            model = model.with(constraint!(
                soc[t] == charge[t] * eff - discharge[t] + soc[t - 1]
            ));
        }

        // Hourly energy balance:
        // forecast + discharge + unmet == demand + charge + excess
        model = model.with(constraint!(
            discharge[t] - charge[t] + unmet[t] - excess[t] == demand[t] - forecast[t]
        ));

        // Combined throughput cap. Deliberately not a mutual-exclusion
        // constraint: charge and discharge may overlap within one hour up to
        // the larger rate limit, and only the objective discourages it.
        model = model.with(constraint!(charge[t] + discharge[t] <= rate_ceiling));
    }

    let solution = model.solve()?;

    let entries = (0..horizon)
        .map(|t| {
            let charge_kwh = normalized(solution.value(charge[t]));
            let discharge_kwh = normalized(solution.value(discharge[t]));
            ScheduleEntry {
                hour: t,
                charge_kwh,
                discharge_kwh,
                soc_kwh: normalized(solution.value(soc[t])),
                unmet_kwh: normalized(solution.value(unmet[t])),
                excess_kwh: normalized(solution.value(excess[t])),
                action: ScheduleEntry::action_label(charge_kwh, discharge_kwh),
            }
        })
        .collect();

    Ok(Schedule {
        status: ScheduleStatus::Success,
        entries,
    })
}

/// A solver may leave a variable resting at its lower bound as an exact or
/// slightly negative zero; report it as plain `0.0`.
fn normalized(value: f64) -> f64 {
    value.max(0.0)
}
