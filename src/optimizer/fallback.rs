//! Deterministic hold-steady schedule emitted when the solver fails.

use crate::domain::{
    BatteryParameters, ForecastDemandSeries, Schedule, ScheduleEntry, ScheduleStatus,
};

pub(crate) const FALLBACK_ACTION: &str = "Hold (optimization failed)";

/// Degraded but well-formed schedule: no battery movement, flat state of
/// charge, and the raw per-hour deficit/surplus reported as unmet/excess.
pub(crate) fn hold_schedule(
    params: &BatteryParameters,
    series: &ForecastDemandSeries,
) -> Schedule {
    let entries = series
        .forecast_kwh()
        .iter()
        .zip(series.demand_kwh())
        .enumerate()
        .map(|(hour, (&forecast, &demand))| ScheduleEntry {
            hour,
            charge_kwh: 0.0,
            discharge_kwh: 0.0,
            soc_kwh: params.initial_soc_kwh,
            unmet_kwh: (demand - forecast).max(0.0),
            excess_kwh: (forecast - demand).max(0.0),
            action: FALLBACK_ACTION.to_string(),
        })
        .collect();

    Schedule {
        status: ScheduleStatus::Failed,
        entries,
    }
}
