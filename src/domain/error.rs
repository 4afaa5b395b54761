use thiserror::Error;

/// Input validation errors, reported before any solve attempt.
///
/// Solver non-optimality is deliberately not represented here: a solver that
/// fails to reach an optimal solution still yields a well-formed
/// [`Schedule`](crate::Schedule) with `status == Failed`.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("forecast and demand must have the same length (forecast: {forecast}, demand: {demand})")]
    LengthMismatch { forecast: usize, demand: usize },

    #[error("{series} sample at hour {hour} is invalid: {value} (must be finite and >= 0)")]
    InvalidSample {
        series: &'static str,
        hour: usize,
        value: f64,
    },

    #[error("battery capacity must be positive: {0} kWh")]
    InvalidCapacity(f64),

    #[error("initial state of charge {soc} kWh out of bounds [0, {capacity}]")]
    InitialSocOutOfBounds { soc: f64, capacity: f64 },

    #[error("{which} rate limit must be positive: {value} kW")]
    InvalidRate { which: &'static str, value: f64 },

    #[error("round-trip efficiency must be within (0, 1]: {0}")]
    InvalidEfficiency(f64),
}
