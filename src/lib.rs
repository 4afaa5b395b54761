//! Multi-hour solar+battery scheduling optimizer.
//!
//! Given an hourly forecast of solar production and of household demand, the
//! optimizer produces an hour-by-hour charge/discharge plan that respects
//! battery physics (capacity, rate limits, round-trip efficiency) and a
//! selectable objective. The heavy lifting is a linear program; when the
//! solver cannot reach an optimal solution the optimizer degrades to a
//! deterministic hold-steady schedule instead of raising.
//!
//! The crate is a pure in-process library: forecasting, persistence and
//! presentation are the caller's concern. Each invocation builds, solves and
//! discards its own problem instance, so concurrent callers need no locking.
//!
//! ```
//! use solar_sched::{BatteryParameters, ForecastDemandSeries, Objective, ScheduleOptimizer};
//!
//! let params = BatteryParameters::default();
//! let series = ForecastDemandSeries::new(vec![2.0; 12], vec![5.0; 12]).unwrap();
//!
//! let schedule = ScheduleOptimizer::new(Objective::MinimizeUnmet)
//!     .optimize(&params, &series)
//!     .unwrap();
//!
//! assert_eq!(schedule.horizon(), 12);
//! for entry in &schedule.entries {
//!     println!("hour {}: {}", entry.hour, entry.action);
//! }
//! ```

pub mod domain;
pub mod optimizer;

pub use domain::{
    BatteryParameters, BuildError, ForecastDemandSeries, Schedule, ScheduleEntry, ScheduleStatus,
};
pub use optimizer::{Objective, ScheduleOptimizer};
