//! End-to-end scenarios for the schedule optimizer: the physics invariants
//! (conservation, bounds, recurrence) plus the deficit, surplus, balance and
//! capacity-ceiling situations.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rstest::rstest;
use solar_sched::{
    BatteryParameters, BuildError, ForecastDemandSeries, Objective, Schedule, ScheduleOptimizer,
};

const TOLERANCE: f64 = 1e-4;

fn series(forecast: Vec<f64>, demand: Vec<f64>) -> ForecastDemandSeries {
    ForecastDemandSeries::new(forecast, demand).unwrap()
}

/// Conservation, bounds and the SoC recurrence, for a successful schedule.
fn assert_physics(schedule: &Schedule, params: &BatteryParameters, input: &ForecastDemandSeries) {
    assert!(schedule.is_success());
    assert_eq!(schedule.horizon(), input.horizon());

    let mut prev_soc = params.initial_soc_kwh;
    for (t, entry) in schedule.entries.iter().enumerate() {
        let forecast = input.forecast_kwh()[t];
        let demand = input.demand_kwh()[t];

        // forecast + discharge + unmet == demand + charge + excess
        assert_abs_diff_eq!(
            forecast + entry.discharge_kwh + entry.unmet_kwh,
            demand + entry.charge_kwh + entry.excess_kwh,
            epsilon = TOLERANCE
        );

        assert!(entry.charge_kwh >= 0.0);
        assert!(entry.charge_kwh <= params.charge_rate_max_kw + TOLERANCE);
        assert!(entry.discharge_kwh >= 0.0);
        assert!(entry.discharge_kwh <= params.discharge_rate_max_kw + TOLERANCE);
        assert!(entry.unmet_kwh >= 0.0);
        assert!(entry.excess_kwh >= 0.0);
        assert!(entry.soc_kwh >= 0.0);
        assert!(
            entry.soc_kwh <= params.capacity_kwh + TOLERANCE,
            "soc {} exceeds capacity {} at hour {t}",
            entry.soc_kwh,
            params.capacity_kwh
        );

        // soc[t] == soc[t-1] + charge * eff - discharge
        assert_abs_diff_eq!(
            entry.soc_kwh,
            prev_soc + entry.charge_kwh * params.roundtrip_eff - entry.discharge_kwh,
            epsilon = TOLERANCE
        );
        prev_soc = entry.soc_kwh;
    }
}

#[test]
fn deficit_scenario_discharges_to_minimize_unmet() {
    let params = BatteryParameters {
        capacity_kwh: 50.0,
        initial_soc_kwh: 30.0,
        charge_rate_max_kw: 10.0,
        discharge_rate_max_kw: 10.0,
        roundtrip_eff: 0.9,
    };
    let input = series(vec![2.0; 12], vec![5.0; 12]);

    let schedule = ScheduleOptimizer::new(Objective::MinimizeUnmet)
        .optimize(&params, &input)
        .unwrap();

    assert_physics(&schedule, &params, &input);
    assert!(schedule.total_discharge_kwh() > 0.0);
    assert!(schedule.entries.iter().all(|e| e.discharge_kwh >= 0.0));
}

#[test]
fn surplus_scenario_charges_to_maximize_self_consumption() {
    let params = BatteryParameters {
        initial_soc_kwh: 10.0,
        ..Default::default()
    };
    let input = series(vec![8.0; 12], vec![5.0; 12]);

    let schedule = ScheduleOptimizer::new(Objective::MaximizeSelfConsumption)
        .optimize(&params, &input)
        .unwrap();

    assert_physics(&schedule, &params, &input);
    assert!(schedule.total_charge_kwh() > 0.0);
}

#[test]
fn exact_balance_leaves_nothing_unmet_and_nothing_excess() {
    let params = BatteryParameters {
        capacity_kwh: 50.0,
        initial_soc_kwh: 25.0,
        ..Default::default()
    };
    let input = series(vec![5.0; 12], vec![5.0; 12]);

    let schedule = ScheduleOptimizer::default()
        .optimize(&params, &input)
        .unwrap();

    assert_physics(&schedule, &params, &input);
    assert!(schedule.total_unmet_kwh() < 0.1);
    assert!(schedule.total_excess_kwh() < 0.1);
    // With production matching demand exactly there is nothing for the
    // battery to do; equal-cost cycling must not be reported either.
    assert!(schedule.total_charge_kwh() < 0.1);
    assert!(schedule.total_discharge_kwh() < 0.1);
}

#[test]
fn capacity_ceiling_is_respected_under_sustained_surplus() {
    let params = BatteryParameters {
        capacity_kwh: 20.0,
        initial_soc_kwh: 10.0,
        charge_rate_max_kw: 5.0,
        discharge_rate_max_kw: 5.0,
        roundtrip_eff: 0.9,
    };
    let input = series(vec![9.0; 12], vec![2.0; 12]);

    let schedule = ScheduleOptimizer::new(Objective::MaximizeSelfConsumption)
        .optimize(&params, &input)
        .unwrap();

    assert_physics(&schedule, &params, &input);
    for entry in &schedule.entries {
        assert!(entry.soc_kwh <= 20.0 + TOLERANCE);
        assert!(entry.charge_kwh <= 5.0 + TOLERANCE);
    }
}

#[test]
fn mismatched_lengths_fail_fast() {
    let err = ForecastDemandSeries::new(vec![1.0; 12], vec![1.0; 10]).unwrap_err();
    assert_eq!(
        err,
        BuildError::LengthMismatch {
            forecast: 12,
            demand: 10
        }
    );
}

/// A realistic mixed day: morning deficit, midday surplus, evening deficit.
/// Every objective must produce a physically consistent schedule; the
/// objectives differ only in what they trade off, not in feasibility.
#[rstest]
#[case::minimize_unmet(Objective::MinimizeUnmet)]
#[case::maximize_self_consumption(Objective::MaximizeSelfConsumption)]
#[case::balanced(Objective::Balanced)]
fn mixed_day_is_feasible_for_every_objective(#[case] objective: Objective) {
    let params = BatteryParameters::default();
    let forecast = vec![
        0.0, 0.0, 0.0, 0.5, 2.0, 4.0, 6.5, 8.0, 8.5, 8.0, 6.0, 3.5, 1.0, 0.0, 0.0, 0.0,
    ];
    let demand = vec![
        2.0, 2.0, 2.0, 2.5, 3.0, 3.0, 3.5, 3.5, 4.0, 4.0, 4.5, 5.0, 5.5, 6.0, 5.0, 3.0,
    ];
    let input = series(forecast, demand);

    let schedule = ScheduleOptimizer::new(objective)
        .optimize(&params, &input)
        .unwrap();

    assert_physics(&schedule, &params, &input);
    // Note: no assertion that charge and discharge are mutually exclusive
    // within an hour. The model intentionally permits simultaneous nonzero
    // values up to the combined rate ceiling.
}

#[test]
fn actions_describe_the_numeric_plan() {
    let params = BatteryParameters {
        initial_soc_kwh: 30.0,
        ..Default::default()
    };
    let input = series(vec![2.0; 6], vec![5.0; 6]);

    let schedule = ScheduleOptimizer::default()
        .optimize(&params, &input)
        .unwrap();

    for entry in &schedule.entries {
        if entry.charge_kwh > 0.1 {
            assert!(entry.action.starts_with("Charge "), "{}", entry.action);
        } else if entry.discharge_kwh > 0.1 {
            assert!(entry.action.starts_with("Discharge "), "{}", entry.action);
        } else {
            assert_eq!(entry.action, "Hold steady (balanced)");
        }
    }
}

#[test]
fn schedule_serializes_for_downstream_consumers() {
    let params = BatteryParameters::default();
    let input = series(vec![5.0; 3], vec![5.0; 3]);
    let schedule = ScheduleOptimizer::default()
        .optimize(&params, &input)
        .unwrap();

    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
    assert!(json["entries"][0]["action"].is_string());
}

proptest! {
    /// Conservation, bounds and recurrence hold for arbitrary non-negative
    /// forecast/demand pairs under every objective.
    #[test]
    fn physics_hold_for_random_series(
        pairs in proptest::collection::vec((0.0..15.0f64, 0.0..15.0f64), 1..24),
        objective in prop_oneof![
            Just(Objective::MinimizeUnmet),
            Just(Objective::MaximizeSelfConsumption),
            Just(Objective::Balanced),
        ],
    ) {
        let (forecast, demand): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let params = BatteryParameters::default();
        let input = series(forecast, demand);

        let schedule = ScheduleOptimizer::new(objective)
            .optimize(&params, &input)
            .unwrap();

        assert_physics(&schedule, &params, &input);
    }
}
