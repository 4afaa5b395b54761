use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kilowatt-hours below which a charge/discharge value is presented as a hold.
///
/// Suppresses labeling of solver noise near zero. Presentation only: the
/// numeric fields are reported unrounded.
const LABEL_THRESHOLD_KWH: f64 = 0.1;

/// Overall outcome of one optimizer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScheduleStatus {
    /// The solver reached an optimal solution.
    Success,
    /// The solver did not reach optimal; the schedule is the hold fallback.
    Failed,
}

/// One hour of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Hour index within the horizon, `0..H`.
    pub hour: usize,
    /// Energy charged into the battery this hour (kWh).
    pub charge_kwh: f64,
    /// Energy discharged from the battery this hour (kWh).
    pub discharge_kwh: f64,
    /// State of charge at the end of this hour (kWh).
    pub soc_kwh: f64,
    /// Demand not covered by production or discharge (kWh).
    pub unmet_kwh: f64,
    /// Production not consumed by demand or charging (kWh).
    pub excess_kwh: f64,
    /// Human-readable recommendation for this hour.
    pub action: String,
}

impl ScheduleEntry {
    /// Derive the action label for a solved hour.
    ///
    /// Charge wins over discharge when both exceed the threshold.
    pub fn action_label(charge_kwh: f64, discharge_kwh: f64) -> String {
        if charge_kwh > LABEL_THRESHOLD_KWH {
            format!("Charge {charge_kwh:.2} kWh (surplus expected)")
        } else if discharge_kwh > LABEL_THRESHOLD_KWH {
            format!("Discharge {discharge_kwh:.2} kWh (deficit expected)")
        } else {
            "Hold steady (balanced)".to_string()
        }
    }
}

/// Hour-by-hour charge/discharge plan, the sole optimizer output.
///
/// Always structurally valid: `entries.len()` equals the input horizon on both
/// the success and the fallback path. Owned by the caller; the optimizer
/// retains nothing after returning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub status: ScheduleStatus,
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn horizon(&self) -> usize {
        self.entries.len()
    }

    pub fn is_success(&self) -> bool {
        self.status == ScheduleStatus::Success
    }

    pub fn total_charge_kwh(&self) -> f64 {
        self.entries.iter().map(|e| e.charge_kwh).sum()
    }

    pub fn total_discharge_kwh(&self) -> f64 {
        self.entries.iter().map(|e| e.discharge_kwh).sum()
    }

    pub fn total_unmet_kwh(&self) -> f64 {
        self.entries.iter().map(|e| e.unmet_kwh).sum()
    }

    pub fn total_excess_kwh(&self) -> f64 {
        self.entries.iter().map(|e| e.excess_kwh).sum()
    }
}
