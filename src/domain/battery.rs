use serde::{Deserialize, Serialize};

use super::BuildError;

/// Battery physical parameters, immutable for one optimizer invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryParameters {
    /// Usable battery capacity (kWh).
    pub capacity_kwh: f64,
    /// State of charge at the start of the horizon (kWh).
    pub initial_soc_kwh: f64,
    /// Maximum charge rate (kW).
    pub charge_rate_max_kw: f64,
    /// Maximum discharge rate (kW).
    pub discharge_rate_max_kw: f64,
    /// Round-trip efficiency in (0, 1]; applied once, on the charging leg.
    pub roundtrip_eff: f64,
}

impl Default for BatteryParameters {
    fn default() -> Self {
        Self {
            capacity_kwh: 50.0,
            initial_soc_kwh: 20.0,
            charge_rate_max_kw: 10.0,
            discharge_rate_max_kw: 10.0,
            roundtrip_eff: 0.9,
        }
    }
}

impl BatteryParameters {
    /// Validate every parameter against its stated domain.
    ///
    /// Out-of-domain values are rejected, never silently corrected.
    pub fn validate(&self) -> Result<(), BuildError> {
        if !self.capacity_kwh.is_finite() || self.capacity_kwh <= 0.0 {
            return Err(BuildError::InvalidCapacity(self.capacity_kwh));
        }
        if !self.initial_soc_kwh.is_finite()
            || self.initial_soc_kwh < 0.0
            || self.initial_soc_kwh > self.capacity_kwh
        {
            return Err(BuildError::InitialSocOutOfBounds {
                soc: self.initial_soc_kwh,
                capacity: self.capacity_kwh,
            });
        }
        if !self.charge_rate_max_kw.is_finite() || self.charge_rate_max_kw <= 0.0 {
            return Err(BuildError::InvalidRate {
                which: "charge",
                value: self.charge_rate_max_kw,
            });
        }
        if !self.discharge_rate_max_kw.is_finite() || self.discharge_rate_max_kw <= 0.0 {
            return Err(BuildError::InvalidRate {
                which: "discharge",
                value: self.discharge_rate_max_kw,
            });
        }
        if !self.roundtrip_eff.is_finite() || self.roundtrip_eff <= 0.0 || self.roundtrip_eff > 1.0
        {
            return Err(BuildError::InvalidEfficiency(self.roundtrip_eff));
        }
        Ok(())
    }

    /// Ceiling for the combined hourly charge+discharge throughput (kW).
    ///
    /// The larger of the two rate limits. Charge and discharge within the same
    /// hour are not mutually exclusive, only capped by this ceiling.
    pub fn rate_ceiling_kw(&self) -> f64 {
        self.charge_rate_max_kw.max(self.discharge_rate_max_kw)
    }
}
