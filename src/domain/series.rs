use super::BuildError;

/// Paired hourly forecast and demand sequences over one horizon.
///
/// Both sequences are validated at construction: equal length, every sample
/// finite and non-negative. An invariant-violating pair never reaches the
/// solver.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDemandSeries {
    forecast_kwh: Vec<f64>,
    demand_kwh: Vec<f64>,
}

impl ForecastDemandSeries {
    pub fn new(forecast_kwh: Vec<f64>, demand_kwh: Vec<f64>) -> Result<Self, BuildError> {
        if forecast_kwh.len() != demand_kwh.len() {
            return Err(BuildError::LengthMismatch {
                forecast: forecast_kwh.len(),
                demand: demand_kwh.len(),
            });
        }
        Self::check_samples("forecast", &forecast_kwh)?;
        Self::check_samples("demand", &demand_kwh)?;
        Ok(Self {
            forecast_kwh,
            demand_kwh,
        })
    }

    fn check_samples(series: &'static str, samples: &[f64]) -> Result<(), BuildError> {
        for (hour, &value) in samples.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(BuildError::InvalidSample {
                    series,
                    hour,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Number of hourly steps in the horizon.
    pub fn horizon(&self) -> usize {
        self.forecast_kwh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast_kwh.is_empty()
    }

    /// Forecasted solar production (kWh) per hour.
    pub fn forecast_kwh(&self) -> &[f64] {
        &self.forecast_kwh
    }

    /// Expected demand (kWh) per hour.
    pub fn demand_kwh(&self) -> &[f64] {
        &self.demand_kwh
    }
}
