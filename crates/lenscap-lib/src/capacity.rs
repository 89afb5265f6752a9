//! Product-mix weighted throughput calculation.
//!
//! The model converts a machine count, a daily shift length, an OEE factor
//! and the participation of each recipe into chambers, lenses and jobs per
//! day:
//!
//! ```text
//! avg_cycle_time = Σ (participation_i / 100) × cycle_time_hours_i
//! total_chambers = (hours_per_day × oee / avg_cycle_time) × machine_count
//! lenses_per_day = total_chambers × LENSES_PER_CHAMBER
//! jobs_per_day   = total_chambers × JOBS_PER_CHAMBER
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::recipe::{ProductMix, JOBS_PER_CHAMBER, LENSES_PER_CHAMBER, RECIPES};

/// Default number of coating machines.
pub const DEFAULT_MACHINE_COUNT: u32 = 2;
/// Default operating hours per day.
pub const DEFAULT_HOURS_PER_DAY: f64 = 16.0;
/// Default overall equipment effectiveness.
pub const DEFAULT_OEE: f64 = 0.85;

/// Upper bound for `hours_per_day`.
const HOURS_IN_DAY: f64 = 24.0;

/// Parameters for a single capacity evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityInputs {
    pub machine_count: u32,
    pub hours_per_day: f64,
    /// Overall equipment effectiveness as a fraction in (0, 1].
    pub oee: f64,
    pub mix: ProductMix,
}

impl Default for CapacityInputs {
    fn default() -> Self {
        Self {
            machine_count: DEFAULT_MACHINE_COUNT,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            oee: DEFAULT_OEE,
            mix: ProductMix::default(),
        }
    }
}

impl CapacityInputs {
    /// Validate the machine count, shift length, OEE and each participation share.
    ///
    /// The degenerate all-zero mix passes this check; it is caught when the
    /// average cycle time is computed.
    pub fn validate(&self) -> Result<()> {
        if self.machine_count == 0 {
            return Err(Error::invalid("machine_count must be at least 1"));
        }

        if !self.hours_per_day.is_finite()
            || self.hours_per_day <= 0.0
            || self.hours_per_day > HOURS_IN_DAY
        {
            return Err(Error::invalid(format!(
                "hours_per_day must be in (0, 24], got {}",
                self.hours_per_day
            )));
        }

        if !self.oee.is_finite() || self.oee <= 0.0 || self.oee > 1.0 {
            return Err(Error::invalid(format!(
                "oee must be in (0, 1], got {}",
                self.oee
            )));
        }

        self.mix.validate()
    }
}

/// Derived throughput figures for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    /// Participation-weighted chamber processing time, in hours.
    pub avg_cycle_time_hours: f64,
    pub total_chambers_per_day: f64,
    pub lenses_per_day: f64,
    pub jobs_per_day: f64,
}

/// Participation-weighted average of the recipe cycle times, in hours.
///
/// Shares are applied as given: a mix that sums to less than 100 yields a
/// proportionally shorter average.
pub fn average_cycle_time(mix: &ProductMix) -> Result<f64> {
    mix.validate()?;

    let avg = RECIPES
        .iter()
        .zip(mix.shares())
        .map(|(recipe, share)| (share / 100.0) * recipe.cycle_time_hours)
        .sum::<f64>();

    if !avg.is_finite() || avg <= 0.0 {
        return Err(Error::invalid(format!(
            "average cycle time must be positive, got {avg} (are all participations zero?)"
        )));
    }

    Ok(avg)
}

/// Evaluate the capacity model for a single set of inputs.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when any input is outside its domain or the
/// mix resolves to a zero average cycle time.
pub fn compute_capacity(inputs: &CapacityInputs) -> Result<CapacityResult> {
    inputs.validate()?;

    let avg_cycle_time_hours = average_cycle_time(&inputs.mix)?;
    let chambers_per_machine = (inputs.hours_per_day * inputs.oee) / avg_cycle_time_hours;
    let total_chambers_per_day = chambers_per_machine * f64::from(inputs.machine_count);

    let result = CapacityResult {
        avg_cycle_time_hours,
        total_chambers_per_day,
        lenses_per_day: total_chambers_per_day * LENSES_PER_CHAMBER,
        jobs_per_day: total_chambers_per_day * JOBS_PER_CHAMBER,
    };

    debug!(
        machines = inputs.machine_count,
        hours = inputs.hours_per_day,
        oee = inputs.oee,
        avg_cycle_time = result.avg_cycle_time_hours,
        chambers = result.total_chambers_per_day,
        "evaluated capacity"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_match_documented_values() {
        let inputs = CapacityInputs::default();
        assert_eq!(inputs.machine_count, 2);
        assert_eq!(inputs.hours_per_day, 16.0);
        assert_eq!(inputs.oee, 0.85);
    }

    #[test]
    fn average_cycle_time_of_default_mix() {
        let avg = average_cycle_time(&ProductMix::default()).unwrap();
        assert!((avg - 1.39392).abs() < 1e-9);
    }

    #[test]
    fn single_recipe_mix_uses_that_cycle_time() {
        let mix = ProductMix::from_pairs(&[("Prevencia", 100.0)]).unwrap();
        assert!((average_cycle_time(&mix).unwrap() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn zero_machines_rejected() {
        let inputs = CapacityInputs {
            machine_count: 0,
            ..CapacityInputs::default()
        };
        assert!(matches!(
            compute_capacity(&inputs),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn hours_outside_day_rejected() {
        for hours in [0.0, -1.0, 24.5, f64::INFINITY] {
            let inputs = CapacityInputs {
                hours_per_day: hours,
                ..CapacityInputs::default()
            };
            assert!(compute_capacity(&inputs).is_err(), "hours {hours}");
        }
    }

    #[test]
    fn oee_outside_unit_interval_rejected() {
        for oee in [0.0, -0.1, 1.01, f64::NAN] {
            let inputs = CapacityInputs {
                oee,
                ..CapacityInputs::default()
            };
            assert!(compute_capacity(&inputs).is_err(), "oee {oee}");
        }
    }

    #[test]
    fn full_oee_and_full_day_are_accepted() {
        let inputs = CapacityInputs {
            hours_per_day: 24.0,
            oee: 1.0,
            ..CapacityInputs::default()
        };
        assert!(compute_capacity(&inputs).is_ok());
    }
}
