//! Response surface of lenses/day over hours-per-day and OEE.
//!
//! The sweep evaluates [`compute_capacity`] at every point of the hours × OEE
//! grid with the machine count and product mix held fixed. Rows follow the
//! OEE axis and columns the hours axis, matching what surface renderers
//! expect for `z[y][x]`.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::{compute_capacity, CapacityInputs};
use crate::error::{Error, Result};
use crate::recipe::ProductMix;

/// Absorbs float error when counting samples so the end point is kept.
const SAMPLE_COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on samples per axis; keeps a grid within a few million cells.
pub const MAX_AXIS_SAMPLES: usize = 2_000;

/// Inclusive, evenly spaced range of sample points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepAxis {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SweepAxis {
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self { start, end, step }
    }

    /// Hours per day from 8 to 24 in one-hour steps.
    pub const fn default_hours() -> Self {
        Self::new(8.0, 24.0, 1.0)
    }

    /// OEE from 0.60 to 1.00 in 0.05 steps.
    pub const fn default_oee() -> Self {
        Self::new(0.6, 1.0, 0.05)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() || !self.end.is_finite() || !self.step.is_finite() {
            return Err(Error::invalid(format!(
                "sweep axis bounds must be finite, got {}..={} step {}",
                self.start, self.end, self.step
            )));
        }
        if self.step <= 0.0 {
            return Err(Error::invalid(format!(
                "sweep axis step must be positive, got {}",
                self.step
            )));
        }
        if self.end < self.start {
            return Err(Error::invalid(format!(
                "sweep axis end {} is below start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Number of samples, counting both ends.
    ///
    /// Fails when the range would need more than [`MAX_AXIS_SAMPLES`] points.
    pub fn sample_count(&self) -> Result<usize> {
        self.validate()?;
        let intervals = ((self.end - self.start) / self.step + SAMPLE_COUNT_TOLERANCE).floor();
        if !intervals.is_finite() || intervals >= MAX_AXIS_SAMPLES as f64 {
            return Err(Error::invalid(format!(
                "sweep axis {}..={} step {:?} needs more than {MAX_AXIS_SAMPLES} samples",
                self.start, self.end, self.step
            )));
        }
        Ok(intervals as usize + 1)
    }

    /// Sample points `start + i × step`.
    ///
    /// Each point is computed from its index rather than accumulated and is
    /// capped at `end`, so a 0.05 step lands on 1.0 instead of drifting past it.
    pub fn samples(&self) -> Result<Vec<f64>> {
        let count = self.sample_count()?;
        Ok((0..count)
            .map(|i| (self.start + i as f64 * self.step).min(self.end))
            .collect())
    }
}

/// Evaluated grid ready for a 3D surface plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySurface {
    pub machine_count: u32,
    pub mix: ProductMix,
    /// Hours sample points (x axis).
    pub hours: Vec<f64>,
    /// OEE sample points (y axis).
    pub oee: Vec<f64>,
    /// Hours value for every grid cell, `x[oee_index][hours_index]`.
    pub x: Vec<Vec<f64>>,
    /// OEE value for every grid cell, `y[oee_index][hours_index]`.
    pub y: Vec<Vec<f64>>,
    /// Lenses per day for every grid cell, `z[oee_index][hours_index]`.
    pub z: Vec<Vec<f64>>,
}

impl CapacitySurface {
    /// Lenses per day at a grid cell, if the indices are in range.
    pub fn value_at(&self, oee_index: usize, hours_index: usize) -> Option<f64> {
        self.z.get(oee_index)?.get(hours_index).copied()
    }

    /// Number of evaluated grid cells.
    pub fn point_count(&self) -> usize {
        self.hours.len() * self.oee.len()
    }

    /// Smallest and largest lenses/day over the grid.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.z.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Write the grid as long-form CSV rows: `hours,oee,lenses_per_day`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["hours", "oee", "lenses_per_day"])?;
        for (row, &oee) in self.z.iter().zip(&self.oee) {
            for (&lenses, &hours) in row.iter().zip(&self.hours) {
                csv_writer.write_record(&[
                    format_sample(hours),
                    format_sample(oee),
                    format!("{lenses:.4}"),
                ])?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Axis value with float noise removed: `0.9500000000000001` becomes `0.95`.
fn format_sample(value: f64) -> String {
    let text = format!("{value:.6}");
    match text.trim_end_matches('0').trim_end_matches('.') {
        "" | "-" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Evaluate lenses/day over every (hours, OEE) sample pair.
///
/// Sample sequences are taken as given; use [`SweepAxis::samples`] to build
/// them from a range. Any point that fails validation aborts the sweep with
/// that point's error.
pub fn surface_sweep(
    machine_count: u32,
    hours: &[f64],
    oee: &[f64],
    mix: &ProductMix,
) -> Result<CapacitySurface> {
    if hours.is_empty() || oee.is_empty() {
        return Err(Error::invalid(
            "surface sweep requires at least one hours and one oee sample",
        ));
    }

    debug!(
        machines = machine_count,
        hours_points = hours.len(),
        oee_points = oee.len(),
        "starting surface sweep"
    );

    let mut x = Vec::with_capacity(oee.len());
    let mut y = Vec::with_capacity(oee.len());
    let mut z = Vec::with_capacity(oee.len());

    for &o in oee {
        let mut z_row = Vec::with_capacity(hours.len());
        for &h in hours {
            let inputs = CapacityInputs {
                machine_count,
                hours_per_day: h,
                oee: o,
                mix: *mix,
            };
            z_row.push(compute_capacity(&inputs)?.lenses_per_day);
        }
        x.push(hours.to_vec());
        y.push(vec![o; hours.len()]);
        z.push(z_row);
    }

    Ok(CapacitySurface {
        machine_count,
        mix: *mix,
        hours: hours.to_vec(),
        oee: oee.to_vec(),
        x,
        y,
        z,
    })
}

/// Sweep over two axes described as ranges.
pub fn surface_sweep_axes(
    machine_count: u32,
    hours: &SweepAxis,
    oee: &SweepAxis,
    mix: &ProductMix,
) -> Result<CapacitySurface> {
    surface_sweep(machine_count, &hours.samples()?, &oee.samples()?, mix)
}
