//! AR coating line capacity model.
//!
//! This crate converts a machine count, shift length, OEE and product mix into
//! chambers, lenses and jobs per day, and sweeps that calculation over an
//! hours × OEE grid for surface plots. Higher-level consumers (the CLI) should
//! only depend on the functions exported here instead of reimplementing the
//! formula.

#![deny(warnings)]

pub mod capacity;
pub mod config;
pub mod error;
pub mod output;
pub mod recipe;
pub mod surface;

pub use capacity::{average_cycle_time, compute_capacity, CapacityInputs, CapacityResult};
pub use config::{default_config_path, resolve_config, ModelConfig, CONFIG_ENV_VAR};
pub use error::{Error, Result};
pub use output::{surface_title, CapacityRenderMode, CapacitySummary, SurfaceSummary};
pub use recipe::{ProductMix, Recipe, JOBS_PER_CHAMBER, LENSES_PER_CHAMBER, RECIPES};
pub use surface::{
    surface_sweep, surface_sweep_axes, CapacitySurface, SweepAxis, MAX_AXIS_SAMPLES,
};
