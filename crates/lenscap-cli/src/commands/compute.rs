//! Compute command handler for point capacity evaluation.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use lenscap_lib::{compute_capacity, CapacityRenderMode, CapacitySummary, ModelConfig};

use crate::args::{ComputeArgs, ComputeFormat};
use crate::output::write_json;

/// Handle the compute subcommand.
///
/// Applies the flags on top of `config`, evaluates the model once and prints
/// the summary in the requested format.
pub fn handle_compute(config: ModelConfig, args: &ComputeArgs) -> Result<()> {
    let config = args.model.apply(config).context("invalid model parameters")?;
    let summary = evaluate(&config)?;
    debug!(lenses = summary.result.lenses_per_day, "capacity evaluated");

    match args.format {
        ComputeFormat::Text => print!("{}", summary.render(CapacityRenderMode::PlainText)),
        ComputeFormat::Rich => print!("{}", summary.render(CapacityRenderMode::RichText)),
        ComputeFormat::Json => {
            write_json(&summary, io::stdout().lock()).context("failed to write JSON output")?
        }
    }

    Ok(())
}

/// Evaluate the model described by `config`.
pub fn evaluate(config: &ModelConfig) -> Result<CapacitySummary> {
    let inputs = config.inputs().context("invalid model parameters")?;
    let result = compute_capacity(&inputs).context("capacity evaluation failed")?;
    Ok(CapacitySummary::new(inputs, result))
}
