//! Surface command handler for the hours × OEE lenses/day grid.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use lenscap_lib::{surface_sweep_axes, ModelConfig, SurfaceSummary};

use crate::args::{SurfaceArgs, SurfaceFormat};
use crate::output::{is_file_output, open_output, render_surface_table, write_json};
use crate::terminal::ColorPalette;

/// Handle the surface subcommand.
///
/// The machine count and mix are held fixed while hours and OEE are swept.
pub fn handle_surface(config: ModelConfig, args: &SurfaceArgs) -> Result<()> {
    let config = args.apply(config).context("invalid model parameters")?;
    let summary = build_surface(&config)?;
    let output = args.output.as_deref();
    let writer = open_output(output).context("failed to open output")?;

    match args.format {
        SurfaceFormat::Table => {
            // escape codes only make sense on a terminal
            let palette = if is_file_output(output) {
                ColorPalette::plain()
            } else {
                ColorPalette::detect()
            };
            write_table(&summary, &palette, writer).context("failed to write surface table")?;
        }
        SurfaceFormat::Csv => {
            summary
                .surface
                .write_csv(writer)
                .context("failed to write surface CSV")?;
        }
        SurfaceFormat::Json => {
            write_json(&summary, writer).context("failed to write surface JSON")?;
        }
    }

    if let Some(path) = output {
        if is_file_output(output) {
            info!("surface written to {}", path.display());
        }
    }

    Ok(())
}

fn write_table<W: Write>(
    summary: &SurfaceSummary,
    palette: &ColorPalette,
    mut writer: W,
) -> io::Result<()> {
    writer.write_all(render_surface_table(summary, palette).as_bytes())?;
    writer.flush()
}

/// Sweep the axes in `config` with its machine count and mix.
pub fn build_surface(config: &ModelConfig) -> Result<SurfaceSummary> {
    let inputs = config.inputs().context("invalid model parameters")?;
    let surface = surface_sweep_axes(
        inputs.machine_count,
        &config.hours_axis,
        &config.oee_axis,
        &inputs.mix,
    )
    .context("surface sweep failed")?;
    info!(
        points = surface.point_count(),
        machines = surface.machine_count,
        "surface evaluated"
    );
    Ok(SurfaceSummary::new(surface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_surface_uses_config_axes() {
        let mut config = ModelConfig::default();
        config.hours_axis = lenscap_lib::SweepAxis::new(8.0, 10.0, 1.0);
        config.oee_axis = lenscap_lib::SweepAxis::new(0.8, 0.9, 0.1);
        let summary = build_surface(&config).expect("sweep succeeds");
        assert_eq!(summary.surface.hours, vec![8.0, 9.0, 10.0]);
        assert_eq!(summary.surface.oee.len(), 2);
    }

    #[test]
    fn build_surface_rejects_bad_axis() {
        let mut config = ModelConfig::default();
        config.oee_axis = lenscap_lib::SweepAxis::new(0.8, 0.6, 0.1);
        assert!(build_surface(&config).is_err());
    }
}
