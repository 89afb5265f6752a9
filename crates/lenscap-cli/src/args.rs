//! Argument types shared by the `compute` and `surface` subcommands.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, ValueHint};
use lenscap_lib::{ModelConfig, ProductMix, SweepAxis};

/// Model parameters; any flag given overrides the configuration value.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Number of coating machines.
    #[arg(long)]
    pub machines: Option<u32>,

    /// Operating hours per day (0-24].
    #[arg(long)]
    pub hours: Option<f64>,

    /// Overall equipment effectiveness as a fraction (0-1].
    #[arg(long)]
    pub oee: Option<f64>,

    /// Whole product mix as `NAME=PCT` entries (repeatable or comma-separated).
    /// Recipes left out get 0%; the per-recipe flags below still apply on top.
    #[arg(long, value_name = "NAME=PCT", value_delimiter = ',', value_parser = parse_mix_entry)]
    pub mix: Vec<(String, f64)>,

    /// Sapphire participation in percent.
    #[arg(long)]
    pub sapphire: Option<f64>,

    /// Prevencia participation in percent.
    #[arg(long)]
    pub prevencia: Option<f64>,

    /// Rock participation in percent.
    #[arg(long)]
    pub rock: Option<f64>,

    /// Super Hidrofobico participation in percent.
    #[arg(long)]
    pub superh: Option<f64>,

    /// Rescale the participations to sum to 100 before evaluating.
    #[arg(long, action = ArgAction::SetTrue)]
    pub normalize: bool,
}

impl ModelArgs {
    /// Overlay the flags that were given on top of `config`.
    ///
    /// Fails when a `--mix` entry names an unknown recipe or repeats one.
    pub fn apply(&self, mut config: ModelConfig) -> lenscap_lib::Result<ModelConfig> {
        if !self.mix.is_empty() {
            let pairs: Vec<(&str, f64)> = self
                .mix
                .iter()
                .map(|(name, share)| (name.as_str(), *share))
                .collect();
            config.mix = ProductMix::from_pairs(&pairs)?;
        }
        if let Some(machines) = self.machines {
            config.machine_count = machines;
        }
        if let Some(hours) = self.hours {
            config.hours_per_day = hours;
        }
        if let Some(oee) = self.oee {
            config.oee = oee;
        }
        if let Some(share) = self.sapphire {
            config.mix.sapphire = share;
        }
        if let Some(share) = self.prevencia {
            config.mix.prevencia = share;
        }
        if let Some(share) = self.rock {
            config.mix.rock = share;
        }
        if let Some(share) = self.superh {
            config.mix.super_hidrofobico = share;
        }
        if self.normalize {
            config.normalize_mix = true;
        }
        Ok(config)
    }
}

fn parse_mix_entry(raw: &str) -> Result<(String, f64), String> {
    let (name, share) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PCT, got '{raw}'"))?;
    let share = share
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid percentage '{}': {err}", share.trim()))?;
    Ok((name.trim().to_string(), share))
}

/// Output formats for `compute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ComputeFormat {
    /// Plain text summary.
    #[default]
    Text,
    /// Markdown-styled summary.
    Rich,
    /// Inputs and results as JSON.
    Json,
}

impl ComputeFormat {
    pub fn is_machine_readable(self) -> bool {
        matches!(self, ComputeFormat::Json)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ComputeArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = ComputeFormat::Text)]
    pub format: ComputeFormat,
}

/// Output formats for `surface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SurfaceFormat {
    /// OEE × hours matrix of lenses/day.
    #[default]
    Table,
    /// Long-form `hours,oee,lenses_per_day` rows.
    Csv,
    /// Full grids with chart and axis titles.
    Json,
}

impl SurfaceFormat {
    pub fn is_machine_readable(self) -> bool {
        !matches!(self, SurfaceFormat::Table)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SurfaceArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// First hours-per-day sample.
    #[arg(long)]
    pub hours_start: Option<f64>,

    /// Last hours-per-day sample (inclusive).
    #[arg(long)]
    pub hours_end: Option<f64>,

    /// Spacing between hours-per-day samples.
    #[arg(long)]
    pub hours_step: Option<f64>,

    /// First OEE sample.
    #[arg(long)]
    pub oee_start: Option<f64>,

    /// Last OEE sample (inclusive).
    #[arg(long)]
    pub oee_end: Option<f64>,

    /// Spacing between OEE samples.
    #[arg(long)]
    pub oee_step: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SurfaceFormat::Table)]
    pub format: SurfaceFormat,

    /// Write the table, CSV or JSON to this path (`-` for stdout).
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl SurfaceArgs {
    /// Configuration with the model flags and axis flags applied.
    pub fn apply(&self, config: ModelConfig) -> lenscap_lib::Result<ModelConfig> {
        let mut config = self.model.apply(config)?;
        config.hours_axis = overlay_axis(
            config.hours_axis,
            self.hours_start,
            self.hours_end,
            self.hours_step,
        );
        config.oee_axis = overlay_axis(config.oee_axis, self.oee_start, self.oee_end, self.oee_step);
        Ok(config)
    }
}

fn overlay_axis(
    base: SweepAxis,
    start: Option<f64>,
    end: Option<f64>,
    step: Option<f64>,
) -> SweepAxis {
    SweepAxis {
        start: start.unwrap_or(base.start),
        end: end.unwrap_or(base.end),
        step: step.unwrap_or(base.step),
    }
}
