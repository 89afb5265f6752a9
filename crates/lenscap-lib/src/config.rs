use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::capacity::{CapacityInputs, DEFAULT_HOURS_PER_DAY, DEFAULT_MACHINE_COUNT, DEFAULT_OEE};
use crate::error::{Error, Result};
use crate::recipe::ProductMix;
use crate::surface::SweepAxis;

/// Default filename for the model configuration.
const CONFIG_FILENAME: &str = "lenscap.json";

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV_VAR: &str = "LENSCAP_CONFIG";

/// Model parameters with named defaults, independent of any input widget.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub machine_count: u32,
    pub hours_per_day: f64,
    pub oee: f64,
    pub mix: ProductMix,
    /// Rescale the mix to 100% before evaluating.
    pub normalize_mix: bool,
    pub hours_axis: SweepAxis,
    pub oee_axis: SweepAxis,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            machine_count: DEFAULT_MACHINE_COUNT,
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            oee: DEFAULT_OEE,
            mix: ProductMix::default(),
            normalize_mix: false,
            hours_axis: SweepAxis::default_hours(),
            oee_axis: SweepAxis::default_oee(),
        }
    }
}

impl ModelConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: ModelConfig =
            serde_json::from_str(&text).map_err(|err| Error::ConfigParse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;
        config.validate()?;
        info!("loaded model configuration from {}", path.display());
        Ok(config)
    }

    /// Validate point inputs and both sweep axes.
    pub fn validate(&self) -> Result<()> {
        self.inputs()?.validate()?;
        self.hours_axis.validate()?;
        self.oee_axis.validate()
    }

    /// Capacity inputs described by this configuration, with the mix
    /// normalized when `normalize_mix` is set.
    pub fn inputs(&self) -> Result<CapacityInputs> {
        let mix = if self.normalize_mix {
            self.mix.normalized()?
        } else {
            self.mix
        };
        Ok(CapacityInputs {
            machine_count: self.machine_count,
            hours_per_day: self.hours_per_day,
            oee: self.oee,
            mix,
        })
    }
}

/// Resolve the default configuration location using platform-specific project directories.
pub fn default_config_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "lenscap", "lenscap").ok_or(Error::ConfigDirUnavailable)?;
    Ok(dirs.config_dir().join(CONFIG_FILENAME))
}

/// Locate and load the model configuration.
///
/// Resolution order:
/// 1. Explicit `target` argument when provided.
/// 2. `LENSCAP_CONFIG` environment variable.
/// 3. `lenscap.json` in the platform config directory, if it exists.
/// 4. Built-in defaults.
///
/// A path given explicitly or via the environment must exist.
pub fn resolve_config(target: Option<&Path>) -> Result<ModelConfig> {
    if let Some(explicit) = target {
        return ModelConfig::from_path(explicit);
    }

    if let Some(env_path) = env::var_os(CONFIG_ENV_VAR) {
        return ModelConfig::from_path(Path::new(&env_path));
    }

    match default_config_path() {
        Ok(path) if path.exists() => ModelConfig::from_path(&path),
        Ok(path) => {
            debug!("no configuration at {}; using defaults", path.display());
            Ok(ModelConfig::default())
        }
        Err(err) => {
            debug!("{err}; using defaults");
            Ok(ModelConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ModelConfig::default().validate().expect("defaults validate");
    }

    #[test]
    fn inputs_apply_normalization_when_requested() {
        let config = ModelConfig {
            mix: ProductMix::from_shares([25.0, 25.0, 0.0, 0.0]),
            normalize_mix: true,
            ..ModelConfig::default()
        };
        let inputs = config.inputs().unwrap();
        assert_eq!(inputs.mix.shares(), [50.0, 50.0, 0.0, 0.0]);
    }

    #[test]
    fn inputs_pass_mix_through_by_default() {
        let config = ModelConfig {
            mix: ProductMix::from_shares([25.0, 25.0, 0.0, 0.0]),
            ..ModelConfig::default()
        };
        assert_eq!(config.inputs().unwrap().mix.shares(), [25.0, 25.0, 0.0, 0.0]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ModelConfig = serde_json::from_str(r#"{"machine_count": 4}"#).unwrap();
        assert_eq!(config.machine_count, 4);
        assert_eq!(config.oee, DEFAULT_OEE);
        assert_eq!(config.hours_axis, SweepAxis::default_hours());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: std::result::Result<ModelConfig, _> =
            serde_json::from_str(r#"{"machines": 4}"#);
        assert!(parsed.is_err());
    }
}
