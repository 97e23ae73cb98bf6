use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sod_core::errors::{ErrorInfo, SodError};
use sod_graph::CleanupOptions;
use sod_simpliciality::SimplicialityOptions;

/// YAML-configurable parameters shared by every `sod` subcommand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Size filters handed to every metric.
    pub options: SimplicialityOptions,
    /// Drop edges of order above this value before measuring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_order: Option<usize>,
    /// Clean the input before measuring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup: Option<CleanupOptions>,
    /// Configuration-model sweep settings.
    pub null_model: NullModelConfig,
}

/// Settings for `sod null-model`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullModelConfig {
    /// Master seed; realizations draw from substreams of it.
    pub seed: u64,
    /// Realizations per swap count.
    pub realizations: usize,
    /// Swap counts to sweep. Empty means ten swaps per edge.
    pub num_swaps: Vec<usize>,
}

impl Default for NullModelConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            realizations: 10,
            num_swaps: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, SodError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            SodError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        serde_yaml::from_str(&contents).map_err(|err| {
            SodError::Serde(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display()),
            )
        })
    }

    /// Reads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SodError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
