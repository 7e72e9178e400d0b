//! JSON runtime configuration for the demo tooling.

use crate::engine::BloomParams;
use crate::metric::{Aggregation, DistanceMetric};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }
}

/// Engine knobs; anything omitted falls back to [`BloomParams::default`].
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bits_per_channel: u8,
    pub seed: u64,
    pub metric: DistanceMetric,
    pub aggregation: Aggregation,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let params = BloomParams::default();
        Self {
            bits_per_channel: params.bits_per_channel,
            seed: params.seed,
            metric: params.metric,
            aggregation: params.aggregation,
        }
    }
}

impl EngineConfig {
    pub fn to_params(&self) -> BloomParams {
        BloomParams {
            bits_per_channel: self.bits_per_channel,
            seed: self.seed,
            metric: self.metric,
            aggregation: self.aggregation,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub image_out: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Resolves the CLI surface of the demo binaries: an optional single config
/// path; no argument runs with defaults.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let mut args = env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(RuntimeConfig::default());
    };
    if arg == "-h" || arg == "--help" || args.next().is_some() {
        return Err(format!("usage: {program} [config.json]"));
    }
    load_config(Path::new(&arg))
}
