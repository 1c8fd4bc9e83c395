//! Analysis configuration file support.
//!
//! This module provides utilities for reading the analysis parameters
//! (detector thresholds, agronomic constants, fusion weights) from TOML
//! configuration files. Every section is optional and falls back to the
//! documented defaults; the whole configuration is validated once at load
//! time so request handlers never re-check it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::routes::awd::AwdParams;
use crate::routes::carbon::CarbonParams;
use crate::routes::fusion::FusionWeights;
use crate::services::error::{AnalysisError, AnalysisResult};
use crate::services::{awd, carbon, fusion};

/// Analysis parameters, typically loaded from `fsi.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub awd: AwdParams,
    #[serde(default)]
    pub carbon: CarbonParams,
    #[serde(default)]
    pub fusion: FusionWeights,
}

impl AnalysisConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AnalysisResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Configuration(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from TOML content.
    pub fn from_toml(content: &str) -> AnalysisResult<Self> {
        let config: AnalysisConfig = toml::from_str(content)
            .map_err(|e| AnalysisError::Configuration(format!("invalid config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section. Called at load time; defaults always pass.
    pub fn validate(&self) -> AnalysisResult<()> {
        awd::validate_params(&self.awd)?;
        carbon::validate_params(&self.carbon)?;
        fusion::validate_weights(&self.fusion)?;
        Ok(())
    }
}
