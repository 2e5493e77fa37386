//! Solver, flow and airfoil settings, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Trailing wake discretisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WakeConfig {
    /// Physical length downstream of the trailing edge.
    pub length: f64,
    /// Number of wake points (panels = points - 1).
    pub num_points: usize,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            num_points: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub wake: WakeConfig,
    /// Smallest accepted LU pivot, relative to the largest one.
    pub pivot_tolerance: f64,
    /// Panels the wake couples to, `[first, last]`. Derived from the
    /// contour ends when absent.
    pub trailing_edge: Option<[usize; 2]>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            wake: WakeConfig::default(),
            pivot_tolerance: 1e-12,
            trailing_edge: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub angle_of_attack_deg: f64,
    pub speed: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            angle_of_attack_deg: 2.0,
            speed: 10.0,
        }
    }
}

/// Contour used by the viewer and the headless export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirfoilConfig {
    pub naca: String,
    pub points_per_side: usize,
}

impl Default for AirfoilConfig {
    fn default() -> Self {
        Self {
            naca: "0012".to_string(),
            points_per_side: 40,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub flow: FlowConfig,
    pub airfoil: AirfoilConfig,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a configuration file. Missing sections and keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
