//! Error types for the panel pipeline.

use std::fmt;
use thiserror::Error;

/// Reasons a contour or wake cannot be turned into panels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("contour needs at least 3 points, got {got}")]
    TooFewPoints { got: usize },
    #[error("contour point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("panel {index} has zero length (duplicate adjacent points)")]
    DegeneratePanel { index: usize },
    #[error("panels {first} and {second} coincide")]
    CoincidentPanels { first: usize, second: usize },
    #[error("contour encloses no area (signed area {area:e})")]
    ZeroArea { area: f64 },
    #[error("wake length must be positive, got {length}")]
    NonPositiveWakeLength { length: f64 },
    #[error("wake needs at least 2 points, got {got}")]
    TooFewWakePoints { got: usize },
    #[error("trailing edge panel {index} is out of range for {panels} panels")]
    TrailingEdgeOutOfRange { index: usize, panels: usize },
}

/// Pipeline step an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Geometry,
    Assembly,
    Solve,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Input => "input",
            Stage::Geometry => "geometry",
            Stage::Assembly => "assembly",
            Stage::Solve => "solve",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PanelError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    #[error("influence coefficient ({row}, {col}) is not finite")]
    NonFiniteInfluence { row: usize, col: usize },
    #[error("influence matrix ({size}x{size}) is singular, smallest relative pivot {relative_pivot:e}")]
    SingularMatrix { size: usize, relative_pivot: f64 },
    #[error("invalid free stream: speed {speed}, angle of attack {angle_of_attack}")]
    InvalidFreeStream { speed: f64, angle_of_attack: f64 },
    #[error("invalid NACA four-digit designation `{0}`")]
    InvalidNaca(String),
}

impl PanelError {
    pub fn stage(&self) -> Stage {
        match self {
            PanelError::InvalidGeometry(_) => Stage::Geometry,
            PanelError::NonFiniteInfluence { .. } => Stage::Assembly,
            PanelError::SingularMatrix { .. } => Stage::Solve,
            PanelError::InvalidFreeStream { .. } | PanelError::InvalidNaca(_) => Stage::Input,
        }
    }
}
