//! Two-dimensional potential flow around a closed contour using constant
//! strength doublet panels and a trailing wake.
//!
//! ```no_run
//! use panelflow::{contour, FreeStream, PanelMethod, SolverConfig};
//!
//! let airfoil = contour::naca_four_digit("0012", 41)?;
//! let method = PanelMethod::new(&airfoil, &SolverConfig::default())?;
//! let solution = method.solve(&FreeStream::from_degrees(5.0, 10.0)?)?;
//! println!("cl = {:.3}", method.force_coefficients(&solution).cl);
//! # Ok::<(), panelflow::PanelError>(())
//! ```

pub mod boundary;
pub mod config;
pub mod contour;
pub mod error;
pub mod export;
pub mod geometry;
pub mod influence;
pub mod linsolve;
pub mod pressure;
pub mod solver;
pub mod velocity;

pub use config::{Config, ConfigError, SolverConfig, WakeConfig};
pub use error::{GeometryError, PanelError, Stage};
pub use geometry::{Panel, PanelGeometry, TrailingEdge, Wake};
pub use pressure::{ForceCoefficients, PressureDistribution};
pub use solver::{analyze, FreeStream, PanelMethod, Solution};
