//! Geometry -> influence matrix -> boundary vector -> strengths -> velocity -> pressure.
//!
//! [`PanelMethod::new`] does everything that depends only on the contour and
//! the wake; [`PanelMethod::solve`] runs the free-stream dependent part and can
//! be called repeatedly.

use crate::boundary::boundary_vector;
use crate::config::SolverConfig;
use crate::error::PanelError;
use crate::geometry::{PanelGeometry, TrailingEdge};
use crate::influence::{self, InfluenceSystem};
use crate::linsolve::solve_dense;
use crate::pressure::{self, ForceCoefficients, PressureDistribution};
use crate::velocity::surface_velocity;
use nalgebra as na;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FreeStream {
    /// Radians
    angle_of_attack: f64,
    speed: f64,
}

impl FreeStream {
    pub fn new(angle_of_attack: f64, speed: f64) -> Result<Self, PanelError> {
        if !angle_of_attack.is_finite() || !speed.is_finite() || speed <= 0.0 {
            return Err(PanelError::InvalidFreeStream {
                speed,
                angle_of_attack,
            });
        }
        Ok(FreeStream {
            angle_of_attack,
            speed,
        })
    }

    pub fn from_degrees(angle_of_attack_deg: f64, speed: f64) -> Result<Self, PanelError> {
        Self::new(angle_of_attack_deg.to_radians(), speed)
    }

    pub fn angle_of_attack(&self) -> f64 {
        self.angle_of_attack
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn velocity(&self) -> na::Vector2<f64> {
        na::Vector2::new(
            self.speed * f64::cos(self.angle_of_attack),
            self.speed * f64::sin(self.angle_of_attack),
        )
    }
}

/// Per-panel results of one solve, all indexed like the contour's panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub freestream: FreeStream,
    pub strengths: Vec<f64>,
    pub velocity: Vec<f64>,
    pub pressure: Vec<f64>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PanelMethod {
    geometry: PanelGeometry,
    influence: InfluenceSystem,
    system: na::DMatrix<f64>,
    pivot_tolerance: f64,
}

impl PanelMethod {
    pub fn new(contour: &[na::Point2<f64>], config: &SolverConfig) -> Result<Self, PanelError> {
        let geometry = PanelGeometry::build(
            contour,
            &config.wake,
            config.trailing_edge.map(TrailingEdge::from),
        )?;
        log::debug!(
            "built {} panels and {} wake panels",
            geometry.len(),
            geometry.wake.panels().len()
        );

        let start = Instant::now();
        let influence = influence::assemble(&geometry)?;
        let system = influence.matrix();
        log::debug!(
            "assembled {n}x{n} influence matrix in {:?}",
            start.elapsed(),
            n = geometry.len()
        );

        Ok(PanelMethod {
            geometry,
            influence,
            system,
            pivot_tolerance: config.pivot_tolerance,
        })
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Panel-to-panel influence, self-influence on the diagonal, no wake.
    pub fn influence_matrix(&self) -> &na::DMatrix<f64> {
        &self.influence.body
    }

    /// Summed wake influence at each panel midpoint.
    pub fn wake_influence(&self) -> &na::DVector<f64> {
        &self.influence.wake
    }

    /// The matrix handed to the dense solve, wake folded in.
    pub fn system_matrix(&self) -> &na::DMatrix<f64> {
        &self.system
    }

    pub fn solve(&self, freestream: &FreeStream) -> Result<Solution, PanelError> {
        let rhs = boundary_vector(&self.geometry.panels, &freestream.velocity());

        let start = Instant::now();
        let strengths = solve_dense(&self.system, &rhs, self.pivot_tolerance)?;
        log::debug!("solved doublet strengths in {:?}", start.elapsed());

        let strengths: Vec<f64> = strengths.iter().copied().collect();
        let velocity = surface_velocity(&strengths, &self.geometry.half_lengths());
        let pressure = pressure::pressure_field(&velocity, freestream.speed());

        log::info!(
            "panel solve: {} panels, alpha = {:.2} deg, v = {}",
            strengths.len(),
            freestream.angle_of_attack().to_degrees(),
            freestream.speed()
        );

        Ok(Solution {
            freestream: *freestream,
            strengths,
            velocity,
            pressure,
        })
    }

    pub fn force_coefficients(&self, solution: &Solution) -> ForceCoefficients {
        pressure::force_coefficients(
            &self.geometry,
            &solution.pressure,
            solution.freestream.angle_of_attack(),
        )
    }

    pub fn pressure_distribution(&self, solution: &Solution) -> PressureDistribution {
        PressureDistribution::new(&self.geometry, &solution.pressure)
    }
}

/// Build and solve in one go.
pub fn analyze(
    contour: &[na::Point2<f64>],
    freestream: &FreeStream,
    config: &SolverConfig,
) -> Result<Solution, PanelError> {
    PanelMethod::new(contour, config)?.solve(freestream)
}
