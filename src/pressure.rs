//! Pressure coefficients and the loads they integrate to.

use crate::geometry::PanelGeometry;
use serde::Serialize;

/// Incompressible Bernoulli: `1 - (v / v_inf)^2`.
pub fn pressure_coefficient(velocity: f64, freestream_speed: f64) -> f64 {
    1.0 - (velocity / freestream_speed).powi(2)
}

pub fn pressure_field(velocity: &[f64], freestream_speed: f64) -> Vec<f64> {
    velocity
        .iter()
        .map(|&v| pressure_coefficient(v, freestream_speed))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceCoefficients {
    /// Lift coefficient
    pub cl: f64,
    /// Pressure drag coefficient
    pub cd: f64,
    /// Moment coefficient about the quarter chord, nose-up positive
    pub cm: f64,
}

/// Integrate the pressure field over the panels.
///
/// Each panel carries a force `-cp * normal * length`; the result is
/// normalised by the contour's chord, which is positive for any geometry
/// accepted by [`PanelGeometry::build`].
pub fn force_coefficients(
    geometry: &PanelGeometry,
    pressure: &[f64],
    angle_of_attack: f64,
) -> ForceCoefficients {
    let (sin_a, cos_a) = angle_of_attack.sin_cos();
    let quarter_chord_x = geometry
        .panels
        .iter()
        .map(|p| p.start.x)
        .fold(f64::INFINITY, f64::min)
        + 0.25 * geometry.chord();

    let mut fx = 0.0;
    let mut fy = 0.0;
    let mut moment = 0.0;

    for (panel, cp) in geometry.panels.iter().zip(pressure) {
        let force_x = -cp * panel.normal.x * panel.length;
        let force_y = -cp * panel.normal.y * panel.length;

        let arm_x = panel.midpoint.x - quarter_chord_x;
        let arm_y = panel.midpoint.y;

        fx += force_x;
        fy += force_y;
        moment -= arm_x * force_y - arm_y * force_x;
    }

    let chord = geometry.chord();
    ForceCoefficients {
        cl: (-fx * sin_a + fy * cos_a) / chord,
        cd: (fx * cos_a + fy * sin_a) / chord,
        cm: moment / (chord * chord),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureDistribution {
    pub cp: Vec<f64>,
    pub x_positions: Vec<f64>,
    pub is_upper_surface: Vec<bool>,
}

impl PressureDistribution {
    /// Upper surface panels are those before the leading-edge point.
    pub fn new(geometry: &PanelGeometry, pressure: &[f64]) -> Self {
        let leading_edge = geometry.leading_edge_index();

        PressureDistribution {
            cp: pressure.to_vec(),
            x_positions: geometry.panels.iter().map(|p| p.midpoint.x).collect(),
            is_upper_surface: (0..geometry.len()).map(|i| i < leading_edge).collect(),
        }
    }

    pub fn upper(&self) -> Vec<[f64; 2]> {
        self.surface(true)
    }

    pub fn lower(&self) -> Vec<[f64; 2]> {
        self.surface(false)
    }

    fn surface(&self, upper: bool) -> Vec<[f64; 2]> {
        self.x_positions
            .iter()
            .zip(&self.cp)
            .zip(&self.is_upper_surface)
            .filter(|(_, &is_upper)| is_upper == upper)
            .map(|((x, cp), _)| [*x, *cp])
            .collect()
    }
}
