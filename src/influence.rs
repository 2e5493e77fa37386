//! Doublet influence coefficients and matrix assembly.

use crate::error::PanelError;
use crate::geometry::{Panel, PanelGeometry, TrailingEdge};
use nalgebra as na;
use std::f64::consts::PI;

/// Limit of a constant doublet panel's potential at its own midpoint.
pub const SELF_INFLUENCE: f64 = 0.5;

/// Potential induced at `field` by a unit-strength constant doublet on the
/// segment `start -> end`.
///
/// Points on the panel's supporting line (zero normal offset) sit on the
/// branch cut of the potential and get zero influence.
pub fn doublet_influence(
    field: &na::Point2<f64>,
    start: &na::Point2<f64>,
    end: &na::Point2<f64>,
) -> f64 {
    let t = end - start;
    let l = t.norm();
    let normal = na::Vector2::new(t.y, -t.x) / l;
    let d = field - start;

    // panel-local coordinates: normal offset and fraction along the panel
    let pn = d.dot(&normal);
    let s0 = d.dot(&t) / (l * l);

    if pn == 0.0 {
        return 0.0;
    }

    (-f64::atan2(pn, (s0 - 1.0) * l) + f64::atan2(pn, s0 * l)) / (2.0 * PI)
}

impl Panel {
    pub fn influence_at(&self, field: &na::Point2<f64>) -> f64 {
        doublet_influence(field, &self.start, &self.end)
    }
}

/// Body influence matrix plus the wake's influence at every control point.
///
/// `body` is the pure panel-to-panel matrix with the self-influence on the
/// diagonal. `wake[i]` is the summed influence of all wake panels at
/// midpoint `i`; [`InfluenceSystem::matrix`] folds it onto the trailing-edge
/// columns to give the matrix that is actually solved.
#[derive(Debug, Clone, PartialEq)]
pub struct InfluenceSystem {
    pub body: na::DMatrix<f64>,
    pub wake: na::DVector<f64>,
    pub trailing_edge: TrailingEdge,
}

impl InfluenceSystem {
    /// System matrix: wake influence subtracted from column
    /// `trailing_edge.first` and added to column `trailing_edge.last`.
    pub fn matrix(&self) -> na::DMatrix<f64> {
        let te = self.trailing_edge;
        let mut matrix = self.body.clone();
        for (i, d) in self.wake.iter().enumerate() {
            matrix[(i, te.first)] -= *d;
            matrix[(i, te.last)] += *d;
        }
        matrix
    }
}

/// Assemble the N x N body matrix and the wake coupling column.
pub fn assemble(geometry: &PanelGeometry) -> Result<InfluenceSystem, PanelError> {
    let n = geometry.len();
    let mut body = na::DMatrix::<f64>::zeros(n, n);
    let mut wake = na::DVector::<f64>::zeros(n);

    for (i, target) in geometry.panels.iter().enumerate() {
        let control_point = &target.midpoint;

        for (j, source) in geometry.panels.iter().enumerate() {
            body[(i, j)] = if i == j {
                SELF_INFLUENCE
            } else {
                source.influence_at(control_point)
            };
        }

        wake[i] = geometry
            .wake
            .panels()
            .iter()
            .map(|wake_panel| wake_panel.influence_at(control_point))
            .sum::<f64>();
    }

    if let Some((index, _)) = body.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        // column-major storage
        return Err(PanelError::NonFiniteInfluence {
            row: index % n,
            col: index / n,
        });
    }
    if let Some(row) = wake.iter().position(|v| !v.is_finite()) {
        return Err(PanelError::NonFiniteInfluence {
            row,
            col: geometry.trailing_edge.first,
        });
    }

    Ok(InfluenceSystem {
        body,
        wake,
        trailing_edge: geometry.trailing_edge,
    })
}
