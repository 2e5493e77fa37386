//! Right-hand side of the doublet system.

use crate::geometry::Panel;
use nalgebra as na;

/// Negative free-stream potential at each panel midpoint.
pub fn boundary_vector(panels: &[Panel], freestream: &na::Vector2<f64>) -> na::DVector<f64> {
    na::DVector::from_iterator(
        panels.len(),
        panels
            .iter()
            .map(|panel| -(panel.midpoint.x * freestream.x + panel.midpoint.y * freestream.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn projects_freestream_onto_midpoints() {
        let panels = vec![
            Panel::new(na::Point2::new(0.0, 0.0), na::Point2::new(2.0, 0.0)).unwrap(),
            Panel::new(na::Point2::new(2.0, 0.0), na::Point2::new(2.0, 4.0)).unwrap(),
        ];
        let rhs = boundary_vector(&panels, &na::Vector2::new(3.0, -1.0));

        assert_eq!(rhs.len(), 2);
        assert_relative_eq!(rhs[0], -3.0);
        assert_relative_eq!(rhs[1], -(2.0 * 3.0 - 2.0));
    }
}
