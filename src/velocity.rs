//! Tangential surface velocity from the doublet strengths.
//!
//! The velocity on panel `i` is the arc-length derivative of the strength
//! field, taken with a three-point stencil over panel midpoints. Offsets are
//! signed distances along the contour, built from panel half-lengths.

/// Which neighbours feed the derivative at a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stencil {
    /// One-sided, forward: panels 1 and 2.
    First,
    /// Central: panels `i - 1` and `i + 1`.
    Interior,
    /// One-sided, backward: panels `i - 1` and `i - 2`.
    Last,
    /// Two-panel contour, plain difference between the two panels.
    Pair,
}

impl Stencil {
    pub fn for_panel(index: usize, count: usize) -> Self {
        if count == 2 {
            Stencil::Pair
        } else if index == 0 {
            Stencil::First
        } else if index == count - 1 {
            Stencil::Last
        } else {
            Stencil::Interior
        }
    }

    /// Derivative of `strengths` at panel `i`.
    pub fn derivative(self, i: usize, strengths: &[f64], half_lengths: &[f64]) -> f64 {
        let d = strengths;
        let h = half_lengths;

        match self {
            Stencil::First => {
                let lm = h[0] + h[1];
                let lp = lm + h[1] + h[2];
                three_point_derivative(d[0], d[1], lm, d[2], lp)
            }
            Stencil::Interior => {
                let lm = -h[i] - h[i - 1];
                let lp = h[i] + h[i + 1];
                three_point_derivative(d[i], d[i - 1], lm, d[i + 1], lp)
            }
            Stencil::Last => {
                let lp = -h[i] - h[i - 1];
                let lm = lp - h[i - 1] - h[i - 2];
                three_point_derivative(d[i], d[i - 2], lm, d[i - 1], lp)
            }
            Stencil::Pair => (d[1] - d[0]) / (h[0] + h[1]),
        }
    }
}

/// Derivative at offset zero from samples `dm` at offset `lm` and `dp` at
/// offset `lp`. Exact for quadratics; offsets must be distinct and non-zero.
pub fn three_point_derivative(d0: f64, dm: f64, lm: f64, dp: f64, lp: f64) -> f64 {
    -(((d0 - dp) * lm.powi(2) + (dm - d0) * lp.powi(2)) / (lm * (lm - lp) * lp))
}

/// Tangential velocity per panel. Both slices are indexed by panel.
///
/// A single panel has no neighbour to difference against and gets zero
/// velocity.
pub fn surface_velocity(strengths: &[f64], half_lengths: &[f64]) -> Vec<f64> {
    debug_assert_eq!(strengths.len(), half_lengths.len());
    let n = strengths.len();
    if n < 2 {
        return vec![0.0; n];
    }

    (0..n)
        .map(|i| Stencil::for_panel(i, n).derivative(i, strengths, half_lengths))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HALF_LENGTHS: [f64; 6] = [0.1, 0.25, 0.05, 0.4, 0.2, 0.3];

    /// Arc-length position of each panel midpoint.
    fn centres(half_lengths: &[f64]) -> Vec<f64> {
        let mut s = 0.0;
        half_lengths
            .iter()
            .map(|h| {
                let c = s + h;
                s += 2.0 * h;
                c
            })
            .collect()
    }

    #[test]
    fn stencil_selection() {
        assert_eq!(Stencil::for_panel(0, 5), Stencil::First);
        assert_eq!(Stencil::for_panel(1, 5), Stencil::Interior);
        assert_eq!(Stencil::for_panel(3, 5), Stencil::Interior);
        assert_eq!(Stencil::for_panel(4, 5), Stencil::Last);
        assert_eq!(Stencil::for_panel(0, 2), Stencil::Pair);
        assert_eq!(Stencil::for_panel(1, 2), Stencil::Pair);
    }

    #[test]
    fn three_point_derivative_on_uniform_grid() {
        // f(x) = x^2 sampled at -1, 0, 2
        assert_relative_eq!(three_point_derivative(0.0, 1.0, -1.0, 4.0, 2.0), 0.0, epsilon = 1e-14);
        // f(x) = 3x + 1
        assert_relative_eq!(three_point_derivative(1.0, -2.0, -1.0, 7.0, 2.0), 3.0, epsilon = 1e-14);
    }

    #[test]
    fn first_stencil_looks_forward() {
        let s = centres(&HALF_LENGTHS);
        let strengths: Vec<f64> = s.iter().map(|x| x * x).collect();
        let value = Stencil::First.derivative(0, &strengths, &HALF_LENGTHS);
        assert_relative_eq!(value, 2.0 * s[0], epsilon = 1e-12);
    }

    #[test]
    fn last_stencil_looks_backward() {
        let s = centres(&HALF_LENGTHS);
        let strengths: Vec<f64> = s.iter().map(|x| x * x).collect();
        let last = HALF_LENGTHS.len() - 1;
        let value = Stencil::Last.derivative(last, &strengths, &HALF_LENGTHS);
        assert_relative_eq!(value, 2.0 * s[last], epsilon = 1e-12);
    }

    #[test]
    fn interior_stencil_is_exact_for_quadratics() {
        let s = centres(&HALF_LENGTHS);
        let strengths: Vec<f64> = s.iter().map(|x| 2.0 * x * x - x + 0.5).collect();
        for i in 1..HALF_LENGTHS.len() - 1 {
            let value = Stencil::Interior.derivative(i, &strengths, &HALF_LENGTHS);
            assert_relative_eq!(value, 4.0 * s[i] - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn linear_field_gives_constant_velocity() {
        let s = centres(&HALF_LENGTHS);
        let strengths: Vec<f64> = s.iter().map(|x| -1.5 * x + 4.0).collect();
        for v in surface_velocity(&strengths, &HALF_LENGTHS) {
            assert_relative_eq!(v, -1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_panel_has_no_gradient() {
        assert_eq!(surface_velocity(&[1.0], &[1.0]), vec![0.0]);
        assert!(surface_velocity(&[], &[]).is_empty());
    }

    #[test]
    fn pair_uses_midpoint_distance() {
        let velocity = surface_velocity(&[1.0, 2.0], &[0.25, 0.25]);
        assert_eq!(velocity, vec![2.0, 2.0]);
    }
}
