//! Contour generators used by the viewer and the test suite.
//!
//! Both produce closed, counter-clockwise contours that start and end at the
//! trailing edge (1, 0) with unit chord.

use crate::error::{GeometryError, PanelError};
use crate::geometry::{TRAILING_EDGE_X, TRAILING_EDGE_Y};
use nalgebra as na;
use std::f64::consts::PI;

/// NACA four-digit section with a closed trailing edge and cosine spacing.
///
/// `points_per_side` counts the points on each surface including both the
/// leading and trailing edge, so the contour has `2 * points_per_side - 1`
/// points.
pub fn naca_four_digit(code: &str, points_per_side: usize) -> Result<Vec<na::Point2<f64>>, PanelError> {
    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
    if code.len() != 4 || digits.len() != 4 {
        return Err(PanelError::InvalidNaca(code.to_string()));
    }

    let m = digits[0] as f64 / 100.0;
    let p = digits[1] as f64 / 10.0;
    let t = (digits[2] * 10 + digits[3]) as f64 / 100.0;
    if t == 0.0 || (m > 0.0 && p == 0.0) {
        return Err(PanelError::InvalidNaca(code.to_string()));
    }
    if points_per_side < 2 {
        return Err(GeometryError::TooFewPoints {
            got: (2 * points_per_side).saturating_sub(1),
        }
        .into());
    }

    let intervals = points_per_side - 1;
    let theta_spacing = PI / intervals as f64;

    let mut upper_surface = Vec::with_capacity(points_per_side);
    let mut lower_surface = Vec::with_capacity(points_per_side);

    for i in 0..=intervals {
        let x = 0.5 * (1.0 - f64::cos(i as f64 * theta_spacing));

        // Mean camber line and its slope
        let (yc, dyc_dx) = if m == 0.0 {
            (0.0, 0.0)
        } else if x < p {
            (
                m * (x / p.powi(2)) * (2.0 * p - x),
                2.0 * m / p.powi(2) * (p - x),
            )
        } else {
            (
                m * ((1.0 - x) / (1.0 - p).powi(2)) * (1.0 + x - 2.0 * p),
                2.0 * m / (1.0 - p).powi(2) * (p - x),
            )
        };

        // Thickness distribution, closed trailing edge variant
        let yt = 5.0
            * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1036 * x.powi(4));

        let theta = f64::atan(dyc_dx);

        upper_surface.push(na::Point2::new(
            x - yt * f64::sin(theta),
            yc + yt * f64::cos(theta),
        ));
        lower_surface.push(na::Point2::new(
            x + yt * f64::sin(theta),
            yc - yt * f64::cos(theta),
        ));
    }

    // trailing edge -> upper -> leading edge -> lower -> trailing edge
    upper_surface.reverse();
    let mut contour = upper_surface;
    contour.extend(lower_surface.into_iter().skip(1));

    let trailing_edge = na::Point2::new(TRAILING_EDGE_X, TRAILING_EDGE_Y);
    let last = contour.len() - 1;
    contour[0] = trailing_edge;
    contour[last] = trailing_edge;

    Ok(contour)
}

/// Circle of unit diameter through the leading edge (0, 0) and trailing edge
/// (1, 0), split into `panel_count` equal panels.
pub fn circle(panel_count: usize) -> Vec<na::Point2<f64>> {
    let radius = 0.5 * TRAILING_EDGE_X;
    let centre_x = radius;

    let mut points: Vec<_> = (0..panel_count)
        .map(|k| {
            let theta = 2.0 * PI * k as f64 / panel_count as f64;
            na::Point2::new(
                centre_x + radius * f64::cos(theta),
                TRAILING_EDGE_Y + radius * f64::sin(theta),
            )
        })
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}
