//! Panels, trailing wake and trailing-edge adjacency derived from a contour.
//!
//! Contours are expected in the usual airfoil ordering: trailing edge, over
//! the upper surface to the leading edge, back along the lower surface to the
//! trailing edge. The wake is laid out in contour-local coordinates where the
//! trailing edge sits at (1, 0).

use crate::config::WakeConfig;
use crate::error::GeometryError;
use nalgebra as na;

pub const TRAILING_EDGE_X: f64 = 1.0;
pub const TRAILING_EDGE_Y: f64 = 0.0;

/// Smallest enclosed area, relative to the squared bounding-box size, that
/// still gives a solvable influence matrix.
pub const MIN_RELATIVE_AREA: f64 = 1e-10;

/// A straight segment carrying a constant-strength doublet.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub start: na::Point2<f64>,
    pub end: na::Point2<f64>,
    pub midpoint: na::Point2<f64>,
    /// Unit vector from `start` to `end`.
    pub tangent: na::Vector2<f64>,
    /// Unit normal, outward for counter-clockwise contours.
    pub normal: na::Vector2<f64>,
    pub length: f64,
    pub half_length: f64,
}

impl Panel {
    /// Returns `None` for a zero-length segment.
    pub fn new(start: na::Point2<f64>, end: na::Point2<f64>) -> Option<Self> {
        let t = end - start;
        let length = t.norm();
        if !(length > 0.0) {
            return None;
        }

        let midpoint = na::Point2::new((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
        let tangent = t / length;
        let normal = na::Vector2::new(tangent.y, -tangent.x);

        Some(Panel {
            start,
            end,
            midpoint,
            tangent,
            normal,
            length,
            half_length: length * 0.5,
        })
    }
}

/// Finite chain of points running downstream from the trailing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Wake {
    points: Vec<na::Point2<f64>>,
    panels: Vec<Panel>,
}

impl Wake {
    pub fn new(config: &WakeConfig) -> Result<Self, GeometryError> {
        if !(config.length > 0.0) || !config.length.is_finite() {
            return Err(GeometryError::NonPositiveWakeLength {
                length: config.length,
            });
        }
        if config.num_points < 2 {
            return Err(GeometryError::TooFewWakePoints {
                got: config.num_points,
            });
        }

        let spacing = config.length / config.num_points as f64;
        let points: Vec<_> = (0..config.num_points)
            .map(|k| na::Point2::new(TRAILING_EDGE_X + k as f64 * spacing, TRAILING_EDGE_Y))
            .collect();

        // points are strictly increasing in x, so every pair is a valid panel
        let panels = points
            .windows(2)
            .filter_map(|pts| Panel::new(pts[0], pts[1]))
            .collect();

        Ok(Wake { points, panels })
    }

    pub fn points(&self) -> &[na::Point2<f64>] {
        &self.points
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

/// The two contour panels the wake's doublet strength is folded onto.
///
/// Wake influence is subtracted from column `first` and added to column
/// `last` of the influence matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingEdge {
    pub first: usize,
    pub last: usize,
}

impl TrailingEdge {
    /// Panels touching the contour's start and end point.
    pub fn adjacent(panel_count: usize) -> Self {
        TrailingEdge {
            first: 0,
            last: panel_count.saturating_sub(1),
        }
    }

    pub fn check(self, panel_count: usize) -> Result<Self, GeometryError> {
        for index in [self.first, self.last] {
            if index >= panel_count {
                return Err(GeometryError::TrailingEdgeOutOfRange {
                    index,
                    panels: panel_count,
                });
            }
        }
        Ok(self)
    }
}

impl From<[usize; 2]> for TrailingEdge {
    fn from([first, last]: [usize; 2]) -> Self {
        TrailingEdge { first, last }
    }
}

/// Everything the solver needs to know about the body and its wake.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    pub panels: Vec<Panel>,
    pub wake: Wake,
    pub trailing_edge: TrailingEdge,
}

impl PanelGeometry {
    /// Build panels from an ordered contour. All validation happens here,
    /// before any matrix work.
    pub fn build(
        contour: &[na::Point2<f64>],
        wake: &WakeConfig,
        trailing_edge: Option<TrailingEdge>,
    ) -> Result<Self, GeometryError> {
        if contour.len() < 3 {
            return Err(GeometryError::TooFewPoints { got: contour.len() });
        }
        if let Some(index) = contour
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate { index });
        }

        let panels = contour
            .windows(2)
            .enumerate()
            .map(|(index, pts)| {
                Panel::new(pts[0], pts[1]).ok_or(GeometryError::DegeneratePanel { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        check_coincident(&panels)?;

        let area = signed_area(contour);
        if !(area.abs() > MIN_RELATIVE_AREA * bounding_size(contour).powi(2)) {
            return Err(GeometryError::ZeroArea { area });
        }

        let wake = Wake::new(wake)?;
        let trailing_edge = trailing_edge
            .unwrap_or_else(|| TrailingEdge::adjacent(panels.len()))
            .check(panels.len())?;

        Ok(PanelGeometry {
            panels,
            wake,
            trailing_edge,
        })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn half_lengths(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.half_length).collect()
    }

    pub fn midpoints(&self) -> Vec<na::Point2<f64>> {
        self.panels.iter().map(|p| p.midpoint).collect()
    }

    /// Index of the contour point with the smallest x.
    pub fn leading_edge_index(&self) -> usize {
        let mut best = 0;
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.start.x < self.panels[best].start.x {
                best = i;
            }
        }
        best
    }

    /// Extent of the contour along x.
    pub fn chord(&self) -> f64 {
        let (min, max) = self
            .panels
            .iter()
            .flat_map(|p| [p.start.x, p.end.x])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });
        max - min
    }
}

/// Shoelace area of the contour, closed back to its first point.
/// Positive for counter-clockwise ordering.
pub fn signed_area(contour: &[na::Point2<f64>]) -> f64 {
    let n = contour.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = contour[i];
            let b = contour[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice
}

fn bounding_size(contour: &[na::Point2<f64>]) -> f64 {
    let (lo, hi) = contour.iter().fold(
        (
            na::Point2::new(f64::INFINITY, f64::INFINITY),
            na::Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    );
    (hi.x - lo.x).max(hi.y - lo.y)
}

// Two panels over the same pair of points, in either direction, give two
// linearly dependent columns in the influence matrix.
fn check_coincident(panels: &[Panel]) -> Result<(), GeometryError> {
    for (first, a) in panels.iter().enumerate() {
        for (offset, b) in panels[first + 1..].iter().enumerate() {
            let same = (a.start == b.start && a.end == b.end)
                || (a.start == b.end && a.end == b.start);
            if same {
                return Err(GeometryError::CoincidentPanels {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    Ok(())
}
