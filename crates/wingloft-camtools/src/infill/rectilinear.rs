//! Rectilinear grid infill.

use super::FillPattern;
use wingloft_core::{AirfoilContour, LoftResult, Point2D, Point3D, Step};

/// Even-odd ray cast against the closed polygon `polygon`.
pub fn point_in_polygon(point: &Point2D, polygon: &[Point2D]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (polygon[j], polygon[i]);
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Samples a `density x density` grid over the section bounds and keeps the
/// samples inside the section.
///
/// Columns are walked in alternating directions. Every unbroken run of
/// inside samples starts with a travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectilinearScan {
    pub density: usize,
}

impl RectilinearScan {
    pub fn new(density: usize) -> Self {
        Self { density }
    }

    /// Runs of inside grid points, column by column.
    pub fn runs(&self, contour: &AirfoilContour, z: f64) -> Vec<Vec<Point3D>> {
        let Some(bounds) = contour.bounds() else {
            return Vec::new();
        };
        let density = self.density.max(1);
        let dx = bounds.width() / density as f64;
        let dy = bounds.height() / density as f64;

        let mut runs = Vec::new();
        for column in 0..density {
            let x = bounds.min_x + dx * column as f64;
            let rows: Box<dyn Iterator<Item = usize>> = if column % 2 == 0 {
                Box::new(0..density)
            } else {
                Box::new((0..density).rev())
            };

            let mut run = Vec::new();
            for row in rows {
                let sample = Point2D::new(x, bounds.min_y + dy * row as f64);
                if point_in_polygon(&sample, contour.points()) {
                    run.push(sample.with_z(z));
                } else if !run.is_empty() {
                    runs.push(std::mem::take(&mut run));
                }
            }
            if !run.is_empty() {
                runs.push(run);
            }
        }
        runs
    }
}

impl FillPattern for RectilinearScan {
    fn fill(&self, contour: &AirfoilContour, z: f64) -> LoftResult<Vec<Step>> {
        let mut steps = Vec::new();
        for run in self.runs(contour, z) {
            let mut points = run.into_iter();
            if let Some(first) = points.next() {
                steps.push(Step::Travel(first));
            }
            steps.extend(points.map(Step::Geometry));
        }
        Ok(steps)
    }
}
