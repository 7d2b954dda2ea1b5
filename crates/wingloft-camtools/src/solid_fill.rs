//! Scanline solid fill
//!
//! Fills a closed polygon with parallel lines at an arbitrary angle. The
//! polygon is rotated into a frame where the lines are horizontal, scanned
//! row by row with line width spacing, and each line is rotated back.

use crate::infill::FillPattern;
use nalgebra::{Point2, Rotation2};
use tracing::debug;
use wingloft_core::{AirfoilContour, Bounds2D, LoftError, LoftResult, Point2D, Step};

/// One fill line in section coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSegment {
    pub start: Point2D,
    pub end: Point2D,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidFill {
    pub line_width: f64,
    pub angle_deg: f64,
}

impl SolidFill {
    pub fn new(line_width: f64, angle_deg: f64) -> Self {
        Self {
            line_width,
            angle_deg,
        }
    }

    fn validate(&self, contour: &AirfoilContour) -> LoftResult<()> {
        if contour.is_empty() {
            return Err(LoftError::EmptyContour("solid fill needs a contour".to_string()));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(LoftError::InvalidParameters(format!(
                "solid fill line width must be positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }

    /// Fill lines in emission order, already chained so each line starts at
    /// whichever end is closer to where the previous one finished.
    pub fn segments(&self, contour: &AirfoilContour) -> LoftResult<Vec<FillSegment>> {
        self.validate(contour)?;

        let into_frame = Rotation2::new(-self.angle_deg.to_radians());
        let out_of_frame = into_frame.inverse();

        let rotated: Vec<Point2D> = contour
            .iter()
            .map(|p| {
                let q = into_frame * Point2::new(p.x, p.y);
                Point2D::new(q.x, q.y)
            })
            .collect();
        let Some(bounds) = Bounds2D::of(&rotated) else {
            return Ok(Vec::new());
        };

        let back = |x: f64, y: f64| {
            let q = out_of_frame * Point2::new(x, y);
            Point2D::new(q.x, q.y)
        };

        let mut segments: Vec<FillSegment> = Vec::new();
        let mut row = 0usize;
        loop {
            let y = bounds.min_y + row as f64 * self.line_width;
            if y > bounds.max_y {
                break;
            }
            row += 1;

            let mut intercepts = scanline_intercepts(&rotated, y);
            intercepts.sort_by(|a, b| a.total_cmp(b));

            for pair in intercepts.chunks_exact(2) {
                let mut segment = FillSegment {
                    start: back(pair[0], y),
                    end: back(pair[1], y),
                };
                if let Some(previous) = segments.last() {
                    if segment.start.distance_to(&previous.end)
                        > segment.end.distance_to(&previous.end)
                    {
                        std::mem::swap(&mut segment.start, &mut segment.end);
                    }
                }
                segments.push(segment);
            }
        }

        debug!(
            rows = row,
            segments = segments.len(),
            angle = self.angle_deg,
            "Solid fill scanned"
        );
        Ok(segments)
    }

    /// Travel to each line's start and draw to its end, then travel back to
    /// the first line's start.
    pub fn generate(&self, contour: &AirfoilContour, z: f64) -> LoftResult<Vec<Step>> {
        let segments = self.segments(contour)?;
        let mut steps = Vec::with_capacity(segments.len() * 2 + 1);
        for segment in &segments {
            steps.push(Step::Travel(segment.start.with_z(z)));
            steps.push(Step::Geometry(segment.end.with_z(z)));
        }
        if let Some(first) = segments.first() {
            steps.push(Step::Travel(first.start.with_z(z)));
        }
        Ok(steps)
    }
}

impl FillPattern for SolidFill {
    fn fill(&self, contour: &AirfoilContour, z: f64) -> LoftResult<Vec<Step>> {
        self.generate(contour, z)
    }
}

/// x positions where the closed polygon crosses the horizontal line `y`.
///
/// An edge counts when `min(y1, y2) < y <= max(y1, y2)`, so a vertex on the
/// line is counted once and horizontal edges never are.
fn scanline_intercepts(polygon: &[Point2D], y: f64) -> Vec<f64> {
    let n = polygon.len();
    let mut intercepts = Vec::new();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y.min(b.y) < y && y <= a.y.max(b.y) {
            intercepts.push(a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y));
        }
    }
    intercepts
}
