//! Modified triangle wave infill
//!
//! The chord is divided into `density` bands. At every interior band edge the
//! path hops to the nearest contour point, alternating between the upper and
//! lower surface, runs to the far edge and comes back the same way with the
//! halves swapped. The result is a zig-zag truss that touches the skin at
//! every band edge on both surfaces.

use super::FillPattern;
use crate::config::InfillConfig;
use wingloft_core::{AirfoilContour, LoftResult, Point2D, Point3D, Step};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Half {
    Upper,
    Lower,
}

impl Half {
    fn for_index(i: usize) -> Self {
        if i % 2 == 0 {
            Half::Upper
        } else {
            Half::Lower
        }
    }

    fn contains(&self, p: &Point2D) -> bool {
        match self {
            Half::Upper => p.y > 0.0,
            Half::Lower => p.y < 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedTriangleWave {
    pub density: usize,
    /// The section starts at max x rather than min x.
    pub reverse: bool,
    /// Lift the final point by half a layer to ease into the next layer.
    pub rise: bool,
    pub layer_height: f64,
}

impl ModifiedTriangleWave {
    pub fn from_config(config: &InfillConfig, layer_height: f64) -> Self {
        Self {
            density: config.density,
            reverse: config.reverse,
            rise: config.rise,
            layer_height,
        }
    }

    /// Wave points for `contour` at height `z` across `[min_x, max_x]`.
    ///
    /// Band edges sit at `min_x + i * (max_x - min_x) / density`, which is
    /// `i * max_x / density` for a section starting at x = 0.
    ///
    /// `2 * density` points: two passes of `density - 1` surface points,
    /// each followed by a point on the chord line. A reversed wave turns at
    /// `min_x`, crosses to `max_x` and then closes back at `min_x`, one point
    /// more. The closing point is the one `rise` lifts, so the wave always
    /// finishes at the leading edge where the next layer starts.
    pub fn generate(
        &self,
        contour: &AirfoilContour,
        z: f64,
        min_x: f64,
        max_x: f64,
    ) -> Vec<Point3D> {
        let density = self.density.max(1);
        let band = (max_x - min_x) / density as f64;
        let mut points = Vec::with_capacity(2 * density + 1);

        let forward = |points: &mut Vec<Point3D>| {
            for i in 1..density {
                let x = min_x + band * i as f64;
                points.push(closest_on_half(contour, Half::for_index(i), x, z));
            }
        };
        let backward = |points: &mut Vec<Point3D>| {
            for i in (1..density).rev() {
                let x = min_x + band * i as f64;
                points.push(closest_on_half(contour, Half::for_index(i + 1), x, z));
            }
        };

        let end_z = if self.rise {
            z + self.layer_height / 2.0
        } else {
            z
        };

        if self.reverse {
            backward(&mut points);
            points.push(Point3D::new(min_x, 0.0, z));
            forward(&mut points);
            points.push(Point3D::new(max_x, 0.0, z));
        } else {
            forward(&mut points);
            points.push(Point3D::new(max_x, 0.0, z));
            backward(&mut points);
        }
        points.push(Point3D::new(min_x, 0.0, end_z));

        points
    }
}

impl FillPattern for ModifiedTriangleWave {
    fn fill(&self, contour: &AirfoilContour, z: f64) -> LoftResult<Vec<Step>> {
        let Some(bounds) = contour.bounds() else {
            return Ok(Vec::new());
        };
        Ok(self
            .generate(contour, z, bounds.min_x, bounds.max_x)
            .into_iter()
            .map(Step::Geometry)
            .collect())
    }
}

/// Point of `half` whose x is nearest `x`; the first of equally near points
/// wins. Falls back to the chord line when the half is empty.
fn closest_on_half(contour: &AirfoilContour, half: Half, x: f64, z: f64) -> Point3D {
    let mut best: Option<(f64, &Point2D)> = None;
    for p in contour.iter().filter(|p| half.contains(p)) {
        let dx = (p.x - x).abs();
        if best.map_or(true, |(d, _)| dx < d) {
            best = Some((dx, p));
        }
    }
    match best {
        Some((_, p)) => p.with_z(z),
        None => Point3D::new(x, 0.0, z),
    }
}
