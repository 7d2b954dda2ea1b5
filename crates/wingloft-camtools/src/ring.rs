//! Reinforcement rings
//!
//! An annulus traced as a run of arc segments. Each segment walks the outer
//! radius and then the inner radius over the same angular span, so one layer
//! of a ring is a single pen-down path after the initial travel.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wingloft_core::{LoftResult, ParameterError, Point2D, Point3D, Step};

fn default_outer_radius() -> f64 {
    4.0
}

fn default_inner_offset() -> f64 {
    0.75
}

fn default_points_per_arc() -> usize {
    24
}

fn default_start_angle() -> f64 {
    180.0
}

fn default_segment_angle() -> f64 {
    45.0
}

/// One ring, anchored between two centers along the loft axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub start_center: Point3D,
    pub end_center: Point3D,
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,
    /// Radial distance from the outer arc to the inner arc.
    #[serde(default = "default_inner_offset")]
    pub inner_offset: f64,
    #[serde(default = "default_points_per_arc")]
    pub points_per_arc: usize,
    #[serde(default = "default_start_angle")]
    pub start_angle_deg: f64,
    #[serde(default = "default_segment_angle")]
    pub segment_angle_deg: f64,
}

impl RingSpec {
    /// Ring between two centers with the default profile.
    pub fn new(start_center: Point3D, end_center: Point3D) -> Self {
        Self {
            start_center,
            end_center,
            outer_radius: default_outer_radius(),
            inner_offset: default_inner_offset(),
            points_per_arc: default_points_per_arc(),
            start_angle_deg: default_start_angle(),
            segment_angle_deg: default_segment_angle(),
        }
    }

    pub fn validate(&self) -> LoftResult<()> {
        if self.start_center.z >= self.end_center.z {
            return Err(ParameterError::invalid(
                "ring.end_center",
                format!(
                    "end z {} must be above start z {}",
                    self.end_center.z, self.start_center.z
                ),
            )
            .into());
        }
        ParameterError::require_positive("ring.outer_radius", self.outer_radius)?;
        if !(0.0..self.outer_radius).contains(&self.inner_offset) {
            return Err(ParameterError::OutOfRange {
                name: "ring.inner_offset".to_string(),
                value: self.inner_offset,
                min: 0.0,
                max: self.outer_radius,
            }
            .into());
        }
        if self.points_per_arc == 0 {
            return Err(ParameterError::invalid("ring.points_per_arc", "must be at least 1").into());
        }
        if !(self.segment_angle_deg > 0.0 && self.segment_angle_deg <= 360.0) {
            return Err(ParameterError::OutOfRange {
                name: "ring.segment_angle_deg".to_string(),
                value: self.segment_angle_deg,
                min: 0.0,
                max: 360.0,
            }
            .into());
        }
        Ok(())
    }

    /// Whether the ring is present at height `z` (both ends inclusive).
    pub fn covers(&self, z: f64) -> bool {
        self.start_center.z <= z && z <= self.end_center.z
    }

    /// Center at height `z`, interpolated between the two anchors.
    pub fn center_at(&self, z: f64) -> Point3D {
        let t = (z - self.start_center.z) / (self.end_center.z - self.start_center.z);
        self.start_center.lerp(&self.end_center, t)
    }

    pub fn inner_radius(&self) -> f64 {
        self.outer_radius - self.inner_offset
    }

    /// Whole segments that fit in a full turn.
    pub fn segment_count(&self) -> usize {
        (360.0 / self.segment_angle_deg + 1e-9).floor() as usize
    }

    /// Travel to the outer start, then every segment's outer and inner arc.
    ///
    /// An arc of a single point is just the segment start.
    pub fn layer_steps(&self, z: f64) -> LoftResult<Vec<Step>> {
        self.validate()?;
        let center = self.center_at(z).xy();
        let segments = self.segment_count();
        let mut steps = Vec::with_capacity(1 + segments * 2 * self.points_per_arc);

        steps.push(Step::Travel(
            arc_point(center, self.outer_radius, self.start_angle_deg).with_z(z),
        ));

        let pitch = match self.points_per_arc {
            1 => 0.0,
            n => self.segment_angle_deg / (n - 1) as f64,
        };
        for segment in 0..segments {
            let from = self.start_angle_deg + segment as f64 * self.segment_angle_deg;
            for radius in [self.outer_radius, self.inner_radius()] {
                for k in 0..self.points_per_arc {
                    let angle = from + pitch * k as f64;
                    steps.push(Step::Geometry(arc_point(center, radius, angle).with_z(z)));
                }
            }
        }
        Ok(steps)
    }
}

fn arc_point(center: Point2D, radius: f64, angle_deg: f64) -> Point2D {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point2D::new(center.x + radius * cos, center.y + radius * sin)
}

/// Emits every ring that covers a layer.
pub struct RingGenerator;

impl RingGenerator {
    /// Steps for all rings present at `z`, in the order given. Rings that do not
    /// cover `z` contribute nothing; an invalid ring is an error.
    pub fn generate(rings: &[RingSpec], z: f64) -> LoftResult<Vec<Step>> {
        let mut steps = Vec::new();
        for (index, ring) in rings.iter().enumerate().filter(|(_, r)| r.covers(z)) {
            let before = steps.len();
            steps.extend(ring.layer_steps(z)?);
            debug!(ring = index, z, steps = steps.len() - before, "Ring layer");
        }
        Ok(steps)
    }
}
