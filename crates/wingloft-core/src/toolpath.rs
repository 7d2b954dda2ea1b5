//! Toolpath steps and the final step sequence handed to exporters.

use crate::geometry::Point3D;
use serde::{Deserialize, Serialize};

/// One unit of the emitted toolpath.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Continue the current path to this point with the pen down.
    Geometry(Point3D),
    /// Lift, move to this point, then resume.
    Travel(Point3D),
}

impl Step {
    pub fn point(&self) -> Point3D {
        match self {
            Step::Geometry(p) | Step::Travel(p) => *p,
        }
    }

    pub fn is_travel(&self) -> bool {
        matches!(self, Step::Travel(_))
    }

    fn map(&self, f: impl Fn(Point3D) -> Point3D) -> Step {
        match self {
            Step::Geometry(p) => Step::Geometry(f(*p)),
            Step::Travel(p) => Step::Travel(f(*p)),
        }
    }
}

/// Axis-aligned extent of a toolpath.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3D {
    pub min: Point3D,
    pub max: Point3D,
}

/// A complete, immutable toolpath.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolpathSequence {
    steps: Vec<Step>,
}

impl ToolpathSequence {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn geometry_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.is_travel()).count()
    }

    pub fn travel_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_travel()).count()
    }

    /// Gets the total pen-down length.
    ///
    /// Every geometry step draws from the previous position; travels only
    /// move the cursor.
    pub fn extrusion_length(&self) -> f64 {
        let mut cursor: Option<Point3D> = None;
        let mut length = 0.0;
        for step in &self.steps {
            let p = step.point();
            if let (Step::Geometry(_), Some(prev)) = (step, cursor) {
                length += prev.distance_to(&p);
            }
            cursor = Some(p);
        }
        length
    }

    pub fn bounds(&self) -> Option<Bounds3D> {
        let first = self.steps.first()?.point();
        let init = Bounds3D {
            min: first,
            max: first,
        };
        Some(self.steps.iter().fold(init, |b, s| {
            let p = s.point();
            Bounds3D {
                min: Point3D::new(b.min.x.min(p.x), b.min.y.min(p.y), b.min.z.min(p.z)),
                max: Point3D::new(b.max.x.max(p.x), b.max.y.max(p.y), b.max.z.max(p.z)),
            }
        }))
    }

    /// Returns a copy moved by `offset`, used to place the part on the bed.
    pub fn translated(&self, offset: Point3D) -> ToolpathSequence {
        self.steps
            .iter()
            .map(|s| s.map(|p| p.translated(&offset)))
            .collect()
    }
}

impl FromIterator<Step> for ToolpathSequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ToolpathSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
