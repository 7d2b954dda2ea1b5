//! Coordinate values and airfoil contours.

use serde::{Deserialize, Serialize};

/// A point in the section plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`.
    pub fn lerp(&self, other: &Point2D, t: f64) -> Point2D {
        Point2D::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
        )
    }

    /// Rotates counter-clockwise about the origin.
    pub fn rotated(&self, angle_deg: f64) -> Point2D {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Point2D::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Lifts the point into 3D at the given height.
    pub fn with_z(&self, z: f64) -> Point3D {
        Point3D::new(self.x, self.y, z)
    }
}

/// A point in machine space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn lerp(&self, other: &Point3D, t: f64) -> Point3D {
        Point3D::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
            self.z * (1.0 - t) + other.z * t,
        )
    }

    /// Drops the z component.
    pub fn xy(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn translated(&self, offset: &Point3D) -> Point3D {
        Point3D::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }
}

/// Axis-aligned extent of a contour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds2D {
    /// Computes the bounds of a point set, `None` when it is empty.
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Bounds2D {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(iter.fold(init, |b, p| Bounds2D {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// An ordered closed airfoil outline.
///
/// Upper surface followed by lower surface (or the mirror for reversed
/// imports); the first and last points sit at the same edge of the section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirfoilContour {
    points: Vec<Point2D>,
}

impl AirfoilContour {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    pub fn bounds(&self) -> Option<Bounds2D> {
        Bounds2D::of(&self.points)
    }

    /// Uniformly scales every point about the origin.
    pub fn scaled(&self, factor: f64) -> AirfoilContour {
        self.points
            .iter()
            .map(|p| Point2D::new(p.x * factor, p.y * factor))
            .collect()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> AirfoilContour {
        self.points
            .iter()
            .map(|p| Point2D::new(p.x + dx, p.y + dy))
            .collect()
    }

    /// Places the contour at height `z`.
    pub fn lifted(&self, z: f64) -> Vec<Point3D> {
        self.points.iter().map(|p| p.with_z(z)).collect()
    }
}

impl FromIterator<Point2D> for AirfoilContour {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AirfoilContour {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
