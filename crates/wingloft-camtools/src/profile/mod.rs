//! Airfoil cross-section sources.
//!
//! A station's shape is either a closed-form NACA designation or a list of
//! digitized coordinates normalised to a unit chord. [`ProfileSource`] turns
//! either into an [`AirfoilContour`] at a given chord length.

pub mod canonical;
pub mod naca;

pub use canonical::{canonical_order, canonicalize, dedup_consecutive, densify, remove_zero_y};
pub use naca::{naca_contour, CamberFamily, NacaProfile};

use crate::config::{CanonicalizeOptions, LoftConfig};
use serde::{Deserialize, Serialize};
use wingloft_core::{AirfoilContour, LoftError, LoftResult, ParameterError, Point2D};

/// Shape assigned to a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AirfoilShape {
    /// Closed-form NACA 4/5-digit designation.
    Naca { code: String },
    /// Coordinates already parsed from a profile file, scaled to `[0, 1]`.
    Imported { name: String, points: Vec<Point2D> },
}

impl AirfoilShape {
    pub fn naca(code: impl Into<String>) -> Self {
        Self::Naca { code: code.into() }
    }

    pub fn imported(name: impl Into<String>, points: Vec<Point2D>) -> Self {
        Self::Imported {
            name: name.into(),
            points,
        }
    }

    /// Human readable identifier for logs and errors.
    pub fn label(&self) -> &str {
        match self {
            Self::Naca { code } => code,
            Self::Imported { name, .. } => name,
        }
    }
}

/// Produces contours for station shapes.
#[derive(Debug, Clone)]
pub struct ProfileSource {
    resolution: usize,
    canonicalize: CanonicalizeOptions,
}

impl ProfileSource {
    pub fn new(resolution: usize, canonicalize: CanonicalizeOptions) -> Self {
        Self {
            resolution,
            canonicalize,
        }
    }

    pub fn from_config(config: &LoftConfig) -> Self {
        Self::new(config.resolution, config.canonicalize)
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Closed-form contour for a NACA code.
    pub fn generate(&self, code: &str, chord_length: f64) -> LoftResult<AirfoilContour> {
        naca_contour(code, self.resolution, chord_length)
    }

    /// Scales imported unit-chord coordinates and canonicalizes them.
    pub fn load(&self, points: &[Point2D], chord_length: f64) -> LoftResult<AirfoilContour> {
        self.load_labeled(points, chord_length, "imported profile")
    }

    pub fn contour_for(
        &self,
        shape: &AirfoilShape,
        chord_length: f64,
    ) -> LoftResult<AirfoilContour> {
        match shape {
            AirfoilShape::Naca { code } => self.generate(code, chord_length),
            AirfoilShape::Imported { name, points } => {
                self.load_labeled(points, chord_length, name)
            }
        }
    }

    fn load_labeled(
        &self,
        points: &[Point2D],
        chord_length: f64,
        label: &str,
    ) -> LoftResult<AirfoilContour> {
        ParameterError::require_positive("chord_length", chord_length)?;
        if points.is_empty() {
            return Err(LoftError::EmptyContour(format!("{label} has no points")));
        }

        let scaled = AirfoilContour::new(points.to_vec()).scaled(chord_length);
        let contour = canonicalize(&scaled, &self.canonicalize);
        if contour.is_empty() {
            return Err(LoftError::EmptyContour(format!(
                "{label} has no usable points after canonicalization"
            )));
        }
        Ok(contour)
    }
}
