//! Loft configuration
//!
//! One immutable [`LoftConfig`] is built by the caller and passed by reference
//! through every stage of the pipeline. No stage reads ambient settings.
//!
//! Configuration is organized into logical sections:
//! - Profile resolution and canonicalization of imported data
//! - Layer pitch, chord interpolation and edge anchoring
//! - Interior infill pattern
//! - Reinforcement rings
//! - Fully solid layers

use crate::ring::RingSpec;
use serde::{Deserialize, Serialize};
use wingloft_core::{LoftResult, ParameterError};

/// How chord length varies between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChordInterpolation {
    /// Straight taper between the two station chords.
    #[default]
    Linear,
    /// Taper follows `t² * curve_amount` (0 = no taper, 1 = full taper).
    Quadratic { curve_amount: f64 },
    /// Semi-axis interpolation `chord + delta * sqrt(1 + t²)`.
    Elliptical,
    /// Whole-wing elliptical planform: the largest chord is the semi-minor
    /// axis and the tallest station the semi-major axis.
    EllipticalPlanform,
}

impl std::fmt::Display for ChordInterpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Quadratic { curve_amount } => write!(f, "quadratic ({curve_amount})"),
            Self::Elliptical => write!(f, "elliptical"),
            Self::EllipticalPlanform => write!(f, "elliptical planform"),
        }
    }
}

/// Which edge of the section stays put when the chord shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeAnchoring {
    /// Both edges move; the section stays centered on the station chord.
    #[default]
    Centered,
    /// The trailing edge is anchored; only the leading edge moves.
    TrailingEdge,
    /// The leading edge is anchored (also the "nothing moves" case).
    LeadingEdge,
}

impl EdgeAnchoring {
    /// x shift applied to a section of `chord` lofted from a station of
    /// `station_chord`.
    pub fn shift(&self, station_chord: f64, chord: f64) -> f64 {
        match self {
            Self::Centered => (station_chord - chord) / 2.0,
            Self::TrailingEdge => station_chord - chord,
            Self::LeadingEdge => 0.0,
        }
    }
}

/// Post-processing applied to imported profile coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalizeOptions {
    /// Points inserted between every consecutive pair (0 disables).
    pub densify_multiplier: usize,
    /// Drop points lying exactly on y = 0.
    pub remove_zero_y: bool,
    /// Split into upper/lower halves and sort so the contour starts and ends
    /// at the same edge.
    pub sort_points: bool,
    /// Start and end at max x instead of min x.
    pub reverse: bool,
}

impl Default for CanonicalizeOptions {
    fn default() -> Self {
        Self {
            densify_multiplier: 0,
            remove_zero_y: false,
            sort_points: true,
            reverse: false,
        }
    }
}

/// Interior fill algorithm selected for sparse layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfillPattern {
    #[default]
    ModifiedTriangleWave,
    RectilinearScan,
    SolidScanline,
}

/// Sparse infill settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfillConfig {
    pub pattern: InfillPattern,
    /// Number of bands across the chord (at least 1).
    pub density: usize,
    /// Contour starts at max x instead of min x.
    pub reverse: bool,
    /// Lift the last infill point by half a layer.
    pub rise: bool,
}

impl Default for InfillConfig {
    fn default() -> Self {
        Self {
            pattern: InfillPattern::ModifiedTriangleWave,
            density: 6,
            reverse: false,
            rise: false,
        }
    }
}

/// Fully filled layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolidFillConfig {
    /// Layer heights that receive a solid fill.
    pub layers: Vec<f64>,
    /// Scan direction in degrees.
    pub angle_deg: f64,
    /// Scanline spacing.
    pub line_width: f64,
    /// Tolerance used when matching layer z to `layers`.
    pub z_tolerance: f64,
}

impl Default for SolidFillConfig {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            angle_deg: 45.0,
            line_width: 0.4,
            z_tolerance: 1e-6,
        }
    }
}

impl SolidFillConfig {
    /// Whether the layer at `z` is one of the solid layers.
    pub fn contains(&self, z: f64) -> bool {
        self.layers
            .iter()
            .any(|target| (z - target).abs() < self.z_tolerance)
    }
}

/// Everything the loft pipeline needs besides the stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoftConfig {
    /// Points per surface of a generated NACA profile.
    pub resolution: usize,
    /// Layer pitch.
    pub layer_height: f64,
    pub chord_interpolation: ChordInterpolation,
    pub edge_anchoring: EdgeAnchoring,
    /// Morph point-by-point between adjacent station shapes.
    pub blend_shapes: bool,
    pub canonicalize: CanonicalizeOptions,
    pub infill: Option<InfillConfig>,
    pub rings: Vec<RingSpec>,
    pub solid_fill: Option<SolidFillConfig>,
}

impl Default for LoftConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            layer_height: 0.3,
            chord_interpolation: ChordInterpolation::Linear,
            edge_anchoring: EdgeAnchoring::Centered,
            blend_shapes: false,
            canonicalize: CanonicalizeOptions::default(),
            infill: None,
            rings: Vec::new(),
            solid_fill: None,
        }
    }
}

impl LoftConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration
    pub fn validate(&self) -> LoftResult<()> {
        if self.resolution < 2 {
            return Err(ParameterError::invalid("resolution", "must be at least 2").into());
        }
        ParameterError::require_positive("layer_height", self.layer_height)?;

        if let ChordInterpolation::Quadratic { curve_amount } = self.chord_interpolation {
            if !curve_amount.is_finite() {
                return Err(ParameterError::invalid("curve_amount", "must be finite").into());
            }
        }

        if let Some(infill) = &self.infill {
            if infill.density == 0 {
                return Err(ParameterError::invalid("infill.density", "must be at least 1").into());
            }
        }

        for ring in &self.rings {
            ring.validate()?;
        }

        if let Some(solid) = &self.solid_fill {
            ParameterError::require_positive("solid_fill.line_width", solid.line_width)?;
            ParameterError::require_positive("solid_fill.z_tolerance", solid.z_tolerance)?;
            if !solid.angle_deg.is_finite() {
                return Err(ParameterError::invalid("solid_fill.angle_deg", "must be finite").into());
            }
        }

        Ok(())
    }
}
