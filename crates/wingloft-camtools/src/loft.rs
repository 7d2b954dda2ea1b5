//! Loft engine
//!
//! Interpolates chord length and section shape between consecutive stations
//! and produces one [`CrossSection`] per layer. Every `(span, layer)` pair is
//! an independent work item; they are evaluated on the rayon pool and
//! collected in their original order.

use crate::config::{ChordInterpolation, LoftConfig};
use crate::profile::{AirfoilShape, ProfileSource};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use wingloft_core::{AirfoilContour, LoftError, LoftResult, Point2D};

/// A z position with a prescribed chord and cross-section shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub z: f64,
    pub chord_length: f64,
    pub shape: AirfoilShape,
}

impl Station {
    pub fn new(z: f64, chord_length: f64, shape: AirfoilShape) -> Self {
        Self {
            z,
            chord_length,
            shape,
        }
    }

    /// Station with a NACA section.
    pub fn naca(z: f64, chord_length: f64, code: &str) -> Self {
        Self::new(z, chord_length, AirfoilShape::naca(code))
    }
}

/// Geometry of one loft layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    /// Index of the lower station of the span this layer belongs to.
    pub span: usize,
    /// Layer index within the span.
    pub layer: usize,
    pub z: f64,
    pub chord_length: f64,
    pub contour: AirfoilContour,
}

/// Whole-wing ellipse used by [`ChordInterpolation::EllipticalPlanform`].
#[derive(Debug, Clone, Copy)]
struct Planform {
    semi_minor: f64,
    semi_major: f64,
    root_z: f64,
}

impl Planform {
    fn of(stations: &[Station]) -> Self {
        let root = stations
            .iter()
            .max_by(|a, b| a.chord_length.total_cmp(&b.chord_length))
            .map(|s| (s.chord_length, s.z))
            .unwrap_or((0.0, 0.0));
        let semi_major = stations.iter().map(|s| s.z).fold(f64::NEG_INFINITY, f64::max);
        Self {
            semi_minor: root.0,
            semi_major,
            root_z: root.1,
        }
    }

    fn chord_at(&self, z: f64) -> f64 {
        if self.semi_major <= 0.0 {
            return self.semi_minor;
        }
        let d = (z - self.root_z) / self.semi_major;
        self.semi_minor * (1.0 - d * d).max(0.0).sqrt()
    }
}

/// Per-span data shared by all of that span's layers.
struct Span {
    index: usize,
    layers: usize,
    blend: bool,
}

#[derive(Debug, Clone, Copy)]
struct WorkItem {
    span: usize,
    layer: usize,
}

/// Lofts stations into per-layer cross-sections.
pub struct LoftEngine<'a> {
    config: &'a LoftConfig,
}

impl<'a> LoftEngine<'a> {
    pub fn new(config: &'a LoftConfig) -> Self {
        Self { config }
    }

    /// Layers a span of height `dz` holds at the configured pitch.
    pub fn layers_in_span(&self, dz: f64) -> usize {
        (dz / self.config.layer_height + 1e-9).floor() as usize
    }

    /// Interpolated chord for layer `t` of the span starting at `stations[i]`.
    fn chord_at(&self, stations: &[Station], planform: &Planform, i: usize, t: f64, z: f64) -> f64 {
        let start = stations[i].chord_length;
        let delta = stations[i + 1].chord_length - start;
        match self.config.chord_interpolation {
            ChordInterpolation::Linear => start + delta * t,
            ChordInterpolation::Quadratic { curve_amount } => start + delta * t * t * curve_amount,
            ChordInterpolation::Elliptical => start + delta * (1.0 + t * t).sqrt(),
            ChordInterpolation::EllipticalPlanform => planform.chord_at(z),
        }
    }

    pub fn build(&self, stations: &[Station]) -> LoftResult<Vec<CrossSection>> {
        self.config.validate()?;
        validate_stations(stations)?;

        let source = ProfileSource::from_config(self.config);
        let unit_contours = stations
            .par_iter()
            .map(|station| source.contour_for(&station.shape, 1.0))
            .collect::<LoftResult<Vec<_>>>()?;

        let spans = self.plan_spans(stations, &unit_contours)?;
        let items: Vec<WorkItem> = spans
            .iter()
            .flat_map(|span| {
                (0..span.layers).map(move |layer| WorkItem {
                    span: span.index,
                    layer,
                })
            })
            .collect();

        info!(
            stations = stations.len(),
            layers = items.len(),
            interpolation = %self.config.chord_interpolation,
            "Lofting stations"
        );

        let planform = Planform::of(stations);
        let sections = items
            .into_par_iter()
            .map(|item| {
                self.section(
                    stations,
                    &unit_contours,
                    &planform,
                    &spans[item.span],
                    item.layer,
                )
            })
            .collect::<LoftResult<Vec<_>>>()?;

        debug!(sections = sections.len(), "Loft complete");
        Ok(sections)
    }

    fn plan_spans(
        &self,
        stations: &[Station],
        unit_contours: &[AirfoilContour],
    ) -> LoftResult<Vec<Span>> {
        let layer_height = self.config.layer_height;
        stations
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                let layers = self.layers_in_span(pair[1].z - pair[0].z);
                if layers == 0 {
                    return Err(LoftError::DegenerateSpan {
                        span: index,
                        z_start: pair[0].z,
                        z_end: pair[1].z,
                        layer_height,
                    });
                }

                let mut blend = self.config.blend_shapes;
                let (lower, upper) = (&unit_contours[index], &unit_contours[index + 1]);
                if blend && lower.len() != upper.len() {
                    warn!(
                        span = index,
                        lower = lower.len(),
                        upper = upper.len(),
                        "Station shapes have different point counts, holding lower shape"
                    );
                    blend = false;
                }

                debug!(span = index, layers, blend, "Planned span");
                Ok(Span {
                    index,
                    layers,
                    blend,
                })
            })
            .collect()
    }

    fn section(
        &self,
        stations: &[Station],
        unit_contours: &[AirfoilContour],
        planform: &Planform,
        span: &Span,
        layer: usize,
    ) -> LoftResult<CrossSection> {
        let i = span.index;
        let t = layer as f64 / span.layers as f64;
        let z = stations[i].z + layer as f64 * self.config.layer_height;
        let chord_length = self.chord_at(stations, planform, i, t, z);
        if !(chord_length.is_finite() && chord_length > 0.0) {
            return Err(LoftError::InvalidParameters(format!(
                "{} chord interpolation gives chord {chord_length} at span {i} layer {layer} (z = {z})",
                self.config.chord_interpolation
            )));
        }

        let base = if span.blend {
            unit_contours[i]
                .iter()
                .zip(unit_contours[i + 1].iter())
                .map(|(a, b)| a.lerp(b, t))
                .collect::<AirfoilContour>()
        } else {
            unit_contours[i].clone()
        };

        let shift = self
            .config
            .edge_anchoring
            .shift(stations[i].chord_length, chord_length);
        let contour = base
            .iter()
            .map(|p| Point2D::new(p.x * chord_length + shift, p.y * chord_length))
            .collect();

        Ok(CrossSection {
            span: i,
            layer,
            z,
            chord_length,
            contour,
        })
    }
}

fn validate_stations(stations: &[Station]) -> LoftResult<()> {
    if stations.len() < 2 {
        return Err(LoftError::InvalidParameters(format!(
            "at least two stations are required, got {}",
            stations.len()
        )));
    }
    for (index, pair) in stations.windows(2).enumerate() {
        if pair[1].z <= pair[0].z {
            return Err(LoftError::InvalidParameters(format!(
                "station z must be strictly increasing: station {} at {} follows {}",
                index + 1,
                pair[1].z,
                pair[0].z
            )));
        }
    }
    Ok(())
}
