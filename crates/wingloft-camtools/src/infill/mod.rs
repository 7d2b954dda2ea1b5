//! Interior fill patterns
//!
//! Each pattern turns one closed section into a list of steps at a given
//! height. The assembler picks the implementation from the
//! [`InfillPattern`] tag in the configuration.

pub mod rectilinear;
pub mod triangle_wave;

pub use rectilinear::{point_in_polygon, RectilinearScan};
pub use triangle_wave::ModifiedTriangleWave;

use crate::config::{InfillConfig, InfillPattern, SolidFillConfig};
use crate::solid_fill::SolidFill;
use wingloft_core::{AirfoilContour, LoftResult, Step};

/// A fill strategy for one section.
pub trait FillPattern: Send + Sync {
    fn fill(&self, contour: &AirfoilContour, z: f64) -> LoftResult<Vec<Step>>;
}

/// Builds the fill selected by `config`.
///
/// `SolidScanline` takes its angle and line width from the solid fill
/// settings when present, otherwise from their defaults.
pub fn pattern_for(
    config: &InfillConfig,
    solid: Option<&SolidFillConfig>,
    layer_height: f64,
) -> Box<dyn FillPattern> {
    match config.pattern {
        InfillPattern::ModifiedTriangleWave => {
            Box::new(ModifiedTriangleWave::from_config(config, layer_height))
        }
        InfillPattern::RectilinearScan => Box::new(RectilinearScan::new(config.density)),
        InfillPattern::SolidScanline => {
            let solid = solid.cloned().unwrap_or_default();
            Box::new(SolidFill::new(solid.line_width, solid.angle_deg))
        }
    }
}
