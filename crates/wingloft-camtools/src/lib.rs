//! # WingLoft CAM Tools
//!
//! Toolpath generation for lofted wing sections.
//!
//! The pipeline runs leaves first:
//! - [`profile`]: NACA and imported airfoil contours, plus canonicalization
//! - [`loft`]: chord and shape interpolation into per-layer cross-sections
//! - [`infill`], [`ring`] and [`solid_fill`]: per-layer interior paths
//! - [`assembler`]: concatenation into a single [`ToolpathSequence`]
//!
//! [`ToolpathSequence`]: wingloft_core::ToolpathSequence

pub mod assembler;
pub mod config;
pub mod infill;
pub mod loft;
pub mod profile;
pub mod ring;
pub mod solid_fill;

pub use assembler::LoftAssembler;
pub use config::{
    CanonicalizeOptions, ChordInterpolation, EdgeAnchoring, InfillConfig, InfillPattern,
    LoftConfig, SolidFillConfig,
};
pub use infill::{pattern_for, FillPattern, ModifiedTriangleWave, RectilinearScan};
pub use loft::{CrossSection, LoftEngine, Station};
pub use profile::{naca_contour, AirfoilShape, NacaProfile, ProfileSource};
pub use ring::{RingGenerator, RingSpec};
pub use solid_fill::{FillSegment, SolidFill};
