//! # WingLoft Core
//!
//! Core types shared by the WingLoft crates.
//! Provides the coordinate values, airfoil contours, toolpath steps and the
//! error taxonomy used throughout the loft pipeline.

pub mod error;
pub mod geometry;
pub mod toolpath;

pub use error::{LoftError, LoftResult, ParameterError, ParameterResult};
pub use geometry::{AirfoilContour, Bounds2D, Point2D, Point3D};
pub use toolpath::{Bounds3D, Step, ToolpathSequence};
