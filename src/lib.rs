//! # WingLoft
//!
//! Layered toolpath generation for lofted, tapered airfoil wings.
//!
//! ## Architecture
//!
//! WingLoft is organized as a workspace with multiple crates:
//!
//! 1. **wingloft-core** - Points, contours, toolpath steps and errors
//! 2. **wingloft-camtools** - Airfoil profiles, lofting, infill, rings, solid fill
//! 3. **wingloft-settings** - Project files and airfoil coordinate files
//! 4. **wingloft** - Main binary that integrates all crates
//!
//! The output is an ordered list of [`Step`]s: pen-down geometry points and
//! pen-up travels. Turning it into G-code is left to an external exporter.

pub use wingloft_camtools::{
    AirfoilShape, ChordInterpolation, CrossSection, EdgeAnchoring, InfillConfig, InfillPattern,
    LoftAssembler, LoftConfig, LoftEngine, RingSpec, SolidFillConfig, Station,
};
pub use wingloft_core::{
    AirfoilContour, LoftError, LoftResult, Point2D, Point3D, Step, ToolpathSequence,
};
pub use wingloft_settings::{ProjectConfig, SettingsError, StationConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Console log output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Reads `WINGLOFT_LOG_FORMAT`; anything other than `json` is pretty.
    pub fn from_env() -> Self {
        match std::env::var("WINGLOFT_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output on stderr, so stdout stays free for toolpath data
/// - RUST_LOG environment variable support (INFO by default)
/// - Pretty or JSON formatting
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_thread_ids(true)
                    .json(),
            )
            .try_init()?,
    }

    Ok(())
}
