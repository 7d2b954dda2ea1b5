//! # WingLoft Settings
//!
//! Project files (TOML or JSON) and airfoil coordinate file reading.

pub mod config;
pub mod error;
pub mod profile_file;

pub use config::{ProjectConfig, StationConfig};
pub use error::{SettingsError, SettingsResult};
pub use profile_file::{parse_profile, read_profile, ProfileFile};
