//! Project configuration
//!
//! A project file lists the wing stations and carries the loft settings.
//! Both TOML and JSON are accepted, chosen by file extension.
//!
//! ```toml
//! profile_dir = "profiles"
//!
//! [[stations]]
//! z = 0.0
//! chord_length = 180.0
//! naca = "2412"
//!
//! [[stations]]
//! z = 150.0
//! chord_length = 90.0
//! profile = "clarky.dat"
//!
//! [offset]
//! x = 50.0
//! y = 100.0
//! z = 0.0
//!
//! [loft]
//! layer_height = 0.3
//! ```

use crate::error::{SettingsError, SettingsResult};
use crate::profile_file::read_profile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use wingloft_camtools::{AirfoilShape, LoftConfig, Station};
use wingloft_core::Point3D;

/// One station entry. Exactly one of `naca` and `profile` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    pub z: f64,
    pub chord_length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naca: Option<String>,
    /// Profile file, relative to `profile_dir` unless absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,
}

impl StationConfig {
    pub fn naca(z: f64, chord_length: f64, code: impl Into<String>) -> Self {
        Self {
            z,
            chord_length,
            naca: Some(code.into()),
            profile: None,
        }
    }

    pub fn profile(z: f64, chord_length: f64, path: impl Into<PathBuf>) -> Self {
        Self {
            z,
            chord_length,
            naca: None,
            profile: Some(path.into()),
        }
    }
}

/// A complete wing project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub stations: Vec<StationConfig>,
    /// Directory that relative profile paths resolve against.
    pub profile_dir: Option<PathBuf>,
    /// Placement of the wing root on the build plate.
    pub offset: Point3D,
    pub loft: LoftConfig,
}

impl ProjectConfig {
    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let mut config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        // A relative profile directory is relative to the project file.
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.profile_dir = Some(match config.profile_dir.take() {
            Some(dir) if dir.is_relative() => base.join(dir),
            Some(dir) => dir,
            None => base.to_path_buf(),
        });

        config.validate()?;
        info!(
            path = %path.display(),
            stations = config.stations.len(),
            "Loaded project"
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.stations.len() < 2 {
            return Err(SettingsError::invalid(
                "stations",
                format!("need at least two, found {}", self.stations.len()),
            ));
        }

        for (index, station) in self.stations.iter().enumerate() {
            let key = format!("stations[{index}]");
            match (&station.naca, &station.profile) {
                (Some(_), None) | (None, Some(_)) => {}
                (Some(_), Some(_)) => {
                    return Err(SettingsError::invalid(key, "set only one of naca or profile"))
                }
                (None, None) => {
                    return Err(SettingsError::invalid(key, "one of naca or profile is required"))
                }
            }
            if !(station.chord_length.is_finite() && station.chord_length > 0.0) {
                return Err(SettingsError::invalid(
                    format!("{key}.chord_length"),
                    format!("must be positive, got {}", station.chord_length),
                ));
            }
        }

        if let Some(pair) = self.stations.windows(2).find(|w| w[1].z <= w[0].z) {
            return Err(SettingsError::invalid(
                "stations",
                format!("z must increase, {} follows {}", pair[1].z, pair[0].z),
            ));
        }

        self.loft.validate()?;
        Ok(())
    }

    /// Path a station's profile file resolves to.
    pub fn profile_path(&self, profile: &Path) -> PathBuf {
        match &self.profile_dir {
            Some(dir) if profile.is_relative() => dir.join(profile),
            _ => profile.to_path_buf(),
        }
    }

    /// Builds loft stations, reading any referenced profile files.
    pub fn resolve_stations(&self) -> SettingsResult<Vec<Station>> {
        self.stations
            .iter()
            .map(|entry| {
                let shape = match (&entry.naca, &entry.profile) {
                    (Some(code), _) => AirfoilShape::naca(code.clone()),
                    (None, Some(profile)) => {
                        let file = read_profile(&self.profile_path(profile))?;
                        let name = if file.name.is_empty() {
                            profile.display().to_string()
                        } else {
                            file.name
                        };
                        AirfoilShape::imported(name, file.points)
                    }
                    (None, None) => {
                        return Err(SettingsError::invalid(
                            "stations",
                            format!("station at z = {} has no shape", entry.z),
                        ))
                    }
                };
                Ok(Station::new(entry.z, entry.chord_length, shape))
            })
            .collect()
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
