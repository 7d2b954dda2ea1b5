//! Two-column airfoil coordinate files.
//!
//! The usual `.dat` layout: one header line naming the section, then one
//! `x y` pair per line, normalised to a unit chord. Blank lines are ignored.

use crate::error::{SettingsError, SettingsResult};
use std::path::Path;
use tracing::debug;
use wingloft_core::Point2D;

/// A parsed profile file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFile {
    /// Header line, trimmed.
    pub name: String,
    pub points: Vec<Point2D>,
}

/// Reads and parses a profile file from disk.
pub fn read_profile(path: &Path) -> SettingsResult<ProfileFile> {
    let text = std::fs::read_to_string(path)?;
    let profile = parse_profile(&text, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        name = %profile.name,
        points = profile.points.len(),
        "Read profile"
    );
    Ok(profile)
}

/// Parses profile text. `origin` names the source in error messages.
pub fn parse_profile(text: &str, origin: &str) -> SettingsResult<ProfileFile> {
    let mut lines = text.lines().enumerate();
    let name = lines
        .next()
        .map(|(_, header)| header.trim().to_string())
        .unwrap_or_default();

    let mut points = Vec::new();
    for (index, line) in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let error = |reason: String| SettingsError::ProfileParse {
            origin: origin.to_string(),
            line: index + 1,
            reason,
        };

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        let [x, y] = columns[..] else {
            return Err(error(format!(
                "expected two columns, found {}",
                columns.len()
            )));
        };
        let parse = |value: &str| {
            value
                .parse::<f64>()
                .map_err(|e| error(format!("'{value}' is not a number: {e}")))
        };
        points.push(Point2D::new(parse(x)?, parse(y)?));
    }

    Ok(ProfileFile { name, points })
}
