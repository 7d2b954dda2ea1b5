//! Canonicalization of imported airfoil coordinates.
//!
//! Digitized profiles arrive in many orders and resolutions. Infill and the
//! assembler look up "closest boundary point" by half, so every contour must
//! start and end at the same edge regardless of where it came from.

use crate::config::CanonicalizeOptions;
use tracing::debug;
use wingloft_core::{AirfoilContour, Point2D};

/// Inserts `multiplier` evenly weighted points between every consecutive pair.
pub fn densify(contour: &AirfoilContour, multiplier: usize) -> AirfoilContour {
    let points = contour.points();
    if multiplier == 0 || points.len() < 2 {
        return contour.clone();
    }

    let mut out = Vec::with_capacity(points.len() + (points.len() - 1) * multiplier);
    for pair in points.windows(2) {
        out.push(pair[0]);
        for k in 1..=multiplier {
            let t = k as f64 / (multiplier + 1) as f64;
            out.push(pair[0].lerp(&pair[1], t));
        }
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    AirfoilContour::new(out)
}

/// Drops points lying exactly on y = 0.
pub fn remove_zero_y(contour: &AirfoilContour) -> AirfoilContour {
    contour.iter().copied().filter(|p| p.y != 0.0).collect()
}

/// Splits into upper (y > 0) and lower (y < 0) halves and orders them so the
/// contour starts and ends at min x, or at max x when `reverse` is set.
///
/// Points on y = 0 belong to neither half and are dropped. The sort is
/// stable, so applying this twice gives the same result as applying it once.
pub fn canonical_order(contour: &AirfoilContour, reverse: bool) -> AirfoilContour {
    let (mut upper, mut lower): (Vec<Point2D>, Vec<Point2D>) = contour
        .iter()
        .copied()
        .filter(|p| p.y != 0.0)
        .partition(|p| p.y > 0.0);

    if reverse {
        upper.sort_by(|a, b| b.x.total_cmp(&a.x));
        lower.sort_by(|a, b| a.x.total_cmp(&b.x));
    } else {
        upper.sort_by(|a, b| a.x.total_cmp(&b.x));
        lower.sort_by(|a, b| b.x.total_cmp(&a.x));
    }

    upper.into_iter().chain(lower).collect()
}

/// Removes consecutive coincident points.
pub fn dedup_consecutive(contour: &AirfoilContour) -> AirfoilContour {
    let mut points = contour.points().to_vec();
    points.dedup();
    AirfoilContour::new(points)
}

/// Runs the configured canonicalization passes in order.
pub fn canonicalize(contour: &AirfoilContour, options: &CanonicalizeOptions) -> AirfoilContour {
    let before = contour.len();
    let mut out = densify(contour, options.densify_multiplier);
    if options.remove_zero_y {
        out = remove_zero_y(&out);
    }
    if options.sort_points {
        out = canonical_order(&out, options.reverse);
    }
    let out = dedup_consecutive(&out);
    debug!(before, after = out.len(), "Canonicalized imported contour");
    out
}
