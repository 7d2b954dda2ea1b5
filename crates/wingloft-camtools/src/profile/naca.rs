//! Closed-form NACA 4- and 5-digit airfoil generation.

use wingloft_core::{AirfoilContour, LoftError, LoftResult, ParameterError, Point2D};

/// Constants of a 5-digit camber family, indexed by the position digit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberFamily {
    /// Chordwise transition point of the mean line.
    pub r: f64,
    pub k1: f64,
    /// `k2 / k1`, present for reflex mean lines only.
    pub k2_over_k1: Option<f64>,
}

const STANDARD_FAMILIES: [(f64, f64); 5] = [
    (0.0580, 361.4),
    (0.1260, 51.64),
    (0.2025, 15.957),
    (0.2900, 6.643),
    (0.3910, 3.230),
];

const REFLEX_FAMILIES: [(f64, f64, f64); 4] = [
    (0.1300, 51.99, 0.000764),
    (0.2170, 15.793, 0.00677),
    (0.3180, 6.520, 0.0303),
    (0.4410, 3.191, 0.1355),
];

impl CamberFamily {
    fn lookup(position: u32, reflex: bool) -> Option<Self> {
        if reflex {
            let (r, k1, ratio) = *REFLEX_FAMILIES.get(position.checked_sub(2)? as usize)?;
            Some(Self {
                r,
                k1,
                k2_over_k1: Some(ratio),
            })
        } else {
            let (r, k1) = *STANDARD_FAMILIES.get(position.checked_sub(1)? as usize)?;
            Some(Self {
                r,
                k1,
                k2_over_k1: None,
            })
        }
    }

    /// Mean line ordinate for a design lift coefficient of 0.3.
    fn camber(&self, x: f64) -> f64 {
        let r = self.r;
        let r3 = r.powi(3);
        match self.k2_over_k1 {
            None if x < r => self.k1 / 6.0 * (x.powi(3) - 3.0 * r * x * x + r * r * (3.0 - r) * x),
            None => self.k1 * r3 / 6.0 * (1.0 - x),
            Some(ratio) => {
                let tail = ratio * (1.0 - r).powi(3) * x + r3 * x - r3;
                if x < r {
                    self.k1 / 6.0 * ((x - r).powi(3) - tail)
                } else {
                    self.k1 / 6.0 * (ratio * (x - r).powi(3) - tail)
                }
            }
        }
    }
}

/// A decoded NACA designation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NacaProfile {
    FourDigit {
        /// Maximum camber as a fraction of chord.
        max_camber: f64,
        /// Chordwise position of maximum camber.
        camber_position: f64,
        thickness: f64,
    },
    FiveDigit {
        design_lift: f64,
        family: CamberFamily,
        thickness: f64,
    },
}

impl NacaProfile {
    /// Decodes a 3-, 4- or 5-digit code. A leading "NACA" is accepted.
    pub fn parse(code: &str) -> LoftResult<Self> {
        let trimmed = code.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };

        let values: Vec<u32> = digits
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<_>>()
            .ok_or_else(|| LoftError::airfoil(code, "contains non-digit characters"))?;

        let number = |range: std::ops::Range<usize>| {
            values[range]
                .iter()
                .fold(0u32, |acc, d| acc * 10 + d)
        };

        let profile = match values.len() {
            3 | 4 => NacaProfile::FourDigit {
                max_camber: values[0] as f64 / 100.0,
                camber_position: values[1] as f64 / 10.0,
                thickness: number(2..values.len()) as f64 / 100.0,
            },
            5 => {
                if values[0] == 0 {
                    return Err(LoftError::airfoil(code, "design lift digit must be non-zero"));
                }
                let reflex = match values[2] {
                    0 => false,
                    1 => true,
                    other => {
                        return Err(LoftError::airfoil(
                            code,
                            format!("reflex digit must be 0 or 1, got {other}"),
                        ))
                    }
                };
                let family = CamberFamily::lookup(values[1], reflex).ok_or_else(|| {
                    LoftError::airfoil(
                        code,
                        format!(
                            "no {} camber family for position digit {}",
                            if reflex { "reflex" } else { "standard" },
                            values[1]
                        ),
                    )
                })?;
                NacaProfile::FiveDigit {
                    design_lift: 0.15 * values[0] as f64,
                    family,
                    thickness: number(3..5) as f64 / 100.0,
                }
            }
            n => {
                return Err(LoftError::airfoil(
                    code,
                    format!("expected 3, 4 or 5 digits, got {n}"),
                ))
            }
        };

        if profile.thickness() <= 0.0 {
            return Err(LoftError::airfoil(code, "thickness must be non-zero"));
        }
        Ok(profile)
    }

    pub fn thickness(&self) -> f64 {
        match self {
            Self::FourDigit { thickness, .. } | Self::FiveDigit { thickness, .. } => *thickness,
        }
    }

    /// Whether the mean line is flat.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Self::FourDigit { max_camber, camber_position, .. }
            if *max_camber == 0.0 || *camber_position == 0.0)
    }

    /// Thickness half-width at chordwise station `x` in `[0, 1]`.
    pub fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.thickness()
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    }

    /// Mean line ordinate at chordwise station `x` in `[0, 1]`.
    pub fn camber(&self, x: f64) -> f64 {
        match *self {
            _ if self.is_symmetric() => 0.0,
            Self::FourDigit {
                max_camber: m,
                camber_position: p,
                ..
            } => {
                if x < p {
                    m / (p * p) * (2.0 * p * x - x * x)
                } else {
                    m / (1.0 - p).powi(2) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
                }
            }
            Self::FiveDigit {
                design_lift,
                family,
                ..
            } => family.camber(x) * design_lift / 0.3,
        }
    }

    /// Upper surface from leading to trailing edge, then lower surface back
    /// to the leading edge, scaled to `chord_length`.
    pub fn contour(&self, resolution: usize, chord_length: f64) -> LoftResult<AirfoilContour> {
        if resolution < 2 {
            return Err(ParameterError::invalid("resolution", "must be at least 2").into());
        }
        ParameterError::require_positive("chord_length", chord_length)?;

        let xs: Vec<f64> = (0..resolution)
            .map(|i| i as f64 / (resolution - 1) as f64)
            .collect();
        let camber: Vec<f64> = xs.iter().map(|&x| self.camber(x)).collect();
        let slopes = gradient(&camber, &xs);

        let mut upper = Vec::with_capacity(resolution);
        let mut lower = Vec::with_capacity(resolution);
        for ((&x, &yc), &slope) in xs.iter().zip(&camber).zip(&slopes) {
            let yt = self.half_thickness(x);
            let (sin, cos) = slope.atan().sin_cos();
            upper.push(Point2D::new(
                (x - yt * sin) * chord_length,
                (yc + yt * cos) * chord_length,
            ));
            lower.push(Point2D::new(
                (x + yt * sin) * chord_length,
                (yc - yt * cos) * chord_length,
            ));
        }

        Ok(upper.into_iter().chain(lower.into_iter().rev()).collect())
    }
}

/// Generates the closed-form contour for a NACA code.
pub fn naca_contour(
    code: &str,
    resolution: usize,
    chord_length: f64,
) -> LoftResult<AirfoilContour> {
    NacaProfile::parse(code)?.contour(resolution, chord_length)
}

/// Numerical derivative of `ys` over the sample positions `xs`.
///
/// Second-order central differences inside, one-sided differences at the
/// two ends. Requires at least two samples.
fn gradient(ys: &[f64], xs: &[f64]) -> Vec<f64> {
    let n = ys.len();
    let mut out = vec![0.0; n];
    if n < 2 {
        return out;
    }
    out[0] = (ys[1] - ys[0]) / (xs[1] - xs[0]);
    out[n - 1] = (ys[n - 1] - ys[n - 2]) / (xs[n - 1] - xs[n - 2]);
    for i in 1..n - 1 {
        let hs = xs[i] - xs[i - 1];
        let hd = xs[i + 1] - xs[i];
        out[i] = (hs * hs * ys[i + 1] + (hd * hd - hs * hs) * ys[i] - hd * hd * ys[i - 1])
            / (hs * hd * (hd + hs));
    }
    out
}
