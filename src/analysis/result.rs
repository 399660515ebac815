use std::fmt;

use crate::math::Point2;

/// The single common point of the line and a segment, with its attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub point: Point2,
    /// The segment direction is perpendicular to the line.
    pub perpendicular: bool,
    /// The point coincides with one of the segment's endpoints.
    pub is_endpoint: bool,
}

/// Outcome of classifying a segment against the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisResult {
    /// Both endpoints lie on the line.
    OnLine,
    /// The segment does not reach the line.
    NoIntersection,
    /// Exactly one common point.
    Intersects(Intersection),
}

impl AnalysisResult {
    /// Returns the common point, if there is exactly one.
    #[must_use]
    pub fn intersection(&self) -> Option<&Intersection> {
        match self {
            Self::Intersects(hit) => Some(hit),
            Self::OnLine | Self::NoIntersection => None,
        }
    }
}

/// Renders the outcome in the fixed wording consumers match on.
impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnLine => f.write_str("The line segment lies entirely on the straight line."),
            Self::NoIntersection => {
                f.write_str("The straight line and the line segment do not intersect.")
            }
            Self::Intersects(hit) => {
                writeln!(
                    f,
                    "The straight line and the line segment have ONE common point: ({}, {})",
                    two_places(hit.point.x),
                    two_places(hit.point.y)
                )?;
                if hit.perpendicular {
                    writeln!(
                        f,
                        "The straight line and the line segment are mutually perpendicular."
                    )?;
                } else {
                    writeln!(
                        f,
                        "The straight line and the line segment are NOT mutually perpendicular."
                    )?;
                }
                if hit.is_endpoint {
                    f.write_str("The intersection point is an END of the segment.")
                } else {
                    f.write_str("The intersection point is NOT an end of the segment.")
                }
            }
        }
    }
}

/// Formats `value` with two decimals, rounding its shortest decimal form half-up.
///
/// `{:.2}` rounds the exact binary value instead, which prints `0.475` as
/// `0.47`; consumers expect `0.48`.
fn two_places(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}.{}", render(&digits[..split]), render(&digits[split..]))
}
