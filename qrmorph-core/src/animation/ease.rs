/// Easing curve applied to transition progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Accelerating quadratic.
    InQuad,
    /// Decelerating quadratic.
    OutQuad,
    /// Quadratic ease-in then ease-out.
    InOutQuad,
    /// Accelerating cubic.
    InCubic,
    /// Decelerating cubic.
    OutCubic,
    /// Cubic ease-in then ease-out.
    InOutCubic,
    /// The platform `ease-in-out` curve, `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    Standard,
}

impl Ease {
    /// Map linear progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Standard => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a unit cubic bezier timing curve at `x = t`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let axis = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };

    // x(s) is monotonic for control points inside [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..48 {
        let s = 0.5 * (lo + hi);
        if axis(x1, x2, s) < t {
            lo = s;
        } else {
            hi = s;
        }
    }
    axis(y1, y2, 0.5 * (lo + hi))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
