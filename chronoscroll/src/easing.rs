use crate::clamp;

/// Maps raw scroll progress to time progress.
///
/// Every variant fixes `0 -> 0` and `1 -> 1` and is monotonic non-decreasing in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    Linear,
    /// `p^k`. Exponents below 1 are treated as 1.
    Power(u32),
    SmoothStep,
}

impl Default for Easing {
    fn default() -> Self {
        Self::Power(4)
    }
}

impl Easing {
    /// Samples the curve. Input is clamped into `[0, 1]` first.
    pub fn sample(self, p: f64) -> f64 {
        let p = clamp(p, 0.0, 1.0);
        match self {
            Self::Linear => p,
            Self::Power(k) => powu(p, k.max(1)),
            Self::SmoothStep => p * p * (3.0 - 2.0 * p),
        }
    }
}

// Square-and-multiply; `f64::powi` is not available without `std`.
fn powu(mut base: f64, mut exp: u32) -> f64 {
    let mut acc = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= base;
        }
        base *= base;
        exp >>= 1;
    }
    acc
}
