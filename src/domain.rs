//! Value domains of choropleth scales.

use log::debug;
use serde::{Deserialize, Serialize};
use crate::BoundaryStatistic;

/// The interval of values a scale maps onto \[0, 1\].
///
/// Invariant: `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomain {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleDomain {
    fn default() -> Self { ScaleDomain { min: 0., max: 1. } }
}

impl ScaleDomain {
    /// Width of the domain, always positive.
    #[inline]
    pub fn width(&self) -> f64 { self.max - self.min }
}

/// Compute the domain spanned by `stats`.
///
/// Missing counts count as 0.  An empty set gives \[0, 1\].  When all
/// counts are equal the domain is widened by one unit: downwards if
/// the value is at least 1, upwards otherwise, so that `min < max`
/// always holds.
///
/// ```
/// use choropleth_brewery::{compute_domain, BoundaryStatistic, ScaleDomain};
/// let d = compute_domain(&[BoundaryStatistic::new("a", 5.)]);
/// assert_eq!(d, ScaleDomain { min: 4., max: 5. });
/// ```
pub fn compute_domain(stats: &[BoundaryStatistic]) -> ScaleDomain {
    let mut values = stats.iter().map(BoundaryStatistic::value);
    let Some(first) = values.next() else {
        return ScaleDomain::default()
    };
    let (mut min, mut max) = values.fold((first, first), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min == max {
        // One unit, unless that leaves no float strictly between the
        // bounds: at least 4 ulps keep an interior stop representable.
        let delta = 1f64.max(4. * min.abs() * f64::EPSILON);
        if min >= 1. { min -= delta } else { max += delta }
        debug!("degenerate domain widened to [{min}, {max}]");
    }
    ScaleDomain { min, max }
}

/// Position of `value` in `domain`: 0 at `domain.min`, 1 at
/// `domain.max`.  Not clamped.
#[inline]
pub fn normalize(value: f64, domain: &ScaleDomain) -> f64 {
    (value - domain.min) / domain.width()
}
