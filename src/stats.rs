//! Per-boundary observations.

use serde::{Deserialize, Serialize};

/// One numeric observation for a geographic boundary, e.g. the member
/// count of a constituency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryStatistic {
    /// Stable identifier of the area (e.g. a GSS code), unique within
    /// a statistic set.
    pub area_id: String,
    /// The observed value.  `None` when the backend has no count for
    /// the area.
    #[serde(default)]
    pub count: Option<f64>,
}

impl BoundaryStatistic {
    pub fn new(area_id: impl Into<String>, count: f64) -> Self {
        BoundaryStatistic { area_id: area_id.into(), count: Some(count) }
    }

    /// The count used for shading: missing and non-finite counts are 0.
    #[inline]
    pub fn value(&self) -> f64 {
        match self.count {
            Some(c) if c.is_finite() => c,
            _ => 0.,
        }
    }
}
