//! Mapbox style expressions built from color stop tables.
//!
//! The fill color of a choropleth layer is a data-driven expression
//! reading each boundary's statistic, either from its feature state
//! (set at runtime with [`feature_states`]) or from a property of the
//! tile data:
//!
//! ```json
//! ["interpolate", ["linear"], ["feature-state", "count"],
//!  10, "#f7fbff", 11.38, "#eef5fc", ..., 50, "#08306b"]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::{BoundaryStatistic, ColorStopTable, CssColor};

/// Where the expression reads the statistic of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "source", content = "name")]
pub enum FeatureInput {
    /// `["feature-state", name]`
    FeatureState(String),
    /// `["get", name]`
    Property(String),
}

impl FeatureInput {
    pub fn to_expression(&self) -> Value {
        match self {
            FeatureInput::FeatureState(name) => json!(["feature-state", name]),
            FeatureInput::Property(name) => json!(["get", name]),
        }
    }
}

/// How colors vary between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMode {
    /// Colors blend linearly between stops (`interpolate`).
    #[default]
    Linear,
    /// Each stop's color holds until the next stop (`step`).
    Step,
}

/// Fill color expression for `table`.
///
/// With a `fallback`, features whose input is not a number (typically
/// boundaries absent from the statistics, whose feature state is
/// unset) are drawn with that color instead of the bottom of the ramp.
pub fn fill_color<Color: CssColor>(
    table: &ColorStopTable<Color>,
    input: &FeatureInput,
    mode: InterpolationMode,
    fallback: Option<&str>,
) -> Value {
    let input = input.to_expression();
    let mut expr = match mode {
        InterpolationMode::Linear => {
            vec![json!("interpolate"), json!(["linear"]), input.clone()]
        }
        InterpolationMode::Step => vec![json!("step"), input.clone()],
    };
    for (i, stop) in table.iter().enumerate() {
        // A step expression starts with the color below the first stop.
        if mode == InterpolationMode::Linear || i > 0 {
            expr.push(Value::from(stop.value));
        }
        expr.push(Value::String(stop.color.css()));
    }
    let expr = Value::Array(expr);
    match fallback {
        Some(fallback) => json!(["case",
                                 ["==", ["typeof", input], "number"],
                                 expr,
                                 fallback]),
        None => expr,
    }
}

/// A feature state update: set `state` on the feature `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureState {
    pub id: String,
    pub state: Value,
}

/// Feature states making each statistic available to a
/// `["feature-state", property]` input.  Missing counts are set to 0,
/// as for the domain of the scale.
pub fn feature_states(stats: &[BoundaryStatistic], property: &str)
                      -> Vec<FeatureState> {
    stats.iter()
        .map(|s| FeatureState { id: s.area_id.clone(),
                                state: json!({ property: s.value() }) })
        .collect()
}
