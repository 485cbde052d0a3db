//! Configuration of a choropleth layer.
//!
//! ```toml
//! palette = "ylorrd"
//! inverted = false
//! steps = 30
//! property = "count"
//! source = "feature-state"
//! mode = "linear"
//! fallback_color = "#cccccc"
//! opacity = 0.8
//! ```

use std::fs;
use std::path::Path;
use log::warn;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::expression::{self, FeatureInput, InterpolationMode};
use crate::{parse_hex, BoundaryStatistic, ChoroplethScale, ColorRange,
            CssColor, PaletteName, Result, DEFAULT_STEPS, MAX_STEPS,
            MIN_STEPS};

/// Where the statistic of each feature is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputSource {
    /// Feature state set at runtime from the statistics.
    #[default]
    FeatureState,
    /// A property of the tile data.
    Property,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChoroplethConfig {
    pub palette: PaletteName,
    /// Run the palette from dark (low values) to light.
    pub inverted: bool,
    pub steps: usize,
    /// Name of the statistic in the feature state or properties.
    pub property: String,
    pub source: InputSource,
    pub mode: InterpolationMode,
    /// Color of the features without a statistic.
    pub fallback_color: Option<String>,
    pub opacity: f64,
}

impl Default for ChoroplethConfig {
    fn default() -> Self {
        ChoroplethConfig {
            palette: PaletteName::default(),
            inverted: false,
            steps: DEFAULT_STEPS,
            property: "count".to_string(),
            source: InputSource::default(),
            mode: InterpolationMode::default(),
            fallback_color: None,
            opacity: 0.8,
        }
    }
}

/// Opacity in \[0, 1\]; NaN is fully opaque.
fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() { 1. } else { opacity.clamp(0., 1.) }
}

impl ChoroplethConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChoroplethConfig = toml::from_str(content)?;
        config.validate()
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the fallback color and bring out of range values back in
    /// range.
    pub fn validate(mut self) -> Result<Self> {
        if let Some(c) = &self.fallback_color {
            self.fallback_color = Some(parse_hex(c)?.css());
        }
        let steps = self.steps.clamp(MIN_STEPS, MAX_STEPS);
        if steps != self.steps {
            warn!("steps = {} out of [{MIN_STEPS}, {MAX_STEPS}], using {steps}",
                  self.steps);
            self.steps = steps;
        }
        let opacity = clamp_opacity(self.opacity);
        if opacity != self.opacity {
            warn!("opacity = {} out of [0, 1], using {opacity}", self.opacity);
            self.opacity = opacity;
        }
        Ok(self)
    }

    pub fn input(&self) -> FeatureInput {
        match self.source {
            InputSource::FeatureState =>
                FeatureInput::FeatureState(self.property.clone()),
            InputSource::Property => FeatureInput::Property(self.property.clone()),
        }
    }

    /// The configured palette, in the configured direction.
    pub fn interpolator(&self) -> impl ColorRange<RGB8> + Clone {
        let gradient = self.palette.gradient();
        let inverted = self.inverted;
        move |t: f64| gradient.color(if inverted { 1. - t } else { t })
    }

    pub fn scale(&self, stats: &[BoundaryStatistic])
                 -> ChoroplethScale<impl ColorRange<RGB8> + Clone, RGB8> {
        ChoroplethScale::from_statistics(stats, self.interpolator())
    }

    /// Paint properties of a Mapbox fill layer shading `stats`.
    pub fn fill_paint(&self, stats: &[BoundaryStatistic]) -> Value {
        let table = self.scale(stats).color_stops(self.steps);
        let fill = expression::fill_color(&table, &self.input(), self.mode,
                                          self.fallback_color.as_deref());
        json!({
            "fill-color": fill,
            "fill-opacity": clamp_opacity(self.opacity),
        })
    }
}
