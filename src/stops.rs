//! Color stop tables: the breakpoints of a choropleth fill.

use std::marker::PhantomData;
use log::trace;
use serde::Serialize;
use crate::{compute_domain, normalize, BoundaryStatistic, ColorRange,
            ScaleDomain};

/// Fewest stops a table has.  A Mapbox `interpolate` expression needs
/// at least one stop between the two ends of the ramp to be valid.
pub const MIN_STEPS: usize = 3;
/// Most stops a table has.
pub const MAX_STEPS: usize = 30;
/// Stops requested when nothing else is specified.
pub const DEFAULT_STEPS: usize = MAX_STEPS;

/// A breakpoint: `value` is drawn with `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop<Color> {
    pub value: f64,
    pub color: Color,
}

/// Breakpoints sorted by strictly increasing `value`.
///
/// Created by [`build_color_stops`].  Tables are never modified, a new
/// one is built whenever the statistics change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorStopTable<Color> {
    stops: Vec<ColorStop<Color>>,
}

impl<Color> ColorStopTable<Color> {
    /// Number of stops, in `MIN_STEPS ..= MAX_STEPS`.
    #[inline]
    pub fn len(&self) -> usize { self.stops.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.stops.is_empty() }

    #[inline]
    pub fn as_slice(&self) -> &[ColorStop<Color>] { &self.stops }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ColorStop<Color>> {
        self.stops.iter()
    }

    pub fn first(&self) -> Option<&ColorStop<Color>> { self.stops.first() }

    pub fn last(&self) -> Option<&ColorStop<Color>> { self.stops.last() }
}

impl<'a, Color> IntoIterator for &'a ColorStopTable<Color> {
    type Item = &'a ColorStop<Color>;
    type IntoIter = std::slice::Iter<'a, ColorStop<Color>>;

    fn into_iter(self) -> Self::IntoIter { self.stops.iter() }
}

impl<Color> IntoIterator for ColorStopTable<Color> {
    type Item = ColorStop<Color>;
    type IntoIter = std::vec::IntoIter<ColorStop<Color>>;

    fn into_iter(self) -> Self::IntoIter { self.stops.into_iter() }
}

/// Number of stops actually generated for `domain` when `step_count`
/// are requested.  Small integer ranges (e.g. \[0, 5\]) do not get more
/// stops than they have units.
pub(crate) fn effective_steps(domain: &ScaleDomain, step_count: usize) -> usize {
    let requested = step_count.clamp(MIN_STEPS, MAX_STEPS);
    let span = domain.max.min(requested as f64).floor();
    let steps = if span > MIN_STEPS as f64 { span as usize } else { MIN_STEPS };
    trace!("{steps} color stops for [{}, {}] ({step_count} requested)",
           domain.min, domain.max);
    steps
}

/// Sample `palette` over `domain` into a table of color stops.
///
/// `step_count` is clamped to \[[`MIN_STEPS`], [`MAX_STEPS`]\] and
/// reduced to `domain.max` when that is smaller.  The first stop is
/// `domain.min` with the color at `t = 0`, the last one `domain.max`
/// with the color at `t = 1`, the others are evenly spaced between.
///
/// ```
/// use choropleth_brewery::{build_color_stops, ScaleDomain};
/// let grey = |t: f64| (255. * t).round() as u8;
/// let stops = build_color_stops(&ScaleDomain { min: 0., max: 5. }, &grey, 30);
/// let values: Vec<f64> = stops.iter().map(|s| s.value).collect();
/// assert_eq!(values, [0., 1.25, 2.5, 3.75, 5.]);
/// ```
pub fn build_color_stops<R, Color>(
    domain: &ScaleDomain, palette: &R, step_count: usize,
) -> ColorStopTable<Color>
where R: ColorRange<Color> + ?Sized {
    let steps = effective_steps(domain, step_count);
    let mut stops: Vec<ColorStop<Color>> = Vec::with_capacity(steps);
    for (value, color) in palette.range(domain.min, domain.max, steps) {
        // Domains narrower than the float resolution may round
        // neighbouring stops to the same value.
        if stops.last().map_or(true, |s| s.value < value) {
            stops.push(ColorStop { value, color });
        }
    }
    ColorStopTable { stops }
}

/// Color of a single `value`, e.g. for a legend swatch.  Values
/// outside `domain` get the color of the nearest end.
pub fn value_to_color<R, Color>(
    value: f64, domain: &ScaleDomain, palette: &R,
) -> Color
where R: ColorRange<Color> + ?Sized {
    let t = normalize(value, domain);
    let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
    palette.color(t)
}


/// A palette spread over the domain of a set of statistics.
pub struct ChoroplethScale<R, Color> {
    domain: ScaleDomain,
    palette: R,
    color: PhantomData<Color>,
}

impl<R, Color> ChoroplethScale<R, Color>
where R: ColorRange<Color> {
    pub fn new(domain: ScaleDomain, palette: R) -> Self {
        ChoroplethScale { domain, palette, color: PhantomData }
    }

    /// Scale whose domain is computed from `stats` with
    /// [`compute_domain`].
    pub fn from_statistics(stats: &[BoundaryStatistic], palette: R) -> Self {
        Self::new(compute_domain(stats), palette)
    }

    #[inline]
    pub fn domain(&self) -> ScaleDomain { self.domain }

    #[inline]
    pub fn palette(&self) -> &R { &self.palette }

    /// See [`build_color_stops`].
    pub fn color_stops(&self, step_count: usize) -> ColorStopTable<Color> {
        build_color_stops(&self.domain, &self.palette, step_count)
    }

    /// See [`value_to_color`].
    pub fn value_to_color(&self, value: f64) -> Color {
        value_to_color(value, &self.domain, &self.palette)
    }

    /// `n` swatches evenly spread from `domain.min` to `domain.max`.
    pub fn legend(&self, n: usize) -> Vec<ColorStop<Color>> {
        self.palette.range(self.domain.min, self.domain.max, n)
            .map(|(value, color)| ColorStop { value, color })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn grey(t: f64) -> u8 { (255. * t).round() as u8 }

    fn values<C>(t: &ColorStopTable<C>) -> Vec<f64> {
        t.iter().map(|s| s.value).collect()
    }

    #[test]
    fn step_counts() {
        let d = |min, max| ScaleDomain { min, max };
        assert_eq!(effective_steps(&d(0., 1.), 30), 3);
        assert_eq!(effective_steps(&d(0., 5.), 30), 5);
        assert_eq!(effective_steps(&d(0., 5.), 4), 4);
        assert_eq!(effective_steps(&d(0., 5.5), 30), 5);
        assert_eq!(effective_steps(&d(10., 50.), 30), 30);
        assert_eq!(effective_steps(&d(10., 50.), 100), 30);
        assert_eq!(effective_steps(&d(10., 50.), 0), 3);
        assert_eq!(effective_steps(&d(-8., -2.), 30), 3);
    }

    #[test]
    fn small_domain() {
        let t = build_color_stops(&ScaleDomain { min: 0., max: 1. }, &grey, 30);
        assert_eq!(values(&t), vec![0., 0.5, 1.]);
        let colors: Vec<u8> = t.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![0, 128, 255]);
    }

    #[test]
    fn bounds_of_table() {
        let d = ScaleDomain { min: 10., max: 50. };
        let t = build_color_stops(&d, &grey, DEFAULT_STEPS);
        assert_eq!(t.len(), 30);
        assert_eq!(t.first().map(|s| s.value), Some(10.));
        assert_eq!(t.last().map(|s| s.value), Some(50.));
        assert!(values(&t).windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn colors_clamped() {
        let d = ScaleDomain { min: 10., max: 50. };
        assert_eq!(value_to_color(0., &d, &grey), 0);
        assert_eq!(value_to_color(10., &d, &grey), 0);
        assert_eq!(value_to_color(1e9, &d, &grey), 255);
        assert_eq!(value_to_color(f64::NAN, &d, &grey), 0);
        assert_eq!(value_to_color(f64::INFINITY, &d, &grey), 255);
    }

    #[test]
    fn huge_single_values_keep_three_stops() {
        for x in [1e16, 1e20, 1e300] {
            let d = compute_domain(&[BoundaryStatistic::new("a", x)]);
            let t = build_color_stops(&d, &grey, DEFAULT_STEPS);
            assert!(t.len() >= MIN_STEPS, "{x}: {} stops", t.len());
            assert!(values(&t).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn scale_from_statistics() {
        let stats = [BoundaryStatistic::new("a", 0.),
                     BoundaryStatistic::new("b", 8.)];
        let scale = ChoroplethScale::from_statistics(&stats, grey);
        assert_eq!(scale.domain(), ScaleDomain { min: 0., max: 8. });
        assert_eq!(scale.color_stops(30).len(), 8);
        assert_eq!(scale.value_to_color(4.), 128);
        let legend = scale.legend(3);
        assert_eq!(legend, vec![ColorStop { value: 0., color: 0 },
                                ColorStop { value: 4., color: 128 },
                                ColorStop { value: 8., color: 255 }]);
    }

    #[test]
    fn table_serializes_as_list() {
        let t = build_color_stops(&ScaleDomain { min: 0., max: 1. }, &grey, 3);
        assert_eq!(serde_json::to_value(&t).unwrap(), serde_json::json!([
            {"value": 0.0, "color": 0},
            {"value": 0.5, "color": 128},
            {"value": 1.0, "color": 255},
        ]));
    }
}
