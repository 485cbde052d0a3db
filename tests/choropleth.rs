//! Properties of the choropleth scale as seen by a map layer.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use rgb::{RGBA, RGB8};
use choropleth_brewery::{build_color_stops, compute_domain, expression,
                         value_to_color, BoundaryStatistic, ChoroplethConfig,
                         ChoroplethScale, ColorRange, Error, FeatureInput,
                         InterpolationMode, PaletteName, ScaleDomain,
                         DEFAULT_STEPS, MAX_STEPS, MIN_STEPS};

fn stats(counts: &[f64]) -> Vec<BoundaryStatistic> {
    counts.iter().enumerate()
        .map(|(i, &c)| BoundaryStatistic::new(format!("E140005{i:02}"), c))
        .collect()
}

fn assert_rgba_eq(c0: RGBA<f64>, c1: RGBA<f64>) {
    assert_abs_diff_eq!(c0.r, c1.r, epsilon = 1e-9);
    assert_abs_diff_eq!(c0.g, c1.g, epsilon = 1e-9);
    assert_abs_diff_eq!(c0.b, c1.b, epsilon = 1e-9);
    assert_abs_diff_eq!(c0.a, c1.a, epsilon = 1e-9);
}

#[test]
fn degenerate_domains() {
    assert_eq!(compute_domain(&stats(&[5.])), ScaleDomain { min: 4., max: 5. });
    assert_eq!(compute_domain(&stats(&[0.])), ScaleDomain { min: 0., max: 1. });
    assert_eq!(compute_domain(&[]), ScaleDomain { min: 0., max: 1. });
}

#[test]
fn end_to_end() {
    let stats = stats(&[10., 50., 50.]);
    let blues = PaletteName::Blues.gradient();
    let scale = ChoroplethScale::from_statistics(&stats, blues.clone());
    assert_eq!(scale.domain(), ScaleDomain { min: 10., max: 50. });

    let table = scale.color_stops(DEFAULT_STEPS);
    assert!(table.len() <= MAX_STEPS);
    assert_eq!(table.first().unwrap().value, 10.);
    assert_eq!(table.last().unwrap().value, 50.);
    let values: Vec<f64> = table.iter().map(|s| s.value).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(scale.value_to_color(30.), blues.color(0.5));
    // The midpoint of a 9-class Brewer palette is its 5th color.
    assert_eq!(scale.value_to_color(30.), RGB8::new(107, 174, 214));
}

#[test]
fn boundary_colors() {
    let viridis = PaletteName::Viridis.palette::<RGBA<f64>>().gradient();
    for counts in [&[10., 50., 50.][..], &[3.][..], &[0., 0.25][..],
                   &[120., 7., 33., 980.][..]] {
        let domain = compute_domain(&stats(counts));
        let table = build_color_stops(&domain, &viridis, DEFAULT_STEPS);
        assert_rgba_eq(value_to_color(domain.min, &domain, &viridis),
                       table.first().unwrap().color);
        assert_rgba_eq(value_to_color(domain.max, &domain, &viridis),
                       table.last().unwrap().color);
    }
}

#[test]
fn string_interpolator() {
    // Interpolators may hand out CSS strings directly.
    let css = |t: f64| format!("hsl(210, 80%, {:.0}%)", 95. - 70. * t);
    let domain = compute_domain(&stats(&[0., 4.]));
    let table = build_color_stops(&domain, &css, 30);
    let e = expression::fill_color(&table,
                                   &FeatureInput::Property("count".into()),
                                   InterpolationMode::Linear, None);
    assert_eq!(e, serde_json::json!([
        "interpolate", ["linear"], ["get", "count"],
        0.0, "hsl(210, 80%, 95%)",
        (4. / 3.), "hsl(210, 80%, 72%)",
        (8. / 3.), "hsl(210, 80%, 48%)",
        4.0, "hsl(210, 80%, 25%)"]));
}

#[test]
fn config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layer.toml");
    std::fs::write(&path, "palette = \"reds\"\nmode = \"step\"\n").unwrap();
    let config = ChoroplethConfig::load_from_file(&path).unwrap();
    assert_eq!(config.palette, PaletteName::Reds);

    let paint = config.fill_paint(&stats(&[1., 2., 3., 4., 5., 6.]));
    let fill = paint["fill-color"].as_array().unwrap();
    assert_eq!(fill[0], "step");
    // Base color, then (value, color) for the 5 remaining stops.
    assert_eq!(fill.len(), 2 + 1 + 2 * 5);
    assert_eq!(fill[2], "#fff5f0");

    let missing = dir.path().join("missing.toml");
    assert!(matches!(ChoroplethConfig::load_from_file(&missing),
                     Err(Error::Io(_))));
}

proptest! {
    #[test]
    fn domain_is_increasing(counts in prop::collection::vec(0u32..1_000_000, 1..64)) {
        let counts: Vec<f64> = counts.into_iter().map(f64::from).collect();
        let d = compute_domain(&stats(&counts));
        prop_assert!(d.min < d.max);
    }

    #[test]
    fn stops_are_increasing_and_bounded(
        counts in prop::collection::vec(0.0..1e6f64, 0..64),
        step_count in 0usize..200,
    ) {
        let grey = |t: f64| (255. * t).round() as u8;
        let d = compute_domain(&stats(&counts));
        let table = build_color_stops(&d, &grey, step_count);
        prop_assert!((MIN_STEPS..=MAX_STEPS).contains(&table.len()));
        prop_assert!(table.as_slice().windows(2).all(|w| w[0].value < w[1].value));
        prop_assert_eq!(table.first().unwrap().value, d.min);
        prop_assert_eq!(table.last().unwrap().value, d.max);
    }

    #[test]
    fn equal_large_counts_keep_three_stops(
        count in 0.0..1e300f64,
        n in 1usize..8,
        step_count in 0usize..200,
    ) {
        let grey = |t: f64| (255. * t).round() as u8;
        let d = compute_domain(&stats(&vec![count; n]));
        prop_assert!(d.min < d.max);
        let table = build_color_stops(&d, &grey, step_count);
        prop_assert!((MIN_STEPS..=MAX_STEPS).contains(&table.len()));
        prop_assert!(table.as_slice().windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn stops_are_reproducible(
        counts in prop::collection::vec(0u32..10_000, 0..32),
        step_count in 0usize..64,
    ) {
        let counts: Vec<f64> = counts.into_iter().map(f64::from).collect();
        let d = compute_domain(&stats(&counts));
        let magma = PaletteName::Magma.gradient();
        let t0 = build_color_stops(&d, &magma, step_count);
        let t1 = build_color_stops(&d, &magma, step_count);
        prop_assert_eq!(serde_json::to_string(&t0).unwrap(),
                        serde_json::to_string(&t1).unwrap());
        prop_assert_eq!(t0, t1);
    }
}
