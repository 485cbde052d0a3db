//! Choropleth colour scales.
//!
//! Shade map boundaries by a numeric statistic: compute a
//! [`ScaleDomain`] from a set of [`BoundaryStatistic`]s, sample any
//! palette interpolator into a [`ColorStopTable`] and render it as a
//! Mapbox fill expression.
//!
//! - [`compute_domain`], [`build_color_stops`], [`value_to_color`]
//! - [`ChoroplethScale`] bundles a domain with a palette.
//! - [`expression`] turns stop tables into style expressions.
//!
//! A palette interpolator is anything implementing [`ColorRange`]:
//! closures `Fn(f64) -> Color`, two-colour [`Gradient`]s or the
//! built-in [`Palette`]s (Matplotlib [`PaletteName::Viridis`] and
//! friends, and sequential [schemes by Cynthia
//! Brewer](https://colorbrewer2.org/)).
//!
//! ```
//! use choropleth_brewery::{BoundaryStatistic, ChoroplethScale, PaletteName};
//!
//! let stats = [BoundaryStatistic::new("E14000530", 10.),
//!              BoundaryStatistic::new("E14000531", 50.)];
//! let blues = PaletteName::Blues.gradient();
//! let scale = ChoroplethScale::from_statistics(&stats, blues);
//! let stops = scale.color_stops(30);
//! assert_eq!(stops.len(), 30);
//! ```

use std::marker::PhantomData;

pub mod color;
pub mod config;
pub mod domain;
pub mod error;
pub mod expression;
mod palettes;
pub mod stats;
pub mod stops;

pub use color::{parse_hex, CssColor, Gradient, RGBColor};
pub use config::{ChoroplethConfig, InputSource};
pub use domain::{compute_domain, normalize, ScaleDomain};
pub use error::{Error, Result};
pub use expression::{FeatureInput, InterpolationMode};
pub use palettes::{Palette, PaletteGradient, PaletteName, PaletteType};
pub use stats::BoundaryStatistic;
pub use stops::{build_color_stops, value_to_color, ChoroplethScale,
                ColorStop, ColorStopTable, DEFAULT_STEPS, MAX_STEPS,
                MIN_STEPS};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
///
/// This is the palette interpolator injected into the scale
/// computations.  Any closure `Fn(f64) -> Color` is one.
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn color(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(&self, mut a: f64, mut b: f64, n: usize) -> Range<'_, Self, Color> {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self, color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// The same colors, run from `t = 1` down to `t = 0`.
    fn reversed(self) -> Reversed<Self, Color>
    where Self: Sized {
        Reversed { range: self, color: PhantomData }
    }
}

impl<Color, F> ColorRange<Color> for F
where F: Fn(f64) -> Color {
    #[inline]
    fn color(&self, t: f64) -> Color { self(t) }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<'a, R: ?Sized, Color> {
    range: &'a R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<'_, R, Color>
where R: ColorRange<Color> + ?Sized {
    /// Return the float and color of the position `k` (assuming it
    /// is in the range `0 ..= self.last`).  The bounds are reproduced
    /// exactly and sampled at exactly `t = 0` and `t = 1`.
    fn point(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.color(0.))
        } else if k == self.last {
            (self.b, self.range.color(1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.color(t))
        }
    }

    fn remaining(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

impl<R, Color> Iterator for Range<'_, R, Color>
where R: ColorRange<Color> + ?Sized {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.point(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<'_, R, Color>
where R: ColorRange<Color> + ?Sized {
    fn len(&self) -> usize { self.remaining() }
}

impl<R, Color> DoubleEndedIterator for Range<'_, R, Color>
where R: ColorRange<Color> + ?Sized {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.point(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// A [`ColorRange`] traversed backwards.
///
/// Created by [`ColorRange::reversed`].
#[derive(Clone, Copy)]
pub struct Reversed<R, Color> {
    range: R,
    color: PhantomData<Color>,
}

impl<R, Color> ColorRange<Color> for Reversed<R, Color>
where R: ColorRange<Color> {
    fn color(&self, t: f64) -> Color { self.range.color(1. - t) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    fn grey(t: f64) -> RGB8 {
        let x = (255. * t).round() as u8;
        RGB8::new(x, x, x)
    }

    #[test]
    fn uniform_range() {
        for (i, (x, c)) in grey.range(0., 1., 11).enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(grey(x), c);
        }
    }

    #[test]
    fn range_includes_bounds() {
        let pts: Vec<_> = grey.range(10., 50., 5).collect();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], (10., RGB8::new(0, 0, 0)));
        assert_eq!(pts[4], (50., RGB8::new(255, 255, 255)));
        assert_eq!(pts[2].0, 30.);
    }

    #[test]
    fn empty_range() {
        let mut r = grey.range(0., 1., 0);
        assert_eq!(r.len(), 0);
        assert!(r.next().is_none());
        assert!(r.next_back().is_none());
    }

    #[test]
    fn range_from_both_ends() {
        let mut r = grey.range(0., 4., 5);
        assert_eq!(r.next_back().map(|p| p.0), Some(4.));
        assert_eq!(r.next().map(|p| p.0), Some(0.));
        assert_eq!(r.len(), 3);
        let rest: Vec<_> = r.map(|p| p.0).collect();
        assert_eq!(rest, vec![1., 2., 3.]);
    }

    #[test]
    fn reversed_range() {
        let rev = grey.reversed();
        assert_eq!(rev.color(0.), RGB8::new(255, 255, 255));
        assert_eq!(rev.color(1.), RGB8::new(0, 0, 0));
    }
}
