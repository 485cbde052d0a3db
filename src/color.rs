//! Colors: conversions, CSS strings and perceptual gradients.

use std::f64::consts::PI;
use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGBA8};
use crate::{ColorRange, Error, Result};

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return a gradient from color `c0` to color `c1`, interpolated
    /// in CIE L*C*h space along the shortest hue arc.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use choropleth_brewery::{RGBColor, ColorRange};
    /// let white = RGB8::new(255, 255, 255);
    /// let navy = RGB8::new(8, 48, 107);
    /// let grad = white.gradient(&navy);
    /// assert_eq!(grad.color(1.), navy);
    /// ```
    fn gradient(&self, c1: &Self) -> Gradient<Self> {
        let lch0 = Lch::from_rgb(Self::to_rgba(self));
        let lch1 = Lch::from_rgb(Self::to_rgba(c1));
        let h0 = lch0.h;
        let h1 = lch1.h;
        let dh = {
            if h1 > h0 && h1 - h0 > PI { h1 - (h0 + TWO_PI) }
            else if h1 < h0 && h0 - h1 > PI { h1 + TWO_PI - h0 }
            else { h1 - h0 } };
        Gradient { c0: lch0,
                   dc: Lch { l: lch1.l - lch0.l, c: lch1.c - lch0.c,
                             h: dh, a: lch1.a - lch0.a },
                   color: PhantomData }
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

/// Round a component to the nearest representable `u8`.
#[inline]
fn channel(x: f64) -> u8 { x.round().clamp(0., 255.) as u8 }

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: channel(c.r), g: channel(c.g), b: channel(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: channel(c.r), g: channel(c.g), b: channel(c.b),
                a: channel(c.a) }
    }
}

/// Colors that can be written in a style sheet or a Mapbox style.
pub trait CssColor {
    /// Return the color as a CSS color string.
    fn css(&self) -> String;
}

impl CssColor for RGB8 {
    fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl CssColor for RGBA8 {
    fn css(&self) -> String {
        if self.a == 255 {
            RGB8::new(self.r, self.g, self.b).css()
        } else {
            let a = (self.a as f64 / 255. * 1000.).round() / 1000.;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
        }
    }
}

impl CssColor for RGBA<f64> {
    fn css(&self) -> String { RGBA8::from_rgba(*self).css() }
}

/// Interpolators may produce ready-made color strings.
impl CssColor for String {
    fn css(&self) -> String { self.clone() }
}

impl CssColor for &str {
    fn css(&self) -> String { self.to_string() }
}

/// Parse `#rgb` or `#rrggbb` (the `#` is optional).
///
/// ```
/// use rgb::RGB8;
/// assert_eq!(choropleth_brewery::parse_hex("#08306b").unwrap(),
///            RGB8::new(8, 48, 107));
/// ```
pub fn parse_hex(s: &str) -> Result<RGB8> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || Error::InvalidColor(s.to_string());
    if !hex.is_ascii() { return Err(invalid()) }
    let component = |h: &str| u8::from_str_radix(h, 16).map_err(|_| invalid());
    match hex.len() {
        6 => Ok(RGB8::new(component(&hex[0..2])?,
                          component(&hex[2..4])?,
                          component(&hex[4..6])?)),
        3 => {
            let short = |i: usize| component(&hex[i..i+1]).map(|x| x * 17);
            Ok(RGB8::new(short(0)?, short(1)?, short(2)?))
        }
        _ => Err(invalid()),
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness.
    l: f64,
    /// The chroma.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
    /// Alpha component
    a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    fn to_rgb(self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r, g, b, a: self.a }
    }
}


/// Gradient between two colors.
///
/// Created by [`RGBColor::gradient`].  See the [`ColorRange`] trait
/// for methods.
#[derive(Clone, Copy)]
pub struct Gradient<Color> {
    c0: Lch, // first color
    dc: Lch, // last - first color
    color: PhantomData<Color>,
}

impl<Color> Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    pub(crate) fn color_unchecked(&self, t: f64) -> Color {
        let lch = Lch { l: self.c0.l + t * self.dc.l,
                        c: self.c0.c + t * self.dc.c,
                        h: self.c0.h + t * self.dc.h,
                        a: self.c0.a + t * self.dc.a };
        Color::from_rgba(lch.to_rgb())
    }
}

impl<Color> ColorRange<Color> for Gradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], where
    /// `t == 0.` returns the first color provided in the gradient and
    /// `t == 1.` the second.
    fn color(&self, t: f64) -> Color { self.color_unchecked(t.clamp(0., 1.)) }
}
