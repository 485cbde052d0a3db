//! Built-in sequential palettes.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use lazy_static::lazy_static;
use rgb::RGB8;
use serde::{Deserialize, Serialize};
use crate::{ColorRange, Error, Gradient, RGBColor};

pub(crate) mod ty;
use ty::PaletteData;
pub use ty::PaletteType;

// Brewer colormaps (9 classes) — see http://colorbrewer2.org/
lazy_static! {
  static ref BLUES: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [247, 251, 255], [222, 235, 247], [198, 219, 239], [158, 202, 225],
      [107, 174, 214], [66, 146, 198], [33, 113, 181], [8, 81, 156],
      [8, 48, 107]]);
  static ref GREENS: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [247, 252, 245], [229, 245, 224], [199, 233, 192], [161, 217, 155],
      [116, 196, 118], [65, 171, 93], [35, 139, 69], [0, 109, 44],
      [0, 68, 27]]);
  static ref GREYS: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [255, 255, 255], [240, 240, 240], [217, 217, 217], [189, 189, 189],
      [150, 150, 150], [115, 115, 115], [82, 82, 82], [37, 37, 37],
      [0, 0, 0]]);
  static ref ORANGES: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [255, 245, 235], [254, 230, 206], [253, 208, 162], [253, 174, 107],
      [253, 141, 60], [241, 105, 19], [217, 72, 1], [166, 54, 3],
      [127, 39, 4]]);
  static ref PURPLES: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [252, 251, 253], [239, 237, 245], [218, 218, 235], [188, 189, 220],
      [158, 154, 200], [128, 125, 186], [106, 81, 163], [84, 39, 143],
      [63, 0, 125]]);
  static ref REDS: PaletteData = PaletteData::new(PaletteType::SingleHue, &[
      [255, 245, 240], [254, 224, 210], [252, 187, 161], [252, 146, 114],
      [251, 106, 74], [239, 59, 44], [203, 24, 29], [165, 15, 21],
      [103, 0, 13]]);
  static ref ORRD: PaletteData = PaletteData::new(PaletteType::MultiHue, &[
      [255, 247, 236], [254, 232, 200], [253, 212, 158], [253, 187, 132],
      [252, 141, 89], [239, 101, 72], [215, 48, 31], [179, 0, 0],
      [127, 0, 0]]);
  static ref YLORRD: PaletteData = PaletteData::new(PaletteType::MultiHue, &[
      [255, 255, 204], [255, 237, 160], [254, 217, 118], [254, 178, 76],
      [253, 141, 60], [252, 78, 42], [227, 26, 28], [189, 0, 38],
      [128, 0, 38]]);
  static ref YLGNBU: PaletteData = PaletteData::new(PaletteType::MultiHue, &[
      [255, 255, 217], [237, 248, 177], [199, 233, 180], [127, 205, 187],
      [65, 182, 196], [29, 145, 192], [34, 94, 168], [37, 52, 148],
      [8, 29, 88]]);
}

// Matplotlib colormaps, sampled at 11 points.
lazy_static! {
  static ref VIRIDIS: PaletteData = PaletteData::new(PaletteType::Uniform, &[
      [68, 1, 84], [72, 36, 117], [65, 68, 135], [53, 95, 141],
      [42, 120, 142], [33, 145, 140], [34, 168, 132], [68, 191, 112],
      [122, 209, 81], [189, 223, 38], [253, 231, 37]]);
  static ref MAGMA: PaletteData = PaletteData::new(PaletteType::Uniform, &[
      [0, 0, 4], [20, 14, 54], [59, 15, 112], [100, 26, 128],
      [140, 41, 129], [183, 55, 121], [222, 73, 104], [247, 112, 92],
      [254, 159, 109], [254, 207, 146], [252, 253, 191]]);
  static ref INFERNO: PaletteData = PaletteData::new(PaletteType::Uniform, &[
      [0, 0, 4], [22, 11, 57], [66, 10, 104], [106, 23, 110],
      [147, 38, 103], [188, 55, 84], [221, 81, 58], [243, 120, 25],
      [252, 165, 10], [246, 215, 70], [252, 255, 164]]);
  static ref PLASMA: PaletteData = PaletteData::new(PaletteType::Uniform, &[
      [13, 8, 135], [65, 4, 157], [106, 0, 168], [143, 13, 164],
      [177, 42, 144], [204, 71, 120], [225, 100, 98], [242, 132, 75],
      [252, 166, 54], [252, 206, 37], [240, 249, 33]]);
}

/// Names of the built-in palettes.
///
/// Parsed from (and serialized to) their lowercase name, e.g.
/// `"ylorrd"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default,
         Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    /// Brewer "Light to dark blue" sequential scheme.
    #[default]
    Blues,
    /// Brewer "Light to dark green" sequential scheme.
    Greens,
    /// Brewer "Light to dark gray" sequential scheme.
    Greys,
    /// Brewer "Light to dark orange" sequential scheme.
    Oranges,
    /// Brewer "Light to dark purple" sequential scheme.
    Purples,
    /// Brewer "Light to dark red" sequential scheme.
    Reds,
    /// Brewer "Light orange to dark red" sequential scheme.
    OrRd,
    /// Brewer "Light yellow to orange to dark red" sequential scheme.
    YlOrRd,
    /// Brewer "Light yellow to green to dark blue" sequential scheme.
    YlGnBu,
    /// Matplotlib viridis color scheme.
    Viridis,
    /// Matplotlib magma color scheme.
    Magma,
    /// Matplotlib inferno color scheme.
    Inferno,
    /// Matplotlib plasma color scheme.
    Plasma,
}

impl PaletteName {
    /// All built-in palettes.
    pub const ALL: [PaletteName; 13] = {
        use PaletteName::*;
        [Blues, Greens, Greys, Oranges, Purples, Reds, OrRd, YlOrRd, YlGnBu,
         Viridis, Magma, Inferno, Plasma]
    };

    /// The lowercase name of the palette.
    pub fn as_str(self) -> &'static str {
        use PaletteName::*;
        match self {
            Blues => "blues",
            Greens => "greens",
            Greys => "greys",
            Oranges => "oranges",
            Purples => "purples",
            Reds => "reds",
            OrRd => "orrd",
            YlOrRd => "ylorrd",
            YlGnBu => "ylgnbu",
            Viridis => "viridis",
            Magma => "magma",
            Inferno => "inferno",
            Plasma => "plasma",
        }
    }

    fn data(self) -> &'static PaletteData {
        use PaletteName::*;
        match self {
            Blues => &*BLUES,
            Greens => &*GREENS,
            Greys => &*GREYS,
            Oranges => &*ORANGES,
            Purples => &*PURPLES,
            Reds => &*REDS,
            OrRd => &*ORRD,
            YlOrRd => &*YLORRD,
            YlGnBu => &*YLGNBU,
            Viridis => &*VIRIDIS,
            Magma => &*MAGMA,
            Inferno => &*INFERNO,
            Plasma => &*PLASMA,
        }
    }

    /// The palette with this name.
    #[inline]
    pub fn palette<Color: RGBColor>(self) -> Palette<Color> {
        Palette::new(self.data())
    }

    /// Interpolator through the colors of the palette, in 8 bits RGB.
    ///
    /// ```
    /// use choropleth_brewery::{ColorRange, PaletteName};
    /// use rgb::RGB8;
    /// let blues = PaletteName::Blues.gradient();
    /// assert_eq!(blues.color(0.), RGB8::new(247, 251, 255));
    /// assert_eq!(blues.color(1.), RGB8::new(8, 48, 107));
    /// ```
    pub fn gradient(self) -> PaletteGradient<RGB8> {
        self.palette().gradient()
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::UnknownPalette(s.to_string()))
    }
}


/// A colormap.
#[derive(Clone, Copy)]
pub struct Palette<Color> {
    palette: &'static PaletteData,
    color: PhantomData<Color>,
}

impl<Color: RGBColor> Palette<Color> {
    fn new(palette: &'static PaletteData) -> Self {
        Self { palette, color: PhantomData }
    }

    /// Returns the number of colors in the palette.
    ///
    /// Palettes countains at least 2 colors.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.palette.rgb.len() }

    /// Says whether the palette is single hue, multi-hue or
    /// perceptually uniform.
    pub fn typ(&self) -> PaletteType { self.palette.typ }

    /// Returns the RGB colors of the palette.
    pub fn colors(&self) -> Vec<Color> {
        self.palette.rgb.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns a gradient constructed from the palette.
    pub fn gradient(&self) -> PaletteGradient<Color> {
        PaletteGradient {
            gradients: self.palette.rgb.windows(2)
                .map(|c| { let c0 = Color::from_rgba(c[0]);
                           let c1 = Color::from_rgba(c[1]);
                           c0.gradient(&c1) })
                .collect() }
    }
}

/// A gradient based on a [`Palette`].
#[derive(Clone)]
pub struct PaletteGradient<Color> {
    gradients: Vec<Gradient<Color>>,
}

impl<Color> ColorRange<Color> for PaletteGradient<Color>
where Color: RGBColor {
    fn color(&self, t: f64) -> Color {
        let n = self.gradients.len();
        // NaN goes to the bottom of the scale.
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        let tn = t * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].color_unchecked(tn.fract()) }
        else { self.gradients[n-1].color_unchecked(1.) }
    }
}
