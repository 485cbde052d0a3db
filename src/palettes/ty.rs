pub(crate) use rgb::RGBA;

/// A Colormap with certain characteristics.
pub(crate) struct PaletteData {
    pub(crate) rgb: Vec<RGBA<f64>>, // Invariant: length ≥ 2
    pub(crate) typ: PaletteType,
}

impl PaletteData {
    pub(crate) fn new(typ: PaletteType, rgb: &[[u8; 3]]) -> Self {
        debug_assert!(rgb.len() >= 2);
        let rgb = rgb.iter()
            .map(|&[r, g, b]| RGBA { r: r as f64, g: g as f64, b: b as f64,
                                     a: 255. })
            .collect();
        PaletteData { rgb, typ }
    }
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Single hue color scheme: one hue progressing from light (low
    /// data values) to dark (high data values).
    SingleHue,
    /// Multi-hue sequential scheme.  Lightness steps still dominate
    /// but the hue shifts along the ramp for more contrast.
    MultiHue,
    /// Perceptually uniform colormap (Matplotlib): equal steps in the
    /// data are perceived as equal steps in the color space, also
    /// when printed in black and white.
    Uniform,
}
