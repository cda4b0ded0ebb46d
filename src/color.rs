use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: configuration name → RGBColor
// ---------------------------------------------------------------------------

/// Assigns one colour per configuration, in configuration order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: Vec<(String, RGBColor)>,
    default_color: RGBColor,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mapping = names
            .iter()
            .zip(generate_palette(names.len()))
            .map(|(name, c)| (name.as_ref().to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: RGBColor(128, 128, 128),
        }
    }

    /// Look up the colour for a configuration; unknown names are grey.
    pub fn color_for(&self, name: &str) -> RGBColor {
        self.mapping
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }
}
