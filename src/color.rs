use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::SignalType;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: signal type → Color32
// ---------------------------------------------------------------------------

/// Maps each [`SignalType`] to a distinct colour for the channel list and
/// legend. `Other` stays gray so unclassified channels recede visually.
#[derive(Debug, Clone)]
pub struct SignalTypeColors {
    mapping: [(SignalType, Color32); SignalType::ALL.len()],
    default_color: Color32,
}

impl Default for SignalTypeColors {
    fn default() -> Self {
        // One hue per classified type; Other stays gray.
        let palette = generate_palette(3);
        SignalTypeColors {
            mapping: [
                (SignalType::Eeg, palette[0]),
                (SignalType::Eog, palette[1]),
                (SignalType::Mastoid, palette[2]),
                (SignalType::Other, Color32::GRAY),
            ],
            default_color: Color32::GRAY,
        }
    }
}

impl SignalTypeColors {
    /// Look up the colour for a signal type.
    pub fn color_for(&self, signal_type: SignalType) -> Color32 {
        self.mapping
            .iter()
            .find(|(t, _)| *t == signal_type)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Legend entries (type label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(t, c)| (t.to_string(), *c))
            .collect()
    }
}
