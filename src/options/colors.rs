use serde::{Deserialize, Serialize};

/// Color palette for anatomical regions and channel-density overlays.
///
/// All colors are linear RGB in the 0-1 range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Soma region color.
    pub soma: [f32; 3],
    /// Axon region color.
    pub axons: [f32; 3],
    /// Dendrite region color.
    pub dendrites: [f32; 3],
    /// Default color of a channel-density element.
    pub density_default: [f32; 3],
    /// Color at the high end of a density overlay's spectrum.
    pub high_spectrum: [f32; 3],
    /// Color at the low end of a density overlay's spectrum.
    pub low_spectrum: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            soma: hex_rgb(0x0066FF),
            axons: hex_rgb(0xFF6600),
            dendrites: hex_rgb(0x99CC00),
            density_default: hex_rgb(0xFF3300),
            high_spectrum: hex_rgb(0xFF0000),
            low_spectrum: hex_rgb(0xFFFF00),
        }
    }
}

/// Convert a packed `0xRRGGBB` value to an RGB triple.
#[must_use]
pub fn hex_rgb(packed: u32) -> [f32; 3] {
    let channel = |shift: u32| ((packed >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rgb_unpacks_channels() {
        assert_eq!(hex_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_rgb(0xFFFF00), [1.0, 1.0, 0.0]);
        assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn region_colors_are_distinct_from_overlay_default() {
        let colors = ColorOptions::default();
        assert_ne!(colors.soma, colors.density_default);
        assert_ne!(colors.axons, colors.density_default);
        assert_ne!(colors.dendrites, colors.density_default);
    }
}
