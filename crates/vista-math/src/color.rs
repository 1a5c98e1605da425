//! RGB colors and the stereo (anaglyph) color adjustments.

use serde::{Deserialize, Serialize};

/// Fraction of saturation kept by [`Rgb::desaturate`].
const DESATURATION: f32 = 0.5;

/// Display gamma used when collapsing a color to its perceived brightness.
const GAMMA: f32 = 2.5;

/// A linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Halve the saturation, keeping hue and value.
    ///
    /// Used for colored anaglyph stereo, where fully saturated colors would
    /// bleed into the wrong eye.
    pub fn desaturate(self) -> Self {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;
        if max <= 0.0 || delta <= 0.0 {
            return self;
        }

        let mut hue = if self.red == max {
            (self.green - self.blue) / delta
        } else if self.green == max {
            2.0 + (self.blue - self.red) / delta
        } else {
            4.0 + (self.red - self.green) / delta
        };
        if hue < 0.0 {
            hue += 6.0;
        }
        let saturation = delta / max * DESATURATION;
        let value = max;

        let sector = hue.floor();
        let f = hue - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));
        match sector as i32 {
            0 => Self::new(value, t, p),
            1 => Self::new(q, value, p),
            2 => Self::new(p, value, t),
            3 => Self::new(p, q, value),
            4 => Self::new(t, p, value),
            _ => Self::new(value, p, q),
        }
    }

    /// Collapse to a gray of the same perceived brightness.
    pub fn grayscale(self) -> Self {
        let black = (0.299 * self.red.powf(GAMMA)
            + 0.587 * self.green.powf(GAMMA)
            + 0.114 * self.blue.powf(GAMMA))
        .powf(1.0 / GAMMA);
        Self::new(black, black, black)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_white() {
        assert_eq!(Rgb::default(), Rgb::WHITE);
    }

    #[test]
    fn test_desaturate_pure_red() {
        let c = Rgb::new(1.0, 0.0, 0.0).desaturate();
        assert_relative_eq!(c.red, 1.0);
        assert_relative_eq!(c.green, 0.5);
        assert_relative_eq!(c.blue, 0.5);
    }

    #[test]
    fn test_desaturate_keeps_hue_sector() {
        let c = Rgb::new(0.0, 0.0, 0.8).desaturate();
        assert_relative_eq!(c.blue, 0.8);
        assert_relative_eq!(c.red, 0.4, epsilon = 1e-6);
        assert_relative_eq!(c.green, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_desaturate_gray_is_unchanged() {
        let gray = Rgb::new(0.3, 0.3, 0.3);
        assert_eq!(gray.desaturate(), gray);
        assert_eq!(Rgb::BLACK.desaturate(), Rgb::BLACK);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let c = Rgb::WHITE.grayscale();
        assert_relative_eq!(c.red, 1.0, epsilon = 1e-6);
        assert_eq!(c.red, c.green);
        assert_eq!(c.green, c.blue);
    }

    #[test]
    fn test_grayscale_weights_green_over_blue() {
        let g = Rgb::new(0.0, 1.0, 0.0).grayscale();
        let b = Rgb::new(0.0, 0.0, 1.0).grayscale();
        assert!(g.red > b.red);
        assert_relative_eq!(g.red, 0.587f32.powf(1.0 / 2.5), epsilon = 1e-6);
    }
}
