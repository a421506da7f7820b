//! Color types — the game's RGB and HSV representations.
//!
//! `Rgb` carries 0–255 integer channels (what the leaderboard and UI deal
//! in); `Hsv` carries wheel-space coordinates. Conversions go through the
//! pure functions in [`crate::math`].

use rand::Rng;

use crate::math;

/// RGB color with 0–255 integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a 7-char lowercase hex string, e.g. `#ff0000`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Similarity to another color as a percentage in 0.0–100.0.
    pub fn similarity(self, other: Rgb) -> f64 {
        math::rgb_similarity((self.r, self.g, self.b), (other.r, other.g, other.b))
    }
}

/// Wheel-space color: hue in degrees `[0, 360)`, saturation and value 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = math::hsv_to_rgb(self.h, self.s, self.v);
        Rgb { r, g, b }
    }

    /// Map a pointer offset from the wheel center to a color on the wheel.
    ///
    /// `None` when the offset lies outside the disc.
    pub fn from_wheel_coords(x: f64, y: f64, radius: f64) -> Option<Self> {
        math::wheel_coords_to_hsv(x, y, radius).map(|(h, s, v)| Self { h, s, v })
    }
}

/// A uniformly random color that exists on the wheel: any hue, any
/// saturation, full brightness.
pub fn random_wheel_color() -> Rgb {
    let mut rng = rand::rng();
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(0.0..1.0);
    Hsv::new(hue, saturation, 1.0).to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_with_hash() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(58, 190, 255).to_hex(), "#3abeff");
    }

    #[test]
    fn similarity_of_identical_colors_is_perfect() {
        let c = Rgb::new(17, 121, 255);
        assert_eq!(c.similarity(c), 100.0);
    }

    #[test]
    fn wheel_coords_round_trip_through_rgb() {
        let hsv = Hsv::from_wheel_coords(0.0, -50.0, 100.0).unwrap();
        assert_eq!(hsv.h, 270.0);
        assert_eq!(hsv.v, 1.0);
        // Saturation 0.5 at hue 270 lands between violet and white.
        let rgb = hsv.to_rgb();
        assert_eq!(rgb.b, 255);
        assert!(rgb.r > rgb.g);
    }

    #[test]
    fn random_colors_stay_on_the_wheel() {
        // Full brightness means at least one channel is saturated.
        for _ in 0..200 {
            let c = random_wheel_color();
            assert_eq!(c.r.max(c.g).max(c.b), 255);
        }
    }
}
