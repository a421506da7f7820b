//! Color math — direct conversions without external dependencies.
//! Hue is in degrees; saturation, value, and the internal channel values
//! are f64 in 0.0–1.0 unless a function says otherwise.

/// HSV → RGB over six 60°-wide hue sectors, returning 0–255 channels.
///
/// `h` is expected in `[0.0, 360.0)`; `s` and `v` in 0.0–1.0. A hue at or
/// past 360.0 (or below 0.0) falls into the last sector rather than being
/// wrapped, so callers normalize first.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = match (h / 60.0).floor() as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Map an offset from the wheel center to HSV.
///
/// Returns `None` when `(x, y)` lies outside the disc of the given radius.
/// Inside, the angle becomes the hue (degrees in `[0, 360)`), the distance
/// from center over the radius becomes the saturation, and value is fixed
/// at 1.0 — the wheel plays at full brightness.
pub(crate) fn wheel_coords_to_hsv(x: f64, y: f64, radius: f64) -> Option<(f64, f64, f64)> {
    let distance = (x * x + y * y).sqrt();
    if distance > radius {
        return None;
    }

    let mut hue = y.atan2(x).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }

    Some((hue, distance / radius, 1.0))
}

/// Similarity of two RGB colors as a percentage in 0.0–100.0.
///
/// Euclidean distance in RGB space over the maximum possible distance
/// `sqrt(3 · 255²)`, inverted and clamped. Identical colors score 100,
/// black vs. white scores 0.
pub(crate) fn rgb_similarity(a: (u8, u8, u8), b: (u8, u8, u8)) -> f64 {
    let dr = b.0 as f64 - a.0 as f64;
    let dg = b.1 as f64 - a.1 as f64;
    let db = b.2 as f64 - a.2 as f64;
    let distance = (dr * dr + dg * dg + db * db).sqrt();

    let max_distance = (3.0 * 255.0 * 255.0_f64).sqrt();
    (100.0 - (distance / max_distance) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_pure_red() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn primary_and_secondary_hues() {
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0, 0, 255));
        assert_eq!(hsv_to_rgb(60.0, 1.0, 1.0), (255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 1.0, 1.0), (0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 1.0, 1.0), (255, 0, 255));
    }

    #[test]
    fn black_at_zero_value() {
        assert_eq!(hsv_to_rgb(217.0, 0.4, 0.0), (0, 0, 0));
    }

    #[test]
    fn hue_at_exactly_360_takes_the_last_sector() {
        // Falls through to the magenta sector where x collapses to 0,
        // which happens to land back on red.
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), (255, 0, 0));
    }

    #[test]
    fn coords_outside_the_disc_are_rejected() {
        assert_eq!(wheel_coords_to_hsv(101.0, 0.0, 100.0), None);
        assert_eq!(wheel_coords_to_hsv(80.0, 80.0, 100.0), None);
    }

    #[test]
    fn coords_inside_the_disc_map_to_valid_hsv() {
        let (h, s, v) = wheel_coords_to_hsv(50.0, 0.0, 100.0).unwrap();
        assert_eq!(h, 0.0);
        assert!((s - 0.5).abs() < 1e-9);
        assert_eq!(v, 1.0);

        // Every quadrant yields hue in [0, 360) and saturation in [0, 1].
        for &(x, y) in &[
            (30.0, 40.0),
            (-30.0, 40.0),
            (-30.0, -40.0),
            (30.0, -40.0),
            (0.0, -70.0),
        ] {
            let (h, s, v) = wheel_coords_to_hsv(x, y, 100.0).unwrap();
            assert!((0.0..360.0).contains(&h), "hue {h} out of range");
            assert!((0.0..=1.0).contains(&s), "saturation {s} out of range");
            assert_eq!(v, 1.0);
        }
    }

    #[test]
    fn center_click_is_white() {
        let (h, s, _) = wheel_coords_to_hsv(0.0, 0.0, 100.0).unwrap();
        assert_eq!(s, 0.0);
        assert_eq!(hsv_to_rgb(h, s, 1.0), (255, 255, 255));
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(rgb_similarity((12, 200, 7), (12, 200, 7)), 100.0);
        assert_eq!(rgb_similarity((0, 0, 0), (255, 255, 255)), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = (10, 60, 250);
        let b = (200, 30, 40);
        assert_eq!(rgb_similarity(a, b), rgb_similarity(b, a));
    }
}
