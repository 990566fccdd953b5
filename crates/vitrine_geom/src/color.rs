//! HSL to RGB conversion
//!
//! All hue-derived palettes in the showcase scenes (random particle hues,
//! distance-ramped grid dots, per-segment ring colors) go through this one
//! conversion.

/// Convert an HSL color to linear RGB components in [0, 1]
///
/// `h` is the hue as a fraction of a full turn and wraps, so any real value
/// is valid; `s` and `l` are clamped to [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        // Achromatic
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn test_primary_hues() {
        assert!(approx_eq(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(approx_eq(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(approx_eq(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_achromatic() {
        assert!(approx_eq(hsl_to_rgb(0.42, 0.0, 0.3), [0.3, 0.3, 0.3]));
        assert!(approx_eq(hsl_to_rgb(0.0, 1.0, 1.0), [1.0, 1.0, 1.0]));
        assert!(approx_eq(hsl_to_rgb(0.0, 1.0, 0.0), [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_hue_wraps() {
        let base = hsl_to_rgb(0.25, 0.7, 0.6);
        assert!(approx_eq(hsl_to_rgb(1.25, 0.7, 0.6), base));
        assert!(approx_eq(hsl_to_rgb(-0.75, 0.7, 0.6), base));
    }

    #[test]
    fn test_components_in_range() {
        for i in 0..100 {
            let h = i as f32 / 100.0;
            let rgb = hsl_to_rgb(h, 0.7, 0.5);
            for c in rgb {
                assert!((0.0..=1.0).contains(&c), "component {} out of range", c);
            }
        }
    }
}
