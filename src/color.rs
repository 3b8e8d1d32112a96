/// Linear RGBA, channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub fn from_rgb8((r, g, b): (u8, u8, u8), a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// CSS-style `hsla()`: hue in degrees (any value, wrapped), saturation and
/// lightness as fractions.
pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Rgba {
    let h = hue.rem_euclid(360.0) / 60.0;
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgba {
        r: r + m,
        g: g + m,
        b: b + m,
        a: alpha.clamp(0.0, 1.0),
    }
}

pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Rgba {
    hsla(hue, saturation, lightness, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-3
            && (a.g - b.g).abs() < 1e-3
            && (a.b - b.b).abs() < 1e-3
            && (a.a - b.a).abs() < 1e-3
    }

    #[test]
    fn primary_hues() {
        let red = Rgba { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
        let green = Rgba { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
        let blue = Rgba { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
        assert!(close(hsl(0.0, 1.0, 0.5), red));
        assert!(close(hsl(120.0, 1.0, 0.5), green));
        assert!(close(hsl(240.0, 1.0, 0.5), blue));
    }

    #[test]
    fn hue_wraps_both_ways() {
        assert!(close(hsl(360.0 + 120.0, 1.0, 0.5), hsl(120.0, 1.0, 0.5)));
        assert!(close(hsl(-14.0, 1.0, 0.6), hsl(346.0, 1.0, 0.6)));
    }

    #[test]
    fn lightness_extremes() {
        let white = hsl(200.0, 1.0, 1.0);
        assert!(close(white, Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }));
        let black = hsl(200.0, 1.0, 0.0);
        assert!(close(black, Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(hsla(10.0, 1.0, 0.5, 1.7).a, 1.0);
        assert_eq!(hsla(10.0, 1.0, 0.5, -0.2).a, 0.0);
    }

    #[test]
    fn from_rgb8_scales_channels() {
        let c = Rgba::from_rgb8((255, 0, 51), 0.3);
        assert!(close(c, Rgba { r: 1.0, g: 0.0, b: 0.2, a: 0.3 }));
    }
}
