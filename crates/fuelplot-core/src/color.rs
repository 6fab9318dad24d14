// File: crates/fuelplot-core/src/color.rs
// Summary: RGB colors, the categorical palette, and two-stop gradients.

use std::fmt;

/// 8-bit RGB color with hex round-tripping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#')?;
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation toward `other`; `t` is clamped to
    /// `[0, 1]` and channels round to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round() as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

// Gradient endpoints used by the bar and frequency charts.
pub const BLUE_LIGHT: Rgb = Rgb::new(0xc6, 0xdb, 0xef);
pub const BLUE_DARK: Rgb = Rgb::new(0x08, 0x45, 0x94);
pub const GREEN_LIGHT: Rgb = Rgb::new(0xc7, 0xe9, 0xc0);
pub const GREEN_DARK: Rgb = Rgb::new(0x00, 0x5a, 0x32);
pub const RED_LIGHT: Rgb = Rgb::new(0xfe, 0xe0, 0xd2);
pub const RED_DARK: Rgb = Rgb::new(0xcb, 0x18, 0x1d);

/// The ten-color categorical palette; stable per series index, not per
/// value.
pub const CATEGORY10: [Rgb; 10] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

pub fn series_color(index: usize) -> Rgb {
    CATEGORY10[index % CATEGORY10.len()]
}

/// Continuous two-stop color map over a metric's `[min, max]`. Direction
/// is explicit: `at_min` binds to the domain minimum, so each chart keeps
/// the stop order its source used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    pub at_min: Rgb,
    pub at_max: Rgb,
    pub min: f64,
    pub max: f64,
}

impl Gradient {
    pub fn new(at_min: Rgb, at_max: Rgb, min: f64, max: f64) -> Self {
        Self { at_min, at_max, min, max }
    }

    /// Domain from the min/max of `values`. An empty iterator leaves a
    /// degenerate `[0, 0]` domain, which `color_at` treats as the minimum.
    pub fn over_values<I>(at_min: Rgb, at_max: Rgb, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            min = 0.0;
            max = 0.0;
        }
        Self::new(at_min, at_max, min, max)
    }

    /// Interpolated color for `v`; out-of-domain values clamp to the
    /// endpoints and a degenerate `min == max` domain yields `at_min`.
    pub fn color_at(&self, v: f64) -> Rgb {
        let span = self.max - self.min;
        if !(span > 0.0) {
            return self.at_min;
        }
        self.at_min.lerp(self.at_max, (v - self.min) / span)
    }
}
