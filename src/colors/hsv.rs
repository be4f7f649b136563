// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Hue/saturation/value representation used by the hue and saturation sliders.

use super::ColorState;
use serde::{Deserialize, Serialize};

/// A color in HSV space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue in degrees, `0.0..360.0`.
    pub h: f32,
    /// Saturation, `0.0..=1.0`.
    pub s: f32,
    /// Value (brightness), `0.0..=1.0`.
    pub v: f32,
}

impl Hsv {
    /// Creates a new HSV color. Hue wraps around 360, saturation and value are clamped.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
        Self {
            h,
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// Converts the RGB part of a color to HSV. Alpha is ignored.
    pub fn from_color(color: ColorState) -> Self {
        let r = f32::from(color.r) / 255.0;
        let g = f32::from(color.g) / 255.0;
        let b = f32::from(color.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self::new(h, s, max)
    }

    /// Converts to a color with the given alpha.
    pub fn to_color(self, alpha: u8) -> ColorState {
        let Self { h, s, v } = Self::new(self.h, self.s, self.v);
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        ColorState::argb(alpha, to_byte(r + m), to_byte(g + m), to_byte(b + m))
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn to_byte(unit: f32) -> u8 {
    (clamp_unit(unit) * 255.0).round() as u8
}
