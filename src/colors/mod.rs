// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Color types and utilities.
//!
//! [`ColorState`] is the canonical color of a picker. The packed ARGB integer
//! and the hex string are always derived from it through [`compose`], and a
//! packed integer is turned back into a state with [`decompose`].

pub mod channel;
pub mod hex;
pub mod hsv;

pub use channel::{validate_channel, Channel};
pub use hex::{is_valid_hex, parse_hex};
pub use hsv::Hsv;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color as four 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorState {
    /// Alpha component (0-255).
    pub a: u8,
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

/// The derived representations of a [`ColorState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    /// `0xAARRGGBB`.
    pub packed: u32,
    /// `#RRGGBB`, the form shown in the hex field.
    pub hex: String,
}

/// Derives the packed integer and the hex string from a state.
pub fn compose(state: ColorState) -> Composed {
    Composed {
        packed: state.packed(),
        hex: state.hex(),
    }
}

/// Splits a packed `0xAARRGGBB` integer into its channels.
pub fn decompose(packed: u32) -> ColorState {
    ColorState {
        a: (packed >> 24) as u8,
        r: (packed >> 16) as u8,
        g: (packed >> 8) as u8,
        b: packed as u8,
    }
}

impl ColorState {
    /// Creates a new color from ARGB components.
    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates a new color from RGB components (alpha defaults to 255).
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Returns the color as a packed `0xAARRGGBB` integer.
    pub fn packed(&self) -> u32 {
        (u32::from(self.a) << 24)
            | (u32::from(self.r) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.b)
    }

    /// Returns the RGB part as `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns all four channels as `#AARRGGBB`.
    pub fn argb_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Returns the value of one channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Alpha => self.a,
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns a copy with one channel replaced.
    pub fn with_channel(self, channel: Channel, value: u8) -> Self {
        let mut next = self;
        match channel {
            Channel::Alpha => next.a = value,
            Channel::Red => next.r = value,
            Channel::Green => next.g = value,
            Channel::Blue => next.b = value,
        }
        next
    }

    /// Returns a copy with red, green and blue taken from a `0x00RRGGBB`
    /// value. Alpha is kept.
    pub fn with_rgb(self, rgb: u32) -> Self {
        let parts = decompose(rgb);
        Self {
            a: self.a,
            r: parts.r,
            g: parts.g,
            b: parts.b,
        }
    }

    /// Alpha as the percentage shown in the alpha field, rounded up.
    pub fn alpha_percent(&self) -> u8 {
        channel::alpha_to_percent(self.a)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<u32> for ColorState {
    fn from(packed: u32) -> Self {
        decompose(packed)
    }
}

impl From<ColorState> for u32 {
    fn from(state: ColorState) -> Self {
        state.packed()
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argb_hex())
    }
}

/// Common colors.
impl ColorState {
    /// White color.
    pub const WHITE: Self = Self {
        a: 255,
        r: 255,
        g: 255,
        b: 255,
    };
    /// Black color.
    pub const BLACK: Self = Self {
        a: 255,
        r: 0,
        g: 0,
        b: 0,
    };
    /// Red color.
    pub const RED: Self = Self {
        a: 255,
        r: 255,
        g: 0,
        b: 0,
    };
    /// Green color.
    pub const GREEN: Self = Self {
        a: 255,
        r: 0,
        g: 255,
        b: 0,
    };
    /// Blue color.
    pub const BLUE: Self = Self {
        a: 255,
        r: 0,
        g: 0,
        b: 255,
    };
    /// Transparent color (fully transparent).
    pub const TRANSPARENT: Self = Self {
        a: 0,
        r: 0,
        g: 0,
        b: 0,
    };
}
