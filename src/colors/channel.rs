// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Channel identifiers and validation of numeric field text.

use crate::base::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;

/// Range accepted by the red, green and blue fields.
pub const CHANNEL_RANGE: RangeInclusive<i64> = 0..=255;

/// Range accepted by the alpha field, as a percentage.
pub const ALPHA_PERCENT_RANGE: RangeInclusive<i64> = 1..=99;

/// One of the four 8-bit channels of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Opacity.
    Alpha,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
}

impl Channel {
    /// All channels in ARGB order.
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// The range of numbers the channel's text field accepts.
    pub fn input_range(self) -> RangeInclusive<i64> {
        match self {
            Channel::Alpha => ALPHA_PERCENT_RANGE,
            Channel::Red | Channel::Green | Channel::Blue => CHANNEL_RANGE,
        }
    }

    /// Formats a channel value the way its text field shows it.
    ///
    /// Alpha is shown as a percentage, the other channels as-is.
    pub fn display(self, value: u8) -> String {
        match self {
            Channel::Alpha => alpha_to_percent(value).to_string(),
            _ => value.to_string(),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Alpha => write!(f, "alpha"),
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Checks the text of a numeric field and returns the channel value it stands for.
///
/// Red, green and blue accept `0..=255`. Alpha accepts a percentage in `1..=99`
/// which is rescaled to `0..=255`.
///
/// # Errors
///
/// [`ValidationError::NotANumber`] when the text is not a base-10 integer and
/// [`ValidationError::OutOfRange`] when the number is outside the field's range.
pub fn validate_channel(channel: Channel, raw: &str) -> Result<u8, ValidationError> {
    let value = raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => out_of_range(channel, i64::MAX),
        IntErrorKind::NegOverflow => out_of_range(channel, i64::MIN),
        _ => ValidationError::NotANumber {
            input: raw.to_string(),
        },
    })?;

    if !channel.input_range().contains(&value) {
        return Err(out_of_range(channel, value));
    }

    // The range check above keeps every value within u8.
    let value = value as u8;
    Ok(match channel {
        Channel::Alpha => percent_to_alpha(value),
        _ => value,
    })
}

/// Rescales a percentage to an alpha value, rounding half away from zero.
pub fn percent_to_alpha(percent: u8) -> u8 {
    let scaled = (f64::from(percent.min(100)) / 100.0 * 255.0).round();
    scaled as u8
}

/// Rescales an alpha value to the percentage shown in the alpha field, rounding up.
pub fn alpha_to_percent(alpha: u8) -> u8 {
    let percent = (f64::from(alpha) / 255.0 * 100.0).ceil();
    percent as u8
}

fn out_of_range(channel: Channel, value: i64) -> ValidationError {
    let range = channel.input_range();
    ValidationError::OutOfRange {
        value,
        min: *range.start(),
        max: *range.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_bounds() {
        assert_eq!(validate_channel(Channel::Red, "255"), Ok(255));
        assert_eq!(validate_channel(Channel::Green, "0"), Ok(0));
        assert_eq!(
            validate_channel(Channel::Red, "256"),
            Err(ValidationError::OutOfRange {
                value: 256,
                min: 0,
                max: 255
            })
        );
        assert!(matches!(
            validate_channel(Channel::Blue, "-1"),
            Err(ValidationError::OutOfRange { value: -1, .. })
        ));
    }

    #[test]
    fn test_not_a_number() {
        for raw in ["", "abc", "1.5", " 12", "0x10"] {
            assert!(
                matches!(
                    validate_channel(Channel::Red, raw),
                    Err(ValidationError::NotANumber { .. })
                ),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        assert!(matches!(
            validate_channel(Channel::Red, "99999999999999999999999"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_alpha_percentage_rescaled() {
        assert_eq!(validate_channel(Channel::Alpha, "50"), Ok(128));
        assert_eq!(validate_channel(Channel::Alpha, "1"), Ok(3));
        assert_eq!(validate_channel(Channel::Alpha, "99"), Ok(252));
    }

    #[test]
    fn test_alpha_percentage_bounds() {
        for raw in ["0", "100", "255"] {
            assert!(matches!(
                validate_channel(Channel::Alpha, raw),
                Err(ValidationError::OutOfRange { min: 1, max: 99, .. })
            ));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Channel::Alpha.display(255), "100");
        assert_eq!(Channel::Alpha.display(128), "51");
        assert_eq!(Channel::Red.display(17), "17");
        assert_eq!(Channel::Blue.to_string(), "blue");
    }
}
