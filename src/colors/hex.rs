// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Parsing of hex color text.
//!
//! The hex field edits red, green and blue only. The allowed formats are:
//! * `RGB` / `#RGB`
//! * `RRGGBB` / `#RRGGBB`
//!
//! Alpha-carrying forms such as `#AARRGGBB` are rejected.

use crate::base::ValidationError;

/// Parses hex color text into a `0x00RRGGBB` value.
///
/// The three digit shorthand doubles each digit, so `"f0a"` reads as `"ff00aa"`.
///
/// # Errors
///
/// [`ValidationError::MalformedHex`] when the body has characters other than
/// hex digits or is not 3 or 6 digits long, [`ValidationError::ParseOverflow`]
/// when the digits cannot be converted to an integer.
pub fn parse_hex(raw: &str) -> Result<u32, ValidationError> {
    let body = raw.strip_prefix('#').unwrap_or(raw);
    let malformed = || {
        tracing::debug!(input = raw, "invalid hex color format");
        ValidationError::MalformedHex {
            input: raw.to_string(),
        }
    };

    if !body.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let expanded = match body.len() {
        3 => body.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => body.to_string(),
        _ => return Err(malformed()),
    };

    u32::from_str_radix(&expanded, 16).map_err(|e| {
        tracing::debug!(input = raw, error = %e, "hex color conversion failed");
        ValidationError::ParseOverflow {
            input: raw.to_string(),
        }
    })
}

/// Returns `true` if [`parse_hex`] accepts the text.
pub fn is_valid_hex(raw: &str) -> bool {
    parse_hex(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digits() {
        assert_eq!(parse_hex("#112233"), Ok(0x0011_2233));
        assert_eq!(parse_hex("aBcDeF"), Ok(0x00AB_CDEF));
    }

    #[test]
    fn test_shorthand_expands() {
        assert_eq!(parse_hex("f0a"), parse_hex("ff00aa"));
        assert_eq!(parse_hex("#f0a"), Ok(0x00FF_00AA));
    }

    #[test]
    fn test_wrong_length() {
        for raw in ["12345", "", "#", "#1", "1234", "#FF112233", "1234567"] {
            assert!(
                matches!(parse_hex(raw), Err(ValidationError::MalformedHex { .. })),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_non_hex_characters() {
        for raw in ["zz00aa", "#12g456", "##112233", "+12345", "ff 0aa", "ééé"] {
            assert!(
                matches!(parse_hex(raw), Err(ValidationError::MalformedHex { .. })),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_predicate_matches_parser() {
        assert!(is_valid_hex("#000"));
        assert!(is_valid_hex("FFFFFF"));
        assert!(!is_valid_hex("12345"));
        assert!(!is_valid_hex("zz00aa"));
    }
}
