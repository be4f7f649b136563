// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! A color picker core: the canonical color of a picker, conversions between
//! packed ARGB integers, channel values and hex text, validation of typed
//! input, and the rules that keep the picker's text fields in sync without
//! feeding values back into the field being edited.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base;
pub mod colors;
pub mod config;
pub mod core;
pub mod events;
pub mod widgets;

pub use base::{Error, Result, ValidationError};
pub use colors::{compose, decompose, is_valid_hex, parse_hex, validate_channel, Channel, ColorState, Composed, Hsv};
pub use config::PickerConfig;
pub use crate::core::{ColorModel, Phase};
pub use events::{EditIntent, Field, FieldUpdate, Target};
pub use widgets::ColorPreview;
