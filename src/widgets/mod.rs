// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Widgets built on the color model.

pub mod color_preview;

pub use color_preview::{ColorPreview, FieldTexts};
