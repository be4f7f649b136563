// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Drives a color preview the way a picker screen would: the user types into
//! the fields, then a hue slider replaces the whole color.
//!
//! Run with `RUST_LOG=debug` to see the propagation decisions. An optional
//! first argument names a `.toml` or `.json` picker config.

use cogent_color_picker::{ColorPreview, Field, Hsv, PickerConfig};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn print_fields(label: &str, preview: &ColorPreview) {
    let fields = preview.fields();
    println!(
        "{label:<24} A={:>3}% R={:>3} G={:>3} B={:>3} hex={:<8} color={}",
        fields.get(Field::Alpha),
        fields.get(Field::Red),
        fields.get(Field::Green),
        fields.get(Field::Blue),
        fields.get(Field::Hex),
        preview.color(),
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };
    let quiet = config.debounce();

    let mut preview = ColorPreview::new(config)?;
    preview.set_on_color_change(|packed| println!("  -> onColorChange(#{packed:08X})"));
    preview.attach()?;
    print_fields("initial", &preview);

    preview.set_focus(Some(Field::Red));
    for text in ["2", "20", "200"] {
        preview.on_text_changed(Field::Red, text)?;
    }
    print_fields("typed red 200", &preview);

    if let Err(e) = preview.on_text_changed(Field::Red, "2000") {
        println!("  rejected: {e}");
    }
    print_fields("typed red 2000", &preview);

    preview.set_focus(Some(Field::Hex));
    for text in ["1", "12", "123"] {
        let _ = preview.on_text_changed(Field::Hex, text);
    }
    print_fields("typed hex 123", &preview);

    let _ = preview.on_text_changed(Field::Hex, "40");
    tokio::time::sleep(quiet + Duration::from_millis(50)).await;
    print_fields("hex 40, debounced", &preview);

    preview.set_focus(None);
    preview.set_hsv(255, Hsv::new(200.0, 0.5, 0.9));
    print_fields("hue slider moved", &preview);

    preview.detach();
    Ok(())
}
