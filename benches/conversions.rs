// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use cogent_color_picker::{compose, decompose, parse_hex, validate_channel, Channel, ColorModel, ColorState, Field, Target};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn conversions(c: &mut Criterion) {
    c.bench_function("compose", |b| {
        b.iter(|| compose(black_box(ColorState::argb(0x80, 0x12, 0x34, 0x56))))
    });
    c.bench_function("decompose", |b| b.iter(|| decompose(black_box(0x8012_3456))));
    c.bench_function("parse_hex shorthand", |b| b.iter(|| parse_hex(black_box("#f0a"))));
    c.bench_function("validate alpha", |b| {
        b.iter(|| validate_channel(Channel::Alpha, black_box("50")))
    });
}

fn propagation(c: &mut Criterion) {
    let mut model = ColorModel::default();
    for field in Field::ALL {
        model.subscribe(Target::Field(field), |update| {
            black_box(update);
        });
    }
    model.subscribe(Target::Color, |update| {
        black_box(update);
    });

    c.bench_function("edit_channel with observers", |b| {
        b.iter(|| model.edit_channel(Channel::Green, black_box("128")))
    });
}

criterion_group!(benches, conversions, propagation);
criterion_main!(benches);
