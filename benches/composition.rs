// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_drop::domain::editing::TransformState;
use iced_drop::media::{self, Bounds};
use image_rs::{DynamicImage, Rgba, RgbaImage};
use std::hint::black_box;

fn sample_image() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(1920, 1080, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    }))
}

fn edited_transform() -> TransformState {
    let mut transform = TransformState::default();
    transform.rotate_right();
    transform.flip_horizontal();
    transform.zoom_in();
    transform.zoom_in();
    transform.set_brightness(120);
    transform.set_contrast(80);
    transform
}

fn composition_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("composition");
    let image = sample_image();
    let identity = TransformState::default();
    let edited = edited_transform();
    let bounds = Some(Bounds::new(1200, 800));

    group.bench_function("preview_identity", |b| {
        b.iter(|| black_box(media::render(&image, &identity, bounds)));
    });

    group.bench_function("preview_edited", |b| {
        b.iter(|| black_box(media::render(&image, &edited, bounds)));
    });

    group.sample_size(10);
    group.bench_function("export_edited_jpeg", |b| {
        b.iter(|| black_box(media::export(&image, &edited, 95)));
    });

    group.finish();
}

criterion_group!(benches, composition_benchmark);
criterion_main!(benches);
