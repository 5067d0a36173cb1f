// SPDX-License-Identifier: MPL-2.0
//! Composes rotation, zoom, mirroring and tone filters into a single render.
//!
//! [`plan`] is pure geometry. It fits the *rotated* bounding box of the source
//! into the display bounds, so a 90° turn of a landscape photo produces a
//! portrait canvas instead of clipping it. [`render`] executes a plan:
//!
//! 1. crop the visible source window (zoom above 1× hides the borders)
//! 2. resample the window to its drawn size
//! 3. mirror in image axes
//! 4. rotate by quarter turns
//! 5. apply brightness, then contrast
//! 6. composite centered on a transparent canvas
//!
//! Identical inputs always produce identical pixels.

use super::image_transform;
use crate::domain::editing::TransformState;
use image_rs::{imageops, DynamicImage, GenericImageView, RgbaImage};

/// Maximum canvas size; the source is only ever scaled down to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_width: u32,
    pub max_height: u32,
}

impl Bounds {
    #[must_use]
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }
}

/// Region of the source image that remains visible, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceWindow {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Geometry of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    /// Output size, already in the rotated orientation.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Fit-to-bounds ratio, never above 1.
    pub ratio: f64,
    pub window: SourceWindow,
    /// Size of the resampled window before rotation.
    pub drawn_width: u32,
    pub drawn_height: u32,
    /// Top-left corner of the rotated drawing on the canvas.
    pub offset_x: i64,
    pub offset_y: i64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_px(value: f64) -> u32 {
    value.round().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Computes the canvas and drawing geometry for a source of `width` × `height`.
#[must_use]
pub fn plan(width: u32, height: u32, transform: &TransformState, bounds: Option<Bounds>) -> Composition {
    let width = width.max(1);
    let height = height.max(1);
    let swapped = transform.rotation.swaps_dimensions();

    let (rotated_width, rotated_height) = if swapped {
        (height, width)
    } else {
        (width, height)
    };

    let ratio = bounds.map_or(1.0, |b| {
        (f64::from(b.max_width) / f64::from(rotated_width))
            .min(f64::from(b.max_height) / f64::from(rotated_height))
            .min(1.0)
    });

    let canvas_width = round_px(f64::from(rotated_width) * ratio);
    let canvas_height = round_px(f64::from(rotated_height) * ratio);

    // Above 1x only the centered 1/scale window of the source stays on canvas.
    let scale = f64::from(transform.scale.value());
    let zoom = scale.max(1.0);
    let window_width = round_px(f64::from(width) / zoom).min(width);
    let window_height = round_px(f64::from(height) / zoom).min(height);
    let window = SourceWindow {
        x: (width - window_width) / 2,
        y: (height - window_height) / 2,
        width: window_width,
        height: window_height,
    };

    // The drawing never exceeds the canvas in the unrotated orientation.
    let (unrotated_canvas_width, unrotated_canvas_height) = if swapped {
        (canvas_height, canvas_width)
    } else {
        (canvas_width, canvas_height)
    };
    let drawn_width =
        round_px(f64::from(window_width) * ratio * scale).min(unrotated_canvas_width);
    let drawn_height =
        round_px(f64::from(window_height) * ratio * scale).min(unrotated_canvas_height);

    let (rotated_drawn_width, rotated_drawn_height) = if swapped {
        (drawn_height, drawn_width)
    } else {
        (drawn_width, drawn_height)
    };

    Composition {
        canvas_width,
        canvas_height,
        ratio,
        window,
        drawn_width,
        drawn_height,
        offset_x: (i64::from(canvas_width) - i64::from(rotated_drawn_width)) / 2,
        offset_y: (i64::from(canvas_height) - i64::from(rotated_drawn_height)) / 2,
    }
}

/// Renders `image` with `transform` into a canvas that fits `bounds`.
///
/// Pass `None` to render at the source resolution (export).
#[must_use]
pub fn render(image: &DynamicImage, transform: &TransformState, bounds: Option<Bounds>) -> RgbaImage {
    let (width, height) = image.dimensions();
    let composition = plan(width, height, transform, bounds);
    log::debug!(
        "render {width}x{height} -> {}x{} ({:?})",
        composition.canvas_width,
        composition.canvas_height,
        transform
    );

    let mut canvas = RgbaImage::new(composition.canvas_width, composition.canvas_height);

    let window = composition.window;
    let Some(visible) = image_transform::crop(image, window.x, window.y, window.width, window.height)
    else {
        return canvas;
    };

    let mut drawn = image_transform::resize(
        &visible,
        composition.drawn_width,
        composition.drawn_height,
    );
    if transform.flip_x {
        drawn = image_transform::flip_horizontal(&drawn);
    }
    if transform.flip_y {
        drawn = image_transform::flip_vertical(&drawn);
    }
    let mut drawn = image_transform::rotate(&drawn, transform.rotation).to_rgba8();

    if transform.has_filters() {
        image_transform::apply_tone(&mut drawn, transform.brightness, transform.contrast);
    }

    imageops::replace(&mut canvas, &drawn, composition.offset_x, composition.offset_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::Rgba;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    fn rotated(degrees: i32) -> TransformState {
        TransformState {
            rotation: crate::domain::editing::RotationAngle::new(degrees),
            ..TransformState::default()
        }
    }

    #[test]
    fn landscape_fits_default_bounds() {
        let plan = plan(2400, 1600, &TransformState::default(), Some(Bounds::new(1200, 800)));
        assert_eq!((plan.canvas_width, plan.canvas_height), (1200, 800));
        assert!((plan.ratio - 0.5).abs() < 1e-9);
        assert_eq!((plan.offset_x, plan.offset_y), (0, 0));
    }

    #[test]
    fn rotation_swaps_canvas_bounding_box() {
        let plan = plan(1200, 800, &rotated(90), Some(Bounds::new(1200, 800)));
        // 800x1200 rotated box must fit 1200x800: ratio 800/1200.
        assert_eq!((plan.canvas_width, plan.canvas_height), (533, 800));
        assert_eq!((plan.drawn_width, plan.drawn_height), (800, 533));
    }

    #[test]
    fn small_images_are_never_upscaled() {
        let plan = plan(300, 200, &TransformState::default(), Some(Bounds::new(1200, 800)));
        assert!((plan.ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!((plan.canvas_width, plan.canvas_height), (300, 200));
    }

    #[test]
    fn no_bounds_keeps_native_resolution() {
        let plan = plan(5000, 3000, &rotated(270), None);
        assert_eq!((plan.canvas_width, plan.canvas_height), (3000, 5000));
    }

    #[test]
    fn zoom_out_centers_smaller_drawing() {
        let mut transform = TransformState::default();
        for _ in 0..5 {
            transform.zoom_out();
        }
        let plan = plan(100, 50, &transform, None);
        assert_eq!((plan.canvas_width, plan.canvas_height), (100, 50));
        assert_eq!((plan.drawn_width, plan.drawn_height), (50, 25));
        assert_eq!((plan.offset_x, plan.offset_y), (25, 12));
    }

    #[test]
    fn zoom_in_crops_centered_window() {
        let mut transform = TransformState::default();
        for _ in 0..10 {
            transform.zoom_in();
        }
        let plan = plan(100, 60, &transform, None);
        assert_eq!(
            plan.window,
            SourceWindow {
                x: 25,
                y: 15,
                width: 50,
                height: 30
            }
        );
        assert_eq!((plan.drawn_width, plan.drawn_height), (100, 60));
        assert_eq!((plan.offset_x, plan.offset_y), (0, 0));
    }

    #[test]
    fn canvas_is_at_least_one_pixel() {
        let plan = plan(10_000, 1, &TransformState::default(), Some(Bounds::new(100, 100)));
        assert_eq!((plan.canvas_width, plan.canvas_height), (100, 1));
    }

    #[test]
    fn render_rotated_output_matches_canvas() {
        let image = solid(40, 20, [10, 20, 30, 255]);
        let out = render(&image, &rotated(90), Some(Bounds::new(1200, 800)));
        assert_eq!(out.dimensions(), (20, 40));
        assert_eq!(out.get_pixel(10, 20).0, [10, 20, 30, 255]);
    }

    #[test]
    fn render_zoomed_out_leaves_transparent_border() {
        let image = solid(20, 20, [255, 0, 0, 255]);
        let mut transform = TransformState::default();
        for _ in 0..5 {
            transform.zoom_out();
        }
        let out = render(&image, &transform, None);
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
        assert_eq!(out.get_pixel(10, 10).0, [255, 0, 0, 255]);
    }

    #[test]
    fn render_flip_mirrors_in_image_axes() {
        let mut buffer = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 255]));
        buffer.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        let image = DynamicImage::ImageRgba8(buffer);

        let mut transform = TransformState::default();
        transform.flip_horizontal();
        let out = render(&image, &transform, None);
        assert_eq!(out.get_pixel(3, 0).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn render_flips_before_rotating() {
        let mut buffer = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        buffer.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        let image = DynamicImage::ImageRgba8(buffer);

        let mut transform = TransformState::default();
        transform.rotate_right();
        transform.flip_horizontal();
        let out = render(&image, &transform, None);

        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn render_without_filters_keeps_source_pixels() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(3, 2, |x, y| {
            Rgba([(x * 70) as u8, (y * 90) as u8, 33, 200])
        }));
        let out = render(&image, &TransformState::default(), None);
        assert_eq!(out.as_raw(), image.to_rgba8().as_raw());
    }

    #[test]
    fn render_applies_brightness() {
        let image = solid(2, 2, [200, 100, 50, 255]);
        let mut transform = TransformState::default();
        transform.set_brightness(50);
        let out = render(&image, &transform, None);
        assert_eq!(out.get_pixel(1, 1).0, [100, 50, 25, 255]);
    }

    #[test]
    fn render_is_deterministic() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_fn(31, 17, |x, y| {
            Rgba([(x * 8) as u8, (y * 15) as u8, ((x + y) * 4) as u8, 255])
        }));
        let mut transform = TransformState::default();
        transform.rotate_left();
        transform.flip_vertical();
        transform.zoom_in();
        transform.set_contrast(140);

        let bounds = Some(Bounds::new(24, 24));
        assert_eq!(
            render(&image, &transform, bounds),
            render(&image, &transform, bounds)
        );
    }
}
