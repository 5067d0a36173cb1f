// SPDX-License-Identifier: MPL-2.0
//! The full set of edits applied to the image in the editor.

use super::newtypes::{FilterPercent, RotationAngle, ScaleFactor};

/// Rotation, zoom, mirroring and tone filters, combined into one render.
///
/// The state is ephemeral: it lives as long as the editor screen and is
/// discarded on reset or navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransformState {
    pub rotation: RotationAngle,
    pub scale: ScaleFactor,
    /// Mirror left to right.
    pub flip_x: bool,
    /// Mirror top to bottom.
    pub flip_y: bool,
    pub brightness: FilterPercent,
    pub contrast: FilterPercent,
}

impl TransformState {
    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.rotate_counterclockwise();
    }

    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.rotate_clockwise();
    }

    pub fn flip_horizontal(&mut self) {
        self.flip_x = !self.flip_x;
    }

    pub fn flip_vertical(&mut self) {
        self.flip_y = !self.flip_y;
    }

    pub fn zoom_in(&mut self) {
        self.scale = self.scale.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.scale = self.scale.zoom_out();
    }

    pub fn set_brightness(&mut self, percent: i32) {
        self.brightness = FilterPercent::new(percent);
    }

    pub fn set_contrast(&mut self, percent: i32) {
        self.contrast = FilterPercent::new(percent);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when rendering would reproduce the source pixels unchanged.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// True when brightness or contrast differ from neutral.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.brightness.is_neutral() || !self.contrast.is_neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let state = TransformState::default();
        assert!(state.is_identity());
        assert!(!state.has_filters());
        assert_eq!(state.brightness.value(), 100);
        assert_eq!(state.contrast.value(), 100);
    }

    #[test]
    fn flips_toggle() {
        let mut state = TransformState::default();
        state.flip_horizontal();
        assert!(state.flip_x);
        state.flip_horizontal();
        assert!(!state.flip_x);
        state.flip_vertical();
        assert!(state.flip_y);
    }

    #[test]
    fn rotate_left_then_right_is_identity() {
        let mut state = TransformState::default();
        state.rotate_left();
        assert_eq!(state.rotation.degrees(), 270);
        state.rotate_right();
        assert!(state.is_identity());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = TransformState::default();
        state.rotate_right();
        state.zoom_in();
        state.flip_vertical();
        state.set_brightness(150);
        state.set_contrast(20);
        assert!(state.has_filters());

        state.reset();
        assert!(state.is_identity());
    }

    #[test]
    fn filters_clamp_to_range() {
        let mut state = TransformState::default();
        state.set_brightness(400);
        state.set_contrast(-5);
        assert_eq!(state.brightness.value(), 200);
        assert_eq!(state.contrast.value(), 0);
    }
}
