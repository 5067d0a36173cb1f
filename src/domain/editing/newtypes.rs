// SPDX-License-Identifier: MPL-2.0
//! Value objects for the editor transform.
//!
//! Each type keeps its value inside the range the editor supports, so a
//! [`TransformState`](super::TransformState) can never describe an invalid render.

// =============================================================================
// RotationAngle
// =============================================================================

/// Rotation in clockwise quarter turns: 0°, 90°, 180° or 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

impl RotationAngle {
    pub const ZERO: Self = Self(0);

    /// Normalizes any signed angle to a quarter turn in `0..360`.
    ///
    /// Values that are not a multiple of 90 are rounded down to one.
    #[must_use]
    pub fn new(degrees: i32) -> Self {
        let wrapped = degrees.rem_euclid(360);
        Self(u16::try_from((wrapped / 90) * 90).unwrap_or(0))
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Number of clockwise quarter turns (0 to 3).
    #[must_use]
    pub fn quarter_turns(self) -> u8 {
        u8::try_from(self.0 / 90).unwrap_or(0)
    }

    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    #[must_use]
    pub fn rotate_counterclockwise(self) -> Self {
        Self((self.0 + 270) % 360)
    }

    /// Returns true when width and height trade places (90° and 270°).
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.0 == 90 || self.0 == 270
    }
}

// =============================================================================
// ScaleFactor
// =============================================================================

/// Zoom bounds, stored in tenths so repeated steps never drift.
pub mod scale_bounds {
    /// 0.1×, the floor reached by zooming out.
    pub const MIN_TENTHS: u16 = 1;
    /// 10×.
    pub const MAX_TENTHS: u16 = 100;
    /// 1.0×.
    pub const DEFAULT_TENTHS: u16 = 10;
    /// One zoom step, 0.1×.
    pub const STEP_TENTHS: u16 = 1;
}

/// Zoom multiplier applied on top of the fit-to-bounds ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleFactor(u16);

impl ScaleFactor {
    /// Creates a factor from a float, rounded to the nearest 0.1 and clamped.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let tenths = (factor * 10.0).round();
        let clamped = tenths.clamp(
            f32::from(scale_bounds::MIN_TENTHS),
            f32::from(scale_bounds::MAX_TENTHS),
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths = clamped as u16;
        Self(tenths)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + scale_bounds::STEP_TENTHS).min(scale_bounds::MAX_TENTHS))
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(
            self.0
                .saturating_sub(scale_bounds::STEP_TENTHS)
                .max(scale_bounds::MIN_TENTHS),
        )
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN_TENTHS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX_TENTHS
    }

    /// Whole percent, for display ("120%").
    #[must_use]
    pub fn percent(self) -> u16 {
        self.0 * 10
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT_TENTHS)
    }
}

// =============================================================================
// FilterPercent
// =============================================================================

/// Brightness and contrast range, where 100 leaves pixels untouched.
pub mod filter_bounds {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 200;
    pub const NEUTRAL: u8 = 100;
}

/// Percentage for a CSS-style brightness or contrast filter (0 to 200).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterPercent(u8);

impl FilterPercent {
    #[must_use]
    pub fn new(percent: i32) -> Self {
        let clamped = percent.clamp(i32::from(filter_bounds::MIN), i32::from(filter_bounds::MAX));
        Self(u8::try_from(clamped).unwrap_or(filter_bounds::NEUTRAL))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Multiplier used by the filter (100% is 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    #[must_use]
    pub fn is_neutral(self) -> bool {
        self.0 == filter_bounds::NEUTRAL
    }
}

impl Default for FilterPercent {
    fn default() -> Self {
        Self(filter_bounds::NEUTRAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_normalizes() {
        assert_eq!(RotationAngle::new(0).degrees(), 0);
        assert_eq!(RotationAngle::new(45).degrees(), 0);
        assert_eq!(RotationAngle::new(360).degrees(), 0);
        assert_eq!(RotationAngle::new(450).degrees(), 90);
        assert_eq!(RotationAngle::new(-90).degrees(), 270);
    }

    #[test]
    fn rotation_turns_both_ways() {
        assert_eq!(RotationAngle::ZERO.rotate_clockwise().degrees(), 90);
        assert_eq!(RotationAngle::ZERO.rotate_counterclockwise().degrees(), 270);
        assert_eq!(RotationAngle::new(270).rotate_clockwise(), RotationAngle::ZERO);
    }

    #[test]
    fn four_turns_return_to_start() {
        let mut angle = RotationAngle::new(90);
        for _ in 0..4 {
            angle = angle.rotate_counterclockwise();
        }
        assert_eq!(angle.degrees(), 90);
    }

    #[test]
    fn rotation_swaps_dimensions_on_odd_quarter_turns() {
        assert!(!RotationAngle::new(0).swaps_dimensions());
        assert!(RotationAngle::new(90).swaps_dimensions());
        assert!(!RotationAngle::new(180).swaps_dimensions());
        assert!(RotationAngle::new(270).swaps_dimensions());
        assert_eq!(RotationAngle::new(270).quarter_turns(), 3);
    }

    #[test]
    fn scale_steps_by_a_tenth() {
        let scale = ScaleFactor::default().zoom_in().zoom_in();
        assert_eq!(scale.percent(), 120);
        assert!((scale.value() - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn scale_zoom_out_stops_at_floor() {
        let mut scale = ScaleFactor::default();
        for _ in 0..20 {
            scale = scale.zoom_out();
        }
        assert!(scale.is_min());
        assert!((scale.value() - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn scale_zoom_in_stops_at_ceiling() {
        let mut scale = ScaleFactor::new(9.9);
        scale = scale.zoom_in().zoom_in();
        assert!(scale.is_max());
        assert_eq!(scale.percent(), 1000);
    }

    #[test]
    fn scale_new_rounds_and_clamps() {
        assert_eq!(ScaleFactor::new(1.04).percent(), 100);
        assert_eq!(ScaleFactor::new(0.0).percent(), 10);
        assert_eq!(ScaleFactor::new(50.0).percent(), 1000);
    }

    #[test]
    fn filter_percent_clamps() {
        assert_eq!(FilterPercent::new(-20).value(), 0);
        assert_eq!(FilterPercent::new(250).value(), 200);
        assert_eq!(FilterPercent::new(150).value(), 150);
    }

    #[test]
    fn filter_percent_default_is_neutral() {
        let filter = FilterPercent::default();
        assert!(filter.is_neutral());
        assert!((filter.as_factor() - 1.0).abs() < f32::EPSILON);
    }
}
