// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! - [`RotationAngle`]: quarter-turn rotation
//! - [`ScaleFactor`]: zoom multiplier in 0.1 steps
//! - [`FilterPercent`]: brightness/contrast percentage
//! - [`TransformState`]: everything the editor applies to an image

pub mod newtypes;
pub mod transform;

pub use newtypes::{FilterPercent, RotationAngle, ScaleFactor};
pub use transform::TransformState;
