// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns its state, renders from it and reports events the application
//! turns into side effects.
//!
//! # Screens
//!
//! - [`home`] - Landing page with features, usage steps and a call to action
//! - [`uploader`] - Drop zone, inline validation errors and the image library
//! - [`image_editor`] - Rotate, flip, zoom and tone adjustments with export
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar above the home and upload screens
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod home;
pub mod image_editor;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod uploader;
