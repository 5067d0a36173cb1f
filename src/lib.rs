// SPDX-License-Identifier: MPL-2.0
//! `iced_drop` is an image upload and basic editing tool built with the Iced
//! GUI framework.
//!
//! Images are added through a native picker or by dropping them on the
//! window, validated by type and size, and listed in a grid or table. Any
//! image can be opened in the editor, rotated, flipped, zoomed and adjusted
//! in brightness and contrast, then exported as a new JPEG.

#![doc(html_root_url = "https://docs.rs/iced_drop/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod media;
pub mod registry;
pub mod ui;
pub mod upload;
