// SPDX-License-Identifier: MPL-2.0
//! Style functions shared by the UI components.

pub mod button;
pub mod container;
