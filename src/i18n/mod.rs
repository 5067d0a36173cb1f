// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translation files are embedded at build time from `assets/i18n/`. The active
//! locale comes from the CLI, the config file or the system, falling back to
//! `en-US` when none of them names an available bundle.

pub mod fluent;
