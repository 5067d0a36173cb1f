// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value types with no dependencies beyond `std`.
//!
//! - [`editing`]: the editor transform ([`TransformState`](editing::TransformState)
//!   and its value objects)

pub mod editing;
