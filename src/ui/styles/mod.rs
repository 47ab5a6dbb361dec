// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles built on the design tokens.

pub mod button;
pub mod container;
pub mod text_input;
