// SPDX-License-Identifier: MPL-2.0
//! Centralized style functions built from the design tokens.

pub mod button;
pub mod container;
