// SPDX-License-Identifier: MPL-2.0
//! Style functions shared by the views.

pub mod button;
pub mod container;
