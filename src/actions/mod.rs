// SPDX-License-Identifier: MPL-2.0
//! Leaf actions triggered from the viewer toolbar and the contact section.
//!
//! None of these touch navigation state. Each one ends in a notification
//! (or nothing, when the user cancels a dialog).

pub mod contact;
pub mod download;
pub mod print;
pub mod share;
