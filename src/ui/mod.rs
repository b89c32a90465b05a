// SPDX-License-Identifier: MPL-2.0
//! Iced-facing UI layer.

pub mod clip_view;
