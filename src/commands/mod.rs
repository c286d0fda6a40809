// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod event;
pub mod export;
pub mod favorite;
pub mod history;
pub mod locations;
pub mod route;
