// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Campusnav library - shortest routes around campus and a bounded record
//! of where you have been
//!
//! The two core pieces are independent of each other:
//!
//! - [`graph::CampusGraph`] holds a weighted undirected map of named
//!   locations and answers shortest-path queries with Dijkstra's algorithm.
//! - [`log::BoundedLog`] is an ordered, capacity-bounded store of text
//!   entries with FIFO eviction, used for navigation history and events.
//!
//! [`workspace::Workspace`] ties them, plus the user's
//! [`favorites::Favorites`], to a data directory and is passed
//! explicitly to whatever needs it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod favorites;
pub mod graph;
pub mod log;
pub mod workspace;

pub use error::{Error, Result};
pub use events::Event;
pub use favorites::{FavoriteRoute, Favorites};
pub use graph::{CampusGraph, Route};
pub use log::BoundedLog;
pub use workspace::Workspace;

/// Prelude for common imports
pub mod prelude {
    pub use crate::events::{Event, Month};
    pub use crate::favorites::{FavoriteRoute, Favorites};
    pub use crate::graph::{CampusGraph, Route};
    pub use crate::log::BoundedLog;
    pub use crate::workspace::Workspace;
    pub use anyhow::{Context, Result};
}
