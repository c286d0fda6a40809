// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! On-disk workspace: the campus graph, the history and events logs, and
//! favorites

use crate::config::Config;
use crate::error::{Error, Result};
use crate::events::{self, Event};
use crate::favorites::Favorites;
use crate::graph::{CampusGraph, Route};
use crate::log::BoundedLog;
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Campus graph file name inside the data directory
pub const CAMPUS_FILE: &str = "campus.json";
/// Navigation history file name
pub const HISTORY_FILE: &str = "history.log";
/// Events log file name
pub const EVENTS_FILE: &str = "events.log";
/// Favorites file name
pub const FAVORITES_FILE: &str = "favorites.json";

/// Everything a command needs, loaded from one data directory
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    /// Campus map
    pub campus: CampusGraph,
    /// Navigation history
    pub history: BoundedLog,
    /// Events log
    pub events: BoundedLog,
    /// Favorite locations and routes
    pub favorites: Favorites,
}

impl Workspace {
    /// Load a workspace. Missing files fall back to the sample campus,
    /// an empty history, a seeded events log and no favorites.
    pub fn open(data_dir: &Path, config: &Config) -> Result<Self> {
        let campus = CampusGraph::load(&data_dir.join(CAMPUS_FILE))?;
        let history = BoundedLog::load_from_file(&data_dir.join(HISTORY_FILE), config.history_limit())?;

        let events_path = data_dir.join(EVENTS_FILE);
        let events = if events_path.exists() {
            BoundedLog::load_from_file(&events_path, config.events_limit())?
        } else {
            let mut log = BoundedLog::new(config.events_limit());
            log.extend(events::sample_events(Local::now().year()).iter().map(Event::encode));
            debug!("seeded {} sample events", log.len());
            log
        };

        let favorites = Favorites::load(&data_dir.join(FAVORITES_FILE))?;

        debug!(
            locations = campus.location_count(),
            history = history.len(),
            events = events.len(),
            favorites = favorites.locations.len() + favorites.routes.len(),
            "opened workspace at {}",
            data_dir.display()
        );

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            campus,
            history,
            events,
            favorites,
        })
    }

    /// Data directory this workspace was loaded from
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Write the campus, both logs and the favorites back to the data directory
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| Error::io(&self.data_dir, e))?;
        self.campus.save(&self.data_dir.join(CAMPUS_FILE))?;
        self.history.export_to_file(&self.data_dir.join(HISTORY_FILE))?;
        self.events.export_to_file(&self.data_dir.join(EVENTS_FILE))?;
        self.favorites.save(&self.data_dir.join(FAVORITES_FILE))?;
        Ok(())
    }

    /// Compute a route and, when one exists, append it to the history
    pub fn navigate(&mut self, start: &str, destination: &str) -> Route {
        let route = self.campus.shortest_path(start, destination);
        if route.is_found() {
            self.history.add(history_entry(start, destination));
            info!("{route}");
        }
        route
    }

    /// Validate and store an event
    pub fn add_event(&mut self, event: Event) -> Result<()> {
        if let Some(location) = &event.location {
            self.require_location(location)?;
        }
        self.events.add(event.encode());
        Ok(())
    }

    /// Mark a campus location as a favorite; `false` if it already was one
    pub fn add_favorite_location(&mut self, name: &str) -> Result<bool> {
        self.require_location(name)?;
        Ok(self.favorites.add_location(name))
    }

    /// Save a named route between two campus locations; `false` when an
    /// existing route of that name was replaced
    pub fn add_favorite_route(&mut self, name: &str, start: &str, end: &str) -> Result<bool> {
        self.require_location(start)?;
        self.require_location(end)?;
        self.favorites.add_route(name, start, end)
    }

    fn require_location(&self, name: &str) -> Result<()> {
        if self.campus.contains(name) {
            Ok(())
        } else {
            Err(Error::UnknownLocation {
                name: name.to_string(),
            })
        }
    }
}

/// History line for a navigation query
#[must_use]
pub fn history_entry(start: &str, destination: &str) -> String {
    format!("Path {start} -> {destination}")
}

/// Recover `(start, destination)` from a history line
#[must_use]
pub fn parse_history_entry(entry: &str) -> Option<(&str, &str)> {
    entry.strip_prefix("Path ")?.split_once(" -> ")
}
