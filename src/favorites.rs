// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Favorite locations and named favorite routes
//!
//! Stored as one JSON document:
//! `{"locations": [..], "routes": [{"name": .., "start": .., "end": ..}]}`.
//! Whether the locations exist on the campus is checked by
//! [`crate::workspace::Workspace`], which owns the graph.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A saved start/end pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRoute {
    /// Unique name of the route
    pub name: String,
    /// Starting location
    pub start: String,
    /// Destination
    pub end: String,
}

impl fmt::Display for FavoriteRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.start, self.end)
    }
}

/// Favorite locations and routes, in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Favorites {
    /// Favorite location names
    pub locations: Vec<String>,
    /// Named favorite routes
    pub routes: Vec<FavoriteRoute>,
}

impl Favorites {
    /// Load favorites from a JSON file; a missing file yields none
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("{} not found, starting without favorites", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save favorites as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|e| Error::io(path, e))
    }

    /// Add a location; returns `false` if it was already a favorite
    pub fn add_location(&mut self, name: &str) -> bool {
        if self.has_location(name) {
            return false;
        }
        self.locations.push(name.to_string());
        true
    }

    /// Save a named route, replacing any route with the same name.
    ///
    /// Returns `true` when the name is new.
    pub fn add_route(&mut self, name: &str, start: &str, end: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingField { field: "name" });
        }
        let route = FavoriteRoute {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        };
        match self.routes.iter_mut().find(|r| r.name == name) {
            Some(existing) => {
                *existing = route;
                Ok(false)
            }
            None => {
                self.routes.push(route);
                Ok(true)
            }
        }
    }

    /// Remove a favorite route or location named `name`.
    ///
    /// Routes are matched first. Returns `false` if nothing matched.
    pub fn remove(&mut self, name: &str) -> bool {
        if let Some(pos) = self.routes.iter().position(|r| r.name == name) {
            self.routes.remove(pos);
            return true;
        }
        if let Some(pos) = self.locations.iter().position(|l| l == name) {
            self.locations.remove(pos);
            return true;
        }
        false
    }

    /// Look up a favorite route by name
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&FavoriteRoute> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Whether `name` is a favorite location
    #[must_use]
    pub fn has_location(&self, name: &str) -> bool {
        self.locations.iter().any(|l| l == name)
    }

    /// Check if there are no favorites at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_location_once() {
        let mut favorites = Favorites::default();
        assert!(favorites.add_location("Library"));
        assert!(!favorites.add_location("Library"));
        assert_eq!(favorites.locations, ["Library"]);
    }

    #[test]
    fn test_add_route_replaces_by_name() {
        let mut favorites = Favorites::default();
        assert!(favorites.add_route("Lunch", "Library", "Canteen").unwrap());
        assert!(!favorites.add_route(" Lunch ", "Hostel", "Canteen").unwrap());

        assert_eq!(favorites.routes.len(), 1);
        assert_eq!(favorites.route("Lunch").unwrap().start, "Hostel");
        assert_eq!(
            favorites.route("Lunch").unwrap().to_string(),
            "Lunch: Hostel -> Canteen"
        );
    }

    #[test]
    fn test_add_route_requires_name() {
        let mut favorites = Favorites::default();
        assert!(matches!(
            favorites.add_route("  ", "Library", "Canteen"),
            Err(Error::MissingField { field: "name" })
        ));
    }

    #[test]
    fn test_remove_prefers_routes() {
        let mut favorites = Favorites::default();
        favorites.add_location("Gym");
        favorites.add_route("Gym", "Hostel", "Gym").unwrap();

        assert!(favorites.remove("Gym"));
        assert!(favorites.routes.is_empty());
        assert_eq!(favorites.locations, ["Gym"]);

        assert!(favorites.remove("Gym"));
        assert!(favorites.is_empty());
        assert!(!favorites.remove("Gym"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("nested").join("favorites.json");
        let mut favorites = Favorites::default();
        favorites.add_location("Library");
        favorites.add_route("Home", "Main Gate", "Hostel").unwrap();

        favorites.save(&file).unwrap();
        assert_eq!(Favorites::load(&file).unwrap(), favorites);
    }

    #[test]
    fn test_load_missing_and_partial() {
        let dir = TempDir::new().unwrap();
        assert!(Favorites::load(&dir.path().join("none.json")).unwrap().is_empty());

        let file = dir.path().join("favorites.json");
        fs::write(&file, r#"{"locations": ["Canteen"]}"#).unwrap();
        let favorites = Favorites::load(&file).unwrap();
        assert_eq!(favorites.locations, ["Canteen"]);
        assert!(favorites.routes.is_empty());

        fs::write(&file, "not json").unwrap();
        assert!(matches!(Favorites::load(&file), Err(Error::Json { .. })));
    }
}
