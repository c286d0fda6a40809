// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Favorite commands - save, list, remove and use favorite locations and routes

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use tracing::info;

/// Run favorite command
pub fn run(
    workspace: &mut Workspace,
    action: &str,
    name: Option<String>,
    from: Option<String>,
    to: Option<String>,
    color: bool,
) -> Result<()> {
    match action {
        "list" | "ls" => {
            let favorites = &workspace.favorites;
            if favorites.is_empty() {
                println!("No favorites yet. Use 'campusnav favorite add <location>' to add one.");
                return Ok(());
            }
            if !favorites.locations.is_empty() {
                println!("Favorite locations ({}):", favorites.locations.len());
                for location in &favorites.locations {
                    println!("  {}", location);
                }
            }
            if !favorites.routes.is_empty() {
                println!("Favorite routes ({}):", favorites.routes.len());
                for route in &favorites.routes {
                    println!("  {}", route);
                }
            }
        }

        "add" | "save" => {
            let name = name.ok_or_else(|| anyhow::anyhow!("Location or route name is required"))?;
            match (from, to) {
                (None, None) => {
                    if workspace.add_favorite_location(&name)? {
                        println!("Added {} to favorites", name);
                    } else {
                        println!("{} is already in your favorites", name);
                    }
                }
                (Some(from), Some(to)) => {
                    if workspace.add_favorite_route(&name, &from, &to)? {
                        println!("Saved favorite route {}: {} -> {}", name.trim(), from, to);
                    } else {
                        println!("Updated favorite route {}: {} -> {}", name.trim(), from, to);
                    }
                }
                _ => anyhow::bail!("--from and --to must be given together"),
            }
            workspace.save().context("Failed to save favorites")?;
        }

        "remove" | "rm" => {
            let name = name.ok_or_else(|| anyhow::anyhow!("Favorite name is required"))?;
            if !workspace.favorites.remove(&name) {
                anyhow::bail!("No favorite named {}", name);
            }
            workspace.save().context("Failed to save favorites")?;
            println!("Removed {} from favorites", name);
        }

        "route" | "use" => {
            let name = name.ok_or_else(|| anyhow::anyhow!("Favorite name is required"))?;
            let (start, destination) = if let Some(route) = workspace.favorites.route(&name) {
                (route.start.clone(), route.end.clone())
            } else if workspace.favorites.has_location(&name) {
                match (from, to) {
                    (None, Some(to)) => (name, to),
                    (Some(from), None) => (from, name),
                    _ => anyhow::bail!(
                        "Favorite location {} needs exactly one of --to (use as start) or --from (use as destination)",
                        name
                    ),
                }
            } else {
                anyhow::bail!("No favorite named {}", name);
            };
            info!("Using favorite {} -> {}", start, destination);
            super::route::run(workspace, &start, &destination, true, color)?;
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: list, add, remove, route", other);
        }
    }

    Ok(())
}
