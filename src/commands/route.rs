// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route command - shortest path between two campus locations

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

/// Run the route command
pub fn run(
    workspace: &mut Workspace,
    start: &str,
    destination: &str,
    record: bool,
    color: bool,
) -> Result<()> {
    info!("Routing {} -> {}", start, destination);

    for name in [start, destination] {
        if !workspace.campus.contains(name) {
            eprintln!("Unknown location: {name}. Run 'campusnav locations' to list them.");
        }
    }

    let route = if record {
        workspace.navigate(start, destination)
    } else {
        workspace.campus.shortest_path(start, destination)
    };

    if !route.is_found() {
        println!("No route found between {} and {}", start, destination);
        return Ok(());
    }

    let joined = route.path.join(" -> ");
    if color {
        println!("{}", joined.green().bold());
    } else {
        println!("{joined}");
    }
    println!("Distance: {} m ({} stops)", route.distance, route.hops());

    for (from, to) in route.legs() {
        let leg = workspace.campus.distance_between(from, to).unwrap_or_default();
        println!("  {from} -> {to}: {leg} m");
    }

    if record {
        workspace
            .save()
            .with_context(|| format!("Failed to save history to {}", workspace.data_dir().display()))?;
    }

    Ok(())
}
