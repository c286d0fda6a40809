// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Locations command - list the campus map

use crate::graph::CampusGraph;
use anyhow::Result;

/// Run the locations command
pub fn run(campus: &CampusGraph, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&campus.to_store())?);
        return Ok(());
    }

    if campus.is_empty() {
        println!("No locations defined.");
        return Ok(());
    }

    println!("Locations ({}):", campus.location_count());
    for name in campus.locations() {
        println!("  {name}");
        for (neighbor, distance) in campus.neighbors(name) {
            println!("    -> {neighbor} ({distance} m)");
        }
    }

    Ok(())
}
