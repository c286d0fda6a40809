// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! History commands - list, search, clear, export and replay navigation history

use crate::workspace::{parse_history_entry, Workspace};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Run history command
pub fn run(workspace: &mut Workspace, action: &str, arg: Option<String>, color: bool) -> Result<()> {
    match action {
        "list" | "ls" => {
            if workspace.history.is_empty() {
                println!("No history yet. Use 'campusnav route <start> <destination>' to add some.");
                return Ok(());
            }
            println!("History ({}):", workspace.history.len());
            for (i, entry) in workspace.history.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, entry);
            }
        }

        "search" | "find" => {
            let keyword = arg.ok_or_else(|| anyhow::anyhow!("Search keyword is required"))?;
            let results = workspace.history.search(&keyword);
            if results.is_empty() {
                println!("No history entries match '{}'", keyword);
            } else {
                println!("Matches for '{}' ({}):", keyword, results.len());
                for entry in results {
                    println!("  {}", entry);
                }
            }
        }

        "clear" => {
            let removed = workspace.history.len();
            workspace.history.clear();
            workspace.save().context("Failed to save cleared history")?;
            println!("Cleared {} history entries", removed);
        }

        "export" => {
            let path: PathBuf = arg
                .ok_or_else(|| anyhow::anyhow!("Output file is required"))?
                .into();
            workspace
                .history
                .export_to_file(&path)
                .with_context(|| format!("Failed to export history to {}", path.display()))?;
            println!("History exported to {}", path.display());
        }

        "replay" | "reuse" => {
            let index: usize = arg
                .ok_or_else(|| anyhow::anyhow!("History entry number is required"))?
                .parse()
                .context("History entry number must be a positive integer")?;
            let entry = index
                .checked_sub(1)
                .and_then(|i| workspace.history.iter().nth(i))
                .map(String::from)
                .ok_or_else(|| anyhow::anyhow!("No history entry #{}", index))?;
            let (start, destination) = parse_history_entry(&entry)
                .ok_or_else(|| anyhow::anyhow!("History entry #{} is not a route: {}", index, entry))?;
            info!("Replaying history entry #{}", index);
            super::route::run(workspace, start, destination, true, color)?;
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: list, search, clear, export, replay", other);
        }
    }

    Ok(())
}
