// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Map export command - renders the campus map, optionally with a route

use crate::graph::{CampusGraph, Route};
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format (campus store plus the highlighted route)
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown export format: {}. Supported: dot, json", s),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

/// Output file for `format`, adding the format's extension when `path` has none
#[must_use]
pub fn output_path(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Render the campus in `format`, highlighting `route` when given
pub fn render(campus: &CampusGraph, route: Option<&Route>, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Dot => Ok(campus.to_dot(route)),
        ExportFormat::Json => {
            let value = serde_json::json!({
                "campus": campus.to_store(),
                "route": route,
            });
            serde_json::to_string_pretty(&value).context("Failed to serialize map to JSON")
        }
    }
}

/// Run the map command
pub fn run(
    campus: &CampusGraph,
    format: &str,
    from: Option<String>,
    to: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    info!("Exporting map to {}", format);
    let export_format: ExportFormat = format.parse()?;

    let route = match (from, to) {
        (Some(from), Some(to)) => {
            let route = campus.shortest_path(&from, &to);
            if !route.is_found() {
                eprintln!("Warning: no route between {from} and {to}; exporting plain map.");
            }
            Some(route).filter(Route::is_found)
        }
        (None, None) => None,
        _ => anyhow::bail!("--from and --to must be given together"),
    };

    let content = render(campus, route.as_ref(), export_format)?;

    match output {
        Some(path) => {
            let path = output_path(&path, export_format);
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
        }
    }

    Ok(())
}
