// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Event commands - add and browse campus events

use crate::events::{self, Event, Month, DATE_FORMAT};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Run event command
pub fn run(
    workspace: &mut Workspace,
    action: &str,
    name: Option<String>,
    date: Option<String>,
    location: Option<String>,
    month: Option<String>,
) -> Result<()> {
    match action {
        "add" | "create" => {
            let name = name.ok_or_else(|| anyhow::anyhow!("Event name is required"))?;
            let date = date.ok_or_else(|| anyhow::anyhow!("Event date (YYYY-MM-DD) is required"))?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT)
                .with_context(|| format!("Invalid date: {}. Expected YYYY-MM-DD", date))?;

            let event = Event::new(&name, date, location.as_deref())?;
            let line = event.encode();
            workspace.add_event(event)?;
            workspace.save().context("Failed to save events")?;

            println!("Added event: {}", line);
        }

        "list" | "ls" => {
            let month = match month {
                Some(m) => m.parse::<Month>()?,
                None => Month::of(Local::now().date_naive()),
            };
            let by_day = events::events_in_month(&workspace.events, month);
            if by_day.is_empty() {
                println!("No events in {}", month);
                return Ok(());
            }
            println!("Events in {}:", month);
            for (day, day_events) in by_day {
                for event in day_events {
                    match &event.location {
                        Some(loc) => println!("  {:>2}  {} @ {}", day, event.name, loc),
                        None => println!("  {:>2}  {}", day, event.name),
                    }
                }
            }
        }

        "upcoming" => {
            let upcoming = events::upcoming(&workspace.events, Local::now().date_naive());
            if upcoming.is_empty() {
                println!("No upcoming events. Use 'campusnav event add' to create one.");
                return Ok(());
            }
            println!("Upcoming events ({}):", upcoming.len());
            for event in upcoming {
                println!("  {}", event);
            }
        }

        "search" | "find" => {
            let keyword = name.ok_or_else(|| anyhow::anyhow!("Search keyword is required"))?;
            let results = workspace.events.search(&keyword);
            if results.is_empty() {
                println!("No events match '{}'", keyword);
            }
            for entry in results {
                println!("  {}", entry);
            }
        }

        other => {
            anyhow::bail!("Unknown action: {}. Valid: add, list, upcoming, search", other);
        }
    }

    Ok(())
}
