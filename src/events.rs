// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Structured campus events stored in a [`BoundedLog`]
//!
//! The log stays type-agnostic; events cross into it as
//! `Name - YYYY-MM-DD` or `Name - YYYY-MM-DD - Location` strings.

use crate::error::{Error, Result};
use crate::log::BoundedLog;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Separator between the fields of an encoded event
pub const FIELD_SEPARATOR: &str = " - ";

/// Date layout used in encoded events
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A dated campus event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event title
    pub name: String,
    /// Day of the event
    pub date: NaiveDate,
    /// Where it takes place, if known
    pub location: Option<String>,
}

impl Event {
    /// Create an event; the name is trimmed, must not be empty and must not
    /// contain [`FIELD_SEPARATOR`]
    pub fn new(name: &str, date: NaiveDate, location: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::MissingField { field: "name" });
        }
        if name.contains(FIELD_SEPARATOR) {
            return Err(Error::InvalidEventName {
                name: name.to_string(),
            });
        }
        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from);
        Ok(Self {
            name: name.to_string(),
            date,
            location,
        })
    }

    /// Encode as a single log entry
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode a log entry
    pub fn parse(entry: &str) -> Result<Self> {
        let malformed = || Error::MalformedEvent {
            entry: entry.to_string(),
        };
        let mut parts = entry.split(FIELD_SEPARATOR);
        let name = parts.next().filter(|n| !n.trim().is_empty()).ok_or_else(malformed)?;
        let date = parts
            .next()
            .and_then(|d| NaiveDate::parse_from_str(d.trim(), DATE_FORMAT).ok())
            .ok_or_else(malformed)?;
        let rest: Vec<&str> = parts.collect();
        let location = if rest.is_empty() {
            None
        } else {
            Some(rest.join(FIELD_SEPARATOR))
        };
        Self::new(name, date, location.as_deref())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}",
            self.name,
            self.date.format(DATE_FORMAT)
        )?;
        if let Some(location) = &self.location {
            write!(f, "{FIELD_SEPARATOR}{location}")?;
        }
        Ok(())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    /// Year
    pub year: i32,
    /// Month number, 1-12
    pub month: u32,
}

impl Month {
    /// Month containing `date`
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls in this month
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for Month {
    type Err = Error;

    /// Parse `YYYY-MM`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonth {
            value: s.to_string(),
        };
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Decode every well-formed event in `log`, in stored order
#[must_use]
pub fn parse_all(log: &BoundedLog) -> Vec<Event> {
    log.iter()
        .filter_map(|entry| match Event::parse(entry) {
            Ok(event) => Some(event),
            Err(err) => {
                debug!("skipping log entry: {err}");
                None
            }
        })
        .collect()
}

/// Events of one month keyed by day of month
#[must_use]
pub fn events_in_month(log: &BoundedLog, month: Month) -> BTreeMap<u32, Vec<Event>> {
    let mut by_day: BTreeMap<u32, Vec<Event>> = BTreeMap::new();
    for event in parse_all(log) {
        if month.contains(event.date) {
            by_day.entry(event.date.day()).or_default().push(event);
        }
    }
    by_day
}

/// Events on or after `from`, sorted by date (stored order within a day)
#[must_use]
pub fn upcoming(log: &BoundedLog, from: NaiveDate) -> Vec<Event> {
    let mut events: Vec<Event> = parse_all(log)
        .into_iter()
        .filter(|e| e.date >= from)
        .collect();
    events.sort_by_key(|e| e.date);
    events
}

/// Starter events for a fresh events log, dated in `year`
#[must_use]
pub fn sample_events(year: i32) -> Vec<Event> {
    [
        ("Orientation Day", 1, 15, "Auditorium"),
        ("Career Fair", 3, 10, "Admin Block"),
        ("Hackathon", 4, 22, "IT Faculty"),
        ("Guest Lecture", 9, 5, "Science Faculty"),
    ]
    .into_iter()
    .filter_map(|(name, month, day, location)| {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Event {
            name: name.to_string(),
            date,
            location: Some(location.to_string()),
        })
    })
    .collect()
}
