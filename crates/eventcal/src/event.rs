//! Per-day event markers, keyed by day identifier.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::date::CalendarDate;
use crate::error::Result;

/// The two marker flags a day can carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub has_marker_a: bool,
    #[serde(default)]
    pub has_marker_b: bool,
}

impl Event {
    pub fn new(has_marker_a: bool, has_marker_b: bool) -> Self {
        Self {
            has_marker_a,
            has_marker_b,
        }
    }
}

/// Day identifier (`YYYY-MM-DD`) to event. Replaced as a whole whenever a
/// fetch completes.
pub type EventMap = HashMap<String, Event>;

/// Parses a JSON object of day identifier to event.
///
/// Keys that are not valid day identifiers would never match a rendered day,
/// so they are dropped here with a warning. Keys are normalized to the
/// canonical identifier form.
pub fn parse_event_map(json: &str) -> Result<EventMap> {
    let raw: HashMap<String, Event> = serde_json::from_str(json)?;
    let mut events = EventMap::with_capacity(raw.len());

    for (key, event) in raw {
        match CalendarDate::from_day_id(&key) {
            Ok(date) => {
                events.insert(date.day_id(), event);
            }
            Err(err) => {
                warn!("dropping event fixture entry: {err}");
            }
        }
    }

    Ok(events)
}

/// Reads and parses an event fixture file.
pub fn load_event_map(path: impl AsRef<Path>) -> Result<EventMap> {
    let json = std::fs::read_to_string(path)?;
    parse_event_map(&json)
}
