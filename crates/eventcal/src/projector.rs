//! Day cell view models.
//!
//! [`DayCellProjector`] turns one calendar day plus the screen state into the
//! [`DayCell`] the presentation layer draws. It is a pure function of its
//! inputs and never fails: a day without an event entry simply shows no
//! markers.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::event::EventMap;
use crate::selection::SelectionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Muted,
    Selected,
    Normal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Selected,
    Today,
    None,
}

/// Which cell style draws a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Day,
    SelectedDay,
}

/// How the two event markers of a day are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Marker A wins: once it is shown, marker B is not looked at.
    #[default]
    FirstMatch,

    /// Both markers are evaluated on their own.
    Independent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub text: String,
    pub text_color: TextColor,
    pub background: Background,
    pub marker_a: bool,
    pub marker_b: bool,
    pub style: StyleKey,
}

impl DayCell {
    pub fn has_markers(&self) -> bool {
        self.marker_a || self.marker_b
    }
}

pub struct DayCellProjector<'a> {
    today: CalendarDate,
    selection: &'a SelectionState,
    events: &'a EventMap,
    marker_policy: MarkerPolicy,
}

impl<'a> DayCellProjector<'a> {
    pub fn new(
        today: CalendarDate,
        selection: &'a SelectionState,
        events: &'a EventMap,
        marker_policy: MarkerPolicy,
    ) -> Self {
        Self {
            today,
            selection,
            events,
            marker_policy,
        }
    }

    pub fn project(&self, date: CalendarDate) -> DayCell {
        let is_selected = self.selection.contains(&date);
        let is_today = date == self.today;

        let (mut text_color, background) = if is_selected {
            (TextColor::Selected, Background::Selected)
        } else if is_today {
            (TextColor::Normal, Background::Today)
        } else {
            (TextColor::Normal, Background::None)
        };

        // past days are muted whatever their selection state
        if date < self.today {
            text_color = TextColor::Muted;
        }

        let mut cell = DayCell {
            date,
            text: date.day().to_string(),
            text_color,
            background,
            marker_a: false,
            marker_b: false,
            style: if is_selected {
                StyleKey::SelectedDay
            } else {
                StyleKey::Day
            },
        };

        let Some(event) = self.events.get(&date.day_id()) else {
            return cell;
        };

        if event.has_marker_a {
            cell.marker_a = true;
            cell.text_color = TextColor::Muted;
            if self.marker_policy == MarkerPolicy::FirstMatch {
                return cell;
            }
        }

        if event.has_marker_b {
            cell.marker_b = true;
        }

        cell
    }
}
