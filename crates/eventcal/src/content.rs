//! Full calendar content: every visible month with its projected day cells.

use std::ops::RangeInclusive;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::CalendarDate;
use crate::event::EventMap;
use crate::projector::{DayCell, DayCellProjector, MarkerPolicy};
use crate::selection::SelectionState;

/// Last day that can be scrolled to, as (year, month, day).
pub const DEFAULT_HORIZON: (i32, u32, u32) = (2030, 12, 31);

pub const INTER_MONTH_SPACING: f32 = 16.0;
pub const VERTICAL_DAY_MARGIN: f32 = 8.0;
pub const HORIZONTAL_DAY_MARGIN: f32 = 8.0;

/// Horizontal inset subtracted from the shorter view side to get a month's
/// width.
pub const MONTH_WIDTH_INSET: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthsLayout {
    Horizontal { month_width: f32 },
    Vertical,
}

impl MonthsLayout {
    /// Horizontal paging with months sized to fit the shorter side of the
    /// view.
    pub fn horizontal_for_view(width: f32, height: f32) -> Self {
        MonthsLayout::Horizontal {
            month_width: (width.min(height) - MONTH_WIDTH_INSET).max(0.0),
        }
    }
}

impl Default for MonthsLayout {
    fn default() -> Self {
        MonthsLayout::Horizontal { month_width: 320.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub horizon: CalendarDate,
    pub first_weekday: Weekday,
    pub layout: MonthsLayout,
    pub inter_month_spacing: f32,
    pub vertical_day_margin: f32,
    pub horizontal_day_margin: f32,
    pub marker_policy: MarkerPolicy,
}

impl Default for ContentConfig {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_HORIZON;
        Self {
            horizon: CalendarDate::from_ymd(year, month, day).expect("valid horizon date"),
            first_weekday: Weekday::Sun,
            layout: MonthsLayout::default(),
            inter_month_spacing: INTER_MONTH_SPACING,
            vertical_day_margin: VERTICAL_DAY_MARGIN,
            horizontal_day_margin: HORIZONTAL_DAY_MARGIN,
            marker_policy: MarkerPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSection {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// Empty slots before the 1st in the first week row.
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthSection {
    /// Week rows of seven slots, `None` for slots outside the month.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut weeks = Vec::with_capacity(6);
        let mut row: [Option<&DayCell>; 7] = [None; 7];
        let mut col = self.leading_blanks as usize % 7;

        for cell in &self.days {
            row[col] = Some(cell);
            col += 1;
            if col == 7 {
                weeks.push(row);
                row = [None; 7];
                col = 0;
            }
        }

        if col != 0 {
            weeks.push(row);
        }

        weeks
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarContent {
    pub visible_range: RangeInclusive<CalendarDate>,
    pub first_weekday: Weekday,
    pub layout: MonthsLayout,
    pub inter_month_spacing: f32,
    pub vertical_day_margin: f32,
    pub horizontal_day_margin: f32,
    pub months: Vec<MonthSection>,
}

impl CalendarContent {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn day_count(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }

    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        self.months
            .iter()
            .find(|m| m.year == date.year() && m.month == date.month())
            .and_then(|m| m.days.get(date.day() as usize - 1))
    }

    /// Column headers in display order.
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        weekday_labels(self.first_weekday)
    }
}

pub fn weekday_labels(first_weekday: Weekday) -> [&'static str; 7] {
    const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let start = first_weekday.num_days_from_monday() as usize;
    std::array::from_fn(|i| NAMES[(start + i) % 7])
}

/// Rebuilds the whole visible calendar from the current screen state.
///
/// Months are emitted whole, from the first of `today`'s month through the
/// last day of the horizon's month, so earlier days of the current month are
/// shown (muted). A horizon before `today` yields empty content.
pub struct CalendarContentBuilder<'a> {
    config: &'a ContentConfig,
    today: CalendarDate,
    selection: &'a SelectionState,
    events: &'a EventMap,
}

impl<'a> CalendarContentBuilder<'a> {
    pub fn new(
        config: &'a ContentConfig,
        today: CalendarDate,
        selection: &'a SelectionState,
        events: &'a EventMap,
    ) -> Self {
        Self {
            config,
            today,
            selection,
            events,
        }
    }

    #[profiling::function]
    pub fn build(&self) -> CalendarContent {
        let config = self.config;
        let mut content = CalendarContent {
            visible_range: self.today..=config.horizon,
            first_weekday: config.first_weekday,
            layout: config.layout,
            inter_month_spacing: config.inter_month_spacing,
            vertical_day_margin: config.vertical_day_margin,
            horizontal_day_margin: config.horizontal_day_margin,
            months: Vec::new(),
        };

        if config.horizon < self.today {
            debug!(
                "horizon {} is before today {}, nothing to show",
                config.horizon, self.today
            );
            return content;
        }

        let projector =
            DayCellProjector::new(self.today, self.selection, self.events, config.marker_policy);
        let last = config.horizon.last_of_month();
        let mut date = self.today.first_of_month();

        loop {
            if date.day() == 1 {
                content.months.push(MonthSection {
                    year: date.year(),
                    month: date.month(),
                    title: date.month_title(),
                    leading_blanks: date.weekday_offset(config.first_weekday),
                    days: Vec::with_capacity(31),
                });
            }

            if let Some(section) = content.months.last_mut() {
                section.days.push(projector.project(date));
            }

            if date >= last {
                break;
            }

            match date.succ() {
                Some(next) => date = next,
                None => break,
            }
        }

        debug!(
            "built calendar content: {} months, {} days, {} selected, {} event days",
            content.months.len(),
            content.day_count(),
            self.selection.len(),
            self.events.len()
        );

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::projector::{Background, TextColor};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn config(horizon: CalendarDate) -> ContentConfig {
        ContentConfig {
            horizon,
            ..Default::default()
        }
    }

    #[test]
    fn test_months_are_whole() {
        let config = config(date(2020, 9, 3));
        let selection = SelectionState::new();
        let events = EventMap::new();
        let content =
            CalendarContentBuilder::new(&config, date(2020, 7, 13), &selection, &events).build();

        let titles: Vec<&str> = content.months.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["July 2020", "August 2020", "September 2020"]);
        assert_eq!(content.months[0].days.len(), 31);
        assert_eq!(content.months[0].days[0].date, date(2020, 7, 1));
        assert_eq!(content.months[2].days.len(), 30);
        assert_eq!(content.day_count(), 31 + 31 + 30);
        assert_eq!(content.visible_range, date(2020, 7, 13)..=date(2020, 9, 3));
    }

    #[test]
    fn test_days_before_today_in_first_month_are_muted() {
        let config = config(date(2020, 7, 31));
        let selection = SelectionState::new();
        let events = EventMap::new();
        let content =
            CalendarContentBuilder::new(&config, date(2020, 7, 13), &selection, &events).build();

        let july = &content.months[0];
        for cell in &july.days[..12] {
            assert_eq!(cell.text_color, TextColor::Muted, "{}", cell.date);
        }
        assert_eq!(july.days[12].background, Background::Today);
        assert_eq!(july.days[12].text_color, TextColor::Normal);
        assert_eq!(july.days[13].text_color, TextColor::Normal);
    }

    #[test]
    fn test_leading_blanks_follow_first_weekday() {
        let mut config = config(date(2020, 8, 31));
        let selection = SelectionState::new();
        let events = EventMap::new();

        let content =
            CalendarContentBuilder::new(&config, date(2020, 7, 13), &selection, &events).build();
        // July 1st 2020 was a Wednesday, August 1st a Saturday
        assert_eq!(content.months[0].leading_blanks, 3);
        assert_eq!(content.months[1].leading_blanks, 6);
        assert_eq!(
            content.weekday_labels(),
            ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        );

        config.first_weekday = Weekday::Mon;
        let content =
            CalendarContentBuilder::new(&config, date(2020, 7, 13), &selection, &events).build();
        assert_eq!(content.months[0].leading_blanks, 2);
        assert_eq!(content.months[1].leading_blanks, 5);
    }

    #[test]
    fn test_weeks_layout() {
        let config = config(date(2020, 8, 1));
        let selection = SelectionState::new();
        let events = EventMap::new();
        let content =
            CalendarContentBuilder::new(&config, date(2020, 8, 1), &selection, &events).build();

        // August 2020 starts on a Saturday and spans six rows
        let weeks = content.months[0].weeks();
        assert_eq!(weeks.len(), 6);
        assert!(weeks[0][..6].iter().all(|slot| slot.is_none()));
        assert_eq!(weeks[0][6].map(|c| c.text.as_str()), Some("1"));
        assert_eq!(weeks[5][1].map(|c| c.text.as_str()), Some("31"));
        assert!(weeks[5][2].is_none());
    }

    #[test]
    fn test_horizon_before_today_is_empty() {
        let config = config(date(2022, 12, 31));
        let selection = SelectionState::new();
        let events = EventMap::new();
        let content =
            CalendarContentBuilder::new(&config, date(2026, 10, 14), &selection, &events).build();

        assert!(content.is_empty());
        assert_eq!(content.day_count(), 0);
    }

    #[test]
    fn test_cell_lookup() {
        let config = config(date(2020, 8, 31));
        let mut selection = SelectionState::new();
        selection.toggle(date(2020, 8, 4));
        let events: EventMap = [("2020-07-16".to_string(), Event::new(true, false))]
            .into_iter()
            .collect();
        let content =
            CalendarContentBuilder::new(&config, date(2020, 7, 13), &selection, &events).build();

        let cell = content.cell(date(2020, 8, 4)).unwrap();
        assert_eq!(cell.background, Background::Selected);
        assert!(content.cell(date(2020, 7, 16)).unwrap().marker_a);
        assert!(content.cell(date(2020, 9, 1)).is_none());
    }

    #[test]
    fn test_horizontal_layout_for_view() {
        assert_eq!(
            MonthsLayout::horizontal_for_view(390.0, 844.0),
            MonthsLayout::Horizontal { month_width: 350.0 }
        );
        assert_eq!(
            MonthsLayout::horizontal_for_view(20.0, 844.0),
            MonthsLayout::Horizontal { month_width: 0.0 }
        );
    }

    #[test]
    fn test_config_json_uses_defaults_for_missing_fields() {
        let config: ContentConfig =
            serde_json::from_str(r#"{ "marker_policy": "independent" }"#).unwrap();
        assert_eq!(config.marker_policy, MarkerPolicy::Independent);
        assert_eq!(config.inter_month_spacing, INTER_MONTH_SPACING);
        assert_eq!(config.horizon, ContentConfig::default().horizon);
    }
}
