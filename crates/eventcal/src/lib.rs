//! Calendar core for the eventcal screen.
//!
//! Everything here is a pure function of the screen state: a
//! [`SelectionState`], the fetched [`EventMap`], today's date and a
//! [`ContentConfig`] go in, a fully materialized [`CalendarContent`] comes
//! out. Nothing in this crate knows how the content is drawn.

mod content;
mod date;
mod error;
mod event;
mod projector;
mod selection;

pub use content::{
    weekday_labels, CalendarContent, CalendarContentBuilder, ContentConfig, MonthSection,
    MonthsLayout, DEFAULT_HORIZON, HORIZONTAL_DAY_MARGIN, INTER_MONTH_SPACING,
    MONTH_WIDTH_INSET, VERTICAL_DAY_MARGIN,
};
pub use date::{days_in_month, CalendarDate, DAY_ID_FORMAT};
pub use error::{Error, Result};
pub use event::{load_event_map, parse_event_map, Event, EventMap};
pub use projector::{Background, DayCell, DayCellProjector, MarkerPolicy, StyleKey, TextColor};
pub use selection::SelectionState;
