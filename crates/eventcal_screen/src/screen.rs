use std::thread::{self, ThreadId};

use crossbeam_channel as chan;
use eventcal::{
    CalendarContent, CalendarContentBuilder, CalendarDate, ContentConfig, EventMap, MonthsLayout,
    SelectionState,
};
use tracing::{debug, info, warn};

use crate::source::EventSource;
use crate::style::StyleRegistry;
use crate::ui::calendar_ui;
use crate::Palette;

enum FetchState {
    Idle,
    Pending(chan::Receiver<EventMap>),
    Done,
}

/// Owns the screen state and keeps [`CalendarContent`] in sync with it.
///
/// All mutation happens on the thread that created the screen. The fetch
/// result is produced elsewhere and only applied when [`Self::poll_events`]
/// drains it on the owning thread.
pub struct CalendarScreen {
    today: CalendarDate,
    config: ContentConfig,
    selection: SelectionState,
    events: EventMap,
    content: CalendarContent,
    styles: StyleRegistry,
    palette: Palette,
    fetch: FetchState,
    owner: ThreadId,
    rebuilds: u64,
    show_debug: bool,
}

impl CalendarScreen {
    pub fn new(today: CalendarDate, config: ContentConfig) -> Self {
        let selection = SelectionState::new();
        let events = EventMap::new();
        let content = CalendarContentBuilder::new(&config, today, &selection, &events).build();

        Self {
            today,
            config,
            selection,
            events,
            content,
            styles: StyleRegistry::default(),
            palette: Palette::default(),
            fetch: FetchState::Idle,
            owner: thread::current().id(),
            rebuilds: 1,
            show_debug: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_debug(mut self, show_debug: bool) -> Self {
        self.show_debug = show_debug;
        self
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn content(&self) -> &CalendarContent {
        &self.content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_dates(&self) -> Vec<CalendarDate> {
        self.selection.selected_dates()
    }

    pub fn events(&self) -> &EventMap {
        &self.events
    }

    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn is_fetch_pending(&self) -> bool {
        matches!(self.fetch, FetchState::Pending(_))
    }

    /// Kicks off the one fetch this screen makes. Later calls are ignored.
    pub fn start_fetch(&mut self, source: &dyn EventSource, egui_ctx: &egui::Context) {
        if !matches!(self.fetch, FetchState::Idle) {
            return;
        }

        let (tx, rx) = chan::bounded::<EventMap>(1);
        let egui_ctx = egui_ctx.clone();
        source.fetch(Box::new(move |events| {
            if tx.send(events).is_ok() {
                egui_ctx.request_repaint();
            }
        }));

        debug!("event fetch started");
        self.fetch = FetchState::Pending(rx);
    }

    /// Applies a finished fetch, if there is one. Returns true when the
    /// content was rebuilt.
    pub fn poll_events(&mut self) -> bool {
        let received = match &self.fetch {
            FetchState::Pending(rx) => rx.try_recv(),
            FetchState::Idle | FetchState::Done => return false,
        };

        match received {
            Ok(events) => {
                self.fetch = FetchState::Done;
                self.set_events(events);
                true
            }
            Err(chan::TryRecvError::Empty) => false,
            Err(chan::TryRecvError::Disconnected) => {
                warn!("event fetch ended without a result");
                self.fetch = FetchState::Done;
                false
            }
        }
    }

    /// Replaces the whole event map and rebuilds.
    pub fn set_events(&mut self, events: EventMap) {
        debug_assert_eq!(
            thread::current().id(),
            self.owner,
            "events must be applied on the screen's thread"
        );

        info!("received events for {} days", events.len());
        self.events = events;
        self.rebuild();
    }

    /// Toggles `date` in the selection and rebuilds.
    pub fn prepare_day_selection(&mut self, date: CalendarDate) {
        self.selection.toggle(date);
        debug!("toggled {date}, {} day(s) selected", self.selection.len());
        self.rebuild();
    }

    /// Resizes horizontally paged months to the view. Rebuilds only when the
    /// month width actually changes.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let MonthsLayout::Horizontal { .. } = self.config.layout else {
            return false;
        };

        let layout = MonthsLayout::horizontal_for_view(width, height);
        if layout == self.config.layout {
            return false;
        }

        self.config.layout = layout;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        self.content =
            CalendarContentBuilder::new(&self.config, self.today, &self.selection, &self.events)
                .build();
        self.rebuilds += 1;
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.poll_events();

        let size = ui.available_size();
        self.resize(size.x, size.y);

        if self.show_debug {
            ui.label(
                egui::RichText::new(format!(
                    "rebuilds: {} · selected: {} · event days: {}{}",
                    self.rebuilds,
                    self.selection.len(),
                    self.events.len(),
                    if self.is_fetch_pending() {
                        " · fetching…"
                    } else {
                        ""
                    }
                ))
                .small()
                .weak(),
            );
        }

        if let Some(date) = calendar_ui(ui, &self.content, &self.styles, &self.palette) {
            self.prepare_day_selection(date);
        }
    }
}
