use crate::screen::CalendarScreen;
use crate::source::EventSource;

/// The eframe host: one screen, one event source.
pub struct EventcalApp {
    screen: CalendarScreen,
    source: Box<dyn EventSource>,
    appeared: bool,
}

impl EventcalApp {
    pub fn new(screen: CalendarScreen, source: Box<dyn EventSource>) -> Self {
        Self {
            screen,
            source,
            appeared: false,
        }
    }

    pub fn screen(&self) -> &CalendarScreen {
        &self.screen
    }
}

impl eframe::App for EventcalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::scope!("EventcalApp::update");

        // fetch once the screen is first shown
        if !self.appeared {
            self.appeared = true;
            self.screen.start_fetch(self.source.as_ref(), ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.screen.ui(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{sample_events, FetchCallback};
    use egui_kittest::Harness;
    use eventcal::{CalendarDate, ContentConfig};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Answers right away and counts how often it was asked.
    struct CountingSource {
        calls: Rc<Cell<usize>>,
    }

    impl EventSource for CountingSource {
        fn fetch(&self, on_ready: FetchCallback) {
            self.calls.set(self.calls.get() + 1);
            on_ready(sample_events());
        }
    }

    #[test]
    fn test_first_frame_fetches_once() {
        let calls = Rc::new(Cell::new(0));
        let source = CountingSource {
            calls: calls.clone(),
        };
        let today = CalendarDate::from_ymd(2020, 7, 13).unwrap();
        let screen = CalendarScreen::new(today, ContentConfig::default());

        let mut harness = Harness::builder()
            .with_size(egui::vec2(405.0, 915.0))
            .build_eframe(|_cc| EventcalApp::new(screen, Box::new(source)));
        for _ in 0..3 {
            harness.step();
        }

        assert_eq!(calls.get(), 1);
        let screen = harness.state().screen();
        assert!(!screen.is_fetch_pending());
        assert_eq!(screen.events(), &sample_events());
        assert!(screen.content().cell(today).unwrap().marker_b);
    }
}
