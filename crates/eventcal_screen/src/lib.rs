mod app;
mod args;
mod options;
mod palette;
mod screen;
pub mod setup;
pub mod source;
pub mod style;
mod ui;

pub use app::EventcalApp;
pub use args::Args;
pub use options::ScreenOptions;
pub use palette::Palette;
pub use screen::CalendarScreen;
pub use source::{EventSource, FetchCallback, MockEventSource};
pub use ui::calendar_ui;
