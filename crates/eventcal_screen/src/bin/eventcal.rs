#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
use eventcal::{load_event_map, CalendarDate};
use eventcal_screen::{
    setup::{generate_native_options, log_path, setup_cc},
    source::{sample_events, DEFAULT_FETCH_DELAY},
    Args, CalendarScreen, EventcalApp, MockEventSource, ScreenOptions,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (parsed_args, unrecognized) = Args::parse(args.get(1..).unwrap_or(&[]));

    // guard has to live for the lifetime of the program
    let (non_blocking, _guard) = {
        use std::panic;
        use tracing_appender::{
            non_blocking,
            rolling::{RollingFileAppender, Rotation},
        };

        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            log_path(parsed_args.datapath.as_deref()),
            format!("eventcal-{}.log", env!("CARGO_PKG_VERSION")),
        );
        panic::set_hook(Box::new(|panic_info| {
            error!("eventcal panicked: {:?}", panic_info);
        }));

        non_blocking(file_appender)
    };

    // Log to stdout (if you run with `RUST_LOG=debug`).
    {
        use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

        let console_layer = fmt::layer().with_target(true).with_writer(std::io::stdout);
        let file_layer = fmt::layer().with_ansi(false).with_writer(non_blocking);
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .with(env_filter)
            .init();
    }

    if !unrecognized.is_empty() {
        warn!("ignoring unrecognized arguments: {unrecognized:?}");
    }

    let events = match &parsed_args.events {
        Some(path) => match load_event_map(path) {
            Ok(events) => {
                info!("loaded {} event days from {}", events.len(), path.display());
                events
            }
            Err(err) => {
                error!(
                    "failed to load events from {}: {err}, using the built-in fixture",
                    path.display()
                );
                sample_events()
            }
        },
        None => sample_events(),
    };

    let source = MockEventSource::new(
        events,
        parsed_args.fetch_delay.unwrap_or(DEFAULT_FETCH_DELAY),
    );
    let today = parsed_args.today.unwrap_or_else(CalendarDate::today);
    let config = parsed_args.content_config();
    let light = parsed_args.options.contains(ScreenOptions::LightTheme);
    let debug = parsed_args.options.contains(ScreenOptions::Debug);

    info!("starting eventcal, today is {today}, horizon {}", config.horizon);

    let res = eframe::run_native(
        "eventcal",
        generate_native_options(parsed_args.is_mobile()),
        Box::new(move |cc| {
            let palette = setup_cc(&cc.egui_ctx, light);
            let screen = CalendarScreen::new(today, config)
                .with_palette(palette)
                .with_debug(debug);
            Ok(Box::new(EventcalApp::new(screen, Box::new(source))))
        }),
    );

    if let Err(err) = res {
        error!("eventcal exited with an error: {err}");
    }
}
