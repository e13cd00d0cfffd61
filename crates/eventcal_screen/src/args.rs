use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use eventcal::{CalendarDate, ContentConfig, MarkerPolicy, MonthsLayout};
use tracing::error;

use crate::ScreenOptions;

pub struct Args {
    pub options: ScreenOptions,
    pub today: Option<CalendarDate>,
    pub horizon: Option<CalendarDate>,
    pub events: Option<PathBuf>,
    pub fetch_delay: Option<Duration>,
    pub datapath: Option<String>,
}

impl Args {
    // parse arguments, return set of unrecognized args
    pub fn parse(args: &[String]) -> (Self, BTreeSet<String>) {
        let mut unrecognized_args = BTreeSet::new();
        let mut res = Args {
            options: ScreenOptions::default(),
            today: None,
            horizon: None,
            events: None,
            fetch_delay: None,
            datapath: None,
        };

        let mut i = 0;
        let len = args.len();
        while i < len {
            let arg = &args[i];

            if arg == "--mobile" {
                res.options.set(ScreenOptions::Mobile, true);
            } else if arg == "--light" {
                res.options.set(ScreenOptions::LightTheme, true);
            } else if arg == "--dark" {
                res.options.set(ScreenOptions::LightTheme, false);
            } else if arg == "--debug" {
                res.options.set(ScreenOptions::Debug, true);
            } else if arg == "--independent-markers" {
                res.options.set(ScreenOptions::IndependentMarkers, true);
            } else if arg == "--vertical" {
                res.options.set(ScreenOptions::VerticalLayout, true);
            } else if arg == "--today" || arg == "--horizon" {
                i += 1;
                let Some(value) = args.get(i) else {
                    error!("{arg} argument missing?");
                    continue;
                };

                match value.parse::<CalendarDate>() {
                    Ok(date) if arg == "--today" => res.today = Some(date),
                    Ok(date) => res.horizon = Some(date),
                    Err(err) => error!("failed to parse {arg}: {err}"),
                }
            } else if arg == "--events" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("events argument missing?");
                    continue;
                };
                res.events = Some(PathBuf::from(path));
            } else if arg == "--fetch-delay-ms" {
                i += 1;
                let Some(value) = args.get(i) else {
                    error!("fetch-delay-ms argument missing?");
                    continue;
                };

                match value.parse::<u64>() {
                    Ok(ms) => res.fetch_delay = Some(Duration::from_millis(ms)),
                    Err(err) => error!("failed to parse --fetch-delay-ms '{value}': {err}"),
                }
            } else if arg == "--datapath" {
                i += 1;
                let Some(path) = args.get(i) else {
                    error!("datapath argument missing?");
                    continue;
                };
                res.datapath = Some(path.clone());
            } else {
                unrecognized_args.insert(arg.clone());
            }

            i += 1;
        }

        (res, unrecognized_args)
    }

    pub fn is_mobile(&self) -> bool {
        self.options.contains(ScreenOptions::Mobile) || crate::setup::is_compiled_as_mobile()
    }

    pub fn content_config(&self) -> ContentConfig {
        let mut config = ContentConfig::default();

        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }

        if self.options.contains(ScreenOptions::IndependentMarkers) {
            config.marker_policy = MarkerPolicy::Independent;
        }

        if self.options.contains(ScreenOptions::VerticalLayout) {
            config.layout = MonthsLayout::Vertical;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_flags() {
        let (parsed, unrecognized) = Args::parse(&args(&[
            "eventcal",
            "--light",
            "--mobile",
            "--independent-markers",
            "--today",
            "2020-07-13",
            "--horizon",
            "2022-12-31",
            "--events",
            "fixtures/events.json",
            "--fetch-delay-ms",
            "250",
        ]));

        assert!(parsed.options.contains(ScreenOptions::LightTheme));
        assert!(parsed.is_mobile());
        assert_eq!(parsed.today, CalendarDate::from_ymd(2020, 7, 13));
        assert_eq!(parsed.horizon, CalendarDate::from_ymd(2022, 12, 31));
        assert_eq!(parsed.events, Some(PathBuf::from("fixtures/events.json")));
        assert_eq!(parsed.fetch_delay, Some(Duration::from_millis(250)));
        // the program name is not a flag
        assert_eq!(unrecognized, BTreeSet::from(["eventcal".to_string()]));

        let config = parsed.content_config();
        assert_eq!(config.marker_policy, MarkerPolicy::Independent);
        assert_eq!(config.horizon, CalendarDate::from_ymd(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_bad_values_are_skipped() {
        let (parsed, unrecognized) = Args::parse(&args(&[
            "--today",
            "13/07/2020",
            "--fetch-delay-ms",
            "soon",
            "--vertical",
            "--bogus",
        ]));

        assert_eq!(parsed.today, None);
        assert_eq!(parsed.fetch_delay, None);
        assert_eq!(parsed.content_config().layout, MonthsLayout::Vertical);
        assert_eq!(unrecognized, BTreeSet::from(["--bogus".to_string()]));
    }

    #[test]
    fn test_missing_value_at_end() {
        let (parsed, unrecognized) = Args::parse(&args(&["--dark", "--events"]));
        assert_eq!(parsed.events, None);
        assert!(!parsed.options.contains(ScreenOptions::LightTheme));
        assert!(unrecognized.is_empty());
    }
}
