//! City lookups backing the agent's two tools.
//!
//! Both lookups are plain functions of their input (and, for the time
//! lookup, the current instant). They hold no state and can be called from
//! any number of threads at once.

mod city;
mod clock;
mod errors;
mod result;

pub use city::*;
pub use clock::*;
pub use errors::EnvironmentError;
pub use result::LookupResult;

use chrono_tz::Tz;
use tracing::{debug, instrument};

/// Layout of the timestamp in a time report, e.g. `2024-07-01 08:00:00 EDT-0400`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

/// Canned weather report for `city`.
///
/// Unsupported cities yield [`LookupResult::Error`] with the input quoted
/// verbatim.
#[instrument(level = "debug")]
pub fn lookup_weather(city: &str) -> LookupResult {
    match find_city(&CityKey::new(city)) {
        Some(record) => LookupResult::success(record.weather_report),
        None => {
            debug!("no weather for city");
            LookupResult::error(format!("Weather information for '{city}' is not available."))
        }
    }
}

/// Current local time in `city`, read from the system clock.
///
/// # Errors
/// Returns [`EnvironmentError`] when the timezone database lacks the
/// city's zone. An unsupported city is not an error; it yields
/// [`LookupResult::Error`].
pub fn lookup_time(city: &str) -> Result<LookupResult, EnvironmentError> {
    lookup_time_with_clock(city, &SystemClock)
}

/// Same as [`lookup_time`] with the current instant taken from `clock`.
///
/// # Errors
/// See [`lookup_time`].
#[instrument(level = "debug", skip(clock))]
pub fn lookup_time_with_clock(city: &str, clock: &dyn Clock) -> Result<LookupResult, EnvironmentError> {
    let Some(record) = find_city(&CityKey::new(city)) else {
        debug!("no timezone for city");
        return Ok(LookupResult::error(format!(
            "Sorry, I don't have timezone information for {city}."
        )));
    };

    let tz = resolve_timezone(record.timezone)?;
    let now = clock.now().with_timezone(&tz);
    Ok(LookupResult::success(format!(
        "The current time in {city} is {}",
        now.format(TIMESTAMP_FORMAT)
    )))
}

/// Look up an IANA identifier in the timezone database.
///
/// # Errors
/// [`EnvironmentError::UnknownTimezone`] when the identifier has no entry.
pub fn resolve_timezone(identifier: &str) -> Result<Tz, EnvironmentError> {
    identifier
        .parse::<Tz>()
        .map_err(|_| EnvironmentError::UnknownTimezone(identifier.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use regex::Regex;

    const NEW_YORK_WEATHER: &str =
        "The weather in New York is sunny with a temperature of 25 degrees Celsius (77 degrees Fahrenheit).";

    const UNSUPPORTED: &[&str] = &[
        "Beijing",
        "Tokyo",
        "",
        " ",
        "new york ",
        " New York",
        "New  York",
        "New York City",
        "newyork",
        "Zürich",
        "'; DROP TABLE cities; --",
    ];

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    fn report(result: LookupResult) -> String {
        match result {
            LookupResult::Success { report } => report,
            LookupResult::Error { error_message } => panic!("expected success, got error: {error_message}"),
        }
    }

    fn error_message(result: LookupResult) -> String {
        match result {
            LookupResult::Error { error_message } => error_message,
            LookupResult::Success { report } => panic!("expected error, got success: {report}"),
        }
    }

    #[test]
    fn weather_for_new_york_in_any_case() {
        let expected = LookupResult::success(NEW_YORK_WEATHER);
        assert_eq!(lookup_weather("New York"), expected);
        assert_eq!(lookup_weather("new york"), expected);
        assert_eq!(lookup_weather("NEW YORK"), expected);
    }

    #[test]
    fn weather_for_beijing_is_exact_error() {
        assert_eq!(
            error_message(lookup_weather("Beijing")),
            "Weather information for 'Beijing' is not available."
        );
    }

    #[test]
    fn weather_error_quotes_input_verbatim() {
        for city in UNSUPPORTED {
            let message = error_message(lookup_weather(city));
            assert!(message.contains(city), "{message:?} should contain {city:?}");
            assert!(!message.contains("sunny"));
        }
    }

    #[test]
    fn weather_is_stable_across_calls() {
        assert_eq!(lookup_weather("New York"), lookup_weather("New York"));
    }

    #[test]
    fn time_error_is_exact_for_unsupported_cities() {
        for city in UNSUPPORTED {
            let result = lookup_time(city).unwrap();
            assert_eq!(
                error_message(result),
                format!("Sorry, I don't have timezone information for {city}.")
            );
        }
    }

    #[test]
    fn time_report_matches_pattern() {
        let pattern = Regex::new(
            r"^The current time in New York is \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [A-Z]{3,4}[+-]\d{4}$",
        )
        .unwrap();
        let text = report(lookup_time("New York").unwrap());
        assert!(pattern.is_match(&text), "unexpected report: {text}");
    }

    #[test]
    fn time_report_keeps_input_city() {
        let text = report(lookup_time_with_clock("nEw YoRk", &at(2024, 7, 1, 12, 0, 0)).unwrap());
        assert!(text.starts_with("The current time in nEw YoRk is "));
    }

    #[test]
    fn summer_time_uses_edt() {
        let text = report(lookup_time_with_clock("New York", &at(2024, 7, 1, 12, 0, 0)).unwrap());
        assert_eq!(text, "The current time in New York is 2024-07-01 08:00:00 EDT-0400");
    }

    #[test]
    fn winter_time_uses_est() {
        let text = report(lookup_time_with_clock("New York", &at(2024, 1, 15, 17, 30, 0)).unwrap());
        assert_eq!(text, "The current time in New York is 2024-01-15 12:30:00 EST-0500");
    }

    #[test]
    fn dst_switch_changes_offset() {
        // 2024-03-10 07:00 UTC is 03:00 EDT, one second earlier is 01:59:59 EST
        let before = report(lookup_time_with_clock("New York", &at(2024, 3, 10, 6, 59, 59)).unwrap());
        let after = report(lookup_time_with_clock("New York", &at(2024, 3, 10, 7, 0, 0)).unwrap());
        assert!(before.ends_with("2024-03-10 01:59:59 EST-0500"), "{before}");
        assert!(after.ends_with("2024-03-10 03:00:00 EDT-0400"), "{after}");
    }

    #[test]
    fn consecutive_reports_differ_only_in_timestamp() {
        let first = report(lookup_time_with_clock("New York", &at(2024, 7, 1, 12, 0, 0)).unwrap());
        let second = report(lookup_time_with_clock("New York", &at(2024, 7, 1, 12, 0, 1)).unwrap());
        let prefix = "The current time in New York is ";
        let first_ts = first.strip_prefix(prefix).unwrap();
        let second_ts = second.strip_prefix(prefix).unwrap();

        let parse = |ts: &str| DateTime::parse_from_str(ts.replace("EDT", "").as_str(), "%Y-%m-%d %H:%M:%S %z").unwrap();
        assert!(parse(first_ts) < parse(second_ts));
        assert_eq!(second_ts, "2024-07-01 08:00:01 EDT-0400");
    }

    #[test]
    fn system_clock_reports_do_not_go_backwards() {
        let before = Utc::now().timestamp();
        let text = report(lookup_time("New York").unwrap());
        let after = Utc::now().timestamp();

        let ts = text.strip_prefix("The current time in New York is ").unwrap();
        let (local, zone) = ts.rsplit_once(' ').unwrap();
        let offset = &zone[zone.len() - 5..];
        let parsed = DateTime::parse_from_str(&format!("{local} {offset}"), "%Y-%m-%d %H:%M:%S %z")
            .unwrap()
            .timestamp();
        assert!(before <= parsed && parsed <= after);
    }

    #[test]
    fn unknown_timezone_is_environment_error() {
        let err = resolve_timezone("Atlantis/Capital").unwrap_err();
        assert_eq!(err, EnvironmentError::UnknownTimezone("Atlantis/Capital".into()));
        assert!(resolve_timezone("America/New_York").is_ok());
    }

    #[test]
    fn lookups_run_concurrently() {
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| (lookup_weather("new york"), lookup_time("new york"))))
                .collect();
            for handle in handles {
                let (weather, time) = handle.join().unwrap();
                assert!(weather.is_success());
                assert!(time.unwrap().is_success());
            }
        });
    }
}
