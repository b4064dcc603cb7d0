use crate::config::Properties;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Recognized settings keys
pub mod keys {
    pub const LOG_TEXT: &str = "jdbcdslog.logText";
    pub const PRINT_STACK_TRACE: &str = "jdbcdslog.printStackTrace";
    pub const SHOW_TIME: &str = "jdbcdslog.showTime";
    pub const ALLOWED_MULTI_DBS: &str = "jdbcdslog.allowedMultiDbs";
    pub const SLOW_QUERY_THRESHOLD: &str = "jdbcdslog.slowQueryThreshold";
    pub const DRIVER_NAME: &str = "jdbcdslog.driverName";
}

/// Slow-query threshold value meaning "no threshold in effect"
pub const DISABLED_THRESHOLD: i64 = i64::MAX;

lazy_static! {
    static ref SIGNED_DECIMAL: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
}

/// Parsed tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub log_text: bool,
    pub print_stack_trace: bool,
    pub show_time: bool,
    pub allowed_multi_dbs: bool,
    /// Milliseconds, or [`DISABLED_THRESHOLD`]
    pub slow_query_threshold: i64,
    /// Initial driver-name hint for dialect selection
    pub driver_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_text: false,
            print_stack_trace: false,
            show_time: false,
            allowed_multi_dbs: false,
            slow_query_threshold: DISABLED_THRESHOLD,
            driver_name: None,
        }
    }
}

impl Settings {
    /// Read every tunable from `props`
    ///
    /// Malformed values never fail; the default is kept instead.
    pub fn from_properties(props: &Properties) -> Self {
        let defaults = Self::default();
        Self {
            log_text: parse_bool(props.get(keys::LOG_TEXT), defaults.log_text),
            print_stack_trace: parse_bool(
                props.get(keys::PRINT_STACK_TRACE),
                defaults.print_stack_trace,
            ),
            show_time: parse_bool(props.get(keys::SHOW_TIME), defaults.show_time),
            allowed_multi_dbs: parse_bool(
                props.get(keys::ALLOWED_MULTI_DBS),
                defaults.allowed_multi_dbs,
            ),
            slow_query_threshold: parse_slow_query_threshold(
                props.get(keys::SLOW_QUERY_THRESHOLD),
            ),
            driver_name: props
                .get(keys::DRIVER_NAME)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        }
    }

    pub fn slow_query_threshold_enabled(&self) -> bool {
        self.slow_query_threshold != DISABLED_THRESHOLD
    }
}

/// `true` iff the value equals `"true"` ignoring case; missing keeps `default`
pub fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(value) => value.eq_ignore_ascii_case("true"),
        None => default,
    }
}

/// Parse a threshold in milliseconds
///
/// Anything that is not a plain signed decimal `i64` leaves the threshold
/// disabled. `-1` is the explicit spelling of disabled; other negative
/// values are treated the same way.
pub fn parse_slow_query_threshold(raw: Option<&str>) -> i64 {
    let parsed = raw
        .filter(|value| SIGNED_DECIMAL.is_match(value))
        .and_then(|value| value.parse::<i64>().ok());

    match parsed {
        // only -1 is documented as "disabled"; other negatives get the same
        // treatment so the threshold is never a negative duration
        Some(threshold) if threshold >= 0 => threshold,
        _ => DISABLED_THRESHOLD,
    }
}
