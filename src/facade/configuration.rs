use crate::config::{DISABLED_THRESHOLD, Properties, Settings, SettingsSource};
use crate::dialect::{DialectRegistry, Resolution, SharedDialect};
use lazy_static::lazy_static;
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

const LOG_TARGET: &str = "jdbcdslog::config";

// Process-wide configuration, loaded on first access
lazy_static! {
    static ref GLOBAL_CONFIGURATION: Arc<Configuration> = Arc::new(Configuration::load());
}

/// Settings registry for the logging layer
///
/// Holds the tunables read at startup and the dialect registry. Everything
/// except `log_text` and the active dialect is fixed after construction.
///
/// # Examples
///
/// ```
/// use jdbcdslog::{Configuration, Properties};
///
/// let props = Properties::parse("jdbcdslog.driverName=com.mysql.cj.jdbc.Driver\n");
/// let config = Configuration::from_properties(&props);
///
/// assert_eq!(config.rdbms_specifics().name(), "mysql");
/// assert!(config.dialects().contains("com.mysql.cj.jdbc.driver"));
/// ```
#[derive(Debug)]
pub struct Configuration {
    log_text: AtomicBool,
    print_stack_trace: bool,
    show_time: bool,
    allowed_multi_dbs: bool,
    slow_query_threshold: i64,
    driver_name: Option<String>,
    dialects: DialectRegistry,
}

impl Configuration {
    /// Get the process-wide configuration
    ///
    /// The first call loads `jdbcdslog.properties` from the current directory
    /// layered over the process environment.
    pub fn global() -> &'static Arc<Configuration> {
        &GLOBAL_CONFIGURATION
    }

    /// Load from the default source; never fails
    pub fn load() -> Self {
        Self::load_from(&SettingsSource::default())
    }

    /// Load from `source` layered over the process environment
    ///
    /// A settings file that cannot be read is reported at error level and
    /// every tunable keeps its default.
    pub fn load_from(source: &SettingsSource) -> Self {
        Self::load_layered(source, Properties::from_env())
    }

    /// Load from `source` layered over an explicit fallback layer
    ///
    /// A missing file means `ambient` alone applies; a file that exists but
    /// cannot be read discards `ambient` too and leaves the defaults.
    pub fn load_layered(source: &SettingsSource, ambient: Properties) -> Self {
        match source.read_properties(ambient) {
            Ok(props) => Self::from_properties(&props),
            Err(err) => {
                error!(target: LOG_TARGET, "Failed to read settings, using defaults: {}", err);
                Self::from_settings(Settings::default())
            }
        }
    }

    pub fn from_properties(props: &Properties) -> Self {
        Self::from_settings(Settings::from_properties(props))
    }

    /// Build from already parsed tunables and resolve the driver-name hint
    pub fn from_settings(settings: Settings) -> Self {
        let dialects = DialectRegistry::with_defaults();
        dialects.resolve(settings.driver_name.as_deref());

        let config = Self {
            log_text: AtomicBool::new(settings.log_text),
            print_stack_trace: settings.print_stack_trace,
            show_time: settings.show_time,
            allowed_multi_dbs: settings.allowed_multi_dbs,
            slow_query_threshold: settings.slow_query_threshold,
            driver_name: settings.driver_name,
            dialects,
        };
        debug!(target: LOG_TARGET, "Configuration ready: {:?}", config.snapshot());
        config
    }

    pub fn log_text(&self) -> bool {
        self.log_text.load(Ordering::Acquire)
    }

    pub fn set_log_text(&self, log_text: bool) {
        self.log_text.store(log_text, Ordering::Release);
    }

    pub fn print_stack_trace(&self) -> bool {
        self.print_stack_trace
    }

    pub fn show_time(&self) -> bool {
        self.show_time
    }

    pub fn allowed_multi_dbs(&self) -> bool {
        self.allowed_multi_dbs
    }

    /// Threshold in milliseconds, `i64::MAX` when disabled
    pub fn slow_query_threshold(&self) -> i64 {
        self.slow_query_threshold
    }

    /// Threshold as a duration, `None` when disabled
    pub fn slow_query_threshold_duration(&self) -> Option<Duration> {
        if self.slow_query_threshold == DISABLED_THRESHOLD {
            return None;
        }
        u64::try_from(self.slow_query_threshold)
            .ok()
            .map(Duration::from_millis)
    }

    /// Whether a statement that took `elapsed` counts as slow
    pub fn is_slow(&self, elapsed: Duration) -> bool {
        self.slow_query_threshold_duration()
            .is_some_and(|threshold| elapsed > threshold)
    }

    /// The dialect currently used to render parameters
    pub fn rdbms_specifics(&self) -> SharedDialect {
        self.dialects.active()
    }

    pub fn dialects(&self) -> &DialectRegistry {
        &self.dialects
    }

    /// Re-select the dialect from a driver name seen on a live connection
    pub fn reload_rdbms_specifics_from_connection(&self, driver_name: &str) -> Resolution {
        debug!(target: LOG_TARGET, "Reload Rdbms Specifics From Connection: {}", driver_name);
        self.dialects.resolve(Some(driver_name))
    }

    /// Per-connection hook: re-resolves only when `allowedMultiDbs` is on
    ///
    /// Returns whether a reload happened.
    pub fn observe_connection(&self, driver_name: &str) -> bool {
        if !self.allowed_multi_dbs {
            return false;
        }
        self.reload_rdbms_specifics_from_connection(driver_name);
        true
    }

    /// Current tunables, including any `set_log_text` override
    pub fn snapshot(&self) -> Settings {
        Settings {
            log_text: self.log_text(),
            print_stack_trace: self.print_stack_trace,
            show_time: self.show_time,
            allowed_multi_dbs: self.allowed_multi_dbs,
            slow_query_threshold: self.slow_query_threshold,
            driver_name: self.driver_name.clone(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}
