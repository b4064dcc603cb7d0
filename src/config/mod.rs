pub mod properties;
pub mod settings;
pub mod source;

pub use properties::Properties;
pub use settings::{DISABLED_THRESHOLD, Settings, keys, parse_bool, parse_slow_query_threshold};
pub use source::{SETTINGS_RESOURCE, SettingsSource};
