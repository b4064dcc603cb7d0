// ============================================================================
// jdbcdslog Library
// ============================================================================

//! Settings registry and SQL dialect dispatch for a transparent
//! database-call logging layer.
//!
//! An interception layer wraps driver objects and logs every statement with
//! its bound parameters, elapsed time and result-set traversal. This crate
//! is the part such a layer consults on every call: the tunables read once
//! from `jdbcdslog.properties`, the vendor dialect used to render parameters,
//! and the logger channels the lines go to.

pub mod core;
pub mod config;
pub mod dialect;
pub mod facade;
pub mod logging;

// Re-export main types for convenience
pub use crate::config::{Properties, Settings, SettingsSource, keys};
pub use crate::core::{LogError, Result, Value};
pub use crate::dialect::{DialectRegistry, RdbmsSpecifics, Resolution, SharedDialect};
pub use crate::facade::Configuration;
pub use crate::logging::{ChannelLogger, StatementTimer};
