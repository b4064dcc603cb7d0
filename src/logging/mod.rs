//! Logger facades over the `log` crate, one per channel.
//!
//! Each channel has its own target so hosts can route or filter them
//! independently, e.g. `jdbcdslog::slowquery=info` in an env_logger spec.

pub mod log_utils;
pub mod timer;

use crate::facade::Configuration;
use log::Level;

pub use timer::StatementTimer;

pub const STATEMENT_TARGET: &str = "jdbcdslog::statement";
pub const RESULT_SET_TARGET: &str = "jdbcdslog::resultset";
pub const SLOW_QUERY_TARGET: &str = "jdbcdslog::slowquery";
pub const CONNECTION_TARGET: &str = "jdbcdslog::connection";

/// A named logging channel
///
/// `debug` and `info` lines get a stack-trace suffix when
/// `printStackTrace` is enabled.
#[derive(Debug, Clone, Copy)]
pub struct ChannelLogger<'a> {
    target: &'static str,
    config: &'a Configuration,
}

impl<'a> ChannelLogger<'a> {
    pub fn new(target: &'static str, config: &'a Configuration) -> Self {
        Self { target, config }
    }

    pub fn statement(config: &'a Configuration) -> Self {
        Self::new(STATEMENT_TARGET, config)
    }

    pub fn result_set(config: &'a Configuration) -> Self {
        Self::new(RESULT_SET_TARGET, config)
    }

    pub fn slow_query(config: &'a Configuration) -> Self {
        Self::new(SLOW_QUERY_TARGET, config)
    }

    pub fn connection(config: &'a Configuration) -> Self {
        Self::new(CONNECTION_TARGET, config)
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    pub fn debug(&self, message: &str) {
        if self.is_debug_enabled() {
            log::debug!(target: self.target, "{}{}", message, log_utils::stack_trace(self.config));
        }
    }

    pub fn info(&self, message: &str) {
        if self.is_info_enabled() {
            log::info!(target: self.target, "{}{}", message, log_utils::stack_trace(self.config));
        }
    }

    pub fn error(&self, message: &str, err: &dyn std::error::Error) {
        log::error!(target: self.target, "{}: {}", message, err);
    }

    pub fn is_debug_enabled(&self) -> bool {
        log::log_enabled!(target: self.target, Level::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        log::log_enabled!(target: self.target, Level::Info)
    }
}
