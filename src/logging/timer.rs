use super::{ChannelLogger, log_utils};
use crate::facade::Configuration;
use std::time::{Duration, Instant};

/// Measures one statement execution and logs it on completion
///
/// The finished line goes to the statement channel, and also to the
/// slow-query channel when it exceeds the configured threshold.
#[derive(Debug)]
pub struct StatementTimer<'a> {
    config: &'a Configuration,
    started: Instant,
}

impl<'a> StatementTimer<'a> {
    pub fn start(config: &'a Configuration) -> Self {
        Self {
            config,
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log `entry` with the elapsed time; returns the elapsed time
    pub fn finish(self, entry: String) -> Duration {
        let elapsed = self.elapsed();
        self.report(entry, elapsed);
        elapsed
    }

    fn report(&self, entry: String, elapsed: Duration) {
        let line = log_utils::append_elapsed(entry, elapsed, self.config);
        ChannelLogger::statement(self.config).info(&line);
        if self.config.is_slow(elapsed) {
            ChannelLogger::slow_query(self.config).info(&line);
        }
    }
}
