//! Default ORM logger.

use std::sync::Arc;

use crate::config::LoggerNamespace;
use crate::core::traits::{LogWriter, Logger, LoggerOptions};

/// Writes `[namespace] message` lines through the configured sink.
///
/// Query messages go through the highlighter first. Deprecation warnings are
/// dropped when `ignore_deprecations` is set.
#[derive(Debug, Clone)]
pub struct DefaultLogger {
    options: LoggerOptions,
}

impl DefaultLogger {
    pub fn new(options: LoggerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }
}

impl Logger for DefaultLogger {
    fn log(&self, namespace: LoggerNamespace, message: &str) {
        if !self.is_enabled(namespace) {
            return;
        }
        let message = match namespace {
            LoggerNamespace::Query => self.options.highlighter.highlight(message),
            _ => message.to_string(),
        };
        (self.options.writer)(&format!("[{namespace}] {message}"));
    }

    fn is_enabled(&self, namespace: LoggerNamespace) -> bool {
        if namespace == LoggerNamespace::Deprecated && self.options.ignore_deprecations {
            return false;
        }
        self.options.debug_mode.is_enabled(namespace)
    }
}

/// Sink forwarding every line to `tracing` under the `ormcore` target.
pub fn default_writer() -> LogWriter {
    Arc::new(|line: &str| tracing::info!(target: "ormcore", "{}", line))
}
