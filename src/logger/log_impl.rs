// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::io;
use std::sync::OnceLock;

use jiff::Zoned;

use crate::Append;
use crate::Error;
use crate::Layout;
use crate::Level;
use crate::Record;
use crate::Trap;
use crate::logger::builder;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the default logger.
///
/// If no logger was set up with [`LoggerBuilder::apply`](crate::LoggerBuilder::apply), this is a
/// logger with the default settings writing to stdout.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| builder().build())
}

/// Set the default logger.
///
/// # Errors
///
/// Return the logger back if a default logger has already been set or used.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// A leveled logger that formats records and writes them to one or more appenders.
///
/// Appender failures never reach the caller: each one is reported to the configured
/// [`Trap`] and the remaining appenders still receive the line.
#[derive(Debug)]
pub struct Logger {
    level: Level,
    layout: Box<dyn Layout>,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(
        level: Level,
        layout: Box<dyn Layout>,
        appends: Vec<Box<dyn Append>>,
        trap: Box<dyn Trap>,
    ) -> Self {
        debug_assert!(!appends.is_empty(), "A Logger must have at least one appender");

        Self {
            level,
            layout,
            appends,
            trap,
        }
    }

    /// Return `true` if records of `level` pass the minimum level.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Log a message at the given level.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        let now = Zoned::now();
        self.dispatch(&Record::new(&now, level, &message));
    }

    /// Log a message at the [`Level::Debug`] level.
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    /// Log a message at the [`Level::Info`] level.
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    /// Log a message at the [`Level::Warn`] level.
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, message);
    }

    /// Log a message at the [`Level::Error`] level.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    /// Log a message at the [`Level::Panic`] level, then panic with the message.
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.log(Level::Panic, &message);
        panic!("{message}");
    }

    /// Log a message at the [`Level::Fatal`] level, then exit the process with status 1.
    ///
    /// Appenders are flushed before exiting.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(Level::Fatal, message);
        self.flush();
        std::process::exit(1);
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for append in &self.appends {
            if let Err(err) = append.flush() {
                let err = Error::new("failed to flush appender").with_source(err);
                self.trap.trap(&err);
            }
        }
    }

    /// Close all appenders.
    ///
    /// Every appender is closed even if an earlier one fails.
    ///
    /// # Errors
    ///
    /// Return an error carrying every failure if any appender failed to close.
    pub fn close(&self) -> Result<(), Error> {
        let mut failure: Option<Error> = None;
        for append in &self.appends {
            if let Err(err) = append.close() {
                let e = failure.unwrap_or_else(|| Error::new("failed to close appenders"));
                failure = Some(e.with_source(err));
            }
        }

        match failure {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    fn dispatch(&self, record: &Record) {
        let bytes = match self.layout.format(record) {
            Ok(bytes) => bytes,
            Err(err) => {
                let err = Error::new("failed to format log record")
                    .with_context("level", record.level())
                    .with_source(err);
                self.trap.trap(&err);
                return;
            }
        };

        for append in &self.appends {
            if let Err(err) = append.append(&bytes) {
                let err = Error::new("failed to write log record")
                    .with_context("level", record.level())
                    .with_source(err);
                self.trap.trap(&err);
            }
        }
    }
}

/// Every buffer written is logged as one [`Level::Info`] message, regardless of the minimum level.
///
/// A single trailing newline is dropped since the layout adds its own.
impl io::Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let message = text.strip_suffix('\n').unwrap_or(&text);

        let now = Zoned::now();
        self.dispatch(&Record::new(&now, Level::Info, &message));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Logger::flush(self);
        Ok(())
    }
}

#[cfg(feature = "bridge-log")]
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        Logger::log(self, record.level().into(), record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}
