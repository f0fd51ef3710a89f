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

//! Log record and level.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;

use crate::Error;

/// A single log message on its way to the appenders.
///
/// Records are built per call, formatted by a [`Layout`](crate::Layout) and dropped.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    // the observed time
    now: &'a Zoned,
    level: Level,
    payload: &'a dyn fmt::Display,
}

impl<'a> Record<'a> {
    /// Create a new record observed at `now`.
    pub fn new(now: &'a Zoned, level: Level, payload: &'a dyn fmt::Display) -> Self {
        Self {
            now,
            level,
            payload,
        }
    }

    /// The observed time.
    pub fn time(&self) -> &'a Zoned {
        self.now
    }

    /// The severity level of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The message body.
    pub fn payload(&self) -> &'a dyn fmt::Display {
        self.payload
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("now", &self.now)
            .field("level", &self.level)
            .field("payload", &format_args!("{}", self.payload))
            .finish()
    }
}

/// An enum representing the available severity levels of the logger.
///
/// Levels are ordered from the least to the most severe, so `Level::Debug < Level::Fatal`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates errors.
    Error,
    /// Designates errors after which the caller panics.
    Panic,
    /// Designates errors after which the process exits.
    Fatal,
}

impl Level {
    /// Return the canonical lowercase name of the `Level`.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        }
    }

    /// Return the uppercase string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Panic => "PANIC",
            Level::Fatal => "FATAL",
        }
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Panic,
            Level::Fatal,
        ] {
            if s.eq_ignore_ascii_case(level.name()) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

#[cfg(feature = "bridge-log")]
impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
