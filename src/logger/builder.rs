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

use crate::Append;
use crate::Layout;
use crate::Level;
use crate::Logger;
use crate::Trap;
use crate::append::Stdout;
use crate::layout::TextLayout;
use crate::logger::log_impl::set_default_logger;
use crate::trap::DefaultTrap;

/// Create a new [`LoggerBuilder`] instance with the default settings.
///
/// The defaults are: minimum level [`Level::Info`], time format `%Y-%m-%d %H:%M:%S`, and the
/// [`Stdout`] appender if no appender is added.
///
/// # Examples
///
/// ```
/// use daylog::append;
///
/// let logger = daylog::builder().append(append::Stdout::default()).build();
/// logger.info("Hello stdout!");
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        level: Level::Info,
        layout: Box::new(TextLayout::default()),
        appends: vec![],
        trap: Box::new(DefaultTrap::default()),
    }
}

/// A builder for configuring a [`Logger`] and optionally setting it up as the default logger.
///
/// # Examples
///
/// ```
/// use daylog::Level;
/// use daylog::append;
///
/// daylog::builder()
///     .level(Level::Warn)
///     .append(append::Stdout::default())
///     .apply();
///
/// daylog::default_logger().warn("Written to stdout.");
/// daylog::default_logger().info("Filtered out.");
/// ```
#[must_use = "call `apply` to set the default logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    level: Level,
    layout: Box<dyn Layout>,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Set the minimum level of records to log.
    ///
    /// Default to [`Level::Info`].
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the layout that formats records into lines.
    ///
    /// Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Use a [`TextLayout`] with the given `strftime` time format.
    ///
    /// # Examples
    ///
    /// ```
    /// let logger = daylog::builder().time_format("%H:%M:%S").build();
    /// ```
    pub fn time_format(self, format: impl Into<String>) -> Self {
        self.layout(TextLayout::default().time_format(format))
    }

    /// Add an appender. Lines are written to the appenders in the order they were added.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylog::append;
    ///
    /// let logger = daylog::builder().append(append::Stdout::default()).build();
    /// ```
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Set the trap that receives appender failures.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    ///
    /// # Examples
    ///
    /// ```
    /// use daylog::Level;
    ///
    /// let l = daylog::builder().build();
    /// l.log(Level::Info, "hello world!");
    /// ```
    pub fn build(self) -> Logger {
        let LoggerBuilder {
            level,
            layout,
            mut appends,
            trap,
        } = self;

        if appends.is_empty() {
            appends.push(Box::new(Stdout::default()));
        }

        Logger::new(level, layout, appends, trap)
    }

    /// Set up the default logger with this configuration.
    ///
    /// This should be called early in the execution of a Rust program. Until then, the default
    /// logger writes to stdout with the default settings.
    ///
    /// # Errors
    ///
    /// Return the built logger back if a default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// if daylog::builder().try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), Logger> {
        set_default_logger(self.build())
    }

    /// Set up the default logger with this configuration.
    ///
    /// # Panics
    ///
    /// Panic if the default logger has already been set or used.
    ///
    /// # Examples
    ///
    /// ```
    /// daylog::builder().apply();
    /// ```
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the default logger initialized");
    }
}
