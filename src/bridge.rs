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

//! A bridge to forward logs from the `log` crate to daylog.

use crate::default_logger;

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record)
    }

    fn flush(&self) {
        log::Log::flush(default_logger())
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a `LogCrateLogger` and all logs from the log
/// crate will be forwarded to daylog's [default logger](crate::default_logger). `Trace` records
/// are logged at [`Level::Debug`](crate::Level::Debug).
///
/// This function will set the global maximum log level to `Trace`. The default logger still
/// applies its own minimum level.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = daylog::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for details.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// daylog::bridge::setup_log_crate();
/// daylog::builder().apply();
///
/// log::info!("Hello from the log crate!");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "daylog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
