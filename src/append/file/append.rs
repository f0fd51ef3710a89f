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

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Trap;
use crate::append::Append;
use crate::append::file::rolling::RollingFileWriter;
use crate::append::file::rolling::RollingFileWriterBuilder;
use crate::append::file::rolling::Rotation;

/// A builder to configure and create a [`File`] appender.
#[derive(Debug)]
pub struct FileBuilder {
    builder: RollingFileWriterBuilder,
}

impl FileBuilder {
    /// Create a new file appender builder writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            builder: RollingFileWriterBuilder::new(path),
        }
    }

    /// Create a new file appender builder writing to `<basedir>/<name>.log`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylog::append::FileBuilder;
    ///
    /// // writes to `/var/log/my_app-<YYYY-MM-DD>.log`
    /// let builder = FileBuilder::with_name("/var/log", "my_app").rollover_daily();
    /// ```
    pub fn with_name(basedir: impl Into<PathBuf>, name: impl AsRef<str>) -> Self {
        let path = basedir.into().join(format!("{}.log", name.as_ref()));
        Self::new(path)
    }

    /// Build the [`File`] appender.
    ///
    /// # Errors
    ///
    /// Return an error if the configured path does not name a file.
    pub fn build(self) -> Result<File, Error> {
        let writer = self.builder.build()?;
        Ok(File::new(writer))
    }

    /// Set the trap for errors that cannot be returned from a write.
    ///
    /// Default to [`DefaultTrap`](crate::trap::DefaultTrap).
    ///
    /// # Examples
    ///
    /// ```
    /// use daylog::append::FileBuilder;
    /// use daylog::trap::DefaultTrap;
    ///
    /// let builder = FileBuilder::new("my_service/app.log");
    /// builder.trap(DefaultTrap::default());
    /// ```
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.builder = self.builder.trap(trap);
        self
    }

    /// Set the rotation strategy to roll over log files daily at 00:00 in the local time zone.
    pub fn rollover_daily(mut self) -> Self {
        self.builder = self.builder.rotation(Rotation::Daily);
        self
    }

    /// Set the number of days to keep rolled log files.
    ///
    /// Files are judged by the date in their name, not by their modification time.
    pub fn retention_days(mut self, days: u32) -> Self {
        self.builder = self.builder.retention_days(days);
        self
    }
}

/// An appender that writes log lines to a file, optionally rolling over daily.
///
/// All writes to one appender are serialized, including any rollover and cleanup they trigger.
#[derive(Debug)]
pub struct File {
    writer: Mutex<RollingFileWriter>,
}

impl File {
    fn new(writer: RollingFileWriter) -> Self {
        let writer = Mutex::new(writer);
        Self { writer }
    }

    fn writer(&self) -> MutexGuard<'_, RollingFileWriter> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Append for File {
    fn append(&self, bytes: &[u8]) -> Result<(), Error> {
        let mut writer = self.writer();
        writer.write_all(bytes).map_err(Error::from_io_error)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        let mut writer = self.writer();
        writer.flush().map_err(Error::from_io_error)?;
        Ok(())
    }

    fn close(&self) -> Result<(), Error> {
        let mut writer = self.writer();
        writer.close().map_err(Error::from_io_error)?;
        Ok(())
    }
}
