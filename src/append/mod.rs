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

//! Sinks that formatted log lines are written to.

use std::fmt;

use crate::Error;

pub mod file;
mod stdout;

pub use self::file::File;
pub use self::file::FileBuilder;
pub use self::stdout::Stdout;

/// An appender that writes formatted log lines to a destination.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one formatted log line, byte for byte.
    fn append(&self, bytes: &[u8]) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Release the underlying resource.
    ///
    /// Default to a flush.
    fn close(&self) -> Result<(), Error> {
        self.flush()
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
