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

use std::fmt::Write;

use crate::Error;
use crate::Layout;
use crate::record::Record;

const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A layout that formats log records as plain text lines.
///
/// Output format:
///
/// ```text
/// 2024-08-11 10:24:06 ERROR: Hello error!
/// 2024-08-11 10:24:06 WARN: Hello warn!
/// 2024-08-11 10:24:06 INFO: Hello info!
/// 2024-08-11 10:24:06 DEBUG: Hello debug!
/// ```
///
/// The timestamp uses `strftime` conversion specifiers, `%Y-%m-%d %H:%M:%S` by default.
///
/// # Examples
///
/// ```
/// use daylog::layout::TextLayout;
///
/// let text_layout = TextLayout::default().time_format("%H:%M:%S%.3f");
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    time_format: String,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TextLayout {
    /// Set the `strftime` format of the timestamp.
    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::new();

        let time = record.time().strftime(self.time_format.as_str());
        let level = record.level();
        let message = record.payload();
        writeln!(&mut text, "{time} {level}: {message}").map_err(|err| {
            Error::from_fmt_error(err).with_context("time_format", &self.time_format)
        })?;

        Ok(text.into_bytes())
    }
}
