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

//! Appender for writing log lines to a single file or to daily rolling files.
//!
//! # Example
//!
//! ```no_run
//! use daylog::Level;
//! use daylog::append::FileBuilder;
//!
//! let file = FileBuilder::new("logs/app.log")
//!     .rollover_daily()
//!     .retention_days(7)
//!     .build()
//!     .unwrap();
//!
//! let logger = daylog::builder().level(Level::Debug).append(file).build();
//! logger.info("This line goes to logs/app-<today>.log.");
//! ```

pub use self::append::File;
pub use self::append::FileBuilder;
pub use self::rolling::RollingFileWriter;
pub use self::rolling::RollingFileWriterBuilder;
pub use self::rolling::Rotation;

mod append;
mod clock;
mod rolling;
