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

//! Daylog is a small leveled logger that writes to stdout or to log files rolling over daily.
//!
//! # Overview
//!
//! A [`Logger`] drops records below its minimum [`Level`], formats the rest into lines like
//! `2024-08-10 17:12:52 WARN: disk almost full` and writes each line to its appenders in order.
//! The file appender can roll over to a new file every calendar day and delete files older than a
//! retention window.
//!
//! # Examples
//!
//! Simple setup with the default stdout appender:
//!
//! ```
//! let logger = daylog::builder().build();
//!
//! logger.info("This is an info message.");
//! ```
//!
//! Daily rolling files kept for a week, next to stdout:
//!
//! ```no_run
//! use daylog::Level;
//! use daylog::append;
//! use daylog::append::FileBuilder;
//!
//! let file = FileBuilder::new("logs/app.log")
//!     .rollover_daily()
//!     .retention_days(7)
//!     .build()
//!     .unwrap();
//!
//! daylog::builder()
//!     .level(Level::Debug)
//!     .append(append::Stdout::default())
//!     .append(file)
//!     .apply();
//!
//! daylog::default_logger().error("Error message.");
//! daylog::default_logger().debug("Debug message.");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod date;
pub mod layout;
pub mod trap;

#[cfg(feature = "bridge-log")]
pub mod bridge;

mod error;
pub use self::error::Error;

mod record;
pub use self::record::Level;
pub use self::record::Record;

pub use self::append::Append;
pub use self::layout::Layout;
pub use self::trap::Trap;

mod logger;
pub use self::logger::*;
