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

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use jiff::civil::Date;

use crate::Error;
use crate::Trap;
use crate::append::file::clock::Clock;
use crate::date;
use crate::trap::DefaultTrap;

/// Defines whether a log file rolls over with the calendar date.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Rotation {
    /// Roll over to `<name>-<YYYY-MM-DD><ext>` once per local calendar day.
    Daily,
    /// Always write to the configured path.
    Never,
}

/// A writer for a log file that optionally rolls over daily.
///
/// The file is opened lazily on the first write. In [`Rotation::Daily`] mode, the first write on a
/// new calendar day closes the current file, opens the file named after the new date and deletes
/// files of this writer that are older than the retention window.
///
/// Every failure is returned from the call that hit it. A failed open leaves the writer ready to
/// retry on the next write.
#[derive(Debug)]
pub struct RollingFileWriter {
    state: State,
    writer: Option<File>,
}

impl RollingFileWriter {
    /// Creates a new [`RollingFileWriterBuilder`] for the log file at `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daylog::append::file::RollingFileWriter;
    ///
    /// let builder = RollingFileWriter::builder("logs/app.log");
    /// ```
    #[must_use]
    pub fn builder(path: impl Into<PathBuf>) -> RollingFileWriterBuilder {
        RollingFileWriterBuilder::new(path)
    }

    /// Close the current log file, syncing its content to disk.
    ///
    /// A later write opens the file again.
    pub fn close(&mut self) -> io::Result<()> {
        match self.writer.take() {
            Some(file) => self.state.close_log_file(file),
            None => Ok(()),
        }
    }

    /// Make sure the file for the current date is open, rolling over if the date has changed.
    fn prepare(&mut self) -> io::Result<&mut File> {
        if let Some(today) = self.state.today() {
            match self.state.current_date {
                // start over after a failed rollover, cleanup included
                None => self.rollover(today)?,
                Some(date) if date != today => self.rollover(today)?,
                Some(_) => {}
            }
        }

        let file = match self.writer.take() {
            Some(file) => file,
            None => self.open()?,
        };
        Ok(self.writer.insert(file))
    }

    fn open(&mut self) -> io::Result<File> {
        self.state.open_log_file().inspect_err(|_| {
            if self.state.rotation == Rotation::Daily {
                self.state.current_date = None;
            }
        })
    }

    fn rollover(&mut self, today: Date) -> io::Result<()> {
        if let Some(file) = self.writer.take() {
            self.state.close_log_file(file)?;
        }
        self.state.current_date = Some(today);
        self.writer = Some(self.open()?);
        self.state.delete_outdated_logs(today)
    }
}

impl Drop for RollingFileWriter {
    fn drop(&mut self) {
        if let Some(file) = self.writer.as_mut() {
            if let Err(err) = file.flush() {
                let err = Error::new("failed to flush file writer on dropped").with_source(err);
                self.state.trap.trap(&err);
            }
        }
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.prepare()?.write(buf)
    }

    // a whole buffer always lands in one file
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.prepare()?.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.writer.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// A builder for configuring [`RollingFileWriter`].
#[derive(Debug)]
pub struct RollingFileWriterBuilder {
    // required
    path: PathBuf,

    // has default
    rotation: Rotation,
    retention_days: u32,
    clock: Clock,
    trap: Box<dyn Trap>,
}

impl RollingFileWriterBuilder {
    /// Creates a new [`RollingFileWriterBuilder`].
    ///
    /// In daily mode, the directory, file name and extension of `path` give the dated file names:
    /// `logs/app.log` rolls over to `logs/app-2024-08-10.log`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rotation: Rotation::Never,
            retention_days: 0,
            clock: Clock::DefaultClock,
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the trap for the rolling file writer.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Set the rotation policy.
    #[must_use]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the number of days to keep rolled log files.
    ///
    /// Zero, the default, keeps files forever. Only effective with [`Rotation::Daily`].
    #[must_use]
    pub fn retention_days(mut self, days: u32) -> Self {
        self.retention_days = days;
        self
    }

    #[cfg(test)]
    fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the [`RollingFileWriter`].
    ///
    /// No file is touched until the first write.
    ///
    /// # Errors
    ///
    /// Return an error if the path does not name a file, or the name is not valid UTF-8.
    pub fn build(self) -> Result<RollingFileWriter, Error> {
        let Self {
            path,
            rotation,
            retention_days,
            clock,
            trap,
        } = self;

        let log_filename = path
            .file_stem()
            .ok_or_else(|| Error::new("filename must not be empty"))?
            .to_str()
            .ok_or_else(|| {
                Error::new("filename must be valid UTF-8").with_context("path", path.display())
            })?
            .to_string();
        let log_filename_ext = match path.extension() {
            None => String::new(),
            Some(ext) => match ext.to_str() {
                Some(ext) => format!(".{ext}"),
                None => {
                    return Err(Error::new("file extension must be valid UTF-8")
                        .with_context("path", path.display()));
                }
            },
        };
        let log_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if rotation == Rotation::Never && retention_days > 0 {
            let err = Error::new("retention days take no effect without daily rotation")
                .with_context("path", path.display())
                .with_context("retention_days", retention_days);
            trap.trap(&err);
        }

        let current_date = match rotation {
            Rotation::Daily => Some(clock.today()),
            Rotation::Never => None,
        };

        let state = State {
            log_path: path,
            log_dir,
            log_filename,
            log_filename_ext,
            rotation,
            retention_days,
            current_date,
            clock,
            trap,
        };

        Ok(RollingFileWriter {
            state,
            writer: None,
        })
    }
}

#[derive(Debug)]
struct State {
    log_path: PathBuf,
    log_dir: PathBuf,
    log_filename: String,
    log_filename_ext: String,
    rotation: Rotation,
    retention_days: u32,
    // always `None` with `Rotation::Never`
    current_date: Option<Date>,
    clock: Clock,
    trap: Box<dyn Trap>,
}

impl State {
    fn today(&self) -> Option<Date> {
        match self.rotation {
            Rotation::Daily => Some(self.clock.today()),
            Rotation::Never => None,
        }
    }

    fn current_filename(&self) -> PathBuf {
        match self.current_date {
            Some(date) => self.log_dir.join(format!(
                "{}-{}{}",
                self.log_filename,
                date::format_date(date),
                self.log_filename_ext
            )),
            None => self.log_path.clone(),
        }
    }

    fn open_log_file(&self) -> io::Result<File> {
        let filepath = self.current_filename();
        if let Some(dir) = filepath.parent() {
            fs::create_dir_all(dir)
                .map_err(|err| io_error("failed to create log directory", dir, err))?;
        }

        let mut open_options = OpenOptions::new();
        open_options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            open_options.mode(0o644);
        }
        open_options
            .open(&filepath)
            .map_err(|err| io_error("failed to open log file", &filepath, err))
    }

    fn close_log_file(&self, file: File) -> io::Result<()> {
        file.sync_all()
            .map_err(|err| io_error("failed to close log file", &self.current_filename(), err))
    }

    /// Return the date embedded in `filename` if it is named `<name>-<YYYY-MM-DD><ext>`.
    fn parse_log_date(&self, filename: &str) -> Option<Date> {
        let rest = filename
            .strip_prefix(self.log_filename.as_str())?
            .strip_prefix('-')?;
        let date = rest.strip_suffix(self.log_filename_ext.as_str())?;
        date::parse_date(date)
    }

    fn delete_outdated_logs(&self, today: Date) -> io::Result<()> {
        if self.rotation != Rotation::Daily || self.retention_days == 0 {
            return Ok(());
        }

        let read_dir = fs::read_dir(&self.log_dir)
            .map_err(|err| io_error("failed to read log dir", &self.log_dir, err))?;
        for entry in read_dir {
            let entry = entry.map_err(|err| io_error("failed to read log dir", &self.log_dir, err))?;
            let filepath = entry.path();

            let file_type = entry
                .file_type()
                .map_err(|err| io_error("failed to stat log file", &filepath, err))?;
            if file_type.is_dir() {
                continue;
            }

            let filename = entry.file_name();
            // if the filename is not a UTF-8 string, it is not ours.
            let Some(filename) = filename.to_str() else {
                continue;
            };
            let Some(log_date) = self.parse_log_date(filename) else {
                continue;
            };
            if date::days_between(log_date, today) <= i64::from(self.retention_days) {
                continue;
            }

            fs::remove_file(&filepath)
                .map_err(|err| io_error("failed to remove outdated log", &filepath, err))?;
        }

        Ok(())
    }
}

fn io_error(message: &str, path: &Path, err: io::Error) -> io::Error {
    let kind = err.kind();
    Error::new(message)
        .with_context("path", path.display())
        .with_source(err)
        .into_io_error(kind)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::str::FromStr;
    use std::sync::Arc;
    use std::sync::Mutex;

    use jiff::Span;
    use jiff::Zoned;
    use jiff::civil::date;
    use rand::Rng;
    use tempfile::TempDir;

    use crate::Error;
    use crate::Trap;
    use crate::append::file::clock::Clock;
    use crate::append::file::clock::ManualClock;
    use crate::append::file::rolling::RollingFileWriter;
    use crate::append::file::rolling::RollingFileWriterBuilder;
    use crate::append::file::rolling::Rotation;

    fn zoned(s: &str) -> Zoned {
        Zoned::from_str(s).unwrap()
    }

    fn daily_writer(dir: &Path, retention_days: u32, now: &str) -> RollingFileWriter {
        RollingFileWriterBuilder::new(dir.join("test.log"))
            .rotation(Rotation::Daily)
            .retention_days(retention_days)
            .clock(Clock::ManualClock(ManualClock::new(zoned(now))))
            .build()
            .unwrap()
    }

    fn list_filenames(dir: &Path) -> Vec<String> {
        let mut names = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[derive(Debug, Clone, Default)]
    struct CollectTrap(Arc<Mutex<Vec<String>>>);

    impl Trap for CollectTrap {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.message().to_string());
        }
    }

    #[test]
    fn test_file_is_opened_lazily() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("app.log");

        let mut writer = RollingFileWriter::builder(&path).build().unwrap();
        assert!(!path.exists());

        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_append_to_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let mut writer = RollingFileWriter::builder(&path).build().unwrap();
        writer.write_all(b"new\n").unwrap();
        writer.close().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nnew\n");

        // a write after close opens the file again
        writer.write_all(b"again\n").unwrap();
        writer.close().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nnew\nagain\n");
    }

    #[test]
    fn test_one_file_per_day() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = daily_writer(temp_dir.path(), 0, "2024-08-10T00:00:00[UTC]");

        let mut now = zoned("2024-08-10T00:00:00[UTC]");
        for i in 0..48 {
            writer.state.clock.set_now(now.clone());
            writeln!(writer, "line {i}").unwrap();
            now = now.checked_add(Span::new().minutes(30)).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(list_filenames(temp_dir.path()), vec!["test-2024-08-10.log"]);
        let content = fs::read_to_string(temp_dir.path().join("test-2024-08-10.log")).unwrap();
        assert_eq!(content.lines().count(), 48);
    }

    #[test]
    fn test_rollover_on_date_boundary() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = daily_writer(temp_dir.path(), 0, "2024-08-10T23:59:58[UTC]");

        writer.write_all(b"before midnight\n").unwrap();
        writer.state.clock.set_now(zoned("2024-08-10T23:59:59[UTC]"));
        writer.write_all(b"still before\n").unwrap();
        writer.state.clock.set_now(zoned("2024-08-11T00:00:00[UTC]"));
        writer.write_all(b"after midnight\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            list_filenames(temp_dir.path()),
            vec!["test-2024-08-10.log", "test-2024-08-11.log"]
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("test-2024-08-10.log")).unwrap(),
            "before midnight\nstill before\n"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("test-2024-08-11.log")).unwrap(),
            "after midnight\n"
        );
        assert_eq!(writer.state.current_date, Some(date(2024, 8, 11)));
    }

    #[test]
    fn test_retention_deletes_only_outdated_own_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 3, "2024-08-10T12:00:00[UTC]");
        writer.write_all(b"day one\n").unwrap();

        for name in [
            // 9 days old on 2024-08-11
            "test-2024-08-02.log",
            // 4 days old
            "test-2024-08-07.log",
            // exactly 3 days old
            "test-2024-08-08.log",
            // in the future
            "test-2099-01-01.log",
            // invalid dates
            "test-2024-02-30.log",
            "test-garbage.log",
            // other naming conventions
            "test-2024-08-01.log.gz",
            "other-2024-08-01.log",
            "test-app-2024-08-01.log",
            "test.log",
        ] {
            fs::write(dir.join(name), name).unwrap();
        }
        fs::create_dir(dir.join("test-2024-07-01.log")).unwrap();

        writer.state.clock.set_now(zoned("2024-08-11T00:00:01[UTC]"));
        writer.write_all(b"day two\n").unwrap();

        assert_eq!(
            list_filenames(dir),
            vec![
                "other-2024-08-01.log",
                "test-2024-02-30.log",
                "test-2024-07-01.log",
                "test-2024-08-01.log.gz",
                "test-2024-08-08.log",
                "test-2024-08-10.log",
                "test-2024-08-11.log",
                "test-2099-01-01.log",
                "test-app-2024-08-01.log",
                "test-garbage.log",
                "test.log",
            ]
        );
    }

    #[test]
    fn test_retention_runs_on_first_write_of_a_later_day() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 1, "2024-08-10T12:00:00[UTC]");
        fs::write(dir.join("test-2024-08-01.log"), "old").unwrap();

        writer.state.clock.set_now(zoned("2024-08-12T08:00:00[UTC]"));
        writer.write_all(b"late start\n").unwrap();

        // no empty file for the day the writer was built on
        assert_eq!(list_filenames(dir), vec!["test-2024-08-12.log"]);
    }

    #[test]
    fn test_no_retention_keeps_everything() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 0, "2024-08-10T12:00:00[UTC]");
        fs::write(dir.join("test-2000-01-01.log"), "ancient").unwrap();

        writer.write_all(b"one\n").unwrap();
        writer.state.clock.set_now(zoned("2024-08-11T12:00:00[UTC]"));
        writer.write_all(b"two\n").unwrap();

        assert_eq!(
            list_filenames(dir),
            vec!["test-2000-01-01.log", "test-2024-08-10.log", "test-2024-08-11.log"]
        );
    }

    #[test]
    fn test_never_rotation_ignores_dates_and_retention() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("test-2000-01-01.log"), "ancient").unwrap();

        let trap = CollectTrap::default();
        let mut writer = RollingFileWriterBuilder::new(dir.join("test.log"))
            .rotation(Rotation::Never)
            .retention_days(3)
            .trap(trap.clone())
            .clock(Clock::ManualClock(ManualClock::new(zoned(
                "2024-08-10T12:00:00[UTC]",
            ))))
            .build()
            .unwrap();

        let mut now = zoned("2024-08-10T12:00:00[UTC]");
        for i in 0..10 {
            writer.state.clock.set_now(now.clone());
            writeln!(writer, "day {i}").unwrap();
            now = now.checked_add(Span::new().days(1)).unwrap();
        }
        writer.flush().unwrap();

        assert_eq!(writer.state.current_date, None);
        assert_eq!(list_filenames(dir), vec!["test-2000-01-01.log", "test.log"]);
        let content = fs::read_to_string(dir.join("test.log")).unwrap();
        assert_eq!(content.lines().count(), 10);

        let trapped = trap.0.lock().unwrap();
        assert_eq!(
            *trapped,
            vec!["retention days take no effect without daily rotation".to_string()]
        );
    }

    #[test]
    fn test_failed_rollover_retries_on_next_write() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 0, "2024-08-10T12:00:00[UTC]");
        writer.write_all(b"first\n").unwrap();

        // a directory in the way makes opening the next file fail
        let blocker = dir.join("test-2024-08-11.log");
        fs::create_dir(&blocker).unwrap();
        writer.state.clock.set_now(zoned("2024-08-11T00:10:00[UTC]"));
        assert!(writer.write_all(b"lost\n").is_err());
        assert_eq!(writer.state.current_date, None);
        assert!(writer.writer.is_none());

        fs::remove_dir(&blocker).unwrap();
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            list_filenames(dir),
            vec!["test-2024-08-10.log", "test-2024-08-11.log"]
        );
        assert_eq!(
            fs::read_to_string(dir.join("test-2024-08-10.log")).unwrap(),
            "first\n"
        );
        assert_eq!(
            fs::read_to_string(dir.join("test-2024-08-11.log")).unwrap(),
            "second\n"
        );
    }

    #[test]
    fn test_retried_rollover_cleans_up_outdated_logs() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 3, "2024-08-10T12:00:00[UTC]");
        writer.write_all(b"first\n").unwrap();

        let blocker = dir.join("test-2024-08-11.log");
        fs::create_dir(&blocker).unwrap();
        writer.state.clock.set_now(zoned("2024-08-11T00:10:00[UTC]"));
        assert!(writer.write_all(b"lost\n").is_err());

        fs::write(dir.join("test-2024-08-01.log"), "old").unwrap();
        fs::remove_dir(&blocker).unwrap();
        writer.write_all(b"second\n").unwrap();

        assert_eq!(
            list_filenames(dir),
            vec!["test-2024-08-10.log", "test-2024-08-11.log"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_failed_close_on_rollover_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        // syncing a character device fails
        std::os::unix::fs::symlink("/dev/null", dir.join("test-2024-08-10.log")).unwrap();

        let mut writer = daily_writer(dir, 0, "2024-08-10T12:00:00[UTC]");
        writer.write_all(b"discarded\n").unwrap();

        writer.state.clock.set_now(zoned("2024-08-11T00:10:00[UTC]"));
        assert!(writer.write_all(b"lost\n").is_err());
        assert!(writer.writer.is_none());
        assert!(!dir.join("test-2024-08-11.log").exists());

        writer.write_all(b"after\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("test-2024-08-11.log")).unwrap(),
            "after\n"
        );
        assert_eq!(writer.state.current_date, Some(date(2024, 8, 11)));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_deletion_is_returned_from_write() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let mut writer = daily_writer(dir, 3, "2024-08-10T12:00:00[UTC]");
        writer.write_all(b"first\n").unwrap();

        // the next file exists, so only the deletions need a writable directory
        fs::write(dir.join("test-2024-08-11.log"), "").unwrap();
        fs::write(dir.join("test-2024-08-01.log"), "old").unwrap();
        fs::write(dir.join("test-2024-08-02.log"), "old").unwrap();
        fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();

        // privileged users ignore directory permissions
        let check = dir.join("permission-check");
        if fs::write(&check, "").is_ok() {
            fs::remove_file(&check).unwrap();
            fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        writer.state.clock.set_now(zoned("2024-08-11T00:10:00[UTC]"));
        let err = writer.write_all(b"lost\n").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
        assert!(dir.join("test-2024-08-01.log").exists());
        assert!(dir.join("test-2024-08-02.log").exists());

        // the new file stays open and cleanup waits for the next rollover
        writer.write_all(b"second\n").unwrap();
        writer.flush().unwrap();
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(
            fs::read_to_string(dir.join("test-2024-08-11.log")).unwrap(),
            "second\n"
        );
        assert!(dir.join("test-2024-08-01.log").exists());
    }

    #[test]
    fn test_written_bytes_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.bin");
        let mut writer = RollingFileWriter::builder(&path).build().unwrap();

        let mut rng = rand::rng();
        let mut expected = Vec::new();
        for _ in 0..100 {
            let len = rng.random_range(0..=256);
            let chunk = (0..len).map(|_| rng.random::<u8>()).collect::<Vec<_>>();
            writer.write_all(&chunk).unwrap();
            expected.extend_from_slice(&chunk);
        }
        writer.close().unwrap();

        assert_eq!(fs::read(&path).unwrap(), expected);
    }

    #[test]
    fn test_parse_log_date() {
        let temp_dir = TempDir::new().unwrap();
        let writer = daily_writer(temp_dir.path(), 3, "2024-08-10T12:00:00[UTC]");
        let state = &writer.state;

        assert_eq!(
            state.parse_log_date("test-2024-08-10.log"),
            Some(date(2024, 8, 10))
        );
        assert_eq!(state.parse_log_date("test-2024-08-10.txt"), None);
        assert_eq!(state.parse_log_date("test2024-08-10.log"), None);
        assert_eq!(state.parse_log_date("mytest-2024-08-10.log"), None);
        assert_eq!(state.parse_log_date("test-2024-08-10.log.1"), None);
        assert_eq!(state.parse_log_date("test-2024-13-10.log"), None);
    }

    #[test]
    fn test_dated_filename_without_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut writer = RollingFileWriterBuilder::new(temp_dir.path().join("service"))
            .rotation(Rotation::Daily)
            .clock(Clock::ManualClock(ManualClock::new(zoned(
                "2024-08-10T12:00:00[UTC]",
            ))))
            .build()
            .unwrap();
        writer.write_all(b"x").unwrap();

        assert_eq!(list_filenames(temp_dir.path()), vec!["service-2024-08-10"]);
    }

    #[test]
    fn test_build_rejects_path_without_filename() {
        assert!(RollingFileWriterBuilder::new("").build().is_err());
        assert!(RollingFileWriterBuilder::new("/").build().is_err());
    }
}
