//! Flat-file persistence for rooms and users.
//!
//! RULE: Only the store touches the data files.
//!
//! Each file holds one record per line, fields separated by `|`.
//! Saving overwrites the users file, then the rooms file. The pair is
//! not written atomically: a failure between the two leaves them out of
//! step, and nothing is rolled back.
//!
//! Loading skips lines it cannot parse. If a file is missing, or cannot
//! be read at all, the store falls back to seed data and writes it out
//! so the next load finds it.

mod room;
mod user;

pub use room::{parse_room_line, room_to_line};
pub use user::{parse_user_line, user_to_line};

use crate::{
    config::StoreConfig,
    error::{StoreError, StoreResult},
    seed::{DefaultSeed, SeedData},
    types::{HotelData, Room, User},
};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct HotelStore<S: SeedData = DefaultSeed> {
    config: StoreConfig,
    seed: S,
}

impl HotelStore {
    /// Store backed by the built-in seed catalog.
    pub fn open(config: StoreConfig) -> Self {
        Self::with_seed(config, DefaultSeed)
    }
}

impl<S: SeedData> HotelStore<S> {
    pub fn with_seed(config: StoreConfig, seed: S) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Overwrite both data files with `rooms` and `users`, in the given order.
    ///
    /// Failures are logged and returned. Whatever was written before the
    /// failure stays on disk.
    pub fn save(&self, rooms: &[Room], users: &[User]) -> StoreResult<()> {
        let result = self.write_users(users).and_then(|()| self.write_rooms(rooms));
        match &result {
            Ok(()) => log::info!(
                "store: saved {} rooms and {} users",
                rooms.len(),
                users.len()
            ),
            Err(e) => log::error!("store: save failed: {e}"),
        }
        result
    }

    /// Load rooms and users, never failing.
    ///
    /// Any error reading either file (missing, unreadable, not UTF-8)
    /// discards what was read so far and returns freshly persisted seed data.
    pub fn load(&self) -> HotelData {
        match self.try_load() {
            Ok(data) => data,
            Err(e) if e.is_missing_file() => {
                log::info!("store: no data files yet ({e}), creating seed data");
                self.reseed()
            }
            Err(e) => {
                log::warn!("store: unexpected error loading data ({e}), reverting to seed data");
                self.reseed()
            }
        }
    }

    /// Load without the seed fallback. Corrupt lines are still skipped.
    pub fn try_load(&self) -> StoreResult<HotelData> {
        let users = self.read_users()?;
        let rooms = self.read_rooms()?;
        log::info!(
            "store: loaded {} rooms and {} users",
            rooms.len(),
            users.len()
        );
        Ok(HotelData { rooms, users })
    }

    fn reseed(&self) -> HotelData {
        let data = HotelData {
            rooms: self.seed.rooms(),
            users: self.seed.users(),
        };
        // Persist the seed so the next load finds both files.
        self.save(&data.rooms, &data.users).ok();
        data
    }
}

/// Read a whole file as lines. Fails on a missing file or invalid UTF-8.
fn read_lines(path: &Path) -> StoreResult<Vec<String>> {
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::io(path, e))
}

/// Truncate `path` and write one line per item.
fn write_lines<I>(path: &Path, lines: I) -> StoreResult<()>
where
    I: IntoIterator<Item = String>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for line in lines {
        writeln!(out, "{line}").map_err(|e| StoreError::io(path, e))?;
    }
    out.flush().map_err(|e| StoreError::io(path, e))
}

/// Split a trimmed line into its `|`-separated fields.
fn split_line(line: &str) -> Vec<&str> {
    line.trim().split(crate::types::LINE_DELIMITER).collect()
}
