//! Local store for puzzle input files
//!
//! The CLI never fabricates puzzle text: an external collaborator drops the
//! inputs into a directory, laid out as `{year}_day{day:02}.txt`, and the
//! store only reads them back.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reading from the input store
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only view of the input directory
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path where the input for a specific year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check whether an input file is present
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for a year/day, or None if the file is absent
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }
}
