//! Puzzle input lookup on the local filesystem

use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves `<dir>/<year>/dayDD.txt`, with an optional file standing in for
/// one puzzle's input.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
    replacement: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            replacement: None,
        }
    }

    /// Read `year`/`day` from `path` instead of the input directory.
    pub fn with_override(mut self, year: u16, day: u8, path: impl Into<PathBuf>) -> Self {
        self.replacement = Some((year, day, path.into()));
        self
    }

    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.replacement {
            Some((y, d, path)) if *y == year && *d == day => path.clone(),
            _ => self
                .dir
                .join(year.to_string())
                .join(format!("day{day:02}.txt")),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        debug!(path = %path.display(), "reading input");
        std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                InputError::NotFound { path }
            } else {
                InputError::Read { path, source }
            }
        })
    }
}
