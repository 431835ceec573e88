// Rust guideline compliant 2026-10-16

//! Build-number file handling.
//!
//! A version file holds a line of the form `BUILD = 41` (the key is
//! configurable). Incrementing rewrites only that line and leaves every other
//! byte of the file untouched.

use crate::{Action, Error, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locates the build number inside `content`.
///
/// The first line that starts with `<key> =` and has digits after the `=`
/// wins.
///
/// # Returns
///
/// The byte range of the line (without its terminator) and the parsed value.
pub fn find_build_number(content: &str, key: &str) -> Option<(std::ops::Range<usize>, u64)> {
    let prefix = format!("{} =", key);
    let mut offset = 0;
    for raw in content.split_inclusive('\n') {
        let line = raw.trim_end_matches('\n').trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix(&prefix) {
            let digits: String = rest
                .trim_start()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            if let Ok(value) = digits.parse::<u64>() {
                return Some((offset..offset + line.len(), value));
            }
        }
        offset += raw.len();
    }
    None
}

/// Returns `content` with the build number incremented by one.
///
/// # Returns
///
/// The new content together with the previous and the new build number.
///
/// # Errors
///
/// Returns an error if no build number line exists or the value would
/// overflow.
pub fn increment_content(content: &str, key: &str, path: &Path) -> Result<(String, u64, u64)> {
    let (range, current) =
        find_build_number(content, key).ok_or_else(|| Error::MissingBuildNumber {
            key: key.to_string(),
            path: path.to_path_buf(),
        })?;
    let next = current
        .checked_add(1)
        .ok_or(Error::BuildNumberOverflow(current))?;

    let mut updated = String::with_capacity(content.len() + 1);
    updated.push_str(&content[..range.start]);
    updated.push_str(&format!("{} = {}", key, next));
    updated.push_str(&content[range.end..]);
    Ok((updated, current, next))
}

/// A version file on disk and the key of its build-number line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildNumberFile {
    path: PathBuf,
    key: String,
}

impl BuildNumberFile {
    /// Creates a handle for the version file at `path`.
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current build number.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or has no build
    /// number line.
    pub fn read(&self) -> Result<u64> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.open_error(e))?;
        find_build_number(&content, &self.key)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::MissingBuildNumber {
                key: self.key.clone(),
                path: self.path.clone(),
            })
    }

    /// Increments the build number in place.
    ///
    /// The file is held under an exclusive advisory lock for the whole
    /// read-modify-write cycle.
    ///
    /// # Returns
    ///
    /// The previous and the new build number.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing or locked by another process
    /// - No build number line is present
    /// - The file cannot be rewritten
    pub fn increment(&self) -> Result<(u64, u64)> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| self.open_error(e))?;

        file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to lock {}: {}", self.path.display(), e),
            ))
        })?;

        let result = self.rewrite_locked(&mut file);
        let _ = file.unlock();

        let (previous, next) = result?;
        info!(path = %self.path.display(), previous, next, "build number incremented");
        Ok((previous, next))
    }

    fn rewrite_locked(&self, file: &mut File) -> Result<(u64, u64)> {
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        let (updated, previous, next) = increment_content(&content, &self.key, &self.path)?;

        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(updated.as_bytes())?;
        file.sync_all()?;
        Ok((previous, next))
    }

    fn open_error(&self, err: std::io::Error) -> Error {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::VersionFileNotFound(self.path.clone())
        } else {
            Error::Io(err)
        }
    }
}

/// Built-in build incrementer, used when no external bump command is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementBuild {
    version_file: PathBuf,
    key: String,
}

impl IncrementBuild {
    /// Creates the action for a version file relative to the repository root.
    pub fn new(version_file: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            version_file: version_file.into(),
            key: key.into(),
        }
    }
}

impl Action for IncrementBuild {
    fn run(&self, root: &Path) -> Result<Option<String>> {
        let file = BuildNumberFile::new(root.join(&self.version_file), self.key.clone());
        debug!(path = %file.path().display(), key = %self.key, "incrementing build number");
        let (previous, next) = file.increment()?;
        Ok(Some(format!(
            "Build number incremented from {} to {}",
            previous, next
        )))
    }

    fn describe(&self) -> String {
        format!("increment `{}` in `{}`", self.key, self.version_file.display())
    }
}
