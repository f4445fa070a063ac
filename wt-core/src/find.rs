//! Upward file lookup.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Search `start` and each of its ancestors for a file called `name`.
///
/// Returns the first match, closest directory first. A relative `start` is
/// resolved against the current directory first, so the walk reaches the
/// real parents of `.`. Permission errors and other failures while probing
/// a candidate are reported rather than treated as "not there".
pub fn find_up(start: &Path, name: &str) -> Result<Option<PathBuf>> {
    let start = std::path::absolute(start).map_err(|e| Error::io(start, e))?;
    for dir in start.ancestors() {
        let candidate = dir.join(name);
        match candidate.try_exists() {
            Ok(true) if candidate.is_file() => return Ok(Some(candidate)),
            Ok(_) => continue,
            Err(e) => return Err(Error::io(candidate, e)),
        }
    }
    Ok(None)
}
