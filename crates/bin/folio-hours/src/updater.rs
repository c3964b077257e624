//! Reads, updates and writes the tracker markup in a page on disk.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use folio_domain::study_tracker::{HoursUpdate, update_markup};

/// Add `hours` to the tracker in the file at `path`.
///
/// The file is only written when the update succeeds.
///
/// # Errors
///
/// Fails when the file cannot be read or written, or holds no counter.
pub fn update_file(path: &Path, hours: u32, goal: u32) -> anyhow::Result<HoursUpdate> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (updated, update) = update_markup(&html, hours, goal)
        .with_context(|| format!("failed to update study hours in {}", path.display()))?;
    fs::write(path, updated).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), ?update, "tracker updated");
    Ok(update)
}
