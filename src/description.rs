//! Sidecar description resolution
//!
//! A directory may carry a `.description.lsi` file whose contents serve as
//! its human-readable annotation. Resolution reads that file at most once
//! per directory per invocation and re-indents continuation lines so they
//! align under the description column. Anything that prevents reading the
//! sidecar falls back to the placeholder.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Fixed name of the per-directory sidecar file.
pub const SIDECAR_NAME: &str = ".description.lsi";

/// Placeholder shown for directories without an authored description.
pub const DIR_PLACEHOLDER: &str = "Dir";

/// Placeholder shown for files. Files never get a sidecar lookup.
pub const FILE_PLACEHOLDER: &str = "File";

/// A resolved description: either the sidecar's contents or a placeholder.
///
/// Authored text is stored already re-indented for display; placeholders
/// render uncolored so they stay visually distinct from authored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Authored(String),
    Placeholder(&'static str),
}

impl Description {
    /// Placeholder for a directory without a usable sidecar.
    pub fn dir_placeholder() -> Self {
        Description::Placeholder(DIR_PLACEHOLDER)
    }

    /// Placeholder carried by every file entry.
    pub fn file_placeholder() -> Self {
        Description::Placeholder(FILE_PLACEHOLDER)
    }

    pub fn text(&self) -> &str {
        match self {
            Description::Authored(text) => text,
            Description::Placeholder(text) => text,
        }
    }

    pub fn is_authored(&self) -> bool {
        matches!(self, Description::Authored(_))
    }
}

/// Resolve the description for the directory at `dir`.
///
/// `description_column` is the column where description text starts on the
/// rendered line; newlines in the sidecar are re-indented to it so
/// continuation lines align under the first.
///
/// Absent, unreadable, and blank sidecars all resolve to the `Dir`
/// placeholder. Unreadable is logged at debug level, never surfaced.
pub fn resolve_dir(dir: &Path, description_column: usize) -> Description {
    let sidecar = dir.join(SIDECAR_NAME);
    let raw = match fs::read_to_string(&sidecar) {
        Ok(raw) => raw,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                debug!("unreadable sidecar {}: {}", sidecar.display(), err);
            }
            return Description::dir_placeholder();
        }
    };

    if raw.trim().is_empty() {
        return Description::dir_placeholder();
    }

    let indent = " ".repeat(description_column);
    let mut text = raw.replace('\n', &format!("\n{indent}"));

    // A trailing newline in the sidecar leaves a blank continuation line;
    // drop it.
    if let Some(pos) = text.rfind('\n') {
        let last = &text[pos + 1..];
        if !last.is_empty() && last.chars().all(|c| c == ' ') {
            text.truncate(pos);
        }
    }

    Description::Authored(text)
}
