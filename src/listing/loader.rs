//! Filesystem item loading
//!
//! Enumerates the immediate children of one directory and partitions them
//! into directories and files. No recursion, no ordering guarantee —
//! sorting happens in the presenter, immediately before rendering.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::config::ListingConfig;

/// Filesystem kind of a listed item, classified at enumeration time.
///
/// Symlinks resolve to their target kind; entries that are neither a
/// directory nor a file (broken links, sockets) are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Directory,
    File,
}

/// One immediate child of the target directory.
#[derive(Debug, Clone)]
pub struct Item {
    pub name: String,
    pub path: PathBuf,
    pub kind: ItemKind,
    /// Visible-children count, populated for directories when the listing
    /// was configured to show it.
    pub child_count: Option<usize>,
}

/// Loader output: children partitioned by kind.
#[derive(Debug, Default)]
pub struct Listing {
    pub dirs: Vec<Item>,
    pub files: Vec<Item>,
}

/// Whether a name marks a hidden entry.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Enumerate the immediate children of `config.dir`.
///
/// Hidden entries are included only when `show_hidden` is set; toggling
/// visibility never changes how an entry is classified. Fails when the
/// target does not exist or is not a directory — the only fatal condition
/// in the crate. Individual unreadable entries are skipped, not fatal.
pub fn load_items(config: &ListingConfig) -> io::Result<Listing> {
    let dir = &config.dir;
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotADirectory,
            format!("'{}' is not a directory", dir.display()),
        ));
    }

    let mut listing = Listing::default();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!("skipping entry with undecodable name {:?}", raw);
                continue;
            }
        };
        if is_hidden(&name) && !config.show_hidden {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            let child_count = if config.show_child_count {
                count_children(&path, config.show_hidden)
            } else {
                None
            };
            listing.dirs.push(Item {
                name,
                path,
                kind: ItemKind::Directory,
                child_count,
            });
        } else if path.is_file() {
            listing.files.push(Item {
                name,
                path,
                kind: ItemKind::File,
                child_count: None,
            });
        } else {
            debug!("skipping {}: neither file nor directory", path.display());
        }
    }

    Ok(listing)
}

/// Count the visible children of a subdirectory, honoring the same hidden
/// rule as the listing itself. Unreadable subdirectories yield `None`.
fn count_children(dir: &Path, show_hidden: bool) -> Option<usize> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("cannot count children of {}: {}", dir.display(), err);
            return None;
        }
    };
    let count = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| show_hidden || !is_hidden(&entry.file_name().to_string_lossy()))
        .count();
    Some(count)
}
