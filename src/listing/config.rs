//! Configuration for a single listing invocation

use std::path::PathBuf;

/// Threshold above which the confirmation gate engages, unless overridden.
pub const DEFAULT_ITEM_LIMIT: usize = 50;

/// Fully-resolved invocation configuration.
///
/// Assembled once by the caller (the CLI binary, or a test) and passed down
/// immutably; nothing in the pipeline writes back into it.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Directory whose children are listed. Must exist and be a directory.
    pub dir: PathBuf,
    /// Include entries whose name starts with the hidden marker (`.`).
    pub show_hidden: bool,
    /// Render the directories branch only.
    pub only_directories: bool,
    /// Render the files branch only. When combined with `only_directories`,
    /// directories win.
    pub only_files: bool,
    /// Substring filter over names and resolved descriptions. `None` or
    /// empty means no filtering.
    pub search_word: Option<String>,
    /// Show the number of visible children next to each directory.
    pub show_child_count: bool,
    /// Item count above which the confirmation gate engages.
    pub item_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            show_hidden: false,
            only_directories: false,
            only_files: false,
            search_word: None,
            show_child_count: false,
            item_limit: DEFAULT_ITEM_LIMIT,
        }
    }
}
