//! Content-transform pipeline
//!
//! The presenter pushes each branch of the listing through a chain of
//! stages. A stage takes `(items, context)` and returns `(items, context)`;
//! contexts are moved between stages, never shared or mutated in place, so
//! new transforms compose without touching the presenter.

use crate::description::{self, Description};
use crate::output::render;

use super::loader::{Item, ItemKind};

/// Invocation-wide state threaded through the stage chain.
#[derive(Debug, Clone, Default)]
pub struct StageContext {
    /// Substring filter for the search stage. Empty or absent disables it.
    pub search_word: Option<String>,
}

/// A pipeline item: a loaded entry plus its resolved presentation data.
#[derive(Debug, Clone)]
pub struct Annotated {
    pub item: Item,
    pub description: Description,
}

impl Annotated {
    /// Wrap a freshly loaded item. The description starts as the kind's
    /// placeholder until the annotate stage resolves it.
    pub fn from_item(item: Item) -> Self {
        let description = match item.kind {
            ItemKind::Directory => Description::dir_placeholder(),
            ItemKind::File => Description::file_placeholder(),
        };
        Self { item, description }
    }

    /// Child-count suffix rendered after the name, e.g. `" (3)"`.
    pub fn count_suffix(&self) -> Option<String> {
        self.item.child_count.map(|n| format!(" ({n})"))
    }

    /// Display label: name plus the optional child-count suffix.
    pub fn label(&self) -> String {
        match self.count_suffix() {
            Some(suffix) => format!("{}{}", self.item.name, suffix),
            None => self.item.name.clone(),
        }
    }

    fn label_width(&self) -> usize {
        self.label().chars().count()
    }
}

/// One content transform over a branch of the listing.
pub trait Stage {
    fn apply(&self, items: Vec<Annotated>, ctx: StageContext) -> (Vec<Annotated>, StageContext);
}

/// Resolves each item's description. Sidecar reads happen here, exactly
/// once per directory per invocation; files keep their placeholder.
pub struct Annotate;

impl Stage for Annotate {
    fn apply(&self, items: Vec<Annotated>, ctx: StageContext) -> (Vec<Annotated>, StageContext) {
        let items = items
            .into_iter()
            .map(|mut annotated| {
                if annotated.item.kind == ItemKind::Directory {
                    let column = render::description_column(annotated.label_width());
                    annotated.description = description::resolve_dir(&annotated.item.path, column);
                }
                annotated
            })
            .collect();
        (items, ctx)
    }
}

/// Retains items whose name or resolved description contains the search
/// word as a substring (case-sensitive). Without a word it passes items
/// through untouched.
pub struct SearchFilter;

impl Stage for SearchFilter {
    fn apply(&self, items: Vec<Annotated>, ctx: StageContext) -> (Vec<Annotated>, StageContext) {
        let word = ctx.search_word.clone().unwrap_or_default();
        if word.is_empty() {
            return (items, ctx);
        }
        let items = items
            .into_iter()
            .filter(|annotated| {
                annotated.item.name.contains(&word) || annotated.description.text().contains(&word)
            })
            .collect();
        (items, ctx)
    }
}
