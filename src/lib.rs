//! lsi - ls, improved: directory listings with human-authored descriptions

pub mod confirm;
pub mod description;
pub mod listing;
pub mod output;

pub use confirm::{ConfirmationProvider, StdinConfirmer};
pub use description::Description;
pub use listing::{Item, ItemKind, Listing, ListingConfig, Presenter, Stage, StageContext};
pub use output::Theme;
