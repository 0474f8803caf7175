//! Domain logic: turn a pile of per-recipe ingredient lines into one
//! deduplicated, aisle-ordered shopping list.
//!
//! This crate owns *what* a consolidated list contains and in what order. It
//! does not own how lists are loaded or rendered; that's `aisleplan-import`
//! and `aisleplan-render`.

mod consolidate;
mod resolver;
mod sections;

pub use consolidate::consolidate;
pub use resolver::{resolve_selection, ResolveError};
pub use sections::group_by_aisle;
