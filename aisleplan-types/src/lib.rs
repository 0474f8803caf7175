//! Shared DTOs (schemas-as-code) for the aisleplan workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod catalog;
pub mod line;
pub mod list;

/// Schema identifiers.
pub mod schema {
    pub const AISLEPLAN_LIST_V1: &str = "aisleplan.list.v1";
    pub const AISLEPLAN_CATALOG_V1: &str = "aisleplan.catalog.v1";
}
