//! # tablemind-errors
//!
//! Failure taxonomy for the Tablemind tabletop assistant: categorized,
//! user-renderable failures for characters, counters, combat, and imports.
//!
//! ## Key Features
//!
//! - **One root contract**: every failure is a [`DomainFailure`] whose `Display` output is the complete user-facing message
//! - **Category groupings**: consumable, selection, external-client, and combat families for coarse-grained handling
//! - **Logging constructors**: failures emit structured events at construction, not at render time
//! - **Reply routing**: [`ReplyRouter`] turns any failure into the reply shown to the user, with per-category overrides
//! - **Import boundary**: [`ImportResultExt`] converts raw transport errors before they cross into command handling
//!
//! ## Example
//!
//! ```rust
//! use tablemind_errors::{DomainFailure, DomainResult, FailureCategory, ReplyRouter};
//!
//! fn spend_charge(remaining: u32) -> DomainResult<u32> {
//!     remaining
//!         .checked_sub(1)
//!         .ok_or_else(DomainFailure::counter_out_of_bounds)
//! }
//!
//! let router = ReplyRouter::new()
//!     .with_category_reply(FailureCategory::Consumable, "Something went wrong with that counter.");
//!
//! if let Err(failure) = spend_charge(0) {
//!     let reply = router.route(&failure);
//!     assert_eq!(reply.text, "Something went wrong with that counter.");
//! }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod boundary;
pub mod failure;
pub mod import;
pub mod kind;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use boundary::{
    CategoryHandler, Reply, ReplyRouter, ReplySource, RouterConfig, StaticCategoryReply,
};
pub use failure::{DomainFailure, DomainResult};
pub use import::ImportResultExt;
pub use kind::{FailureCategory, FailureKind};
