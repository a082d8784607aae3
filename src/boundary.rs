//! Presentation-boundary reply routing.
//!
//! The router is the one place that terminates failure propagation: it
//! turns a [`DomainFailure`] into the [`Reply`] shown to the user. Category
//! handlers get first refusal on failures in their grouping; everything
//! else falls through to the root backstop, which renders the failure's
//! own message. Routing is total: every failure yields a reply.
//!
//! # Routing Example
//!
//! ```rust
//! use tablemind_errors::{DomainFailure, FailureCategory, ReplyRouter, ReplySource};
//!
//! let router = ReplyRouter::new()
//!     .with_category_reply(FailureCategory::Consumable, "Check your counters and try again.");
//!
//! // A consumable failure takes the category path
//! let reply = router.route(&DomainFailure::no_reset());
//! assert_eq!(reply.text, "Check your counters and try again.");
//! assert_eq!(reply.source, ReplySource::Category(FailureCategory::Consumable));
//!
//! // Everything else falls through to the root backstop
//! let reply = router.route(&DomainFailure::no_character());
//! assert_eq!(reply.text, "You have no character active.");
//! assert_eq!(reply.source, ReplySource::Backstop);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::failure::{DomainFailure, DomainResult};
use crate::kind::FailureCategory;
use crate::logging::{log_debug, log_info};

/// Which routing path produced a reply's text.
///
/// Useful for transcript tagging and for asserting routing behavior in
/// tests without string-matching on reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReplySource {
    /// The root-contract backstop: the failure's own rendered message.
    Backstop,

    /// A handler registered for this category supplied the text.
    Category(FailureCategory),
}

/// A rendered reply ready for display to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// The text to show the user.
    pub text: String,

    /// Which routing path produced the text.
    pub source: ReplySource,
}

/// Trait for category-level reply handlers.
///
/// A handler claims one [`FailureCategory`] and may produce reply text for
/// any failure in that grouping. Returning `None` declines the failure and
/// lets routing continue, either to a later handler for the same category
/// or to the root backstop.
#[cfg_attr(test, mockall::automock)]
pub trait CategoryHandler: Send + Sync {
    /// The category this handler claims.
    fn category(&self) -> FailureCategory;

    /// Produce reply text for a failure in this handler's category.
    ///
    /// The failure is passed by reference so handlers can vary their
    /// reply by kind or payload; they must not rely on mutating it.
    fn reply_text(&self, failure: &DomainFailure) -> Option<String>;
}

/// The simplest handler: one fixed reply for every failure in a category.
#[derive(Debug, Clone)]
pub struct StaticCategoryReply {
    category: FailureCategory,
    text: String,
}

impl StaticCategoryReply {
    pub fn new(category: FailureCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl CategoryHandler for StaticCategoryReply {
    fn category(&self) -> FailureCategory {
        self.category
    }

    fn reply_text(&self, _failure: &DomainFailure) -> Option<String> {
        Some(self.text.clone())
    }
}

/// Declarative router configuration: one fallback reply text per category.
///
/// Deserializable so deployments can ship reply texts alongside the rest
/// of their settings. Build the router with
/// [`ReplyRouter::from_config`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Fallback reply text per category.
    #[serde(default)]
    pub category_replies: HashMap<FailureCategory, String>,
}

impl RouterConfig {
    /// Validate the configured reply texts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainFailure::InvalidArgument`] if any configured reply
    /// text is empty or whitespace-only. A blank reply would hide the
    /// failure from the user entirely.
    pub fn validate(&self) -> DomainResult<()> {
        for (category, text) in &self.category_replies {
            if text.trim().is_empty() {
                return Err(DomainFailure::invalid_argument(format!(
                    "fallback reply for category `{category}` must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Routes failures to reply text at the presentation boundary.
///
/// Handlers are consulted in registration order; the first handler whose
/// category matches and that does not decline wins. Failures with no
/// category, or whose handlers all decline, take the backstop path and
/// render their own message. The router never drops a failure.
pub struct ReplyRouter {
    handlers: Vec<Box<dyn CategoryHandler>>,
}

impl ReplyRouter {
    /// Create a router with no category handlers.
    ///
    /// Every failure routed through it takes the backstop path until
    /// handlers are registered.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Build a router from declarative configuration.
    ///
    /// Validates the config first, then registers one
    /// [`StaticCategoryReply`] per configured category.
    ///
    /// # Errors
    ///
    /// Returns [`DomainFailure::InvalidArgument`] if
    /// [`RouterConfig::validate`] rejects the config.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tablemind_errors::{DomainFailure, FailureCategory, ReplyRouter, RouterConfig};
    ///
    /// let mut config = RouterConfig::default();
    /// config.category_replies.insert(
    ///     FailureCategory::Combat,
    ///     "Something is off with combat in this channel.".to_string(),
    /// );
    ///
    /// let router = ReplyRouter::from_config(&config).unwrap();
    /// let reply = router.route(&DomainFailure::no_combatants());
    /// assert_eq!(reply.text, "Something is off with combat in this channel.");
    /// ```
    pub fn from_config(config: &RouterConfig) -> DomainResult<Self> {
        config.validate()?;
        let mut router = Self::new();
        for (category, text) in &config.category_replies {
            router = router.with_category_reply(*category, text.clone());
        }
        Ok(router)
    }

    /// Register a fixed reply for every failure in `category`.
    pub fn with_category_reply(self, category: FailureCategory, text: impl Into<String>) -> Self {
        self.with_handler(Box::new(StaticCategoryReply::new(category, text)))
    }

    /// Register a custom category handler.
    ///
    /// Handlers for the same category stack: earlier registrations are
    /// consulted first, and a decline passes the failure along.
    pub fn with_handler(mut self, handler: Box<dyn CategoryHandler>) -> Self {
        log_info!(
            category = %handler.category(),
            "Registered category reply handler"
        );
        self.handlers.push(handler);
        self
    }

    /// Route a failure to the reply shown to the user.
    ///
    /// Total over all failures: if no handler claims the failure, the
    /// backstop renders the failure's own message, so the user always
    /// sees something.
    pub fn route(&self, failure: &DomainFailure) -> Reply {
        if let Some(category) = failure.category() {
            for handler in &self.handlers {
                if handler.category() != category {
                    continue;
                }
                if let Some(text) = handler.reply_text(failure) {
                    log_debug!(
                        category = %category,
                        kind = ?failure.kind(),
                        "Routed failure to category handler"
                    );
                    return Reply {
                        text,
                        source: ReplySource::Category(category),
                    };
                }
            }
        }

        log_debug!(kind = ?failure.kind(), "Routed failure to root backstop");
        Reply {
            text: failure.to_string(),
            source: ReplySource::Backstop,
        }
    }
}

impl Default for ReplyRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReplyRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyRouter")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
