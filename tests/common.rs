//! Test helper utilities for tablemind-errors tests
//!
//! This module provides reusable test fixtures and helper functions
//! that are shared across multiple test modules.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use tablemind_errors::{FailureCategory, ReplyRouter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Reply text the standard test router uses for consumable failures.
pub const CONSUMABLE_REPLY: &str =
    "Something went wrong with that counter. Check the name and range.";

/// Reply text the standard test router uses for selection failures.
pub const SELECTION_REPLY: &str =
    "The prompt expired. Run the command again to redo your pick.";

/// Reply text the standard test router uses for external client failures.
pub const EXTERNAL_CLIENT_REPLY: &str =
    "The sheet service is having trouble. Try again in a moment.";

/// Reply text the standard test router uses for combat failures.
pub const COMBAT_REPLY: &str =
    "Combat in this channel looks off. Check the combat status and retry.";

/// Create a router with one fixed reply registered per category.
///
/// This mirrors a typical deployment: every grouping gets a friendlier
/// fallback, and ungrouped failures still reach the backstop.
pub fn standard_router() -> ReplyRouter {
    ReplyRouter::new()
        .with_category_reply(FailureCategory::Consumable, CONSUMABLE_REPLY)
        .with_category_reply(FailureCategory::Selection, SELECTION_REPLY)
        .with_category_reply(FailureCategory::ExternalClient, EXTERNAL_CLIENT_REPLY)
        .with_category_reply(FailureCategory::Combat, COMBAT_REPLY)
}

/// Mount a login endpoint that rejects every request with 401.
pub async fn mount_login_rejection(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid token"
        })))
        .mount(server)
        .await;
}

/// Mount a login endpoint that accepts every request.
pub async fn mount_login_success(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "session-token-1"
        })))
        .mount(server)
        .await;
}

/// Mount a sheet-insert endpoint that fails every request with 500.
pub async fn mount_insert_conflict(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sheets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "duplicate key"
        })))
        .mount(server)
        .await;
}
