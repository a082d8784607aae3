//! Selection timeout example demonstrating bounded waits and cancellation.
//!
//! When a command offers the user several options, the selection subsystem
//! waits a bounded time for a pick. This example shows how to:
//! - Fail fast with `NoSelectionElements` when there is nothing to pick
//! - Convert an expired wait into `SelectionCancelled`
//! - Route both outcomes through the presentation boundary
//!
//! # Running
//!
//! ```bash
//! cargo run --example selection_timeout
//! ```
//!
//! The taxonomy only defines the resulting values; the timeout itself
//! belongs to whoever awaits the user, as this example does with
//! `tokio::time::timeout`.

use std::time::Duration;

use tablemind_errors::{DomainFailure, DomainResult, FailureCategory, ReplyRouter};
use tracing_subscriber::EnvFilter;

/// Wait for the user to pick one of `options`, up to `patience`.
///
/// The pick itself never arrives in this demo, standing in for a user who
/// walked away from the prompt.
async fn wait_for_pick(options: &[&str], patience: Duration) -> DomainResult<String> {
    if options.is_empty() {
        return Err(DomainFailure::no_selection_elements(None));
    }

    println!("  Options: {:?}", options);
    println!("  Waiting {:?} for a pick...", patience);

    let pick = tokio::time::timeout(patience, std::future::pending::<usize>());
    match pick.await {
        Ok(index) => Ok(options[index].to_string()),
        Err(_elapsed) => Err(DomainFailure::selection_cancelled()),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let router = ReplyRouter::new().with_category_reply(
        FailureCategory::Selection,
        "The prompt expired. Run the command again to redo your pick.",
    );

    println!("=== Empty Prompt ===\n");
    match wait_for_pick(&[], Duration::from_millis(250)).await {
        Ok(choice) => println!("  Picked: {}", choice),
        Err(failure) => {
            println!("  Failure: {}", failure);
            println!("  Routed reply: \"{}\"\n", router.route(&failure).text);
        }
    }

    println!("=== Expired Wait ===\n");
    match wait_for_pick(&["Fireball", "Fire Bolt", "Firewall"], Duration::from_millis(250)).await {
        Ok(choice) => println!("  Picked: {}", choice),
        Err(failure) => {
            println!("  Failure: {}", failure);
            println!("  Routed reply: \"{}\"\n", router.route(&failure).text);
        }
    }

    println!("=== Backstop Comparison ===\n");
    let bare = ReplyRouter::new();
    let failure = DomainFailure::selection_cancelled();
    println!("  Without a selection handler: \"{}\"", bare.route(&failure).text);
    println!("  With a selection handler:    \"{}\"", router.route(&failure).text);
}
