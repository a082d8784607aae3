//! Reply routing example demonstrating failure kinds, categories, and the
//! presentation boundary.
//!
//! This example shows how to:
//! - Construct failures with the logging constructors
//! - Inspect kind and category identity for dispatch decisions
//! - Route failures through the root backstop
//! - Register per-category fallback replies
//! - Build a router from declarative configuration
//!
//! # Running
//!
//! ```bash
//! cargo run --example reply_routing
//!
//! # With full construction-time logging visible:
//! RUST_LOG=debug cargo run --example reply_routing
//! ```
//!
//! # Categories
//!
//! | Category | Members | Typical fallback |
//! |----------|---------|------------------|
//! | Consumable | counter lookups, bounds, resets, slot levels | generic counter help |
//! | Selection | empty prompts, expired waits | re-run the command |
//! | ExternalClient | sheet service login/insert | try again later |
//! | Combat | channel/combat state mismatches | check combat status |
//!
//! # Key Methods
//!
//! - `failure.to_string()` - The complete user-facing message
//! - `failure.kind()` - Payload-free identity for dispatch
//! - `failure.category()` - Grouping for coarse-grained handling
//! - `router.route(&failure)` - The reply shown to the user

use tablemind_errors::{
    DomainFailure, FailureCategory, ReplyRouter, ReplySource, RouterConfig,
};
use tracing_subscriber::EnvFilter;

/// Demonstrates constructing failures and reading their identity
fn demonstrate_taxonomy() {
    println!("=== Failure Kinds and Categories ===\n");

    // Fixed-message kinds (Category: none)
    let no_character = DomainFailure::no_character();
    print_failure_info("NoCharacter", &no_character);

    // Required caller message, rendered verbatim
    let invalid_argument =
        DomainFailure::invalid_argument("Expected a number for the bonus, got `two`.");
    print_failure_info("InvalidArgument", &invalid_argument);

    // Template substitution from any Display cause
    let evaluation = DomainFailure::evaluation_error("name 'proficiency' is not defined");
    print_failure_info("EvaluationError", &evaluation);

    // Optional override with a stock default
    let sheet_default = DomainFailure::outdated_sheet(None);
    print_failure_info("OutdatedSheet (default)", &sheet_default);

    let sheet_custom = DomainFailure::outdated_sheet(Some(
        "Your class feature needs a sheet refresh.".to_string(),
    ));
    print_failure_info("OutdatedSheet (override)", &sheet_custom);

    // Grouped kinds
    let out_of_bounds = DomainFailure::counter_out_of_bounds();
    print_failure_info("CounterOutOfBounds", &out_of_bounds);

    let insert = DomainFailure::insert_failure("duplicate key");
    print_failure_info("InsertFailure", &insert);
}

/// Print detailed information about a failure
fn print_failure_info(name: &str, failure: &DomainFailure) {
    println!("{}:", name);
    println!("  Message: {}", failure);
    println!("  Kind: {:?}", failure.kind());
    match failure.category() {
        Some(category) => println!("  Category: {}", category),
        None => println!("  Category: none (root)"),
    }
    println!();
}

/// Demonstrates the root backstop: every failure yields a reply
fn demonstrate_backstop_routing() {
    println!("=== Root Backstop Routing ===\n");

    let router = ReplyRouter::new();

    let failures = vec![
        DomainFailure::no_character(),
        DomainFailure::no_spell_dc(),
        DomainFailure::evaluation_error("division by zero"),
        DomainFailure::combat_not_found(),
    ];

    println!("A bare router renders every failure's own message:\n");
    for failure in &failures {
        let reply = router.route(failure);
        println!("  {:?} -> \"{}\"", failure.kind(), reply.text);
    }
    println!();
}

/// Demonstrates per-category fallback replies
fn demonstrate_category_routing() {
    println!("=== Category-Based Routing ===\n");

    let router = ReplyRouter::new()
        .with_category_reply(
            FailureCategory::Consumable,
            "Something went wrong with that counter. Check the name and range.",
        )
        .with_category_reply(
            FailureCategory::Selection,
            "The prompt expired. Run the command again to redo your pick.",
        )
        .with_category_reply(
            FailureCategory::ExternalClient,
            "The sheet service is having trouble. Try again in a moment.",
        )
        .with_category_reply(
            FailureCategory::Combat,
            "Combat in this channel looks off. Check the combat status.",
        );

    let failures = vec![
        DomainFailure::no_reset(),
        DomainFailure::selection_cancelled(),
        DomainFailure::login_failure(),
        DomainFailure::no_combatants(),
        // Root kinds still take the backstop even with handlers registered
        DomainFailure::no_active_brew(),
    ];

    for failure in &failures {
        let reply = router.route(failure);
        let path = match reply.source {
            ReplySource::Category(category) => format!("category:{category}"),
            ReplySource::Backstop => "backstop".to_string(),
        };
        println!("  {:?}", failure.kind());
        println!("    Path: {}", path);
        println!("    Reply: \"{}\"\n", reply.text);
    }
}

/// Demonstrates building a router from declarative configuration
fn demonstrate_config_routing() -> Result<(), DomainFailure> {
    println!("=== Config-Driven Routing ===\n");

    let json = r#"{
        "category_replies": {
            "Consumable": "Check the counter name and range.",
            "Combat": "Combat in this channel looks off."
        }
    }"#;

    let config: RouterConfig =
        serde_json::from_str(json).map_err(|e| DomainFailure::invalid_argument(e.to_string()))?;
    let router = ReplyRouter::from_config(&config)?;

    let reply = router.route(&DomainFailure::invalid_spell_level());
    println!("Configured consumable reply: \"{}\"", reply.text);

    // Validation refuses blank reply texts up front
    let mut broken = RouterConfig::default();
    broken
        .category_replies
        .insert(FailureCategory::Selection, String::new());
    match ReplyRouter::from_config(&broken) {
        Ok(_) => println!("Unexpected: blank reply text was accepted"),
        Err(err) => println!("Rejected blank reply text: \"{}\"", err),
    }
    println!();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Show construction-time logging; default to debug so the demo is visible
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // Section 1: Taxonomy overview
    demonstrate_taxonomy();

    // Section 2: Root backstop
    demonstrate_backstop_routing();

    // Section 3: Category routing
    demonstrate_category_routing();

    // Section 4: Config-driven routing
    demonstrate_config_routing()?;

    println!("=== Reply Routing Summary ===\n");
    println!("1. Construct failures with the logging constructors, never raw variants");
    println!("2. failure.to_string() is always the complete user-facing message");
    println!("3. Use failure.category() to route whole families to one reply");
    println!("4. The backstop guarantees every failure yields a reply");
    println!("5. RouterConfig::validate() refuses blank reply texts before startup");

    Ok(())
}
