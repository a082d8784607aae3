//! Logging utilities for tablemind-errors
//!
//! Re-exports tracing macros with log_* naming convention for consistency.
//! Failure constructors and the reply router emit structured events through
//! these; the taxonomy values themselves never carry telemetry.

// Re-export tracing macros with log_* naming
pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
