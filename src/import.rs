//! Import-client failure conversion.
//!
//! The import client is the only subsystem that produces `ExternalClient`
//! failures, and raw transport errors must not leak past it. This module
//! is the conversion seam: transport results are mapped into
//! [`LoginFailure`](crate::DomainFailure::LoginFailure) or
//! [`InsertFailure`](crate::DomainFailure::InsertFailure) at the client
//! boundary, before anything crosses into command handling.

use std::fmt::Display;

use crate::failure::{DomainFailure, DomainResult};
use crate::logging::log_warn;

/// Extension trait converting transport results at the import boundary.
///
/// Implemented for any `Result` whose error renders via `Display`, which
/// covers `reqwest`, `std::io`, and database drivers without naming them
/// here.
///
/// # Example
///
/// ```rust
/// use tablemind_errors::ImportResultExt;
///
/// let result: Result<(), std::io::Error> = Err(std::io::Error::other("socket closed"));
/// let err = result.or_insert_failure().unwrap_err();
/// assert_eq!(err.to_string(), "Failed to insert: socket closed");
/// ```
pub trait ImportResultExt<T> {
    /// Convert any transport error into a login failure.
    ///
    /// The underlying cause is logged here and then dropped: login
    /// failures render the fixed "Failed to login." text with no
    /// credential or transport detail.
    fn or_login_failure(self) -> DomainResult<T>;

    /// Convert any transport error into an insert failure.
    ///
    /// The cause's string form becomes the failure payload, rendered
    /// into the message template untruncated.
    fn or_insert_failure(self) -> DomainResult<T>;
}

impl<T, E: Display> ImportResultExt<T> for Result<T, E> {
    fn or_login_failure(self) -> DomainResult<T> {
        self.map_err(|cause| {
            log_warn!(cause = %cause, "Login transport error at import boundary");
            DomainFailure::login_failure()
        })
    }

    fn or_insert_failure(self) -> DomainResult<T> {
        self.map_err(DomainFailure::insert_failure)
    }
}
