// Unit Tests for Import Boundary Conversion
//
// UNIT UNDER TEST: ImportResultExt
//
// BUSINESS RESPONSIBILITY:
//   - Converts raw transport errors into taxonomy failures at the import client
//   - Keeps credential and transport detail out of login failure messages
//   - Carries storage fault detail through insert failure messages
//   - Leaves successful results untouched
//
// TEST COVERAGE:
//   - Login conversion to the fixed, detail-free message
//   - Insert conversion with verbatim cause substitution
//   - Kind and category identity of converted failures
//   - Ok passthrough for both conversions

use crate::failure::DomainFailure;
use crate::import::ImportResultExt;
use crate::kind::{FailureCategory, FailureKind};

#[cfg(test)]
mod login_conversion_tests {
    use super::*;

    #[test]
    fn test_transport_error_becomes_fixed_login_failure() {
        // Test verifies login conversion hides the underlying transport detail
        // Ensures connection strings and credentials never reach chat

        // Arrange
        let transport: Result<(), std::io::Error> =
            Err(std::io::Error::other("connection refused to 10.0.0.3:27017"));

        // Act
        let err = transport.or_login_failure().unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Failed to login.");
        assert!(
            !err.to_string().contains("10.0.0.3"),
            "Login failures must not leak transport detail"
        );
        assert_eq!(err.kind(), FailureKind::LoginFailure);
        assert_eq!(err.category(), Some(FailureCategory::ExternalClient));
    }

    #[test]
    fn test_successful_login_passes_through() {
        // Test verifies Ok results are returned unchanged

        // Arrange
        let transport: Result<u32, std::io::Error> = Ok(7);

        // Act
        let result = transport.or_login_failure();

        // Assert
        assert_eq!(result.unwrap(), 7);
    }
}

#[cfg(test)]
mod insert_conversion_tests {
    use super::*;

    #[test]
    fn test_storage_fault_becomes_insert_failure_with_cause() {
        // Test verifies insert conversion renders the cause verbatim

        // Arrange
        let storage: Result<(), String> = Err("duplicate key".to_string());

        // Act
        let err = storage.or_insert_failure().unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Failed to insert: duplicate key");
        assert_eq!(err.kind(), FailureKind::InsertFailure);
        assert_eq!(err.category(), Some(FailureCategory::ExternalClient));
    }

    #[test]
    fn test_insert_conversion_uses_display_form_of_cause() {
        // Test verifies typed transport errors substitute via Display

        // Arrange
        let storage: Result<(), std::io::Error> =
            Err(std::io::Error::other("write timeout after 5s"));

        // Act
        let err = storage.or_insert_failure().unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Failed to insert: write timeout after 5s");
    }

    #[test]
    fn test_successful_insert_passes_through() {
        // Test verifies Ok results are returned unchanged

        // Arrange
        let storage: Result<&str, String> = Ok("sheet-42");

        // Act
        let result = storage.or_insert_failure();

        // Assert
        assert_eq!(result.unwrap(), "sheet-42");
    }

    #[test]
    fn test_converted_failure_matches_direct_construction() {
        // Test verifies the extension trait and constructor agree

        // Arrange
        let via_ext = Err::<(), _>("duplicate key")
            .or_insert_failure()
            .unwrap_err();
        let via_ctor = DomainFailure::insert_failure("duplicate key");

        // Assert
        assert_eq!(via_ext.to_string(), via_ctor.to_string());
        assert_eq!(via_ext.kind(), via_ctor.kind());
    }
}
