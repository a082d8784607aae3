// Test modules for tablemind-errors crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on business logic verification.

// Test helper utilities (shared fixtures and log capture)
pub mod helpers;

pub mod import;
