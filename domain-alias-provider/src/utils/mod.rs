//! Utility modules.

/// Body truncation and credential masking for logs.
pub mod log_sanitizer;
