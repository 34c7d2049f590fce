//! API middleware components

pub mod logging;

pub use logging::{logging_middleware, redact_json_sensitive_fields, truncate_for_log};
