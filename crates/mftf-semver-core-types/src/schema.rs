//! Canonical schema constants for structured logging
//!
//! These constants keep field names consistent across every log event the
//! classifier emits.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Artifact identifiers
pub const FIELD_KIND: &str = "kind";
pub const FIELD_ENTITY: &str = "entity";

// Result sizes
pub const FIELD_RECORD_COUNT: &str = "record_count";
pub const FIELD_SEVERITY: &str = "severity";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
