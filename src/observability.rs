//! Logging conventions for cloud-bindings.
//!
//! All events use `tracing` with target "cloud_bindings" and carry an `event`
//! field for filtering. The crate never installs a global subscriber;
//! applications configure one via `tracing_subscriber` or similar.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "keyset", "dns")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all crate log events.
pub(crate) const TARGET: &str = "cloud_bindings";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "dns",
///     event = "api_request",
///     method = %method,
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::TARGET, $($field)*)
    };
}

/// Macro for trace-level log events.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
