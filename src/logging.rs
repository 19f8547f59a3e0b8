// ============================================================================
// Logging Bootstrap
// Installs a compact fmt subscriber for the crate's tracing events
// ============================================================================

use tracing::level_filters::LevelFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install a global `tracing_subscriber::fmt` subscriber at `level`.
///
/// Rejected inputs (malformed text, undecodable bytes, division by zero)
/// are reported at `DEBUG`.
///
/// # Errors
/// Fails if a global subscriber has already been set.
pub fn init_logging(level: LevelFilter) -> Result<(), InitError> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .try_init()
}
