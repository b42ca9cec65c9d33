//! Process-scoped singleton generator
//!
//! One shared instance behind an init-once accessor. The first successful
//! [`initialize`] wires the instance for the lifetime of the process; every
//! later attempt is rejected with `AlreadyInitialized`, whether or not the
//! identity differs, so the shared identity can never be silently
//! re-configured. Callers that need more than one identity per process, or
//! one identity per worker thread, should own explicit [`Snowgen`] handles
//! instead.

use once_cell::sync::OnceCell;

use crate::config::SnowgenConfig;
use crate::error::SnowgenError;
use crate::generator::Snowgen;

static INSTANCE: OnceCell<Snowgen> = OnceCell::new();

/// Initialize the process-wide generator with default configuration.
///
/// Fails with `InvalidParams` for an out-of-range id (the singleton stays
/// unset) or `AlreadyInitialized` when a previous call succeeded.
pub fn initialize(worker_id: u8, datacenter_id: u8) -> Result<(), SnowgenError> {
    initialize_with_config(worker_id, datacenter_id, SnowgenConfig::default())
}

/// Initialize the process-wide generator with custom configuration
pub fn initialize_with_config(
    worker_id: u8,
    datacenter_id: u8,
    config: SnowgenConfig,
) -> Result<(), SnowgenError> {
    // Validate and build before touching the cell; a failed call must not
    // claim the slot
    let generator = Snowgen::with_config(worker_id, datacenter_id, config)?;
    INSTANCE
        .set(generator)
        .map_err(|_| SnowgenError::AlreadyInitialized)
}

/// Access the process-wide generator
pub fn instance() -> Result<&'static Snowgen, SnowgenError> {
    INSTANCE.get().ok_or(SnowgenError::NotInitialized)
}

/// Generate an id from the process-wide generator
pub fn next_id() -> Result<u64, SnowgenError> {
    instance()?.next_id()
}

/// Generate an id from the process-wide generator, rendered as decimal text
pub fn next_id_string() -> Result<String, SnowgenError> {
    instance()?.next_id_string()
}
