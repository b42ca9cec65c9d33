//! Configuration for the Snowgen generator

mod builder;

pub use builder::SnowgenConfigBuilder;
use builder::{
    DEFAULT_CUSTOM_EPOCH, DEFAULT_MAX_RETRIES, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY, DEFAULT_TOLERANCE_MS,
};

/// Configuration for the Snowgen generator
/// Copy-optimized with const-evaluable fields
#[derive(Debug, Clone, Copy)]
pub struct SnowgenConfig {
    custom_epoch: u64,
    tolerance_ms: u64,
    max_retries: u32,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl SnowgenConfig {
    /// Create config from builder
    pub(crate) const fn from_builder(b: SnowgenConfigBuilder) -> Self {
        Self {
            custom_epoch: b.custom_epoch,
            tolerance_ms: b.tolerance_ms,
            max_retries: b.max_retries,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowgenConfigBuilder {
        SnowgenConfigBuilder::new()
    }

    /// Epoch the timestamp field is measured from, in Unix milliseconds
    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.custom_epoch
    }

    /// Largest backward clock jump absorbed by compensation, in milliseconds
    #[inline(always)]
    pub const fn tolerance_ms(&self) -> u64 {
        self.tolerance_ms
    }

    /// CAS retry budget for a single id generation under contention
    #[inline(always)]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowgenConfig {
    fn default() -> Self {
        Self {
            custom_epoch: DEFAULT_CUSTOM_EPOCH,
            tolerance_ms: DEFAULT_TOLERANCE_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
