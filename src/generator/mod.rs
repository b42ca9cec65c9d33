//! Core Snowgen generator implementation
//!
//! Split into modules for testability:
//! - `state` - Combined atomic state (timestamp + sequence)
//! - `time` - Wall-clock sources
//! - `wait` - Spin and backoff strategies for sequence exhaustion
//! - `generate` - Id generation logic

mod decimal_methods;
mod generate;
mod state;
mod time;
mod wait;

pub use time::{Clock, ManualClock, SystemClock};

use std::sync::atomic::{AtomicU32, AtomicU64};

use crate::config::SnowgenConfig;
use crate::error::SnowgenError;
use crate::extractor::SnowgenExtractor;
use crate::layout;

/// Main id generator with cache-line alignment
#[derive(Debug)]
#[repr(align(64))]
pub struct Snowgen<C: Clock = SystemClock> {
    // === Hot path fields ===
    pub(crate) state: AtomicU64,
    pub(crate) compensated: AtomicU32,
    topology_prefix: u64,
    epoch: u64,
    clock: C,

    // === Cold path fields ===
    pub worker_id: u8,
    pub datacenter_id: u8,
    pub config: SnowgenConfig,
    pub extract: SnowgenExtractor,
}

impl Snowgen<SystemClock> {
    /// Create with default configuration, driven by the system wall clock
    pub fn new(worker_id: u8, datacenter_id: u8) -> Result<Self, SnowgenError> {
        Self::with_config(worker_id, datacenter_id, SnowgenConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(
        worker_id: u8,
        datacenter_id: u8,
        config: SnowgenConfig,
    ) -> Result<Self, SnowgenError> {
        Self::with_clock(worker_id, datacenter_id, config, SystemClock)
    }
}

impl<C: Clock> Snowgen<C> {
    /// Create with a caller-supplied clock source
    pub fn with_clock(
        worker_id: u8,
        datacenter_id: u8,
        config: SnowgenConfig,
        clock: C,
    ) -> Result<Self, SnowgenError> {
        Self::validate_id("worker_id", worker_id, layout::MAX_WORKER_ID)?;
        Self::validate_id("datacenter_id", datacenter_id, layout::MAX_DATACENTER_ID)?;
        Ok(Self::build(worker_id, datacenter_id, config, clock))
    }

    fn validate_id(param: &'static str, value: u8, max: u8) -> Result<(), SnowgenError> {
        if value > max {
            return Err(SnowgenError::InvalidParams {
                param,
                value: value as i64,
                expected: "0..=31",
            });
        }
        Ok(())
    }

    fn build(worker_id: u8, datacenter_id: u8, config: SnowgenConfig, clock: C) -> Self {
        Self {
            // raw 0 is the "no id issued yet" sentinel
            state: AtomicU64::new(0),
            compensated: AtomicU32::new(0),
            topology_prefix: Self::compute_topology_prefix(worker_id, datacenter_id),
            epoch: config.epoch(),
            clock,
            worker_id,
            datacenter_id,
            config,
            extract: SnowgenExtractor::new(config.epoch()),
        }
    }

    #[inline(always)]
    fn compute_topology_prefix(worker_id: u8, datacenter_id: u8) -> u64 {
        ((datacenter_id as u64) << layout::DATACENTER_ID_SHIFT)
            | ((worker_id as u64) << layout::WORKER_ID_SHIFT)
    }

    /// Current clock reading as milliseconds past the configured epoch
    #[inline(always)]
    pub(crate) fn now_since_epoch(&self) -> Result<u64, SnowgenError> {
        let now = self.clock.now_ms();
        let offset = now
            .checked_sub(self.epoch)
            .ok_or(SnowgenError::InvalidParams {
                param: "timestamp_ms",
                value: now as i64,
                expected: "a millisecond at or after the epoch",
            })?;
        if offset > layout::MAX_TIMESTAMP {
            return Err(SnowgenError::InvalidParams {
                param: "timestamp_ms",
                value: now as i64,
                expected: "an offset within 41 bits of the epoch",
            });
        }
        Ok(offset)
    }

    /// Saturating variant for wait loops, where a transient pre-epoch
    /// reading must keep the caller polling rather than erroring
    #[inline(always)]
    fn raw_now_since_epoch(&self) -> u64 {
        self.clock.now_ms().saturating_sub(self.epoch)
    }

    /// Block until the clock reads strictly later than `from_ts`
    pub(crate) fn wait_next_millis(&self, from_ts: u64) -> u64 {
        wait::wait_until_next_ms(from_ts, &self.config, || self.raw_now_since_epoch())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u16) -> u64 {
        (timestamp << layout::TIMESTAMP_SHIFT) | self.topology_prefix | sequence as u64
    }
}
