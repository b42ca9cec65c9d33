//! Wait strategies for sequence exhaustion
//!
//! When all 4096 sequences of a millisecond are spoken for, the caller must
//! outwait the clock: a short spin with periodic yields, then exponential
//! backoff sleep capped at [`MAX_BACKOFF_MS`].

use std::thread;
use std::time::Duration;

use crate::config::SnowgenConfig;

/// Maximum backoff sleep in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

const INITIAL_BACKOFF_MS: u64 = 1;

/// Poll `now` until it reads strictly later than `from_ts`, returning the
/// advanced reading
#[inline]
pub fn wait_until_next_ms<F>(from_ts: u64, config: &SnowgenConfig, now: F) -> u64
where
    F: Fn() -> u64,
{
    if config.spin_enabled() {
        let yield_every = config.spin_yield_every();

        for i in 0..config.spin_loops() {
            let ts = now();
            if ts > from_ts {
                return ts;
            }

            std::hint::spin_loop();

            if yield_every != 0 && i % yield_every == yield_every - 1 {
                thread::yield_now();
            }
        }
    }

    let mut backoff_ms = INITIAL_BACKOFF_MS;
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let ts = now();
        if ts > from_ts {
            return ts;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}
