//! # Snowgen
//!
//! A Rust implementation of the classic Twitter Snowflake layout: 64-bit
//! identifiers packing a 41-bit millisecond timestamp, a 5-bit datacenter id,
//! a 5-bit worker id and a 12-bit per-millisecond sequence.
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted
//! - 🔒 Thread-safe (single-word CAS, no locks)
//! - 🌐 Distributed-ready (up to 1024 generator identities)
//! - ⏱️ Drift-tolerant (bounded backward-clock compensation)

#![forbid(unsafe_code)]

pub mod decimal;
pub mod global;
pub mod layout;
mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
mod tests;

// Re-export main types
pub use config::{SnowgenConfig, SnowgenConfigBuilder};
pub use error::SnowgenError;
pub use extractor::SnowgenExtractor;
pub use generator::{Clock, ManualClock, Snowgen, SystemClock};

// Re-export decimal rendering at crate root
pub use decimal::DecodeError as DecimalDecodeError;
pub use decimal::MAX_LEN as DECIMAL_MAX_LEN;
pub use decimal::MIN_BUFFER_LEN as DECIMAL_MIN_BUFFER_LEN;
pub use decimal::{decode as decimal_decode, encode as decimal_encode};
pub use decimal::encode_into as decimal_encode_into;
