//! Crate-internal test suite, one module per concern

mod decimal_tests;
mod sequence_tests;
mod timestamp_tests;
mod timing_tests;
