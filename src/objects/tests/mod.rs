//! Unit tests for the composition objects.
//!
//! Tests are organised by object, covering the built JSON shape, the
//! cross-field invariants and the per-field limits each object declares.

mod concurrency_tests;
mod confirm_tests;
mod filter_tests;
mod option_tests;
