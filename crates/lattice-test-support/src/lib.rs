//! Lattice Test Support — shared synchronization and determinism utilities.
//!
//! This crate carries the test-only scaffolding used across the Lattice
//! networking stack: a cross-thread readiness handshake for producer/consumer
//! tests, a seeded RNG that makes flaky-looking failures reproducible, and
//! small assertion helpers. It contains no production code paths.

mod assert;
mod gate;
mod rng;

pub use gate::ReadyGate;
pub use rng::{SEED_ENV_VAR, SeededRng};
