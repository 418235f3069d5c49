//! Integration tests for mapkit crates.
//!
//! End-to-end scenarios that go through the registry, the builder and the
//! color pipeline together.
