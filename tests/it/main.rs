//! Entry point for the single integration-test binary.
//!
//! All suites compile into one binary (matklad's layout) so the crate links
//! once per `cargo test` run instead of once per file.
//!
//! - helpers: Shared builders, input constructors and assertions
//! - integration: Multi-component workflow tests driven through LoRise::frame
//! - unit: Single-component unit tests
