//! Shared test utilities for the sfms workspace.
//!
//! This crate provides the standardised seeded-container fixture used
//! across crate test suites. It is a dev-dependency only — never published.

pub mod sample;

pub use sample::{SampleContainer, SeedFile};
