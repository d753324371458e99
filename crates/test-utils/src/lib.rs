//! Shared test utilities for hashgraph SDK crates.
//!
//! - [`strategies`] - Proptest generators for identifiers, timestamps, and statuses

#![deny(unsafe_code)]

pub mod strategies;
