//! Configuration module
//!
//! Path resolution for the ledger's data directory, with an environment
//! variable override and platform defaults.

pub mod paths;

pub use paths::TellerPaths;
