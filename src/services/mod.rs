//! Business logic layer
//!
//! Services sit between the CLI handlers and the storage layer and enforce
//! the ledger's rules: amount validation, the capacity bound, and the
//! save-after-every-mutation persistence policy.

pub mod teller;

pub use teller::{LedgerSummary, TellerService, MAX_ACCOUNTS};
