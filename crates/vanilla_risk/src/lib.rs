//! # vanilla_risk: Risk Metrics for the Vanilla Option Engine
//!
//! ## Risk Layer (Application) Role
//!
//! This crate composes the analytics layer into per-contract risk
//! summaries and batch chain valuation:
//! - `summary` - moneyness classification, intrinsic and time value,
//!   annualised and per-day theta
//! - `chain` - order-preserving batch summarisation, Rayon-parallel for
//!   large chains
//!
//! ## Example
//!
//! ```
//! use vanilla_core::types::{OptionContract, OptionType};
//! use vanilla_risk::summary::{summarize, Moneyness};
//!
//! let contract = OptionContract::new(110.0_f64, 100.0, 0.25, 0.2, 0.05).unwrap();
//! let summary = summarize(&contract, OptionType::Call).unwrap();
//!
//! assert_eq!(summary.moneyness, Moneyness::InTheMoney);
//! assert_eq!(summary.intrinsic_value, 10.0);
//! assert!(summary.time_value >= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod chain;
pub mod summary;

// Re-export commonly used types
pub use chain::{summarize_chain, summarize_chain_with_threshold, DEFAULT_PARALLEL_THRESHOLD};
pub use summary::{summarize, summarize_with_tolerance, Moneyness, RiskSummary, DAYS_PER_YEAR};
