//! # vanilla_core: Contract Types for the Vanilla Option Engine
//!
//! ## Core Layer (Foundation) Role
//!
//! vanilla_core is the bottom layer of the workspace, providing:
//! - Contract types: `OptionContract` (`types::contract`)
//! - Option-type tag with intrinsic evaluation: `OptionType` (`types::option_type`)
//! - Error type: `InvalidParameter` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer has no dependencies on other vanilla_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanilla_core::types::{OptionContract, OptionType};
//!
//! // A one-year at-the-money call under 20% vol and 5% rates
//! let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
//! assert!(!contract.is_degenerate());
//!
//! // Intrinsic value ignores remaining optionality
//! let intrinsic = OptionType::Call.intrinsic(110.0_f64, 100.0);
//! assert_eq!(intrinsic, 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionContract`, `OptionType`,
//!   `InvalidParameter`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

pub use types::{InvalidParameter, OptionContract, OptionType};
