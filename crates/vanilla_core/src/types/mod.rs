//! Value types shared by every layer of the engine.
//!
//! This module provides:
//! - `OptionContract`: the five model parameters, validated
//! - `OptionType`: call/put tag with intrinsic-value evaluation
//! - `InvalidParameter`: the single error kind raised by the engine

pub mod contract;
pub mod error;
pub mod option_type;

pub use contract::OptionContract;
pub use error::InvalidParameter;
pub use option_type::OptionType;
