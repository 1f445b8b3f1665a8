//! # vanilla_models: Analytics for the Vanilla Option Engine
//!
//! ## Model Layer (Analytics) Role
//!
//! Closed-form valuation of European options under Black-Scholes
//! assumptions: European exercise, no dividends, constant volatility,
//! constant risk-free rate, lognormal underlying, no transaction costs.
//!
//! This crate provides:
//! - Standard normal distribution primitives (`analytical::distributions`)
//! - The d1/d2 moment terms, fair-value pricing, and analytical Greeks
//!   (`analytical::black_scholes`)
//!
//! ## Design Principles
//!
//! - **Pure functions over value structs**: every entry point reads its
//!   `OptionContract` argument and returns a fresh result; there is no
//!   shared state, so concurrent use needs no locking
//! - **Generic over `T: Float`**: supports `f64` and `f32`
//! - **Explicit degenerate branches**: zero expiry or zero volatility
//!   resolves to intrinsic value before any division by sigma*sqrt(T)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;

pub use analytical::{
    d1_d2, greeks, norm_cdf, norm_pdf, price, GreeksResult, PricingResult,
};
