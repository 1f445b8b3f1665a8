//! Analytical pricing formulas for European options.
//!
//! This module provides the closed-form Black-Scholes solution:
//! - Standard normal cdf/pdf primitives
//! - d1/d2 moment terms
//! - Call and put fair value
//! - Analytical Greeks (delta, gamma, theta, vega, rho)

pub mod black_scholes;
pub mod distributions;

// Re-export main entry points at module level
pub use black_scholes::{d1_d2, greeks, price, GreeksResult, PricingResult};
pub use distributions::{norm_cdf, norm_pdf};
