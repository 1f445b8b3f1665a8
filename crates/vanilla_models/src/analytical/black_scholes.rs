//! Black-Scholes pricing and analytical Greeks for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Every entry point is a pure function over an [`OptionContract`]: the
//! model is stateless, so batch valuation of independent contracts is
//! safe from any number of threads.
//!
//! ## Degenerate inputs
//!
//! The raw d₁/d₂ formula divides by σ√T. Contracts with T = 0 or σ = 0
//! are therefore resolved to their intrinsic value by [`price`] and to
//! sub-gradient Greeks by [`greeks`] *before* the moment terms are ever
//! computed; [`d1_d2`] itself rejects such inputs.

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use vanilla_core::types::{InvalidParameter, OptionContract, OptionType};

/// Fair value of an option.
///
/// The price is never negative: a tiny negative value produced by
/// subtractive cancellation near expiry is clamped to zero at this
/// boundary rather than propagated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult<T: Float> {
    /// Model fair value (>= 0).
    pub price: T,
}

/// First- and second-order sensitivities of an option price.
///
/// Quoting conventions:
/// - `delta` is per unit spot move, in (0, 1) for calls and (-1, 0) for
///   puts away from the degenerate boundary
/// - `gamma` is per unit spot move squared, identical for calls and puts
/// - `theta` is annualised calendar decay; divide by 365 for the per-day
///   figure (the risk summary exposes that as a separate field)
/// - `vega` is per 1-percentage-point volatility move
/// - `rho` is per 1-percentage-point rate move
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult<T: Float> {
    /// Delta: ∂V/∂S.
    pub delta: T,
    /// Gamma: ∂²V/∂S² (non-negative, same for call and put).
    pub gamma: T,
    /// Theta: ∂V/∂t, annualised (typically negative for long options).
    pub theta: T,
    /// Vega: ∂V/∂σ per volatility point (non-negative, same for call and put).
    pub vega: T,
    /// Rho: ∂V/∂r per rate point.
    pub rho: T,
}

/// Computes the d₁ and d₂ moment terms shared by price and Greeks.
///
/// ```text
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// # Errors
/// - [`InvalidParameter`] if the contract fails validation
/// - [`InvalidParameter::Expiry`] / [`InvalidParameter::Volatility`] if
///   T = 0 or σ = 0: the terms are undefined there, and callers are
///   expected to branch on [`OptionContract::is_degenerate`] first
///
/// # Examples
/// ```
/// use vanilla_core::types::OptionContract;
/// use vanilla_models::analytical::d1_d2;
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let (d1, d2) = d1_d2(&contract).unwrap();
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
/// ```
pub fn d1_d2<T: Float>(contract: &OptionContract<T>) -> Result<(T, T), InvalidParameter> {
    contract.validate()?;
    let zero = T::zero();

    if contract.expiry <= zero {
        return Err(InvalidParameter::Expiry {
            expiry: contract.expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    if contract.volatility <= zero {
        return Err(InvalidParameter::Volatility {
            volatility: contract.volatility.to_f64().unwrap_or(f64::NAN),
        });
    }

    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = contract.volatility * contract.expiry.sqrt();

    let log_moneyness = (contract.spot / contract.strike).ln();
    let drift = (contract.rate + half * contract.volatility * contract.volatility) * contract.expiry;

    let d1 = (log_moneyness + drift) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    Ok((d1, d2))
}

/// Computes the fair value of a European option.
///
/// A degenerate contract (T = 0 or σ = 0) resolves to its intrinsic
/// value; otherwise the closed-form call/put formulas apply. The result
/// is clamped to be non-negative.
///
/// # Errors
/// [`InvalidParameter`] if S <= 0, K <= 0, T < 0, or σ < 0.
///
/// # Examples
/// ```
/// use vanilla_core::types::{OptionContract, OptionType};
/// use vanilla_models::analytical::price;
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let call = price(&contract, OptionType::Call).unwrap();
/// assert!((call.price - 10.4506).abs() < 1e-3);
/// ```
pub fn price<T: Float>(
    contract: &OptionContract<T>,
    option_type: OptionType,
) -> Result<PricingResult<T>, InvalidParameter> {
    contract.validate()?;

    if contract.is_degenerate() {
        return Ok(PricingResult {
            price: option_type.intrinsic(contract.spot, contract.strike),
        });
    }

    let (d1, d2) = d1_d2(contract)?;
    let discount = (-contract.rate * contract.expiry).exp();

    let value = match option_type {
        OptionType::Call => {
            contract.spot * norm_cdf(d1) - contract.strike * discount * norm_cdf(d2)
        }
        OptionType::Put => {
            contract.strike * discount * norm_cdf(-d2) - contract.spot * norm_cdf(-d1)
        }
    };

    // Cancellation near expiry can leave a tiny negative remainder
    Ok(PricingResult {
        price: value.max(T::zero()),
    })
}

/// Computes the analytical Greeks of a European option.
///
/// For a degenerate contract (T = 0 or σ = 0) the option has no
/// remaining time or volatility sensitivity: gamma, theta, vega, and
/// rho are all zero, and delta takes the sub-gradient convention
/// 1{S > K} for a call and -1{S < K} for a put.
///
/// Otherwise, with φ(d₁) the standard normal density at d₁:
///
/// ```text
/// delta_call =  N(d₁)                  delta_put = N(d₁) - 1
/// gamma      =  φ(d₁) / (S·σ·√T)
/// vega       =  S·φ(d₁)·√T / 100
/// theta_call = -S·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂)
/// theta_put  = -S·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂)
/// rho_call   =  K·T·e^(-rT)·N(d₂) / 100
/// rho_put    = -K·T·e^(-rT)·N(-d₂) / 100
/// ```
///
/// Vega and rho are scaled to the standard per-1%-move quote; theta is
/// annualised (see [`GreeksResult`] for the unit conventions).
///
/// # Errors
/// [`InvalidParameter`] if S <= 0, K <= 0, T < 0, or σ < 0.
pub fn greeks<T: Float>(
    contract: &OptionContract<T>,
    option_type: OptionType,
) -> Result<GreeksResult<T>, InvalidParameter> {
    contract.validate()?;
    let zero = T::zero();
    let one = T::one();

    if contract.is_degenerate() {
        let delta = match option_type {
            OptionType::Call => {
                if contract.spot > contract.strike {
                    one
                } else {
                    zero
                }
            }
            OptionType::Put => {
                if contract.spot < contract.strike {
                    -one
                } else {
                    zero
                }
            }
        };
        return Ok(GreeksResult {
            delta,
            gamma: zero,
            theta: zero,
            vega: zero,
            rho: zero,
        });
    }

    let (d1, d2) = d1_d2(contract)?;
    let sqrt_t = contract.expiry.sqrt();
    let discount = (-contract.rate * contract.expiry).exp();
    let pdf_d1 = norm_pdf(d1);
    let two = T::from(2.0).unwrap();
    let per_point = T::from(100.0).unwrap();

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - one,
    };

    let gamma = pdf_d1 / (contract.spot * contract.volatility * sqrt_t);

    let vega = contract.spot * pdf_d1 * sqrt_t / per_point;

    // Common decay term: -S·φ(d₁)·σ / (2√T)
    let decay = -(contract.spot * pdf_d1 * contract.volatility) / (two * sqrt_t);
    let carry = contract.rate * contract.strike * discount;
    let theta = match option_type {
        OptionType::Call => decay - carry * norm_cdf(d2),
        OptionType::Put => decay + carry * norm_cdf(-d2),
    };

    let rho = match option_type {
        OptionType::Call => contract.strike * contract.expiry * discount * norm_cdf(d2) / per_point,
        OptionType::Put => {
            -(contract.strike * contract.expiry * discount * norm_cdf(-d2)) / per_point
        }
    };

    Ok(GreeksResult {
        delta,
        gamma,
        theta,
        vega,
        rho,
    })
}
