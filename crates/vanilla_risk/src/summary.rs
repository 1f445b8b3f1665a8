//! Per-contract risk summary.
//!
//! This module composes the pricer and the Greeks calculator into the
//! risk block a desk reads off a single contract: moneyness, intrinsic
//! and time value, and theta decay in both annualised and per-day form.

use num_traits::Float;

use vanilla_core::types::{InvalidParameter, OptionContract, OptionType};
use vanilla_models::analytical::{greeks, price};

/// Calendar days per year used to convert annualised theta to per-day
/// decay.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Classification of whether immediate exercise would be profitable.
///
/// The comparison direction depends on the option type: a call is
/// in-the-money when S > K, a put when S < K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Moneyness {
    /// Immediate exercise would be profitable.
    InTheMoney,
    /// Spot and strike coincide (within the classification tolerance).
    AtTheMoney,
    /// Immediate exercise would be unprofitable.
    OutOfTheMoney,
}

impl Moneyness {
    /// Classifies a spot/strike pair for the given option type.
    ///
    /// Spot and strike within `tolerance` of each other classify as
    /// at-the-money; the default entry points use a tolerance of zero,
    /// i.e. exact equality.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    /// * `option_type` - Call or put (reverses the ITM/OTM comparison)
    /// * `tolerance` - Non-negative half-width of the ATM band
    pub fn classify<T: Float>(spot: T, strike: T, option_type: OptionType, tolerance: T) -> Self {
        if (spot - strike).abs() <= tolerance {
            return Moneyness::AtTheMoney;
        }
        let spot_above = spot > strike;
        let in_the_money = match option_type {
            OptionType::Call => spot_above,
            OptionType::Put => !spot_above,
        };
        if in_the_money {
            Moneyness::InTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }
}

impl std::fmt::Display for Moneyness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Moneyness::InTheMoney => write!(f, "In-the-Money"),
            Moneyness::AtTheMoney => write!(f, "At-the-Money"),
            Moneyness::OutOfTheMoney => write!(f, "Out-of-the-Money"),
        }
    }
}

/// Risk metrics derived from a single contract.
///
/// `theta` is the annualised calendar decay as reported by the Greeks
/// calculator; `daily_theta` is that same number divided by 365 once.
/// The annualised figure is the canonical unit throughout the engine,
/// so the per-day value is never re-scaled downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskSummary<T: Float> {
    /// Moneyness classification of the contract.
    pub moneyness: Moneyness,
    /// Value realised by immediate exercise (>= 0).
    pub intrinsic_value: T,
    /// Portion of the price attributable to remaining optionality
    /// (>= 0, clamped against floating-point noise at expiry).
    pub time_value: T,
    /// Annualised theta, identical to the Greeks calculator output.
    pub theta: T,
    /// Per-calendar-day theta decay: `theta / 365`.
    pub daily_theta: T,
}

/// Summarises a contract using exact spot/strike equality for the
/// at-the-money classification.
///
/// # Errors
/// [`InvalidParameter`] if S <= 0, K <= 0, T < 0, or σ < 0.
///
/// # Examples
/// ```
/// use vanilla_core::types::{OptionContract, OptionType};
/// use vanilla_risk::summary::{summarize, Moneyness};
///
/// // Expired in-the-money call: pure intrinsic value, no decay left
/// let contract = OptionContract::new(110.0_f64, 100.0, 0.0, 0.2, 0.05).unwrap();
/// let summary = summarize(&contract, OptionType::Call).unwrap();
/// assert_eq!(summary.moneyness, Moneyness::InTheMoney);
/// assert_eq!(summary.intrinsic_value, 10.0);
/// assert_eq!(summary.time_value, 0.0);
/// assert_eq!(summary.daily_theta, 0.0);
/// ```
pub fn summarize<T: Float>(
    contract: &OptionContract<T>,
    option_type: OptionType,
) -> Result<RiskSummary<T>, InvalidParameter> {
    summarize_with_tolerance(contract, option_type, T::zero())
}

/// Summarises a contract with a caller-supplied at-the-money tolerance.
///
/// Spot within `atm_tolerance` of the strike classifies as at-the-money
/// regardless of option type. All other metrics are unaffected by the
/// tolerance.
///
/// # Errors
/// [`InvalidParameter`] if S <= 0, K <= 0, T < 0, or σ < 0.
pub fn summarize_with_tolerance<T: Float>(
    contract: &OptionContract<T>,
    option_type: OptionType,
    atm_tolerance: T,
) -> Result<RiskSummary<T>, InvalidParameter> {
    let fair_value = price(contract, option_type)?.price;
    let sensitivities = greeks(contract, option_type)?;

    let moneyness = Moneyness::classify(contract.spot, contract.strike, option_type, atm_tolerance);
    let intrinsic_value = option_type.intrinsic(contract.spot, contract.strike);
    let time_value = (fair_value - intrinsic_value).max(T::zero());

    let theta = sensitivities.theta;
    let daily_theta = theta / T::from(DAYS_PER_YEAR).unwrap();

    Ok(RiskSummary {
        moneyness,
        intrinsic_value,
        time_value,
        theta,
        daily_theta,
    })
}
