//! Option-type tag.
//!
//! This module provides the call/put tag together with exact
//! intrinsic-value evaluation, the payoff realised by immediate
//! exercise.

use num_traits::Float;

/// Side of a vanilla European option.
///
/// # Variants
/// - `Call`: right to buy at the strike, intrinsic value max(S - K, 0)
/// - `Put`: right to sell at the strike, intrinsic value max(K - S, 0)
///
/// # Examples
/// ```
/// use vanilla_core::types::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(call.intrinsic(90.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Intrinsic value for given spot and strike.
    ///
    /// This is the value realised by exercising immediately, ignoring
    /// any remaining optionality. It is also the exact price of the
    /// option at expiry or under zero volatility.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}
