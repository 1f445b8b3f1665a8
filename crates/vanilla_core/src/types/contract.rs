//! Option contract parameters.
//!
//! This module provides the validated parameter set that fully
//! determines every output of the engine.

use num_traits::Float;

use super::error::InvalidParameter;

/// Parameters of a European option contract.
///
/// A plain value struct: the five fields plus an [`super::OptionType`]
/// tag determine every price, Greek, and risk metric deterministically.
/// There is no mutation and no identity beyond value equality.
///
/// Validity: `spot` and `strike` must be strictly positive; `expiry`
/// and `volatility` must be non-negative (zero is the degenerate
/// at-expiry / no-vol case, handled by explicit branches downstream);
/// `rate` may be any real (negative rates are allowed).
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use vanilla_core::types::OptionContract;
///
/// let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
/// assert_eq!(contract.spot, 100.0);
///
/// // Zero expiry is valid (degenerate), negative expiry is not
/// assert!(OptionContract::new(100.0_f64, 100.0, 0.0, 0.2, 0.05).is_ok());
/// assert!(OptionContract::new(100.0_f64, 100.0, -1.0, 0.2, 0.05).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    /// Current spot price of the underlying (S, > 0).
    pub spot: T,
    /// Strike price (K, > 0).
    pub strike: T,
    /// Time to expiry in years (T, >= 0).
    pub expiry: T,
    /// Annualised volatility (sigma, >= 0).
    pub volatility: T,
    /// Annualised continuously-compounded risk-free rate (r).
    pub rate: T,
}

impl<T: Float> OptionContract<T> {
    /// Creates a new contract, validating every parameter.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `rate` - Annualised risk-free rate (any real)
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] identifying the first offending
    /// parameter.
    pub fn new(spot: T, strike: T, expiry: T, volatility: T, rate: T) -> Result<Self, InvalidParameter> {
        let contract = Self {
            spot,
            strike,
            expiry,
            volatility,
            rate,
        };
        contract.validate()?;
        Ok(contract)
    }

    /// Re-validates a contract built by struct literal or mutation.
    ///
    /// Checks S > 0, K > 0, T >= 0, sigma >= 0. Non-finite values fail
    /// the same comparisons (NaN is rejected by every check).
    ///
    /// # Errors
    /// Returns [`InvalidParameter`] identifying the first offending
    /// parameter.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        let zero = T::zero();

        if self.spot <= zero || self.spot.is_nan() {
            return Err(InvalidParameter::Spot {
                spot: self.spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if self.strike <= zero || self.strike.is_nan() {
            return Err(InvalidParameter::Strike {
                strike: self.strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if self.expiry < zero || self.expiry.is_nan() {
            return Err(InvalidParameter::Expiry {
                expiry: self.expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if self.volatility < zero || self.volatility.is_nan() {
            return Err(InvalidParameter::Volatility {
                volatility: self.volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(())
    }

    /// Returns whether the contract carries no time or volatility risk.
    ///
    /// A degenerate contract (T = 0 or sigma = 0) resolves immediately
    /// to its intrinsic value; the d1/d2 terms are undefined for it.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expiry <= T::zero() || self.volatility <= T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_params() {
        let contract = OptionContract::new(100.0_f64, 105.0, 0.5, 0.25, 0.03).unwrap();
        assert_eq!(contract.spot, 100.0);
        assert_eq!(contract.strike, 105.0);
        assert_eq!(contract.expiry, 0.5);
        assert_eq!(contract.volatility, 0.25);
        assert_eq!(contract.rate, 0.03);
    }

    #[test]
    fn test_new_invalid_spot_negative() {
        let result = OptionContract::new(-5.0_f64, 100.0, 1.0, 0.2, 0.05);
        match result {
            Err(InvalidParameter::Spot { spot }) => assert_eq!(spot, -5.0),
            _ => panic!("Expected Spot error"),
        }
    }

    #[test]
    fn test_new_invalid_spot_zero() {
        let result = OptionContract::new(0.0_f64, 100.0, 1.0, 0.2, 0.05);
        assert!(matches!(result, Err(InvalidParameter::Spot { .. })));
    }

    #[test]
    fn test_new_invalid_strike_negative() {
        let result = OptionContract::new(100.0_f64, -100.0, 1.0, 0.2, 0.05);
        match result {
            Err(InvalidParameter::Strike { strike }) => assert_eq!(strike, -100.0),
            _ => panic!("Expected Strike error"),
        }
    }

    #[test]
    fn test_new_invalid_strike_zero() {
        let result = OptionContract::new(100.0_f64, 0.0, 1.0, 0.2, 0.05);
        assert!(matches!(result, Err(InvalidParameter::Strike { .. })));
    }

    #[test]
    fn test_new_invalid_expiry_negative() {
        let result = OptionContract::new(100.0_f64, 100.0, -1.0, 0.2, 0.05);
        match result {
            Err(InvalidParameter::Expiry { expiry }) => assert_eq!(expiry, -1.0),
            _ => panic!("Expected Expiry error"),
        }
    }

    #[test]
    fn test_new_invalid_volatility_negative() {
        let result = OptionContract::new(100.0_f64, 100.0, 1.0, -0.2, 0.05);
        match result {
            Err(InvalidParameter::Volatility { volatility }) => assert_eq!(volatility, -0.2),
            _ => panic!("Expected Volatility error"),
        }
    }

    #[test]
    fn test_zero_expiry_and_volatility_allowed() {
        // Degenerate but valid
        assert!(OptionContract::new(100.0_f64, 100.0, 0.0, 0.2, 0.05).is_ok());
        assert!(OptionContract::new(100.0_f64, 100.0, 1.0, 0.0, 0.05).is_ok());
    }

    #[test]
    fn test_negative_rate_allowed() {
        let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, -0.02);
        assert!(contract.is_ok());
    }

    #[test]
    fn test_nan_spot_rejected() {
        let result = OptionContract::new(f64::NAN, 100.0, 1.0, 0.2, 0.05);
        assert!(matches!(result, Err(InvalidParameter::Spot { .. })));
    }

    #[test]
    fn test_nan_expiry_rejected() {
        let result = OptionContract::new(100.0, 100.0, f64::NAN, 0.2, 0.05);
        assert!(matches!(result, Err(InvalidParameter::Expiry { .. })));
    }

    #[test]
    fn test_is_degenerate() {
        let live = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
        assert!(!live.is_degenerate());

        let expired = OptionContract::new(100.0_f64, 100.0, 0.0, 0.2, 0.05).unwrap();
        assert!(expired.is_degenerate());

        let no_vol = OptionContract::new(100.0_f64, 100.0, 1.0, 0.0, 0.05).unwrap();
        assert!(no_vol.is_degenerate());
    }

    #[test]
    fn test_validate_struct_literal() {
        let contract = OptionContract {
            spot: 100.0_f64,
            strike: 100.0,
            expiry: 1.0,
            volatility: 0.2,
            rate: 0.05,
        };
        assert!(contract.validate().is_ok());

        let bad = OptionContract { spot: -1.0, ..contract };
        assert!(matches!(bad.validate(), Err(InvalidParameter::Spot { .. })));
    }

    #[test]
    fn test_f32_compatibility() {
        let contract = OptionContract::new(100.0_f32, 100.0, 1.0, 0.2, 0.05).unwrap();
        assert_eq!(contract.strike, 100.0_f32);
    }

    #[test]
    fn test_clone_and_equality() {
        let contract1 = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
        let contract2 = contract1;
        assert_eq!(contract1, contract2);
    }

    #[test]
    fn test_debug() {
        let contract = OptionContract::new(100.0_f64, 100.0, 1.0, 0.2, 0.05).unwrap();
        let debug_str = format!("{:?}", contract);
        assert!(debug_str.contains("OptionContract"));
        assert!(debug_str.contains("spot"));
        assert!(debug_str.contains("volatility"));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_roundtrip() {
            let contract = OptionContract::new(100.0_f64, 105.0, 0.5, 0.25, 0.03).unwrap();
            let json = serde_json::to_string(&contract).unwrap();
            let deserialized: OptionContract<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(contract, deserialized);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn prop_valid_ranges_always_construct(
                spot in 0.01_f64..10_000.0,
                strike in 0.01_f64..10_000.0,
                expiry in 0.0_f64..30.0,
                volatility in 0.0_f64..5.0,
                rate in -0.1_f64..0.2,
            ) {
                let contract = OptionContract::new(spot, strike, expiry, volatility, rate);
                prop_assert!(contract.is_ok());
            }

            #[test]
            fn prop_non_positive_spot_always_rejected(
                spot in -10_000.0_f64..=0.0,
            ) {
                let result = OptionContract::new(spot, 100.0, 1.0, 0.2, 0.05);
                let is_spot_err = matches!(result, Err(InvalidParameter::Spot { .. }));
                prop_assert!(is_spot_err);
            }
        }
    }
}
