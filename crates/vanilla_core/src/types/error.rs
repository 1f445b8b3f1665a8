//! Error types for structured error handling.
//!
//! This module provides:
//! - `InvalidParameter`: the single error kind raised by pricing,
//!   Greeks, and risk-summary operations

use thiserror::Error;

/// Invalid model parameter.
///
/// Every fallible operation in the engine fails with this one kind;
/// the variant identifies the offending parameter and carries the
/// rejected value.
///
/// Degenerate-but-valid inputs (zero expiry, zero volatility) are never
/// reported here by the pricing entry points; they are handled by
/// explicit intrinsic-value branches. Only the raw d1/d2 calculation,
/// which divides by sigma*sqrt(T), rejects them.
///
/// # Variants
/// - `Spot`: spot price is non-positive
/// - `Strike`: strike price is non-positive
/// - `Expiry`: time to expiry is negative (or zero where strictly
///   positive time is required)
/// - `Volatility`: volatility is negative (or zero where strictly
///   positive volatility is required)
///
/// # Examples
/// ```
/// use vanilla_core::types::InvalidParameter;
///
/// let err = InvalidParameter::Spot { spot: -5.0 };
/// assert_eq!(format!("{}", err), "invalid spot price: S = -5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidParameter {
    /// Non-positive spot price.
    #[error("invalid spot price: S = {spot}")]
    Spot {
        /// The rejected spot value
        spot: f64,
    },

    /// Non-positive strike price.
    #[error("invalid strike price: K = {strike}")]
    Strike {
        /// The rejected strike value
        strike: f64,
    },

    /// Negative time to expiry, or zero where a positive expiry is required.
    #[error("invalid time to expiry: T = {expiry}")]
    Expiry {
        /// The rejected expiry value
        expiry: f64,
    },

    /// Negative volatility, or zero where a positive volatility is required.
    #[error("invalid volatility: sigma = {volatility}")]
    Volatility {
        /// The rejected volatility value
        volatility: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_display() {
        let err = InvalidParameter::Spot { spot: -5.0 };
        assert_eq!(format!("{}", err), "invalid spot price: S = -5");
    }

    #[test]
    fn test_strike_display() {
        let err = InvalidParameter::Strike { strike: 0.0 };
        assert_eq!(format!("{}", err), "invalid strike price: K = 0");
    }

    #[test]
    fn test_expiry_display() {
        let err = InvalidParameter::Expiry { expiry: -0.25 };
        assert_eq!(format!("{}", err), "invalid time to expiry: T = -0.25");
    }

    #[test]
    fn test_volatility_display() {
        let err = InvalidParameter::Volatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "invalid volatility: sigma = -0.2");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InvalidParameter::Spot { spot: -1.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = InvalidParameter::Volatility { volatility: -0.1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_serde_roundtrip() {
            let err = InvalidParameter::Strike { strike: -100.0 };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: InvalidParameter = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
