//! Batch summarisation of an options chain.
//!
//! Valuation of independent contracts is embarrassingly parallel: each
//! summary reads only its own inputs. Small chains are summarised
//! sequentially (the spawn overhead dominates otherwise); larger ones
//! fan out over a Rayon thread pool. Output order always matches input
//! order.

use rayon::prelude::*;

use crate::summary::{summarize, RiskSummary};
use vanilla_core::types::{InvalidParameter, OptionContract, OptionType};

/// Chain length at which summarisation switches from the sequential to
/// the Rayon-parallel path.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Summarises every contract in a chain, preserving input order.
///
/// Uses [`DEFAULT_PARALLEL_THRESHOLD`] to decide between the sequential
/// and parallel paths; both produce identical results.
///
/// # Errors
/// [`InvalidParameter`] from the first offending contract (by input
/// order in the sequential path; an arbitrary offender in the parallel
/// path).
///
/// # Examples
/// ```
/// use vanilla_core::types::{OptionContract, OptionType};
/// use vanilla_risk::chain::summarize_chain;
///
/// let chain: Vec<_> = [90.0, 100.0, 110.0]
///     .iter()
///     .map(|&strike| {
///         let contract = OptionContract::new(100.0_f64, strike, 0.5, 0.2, 0.05).unwrap();
///         (contract, OptionType::Call)
///     })
///     .collect();
///
/// let summaries = summarize_chain(&chain).unwrap();
/// assert_eq!(summaries.len(), 3);
/// ```
pub fn summarize_chain(
    chain: &[(OptionContract<f64>, OptionType)],
) -> Result<Vec<RiskSummary<f64>>, InvalidParameter> {
    summarize_chain_with_threshold(chain, DEFAULT_PARALLEL_THRESHOLD)
}

/// Summarises a chain with an explicit sequential/parallel threshold.
///
/// A threshold of 0 forces the parallel path, `usize::MAX` forces the
/// sequential path.
///
/// # Errors
/// [`InvalidParameter`] if any contract in the chain is invalid.
pub fn summarize_chain_with_threshold(
    chain: &[(OptionContract<f64>, OptionType)],
    parallel_threshold: usize,
) -> Result<Vec<RiskSummary<f64>>, InvalidParameter> {
    if chain.len() < parallel_threshold {
        chain
            .iter()
            .map(|(contract, option_type)| summarize(contract, *option_type))
            .collect()
    } else {
        chain
            .par_iter()
            .map(|(contract, option_type)| summarize(contract, *option_type))
            .collect()
    }
}
