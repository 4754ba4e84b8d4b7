//! Configuration and call-time checks.
//!
//! Every check runs before any collection is consumed or any wrapper is
//! touched, and stops at the first violation.

use crate::config::MergeOptions;
use crate::errors::{Error, Result};
use crate::pattern::Pattern;

/// Validation for merge configuration and merge inputs.
pub(crate) struct Validator;

impl Validator {
    /// A total, when present, must be at least one.
    pub(crate) fn validate_total(total: Option<usize>) -> Result<()> {
        match total {
            Some(0) => Err(Error::InvalidTotal),
            _ => Ok(()),
        }
    }

    /// There must be exactly one collection per pattern position.
    pub(crate) fn validate_collection_count(pattern: &Pattern, actual: usize) -> Result<()> {
        if pattern.len() != actual {
            return Err(Error::PatternMismatch {
                expected: pattern.len(),
                actual,
            });
        }
        Ok(())
    }

    /// Resolve the number of elements a merge produces.
    ///
    /// The configured total applies unless the call ignores it, in which case
    /// (as when no total is configured) every available element is used. An
    /// applied total must be covered by the available elements.
    pub(crate) fn resolve_total(
        total: Option<usize>,
        options: MergeOptions,
        available: usize,
    ) -> Result<usize> {
        match total {
            Some(total) if !options.ignores_total() => {
                if available < total {
                    return Err(Error::InsufficientElements {
                        expected: total,
                        actual: available,
                    });
                }
                Ok(total)
            }
            _ => Ok(available),
        }
    }
}
