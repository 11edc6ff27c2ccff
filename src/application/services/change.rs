//! Coin change service
//!
//! Binds the greedy change algorithm to the configured denominations.

use tracing::debug;

use crate::application::ApplicationResult;
use crate::domain::change::validate_denominations;
use crate::domain::{change_with, Change};

/// Makes change using a fixed, validated set of denominations.
#[derive(Debug, Clone)]
pub struct ChangeService {
    denominations: Vec<u64>,
}

impl ChangeService {
    /// Create a service, rejecting empty or zero denominations up front.
    pub fn new(denominations: Vec<u64>) -> ApplicationResult<Self> {
        validate_denominations(&denominations)?;
        Ok(Self { denominations })
    }

    pub fn denominations(&self) -> &[u64] {
        &self.denominations
    }

    pub fn make_change(&self, amount: i64) -> ApplicationResult<Change> {
        debug!("make_change: amount={}, denominations={:?}", amount, self.denominations);
        Ok(change_with(amount, &self.denominations)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{DomainError, US_DENOMINATIONS};

    #[test]
    fn test_make_change_with_us_coins() {
        let service = ChangeService::new(US_DENOMINATIONS.to_vec()).unwrap();
        let counts = service.make_change(41).unwrap();
        assert_eq!(counts[&25], 1);
        assert_eq!(counts[&10], 1);
        assert_eq!(counts[&5], 1);
        assert_eq!(counts[&1], 1);
    }

    #[test]
    fn test_new_rejects_zero_denomination() {
        let err = ChangeService::new(vec![10, 0]).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidDenominations(_))
        ));
    }

    #[test]
    fn test_negative_amount_is_domain_error() {
        let service = ChangeService::new(vec![1]).unwrap();
        let err = service.make_change(-3).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::NegativeAmount(-3))
        ));
    }
}
