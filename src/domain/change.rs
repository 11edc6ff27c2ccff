//! Greedy coin change.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// US coin denominations in cents, largest first.
pub const US_DENOMINATIONS: [u64; 4] = [25, 10, 5, 1];

/// Coin counts keyed by denomination.
pub type Change = BTreeMap<u64, u64>;

/// Smallest number of US coins for `amount` cents.
pub fn change(amount: i64) -> Result<Change, DomainError> {
    change_with(amount, &US_DENOMINATIONS)
}

/// Greedy change for `amount` using the given denominations.
///
/// Denominations are tried largest first regardless of input order, and
/// every denomination gets an entry even when its count is zero.
pub fn change_with(amount: i64, denominations: &[u64]) -> Result<Change, DomainError> {
    if amount < 0 {
        return Err(DomainError::NegativeAmount(amount));
    }
    validate_denominations(denominations)?;

    let mut sorted = denominations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    let mut counts = Change::new();
    let mut remaining = amount.unsigned_abs();
    for denomination in sorted {
        counts.insert(denomination, remaining / denomination);
        remaining %= denomination;
    }

    if remaining != 0 {
        return Err(DomainError::UnrepresentableAmount { amount, remainder: remaining });
    }
    Ok(counts)
}

pub fn validate_denominations(denominations: &[u64]) -> Result<(), DomainError> {
    if denominations.is_empty() {
        return Err(DomainError::InvalidDenominations(
            "at least one denomination is required".to_string(),
        ));
    }
    if denominations.contains(&0) {
        return Err(DomainError::InvalidDenominations(
            "denominations must be positive".to_string(),
        ));
    }
    Ok(())
}
