//! Program-wide constants.

/// Decimal precision of the allocation asset mint.
pub const ALLOCATION_DECIMALS: u32 = 9;

/// Decimal precision of the payment asset mint.
pub const PAYMENT_DECIMALS: u32 = 6;

/// Minimum purchase: 10 whole payment units, in base units.
pub const MIN_PURCHASE: u64 = 10_000_000;

/// Upper bound on the cliff duration (2 years, seconds).
pub const MAX_CLIFF_DURATION: i64 = 730 * 24 * 60 * 60;

/// Upper bound on the vesting duration (4 years, seconds).
pub const MAX_VESTING_DURATION: i64 = 1460 * 24 * 60 * 60;
