use anchor_lang::prelude::*;

/// Per-beneficiary allocation PDA, created lazily on first purchase.
#[account]
pub struct Allocation {
    /// Buyer this record belongs to. Immutable after creation.
    pub beneficiary: Pubkey,
    /// The sale this allocation was purchased under.
    pub sale_state: Pubkey,
    /// Cumulative allocation base units purchased. Monotonic.
    pub total_allocated: u64,
    /// Cumulative allocation base units already released. Always <= total_allocated.
    pub claimed: u64,
    /// Fixed at first purchase; later purchases keep the original schedule anchor.
    pub start_time: i64,
    /// Bump seed for the allocation PDA.
    pub bump: u8,
}

impl Allocation {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // sale_state
        8 +  // total_allocated
        8 +  // claimed
        8 +  // start_time
        1;   // bump
}
