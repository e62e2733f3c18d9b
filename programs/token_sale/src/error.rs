use anchor_lang::prelude::*;

/// Custom error codes for the token sale program.
#[error_code]
pub enum SaleError {
    #[msg("Unauthorized: authority signature required")]
    UnauthorizedAuthority,

    #[msg("Unauthorized: beneficiary signature required")]
    UnauthorizedBeneficiary,

    #[msg("Sale is currently paused")]
    SaleIsPaused,

    #[msg("Sale has ended")]
    SaleHasEnded,

    #[msg("Purchase amount below minimum (10 payment units)")]
    BelowMinimumPurchase,

    #[msg("Price must be greater than zero")]
    InvalidPrice,

    #[msg("Invalid cliff duration")]
    InvalidCliffDuration,

    #[msg("Invalid vesting duration")]
    InvalidVestingDuration,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Invalid mint decimals")]
    InvalidMintDecimals,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient balance in source account")]
    InsufficientSourceBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Insufficient treasury balance")]
    InsufficientTreasuryBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Cliff period not reached yet")]
    CliffNotReached,

    #[msg("Nothing to claim at this time")]
    NothingToClaim,
}
