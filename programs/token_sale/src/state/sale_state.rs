use anchor_lang::prelude::*;

use crate::error::SaleError;

/// Singleton sale configuration PDA, one per authority.
#[account]
pub struct SaleState {
    /// Authority permitted to perform administrative operations.
    pub authority: Pubkey,
    /// Mint of the allocation asset being sold.
    pub asset_mint: Pubkey,
    /// Mint of the payment asset buyers pay with.
    pub payment_mint: Pubkey,
    /// Program-controlled vault holding unsold allocation asset.
    pub asset_vault: Pubkey,
    /// Program-controlled treasury collecting payment asset.
    pub payment_treasury: Pubkey,
    /// Cliff duration in seconds, fixed at creation.
    pub cliff_duration: i64,
    /// Vesting duration in seconds, fixed at creation.
    pub vesting_duration: i64,
    /// Payment base units per one whole allocation unit. Always > 0.
    pub price: u64,
    /// Total allocation base units sold across all purchases.
    pub total_sold: u64,
    /// Total payment base units raised across all purchases.
    pub total_raised: u64,
    /// Purchases refused while set; toggleable until the sale ends.
    pub is_paused: bool,
    /// Terminal flag; once set, purchases are refused forever.
    pub is_ended: bool,
    /// Bump seed for the sale PDA.
    pub bump: u8,
}

impl SaleState {
    pub const SIZE: usize =
        32 + // authority
        32 + // asset_mint
        32 + // payment_mint
        32 + // asset_vault
        32 + // payment_treasury
        8 +  // cliff_duration
        8 +  // vesting_duration
        8 +  // price
        8 +  // total_sold
        8 +  // total_raised
        1 +  // is_paused
        1 +  // is_ended
        1;   // bump

    /// Gate for purchases: the sale must be neither ended nor paused.
    pub fn assert_open(&self) -> std::result::Result<(), SaleError> {
        if self.is_ended {
            return Err(SaleError::SaleHasEnded);
        }
        if self.is_paused {
            return Err(SaleError::SaleIsPaused);
        }
        Ok(())
    }

    /// Re-asserting an already-paused sale is not an error.
    pub fn pause(&mut self) -> std::result::Result<(), SaleError> {
        if self.is_ended {
            return Err(SaleError::SaleHasEnded);
        }
        self.is_paused = true;
        Ok(())
    }

    pub fn unpause(&mut self) -> std::result::Result<(), SaleError> {
        if self.is_ended {
            return Err(SaleError::SaleHasEnded);
        }
        self.is_paused = false;
        Ok(())
    }

    /// Terminal transition. Clears the paused flag so an ended sale is
    /// reported unambiguously. Idempotent.
    pub fn end(&mut self) {
        self.is_ended = true;
        self.is_paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> SaleState {
        SaleState {
            authority: Pubkey::default(),
            asset_mint: Pubkey::default(),
            payment_mint: Pubkey::default(),
            asset_vault: Pubkey::default(),
            payment_treasury: Pubkey::default(),
            cliff_duration: 0,
            vesting_duration: 1,
            price: 50_000,
            total_sold: 0,
            total_raised: 0,
            is_paused: false,
            is_ended: false,
            bump: 255,
        }
    }

    #[test]
    fn pause_blocks_purchases_only() {
        let mut st = fresh();
        assert!(st.assert_open().is_ok());

        st.pause().unwrap();
        assert!(matches!(st.assert_open(), Err(SaleError::SaleIsPaused)));

        st.unpause().unwrap();
        assert!(st.assert_open().is_ok());
    }

    #[test]
    fn pause_is_reassertable() {
        let mut st = fresh();
        st.pause().unwrap();
        // Pausing an already-paused sale must not error.
        st.pause().unwrap();
        assert!(st.is_paused);

        st.unpause().unwrap();
        st.unpause().unwrap();
        assert!(!st.is_paused);
    }

    #[test]
    fn end_is_terminal_and_clears_paused() {
        let mut st = fresh();
        st.pause().unwrap();
        st.end();
        assert!(st.is_ended);
        assert!(!st.is_paused);

        // No transition leaves Ended.
        assert!(matches!(st.pause(), Err(SaleError::SaleHasEnded)));
        assert!(matches!(st.unpause(), Err(SaleError::SaleHasEnded)));
        assert!(matches!(st.assert_open(), Err(SaleError::SaleHasEnded)));

        // Ending again re-asserts without error.
        st.end();
        assert!(st.is_ended);
    }

    #[test]
    fn ended_reported_before_paused() {
        let mut st = fresh();
        st.is_paused = true;
        st.is_ended = true;
        assert!(matches!(st.assert_open(), Err(SaleError::SaleHasEnded)));
    }
}
