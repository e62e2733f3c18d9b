use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleState;

/// Takes effect for purchases submitted after this call commits; existing
/// allocations are untouched.
pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        SaleError::UnauthorizedAuthority
    );
    require!(new_price > 0, SaleError::InvalidPrice);

    let old_price = st.price;
    st.price = new_price;

    emit!(PriceUpdated {
        authority: st.authority,
        old_price,
        new_price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePrice<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,
    pub authority: Signer<'info>,
}

#[event]
pub struct PriceUpdated {
    pub authority: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
}
