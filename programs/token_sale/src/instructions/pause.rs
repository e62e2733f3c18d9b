use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        SaleError::UnauthorizedAuthority
    );
    st.pause()?;
    emit!(SalePaused { authority: st.authority });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SalePaused {
    pub authority: Pubkey,
}
