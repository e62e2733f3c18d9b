use anchor_lang::prelude::*;

use crate::error::SaleError;
use crate::state::SaleState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        SaleError::UnauthorizedAuthority
    );
    st.unpause()?;
    emit!(SaleUnpaused { authority: st.authority });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,
    pub authority: Signer<'info>,
}

#[event]
pub struct SaleUnpaused {
    pub authority: Pubkey,
}
