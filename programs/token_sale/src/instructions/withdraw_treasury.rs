use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::SaleState;

pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        SaleError::UnauthorizedAuthority
    );

    require!(amount > 0, SaleError::InvalidAmount);

    require_keys_eq!(
        ctx.accounts.authority_payment_account.mint,
        st.payment_mint,
        SaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.authority_payment_account.owner,
        ctx.accounts.authority.key(),
        SaleError::InvalidTokenAccount
    );

    require!(
        ctx.accounts.payment_treasury.amount >= amount,
        SaleError::InsufficientTreasuryBalance
    );

    let authority_key = ctx.accounts.authority.key();
    let signer_seeds: &[&[&[u8]]] = &[&[b"sale", authority_key.as_ref(), &[st.bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payment_treasury.to_account_info(),
                to: ctx.accounts.authority_payment_account.to_account_info(),
                authority: ctx.accounts.sale_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TreasuryWithdrawn {
        authority: authority_key,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTreasury<'info> {
    #[account(
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        mut,
        seeds = [b"treasury", sale_state.key().as_ref()],
        bump,
        constraint = payment_treasury.mint == sale_state.payment_mint @ SaleError::InvalidTokenMint,
    )]
    pub payment_treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority_payment_account: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TreasuryWithdrawn {
    pub authority: Pubkey,
    pub amount: u64,
}
