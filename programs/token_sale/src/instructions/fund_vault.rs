use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::SaleState;

pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.sale_state;
    require_keys_eq!(
        ctx.accounts.authority.key(),
        st.authority,
        SaleError::UnauthorizedAuthority
    );

    require!(amount > 0, SaleError::InvalidAmount);

    require_keys_eq!(
        ctx.accounts.authority_asset_account.mint,
        st.asset_mint,
        SaleError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.authority_asset_account.owner,
        ctx.accounts.authority.key(),
        SaleError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.authority_asset_account.amount >= amount,
        SaleError::InsufficientSourceBalance
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority_asset_account.to_account_info(),
                to: ctx.accounts.asset_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.asset_vault.reload()?;

    emit!(VaultFunded {
        authority: st.authority,
        amount,
        vault_balance: ctx.accounts.asset_vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundVault<'info> {
    #[account(
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        mut,
        seeds = [b"vault", sale_state.key().as_ref()],
        bump,
        constraint = asset_vault.mint == sale_state.asset_mint @ SaleError::InvalidTokenMint,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority_asset_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultFunded {
    pub authority: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
