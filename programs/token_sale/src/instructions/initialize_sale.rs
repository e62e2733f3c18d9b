use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{
    ALLOCATION_DECIMALS, MAX_CLIFF_DURATION, MAX_VESTING_DURATION, PAYMENT_DECIMALS,
};
use crate::error::SaleError;
use crate::state::SaleState;

pub fn initialize_sale(
    ctx: Context<InitializeSale>,
    cliff_duration: i64,
    vesting_duration: i64,
    price: u64,
) -> Result<()> {
    require!(cliff_duration >= 0, SaleError::InvalidCliffDuration);
    require!(
        cliff_duration <= MAX_CLIFF_DURATION,
        SaleError::InvalidCliffDuration
    );
    // A vesting duration of 1 second is the documented instant-unlock-after-cliff
    // configuration; zero would divide by zero at claim time.
    require!(vesting_duration > 0, SaleError::InvalidVestingDuration);
    require!(
        vesting_duration <= MAX_VESTING_DURATION,
        SaleError::InvalidVestingDuration
    );
    require!(price > 0, SaleError::InvalidPrice);

    require!(
        ctx.accounts.asset_mint.decimals == ALLOCATION_DECIMALS as u8,
        SaleError::InvalidMintDecimals
    );
    require!(
        ctx.accounts.payment_mint.decimals == PAYMENT_DECIMALS as u8,
        SaleError::InvalidMintDecimals
    );

    let st = &mut ctx.accounts.sale_state;
    st.authority = ctx.accounts.authority.key();
    st.asset_mint = ctx.accounts.asset_mint.key();
    st.payment_mint = ctx.accounts.payment_mint.key();
    st.asset_vault = ctx.accounts.asset_vault.key();
    st.payment_treasury = ctx.accounts.payment_treasury.key();
    st.cliff_duration = cliff_duration;
    st.vesting_duration = vesting_duration;
    st.price = price;
    st.total_sold = 0;
    st.total_raised = 0;
    st.is_paused = false;
    st.is_ended = false;
    st.bump = ctx.bumps.sale_state;

    emit!(SaleInitialized {
        authority: st.authority,
        asset_mint: st.asset_mint,
        payment_mint: st.payment_mint,
        cliff_duration,
        vesting_duration,
        price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSale<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + SaleState::SIZE,
        seeds = [b"sale", authority.key().as_ref()],
        bump
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        init,
        payer = authority,
        token::mint = asset_mint,
        token::authority = sale_state,
        seeds = [b"vault", sale_state.key().as_ref()],
        bump
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = authority,
        token::mint = payment_mint,
        token::authority = sale_state,
        seeds = [b"treasury", sale_state.key().as_ref()],
        bump
    )]
    pub payment_treasury: Account<'info, TokenAccount>,

    pub asset_mint: Account<'info, Mint>,
    pub payment_mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct SaleInitialized {
    pub authority: Pubkey,
    pub asset_mint: Pubkey,
    pub payment_mint: Pubkey,
    pub cliff_duration: i64,
    pub vesting_duration: i64,
    pub price: u64,
}
