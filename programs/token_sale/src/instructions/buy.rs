use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::{Allocation, SaleState};
use crate::utils::vesting;

pub fn buy(ctx: Context<Buy>, payment_amount: u64) -> Result<()> {
    let st = &mut ctx.accounts.sale_state;
    let clock = Clock::get()?;

    st.assert_open()?;
    vesting::validate_purchase_amount(payment_amount)?;
    require!(
        ctx.accounts.buyer_payment_account.amount >= payment_amount,
        SaleError::InsufficientSourceBalance
    );

    let allocation_delta = vesting::allocation_from_payment(payment_amount, st.price)?;
    require!(allocation_delta > 0, SaleError::InvalidAmount);

    // Refuse to sell allocation the vault cannot eventually deliver.
    require!(
        ctx.accounts.asset_vault.amount >= allocation_delta,
        SaleError::InsufficientVaultBalance
    );

    // State updates before the payment CPI (checks-effects-interactions).
    let allocation = &mut ctx.accounts.allocation;
    if allocation.beneficiary == Pubkey::default() {
        // First purchase by this buyer anchors the vesting schedule.
        allocation.beneficiary = ctx.accounts.buyer.key();
        allocation.sale_state = st.key();
        allocation.total_allocated = 0;
        allocation.claimed = 0;
        allocation.start_time = clock.unix_timestamp;
        allocation.bump = ctx.bumps.allocation;
    }
    allocation.total_allocated = allocation
        .total_allocated
        .checked_add(allocation_delta)
        .ok_or(SaleError::MathOverflow)?;

    st.total_sold = st
        .total_sold
        .checked_add(allocation_delta)
        .ok_or(SaleError::MathOverflow)?;
    st.total_raised = st
        .total_raised
        .checked_add(payment_amount)
        .ok_or(SaleError::MathOverflow)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer_payment_account.to_account_info(),
                to: ctx.accounts.payment_treasury.to_account_info(),
                authority: ctx.accounts.buyer.to_account_info(),
            },
        ),
        payment_amount,
    )?;

    emit!(TokensPurchased {
        buyer: ctx.accounts.buyer.key(),
        payment_amount,
        allocation_delta,
        total_allocated: ctx.accounts.allocation.total_allocated,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(
        mut,
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Allocation::SIZE,
        seeds = [b"allocation", sale_state.key().as_ref(), buyer.key().as_ref()],
        bump
    )]
    pub allocation: Account<'info, Allocation>,

    #[account(
        mut,
        seeds = [b"vault", sale_state.key().as_ref()],
        bump,
        constraint = asset_vault.mint == sale_state.asset_mint @ SaleError::InvalidTokenMint,
    )]
    pub asset_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"treasury", sale_state.key().as_ref()],
        bump,
        constraint = payment_treasury.mint == sale_state.payment_mint @ SaleError::InvalidTokenMint,
    )]
    pub payment_treasury: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = buyer_payment_account.mint == sale_state.payment_mint @ SaleError::InvalidTokenMint,
    )]
    pub buyer_payment_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub payment_amount: u64,
    pub allocation_delta: u64,
    pub total_allocated: u64,
}
