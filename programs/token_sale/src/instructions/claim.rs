use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::SaleError;
use crate::state::{Allocation, SaleState};
use crate::utils::vesting;

/// Claims are available in every lifecycle state: pausing or ending the sale
/// stops new purchases, never a beneficiary's vested allocation.
pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture AccountInfo/keys before taking mutable borrows.
    let sale_state_ai = ctx.accounts.sale_state.to_account_info();
    let sale_authority = ctx.accounts.sale_state.authority;
    let sale_bump = ctx.accounts.sale_state.bump;

    let st = &ctx.accounts.sale_state;
    let allocation = &mut ctx.accounts.allocation;
    require_keys_eq!(
        ctx.accounts.beneficiary.key(),
        allocation.beneficiary,
        SaleError::UnauthorizedBeneficiary
    );

    let now = Clock::get()?.unix_timestamp;
    let elapsed = now
        .checked_sub(allocation.start_time)
        .ok_or(SaleError::MathOverflow)?;

    let vested = vesting::vested_amount(
        allocation.total_allocated,
        elapsed,
        st.cliff_duration,
        st.vesting_duration,
    )?;
    let claimable = vesting::claimable_amount(vested, allocation.claimed)?;
    require!(claimable > 0, SaleError::NothingToClaim);

    require!(
        ctx.accounts.asset_vault.amount >= claimable,
        SaleError::InsufficientVaultBalance
    );

    // Update claimed before the outbound transfer.
    allocation.claimed = allocation
        .claimed
        .checked_add(claimable)
        .ok_or(SaleError::MathOverflow)?;

    let signer_seeds: &[&[&[u8]]] = &[&[b"sale", sale_authority.as_ref(), &[sale_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.asset_vault.to_account_info(),
                to: ctx.accounts.beneficiary_asset_account.to_account_info(),
                authority: sale_state_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    emit!(TokensClaimed {
        beneficiary: ctx.accounts.beneficiary.key(),
        amount: claimable,
        claimed_total: ctx.accounts.allocation.claimed,
        total_allocated: ctx.accounts.allocation.total_allocated,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        seeds = [b"sale", sale_state.authority.as_ref()],
        bump = sale_state.bump,
    )]
    pub sale_state: Account<'info, SaleState>,

    #[account(
        mut,
        seeds = [b"allocation", sale_state.key().as_ref(), beneficiary.key().as_ref()],
        bump = allocation.bump,
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
        constraint = asset_mint.key() == sale_state.asset_mint @ SaleError::InvalidTokenMint,
    )]
    pub asset_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = asset_mint,
        associated_token::authority = beneficiary,
    )]
    pub beneficiary_asset_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub total_allocated: u64,
}
