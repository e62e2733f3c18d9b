use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("CKfhe3fMV7T2X7fEvZ2mjkmvHg2C79XUz1zQ8FJB8sT5");

#[program]
pub mod token_sale {
    use super::*;

    /// Creates the sale PDA plus its vault and treasury token accounts.
    /// Price is payment base units per one whole allocation unit.
    pub fn initialize_sale(
        ctx: Context<InitializeSale>,
        cliff_duration: i64,
        vesting_duration: i64,
        price: u64,
    ) -> Result<()> {
        instructions::initialize_sale::initialize_sale(ctx, cliff_duration, vesting_duration, price)
    }

    /// Authority tops up the vault with allocation asset for future claims.
    pub fn fund_vault(ctx: Context<FundVault>, amount: u64) -> Result<()> {
        instructions::fund_vault::fund_vault(ctx, amount)
    }

    /// Buys allocation asset with payment asset. Allocation vests; the payment
    /// moves to the treasury immediately.
    pub fn buy(ctx: Context<Buy>, payment_amount: u64) -> Result<()> {
        instructions::buy::buy(ctx, payment_amount)
    }

    /// Releases whatever has newly vested to the beneficiary.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Authority withdraws collected payment asset from the treasury.
    pub fn withdraw_treasury(ctx: Context<WithdrawTreasury>, amount: u64) -> Result<()> {
        instructions::withdraw_treasury::withdraw_treasury(ctx, amount)
    }

    /// Suspends purchases. Claims keep working.
    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    /// Resumes purchases.
    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    /// Permanently ends the sale. Claims keep working.
    pub fn end_sale(ctx: Context<EndSale>) -> Result<()> {
        instructions::end_sale::end_sale(ctx)
    }

    /// Updates the price for purchases submitted after this call.
    pub fn update_price(ctx: Context<UpdatePrice>, new_price: u64) -> Result<()> {
        instructions::update_price::update_price(ctx, new_price)
    }
}
