#![no_std]

mod errors;
mod events;
mod storage;


pub use errors::Error;
pub use events::{ApprovalEvent, InitializedEvent, MintEvent, TaxToggledEvent, TransferEvent};

use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String};
use storage::*;

contractmeta!(
    key = "Description",
    val = "SpaceCoin - capped fungible asset with an optional treasury transfer tax"
);

// ==================== Constants ====================

pub const DECIMALS: u32 = 7;
/// One whole SPACE in base units.
pub const UNIT: i128 = 10_000_000;
/// Supply cap used by the reference deployment.
pub const MAX_SUPPLY: i128 = 500_000 * UNIT;
/// Transfer tax in basis points (2%).
pub const TAX_RATE_BPS: i128 = 200;
const BPS_DENOMINATOR: i128 = 10_000;

const NAME: &str = "SpaceCoin";
const SYMBOL: &str = "SPACE";

/// Tax withheld from a transfer of `amount`, rounded down.
///
/// Whole basis-point blocks and the remainder are taxed separately, so the
/// result is exact for every non-negative `i128` without an intermediate
/// product that could overflow.
pub fn tax_for(amount: i128) -> i128 {
    let whole = amount / BPS_DENOMINATOR * TAX_RATE_BPS;
    let rest = amount % BPS_DENOMINATOR * TAX_RATE_BPS / BPS_DENOMINATOR;
    whole + rest
}

// ==================== Contract ====================

#[contract]
pub struct SpaceToken;

#[contractimpl]
impl SpaceToken {
    /// Initialise the ledger. `owner` is the only identity allowed to mint
    /// and toggle the tax and must authorise its own appointment; `treasury`
    /// receives tax proceeds.
    pub fn initialize(
        env: Env,
        owner: Address,
        treasury: Address,
        max_supply: i128,
    ) -> Result<(), Error> {
        owner.require_auth();
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if max_supply <= 0 {
            return Err(Error::InvalidConfig);
        }

        set_owner(&env, &owner);
        set_treasury(&env, &treasury);
        set_max_supply(&env, max_supply);
        set_total_supply(&env, 0);
        set_tax_enabled(&env, false);

        events::emit_initialized(&env, &owner, &treasury, max_supply);
        Ok(())
    }

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if supply > get_max_supply(&env)? {
            return Err(Error::SupplyCapExceeded);
        }
        let balance = get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        set_total_supply(&env, supply);
        set_balance(&env, &to, balance);

        events::emit_mint(&env, &to, amount, supply);
        Ok(())
    }

    /// Move `amount` from `from` to `to`. While the tax is enabled, 2% of the
    /// amount (rounded down) is diverted to the treasury, except for transfers
    /// sent by the treasury itself.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Self::move_balance(&env, &from, &to, amount)
    }

    /// Let `spender` move up to `amount` of `from`'s balance. Overwrites any
    /// previous allowance; zero revokes it.
    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        set_allowance(&env, &from, &spender, amount);
        events::emit_approval(&env, &from, &spender, amount);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    /// Spend `amount` of `spender`'s allowance on `from`, moving it to `to`
    /// under the same tax rules as [`SpaceToken::transfer`].
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        Self::move_balance(&env, &from, &to, amount)?;
        set_allowance(&env, &from, &spender, allowance - amount);
        Ok(())
    }

    pub fn set_tax(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;
        set_tax_enabled(&env, enabled);
        events::emit_tax_toggled(&env, enabled);
        Ok(())
    }

    // View functions
    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn max_supply(env: Env) -> Result<i128, Error> {
        get_max_supply(&env)
    }

    pub fn tax(env: Env) -> bool {
        is_tax_enabled(&env)
    }

    pub fn tax_rate_bps(_env: Env) -> i128 {
        TAX_RATE_BPS
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn treasury(env: Env) -> Result<Address, Error> {
        get_treasury(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    /// Shared debit/credit path of `transfer` and `transfer_from`. Every new
    /// balance is computed before the first write; aliased accounts (self
    /// transfers, transfers to the treasury) build on the value computed for
    /// the earlier role.
    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let from_balance = get_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let treasury = get_treasury(env)?;
        let tax = if is_tax_enabled(env) && *from != treasury {
            tax_for(amount)
        } else {
            0
        };

        let from_after = from_balance - amount;
        let to_before = if to == from {
            from_after
        } else {
            get_balance(env, to)
        };
        let to_after = to_before
            .checked_add(amount - tax)
            .ok_or(Error::Overflow)?;
        let treasury_after = if tax > 0 {
            let treasury_before = if treasury == *to {
                to_after
            } else {
                get_balance(env, &treasury)
            };
            Some(treasury_before.checked_add(tax).ok_or(Error::Overflow)?)
        } else {
            None
        };

        set_balance(env, from, from_after);
        set_balance(env, to, to_after);
        if let Some(balance) = treasury_after {
            set_balance(env, &treasury, balance);
        }

        events::emit_transfer(env, from, to, amount, tax);
        Ok(())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = get_owner(env)?;
        caller.require_auth();
        if *caller != owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
