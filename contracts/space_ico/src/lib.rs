#![no_std]

mod errors;
mod events;
mod ledger;
mod storage;
mod types;


pub use errors::Error;
pub use events::{ClaimEvent, ContributionEvent, PhaseAdvancedEvent};
pub use types::*;

use ledger::TaxedLedgerClient;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, Vec};
use storage::*;

contractmeta!(
    key = "Description",
    val = "SpaceCoin ICO - phased sale with seed whitelist and per-phase limits"
);

#[contract]
pub struct SpaceIco;

#[contractimpl]
impl SpaceIco {
    /// Initialize the sale.
    ///
    /// `token` is a freshly deployed SPACE ledger; it is initialized here with
    /// this contract as its owner, `treasury` as tax recipient and
    /// `max_supply` as cap. `payment_token` is the asset contributions are
    /// paid in. `seed_investors` is the fixed whitelist for the Seed phase.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        payment_token: Address,
        seed_investors: Vec<Address>,
        rate: i128,
        treasury: Address,
        max_supply: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if rate <= 0 || max_supply <= 0 {
            return Err(Error::InvalidConfig);
        }

        let ledger = TaxedLedgerClient::new(&env, &token);
        match ledger.try_initialize(&env.current_contract_address(), &treasury, &max_supply) {
            Ok(Ok(())) => {}
            _ => return Err(Error::LedgerCallFailed),
        }

        let config = SaleConfig {
            owner: owner.clone(),
            token: token.clone(),
            payment_token: payment_token.clone(),
            rate,
        };
        set_config(&env, &config);
        set_phase(&env, Phase::Seed);
        set_paused(&env, false);
        set_raised_total(&env, 0);
        for investor in seed_investors.iter() {
            add_seed_investor(&env, &investor);
        }

        events::emit_initialized(
            &env,
            &owner,
            &token,
            &payment_token,
            rate,
            seed_investors.len(),
        );
        Ok(())
    }

    // ------------------------------------------------------------------
    // Owner controls
    // ------------------------------------------------------------------

    /// Move the sale to the next phase. Calling this in `Open` is a no-op.
    pub fn advance_phase(env: Env, caller: Address) -> Result<Phase, Error> {
        Self::require_owner(&env, &caller)?;

        let current = get_phase(&env);
        let next = current.next();
        if next != current {
            set_phase(&env, next);
            events::emit_phase_advanced(&env, current, next);
        }
        Ok(next)
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_pause_state(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        Self::set_pause_state(&env, &caller, false)
    }

    /// Toggle the SPACE transfer tax. The ledger only accepts this from its
    /// owner, which is this contract.
    pub fn set_token_tax(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        let config = Self::require_owner(&env, &caller)?;

        let ledger = TaxedLedgerClient::new(&env, &config.token);
        match ledger.try_set_tax(&env.current_contract_address(), &enabled) {
            Ok(Ok(())) => {}
            _ => return Err(Error::LedgerCallFailed),
        }

        events::emit_token_tax(&env, enabled);
        Ok(())
    }

    /// Send held contributions out of the contract once the sale is open.
    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        let config = Self::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if get_phase(&env) != Phase::Open {
            return Err(Error::NotYetAvailable);
        }

        let payment = token::Client::new(&env, &config.payment_token);
        let contract = env.current_contract_address();
        if payment.balance(&contract) < amount {
            return Err(Error::InsufficientFunds);
        }
        payment.transfer(&contract, &to, &amount);

        events::emit_withdrawal(&env, &to, amount);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Contributions
    // ------------------------------------------------------------------

    /// Contribute `amount` of the payment asset. Returns the SPACE entitlement
    /// created. Before `Open` the entitlement is reserved for `claim_tokens`;
    /// in `Open` it is minted to the contributor immediately.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<i128, Error> {
        let config = get_config(&env)?;
        contributor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if is_paused(&env) {
            return Err(Error::Paused);
        }

        let phase = get_phase(&env);
        if phase == Phase::Seed && !is_seed_investor(&env, &contributor) {
            return Err(Error::PhaseRestricted);
        }

        let caps = caps_for(phase);
        let contributed = get_contributed(&env, &contributor)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if let Some(individual) = caps.individual {
            if contributed > individual {
                return Err(Error::IndividualLimitExceeded);
            }
        }

        let raised = get_raised_total(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        if raised > caps.total {
            return Err(Error::TotalLimitExceeded);
        }

        let tokens = amount.checked_mul(config.rate).ok_or(Error::Overflow)?;

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&contributor, &env.current_contract_address(), &amount);

        set_contributed(&env, &contributor, contributed);
        set_raised_total(&env, raised);

        let minted = phase == Phase::Open;
        if minted {
            Self::issue(&env, &config, &contributor, tokens)?;
        }

        events::emit_contribution(&env, &contributor, phase, amount, tokens, minted);
        Ok(tokens)
    }

    /// Mint the caller's pending reservation. Returns the amount minted; a
    /// call with nothing pending returns 0.
    pub fn claim_tokens(env: Env, claimer: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        claimer.require_auth();

        if is_paused(&env) {
            return Err(Error::Paused);
        }
        if get_phase(&env) != Phase::Open {
            return Err(Error::NotYetAvailable);
        }

        let pending = Self::pending(&env, &config, &claimer)?;
        if pending == 0 {
            return Ok(0);
        }

        Self::issue(&env, &config, &claimer, pending)?;
        events::emit_claim(&env, &claimer, pending);
        Ok(pending)
    }

    // ------------------------------------------------------------------
    // View functions
    // ------------------------------------------------------------------

    /// SPACE entitled to `account` but not yet minted.
    pub fn get_reserved_tokens(env: Env, account: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        Self::pending(&env, &config, &account)
    }

    pub fn phase(env: Env) -> Phase {
        get_phase(&env)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn raised_total(env: Env) -> i128 {
        get_raised_total(&env)
    }

    pub fn contributed(env: Env, account: Address) -> i128 {
        get_contributed(&env, &account)
    }

    pub fn total_contribution_limit(env: Env) -> i128 {
        caps_for(get_phase(&env)).total
    }

    /// `None` in `Open`, where individual limits no longer apply.
    pub fn individual_contribution_limit(env: Env) -> Option<i128> {
        caps_for(get_phase(&env)).individual
    }

    pub fn is_seed_investor(env: Env, account: Address) -> bool {
        is_seed_investor(&env, &account)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.owner)
    }

    pub fn token_address(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.rate)
    }

    // ------------------------------------------------------------------
    // Internal helpers
    // ------------------------------------------------------------------

    fn require_owner(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
        let config = get_config(env)?;
        caller.require_auth();
        if *caller != config.owner {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn set_pause_state(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        if is_paused(env) == paused {
            return Err(Error::AlreadyInState);
        }
        set_paused(env, paused);
        events::emit_pause(env, paused);
        Ok(())
    }

    fn pending(env: &Env, config: &SaleConfig, account: &Address) -> Result<i128, Error> {
        let entitled = get_contributed(env, account)
            .checked_mul(config.rate)
            .ok_or(Error::Overflow)?;
        Ok(entitled - get_claimed(env, account))
    }

    /// Mint `tokens` on the ledger and record them as claimed.
    fn issue(env: &Env, config: &SaleConfig, to: &Address, tokens: i128) -> Result<(), Error> {
        let ledger = TaxedLedgerClient::new(env, &config.token);
        match ledger.try_mint(&env.current_contract_address(), to, &tokens) {
            Ok(Ok(())) => {}
            _ => return Err(Error::MintFailed),
        }

        let claimed = get_claimed(env, to)
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;
        set_claimed(env, to, claimed);
        Ok(())
    }
}
