use crate::types::Phase;
use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ==================== Event Payload Structs ====================
// Indexers subscribe via the topic pattern ("ICO", symbol_short!("…")).

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub payment_token: Address,
    pub rate: i128,
    pub seed_investors: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PhaseAdvancedEvent {
    pub from: Phase,
    pub to: Phase,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PauseEvent {
    pub paused: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributionEvent {
    pub contributor: Address,
    pub phase: Phase,
    pub amount: i128,
    /// SPACE entitlement created by this contribution.
    pub tokens: i128,
    /// true when the entitlement was minted in the same call.
    pub minted: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ClaimEvent {
    pub claimer: Address,
    pub tokens: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WithdrawalEvent {
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenTaxEvent {
    pub enabled: bool,
}

// ==================== Emitters ====================

pub fn emit_initialized(
    env: &Env,
    owner: &Address,
    token: &Address,
    payment_token: &Address,
    rate: i128,
    seed_investors: u32,
) {
    env.events().publish(
        ("ICO", symbol_short!("INIT")),
        SaleInitializedEvent {
            owner: owner.clone(),
            token: token.clone(),
            payment_token: payment_token.clone(),
            rate,
            seed_investors,
        },
    );
}

pub fn emit_phase_advanced(env: &Env, from: Phase, to: Phase) {
    env.events().publish(
        ("ICO", symbol_short!("PHASE")),
        PhaseAdvancedEvent { from, to },
    );
}

pub fn emit_pause(env: &Env, paused: bool) {
    let name = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    env.events().publish(("ICO", name), PauseEvent { paused });
}

pub fn emit_contribution(
    env: &Env,
    contributor: &Address,
    phase: Phase,
    amount: i128,
    tokens: i128,
    minted: bool,
) {
    env.events().publish(
        ("ICO", symbol_short!("CONTRIB")),
        ContributionEvent {
            contributor: contributor.clone(),
            phase,
            amount,
            tokens,
            minted,
        },
    );
}

pub fn emit_claim(env: &Env, claimer: &Address, tokens: i128) {
    env.events().publish(
        ("ICO", symbol_short!("CLAIM")),
        ClaimEvent {
            claimer: claimer.clone(),
            tokens,
        },
    );
}

pub fn emit_withdrawal(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        ("ICO", symbol_short!("WITHDRAW")),
        WithdrawalEvent {
            to: to.clone(),
            amount,
        },
    );
}

pub fn emit_token_tax(env: &Env, enabled: bool) {
    env.events()
        .publish(("ICO", symbol_short!("TOKEN_TAX")), TokenTaxEvent { enabled });
}
