use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ==================== Event Payload Structs ====================
// Published under the topic pattern ("SPACE", symbol_short!("…")).

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InitializedEvent {
    pub owner: Address,
    pub treasury: Address,
    pub max_supply: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    /// Gross amount debited from the sender.
    pub amount: i128,
    /// Portion of `amount` credited to the treasury.
    pub tax: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ApprovalEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TaxToggledEvent {
    pub enabled: bool,
}

// ==================== Emitters ====================

pub fn emit_initialized(env: &Env, owner: &Address, treasury: &Address, max_supply: i128) {
    env.events().publish(
        ("SPACE", symbol_short!("INIT")),
        InitializedEvent {
            owner: owner.clone(),
            treasury: treasury.clone(),
            max_supply,
        },
    );
}

pub fn emit_mint(env: &Env, to: &Address, amount: i128, total_supply: i128) {
    env.events().publish(
        ("SPACE", symbol_short!("MINT")),
        MintEvent {
            to: to.clone(),
            amount,
            total_supply,
        },
    );
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128, tax: i128) {
    env.events().publish(
        ("SPACE", symbol_short!("TRANSFER")),
        TransferEvent {
            from: from.clone(),
            to: to.clone(),
            amount,
            tax,
        },
    );
}

pub fn emit_approval(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        ("SPACE", symbol_short!("APPROVE")),
        ApprovalEvent {
            from: from.clone(),
            spender: spender.clone(),
            amount,
        },
    );
}

pub fn emit_tax_toggled(env: &Env, enabled: bool) {
    env.events()
        .publish(("SPACE", symbol_short!("TAX")), TaxToggledEvent { enabled });
}
