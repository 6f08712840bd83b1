use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    // Singletons, instance storage
    Owner,
    Treasury,
    MaxSupply,
    TotalSupply,
    TaxEnabled,

    // Per-account, persistent storage
    Balance(Address),
    // (holder, spender)
    Allowance(Address, Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_treasury(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Treasury)
        .ok_or(Error::NotInitialized)
}

pub fn set_treasury(env: &Env, treasury: &Address) {
    env.storage().instance().set(&DataKey::Treasury, treasury);
}

pub fn get_max_supply(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&DataKey::MaxSupply)
        .ok_or(Error::NotInitialized)
}

pub fn set_max_supply(env: &Env, max_supply: i128) {
    env.storage()
        .instance()
        .set(&DataKey::MaxSupply, &max_supply);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn is_tax_enabled(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TaxEnabled)
        .unwrap_or(false)
}

pub fn set_tax_enabled(env: &Env, enabled: bool) {
    env.storage().instance().set(&DataKey::TaxEnabled, &enabled);
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &amount);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(from.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Allowance(from.clone(), spender.clone()), &amount);
}
