use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{contracttype, Address, Env};

#[contracttype]
pub enum DataKey {
    Config,
    Phase,
    Paused,
    RaisedTotal,
    SeedInvestor(Address),
    Contributed(Address),
    Claimed(Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_phase(env: &Env) -> Phase {
    env.storage()
        .instance()
        .get(&DataKey::Phase)
        .unwrap_or(Phase::Seed)
}

pub fn set_phase(env: &Env, phase: Phase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_raised_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RaisedTotal)
        .unwrap_or(0)
}

pub fn set_raised_total(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::RaisedTotal, &amount);
}

pub fn is_seed_investor(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::SeedInvestor(account.clone()))
        .unwrap_or(false)
}

pub fn add_seed_investor(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::SeedInvestor(account.clone()), &true);
}

pub fn get_contributed(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contributed(account.clone()))
        .unwrap_or(0)
}

pub fn set_contributed(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributed(account.clone()), &amount);
}

pub fn get_claimed(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Claimed(account.clone()))
        .unwrap_or(0)
}

pub fn set_claimed(env: &Env, account: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Claimed(account.clone()), &amount);
}
