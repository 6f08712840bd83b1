use soroban_sdk::{contractclient, Address, Env};

// Subset of the SPACE ledger interface this contract drives. The sale
// initializes the ledger with itself as owner, which `mint` and `set_tax`
// require.
#[contractclient(name = "TaxedLedgerClient")]
pub trait TaxedLedger {
    fn initialize(env: Env, owner: Address, treasury: Address, max_supply: i128);
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn set_tax(env: Env, caller: Address, enabled: bool);
}
