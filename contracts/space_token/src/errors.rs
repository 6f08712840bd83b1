use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    Unauthorized = 3,

    // --- Ledger rules (4–5) ---
    InsufficientBalance = 4,
    SupplyCapExceeded = 5,

    // --- Input validation (6–8) ---
    InvalidAmount = 6,
    InvalidConfig = 7,
    Overflow = 8,

    // --- Delegated transfers (9) ---
    InsufficientAllowance = 9,
}
