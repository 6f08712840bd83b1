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

    // --- Sale state (4–7) ---
    Paused = 4,
    AlreadyInState = 5,
    PhaseRestricted = 6,
    NotYetAvailable = 7,

    // --- Limits (8–10) ---
    IndividualLimitExceeded = 8,
    TotalLimitExceeded = 9,
    InsufficientFunds = 10,

    // --- Input validation (11–13) ---
    InvalidAmount = 11,
    InvalidConfig = 12,
    Overflow = 13,

    // --- Ledger calls (14–15) ---
    MintFailed = 14,
    LedgerCallFailed = 15,
}
