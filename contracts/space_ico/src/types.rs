use soroban_sdk::{contracttype, Address};

/// Payment asset base units per whole unit (7 decimals, as native XLM).
pub const UNIT: i128 = 10_000_000;

pub const SEED_TOTAL_CAP: i128 = 15_000 * UNIT;
pub const SEED_INDIVIDUAL_CAP: i128 = 1_500 * UNIT;
pub const GENERAL_TOTAL_CAP: i128 = 30_000 * UNIT;
pub const GENERAL_INDIVIDUAL_CAP: i128 = 1_000 * UNIT;
pub const OPEN_TOTAL_CAP: i128 = 30_000 * UNIT;

/// SPACE issued per contributed unit in the reference deployment.
pub const TOKEN_RATE: i128 = 5;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Phase {
    Seed = 0,
    General = 1,
    Open = 2,
}

impl Phase {
    /// Next phase in the sale; `Open` is terminal.
    pub fn next(self) -> Phase {
        match self {
            Phase::Seed => Phase::General,
            Phase::General | Phase::Open => Phase::Open,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PhaseCaps {
    pub total: i128,
    /// `None` once individual limits are lifted.
    pub individual: Option<i128>,
}

pub fn caps_for(phase: Phase) -> PhaseCaps {
    match phase {
        Phase::Seed => PhaseCaps {
            total: SEED_TOTAL_CAP,
            individual: Some(SEED_INDIVIDUAL_CAP),
        },
        Phase::General => PhaseCaps {
            total: GENERAL_TOTAL_CAP,
            individual: Some(GENERAL_INDIVIDUAL_CAP),
        },
        Phase::Open => PhaseCaps {
            total: OPEN_TOTAL_CAP,
            individual: None,
        },
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub owner: Address,
    pub token: Address,         // SPACE ledger, owned by this contract
    pub payment_token: Address, // asset contributions are paid in
    pub rate: i128,
}
