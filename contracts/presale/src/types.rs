use soroban_sdk::{contracttype, Address};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const CURRENCY_UNIT: i128 = 1 * SCALE; // one whole native unit, in stroops

/// Sale unit price in reference currency: $0.40 = 2 / 5
pub const UNIT_PRICE_NUMERATOR: i128 = 2;
pub const UNIT_PRICE_DENOMINATOR: i128 = 5;

/// Ceilings in reference currency
pub const GLOBAL_CAP_REFERENCE: i128 = 2_000_000;
pub const INDIVIDUAL_CAP_REFERENCE: i128 = 100_000;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum SaleState {
    /// Admin may tune pricing and the whitelist
    Configuring = 0,
    /// Whitelisted participants may contribute
    Open = 1,
    /// Funds swept to the custodian, terminal
    Closed = 2,
}

impl SaleState {
    pub fn is_open(&self) -> bool {
        matches!(self, SaleState::Open | SaleState::Closed)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, SaleState::Closed)
    }
}

/// Pricing derived from the exchange rate, always recomputed together
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pricing {
    /// Reference units per native unit
    pub exchange_rate: i128,
    /// Sale units per native unit, scaled by SCALE
    pub unit_price: i128,
    /// Maximum native currency raised overall
    pub global_cap: i128,
    /// Maximum native currency per participant
    pub individual_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub admin: Address,
    /// Receives everything swept at and after close
    pub custodian: Address,
    /// Token contract holding the sellable supply
    pub sale_token: Address,
    /// Token contract of the native currency being raised
    pub currency: Address,
}

/// Outcome of a single accepted contribution
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub accepted: i128,
    pub refunded: i128,
    pub units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sweep {
    pub currency: i128,
    pub units: i128,
}
