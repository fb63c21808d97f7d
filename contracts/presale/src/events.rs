use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistedEvent {
    pub participant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnwhitelistedEvent {
    pub participant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenedEvent {
    pub global_cap: i128,
    pub individual_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClosedEvent {
    pub custodian: Address,
    pub total_raised: i128,
    pub currency_swept: i128,
    pub units_swept: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    pub participant: Address,
    pub value: i128,
    pub accepted: i128,
    pub units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminUpdatedEvent {
    pub previous: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodianUpdatedEvent {
    pub previous: Address,
    pub custodian: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeRateUpdatedEvent {
    pub exchange_rate: i128,
    pub unit_price: i128,
    pub global_cap: i128,
    pub individual_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweptEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}
