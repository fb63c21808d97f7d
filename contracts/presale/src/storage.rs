use crate::error::Error;
use crate::types::{Pricing, SaleConfig, SaleState};
use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PARTICIPANT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PARTICIPANT_LIFETIME_THRESHOLD: u32 = PARTICIPANT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Pricing,
    State,
    TotalRaised,
    Whitelisted(Address),
    Invested(Address),
}

pub struct Storage;

impl Storage {
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    // Config
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

    // Pricing
    pub fn get_pricing(env: &Env) -> Result<Pricing, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Pricing)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_pricing(env: &Env, pricing: &Pricing) {
        env.storage().instance().set(&DataKey::Pricing, pricing);
    }

    // Lifecycle
    pub fn get_state(env: &Env) -> SaleState {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .unwrap_or(SaleState::Configuring)
    }

    pub fn set_state(env: &Env, state: SaleState) {
        env.storage().instance().set(&DataKey::State, &state);
    }

    // Totals
    pub fn get_total_raised(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalRaised)
            .unwrap_or(0)
    }

    pub fn set_total_raised(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::TotalRaised, &amount);
    }

    // Whitelist
    pub fn is_whitelisted(env: &Env, participant: &Address) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Whitelisted(participant.clone()))
    }

    pub fn set_whitelisted(env: &Env, participant: &Address, whitelisted: bool) {
        let key = DataKey::Whitelisted(participant.clone());
        if whitelisted {
            env.storage().persistent().set(&key, &true);
            env.storage().persistent().extend_ttl(
                &key,
                PARTICIPANT_LIFETIME_THRESHOLD,
                PARTICIPANT_BUMP_AMOUNT,
            );
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    // Per-participant totals
    pub fn get_invested(env: &Env, participant: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Invested(participant.clone()))
            .unwrap_or(0)
    }

    pub fn set_invested(env: &Env, participant: &Address, amount: i128) {
        let key = DataKey::Invested(participant.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage().persistent().extend_ttl(
            &key,
            PARTICIPANT_LIFETIME_THRESHOLD,
            PARTICIPANT_BUMP_AMOUNT,
        );
    }
}
