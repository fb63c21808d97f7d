#![no_std]

mod admin;
mod contribution;
mod error;
mod events;
mod pricing;
mod storage;
mod types;
mod validation;


pub use error::Error;
pub use events::*;
pub use types::{Contribution, Pricing, SaleConfig, SaleState, Sweep, SCALE};

use admin::Admin;
use contribution::Contributions;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[contract]
pub struct Presale;

#[contractimpl]
impl Presale {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the sale in the configuring state
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAddress`: An identity is the sale contract itself
    /// - `InvalidPrice`: Exchange rate is not positive or yields empty caps
    pub fn initialize(
        env: Env,
        admin: Address,
        custodian: Address,
        sale_token: Address,
        currency: Address,
        exchange_rate: i128,
    ) -> Result<(), Error> {
        Admin::initialize(&env, &admin, &custodian, &sale_token, &currency, exchange_rate)
    }

    /// Hand admin rights to another identity
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidAddress`: New admin is the contract itself or unchanged
    pub fn update_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        Admin::update_admin(&env, &caller, &new_admin)
    }

    /// Change the identity receiving swept funds
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `InvalidAddress`: New custodian is the contract itself or unchanged
    pub fn update_custodian(env: Env, caller: Address, new_custodian: Address) -> Result<(), Error> {
        Admin::update_custodian(&env, &caller, &new_custodian)
    }

    /// Reprice the sale before it opens
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleAlreadyOpen`: Sale left the configuring state
    /// - `InvalidPrice`: Exchange rate is not positive or yields empty caps
    pub fn update_exchange_rate(
        env: Env,
        caller: Address,
        exchange_rate: i128,
    ) -> Result<Pricing, Error> {
        Admin::update_exchange_rate(&env, &caller, exchange_rate)
    }

    // ============================================
    // WHITELIST
    // ============================================

    /// Whitelist a batch of participants, all or nothing
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleAlreadyOpen`: Sale left the configuring state
    /// - `InvalidAddress`: An entry is the contract itself
    /// - `AlreadyWhitelisted`: An entry is already listed or repeated
    pub fn add_to_whitelist(env: Env, caller: Address, participants: Vec<Address>) -> Result<(), Error> {
        Admin::add_to_whitelist(&env, &caller, &participants)
    }

    /// Remove a batch of participants from the whitelist, all or nothing
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleAlreadyOpen`: Sale left the configuring state
    /// - `InvalidAddress`: An entry is the contract itself
    /// - `NotWhitelisted`: An entry is not listed or repeated
    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        participants: Vec<Address>,
    ) -> Result<(), Error> {
        Admin::remove_from_whitelist(&env, &caller, &participants)
    }

    // ============================================
    // LIFECYCLE
    // ============================================

    /// Open the sale for contributions
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleAlreadyOpen`: Sale already opened
    pub fn open(env: Env, caller: Address) -> Result<(), Error> {
        Admin::open(&env, &caller)
    }

    /// Close the sale, sweeping raised currency and unsold units to the custodian
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleNotOpen`: Sale never opened
    /// - `SaleAlreadyClosed`: Sale already closed
    pub fn close(env: Env, caller: Address) -> Result<Sweep, Error> {
        Admin::close(&env, &caller)
    }

    /// Sweep sale units returned to the contract after close
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleNotClosed`: Sale not closed yet
    pub fn sweep_units(env: Env, caller: Address) -> Result<i128, Error> {
        Admin::sweep_units(&env, &caller)
    }

    /// Sweep native currency sent to the contract after close
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not admin
    /// - `SaleNotClosed`: Sale not closed yet
    pub fn sweep_currency(env: Env, caller: Address) -> Result<i128, Error> {
        Admin::sweep_currency(&env, &caller)
    }

    // ============================================
    // CONTRIBUTIONS
    // ============================================

    /// Contribute native currency in exchange for sale units
    ///
    /// # Errors
    /// - `InvalidAmount`: Value must be positive
    /// - `NotInitialized`: Contract not initialized
    /// - `SaleNotOpen`: Sale not opened yet
    /// - `SaleClosed`: Sale already closed
    /// - `NotWhitelisted`: Participant not whitelisted
    /// - `IndividualCapReached`: Participant has no headroom left
    /// - `GlobalCapReached`: Sale has no headroom left
    /// - `InsufficientBalance`: Not enough sale units left in the contract
    pub fn contribute(env: Env, participant: Address, value: i128) -> Result<Contribution, Error> {
        Contributions::contribute(&env, &participant, value)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn admin(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.admin)
    }

    pub fn custodian(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.custodian)
    }

    pub fn sale_token(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.sale_token)
    }

    pub fn currency(env: Env) -> Result<Address, Error> {
        Ok(Storage::get_config(&env)?.currency)
    }

    pub fn state(env: Env) -> SaleState {
        Storage::get_state(&env)
    }

    pub fn is_open(env: Env) -> bool {
        Storage::get_state(&env).is_open()
    }

    pub fn is_closed(env: Env) -> bool {
        Storage::get_state(&env).is_closed()
    }

    pub fn is_whitelisted(env: Env, participant: Address) -> bool {
        Storage::is_whitelisted(&env, &participant)
    }

    pub fn total_raised(env: Env) -> i128 {
        Storage::get_total_raised(&env)
    }

    pub fn invested_by(env: Env, participant: Address) -> i128 {
        Storage::get_invested(&env, &participant)
    }

    /// Exchange rate with every price derived from it
    pub fn pricing(env: Env) -> Result<Pricing, Error> {
        Storage::get_pricing(&env)
    }

    pub fn exchange_rate(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_pricing(&env)?.exchange_rate)
    }

    pub fn unit_price(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_pricing(&env)?.unit_price)
    }

    pub fn global_cap(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_pricing(&env)?.global_cap)
    }

    pub fn individual_cap(env: Env) -> Result<i128, Error> {
        Ok(Storage::get_pricing(&env)?.individual_cap)
    }

    /// Native currency `participant` may still contribute
    pub fn individual_headroom(env: Env, participant: Address) -> Result<i128, Error> {
        Contributions::individual_headroom(&env, &participant)
    }

    /// Native currency the sale may still raise
    pub fn global_headroom(env: Env) -> Result<i128, Error> {
        Contributions::global_headroom(&env)
    }
}
