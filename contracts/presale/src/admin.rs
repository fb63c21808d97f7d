use crate::error::Error;
use crate::events::*;
use crate::pricing::derive_pricing;
use crate::storage::Storage;
use crate::types::{Pricing, SaleConfig, SaleState, Sweep};
use crate::validation::Validator;
use soroban_sdk::{log, token, Address, Env, Symbol, Vec};

pub struct Admin;

impl Admin {
    // ============================================
    // CONFIGURATION
    // ============================================

    pub fn initialize(
        env: &Env,
        admin: &Address,
        custodian: &Address,
        sale_token: &Address,
        currency: &Address,
        exchange_rate: i128,
    ) -> Result<(), Error> {
        if Storage::is_initialized(env) {
            return Err(Error::AlreadyInitialized);
        }

        Validator::require_valid_address(env, admin)?;
        Validator::require_valid_address(env, custodian)?;
        Validator::require_valid_address(env, sale_token)?;
        Validator::require_valid_address(env, currency)?;

        admin.require_auth();

        let pricing = derive_pricing(exchange_rate).ok_or(Error::InvalidPrice)?;

        Storage::set_config(
            env,
            &SaleConfig {
                admin: admin.clone(),
                custodian: custodian.clone(),
                sale_token: sale_token.clone(),
                currency: currency.clone(),
            },
        );
        Storage::set_pricing(env, &pricing);
        Storage::set_state(env, SaleState::Configuring);
        Storage::set_total_raised(env, 0);
        Storage::bump_instance(env);

        log!(env, "presale initialized", admin.clone(), exchange_rate);
        Ok(())
    }

    pub fn update_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), Error> {
        let mut config = Validator::require_admin(env, caller)?;
        Validator::require_new_address(env, &config.admin, new_admin)?;

        let previous = config.admin.clone();
        config.admin = new_admin.clone();
        Storage::set_config(env, &config);
        Storage::bump_instance(env);

        env.events().publish(
            (Symbol::new(env, "admin_updated"),),
            AdminUpdatedEvent {
                previous,
                admin: new_admin.clone(),
            },
        );
        Ok(())
    }

    pub fn update_custodian(
        env: &Env,
        caller: &Address,
        new_custodian: &Address,
    ) -> Result<(), Error> {
        let mut config = Validator::require_admin(env, caller)?;
        Validator::require_new_address(env, &config.custodian, new_custodian)?;

        let previous = config.custodian.clone();
        config.custodian = new_custodian.clone();
        Storage::set_config(env, &config);
        Storage::bump_instance(env);

        env.events().publish(
            (Symbol::new(env, "custodian_updated"),),
            CustodianUpdatedEvent {
                previous,
                custodian: new_custodian.clone(),
            },
        );
        Ok(())
    }

    /// Replace the exchange rate and every price derived from it
    pub fn update_exchange_rate(
        env: &Env,
        caller: &Address,
        exchange_rate: i128,
    ) -> Result<Pricing, Error> {
        Validator::require_admin(env, caller)?;
        Validator::require_configuring(Storage::get_state(env))?;

        let pricing = derive_pricing(exchange_rate).ok_or(Error::InvalidPrice)?;
        Storage::set_pricing(env, &pricing);
        Storage::bump_instance(env);

        env.events().publish(
            (Symbol::new(env, "exchange_rate_updated"),),
            ExchangeRateUpdatedEvent {
                exchange_rate: pricing.exchange_rate,
                unit_price: pricing.unit_price,
                global_cap: pricing.global_cap,
                individual_cap: pricing.individual_cap,
            },
        );
        Ok(pricing)
    }

    // ============================================
    // WHITELIST
    // ============================================

    pub fn add_to_whitelist(
        env: &Env,
        caller: &Address,
        participants: &Vec<Address>,
    ) -> Result<(), Error> {
        Self::update_whitelist(env, caller, participants, true)
    }

    pub fn remove_from_whitelist(
        env: &Env,
        caller: &Address,
        participants: &Vec<Address>,
    ) -> Result<(), Error> {
        Self::update_whitelist(env, caller, participants, false)
    }

    fn update_whitelist(
        env: &Env,
        caller: &Address,
        participants: &Vec<Address>,
        adding: bool,
    ) -> Result<(), Error> {
        Validator::require_admin(env, caller)?;
        Validator::require_configuring(Storage::get_state(env))?;

        // Nothing is written unless the whole batch is valid
        Validator::validate_whitelist_batch(env, participants, adding)?;

        for participant in participants.iter() {
            Storage::set_whitelisted(env, &participant, adding);

            if adding {
                env.events().publish(
                    (Symbol::new(env, "whitelisted"), participant.clone()),
                    WhitelistedEvent { participant },
                );
            } else {
                env.events().publish(
                    (Symbol::new(env, "unwhitelisted"), participant.clone()),
                    UnwhitelistedEvent { participant },
                );
            }
        }
        Storage::bump_instance(env);

        Ok(())
    }

    // ============================================
    // LIFECYCLE
    // ============================================

    pub fn open(env: &Env, caller: &Address) -> Result<(), Error> {
        Validator::require_admin(env, caller)?;
        Validator::require_configuring(Storage::get_state(env))?;

        let pricing = Storage::get_pricing(env)?;
        Storage::set_state(env, SaleState::Open);
        Storage::bump_instance(env);

        log!(env, "presale opened", pricing.global_cap, pricing.individual_cap);

        env.events().publish(
            (Symbol::new(env, "opened"),),
            OpenedEvent {
                global_cap: pricing.global_cap,
                individual_cap: pricing.individual_cap,
            },
        );
        Ok(())
    }

    /// Close the sale and sweep both balances to the custodian
    pub fn close(env: &Env, caller: &Address) -> Result<Sweep, Error> {
        let config = Validator::require_admin(env, caller)?;

        match Storage::get_state(env) {
            SaleState::Configuring => return Err(Error::SaleNotOpen),
            SaleState::Closed => return Err(Error::SaleAlreadyClosed),
            SaleState::Open => {}
        }

        Storage::set_state(env, SaleState::Closed);
        Storage::bump_instance(env);

        // Both transfers run even when a balance is zero
        let currency = Self::transfer_all(env, &config.currency, &config.custodian);
        let units = Self::transfer_all(env, &config.sale_token, &config.custodian);
        let total_raised = Storage::get_total_raised(env);

        log!(env, "presale closed", total_raised, currency, units);

        env.events().publish(
            (Symbol::new(env, "closed"),),
            ClosedEvent {
                custodian: config.custodian,
                total_raised,
                currency_swept: currency,
                units_swept: units,
            },
        );

        Ok(Sweep { currency, units })
    }

    /// Sweep sale units that reached the contract after close
    pub fn sweep_units(env: &Env, caller: &Address) -> Result<i128, Error> {
        let config = Validator::require_admin(env, caller)?;
        Validator::require_closed(Storage::get_state(env))?;

        Ok(Self::sweep(env, &config.sale_token, &config.custodian))
    }

    /// Sweep native currency that reached the contract after close
    pub fn sweep_currency(env: &Env, caller: &Address) -> Result<i128, Error> {
        let config = Validator::require_admin(env, caller)?;
        Validator::require_closed(Storage::get_state(env))?;

        Ok(Self::sweep(env, &config.currency, &config.custodian))
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn sweep(env: &Env, token: &Address, custodian: &Address) -> i128 {
        let client = token::Client::new(env, token);
        let amount = client.balance(&env.current_contract_address());
        if amount == 0 {
            return 0;
        }

        client.transfer(&env.current_contract_address(), custodian, &amount);
        log!(env, "swept", token.clone(), amount);

        env.events().publish(
            (Symbol::new(env, "swept"), token.clone()),
            SweptEvent {
                token: token.clone(),
                to: custodian.clone(),
                amount,
            },
        );
        amount
    }

    fn transfer_all(env: &Env, token: &Address, custodian: &Address) -> i128 {
        let client = token::Client::new(env, token);
        let amount = client.balance(&env.current_contract_address());
        client.transfer(&env.current_contract_address(), custodian, &amount);
        amount
    }
}
