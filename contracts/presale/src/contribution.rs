use crate::error::Error;
use crate::events::ContributedEvent;
use crate::pricing::{calculate_accepted, calculate_units};
use crate::storage::Storage;
use crate::types::Contribution;
use crate::validation::Validator;
use soroban_sdk::{log, token, Address, Env, Symbol};

pub struct Contributions;

impl Contributions {
    /// Accept `value` of native currency from a whitelisted participant
    ///
    /// The value is truncated to the smaller of the participant's and the
    /// sale's remaining headroom; the rest is refunded in the same call.
    /// Only zero headroom is a rejection.
    pub fn contribute(env: &Env, participant: &Address, value: i128) -> Result<Contribution, Error> {
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = Storage::get_config(env)?;
        Validator::require_accepting(Storage::get_state(env))?;

        participant.require_auth();

        if !Storage::is_whitelisted(env, participant) {
            return Err(Error::NotWhitelisted);
        }

        let pricing = Storage::get_pricing(env)?;

        let invested = Storage::get_invested(env, participant);
        let individual_remaining = pricing.individual_cap - invested;
        if individual_remaining <= 0 {
            return Err(Error::IndividualCapReached);
        }

        let total_raised = Storage::get_total_raised(env);
        let global_remaining = pricing.global_cap - total_raised;
        if global_remaining <= 0 {
            return Err(Error::GlobalCapReached);
        }

        let accepted = calculate_accepted(value, individual_remaining, global_remaining);
        let refunded = value - accepted;
        let units = calculate_units(accepted, pricing.unit_price).ok_or(Error::InvalidAmount)?;

        let this = env.current_contract_address();
        let sale_token = token::Client::new(env, &config.sale_token);
        if sale_token.balance(&this) < units {
            return Err(Error::InsufficientBalance);
        }

        let new_total = total_raised
            .checked_add(accepted)
            .ok_or(Error::InvalidAmount)?;
        let new_invested = invested.checked_add(accepted).ok_or(Error::InvalidAmount)?;

        // Collect the full value, hand back what does not fit under the caps
        let currency = token::Client::new(env, &config.currency);
        currency.transfer(participant, &this, &value);
        if refunded > 0 {
            currency.transfer(&this, participant, &refunded);
        }

        sale_token.transfer(&this, participant, &units);

        Storage::set_total_raised(env, new_total);
        Storage::set_invested(env, participant, new_invested);
        Storage::bump_instance(env);

        log!(env, "contribution", participant.clone(), accepted, refunded, units);

        env.events().publish(
            (Symbol::new(env, "contributed"), participant.clone()),
            ContributedEvent {
                participant: participant.clone(),
                value,
                accepted,
                units,
            },
        );

        Ok(Contribution {
            accepted,
            refunded,
            units,
        })
    }

    pub fn individual_headroom(env: &Env, participant: &Address) -> Result<i128, Error> {
        let pricing = Storage::get_pricing(env)?;
        Ok(pricing.individual_cap - Storage::get_invested(env, participant))
    }

    pub fn global_headroom(env: &Env) -> Result<i128, Error> {
        let pricing = Storage::get_pricing(env)?;
        Ok(pricing.global_cap - Storage::get_total_raised(env))
    }
}
