use crate::error::Error;
use crate::storage::Storage;
use crate::types::{SaleConfig, SaleState};
use soroban_sdk::{Address, Env, Vec};

pub struct Validator;

impl Validator {
    /// Authenticate `caller` and check it is the current admin
    pub fn require_admin(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
        let config = Storage::get_config(env)?;
        caller.require_auth();

        if caller != &config.admin {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    /// The sale contract itself stands in for the null identity
    pub fn require_valid_address(env: &Env, address: &Address) -> Result<(), Error> {
        if address == &env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    /// A replacement identity must be valid and differ from the current one
    pub fn require_new_address(env: &Env, current: &Address, new: &Address) -> Result<(), Error> {
        Self::require_valid_address(env, new)?;
        if current == new {
            return Err(Error::InvalidAddress);
        }
        Ok(())
    }

    pub fn require_configuring(state: SaleState) -> Result<(), Error> {
        if state != SaleState::Configuring {
            return Err(Error::SaleAlreadyOpen);
        }
        Ok(())
    }

    pub fn require_closed(state: SaleState) -> Result<(), Error> {
        if state != SaleState::Closed {
            return Err(Error::SaleNotClosed);
        }
        Ok(())
    }

    /// Contributions need an open sale
    pub fn require_accepting(state: SaleState) -> Result<(), Error> {
        match state {
            SaleState::Configuring => Err(Error::SaleNotOpen),
            SaleState::Open => Ok(()),
            SaleState::Closed => Err(Error::SaleClosed),
        }
    }

    /// Pre-validate a whole whitelist batch before any entry is written
    ///
    /// Each entry is checked against storage and against the entries before
    /// it in the batch, so a repeated address fails the same way it would if
    /// the batch were applied one entry at a time.
    pub fn validate_whitelist_batch(
        env: &Env,
        participants: &Vec<Address>,
        adding: bool,
    ) -> Result<(), Error> {
        for (index, participant) in participants.iter().enumerate() {
            Self::require_valid_address(env, &participant)?;

            let repeated = participants
                .iter()
                .take(index)
                .any(|earlier| earlier == participant);
            let listed = Storage::is_whitelisted(env, &participant);

            if adding && (listed || repeated) {
                return Err(Error::AlreadyWhitelisted);
            }
            if !adding && (!listed || repeated) {
                return Err(Error::NotWhitelisted);
            }
        }
        Ok(())
    }
}
