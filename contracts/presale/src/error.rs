use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the current admin
    Unauthorized = 10,

    // ============================================
    // PARAMETER ERRORS (20-29)
    // ============================================
    /// Identity is the sale contract itself, or equals the value it replaces
    InvalidAddress = 20,
    /// Exchange rate is not positive or yields empty caps
    InvalidPrice = 21,

    // ============================================
    // LIFECYCLE ERRORS (30-39)
    // ============================================
    /// Operation only allowed while configuring
    SaleAlreadyOpen = 30,
    /// Sale has not been opened yet
    SaleNotOpen = 31,
    /// `close` called on a closed sale
    SaleAlreadyClosed = 32,
    /// Contribution sent to a closed sale
    SaleClosed = 33,
    /// Sweep requested before the sale was closed
    SaleNotClosed = 34,

    // ============================================
    // WHITELIST ERRORS (40-49)
    // ============================================
    /// Participant is already whitelisted
    AlreadyWhitelisted = 40,
    /// Participant is not whitelisted
    NotWhitelisted = 41,

    // ============================================
    // CONTRIBUTION ERRORS (50-59)
    // ============================================
    /// Participant has no headroom left under the individual cap
    IndividualCapReached = 50,
    /// Sale has no headroom left under the global cap
    GlobalCapReached = 51,
    /// Amount must be positive and must not overflow
    InvalidAmount = 52,
    /// Sale contract holds fewer sale units than the contribution buys
    InsufficientBalance = 53,
}
