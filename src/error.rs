use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    InvalidParameter = 1,
    NotFound = 2,
    Unauthorized = 3,
    AlreadyFinalized = 4,
    DuplicateDeposit = 5,
    OutsideWindow = 6,
    TransferFailure = 7,
    AlreadyInitialized = 8,
    NotInitialized = 9,
}

impl VaultError {
    /// Human-readable reason, logged when an operation is rejected.
    pub fn message(&self) -> &'static str {
        match self {
            VaultError::InvalidParameter => "Invalid parameter",
            VaultError::NotFound => "Quest not found",
            VaultError::Unauthorized => "Caller is not the quest owner",
            VaultError::AlreadyFinalized => "Quest already withdrawn",
            VaultError::DuplicateDeposit => "Already deposited this month",
            VaultError::OutsideWindow => "Not in deposit window (Days 1-7)",
            VaultError::TransferFailure => "Token transfer failed",
            VaultError::AlreadyInitialized => "Contract already initialized",
            VaultError::NotInitialized => "Contract not initialized",
        }
    }
}
