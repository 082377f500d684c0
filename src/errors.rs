//! Error definitions for the token deployer contract

use odra::prelude::*;

use crate::fees::InsufficientFee;

/// Errors that can occur in the TokenDeployer contract
#[odra::odra_error]
pub enum DeployerError {
    /// Attached value is below the deployment fee
    InsufficientFee = 40_000,

    /// Token name is empty
    EmptyName = 40_001,

    /// Token symbol is empty or too long
    InvalidSymbol = 40_002,

    /// More than 18 decimals requested
    InvalidDecimals = 40_003,

    /// Initial supply exceeds the maximum supply
    InvalidSupply = 40_004,

    /// Fee wallet was never configured
    FeeWalletNotSet = 40_005,
}

impl From<InsufficientFee> for DeployerError {
    fn from(_: InsufficientFee) -> Self {
        DeployerError::InsufficientFee
    }
}
