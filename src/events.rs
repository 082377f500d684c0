//! Events emitted by the token deployer

use odra::casper_types::U512;
use odra::prelude::*;

/// A token configuration was accepted and its fee paid
#[odra::event]
pub struct TokenDeployed {
    pub id: u64,
    pub creator: Address,
    pub name: String,
    pub symbol: String,
    /// Encoded `FeatureSet`
    pub features: u8,
}

/// A deployment fee was forwarded to the fee wallet
#[odra::event]
pub struct FeeCollected {
    pub id: u64,
    pub payer: Address,
    pub fee_wallet: Address,
    pub fee: U512,
    /// Refunded to the payer
    pub excess: U512,
}
