//! Fee schedule a calculator is built with

use odra::casper_types::U512;
use odra::prelude::*;

/// Motes in one CSPR
pub const MOTES_PER_CSPR: u64 = 1_000_000_000;

/// Default base fee - 0.01 CSPR
pub const DEFAULT_BASE_FEE_MOTES: u64 = MOTES_PER_CSPR / 100;

/// Default surcharge per enabled feature - 0.05 CSPR
pub const DEFAULT_FEATURE_FEE_MOTES: u64 = MOTES_PER_CSPR / 20;

/// Deployment fee amounts and the wallet that receives them.
///
/// Built once per environment (mainnet, testnet, local tests) and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Charged for every deployment regardless of configuration
    pub base_fee: U512,
    /// Charged once per enabled feature
    pub feature_fee: U512,
    /// Destination of every collected fee
    pub fee_wallet: Address,
}

impl FeeSchedule {
    pub fn new(base_fee: U512, feature_fee: U512, fee_wallet: Address) -> Self {
        Self {
            base_fee,
            feature_fee,
            fee_wallet,
        }
    }

    /// Schedule with the default 0.01 CSPR base and 0.05 CSPR per feature
    pub fn with_default_fees(fee_wallet: Address) -> Self {
        Self::new(
            U512::from(DEFAULT_BASE_FEE_MOTES),
            U512::from(DEFAULT_FEATURE_FEE_MOTES),
            fee_wallet,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fees() {
        let wallet = odra_test::env().get_account(1);
        let schedule = FeeSchedule::with_default_fees(wallet);

        assert_eq!(schedule.base_fee, U512::from(10_000_000u64));
        assert_eq!(schedule.feature_fee, U512::from(50_000_000u64));
        assert_eq!(schedule.feature_fee, schedule.base_fee * U512::from(5u64));
        assert_eq!(schedule.fee_wallet, wallet);
    }
}
