//! TokenDeployer - Charges the deployment fee for new token configurations
//!
//! The fee schedule is fixed at `init`. Each `deploy_token` call must attach
//! at least the fee for the requested features; the fee goes to the fee
//! wallet and anything sent on top is refunded to the caller.

use odra::casper_types::{U256, U512};
use odra::prelude::*;

use crate::errors::DeployerError;
use crate::events::{FeeCollected, TokenDeployed};
use crate::fees::{Feature, FeatureSet, FeeCalculator, FeeSchedule, FeeSink};

/// Longest accepted token symbol
pub const MAX_SYMBOL_LEN: usize = 11;

/// Highest accepted number of token decimals
pub const MAX_DECIMALS: u8 = 18;

/// TokenDeployer contract collecting deployment fees
#[odra::module(events = [TokenDeployed, FeeCollected], errors = DeployerError)]
pub struct TokenDeployer {
    /// Fee charged for every deployment (motes)
    base_fee: Var<U512>,
    /// Fee charged per enabled feature (motes)
    feature_fee: Var<U512>,
    /// Receives every collected fee
    fee_wallet: Var<Address>,
    /// Number of accepted deployments
    deployment_count: Var<u64>,
    /// Sum of all fees forwarded to the fee wallet
    total_fees_collected: Var<U512>,
    /// Mapping: deployment_id -> token name
    token_names: Mapping<u64, String>,
    /// Mapping: deployment_id -> token symbol
    token_symbols: Mapping<u64, String>,
    /// Mapping: deployment_id -> creator
    token_creators: Mapping<u64, Address>,
    /// Mapping: deployment_id -> encoded FeatureSet
    token_features: Mapping<u64, u8>,
    /// Mapping: deployment_id -> fee paid
    fees_paid: Mapping<u64, U512>,
    /// Mapping: deployment_id -> block time
    deployed_at: Mapping<u64, u64>,
}

#[odra::module]
impl TokenDeployer {
    /// Initialize the deployer with its fee schedule
    pub fn init(&mut self, base_fee: U512, feature_fee: U512, fee_wallet: Address) {
        self.base_fee.set(base_fee);
        self.feature_fee.set(feature_fee);
        self.fee_wallet.set(fee_wallet);
        self.deployment_count.set(0);
        self.total_fees_collected.set(U512::zero());
    }

    // ============ View Functions ============

    pub fn base_fee(&self) -> U512 {
        self.base_fee.get_or_default()
    }

    pub fn feature_fee(&self) -> U512 {
        self.feature_fee.get_or_default()
    }

    pub fn fee_wallet(&self) -> Address {
        self.fee_wallet.get_or_revert_with(DeployerError::FeeWalletNotSet)
    }

    /// Fee required to deploy a token with the given features
    pub fn calculate_deployment_fee(
        &self,
        mintable: bool,
        pausable: bool,
        limits_enabled: bool,
    ) -> U512 {
        self.calculator()
            .calculate_deployment_fee(mintable, pausable, limits_enabled)
    }

    pub fn deployment_count(&self) -> u64 {
        self.deployment_count.get_or_default()
    }

    pub fn total_fees_collected(&self) -> U512 {
        self.total_fees_collected.get_or_default()
    }

    pub fn get_token_name(&self, id: u64) -> Option<String> {
        self.token_names.get(&id)
    }

    pub fn get_token_symbol(&self, id: u64) -> Option<String> {
        self.token_symbols.get(&id)
    }

    pub fn get_token_creator(&self, id: u64) -> Option<Address> {
        self.token_creators.get(&id)
    }

    /// Encoded `FeatureSet` of a deployment
    pub fn get_token_features(&self, id: u64) -> Option<u8> {
        self.token_features.get(&id)
    }

    pub fn get_fee_paid(&self, id: u64) -> Option<U512> {
        self.fees_paid.get(&id)
    }

    pub fn get_deployed_at(&self, id: u64) -> Option<u64> {
        self.deployed_at.get(&id)
    }

    // ============ Write Functions ============

    /// Accept a token configuration and collect its deployment fee.
    ///
    /// Limits are always enabled on a freshly deployed token, so the fee
    /// always includes the limits surcharge.
    ///
    /// # Arguments
    /// * `name` - Token name, must not be empty
    /// * `symbol` - Token symbol (1 to 11 chars)
    /// * `decimals` - At most 18
    /// * `initial_supply` - Must not exceed `max_supply`
    /// * `max_supply` - Supply cap
    /// * `mintable` - Supply can grow after deployment
    /// * `pausable` - Transfers can be paused
    #[odra(payable)]
    pub fn deploy_token(
        &mut self,
        name: String,
        symbol: String,
        decimals: u8,
        initial_supply: U256,
        max_supply: U256,
        mintable: bool,
        pausable: bool,
    ) -> u64 {
        if name.is_empty() {
            self.env().revert(DeployerError::EmptyName);
        }
        if symbol.is_empty() || symbol.chars().count() > MAX_SYMBOL_LEN {
            self.env().revert(DeployerError::InvalidSymbol);
        }
        if decimals > MAX_DECIMALS {
            self.env().revert(DeployerError::InvalidDecimals);
        }
        if initial_supply > max_supply {
            self.env().revert(DeployerError::InvalidSupply);
        }

        let features = FeatureSet::from_flags(mintable, pausable, false)
            .with(Feature::LimitsEnabled);
        let attached = self.env().attached_value();
        let calculator = self.calculator();
        let payment = match calculator.collect(self, features, attached) {
            Ok(payment) => payment,
            Err(shortfall) => self.env().revert(DeployerError::from(shortfall)),
        };

        let caller = self.env().caller();
        if !payment.excess.is_zero() {
            self.transfer_to(caller, payment.excess);
        }

        let id = self.deployment_count.get_or_default();
        self.token_names.set(&id, name.clone());
        self.token_symbols.set(&id, symbol.clone());
        self.token_creators.set(&id, caller);
        self.token_features.set(&id, features.bits());
        self.fees_paid.set(&id, payment.fee);
        self.deployed_at.set(&id, self.env().get_block_time());
        self.deployment_count.set(id + 1);
        self.total_fees_collected
            .set(self.total_fees_collected.get_or_default() + payment.fee);

        self.env().emit_event(TokenDeployed {
            id,
            creator: caller,
            name,
            symbol,
            features: features.bits(),
        });
        self.env().emit_event(FeeCollected {
            id,
            payer: caller,
            fee_wallet: calculator.schedule().fee_wallet,
            fee: payment.fee,
            excess: payment.excess,
        });

        id
    }

    // ============ Internal Functions ============

    fn transfer_to(&mut self, to: Address, amount: U512) {
        self.env().transfer_tokens(&to, &amount);
    }

    fn calculator(&self) -> FeeCalculator {
        FeeCalculator::new(FeeSchedule::new(
            self.base_fee.get_or_default(),
            self.feature_fee.get_or_default(),
            self.fee_wallet(),
        ))
    }
}

impl FeeSink for TokenDeployer {
    fn disburse(&mut self, amount: U512, destination: Address) {
        self.transfer_to(destination, amount);
    }
}

/// External interface for TokenDeployer
#[odra::external_contract]
pub trait TokenDeployerContract {
    fn base_fee(&self) -> U512;
    fn feature_fee(&self) -> U512;
    fn fee_wallet(&self) -> Address;
    fn calculate_deployment_fee(&self, mintable: bool, pausable: bool, limits_enabled: bool) -> U512;
    fn deployment_count(&self) -> u64;
    fn total_fees_collected(&self) -> U512;
    fn get_token_name(&self, id: u64) -> Option<String>;
    fn get_token_symbol(&self, id: u64) -> Option<String>;
    fn get_token_creator(&self, id: u64) -> Option<Address>;
    fn get_token_features(&self, id: u64) -> Option<u8>;
    fn get_fee_paid(&self, id: u64) -> Option<U512>;
    fn get_deployed_at(&self, id: u64) -> Option<u64>;
    fn deploy_token(
        &mut self,
        name: String,
        symbol: String,
        decimals: u8,
        initial_supply: U256,
        max_supply: U256,
        mintable: bool,
        pausable: bool,
    ) -> u64;
}
