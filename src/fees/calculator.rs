//! Deployment fee calculation and payment validation
//!
//! `fee = base_fee + feature_fee * enabled_features`. Nothing else feeds
//! into the amount. All arithmetic is integer (motes) and saturates at
//! `U512::MAX`.

use core::fmt;

use odra::casper_types::U512;
use odra::prelude::*;

use super::features::FeatureSet;
use super::schedule::FeeSchedule;

/// Attached value is below the required fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientFee {
    pub required: U512,
    pub attached: U512,
}

impl InsufficientFee {
    /// Amount missing from the attached value
    pub fn shortfall(&self) -> U512 {
        self.required - self.attached
    }
}

impl fmt::Display for InsufficientFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Insufficient deployment fee: required {} motes, attached {} motes",
            self.required, self.attached
        )
    }
}

/// An accepted payment split into the fee and whatever was sent on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub fee: U512,
    pub excess: U512,
}

/// Checks an attached value against the required fee.
///
/// Paying more than required is accepted; the surplus is reported as
/// `excess` and left to the caller.
pub fn validate_payment(attached: U512, required: U512) -> Result<Payment, InsufficientFee> {
    if attached < required {
        return Err(InsufficientFee { required, attached });
    }
    Ok(Payment {
        fee: required,
        excess: attached - required,
    })
}

/// Receives collected fees
pub trait FeeSink {
    fn disburse(&mut self, amount: U512, destination: Address);
}

/// Stateless fee calculator over a fixed schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeCalculator {
    schedule: FeeSchedule,
}

impl FeeCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee for deploying a token with the given features
    pub fn deployment_fee(&self, features: FeatureSet) -> U512 {
        let surcharge = self
            .schedule
            .feature_fee
            .saturating_mul(U512::from(features.count()));
        self.schedule.base_fee.saturating_add(surcharge)
    }

    /// Positional form of [`FeeCalculator::deployment_fee`]
    pub fn calculate_deployment_fee(
        &self,
        mintable: bool,
        pausable: bool,
        limits_enabled: bool,
    ) -> U512 {
        self.deployment_fee(FeatureSet::from_flags(mintable, pausable, limits_enabled))
    }

    /// Validates `attached` against the fee for `features` and sends the
    /// fee to the schedule's wallet. The excess is returned, not disbursed.
    pub fn collect<S: FeeSink + ?Sized>(
        &self,
        sink: &mut S,
        features: FeatureSet,
        attached: U512,
    ) -> Result<Payment, InsufficientFee> {
        let payment = validate_payment(attached, self.deployment_fee(features))?;
        if !payment.fee.is_zero() {
            sink.disburse(payment.fee, self.schedule.fee_wallet);
        }
        Ok(payment)
    }
}
