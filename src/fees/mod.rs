//! Deployment fee policy
//!
//! This module provides:
//! - Feature / FeatureSet: the optional token features that are charged for
//! - FeeSchedule: base fee, per-feature fee and the receiving wallet
//! - FeeCalculator: pure fee computation and payment collection

pub mod calculator;
pub mod features;
pub mod schedule;

pub use calculator::*;
pub use features::*;
pub use schedule::*;
