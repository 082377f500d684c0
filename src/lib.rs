//! Deployment fee contracts for configurable tokens
//!
//! - fees: fee schedule, feature set and the pure fee calculator
//! - deployer: TokenDeployer contract collecting fees on deployment
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

pub mod deployer;
pub mod errors;
pub mod events;
pub mod fees;
