use advanced_token_contracts::deployer::{TokenDeployer, TokenDeployerInitArgs};
use advanced_token_contracts::fees::{
    Feature, FeatureSet, DEFAULT_BASE_FEE_MOTES, DEFAULT_FEATURE_FEE_MOTES, MOTES_PER_CSPR,
};
use odra::casper_types::{U256, U512};
use odra::host::HostEnv;
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::str::FromStr;

const ENV_OUT_FILE: &str = "scripts/deploy.out.env";

/// Fee schedule read from the environment
pub struct FeeConfig {
    base_fee: U512,
    feature_fee: U512,
    /// Falls back to the deployer account when unset
    fee_wallet: Option<Address>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAmount { var: &'static str, value: String },
    InvalidAddress { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAmount { var, value } => {
                write!(f, "{} must be an amount in motes, got {:?}", var, value)
            }
            ConfigError::InvalidAddress { var, value } => {
                write!(f, "{} must be a formatted Casper address, got {:?}", var, value)
            }
        }
    }
}

impl FeeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_fee = read_motes("BASE_DEPLOYMENT_FEE", DEFAULT_BASE_FEE_MOTES)?;
        let feature_fee = read_motes("FEATURE_FEE", DEFAULT_FEATURE_FEE_MOTES)?;
        let fee_wallet = match std::env::var("FEE_WALLET") {
            Ok(value) => Some(Address::from_str(&value).map_err(|_| {
                ConfigError::InvalidAddress {
                    var: "FEE_WALLET",
                    value,
                }
            })?),
            Err(_) => None,
        };
        Ok(Self {
            base_fee,
            feature_fee,
            fee_wallet,
        })
    }
}

fn read_motes(var: &'static str, default: u64) -> Result<U512, ConfigError> {
    match std::env::var(var) {
        Ok(value) => U512::from_dec_str(&value)
            .map_err(|_| ConfigError::InvalidAmount { var, value }),
        Err(_) => Ok(U512::from(default)),
    }
}

/// Formats motes as CSPR, e.g. `160000000` -> `0.16`
fn format_cspr(motes: U512) -> String {
    let per_cspr = U512::from(MOTES_PER_CSPR);
    let whole = motes / per_cspr;
    let frac = (motes % per_cspr).as_u64();
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:09}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

fn describe_features(features: FeatureSet) -> String {
    if features.is_empty() {
        return String::from("none");
    }
    features.iter().map(Feature::name).collect::<Vec<_>>().join(", ")
}

/// Deploys the TokenDeployer with the fee schedule from the environment
pub struct DeployTokenDeployerScript {
    config: FeeConfig,
}

impl DeployScript for DeployTokenDeployerScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        let fee_wallet = self.config.fee_wallet.unwrap_or_else(|| env.caller());
        println!("Deploying contracts with the account: {:?}", env.caller());

        println!("==> Deploying TokenDeployer");
        let deployer = TokenDeployer::load_or_deploy(
            &env,
            TokenDeployerInitArgs {
                base_fee: self.config.base_fee,
                feature_fee: self.config.feature_fee,
                fee_wallet,
            },
            container,
            400_000_000_000
        )?;
        println!("TokenDeployer deployed at: {:?}", deployer.address());
        println!("Base fee: {} CSPR", format_cspr(self.config.base_fee));
        println!("Feature fee: {} CSPR", format_cspr(self.config.feature_fee));
        println!("Fee wallet: {:?}", fee_wallet);

        if let Err(err) = generate_env_file(container, &fee_wallet) {
            eprintln!("Could not write {}: {}", ENV_OUT_FILE, err);
        }

        Ok(())
    }
}

/// Scenario printing the fee for a feature combination.
pub struct QuoteFeeScenario;

impl Scenario for QuoteFeeScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("mintable", "Token supports minting", NamedCLType::Bool),
            CommandArg::new("pausable", "Token transfers can be paused", NamedCLType::Bool),
            CommandArg::new(
                "limits_enabled",
                "Wallet and transaction caps are enforced",
                NamedCLType::Bool,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let deployer = container.contract_ref::<TokenDeployer>(env)?;
        let mintable = args.get_single::<bool>("mintable")?;
        let pausable = args.get_single::<bool>("pausable")?;
        let limits_enabled = args.get_single::<bool>("limits_enabled")?;

        let fee = deployer.calculate_deployment_fee(mintable, pausable, limits_enabled);
        println!(
            "Enabled features: {}",
            describe_features(FeatureSet::from_flags(mintable, pausable, limits_enabled))
        );
        println!("Required deployment fee: {} CSPR", format_cspr(fee));
        Ok(())
    }
}

impl ScenarioMetadata for QuoteFeeScenario {
    const NAME: &'static str = "quote-fee";
    const DESCRIPTION: &'static str = "Prints the deployment fee for a feature combination";
}

/// Scenario paying the fee and registering a token configuration.
pub struct DeployTokenScenario;

impl Scenario for DeployTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("name", "Token name", NamedCLType::String),
            CommandArg::new("symbol", "Token symbol", NamedCLType::String),
            CommandArg::new("decimals", "Token decimals", NamedCLType::U8),
            CommandArg::new("initial_supply", "Initial supply", NamedCLType::U256),
            CommandArg::new("max_supply", "Maximum supply", NamedCLType::U256),
            CommandArg::new("mintable", "Token supports minting", NamedCLType::Bool),
            CommandArg::new("pausable", "Token transfers can be paused", NamedCLType::Bool),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let deployer = container.contract_ref::<TokenDeployer>(env)?;
        let name = args.get_single::<String>("name")?;
        let symbol = args.get_single::<String>("symbol")?;
        let decimals = args.get_single::<u8>("decimals")?;
        let initial_supply = args.get_single::<U256>("initial_supply")?;
        let max_supply = args.get_single::<U256>("max_supply")?;
        let mintable = args.get_single::<bool>("mintable")?;
        let pausable = args.get_single::<bool>("pausable")?;

        // Limits are always enabled on deployment
        let fee = deployer.calculate_deployment_fee(mintable, pausable, true);
        println!("Required deployment fee: {} CSPR", format_cspr(fee));

        env.set_gas(50_000_000_000);
        let id = deployer.with_tokens(fee).try_deploy_token(
            name,
            symbol,
            decimals,
            initial_supply,
            max_supply,
            mintable,
            pausable,
        )?;

        println!("Token registered with id: {}", id);
        println!("Total deployment fee sent: {} CSPR", format_cspr(fee));
        println!("Fee sent to: {:?}", deployer.fee_wallet());
        Ok(())
    }
}

impl ScenarioMetadata for DeployTokenScenario {
    const NAME: &'static str = "deploy-token";
    const DESCRIPTION: &'static str = "Pays the deployment fee and registers a token";
}

fn generate_env_file(container: &DeployedContractsContainer, fee_wallet: &Address) -> io::Result<()> {
    println!("==> Generating {}", ENV_OUT_FILE);
    let chain_name = std::env::var("ODRA_CASPER_LIVENET_CHAIN_NAME")
        .or_else(|_| std::env::var("CHAIN_NAME"))
        .unwrap_or_else(|_| "casper-test".to_string());

    let mut file = File::create(ENV_OUT_FILE)?;
    writeln!(file, "CHAIN_NAME={}", chain_name)?;
    writeln!(file, "FEE_WALLET={}", fee_wallet)?;

    if let Some(address) = container.address_by_name("TokenDeployer") {
        // format: Contract(ContractPackageHash(hex))
        let hex_part = address
            .to_string()
            .replace("Contract(ContractPackageHash(", "")
            .replace("))", "");
        writeln!(file, "TOKEN_DEPLOYER_PACKAGE_HASH=hash-{}", hex_part)?;
    }
    Ok(())
}

pub fn main() {
    let config = match FeeConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    OdraCli::new()
        .about("CLI tool for the token deployer contract")
        // Deploy scripts
        .deploy(DeployTokenDeployerScript { config })
        // Contract references
        .contract::<TokenDeployer>()
        // Scenarios
        .scenario(QuoteFeeScenario)
        .scenario(DeployTokenScenario)
        .build()
        .run();
}
