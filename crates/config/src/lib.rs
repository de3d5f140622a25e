//! Configuration management for lexeth
//!
//! This crate provides functionality for managing the lexeth configuration: the list of
//! interface descriptor files that are loaded into the decoder registry at startup.

/// Error types for the configuration module
pub mod error;

use std::path::{Path, PathBuf};

use crate::error::Error;
use clap::Parser;
use lexeth_common::utils::io::file::{delete_path, read_file, write_file};
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use tracing::{debug, error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "lexeth config [NAME] [PATH] [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The human name of the contract descriptor to register.
    #[clap(required = false, default_value = "")]
    name: String,

    /// The path to the descriptor (ABI JSON) file.
    #[clap(required = false, default_value = "")]
    path: String,

    /// Remove the descriptor registered under this name.
    #[clap(long, short, default_value = None, hide_default_value = true)]
    remove: Option<String>,
}

/// A single interface descriptor source: a human name and the file holding its ABI JSON.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    /// The human name the descriptor is registered under. For example, `Token`.
    pub name: String,

    /// Path to the ABI JSON file.
    pub path: PathBuf,
}

impl ContractConfig {
    /// Creates a new [`ContractConfig`].
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// The [`Configuration`] struct represents the configuration of the CLI. The contract list is
/// consumed in order: the decoder registry is built in exactly this order.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The interface descriptors to load, in load order.
    #[serde(default)]
    pub contracts: Vec<ContractConfig>,
}

#[allow(deprecated)]
fn default_path() -> Result<PathBuf, Error> {
    let mut home = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(".lexeth");
    home.push("config.toml");
    Ok(home)
}

impl Configuration {
    /// Returns the configuration stored at `$HOME/.lexeth/config.toml`, creating it with default
    /// values if it doesn't exist.
    pub fn load() -> Result<Self, Error> {
        let path = default_path()?;

        // if the config file doesn't exist, create it
        if !path.exists() {
            Configuration::default().save_to(&path)?;
        }

        Self::load_from(&path)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let contents = read_file(path).map_err(|e| {
            Error::Generic(format!("failed to read config file {}: {e}", path.display()))
        })?;

        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        debug!(
            "loaded configuration from {} with {} contract(s)",
            path.display(),
            config.contracts.len()
        );
        Ok(config)
    }

    /// Saves the current configuration to `$HOME/.lexeth/config.toml`.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&default_path()?)
    }

    /// Saves the current configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        write_file(
            path,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.lexeth/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let path = default_path()?;
        if !delete_path(&path) {
            return Err(Error::Generic(format!("failed to delete {}", path.display())));
        }

        Ok(())
    }

    /// Registers a descriptor source. A source with the same name is replaced in place, so load
    /// order is preserved.
    pub fn add_contract(&mut self, name: &str, path: &str) -> Result<(), Error> {
        if name.is_empty() || path.is_empty() {
            return Err(Error::Generic("a contract needs both a name and a path".to_string()));
        }

        let contract = ContractConfig::new(name, path);
        match self.contracts.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = contract,
            None => self.contracts.push(contract),
        }

        Ok(())
    }

    /// Removes the descriptor source registered under `name`.
    pub fn remove_contract(&mut self, name: &str) -> Result<(), Error> {
        let before = self.contracts.len();
        self.contracts.retain(|c| c.name != name);
        if self.contracts.len() == before {
            return Err(Error::Generic(format!(
                "invalid name: \'{name}\' is not a registered contract."
            )));
        }

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if let Some(name) = args.remove {
        let mut config = Configuration::load()?;
        config.remove_contract(&name)?;
        config.save()?;
        info!("removed contract \'{}\' from the configuration.", name);
    } else if !args.name.is_empty() {
        if !args.path.is_empty() {
            let mut config = Configuration::load()?;
            config.add_contract(&args.name, &args.path)?;
            config.save()?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.name, &args.path);
        } else {
            // name is set, but no path is set
            error!("found name but no path to set. Please specify a descriptor path, use `lexeth config --help` for more information.");
        }
    } else {
        // no name is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `lexeth config <NAME> <PATH>` to register a contract descriptor.");
    }

    Ok(())
}

#[allow(deprecated)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lexeth-config-{}-{}", std::process::id(), name))
            .join("config.toml")
    }

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert!(config.contracts.is_empty());
    }

    #[test]
    fn test_save_and_load_from_path() {
        let path = scratch("roundtrip");
        let mut config = Configuration::default();
        config.add_contract("Token", "abi/token.json").expect("failed to add contract");
        config.add_contract("Vault", "abi/vault.json").expect("failed to add contract");
        config.save_to(&path).expect("failed to save config file");

        let loaded = Configuration::load_from(&path).expect("failed to load config file");
        assert_eq!(loaded, config);
        assert_eq!(loaded.contracts[0].name, "Token");
        assert_eq!(loaded.contracts[1].path, PathBuf::from("abi/vault.json"));

        delete_path(path.parent().expect("has parent"));
    }

    #[test]
    fn test_parse_toml_contract_list() {
        let config: Configuration = toml::from_str(
            r#"
            [[contracts]]
            name = "Token"
            path = "conf/abi/token.json"

            [[contracts]]
            name = "Market"
            path = "conf/abi/market.json"
            "#,
        )
        .expect("failed to parse config");

        assert_eq!(
            config.contracts,
            vec![
                ContractConfig::new("Token", "conf/abi/token.json"),
                ContractConfig::new("Market", "conf/abi/market.json"),
            ]
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Configuration = toml::from_str("").expect("failed to parse config");
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = scratch("malformed");
        write_file(&path, "contracts = 12").expect("failed to write file");

        let result = Configuration::load_from(&path);
        assert!(matches!(result, Err(Error::ParseError(_))));

        delete_path(path.parent().expect("has parent"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Configuration::load_from(Path::new("/nonexistent/lexeth/config.toml"));
        assert!(matches!(result, Err(Error::Generic(_))));
    }

    #[test]
    fn test_add_contract_replaces_in_place() {
        let mut config = Configuration::default();
        config.add_contract("A", "a.json").expect("failed to add contract");
        config.add_contract("B", "b.json").expect("failed to add contract");
        config.add_contract("A", "a2.json").expect("failed to add contract");

        assert_eq!(config.contracts.len(), 2);
        assert_eq!(config.contracts[0], ContractConfig::new("A", "a2.json"));
        assert_eq!(config.contracts[1].name, "B");
    }

    #[test]
    fn test_add_contract_requires_name_and_path() {
        let mut config = Configuration::default();
        assert!(config.add_contract("", "a.json").is_err());
        assert!(config.add_contract("A", "").is_err());
    }

    #[test]
    fn test_remove_contract() {
        let mut config = Configuration::default();
        config.add_contract("A", "a.json").expect("failed to add contract");

        config.remove_contract("A").expect("failed to remove contract");
        assert!(config.contracts.is_empty());
        assert!(config.remove_contract("A").is_err());
    }

    // Test loading the default configuration file
    #[test]
    #[serial]
    fn test_load_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert!(config.contracts.is_empty());
    }

    // Test saving the default configuration file
    #[test]
    #[serial]
    fn test_save_configuration() {
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::default();
        config.add_contract("Token", "token.json").expect("failed to add contract");
        config.save().expect("failed to save config file");

        let loaded_config = Configuration::load().expect("failed to load config file");
        assert_eq!(loaded_config.contracts, vec![ContractConfig::new("Token", "token.json")]);

        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");
        assert!(config.contracts.is_empty());
    }
}
