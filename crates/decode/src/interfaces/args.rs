use std::path::{Path, PathBuf};

use clap::Parser;
use derive_builder::Builder;
use lexeth_config::ContractConfig;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Decodes raw call data or an event log against the loaded contract ABIs",
    override_usage = "lexeth decode <TARGET> [OPTIONS]"
)]
/// Arguments for the decode operation
///
/// The target is hex-encoded call data, or the data of an event log when `--log` or any
/// `--topic` is given.
pub struct DecodeArgs {
    /// The hex-encoded call data or log data to decode. `0x` is optional.
    #[clap(required = true)]
    pub target: String,

    /// A hex-encoded 32-byte log topic. Repeat in log order, starting with the event's topic hash.
    #[clap(long = "topic", short = 't')]
    pub topics: Vec<String>,

    /// Treat the target as event log data, even without topics.
    #[clap(long)]
    pub log: bool,

    /// An additional contract ABI, as `NAME=PATH` or `PATH`. Searched after the configured
    /// contracts, in the order given.
    #[clap(long = "abi", short = 'a')]
    pub abis: Vec<String>,

    /// Path to a configuration file to read contracts from, instead of the default.
    #[clap(long, short)]
    pub config: Option<PathBuf>,
}

impl DecodeArgs {
    /// Whether the target is an event log rather than call data.
    pub fn is_log(&self) -> bool {
        self.log || !self.topics.is_empty()
    }

    /// The descriptor sources given with `--abi`.
    ///
    /// A bare path is named after its file stem.
    pub fn descriptor_sources(&self) -> Vec<ContractConfig> {
        self.abis
            .iter()
            .map(|source| match source.split_once('=') {
                Some((name, path)) if !name.is_empty() => ContractConfig::new(name, path),
                _ => {
                    let path = Path::new(source);
                    let name = path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_else(|| source.clone());
                    ContractConfig::new(name, path)
                }
            })
            .collect()
    }
}

impl DecodeArgsBuilder {
    /// Creates a new DecodeArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            topics: Some(Vec::new()),
            log: Some(false),
            abis: Some(Vec::new()),
            config: Some(None),
        }
    }
}
