//! The Core module ties lexeth's crates together: it re-exports the decoder and configuration
//! crates and assembles the descriptor registry a decode run works against.

/// Error types for the core module
pub mod error;

use lexeth_config::{Configuration, ContractConfig};
use lexeth_decoder::{load_descriptors, DecodeArgs, Registry};
use tracing::debug;

use crate::error::Error;

// Re-export all tool-specific modules
pub use lexeth_common;
pub use lexeth_config;
pub use lexeth_decoder;

/// Collects the descriptor sources for a decode run: the configured contracts first, followed by
/// the `--abi` sources in the order given.
///
/// The configuration is read from `--config` when set, otherwise from the default location.
pub fn descriptor_sources(args: &DecodeArgs) -> Result<Vec<ContractConfig>, Error> {
    let configuration = match &args.config {
        Some(path) => Configuration::load_from(path)?,
        None => Configuration::load()?,
    };

    Ok(configuration.contracts.into_iter().chain(args.descriptor_sources()).collect())
}

/// Builds the registry a decode run works against. Any unreadable or malformed descriptor fails
/// the whole build.
pub fn build_registry(args: &DecodeArgs) -> Result<Registry, Error> {
    let sources = descriptor_sources(args)?;
    debug!("building registry from {} descriptor source(s)", sources.len());

    Ok(load_descriptors(&sources)?)
}
