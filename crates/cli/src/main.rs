pub(crate) mod error;
pub(crate) mod log_args;

use std::io::Write;

use error::Error;
use log_args::LogArgs;
use tracing::{debug, warn};

use clap::{Parser, Subcommand};

use lexeth_core::{
    build_registry,
    lexeth_config::{config, ConfigArgs},
    lexeth_decoder::{decode, DecodeArgs},
};

#[derive(Debug, Parser)]
#[clap(name = "lexeth", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(
    about = "lexeth decodes EVM transaction call data and event logs against your contract ABIs."
)]
pub(crate) enum Subcommands {
    #[clap(name = "decode", about = "Decode call data or an event log into readable types")]
    Decode(DecodeArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    let _guard = args.logs.init_tracing();

    match args.sub {
        Subcommands::Decode(cmd) => {
            // descriptor failures are fatal, nothing is decoded against a partial registry
            let registry = build_registry(&cmd)
                .map_err(|e| Error::Generic(format!("failed to load contract ABIs: {}", e)))?;
            debug!("loaded {} contract ABI(s)", registry.len());

            let record = decode(cmd, &registry)
                .map_err(|e| Error::Generic(format!("failed to decode input: {}", e)))?;
            if let Some(error) = &record.error {
                warn!("{}", error);
            }

            let output = record
                .to_json()
                .map_err(|e| Error::Generic(format!("failed to serialize result: {}", e)))?;
            writeln!(std::io::stdout().lock(), "{}", output)?;
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexeth_tracing::{tracing_subscriber::filter::Directive, LogFormat};

    #[test]
    fn test_parse_decode_command() {
        let args = Arguments::try_parse_from([
            "lexeth",
            "decode",
            "0xa9059cbb",
            "--abi",
            "Token=./erc20.json",
            "--config",
            "./lexeth.toml",
        ])
        .expect("parses");

        match args.sub {
            Subcommands::Decode(cmd) => {
                assert_eq!(cmd.target, "0xa9059cbb");
                assert_eq!(cmd.abis, vec!["Token=./erc20.json"]);
                assert!(!cmd.is_log());
            }
            other => panic!("expected decode, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_log_flags() {
        let args = Arguments::try_parse_from([
            "lexeth",
            "decode",
            "0x",
            "--log",
            "--log.stdout.format",
            "json",
            "--log.file.directory",
            "/tmp/lexeth-logs",
            "-vvv",
        ])
        .expect("parses");

        assert_eq!(args.logs.log_stdout_format, LogFormat::Json);
        assert!(args.logs.log_file_directory.is_some());
        assert_eq!(
            args.logs.verbosity.directive().to_string(),
            Directive::from(tracing::Level::DEBUG).to_string()
        );
    }

    #[test]
    fn test_parse_file_and_color_flags() {
        let args = Arguments::try_parse_from([
            "lexeth",
            "config",
            "--log.file.directory",
            "/tmp/lexeth-logs",
            "--log.file.format",
            "log-fmt",
            "--log.file.filter",
            "lexeth_decoder=trace",
            "--color",
            "never",
        ])
        .expect("parses");

        assert_eq!(args.logs.log_file_format, LogFormat::LogFmt);
        assert_eq!(args.logs.log_file_filter, "lexeth_decoder=trace");
        assert_eq!(args.logs.color.to_string(), "never");

        let defaults = Arguments::try_parse_from(["lexeth", "config"]).expect("parses");
        assert!(defaults.logs.log_file_directory.is_none());
        assert_eq!(defaults.logs.color.to_string(), "always");
        assert_eq!(
            defaults.logs.verbosity.directive().to_string(),
            Directive::from(tracing::Level::WARN).to_string()
        );
    }

    #[test]
    fn test_quiet_silences_logs() {
        let args = Arguments::try_parse_from(["lexeth", "config", "-q"]).expect("parses");
        assert_eq!(
            args.logs.verbosity.directive().to_string(),
            tracing::level_filters::LevelFilter::OFF.to_string()
        );
    }
}
