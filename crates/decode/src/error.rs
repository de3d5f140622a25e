use std::path::PathBuf;

/// Errors produced while loading descriptors or decoding call data and logs.
///
/// Resolution and decoding failures are never propagated out of
/// [`Registry::decode_transaction`](crate::Registry::decode_transaction) or
/// [`Registry::decode_log`](crate::Registry::decode_log); they are embedded in the returned
/// [`DecodedRecord`](crate::DecodedRecord). Descriptor failures are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Call data is shorter than a 4-byte selector.
    #[error("transaction data too short: {0} byte(s), expected at least 4")]
    PayloadTooShort(usize),
    /// A log without any topics cannot be resolved.
    #[error("no topics in log")]
    NoTopics,
    /// No loaded descriptor contains the selector or topic hash.
    #[error("{0} not found in any loaded contract ABI")]
    MemberNotFound(String),
    /// The matched member's parameters could not be decoded.
    #[error("failed to decode {0}")]
    DecodeError(String),
    /// A descriptor file could not be read.
    #[error("failed to read ABI file {}: {cause}", path.display())]
    DescriptorRead {
        /// The descriptor path.
        path: PathBuf,
        /// The underlying I/O failure.
        cause: eyre::Report,
    },
    /// A descriptor could not be parsed as contract ABI JSON.
    #[error("failed to parse ABI for contract {name}: {source}")]
    DescriptorParse {
        /// The human name of the descriptor.
        name: String,
        /// The underlying JSON failure.
        source: serde_json::Error,
    },
    /// A descriptor parsed as JSON but declares a parameter type that cannot be decoded.
    #[error("invalid ABI for contract {name}: {reason}")]
    DescriptorInvalid {
        /// The human name of the descriptor.
        name: String,
        /// The offending member and type.
        reason: String,
    },
    /// Internal error, e.g. malformed hex input.
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
