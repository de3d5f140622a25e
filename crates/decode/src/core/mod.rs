pub(crate) mod payload;
pub(crate) mod resolve;

use alloy::primitives::B256;
use eyre::eyre;
use lexeth_common::utils::strings::decode_hex;
use tracing::debug;

use crate::{
    error::Error,
    interfaces::{DecodeArgs, DecodedParameter, DecodedRecord},
    registry::Registry,
    utils::{format, RawValue},
};
use payload::{decode_event_fields, decode_method_inputs};
use resolve::{resolve_event, resolve_method};

/// Decodes the hex input described by `args` against `registry`.
///
/// Only malformed input (bad hex, topics that are not 32 bytes) is returned as an error. Resolution
/// and decoding failures are embedded in the returned [`DecodedRecord`].
pub fn decode(args: DecodeArgs, registry: &Registry) -> Result<DecodedRecord, Error> {
    let data = decode_hex(&args.target)?;

    if !args.is_log() {
        debug!("decoding {} byte(s) of call data", data.len());
        return Ok(registry.decode_transaction(&data));
    }

    let topics = args
        .topics
        .iter()
        .map(|topic| {
            let bytes = decode_hex(topic)?;
            B256::try_from(bytes.as_slice())
                .map_err(|_| eyre!("topic '{}' is {} byte(s), expected 32", topic, bytes.len()))
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    debug!("decoding log with {} topic(s) and {} byte(s) of data", topics.len(), data.len());
    Ok(registry.decode_log(&topics, &data))
}

impl Registry {
    /// Decodes transaction call data: a 4-byte selector followed by the ABI-encoded arguments.
    ///
    /// Never fails; errors are reported in [`DecodedRecord::error`].
    pub fn decode_transaction(&self, data: &[u8]) -> DecodedRecord {
        let resolved = match resolve_method(self, data) {
            Ok(resolved) => resolved,
            Err(e) => return DecodedRecord::failed(&e),
        };
        let member = resolved.as_member();
        let contract = resolved.descriptor.name();

        // resolution guarantees at least 4 bytes
        match decode_method_inputs(resolved.member, &data[4..]) {
            Ok(values) => {
                let parameters = resolved
                    .member
                    .inputs
                    .iter()
                    .zip(values)
                    .map(|(param, value)| {
                        DecodedParameter::new(
                            &param.name,
                            param.selector_type(),
                            format(&RawValue::from(value)),
                            false,
                        )
                    })
                    .collect();
                DecodedRecord::decoded(contract, &member, parameters)
            }
            Err(e) => DecodedRecord::identified(contract, &member, &e),
        }
    }

    /// Decodes an event log from its topics and data.
    ///
    /// Indexed parameters without a matching topic are omitted. Never fails; errors are reported
    /// in [`DecodedRecord::error`].
    pub fn decode_log(&self, topics: &[B256], data: &[u8]) -> DecodedRecord {
        let resolved = match resolve_event(self, topics) {
            Ok(resolved) => resolved,
            Err(e) => return DecodedRecord::failed(&e),
        };
        let member = resolved.as_member();
        let contract = resolved.descriptor.name();

        let mut fields = match decode_event_fields(resolved.member, topics, data) {
            Ok(fields) => fields,
            Err(e) => return DecodedRecord::identified(contract, &member, &e),
        };

        let parameters = resolved
            .member
            .inputs
            .iter()
            .enumerate()
            .filter_map(|(i, param)| {
                fields.remove(&i).map(|value| {
                    DecodedParameter::new(
                        &param.name,
                        param.selector_type(),
                        format(&value),
                        param.indexed,
                    )
                })
            })
            .collect();

        DecodedRecord::decoded(contract, &member, parameters)
    }
}
