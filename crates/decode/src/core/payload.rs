use std::collections::BTreeMap;

use alloy::primitives::B256;
use alloy_dyn_abi::{DynSolType, DynSolValue, Specifier};
use alloy_json_abi::{Event, Function};
use lexeth_common::utils::hex::ToLowerHex;

use crate::{error::Error, utils::RawValue};

/// Decoded event fields, keyed by the parameter's position in the event declaration.
pub type EventFields = BTreeMap<usize, RawValue>;

/// Decodes the ABI-encoded arguments following a method's selector.
///
/// On success, returns exactly one value per declared input, in declaration order.
pub fn decode_method_inputs(function: &Function, data: &[u8]) -> Result<Vec<DynSolValue>, Error> {
    let types = resolve_types(&function.inputs)?;
    decode_params(types, data).map_err(|e| Error::DecodeError(format!("inputs: {e}")))
}

/// Decodes an event's fields from its topics and data.
///
/// Non-indexed parameters are decoded from `data` as a single tuple; any failure there aborts the
/// whole decode. Indexed parameters take the raw topics from `topics[1..]` in declaration order.
/// Indexed parameters without a matching topic are left out of the result.
pub fn decode_event_fields(
    event: &Event,
    topics: &[B256],
    data: &[u8],
) -> Result<EventFields, Error> {
    let (indexed, body): (Vec<_>, Vec<_>) =
        event.inputs.iter().enumerate().partition(|(_, param)| param.indexed);
    let mut fields = EventFields::new();

    if !body.is_empty() && !data.is_empty() {
        let types = resolve_types(body.iter().map(|(_, param)| *param))?;
        let values = decode_params(types, data)
            .map_err(|e| Error::DecodeError(format!("event data: {e}")))?;

        fields.extend(body.iter().map(|(i, _)| *i).zip(values.into_iter().map(RawValue::from)));
    }

    // indexed values are stored as the raw topic word, never ABI-decoded
    fields.extend(
        indexed
            .iter()
            .map(|(i, _)| *i)
            .zip(topics.iter().skip(1).map(|topic| RawValue::Text(topic.to_lower_hex()))),
    );

    Ok(fields)
}

fn resolve_types<'p, P>(params: impl IntoIterator<Item = &'p P>) -> Result<Vec<DynSolType>, Error>
where
    P: Specifier<DynSolType> + 'p,
{
    params
        .into_iter()
        .map(|param| {
            param.resolve().map_err(|e| Error::DecodeError(format!("parameter type: {e}")))
        })
        .collect()
}

fn decode_params(types: Vec<DynSolType>, data: &[u8]) -> alloy_dyn_abi::Result<Vec<DynSolValue>> {
    match DynSolType::Tuple(types).abi_decode_params(data)? {
        DynSolValue::Tuple(values) => Ok(values),
        value => Ok(vec![value]),
    }
}
