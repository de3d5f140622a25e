use serde::{Deserialize, Serialize};

use crate::{error::Error, registry::Member};

/// A single decoded parameter, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedParameter {
    /// The declared parameter name. May be empty.
    pub name: String,
    /// The canonical type, e.g. `uint256` or `(address,bytes)`.
    #[serde(rename = "type")]
    pub ty: String,
    /// The formatted value.
    pub value: String,
    /// Whether the value was read from an event topic.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub indexed: bool,
}

impl DecodedParameter {
    /// Creates a new decoded parameter.
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        value: impl Into<String>,
        indexed: bool,
    ) -> Self {
        Self { name: name.into(), ty: ty.into(), value: value.into(), indexed }
    }
}

/// The result of decoding one transaction or log.
///
/// Either `parameters` or `error` is populated, never both. When a member was matched but its
/// parameters failed to decode, the name and signature are still reported next to the error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRecord {
    /// The name of the descriptor the member was found in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    /// The method or event name, empty when nothing was matched.
    #[serde(default)]
    pub method_name: String,
    /// The canonical signature, empty when nothing was matched.
    #[serde(default)]
    pub method_signature: String,
    /// The decoded parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<DecodedParameter>,
    /// The failure, if resolution or decoding failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodedRecord {
    /// A record for input that could not be matched to any member.
    pub fn failed(error: &Error) -> Self {
        Self { error: Some(error.to_string()), ..Default::default() }
    }

    /// A record for a matched member whose parameters failed to decode.
    pub fn identified(contract: &str, member: &Member<'_>, error: &Error) -> Self {
        Self {
            contract: Some(contract.to_string()),
            method_name: member.name().to_string(),
            method_signature: member.signature(),
            parameters: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// A fully decoded record.
    pub fn decoded(
        contract: &str,
        member: &Member<'_>,
        parameters: Vec<DecodedParameter>,
    ) -> Self {
        Self {
            contract: Some(contract.to_string()),
            method_name: member.name().to_string(),
            method_signature: member.signature(),
            parameters,
            error: None,
        }
    }

    /// Whether decoding succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Renders the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Eyre(e.into()))
    }
}
