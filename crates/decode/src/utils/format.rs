use std::fmt::{self, Display};

use alloy::primitives::Address;
use alloy_dyn_abi::DynSolValue;
use lexeth_common::utils::strings::encode_hex;

/// A decoded low-level value, classified by how it is displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An account or contract address.
    Address(Address),
    /// A byte sequence: `bytes`, `bytesN` or a function pointer.
    Bytes(Vec<u8>),
    /// Already textual: a `string`, or an indexed topic rendered as hex.
    Text(String),
    /// Any other value: integers, booleans, arrays and tuples.
    Other(DynSolValue),
}

impl From<DynSolValue> for RawValue {
    fn from(value: DynSolValue) -> Self {
        match value {
            DynSolValue::Address(address) => RawValue::Address(address),
            DynSolValue::Bytes(bytes) => RawValue::Bytes(bytes),
            DynSolValue::FixedBytes(word, size) => RawValue::Bytes(word[..size.min(32)].to_vec()),
            DynSolValue::Function(function) => RawValue::Bytes(function.to_vec()),
            DynSolValue::String(text) => RawValue::Text(text),
            other => RawValue::Other(other),
        }
    }
}

impl Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

/// Renders a decoded value into its display form.
///
/// - addresses are EIP-55 checksummed, `0x`-prefixed
/// - byte sequences are bare lowercase hex, without a `0x` prefix
/// - text passes through unchanged
/// - everything else uses a generic rendering: decimal integers, `true`/`false`, `[a, b]` for
///   arrays and `(a, b)` for tuples, with elements rendered by these same rules
///
/// ```
/// use alloy::primitives::U256;
/// use alloy_dyn_abi::DynSolValue;
/// use lexeth_decoder::{format, RawValue};
///
/// assert_eq!(format(&RawValue::Bytes(vec![0xca, 0xfe])), "cafe");
/// assert_eq!(format(&DynSolValue::Uint(U256::from(1000), 256).into()), "1000");
/// ```
pub fn format(value: &RawValue) -> String {
    match value {
        RawValue::Address(address) => address.to_checksum(None),
        RawValue::Bytes(bytes) => encode_hex(bytes),
        RawValue::Text(text) => text.clone(),
        RawValue::Other(value) => render(value),
    }
}

fn render(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::Address(address) => address.to_checksum(None),
        DynSolValue::Bytes(bytes) => encode_hex(bytes),
        DynSolValue::FixedBytes(word, size) => encode_hex(&word[..(*size).min(32)]),
        DynSolValue::Function(function) => encode_hex(function.as_slice()),
        DynSolValue::String(text) => text.clone(),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            format!("[{}]", render_all(values))
        }
        DynSolValue::Tuple(values) => format!("({})", render_all(values)),
        #[allow(unreachable_patterns)]
        other => format!("{other:?}"),
    }
}

fn render_all(values: &[DynSolValue]) -> String {
    values.iter().map(render).collect::<Vec<_>>().join(", ")
}
