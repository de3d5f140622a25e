use super::strings::encode_hex;
use alloy::primitives::{Bytes, FixedBytes};

/// A convenience function which encodes a given EVM type into a sized, lowercase hex string.
pub trait ToLowerHex {
    /// Encode `self` as lowercase hex.
    fn to_lower_hex(&self) -> String;
}

impl ToLowerHex for Bytes {
    fn to_lower_hex(&self) -> String {
        encode_hex(self)
    }
}

impl ToLowerHex for Vec<u8> {
    fn to_lower_hex(&self) -> String {
        encode_hex(self)
    }
}

impl ToLowerHex for [u8] {
    fn to_lower_hex(&self) -> String {
        encode_hex(self)
    }
}

/// Fixed-size words keep their full width and carry a `0x` prefix.
impl<const N: usize> ToLowerHex for FixedBytes<N> {
    fn to_lower_hex(&self) -> String {
        format!("0x{}", encode_hex(self.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[test]
    fn test_fixed_bytes_keep_leading_zeros() {
        let mut word = [0u8; 32];
        word[31] = 0x01;
        let hex = B256::from(word).to_lower_hex();
        assert_eq!(hex.len(), 66);
        assert!(hex.starts_with("0x0000"));
        assert!(hex.ends_with("01"));
    }

    #[test]
    fn test_byte_vectors_are_bare() {
        assert_eq!(vec![0xde, 0xad, 0xBE, 0xef].to_lower_hex(), "deadbeef");
        assert_eq!(Bytes::from(vec![0x00, 0x0a]).to_lower_hex(), "000a");
    }
}
