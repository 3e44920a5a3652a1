//! ERC20 return payload decoding
//!
//! Decodes the raw bytes returned by `decimals()` and `symbol()` as they come back
//! from a batched read. Nothing here talks to the network.
//!
//! `symbol()` is not uniform across deployed tokens. Older contracts return a
//! `bytes32`, newer ones a dynamic `string`. The encoding is told apart by payload
//! length only:
//! - 32 bytes: fixed `bytes32`, the whole word is the padded string
//! - 96 bytes: dynamic `string` (offset, length, one data word); the third word is
//!   read as a padded string
//!
//! Every other length is [`SymbolDecoding::Unrecognized`].

use alloy::primitives::U256;

use crate::types::SymbolDecoding;

/// Payload length of a `bytes32` symbol
pub const FIXED_SYMBOL_LEN: usize = 32;

/// Payload length of a dynamic `string` symbol of at most 32 bytes
pub const DYNAMIC_SYMBOL_LEN: usize = 96;

/// Offset of the data word inside a dynamic `string` payload
const DYNAMIC_SYMBOL_TAIL: usize = 64;

/// Decode a `decimals()` return payload as an unsigned integer
///
/// The payload is read as a big-endian integer. An empty payload reads as zero.
///
/// # Returns
/// * `Some(U256)` - Decoded value
/// * `None` - If the value does not fit in 256 bits
pub fn decode_decimals(data: &[u8]) -> Option<U256> {
    if data.is_empty() {
        return Some(U256::ZERO);
    }
    U256::try_from_be_slice(data)
}

/// Decode a `symbol()` return payload, choosing the encoding from its length
///
/// # Example
/// ```
/// use token_metadata_validator::{types::SymbolDecoding, utils::erc20_utils::decode_symbol};
///
/// let mut word = [0u8; 32];
/// word[..3].copy_from_slice(b"MKR");
/// assert_eq!(decode_symbol(&word), SymbolDecoding::Fixed("MKR".to_string()));
/// ```
pub fn decode_symbol(data: &[u8]) -> SymbolDecoding {
    match data.len() {
        FIXED_SYMBOL_LEN => match parse_bytes32_string(data) {
            Some(symbol) => SymbolDecoding::Fixed(symbol),
            None => SymbolDecoding::Unrecognized,
        },
        DYNAMIC_SYMBOL_LEN => match parse_bytes32_string(&data[DYNAMIC_SYMBOL_TAIL..]) {
            Some(symbol) => SymbolDecoding::Dynamic(symbol),
            None => SymbolDecoding::Unrecognized,
        },
        _ => SymbolDecoding::Unrecognized,
    }
}

/// Parse a null-padded 32-byte string
///
/// The last byte must be zero (a terminator is required, so at most 31 bytes of
/// content). Trailing zeros are stripped; the rest must be valid UTF-8.
pub fn parse_bytes32_string(word: &[u8]) -> Option<String> {
    if word.len() != 32 || word[31] != 0 {
        return None;
    }
    let end = word.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8(word[..end].to_vec()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::hex::decode;

    #[test]
    fn test_decode_fixed_symbol() {
        // "DAI" as bytes32, 66 hex chars with the 0x prefix
        let payload = "0x4441490000000000000000000000000000000000000000000000000000000000";
        assert_eq!(payload.len(), 66);
        let data = decode(payload).unwrap();
        assert_eq!(decode_symbol(&data), SymbolDecoding::Fixed("DAI".to_string()));
    }

    #[test]
    fn test_decode_dynamic_symbol() {
        // abi.encode("USDC"): offset, length, data
        let payload = "0x\
            0000000000000000000000000000000000000000000000000000000000000020\
            0000000000000000000000000000000000000000000000000000000000000004\
            5553444300000000000000000000000000000000000000000000000000000000";
        assert_eq!(payload.len(), 194);
        let data = decode(payload).unwrap();
        assert_eq!(decode_symbol(&data), SymbolDecoding::Dynamic("USDC".to_string()));
    }

    #[test]
    fn test_unrecognized_lengths() {
        assert_eq!(decode_symbol(&[]), SymbolDecoding::Unrecognized);
        assert_eq!(decode_symbol(&[0u8; 64]), SymbolDecoding::Unrecognized);
        // A dynamic string longer than 32 bytes spills into a fourth word
        assert_eq!(decode_symbol(&[0u8; 128]), SymbolDecoding::Unrecognized);
    }

    #[test]
    fn test_bytes32_without_terminator() {
        let word = [b'A'; 32];
        assert_eq!(parse_bytes32_string(&word), None);
        assert_eq!(decode_symbol(&word), SymbolDecoding::Unrecognized);
    }

    #[test]
    fn test_bytes32_invalid_utf8() {
        let mut word = [0u8; 32];
        word[0] = 0xff;
        assert_eq!(parse_bytes32_string(&word), None);
    }

    #[test]
    fn test_bytes32_all_zero_is_empty() {
        assert_eq!(parse_bytes32_string(&[0u8; 32]), Some(String::new()));
    }

    #[test]
    fn test_decode_decimals() {
        let mut word = [0u8; 32];
        word[31] = 18;
        assert_eq!(decode_decimals(&word), Some(U256::from(18)));
        assert_eq!(decode_decimals(&[6]), Some(U256::from(6)));
        assert_eq!(decode_decimals(&[]), Some(U256::ZERO));
        assert_eq!(decode_decimals(&[0xffu8; 33]), None);
    }
}
