//! Wire payload decoding
//!
//! Transports hand the adapter content in whatever encoding they received;
//! it must be decoded to raw bytes before the container's `write` is
//! called.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::Result;

/// Decode a base64 content payload into raw bytes.
pub fn decode_content(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload)?)
}

/// Encode raw bytes for a base64 transport response.
pub fn encode_content(data: &[u8]) -> String {
    STANDARD.encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_standard_base64() {
        assert_eq!(decode_content("qrvM").unwrap(), vec![0xAA, 0xBB, 0xCC]);
        assert_eq!(decode_content("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(decode_content("not base64!").is_err());
    }

    #[test]
    fn roundtrips() {
        let data = [0u8, 1, 2, 250, 255];
        assert_eq!(decode_content(&encode_content(&data)).unwrap(), data);
    }
}
