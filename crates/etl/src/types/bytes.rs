use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw bytes carried through the decoded ledger model.
///
/// Keys, hashes and data values arrive from the decoder as opaque bytes. Their
/// length is checked where they are rendered, not here, so a malformed key
/// surfaces as a transform error tied to the operation that carries it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow as a fixed-size array, or `None` when the length differs.
    pub fn as_array<const N: usize>(&self) -> Option<&[u8; N]> {
        self.0.as_slice().try_into().ok()
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for HexBytes {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Lowercase hex, no prefix
impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserialize from hex string (with or without "0x" prefix)
impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let hex_str = s.strip_prefix("0x").unwrap_or(&s);

        let bytes = hex::decode(hex_str).map_err(serde::de::Error::custom)?;
        Ok(HexBytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_bytes_display() {
        let bytes = HexBytes::from([0xab; 32]);
        let display = bytes.to_string();

        assert_eq!(display.len(), 64);
        assert!(display.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_hex_bytes_serialize() {
        let bytes = HexBytes::new(vec![0x00, 0x0f, 0xff]);
        let json = serde_json::to_string(&bytes).unwrap();

        assert_eq!(json, "\"000fff\"");
    }

    #[test]
    fn test_hex_bytes_deserialize() {
        let bytes: HexBytes = serde_json::from_str("\"000FFF\"").unwrap();
        assert_eq!(bytes.as_bytes(), &[0x00, 0x0f, 0xff]);
    }

    #[test]
    fn test_hex_bytes_deserialize_with_prefix() {
        let bytes: HexBytes = serde_json::from_str("\"0x4242\"").unwrap();
        assert_eq!(bytes.as_bytes(), &[0x42, 0x42]);
    }

    #[test]
    fn test_hex_bytes_deserialize_rejects_invalid_hex() {
        let result: Result<HexBytes, _> = serde_json::from_str("\"zz\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_as_array_checks_length() {
        let bytes = HexBytes::from([7u8; 32]);
        assert_eq!(bytes.as_array::<32>(), Some(&[7u8; 32]));
        assert!(bytes.as_array::<31>().is_none());
    }
}
