//! Serialization of entries for storage.
//!
//! # Format
//!
//! An entry is encoded as:
//! - 1 byte format version ([`ENTRY_FORMAT_VERSION`])
//! - a MessagePack map from field name to value
//!
//! Fields are written by name, so a record still decodes after fields are
//! reordered, and unknown fields are skipped. Decoding rejects unknown
//! versions, truncated payloads and trailing bytes, so any corruption surfaces
//! as [`Error::Deserialization`].

use serde::Deserialize;

use crate::entry::Entry;
use crate::error::{Error, Result};

/// Format version for serialized entries.
pub const ENTRY_FORMAT_VERSION: u8 = 1;

/// A trait for types that can be encoded to bytes.
pub trait Encoder: Sized {
    /// Encode this value to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    fn encode(&self) -> Result<Vec<u8>>;
}

/// A trait for types that can be decoded from bytes.
pub trait Decoder: Sized {
    /// Decode a value from bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the bytes are not a valid encoding.
    fn decode(bytes: &[u8]) -> Result<Self>;
}

impl Encoder for Entry {
    fn encode(&self) -> Result<Vec<u8>> {
        let payload =
            rmp_serde::to_vec_named(self).map_err(|e| Error::Serialization(e.to_string()))?;

        let mut buf = Vec::with_capacity(1 + payload.len());
        buf.push(ENTRY_FORMAT_VERSION);
        buf.extend_from_slice(&payload);
        Ok(buf)
    }
}

impl Decoder for Entry {
    fn decode(bytes: &[u8]) -> Result<Self> {
        let (&version, payload) = bytes
            .split_first()
            .ok_or_else(|| Error::Deserialization("unexpected end of input".to_owned()))?;

        if version != ENTRY_FORMAT_VERSION {
            return Err(Error::Deserialization(format!(
                "unsupported format version: {version}, expected {ENTRY_FORMAT_VERSION}"
            )));
        }

        // The reader advances past what the decoder consumed
        let mut rest = payload;
        let entry = Self::deserialize(&mut rmp_serde::Deserializer::new(&mut rest))
            .map_err(|e| Error::Deserialization(e.to_string()))?;

        if !rest.is_empty() {
            return Err(Error::Deserialization(format!(
                "{} trailing bytes after entry",
                rest.len()
            )));
        }

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample() -> Entry {
        let at = Utc.with_ymd_and_hms(2023, 11, 2, 14, 30, 0).unwrap();
        Entry::with_created_at("Banane", "fruit jaune", at)
    }

    #[test]
    fn test_encode_starts_with_version() {
        let bytes = sample().encode().unwrap();
        assert_eq!(bytes[0], ENTRY_FORMAT_VERSION);
    }

    #[test]
    fn test_decode_preserves_all_fields() {
        let mut entry = sample();
        entry.created_at += chrono::Duration::nanoseconds(123_456_789);

        let decoded = Entry::decode(&entry.encode().unwrap()).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_encoding_names_its_fields() {
        let bytes = sample().encode().unwrap();

        for field in [&b"word"[..], b"definition", b"created_at"] {
            assert!(
                bytes.windows(field.len()).any(|w| w == field),
                "field {} missing from encoding",
                String::from_utf8_lossy(field)
            );
        }
    }

    #[test]
    fn test_decode_reordered_fields() {
        #[derive(serde::Serialize)]
        struct Reordered<'a> {
            created_at: chrono::DateTime<Utc>,
            note: &'a str,
            definition: &'a str,
            word: &'a str,
        }

        let expected = sample();
        let record = Reordered {
            created_at: expected.created_at,
            note: "ignored",
            definition: &expected.definition,
            word: &expected.word,
        };

        let mut bytes = vec![ENTRY_FORMAT_VERSION];
        bytes.extend(rmp_serde::to_vec_named(&record).unwrap());

        assert_eq!(Entry::decode(&bytes).unwrap(), expected);
    }

    #[test]
    fn test_decode_empty_input() {
        let err = Entry::decode(&[]).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }

    #[test]
    fn test_decode_unknown_version() {
        let mut bytes = sample().encode().unwrap();
        bytes[0] = ENTRY_FORMAT_VERSION + 1;

        let err = Entry::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported format version"));
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = sample().encode().unwrap();

        for len in 1..bytes.len() {
            let result = Entry::decode(&bytes[..len]);
            assert!(
                matches!(result, Err(Error::Deserialization(_))),
                "prefix of length {len} decoded"
            );
        }
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let mut bytes = sample().encode().unwrap();
        bytes.push(0);

        let err = Entry::decode(&bytes).unwrap_err();
        assert!(err.to_string().contains("trailing bytes"));
    }

    #[test]
    fn test_decode_garbage() {
        let err = Entry::decode(b"\x01not an entry at all").unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
