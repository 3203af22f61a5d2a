//! Byte-to-text decoding for CSV inputs.
//!
//! Inputs are expected to be UTF-8; a leading UTF-8 BOM is stripped when
//! present. Bytes that do not decode cleanly make the whole file a read
//! error rather than being replaced character-by-character, so a
//! wrongly-encoded file is reported and skipped instead of silently
//! mangled.

use encoding_rs::UTF_8;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("file is not valid UTF-8")]
pub struct DecodeError;

/// Decode `bytes` as UTF-8, removing a leading BOM if one is present.
pub fn decode_utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(DecodeError);
    }
    Ok(text.into_owned())
}
