//! Share-token codec
//!
//! A token is the document's UTF-8 bytes run through brotli and then
//! unpadded URL-safe base64. The output alphabet (`A-Z a-z 0-9 - _`) can sit
//! directly in a URL fragment with no percent-encoding. Compression settings
//! are fixed constants, so the same text always produces the same token.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use std::io::{Read, Write};
use tracing::debug;

use crate::constants::codec;
use crate::error::Error;

/// Compress document text into a URL-fragment-safe token
pub fn encode(text: &str) -> String {
    let mut compressed = Vec::new();
    let mut writer = brotli::CompressorWriter::new(
        &mut compressed,
        codec::BUFFER_SIZE,
        codec::QUALITY,
        codec::LG_WINDOW,
    );
    writer
        .write_all(text.as_bytes())
        .expect("writing into a Vec cannot fail");
    drop(writer);
    URL_SAFE_NO_PAD.encode(compressed)
}

/// Recover document text from a token
///
/// Any failure (empty token, bad base64, corrupt brotli stream, invalid
/// UTF-8) is `InvalidEncoding`; callers treat it the same as an absent
/// fragment.
pub fn decode(token: &str) -> Result<String, Error> {
    if token.is_empty() {
        return Err(Error::InvalidEncoding);
    }

    let compressed = URL_SAFE_NO_PAD.decode(token).map_err(|e| {
        debug!(error = %e, "Share token is not valid base64");
        Error::InvalidEncoding
    })?;

    let mut bytes = Vec::new();
    let mut reader = brotli::Decompressor::new(compressed.as_slice(), codec::BUFFER_SIZE);
    reader.read_to_end(&mut bytes).map_err(|e| {
        debug!(error = %e, "Share token is not a valid brotli stream");
        Error::InvalidEncoding
    })?;

    String::from_utf8(bytes).map_err(|e| {
        debug!(error = %e, "Share token decompressed to invalid UTF-8");
        Error::InvalidEncoding
    })
}
