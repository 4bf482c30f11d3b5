//! Typed decoders for raw stored bytes.

use crate::error::Result;

/// Decodes bytes as UTF-8 text.
pub fn to_str(data: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(data)?)
}

/// Parses bytes as a base-10 integer. Surrounding ASCII whitespace and a
/// leading sign are accepted.
pub fn to_int(data: &[u8]) -> Result<i64> {
    Ok(ascii_trimmed(data)?.parse()?)
}

/// Parses bytes as a float literal.
pub fn to_float(data: &[u8]) -> Result<f64> {
    Ok(ascii_trimmed(data)?.parse()?)
}

fn ascii_trimmed(data: &[u8]) -> Result<&str> {
    Ok(std::str::from_utf8(data)
        .map_err(|e| crate::error::CacheError::Decode(e.to_string()))?
        .trim_matches(|c: char| c.is_ascii_whitespace()))
}
