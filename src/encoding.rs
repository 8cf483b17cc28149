use crate::error::Sha256Error;

// Decodes a hex string such as "68656c6c6f" into bytes. Surrounding whitespace and a leading "0x" are ignored.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, Sha256Error> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    Ok(hex::decode(digits)?)
}

// Lowercase hex rendering of bytes
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
