use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encodes the UTF-8 bytes of `text` as padded standard base64
pub fn to_base64(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    STANDARD.encode(text.as_bytes())
}

/// Decodes base64 into text, replacing invalid UTF-8 sequences
pub fn from_base64(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Encodes the UTF-8 bytes of `text` as lowercase hex
pub fn to_hex(text: &str) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut encoded = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        encoded.push(DIGITS[(byte >> 4) as usize] as char);
        encoded.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    encoded
}
