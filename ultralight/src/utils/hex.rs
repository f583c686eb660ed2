//! Hexadecimal helpers for printing UIDs and tag memory.
//!
//! Small and dependency-free; compact and spaced output plus a parser
//! that tolerates whitespace, which is handy for pasting tag dumps into
//! tests.

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Convert a byte slice to a lowercase hex string with a single space
/// between each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes, ignoring any whitespace.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|chunk| {
            let pair: String = chunk.iter().collect();
            u8::from_str_radix(&pair, 16)
                .map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
