// src/parsers.rs

/// Register index given in decimal or with a `0x` prefix.
pub fn parse_index(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("Invalid index '{s}': {e}"))
}

pub fn parse_positive_u64(s: &str) -> Result<u64, String> {
    match parse_index(s)? {
        0 => Err("value must be greater than 0".to_string()),
        n => Ok(n),
    }
}
