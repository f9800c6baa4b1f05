//! Message-key parsing with auto base-detection.

use crate::error::MergeError;

/// Parse a message key as an integer literal, detecting the base from its
/// prefix: `0x`/`0X` hex, `0o`/`0O` octal, `0b`/`0B` binary, decimal
/// otherwise. A bare leading zero is decimal, not legacy octal. An optional
/// `+`/`-` sign may precede the prefix.
pub fn parse_message_key(key: &str) -> Result<i64, MergeError> {
    let key_format = || MergeError::KeyFormat { key: key.to_string() };

    let (sign, rest) = match key.as_bytes().first() {
        Some(b'+') => ("", &key[1..]),
        Some(b'-') => ("-", &key[1..]),
        _ => ("", key),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        Some("0o" | "0O") => (8, &rest[2..]),
        Some("0b" | "0B") => (2, &rest[2..]),
        _ => (10, rest),
    };
    // `from_str_radix` would tolerate a sign here, but a sign after the
    // prefix (`0x-1`) or a doubled sign (`+-1`) is not a valid literal.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(key_format());
    }

    // Re-attach the sign so negative magnitudes down to i64::MIN parse.
    i64::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|_| key_format())
}
