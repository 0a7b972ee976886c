//! Small string helpers for the plain-text wire format.

/// Remove at most one trailing newline sequence (`\r\n`, `\n` or `\r`).
///
/// The bitly `format=txt` responses end with a single `\n`; everything
/// before the final sequence is left untouched, and a string without a
/// trailing newline is returned as-is.
pub fn chomp(s: &str) -> &str {
    if let Some(stripped) = s.strip_suffix("\r\n") {
        return stripped;
    }
    if let Some(stripped) = s.strip_suffix('\n') {
        return stripped;
    }
    if let Some(stripped) = s.strip_suffix('\r') {
        return stripped;
    }
    s
}
