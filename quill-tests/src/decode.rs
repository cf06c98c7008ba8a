/// Read back a single quoted literal written with backslash escapes, the way
/// a MySQL style server would.
///
/// Returns `None` when `literal` is not exactly one well formed string
/// literal (unquoted, unterminated, stray quote or unknown escape).
pub fn decode_string_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let decoded = match chars.next()? {
                    '\\' => '\\',
                    '\'' => '\'',
                    '"' => '"',
                    'n' => '\n',
                    'r' => '\r',
                    'x' => {
                        let hex: String = [chars.next()?, chars.next()?].into_iter().collect();
                        char::from(u8::from_str_radix(&hex, 16).ok()?)
                    }
                    _ => return None,
                };
                result.push(decoded);
            }
            // An unescaped quote would close the literal early
            '\'' => return None,
            _ => result.push(c),
        }
    }
    Some(result)
}
