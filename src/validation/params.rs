/// Parse a `{id}` path segment the lenient integer-prefix way.
///
/// Leading whitespace is skipped, then an optional `+`/`-` sign. A `0x`/`0X`
/// prefix switches to base 16. The leading run of digits in that base is
/// read and anything after it is ignored.
///
/// Returns `None` when there are no digits, the value is negative, or it
/// overflows `u32`. Callers treat `None` as an id that matches no record.
pub fn parse_user_id(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let digits_end = body
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(body.len());
    let value = u32::from_str_radix(&body[..digits_end], radix).ok()?;

    if negative {
        return None;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_user_id("1"), Some(1));
        assert_eq!(parse_user_id("42"), Some(42));
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_user_id("007"), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_user_id("3abc"), Some(3));
        assert_eq!(parse_user_id("12.5"), Some(12));
    }

    #[test]
    fn test_parse_skips_leading_whitespace() {
        assert_eq!(parse_user_id("  5"), Some(5));
        assert_eq!(parse_user_id(" +5"), Some(5));
    }

    #[test]
    fn test_parse_explicit_plus_sign() {
        assert_eq!(parse_user_id("+2"), Some(2));
        assert_eq!(parse_user_id("++2"), None);
        assert_eq!(parse_user_id("+"), None);
    }

    #[test]
    fn test_parse_negative_matches_nothing() {
        assert_eq!(parse_user_id("-1"), None);
        assert_eq!(parse_user_id("-0x2"), None);
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_user_id("0x2"), Some(2));
        assert_eq!(parse_user_id("0X1f"), Some(31));
        assert_eq!(parse_user_id("+0xA"), Some(10));
        assert_eq!(parse_user_id("0x1g"), Some(1));
        assert_eq!(parse_user_id("0x"), None);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_user_id("abc"), None);
        assert_eq!(parse_user_id(""), None);
        assert_eq!(parse_user_id("x2"), None);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(parse_user_id("4294967296"), None);
        assert_eq!(parse_user_id("4294967295"), Some(u32::MAX));
        assert_eq!(parse_user_id("0xffffffff"), Some(u32::MAX));
        assert_eq!(parse_user_id("0x100000000"), None);
    }
}
