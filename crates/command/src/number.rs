//! Numeric argument conversion.
//!
//! The firmware accepted anything its C `atof` accepted: leading whitespace
//! is skipped, the longest decimal prefix is converted and trailing junk is
//! ignored. No numeric prefix at all reads as zero. [`parse_lenient`] keeps
//! that contract; [`parse_strict`] requires the whole field to be a number.

/// Length of the decimal floating-point prefix of `bytes`, 0 if none.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa
/// digit. An exponent marker without digits is not part of the number.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes
            .iter()
            .skip(start)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };
    let sign_at = |i: usize| matches!(bytes.get(i), Some(b'+' | b'-'));

    let mut i = usize::from(sign_at(0));
    let int_digits = digits_from(i);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = digits_from(i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let exp_start = i + 1 + usize::from(sign_at(i + 1));
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            i = exp_start + exp_digits;
        }
    }
    i
}

fn skip_leading_space(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace() && *b != 0x0B)
        .unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}

fn convert(prefix: &[u8]) -> Option<f32> {
    std::str::from_utf8(prefix).ok()?.parse::<f32>().ok()
}

/// Converts the leading number in `field`, or `0.0` if there is none.
pub fn parse_lenient(field: &[u8]) -> f32 {
    let body = skip_leading_space(field);
    let len = numeric_prefix_len(body);
    body.get(..len).and_then(convert).unwrap_or(0.0)
}

/// Converts `field` only if, apart from surrounding whitespace, it is
/// entirely a number.
pub fn parse_strict(field: &[u8]) -> Option<f32> {
    let body = skip_leading_space(field);
    let len = numeric_prefix_len(body);
    if len == 0 {
        return None;
    }
    let rest = body.get(len..).unwrap_or_default();
    if !rest.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    body.get(..len).and_then(convert)
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_plain_numbers() {
        assert_eq!(parse_lenient(b"90"), 90.0);
        assert_eq!(parse_lenient(b"-12.5"), -12.5);
        assert_eq!(parse_lenient(b"+3"), 3.0);
        assert_eq!(parse_lenient(b".5"), 0.5);
        assert_eq!(parse_lenient(b"7."), 7.0);
        assert_eq!(parse_lenient(b"1e2"), 100.0);
    }

    #[test]
    fn test_lenient_ignores_trailing_junk() {
        assert_eq!(parse_lenient(b"45deg"), 45.0);
        assert_eq!(parse_lenient(b"90,5"), 90.0);
        assert_eq!(parse_lenient(b"2e"), 2.0);
        assert_eq!(parse_lenient(b"2e+"), 2.0);
    }

    #[test]
    fn test_lenient_skips_leading_whitespace() {
        assert_eq!(parse_lenient(b"  \t42"), 42.0);
    }

    #[test]
    fn test_lenient_garbage_is_zero() {
        assert_eq!(parse_lenient(b""), 0.0);
        assert_eq!(parse_lenient(b"abc"), 0.0);
        assert_eq!(parse_lenient(b"-"), 0.0);
        assert_eq!(parse_lenient(b"."), 0.0);
        assert_eq!(parse_lenient(b"x12"), 0.0);
    }

    #[test]
    fn test_strict_accepts_whole_numbers_only() {
        assert_eq!(parse_strict(b"90"), Some(90.0));
        assert_eq!(parse_strict(b" 90 "), Some(90.0));
        assert_eq!(parse_strict(b"-0.25"), Some(-0.25));
        assert_eq!(parse_strict(b"45deg"), None);
        assert_eq!(parse_strict(b""), None);
        assert_eq!(parse_strict(b"abc"), None);
    }
}
