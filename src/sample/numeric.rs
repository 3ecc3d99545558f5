//! Permissive number scanning.
//!
//! Both scanners skip leading whitespace, consume the longest numeric prefix
//! and ignore whatever follows.
//! Input without a numeric prefix yields zero instead of an error.

/// Scans a floating point number the way `atof` does.
///
/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit,
/// as well as `inf`, `infinity` and `nan` in any case.
/// An exponent marker not followed by digits is left unconsumed.
/// Hexadecimal floats are not recognised and read as zero.
#[must_use]
pub fn scan_float(input: &str) -> f32 {
    let trimmed = input.trim_start_matches(is_c_space);
    let bytes = trimmed.as_bytes();
    let mut end = sign_len(bytes);

    if let Some(special) = special_float(&bytes[end..]) {
        return if bytes.first() == Some(&b'-') { -special } else { special };
    }

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digit_run(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(0.0)
}

/// Scans an integer the way `atoi` does, saturating at the bounds of `i32`.
#[must_use]
pub fn scan_int(input: &str) -> i32 {
    let trimmed = input.trim_start_matches(is_c_space);
    let bytes = trimmed.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let start = sign_len(bytes);

    let mut value: i32 = 0;
    for digit in bytes[start..].iter().take_while(|b| b.is_ascii_digit()) {
        let digit = i32::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Whitespace as C `isspace` sees it, which includes the vertical tab.
const fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn special_float(bytes: &[u8]) -> Option<f32> {
    let starts_with = |word: &[u8]| {
        bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
    };
    if starts_with(b"inf") {
        Some(f32::INFINITY)
    } else if starts_with(b"nan") {
        Some(f32::NAN)
    } else {
        None
    }
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
