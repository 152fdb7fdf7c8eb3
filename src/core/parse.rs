//! Lenient string-to-float conversion with `atof` semantics: the longest
//! numeric prefix is converted and anything that does not start like a number
//! becomes `0.0`.

/// Converts the numeric prefix of `input`, ignoring trailing garbage.
pub fn parse_lenient(input: &str) -> f64 {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = special_value(rest)
        .or_else(|| hex_prefix(rest))
        .or_else(|| decimal_prefix(rest))
        .unwrap_or(0.0);

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn special_value(s: &str) -> Option<f64> {
    let lower: String = s.chars().take(8).collect::<String>().to_ascii_lowercase();
    if lower.starts_with("inf") {
        Some(f64::INFINITY)
    } else if lower.starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

fn decimal_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    let int_digits = count_while(&bytes[end..], |b| b.is_ascii_digit());
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_while(&bytes[end + 1..], |b| b.is_ascii_digit());
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // an exponent marker only counts when digits follow it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut probe = end + 1;
        if matches!(bytes.get(probe), Some(b'+') | Some(b'-')) {
            probe += 1;
        }
        let exp_digits = count_while(&bytes[probe.min(bytes.len())..], |b| b.is_ascii_digit());
        if exp_digits > 0 {
            end = probe + exp_digits;
        }
    }

    // Rust's float grammar matches the scanned prefix, including forms like "5." and ".5"
    s[..end].parse::<f64>().ok()
}

/// Significant hex digits kept in the mantissa; 15 digits hold at least 57 bits,
/// enough for correct rounding to 53 bits with a sticky bit.
const MAX_HEX_DIGITS: u32 = 15;

fn hex_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return None;
    }

    let mut pos = 2;
    let mut mantissa: u64 = 0;
    let mut kept = 0;
    let mut scale: i64 = 0;
    let mut sticky = false;
    let mut any_digit = false;

    // 整數部分: 跳過前導零，超出的位數只調整指數
    while let Some(d) = bytes.get(pos).and_then(|b| hex_digit(*b)) {
        if kept < MAX_HEX_DIGITS {
            if mantissa != 0 || d != 0 {
                mantissa = (mantissa << 4) | d as u64;
                kept += 1;
            }
        } else {
            scale = scale.saturating_add(4);
            sticky |= d != 0;
        }
        any_digit = true;
        pos += 1;
    }

    // 小數部分: 超出的位數只影響捨入
    if bytes.get(pos) == Some(&b'.') {
        let mut frac_pos = pos + 1;
        let mut frac_any = false;
        while let Some(d) = bytes.get(frac_pos).and_then(|b| hex_digit(*b)) {
            if kept < MAX_HEX_DIGITS {
                if mantissa != 0 || d != 0 {
                    mantissa = (mantissa << 4) | d as u64;
                    kept += 1;
                }
                scale = scale.saturating_sub(4);
            } else {
                sticky |= d != 0;
            }
            frac_any = true;
            frac_pos += 1;
        }
        if any_digit || frac_any {
            pos = frac_pos;
            any_digit = true;
        }
    }

    if !any_digit {
        // "0x" with nothing after it still converts the leading zero
        return Some(0.0);
    }

    if matches!(bytes.get(pos), Some(b'p') | Some(b'P')) {
        let mut probe = pos + 1;
        let exp_negative = match bytes.get(probe) {
            Some(b'-') => {
                probe += 1;
                true
            }
            Some(b'+') => {
                probe += 1;
                false
            }
            _ => false,
        };
        let digits = count_while(&bytes[probe.min(bytes.len())..], |b| b.is_ascii_digit());
        if digits > 0 {
            let exp = s[probe..probe + digits]
                .bytes()
                .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));
            scale = if exp_negative {
                scale.saturating_sub(exp)
            } else {
                scale.saturating_add(exp)
            };
        }
    }

    if mantissa == 0 {
        return Some(0.0);
    }

    // 捨棄的非零位數折成最低位，讓 u64 -> f64 的捨入正確
    if sticky {
        mantissa |= 1;
    }

    // split the scaling so an intermediate power of two cannot underflow early
    let scale = scale.clamp(-2200, 2200) as i32;
    let half = scale / 2;
    Some(mantissa as f64 * 2f64.powi(half) * 2f64.powi(scale - half))
}

fn hex_digit(b: u8) -> Option<u32> {
    (b as char).to_digit(16)
}

fn count_while(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|b| pred(**b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_lenient("2"), 2.0);
        assert_eq!(parse_lenient("-3.5"), -3.5);
        assert_eq!(parse_lenient("+0.25"), 0.25);
        assert_eq!(parse_lenient("1e3"), 1000.0);
        assert_eq!(parse_lenient("2.5E-1"), 0.25);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("5."), 5.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("e5"), 0.0);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_lenient("12abc"), 12.0);
        assert_eq!(parse_lenient("  7 apples"), 7.0);
        assert_eq!(parse_lenient("2e"), 2.0);
        assert_eq!(parse_lenient("2e+"), 2.0);
        assert_eq!(parse_lenient("1.5.6"), 1.5);
    }

    #[test]
    fn test_special_values() {
        assert_eq!(parse_lenient("inf"), f64::INFINITY);
        assert_eq!(parse_lenient("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_lenient("NaN").is_nan());
        assert!(parse_lenient("nan(123)").is_nan());
        assert_eq!(parse_lenient("info"), f64::INFINITY);
    }

    #[test]
    fn test_hex_numbers() {
        assert_eq!(parse_lenient("0x10"), 16.0);
        assert_eq!(parse_lenient("0x1p3"), 8.0);
        assert_eq!(parse_lenient("-0X1.8p1"), -3.0);
        assert_eq!(parse_lenient("0xg"), 0.0);
        assert_eq!(parse_lenient("0x.8"), 0.5);
        assert_eq!(parse_lenient("0x000000000000000000001p4"), 16.0);
    }

    #[test]
    fn test_long_hex_digit_strings() {
        let long_fraction = format!("0x.8{}", "0".repeat(300));
        assert_eq!(parse_lenient(&long_fraction), 0.5);

        let long_integer = format!("0x1{}p-1200", "0".repeat(300));
        assert_eq!(parse_lenient(&long_integer), 1.0);

        let leading_fraction_zeros = format!("0x.{}1p1200", "0".repeat(299));
        assert_eq!(parse_lenient(&leading_fraction_zeros), 1.0);
    }

    #[test]
    fn test_hex_rounding_uses_dropped_digits() {
        // exactly half an ulp above 1.0 ties to even
        assert_eq!(parse_lenient("0x1.00000000000008"), 1.0);
        // anything past the halfway digit rounds up
        assert_eq!(parse_lenient("0x1.000000000000080001"), 1.0 + f64::EPSILON);
        assert_eq!(parse_lenient("0x1.fffffffffffff"), 2.0 - f64::EPSILON);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(parse_lenient("1e400"), f64::INFINITY);
        assert_eq!(parse_lenient("1e-400"), 0.0);
    }
}
