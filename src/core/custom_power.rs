//! Power routine built from multiplication, `exp` and `ln`, following the
//! C99 `pow` special cases.

use crate::domain::ports::PowerStrategy;

/// Above this magnitude every `f64` is an even integer.
const ODD_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Integer exponents up to this magnitude use repeated squaring; squaring
/// error grows with the exponent, larger ones go through `exp`/`ln`.
const SQUARING_LIMIT: f64 = 1024.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomPower;

impl PowerStrategy for CustomPower {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn power(&self, base: f64, exponent: f64) -> f64 {
        calc_power(base, exponent)
    }
}

pub fn calc_power(x: f64, y: f64) -> f64 {
    // x^0 與 1^y 恆為 1，NaN 也一樣
    if y == 0.0 || x == 1.0 {
        return 1.0;
    }
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }

    // 無窮指數只看 |x| 與 1 的大小關係
    if y.is_infinite() {
        let ax = x.abs();
        return if ax == 1.0 {
            1.0
        } else if (ax > 1.0) == (y > 0.0) {
            f64::INFINITY
        } else {
            0.0
        };
    }

    let integral = y.fract() == 0.0;
    let odd = integral && is_odd_integer(y);

    if x == 0.0 {
        // keep the sign of -0 only for odd integer exponents
        let signed = if odd { x } else { 0.0 };
        return if y > 0.0 {
            signed
        } else if signed.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    if x.is_infinite() {
        let magnitude = if y > 0.0 { f64::INFINITY } else { 0.0 };
        return if x < 0.0 && odd { -magnitude } else { magnitude };
    }

    // 負底數配非整數指數沒有實數解
    if x < 0.0 && !integral {
        return f64::NAN;
    }

    let magnitude = if integral && y.abs() <= SQUARING_LIMIT {
        integer_power(x.abs(), y)
    } else {
        (y * x.abs().ln()).exp()
    };

    // 奇數次方保留負號
    if x < 0.0 && odd {
        -magnitude
    } else {
        magnitude
    }
}

fn is_odd_integer(y: f64) -> bool {
    y.abs() < ODD_LIMIT && (y % 2.0).abs() == 1.0
}

/// `x^n` for positive finite `x` and integral `n` by binary exponentiation.
fn integer_power(x: f64, n: f64) -> f64 {
    let mut exp = n.abs() as u64;
    let direct = square_and_multiply(x, exp);

    if n > 0.0 {
        return direct;
    }
    if direct.is_finite() && direct != 0.0 {
        return 1.0 / direct;
    }

    // 1/x^n over- or underflowed in the intermediate; walk the reciprocal instead
    let mut acc = 1.0;
    let mut sq = 1.0 / x;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= sq;
        }
        sq *= sq;
        exp >>= 1;
    }
    acc
}

fn square_and_multiply(x: f64, mut exp: u64) -> f64 {
    let mut acc = 1.0;
    let mut sq = x;
    while exp > 0 {
        if exp & 1 == 1 {
            acc *= sq;
        }
        exp >>= 1;
        if exp > 0 {
            sq *= sq;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_exponents() {
        assert_eq!(calc_power(2.0, 3.0), 8.0);
        assert_eq!(calc_power(2.0, 10.0), 1024.0);
        assert_eq!(calc_power(-2.0, 3.0), -8.0);
        assert_eq!(calc_power(-2.0, 4.0), 16.0);
        assert_eq!(calc_power(2.0, -2.0), 0.25);
        assert_eq!(calc_power(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_fractional_exponents() {
        assert!((calc_power(4.0, 0.5) - 2.0).abs() < 1e-12);
        assert!((calc_power(27.0, 1.0 / 3.0) - 3.0).abs() < 1e-12);
        assert!(calc_power(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_zero_base() {
        assert_eq!(calc_power(0.0, 0.0), 1.0);
        assert_eq!(calc_power(0.0, 2.0), 0.0);
        assert_eq!(calc_power(0.0, -1.0), f64::INFINITY);
        assert_eq!(calc_power(-0.0, -1.0), f64::NEG_INFINITY);
        assert_eq!(calc_power(-0.0, -2.0), f64::INFINITY);
        assert!(calc_power(-0.0, 3.0).is_sign_negative());
        assert!(calc_power(-0.0, 2.0).is_sign_positive());
    }

    #[test]
    fn test_nan_and_one() {
        assert_eq!(calc_power(f64::NAN, 0.0), 1.0);
        assert_eq!(calc_power(1.0, f64::NAN), 1.0);
        assert!(calc_power(f64::NAN, 2.0).is_nan());
        assert!(calc_power(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_infinities() {
        assert_eq!(calc_power(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(calc_power(0.5, f64::INFINITY), 0.0);
        assert_eq!(calc_power(2.0, f64::NEG_INFINITY), 0.0);
        assert_eq!(calc_power(-1.0, f64::INFINITY), 1.0);
        assert_eq!(calc_power(f64::NEG_INFINITY, 3.0), f64::NEG_INFINITY);
        assert_eq!(calc_power(f64::NEG_INFINITY, 2.0), f64::INFINITY);
        assert_eq!(calc_power(f64::INFINITY, -1.0), 0.0);
    }

    #[test]
    fn test_overflow_and_underflow() {
        assert_eq!(calc_power(10.0, 400.0), f64::INFINITY);
        assert_eq!(calc_power(10.0, -400.0), 0.0);
        assert_eq!(calc_power(2.0, -1022.0), f64::MIN_POSITIVE);
        assert_eq!(calc_power(2.0, -1024.0), f64::from_bits(1 << 50));
        assert_eq!(calc_power(2.0, 1024.0), f64::INFINITY);
        assert_eq!(calc_power(1.0000001, 1e300), f64::INFINITY);
    }
}
