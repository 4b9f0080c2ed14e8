//! Exact rational prices.
//!
//! Offers carry their price as a numerator/denominator pair. Consumers get the
//! pair itself and a float64 approximation. The approximation is obtained by
//! formatting the rational to seven fractional digits, rounding the last digit
//! half away from zero, and parsing that text; the float is therefore always the
//! nearest double to that seven-digit decimal.

use serde::{Deserialize, Serialize};

/// Fractional digits of the canonical price string
pub const PRICE_DECIMAL_PLACES: u32 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl Price {
    pub const fn new(n: i32, d: i32) -> Self {
        Self { n, d }
    }

    /// Canonical decimal text of `n / d`, or `None` when `d` is zero.
    pub fn to_canonical_string(&self) -> Option<String> {
        if self.d == 0 {
            return None;
        }

        let negative = self.n != 0 && ((self.n < 0) != (self.d < 0));
        let numerator = u128::from(self.n.unsigned_abs());
        let denominator = u128::from(self.d.unsigned_abs());
        let scale = 10u128.pow(PRICE_DECIMAL_PLACES);

        let mut whole = numerator / denominator;
        let remainder = numerator % denominator;

        let mut frac = 0u128;
        if remainder != 0 {
            let scaled = remainder * scale;
            frac = scaled / denominator;
            let rest = scaled % denominator;
            if rest * 2 >= denominator {
                frac += 1;
                if frac >= scale {
                    whole += 1;
                    frac -= scale;
                }
            }
        }

        Some(format!(
            "{}{}.{:0width$}",
            if negative { "-" } else { "" },
            whole,
            frac,
            width = PRICE_DECIMAL_PLACES as usize
        ))
    }

    /// Float approximation parsed from the canonical decimal text.
    pub fn approximate(&self) -> Option<f64> {
        self.to_canonical_string()?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_exact_quotient() {
        assert_eq!(Price::new(3, 1).to_canonical_string().unwrap(), "3.0000000");
        assert_eq!(Price::new(1, 4).to_canonical_string().unwrap(), "0.2500000");
    }

    #[test]
    fn test_canonical_rounds_last_digit() {
        // 1/3 = 0.33333333.. rounds down
        assert_eq!(Price::new(1, 3).to_canonical_string().unwrap(), "0.3333333");
        // 2/3 = 0.66666666.. rounds up
        assert_eq!(Price::new(2, 3).to_canonical_string().unwrap(), "0.6666667");
    }

    #[test]
    fn test_canonical_rounds_half_away_from_zero() {
        // 1/(2*10^7) sits exactly on the rounding boundary
        assert_eq!(
            Price::new(1, 20_000_000).to_canonical_string().unwrap(),
            "0.0000001"
        );
        assert_eq!(
            Price::new(-1, 20_000_000).to_canonical_string().unwrap(),
            "-0.0000001"
        );
    }

    #[test]
    fn test_canonical_carries_into_whole_part() {
        // 0.999999995 rounds to 1.0000000
        assert_eq!(
            Price::new(199_999_999, 200_000_000).to_canonical_string().unwrap(),
            "1.0000000"
        );
    }

    #[test]
    fn test_canonical_negative_denominator() {
        assert_eq!(Price::new(5, -2).to_canonical_string().unwrap(), "-2.5000000");
        assert_eq!(Price::new(0, -2).to_canonical_string().unwrap(), "0.0000000");
    }

    #[test]
    fn test_canonical_extreme_values() {
        assert_eq!(
            Price::new(i32::MAX, 1).to_canonical_string().unwrap(),
            "2147483647.0000000"
        );
        assert_eq!(
            Price::new(1, i32::MAX).to_canonical_string().unwrap(),
            "0.0000000"
        );
        assert_eq!(
            Price::new(i32::MIN, 1).to_canonical_string().unwrap(),
            "-2147483648.0000000"
        );
    }

    #[test]
    fn test_zero_denominator() {
        assert!(Price::new(1, 0).to_canonical_string().is_none());
        assert!(Price::new(1, 0).approximate().is_none());
    }

    #[test]
    fn test_approximate_parses_canonical_text() {
        assert_eq!(Price::new(1, 3).approximate().unwrap(), 0.3333333);
        assert_eq!(Price::new(7, 2).approximate().unwrap(), 3.5);
    }

    #[test]
    fn test_serialize_rational_pair() {
        let json = serde_json::to_string(&Price::new(7, 2)).unwrap();
        assert_eq!(json, r#"{"n":7,"d":2}"#);
    }
}
