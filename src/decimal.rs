use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Money type with 8 decimal places precision, single currency unit
///
/// Arithmetic saturates at the bounds of `Decimal` instead of panicking, so
/// absurd stored amounts still produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(8))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(8)))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from a float, non-finite values become zero
    pub fn from_f64_lossy(value: f64) -> Self {
        if !value.is_finite() {
            return Money::ZERO;
        }
        Decimal::from_f64_retain(value)
            .map(Money::from_decimal)
            .unwrap_or(Money::ZERO)
    }

    /// parse loosely typed user input, anything that is not a number is zero
    ///
    /// Accepts plain and scientific notation and surrounding whitespace.
    pub fn coerce(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Money::ZERO;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Money::from_decimal)
            .unwrap_or(Money::ZERO)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// check if strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// maximum of two values
    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// amount owed for `count` periods at this rate, clamped to the decimal range
    pub fn times(self, count: u32) -> Self {
        let product = self
            .0
            .checked_mul(Decimal::from(count))
            .unwrap_or_else(|| bound_for(self.0.is_sign_negative()));
        Money(product.round_dp(8))
    }

    /// subtraction floored at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        (self - other).max(Money::ZERO)
    }
}

// overflow can only happen away from zero, in the direction of the sign
fn bound_for(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        let sum = self
            .0
            .checked_add(other.0)
            .unwrap_or_else(|| bound_for(self.0.is_sign_negative()));
        Money(sum.round_dp(8))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        let difference = self
            .0
            .checked_sub(other.0)
            .unwrap_or_else(|| bound_for(self.0.is_sign_negative()));
        Money(difference.round_dp(8))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HUGE: &str = "50000000000000000000000000000";

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_coerce_numeric_input() {
        assert_eq!(Money::coerce("1000"), Money::from_major(1000));
        assert_eq!(Money::coerce("  250.75 "), Money::from_decimal(dec!(250.75)));
        assert_eq!(Money::coerce("1e3"), Money::from_major(1000));
    }

    #[test]
    fn test_coerce_garbage_is_zero() {
        assert_eq!(Money::coerce(""), Money::ZERO);
        assert_eq!(Money::coerce("abc"), Money::ZERO);
        assert_eq!(Money::coerce("NaN"), Money::ZERO);
        assert_eq!(Money::coerce("12abc"), Money::ZERO);
    }

    #[test]
    fn test_non_finite_float_is_zero() {
        assert_eq!(Money::from_f64_lossy(f64::NAN), Money::ZERO);
        assert_eq!(Money::from_f64_lossy(f64::INFINITY), Money::ZERO);
        assert_eq!(Money::from_f64_lossy(1500.0), Money::from_major(1500));
    }

    #[test]
    fn test_times_and_saturating_sub() {
        let rent = Money::from_major(1000);
        assert_eq!(rent.times(3), Money::from_major(3000));
        assert_eq!(rent.times(0), Money::ZERO);

        assert_eq!(rent.saturating_sub(Money::from_major(400)), Money::from_major(600));
        assert_eq!(rent.saturating_sub(Money::from_major(4000)), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_major(10), Money::from_major(20), Money::from_major(5)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_major(35));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let huge = Money::coerce(HUGE);
        assert!(huge.is_positive());
        let ceiling = Money::from_decimal(Decimal::MAX);

        assert_eq!(huge.times(3), ceiling);
        assert_eq!(huge + huge, ceiling);
        assert_eq!(vec![huge, huge, huge].into_iter().sum::<Money>(), ceiling);
        assert_eq!(huge.times(3).saturating_sub(huge), ceiling.saturating_sub(huge));

        let floor = Money::from_decimal(Decimal::MIN);
        let negative = Money::ZERO - huge;
        assert_eq!(negative.times(2), floor);
        assert_eq!(negative - huge, floor);
        assert_eq!(negative.saturating_sub(huge), Money::ZERO);
    }
}
