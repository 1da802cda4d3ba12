use std::fmt;

use serde::{Deserialize, Serialize};

/// Price in whole currency units, no fractional part.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub fn from_units(value: u64) -> Self {
        Price(value)
    }
}

impl fmt::Display for Price {
    /// Renders with a currency glyph and thousands separators, e.g. `₱1,800,000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        write!(f, "₱{out}")
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::Mul<u32> for Price {
    type Output = Self;

    fn mul(self, qty: u32) -> Self::Output {
        Price(self.0 * qty as u64)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::default(), |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_units_preserves_value() {
        let price = Price::from_units(138_000);
        assert_eq!(price, Price(138_000));
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Price::default(), Price::from_units(0));
    }

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Price::from_units(1_800_000).to_string(), "₱1,800,000");
        assert_eq!(Price::from_units(150_000).to_string(), "₱150,000");
        assert_eq!(Price::from_units(1_000).to_string(), "₱1,000");
    }

    #[test]
    fn display_small_values_ungrouped() {
        assert_eq!(Price::from_units(0).to_string(), "₱0");
        assert_eq!(Price::from_units(42).to_string(), "₱42");
        assert_eq!(Price::from_units(999).to_string(), "₱999");
    }

    #[test]
    fn add() {
        let a = Price::from_units(100);
        let b = Price::from_units(50);
        assert_eq!(a + b, Price::from_units(150));
    }

    #[test]
    fn add_assign() {
        let mut a = Price::from_units(100);
        a += Price::from_units(50);
        assert_eq!(a, Price::from_units(150));
    }

    #[test]
    fn mul_by_quantity() {
        assert_eq!(Price::from_units(2_500_000) * 2, Price::from_units(5_000_000));
        assert_eq!(Price::from_units(138_000) * 0, Price::from_units(0));
    }

    #[test]
    fn sum_over_iterator() {
        let total: Price = [100u64, 200, 300].into_iter().map(Price::from_units).sum();
        assert_eq!(total, Price::from_units(600));
    }

    #[test]
    fn ordering() {
        assert!(Price::from_units(138_000) < Price::from_units(5_400_000));
    }

    #[test]
    fn serde_round_trip_as_plain_integer() {
        let json = serde_json::to_string(&Price::from_units(374_000)).unwrap();
        assert_eq!(json, "374000");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_units(374_000));
    }
}
