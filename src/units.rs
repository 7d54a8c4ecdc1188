#![allow(missing_docs)]

//! This module defines the unit types the market model works in.
//!
//! All quantities wrap an `f64` so that NaN can flow through arithmetic
//! unchanged; a poisoned value is the model's only failure signal.

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            derive_more::Add,
            derive_more::Sub,
            derive_more::AddAssign,
            derive_more::SubAssign,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn from(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

macro_rules! impl_mul {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::from(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::from(self.0 * lhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Quantity);
unit_struct!(Money);

// Derived quantities
unit_struct!(MoneyPerQuantity);

// Multiplication rules
impl_mul!(MoneyPerQuantity, Quantity, Money);

impl Quantity {
    /// Returns the smaller of two quantities.
    ///
    /// Unlike [`f64::min`], a NaN operand yields NaN rather than the other
    /// operand.
    pub fn min(self, rhs: Self) -> Self {
        if self.0.is_nan() || rhs.0.is_nan() {
            Self(f64::NAN)
        } else {
            Self(self.0.min(rhs.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_quantity_min() {
        assert_approx_eq!(f64, Quantity(1.0).min(Quantity(2.0)).value(), 1.0);
        assert_approx_eq!(f64, Quantity(-1.0).min(Quantity(0.0)).value(), -1.0);
        assert!(Quantity(f64::NAN).min(Quantity(2.0)).value().is_nan());
        assert!(Quantity(2.0).min(Quantity(f64::NAN)).value().is_nan());
    }
}
