use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Numeric type usable as an edge cost
///
/// Costs must be totally ordered so the frontier can rank vertices by
/// `(distance, vertex)`. Addition is checked: a sum that cannot be
/// represented is reported instead of wrapping around.
pub trait EdgeCost: Copy + Ord + Debug + Display + FromStr + Zero {
    /// Adds two costs, returning `None` when the sum is not representable
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// The value that marks "no edge" in the text graph description
    fn no_edge_marker() -> Self;

    /// Returns true if this value is the "no edge" marker
    fn is_no_edge_marker(&self) -> bool {
        *self == Self::no_edge_marker()
    }

    /// Returns true if the cost is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Returns true if the cost is an ordinary number (not NaN or infinite)
    fn is_finite(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),*) => {
        $(
            impl EdgeCost for $t {
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }

                fn no_edge_marker() -> Self {
                    -1
                }
            }
        )*
    };
}

impl_integer_cost!(i32, i64);

impl EdgeCost for OrderedFloat<f64> {
    fn checked_sum(self, rhs: Self) -> Option<Self> {
        let sum = self.into_inner() + rhs.into_inner();
        if sum.is_finite() {
            Some(OrderedFloat(sum))
        } else {
            None
        }
    }

    fn no_edge_marker() -> Self {
        OrderedFloat(-1.0)
    }

    fn is_finite(&self) -> bool {
        self.into_inner().is_finite()
    }
}
