// src/numerics/types/traits.rs
// Numeric element trait used by the matrix type.

use num_traits::NumAssign;

/// Numeric is the element bound for [`Matrix`](super::matrix::Matrix).
///
/// It collects the arithmetic surface the matrix operations rely on
/// (zero/one constants, the four binary operators and their assigning
/// forms, ordering) and adds [`approx_eq`](Numeric::approx_eq), the
/// tolerance rule behind matrix equality.
///
/// The trait is implemented for the primitive integer and floating
/// point types only, so instantiating `Matrix` with a non-numeric
/// element type is rejected at compile time.
pub trait Numeric: NumAssign + Copy + PartialOrd + 'static {
    /// Element equality under the type's tolerance rule: exact for
    /// integers, epsilon-scaled (`|a-b| <= max(|a|,|b|) * EPSILON`)
    /// for floating point.
    fn approx_eq(self, other: Self) -> bool;
}

macro_rules! numeric_exact {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn approx_eq(self, other: Self) -> bool {
                self == other
            }
        }
    )*};
}

macro_rules! numeric_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() <= self.abs().max(other.abs()) * <$t>::EPSILON
            }
        }
    )*};
}

numeric_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_float!(f32, f64);
