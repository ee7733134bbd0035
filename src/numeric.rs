//! Sums, averages and chunking over slices.

use std::num::NonZeroUsize;

/// Sum and mean of a slice of numbers.
///
/// Empty slices average to zero. Integer averages use integer division.
///
/// # Example
///
/// ```rust
/// use garnish::numeric::Average;
///
/// assert_eq!([1i32, 2, 4].average(), 2);
/// assert_eq!([1.0f64, 2.0, 4.5].average(), 2.5);
/// assert_eq!(Vec::<u32>::new().average(), 0);
/// ```
pub trait Average {
    type Output;

    fn sum(&self) -> Self::Output;

    fn average(&self) -> Self::Output;
}

macro_rules! impl_average_int {
    ($wide:ty: $($t:ty),*) => {
        $(
            impl Average for [$t] {
                type Output = $t;

                fn sum(&self) -> $t {
                    self.iter().copied().sum()
                }

                fn average(&self) -> $t {
                    if self.is_empty() {
                        return 0;
                    }
                    // Summed in the wide type so neither the total nor the
                    // length wraps; the mean lies between the smallest and
                    // largest element, so it narrows back losslessly.
                    let total: $wide = self.iter().map(|&v| v as $wide).sum();
                    (total / self.len() as $wide) as $t
                }
            }
        )*
    };
}

macro_rules! impl_average_float {
    ($($t:ty),*) => {
        $(
            impl Average for [$t] {
                type Output = $t;

                fn sum(&self) -> $t {
                    self.iter().copied().sum()
                }

                fn average(&self) -> $t {
                    if self.is_empty() {
                        0.0
                    } else {
                        Average::sum(self) / self.len() as $t
                    }
                }
            }

            impl FloatSample for $t {
                const ZERO: $t = 0.0;

                fn from_count(count: usize) -> $t {
                    count as $t
                }
            }
        )*
    };
}

impl_average_int!(i128: i8, i16, i32, i64, i128, isize);
impl_average_int!(u128: u8, u16, u32, u64, u128, usize);
impl_average_float!(f32, f64);

impl<T, const N: usize> Average for [T; N]
where
    [T]: Average,
{
    type Output = <[T] as Average>::Output;

    fn sum(&self) -> Self::Output {
        self.as_slice().sum()
    }

    fn average(&self) -> Self::Output {
        self.as_slice().average()
    }
}

impl<T> Average for Vec<T>
where
    [T]: Average,
{
    type Output = <[T] as Average>::Output;

    fn sum(&self) -> Self::Output {
        self.as_slice().sum()
    }

    fn average(&self) -> Self::Output {
        self.as_slice().average()
    }
}

/// Floating-point element types accepted by [`average_non_zero`].
pub trait FloatSample:
    Copy + PartialOrd + std::iter::Sum<Self> + std::ops::Div<Output = Self>
{
    const ZERO: Self;

    fn from_count(count: usize) -> Self;
}

/// Mean of the strictly positive values, for readings where zero means
/// "no sample".
///
/// Returns zero when there are no positive values.
///
/// # Example
///
/// ```rust
/// use garnish::numeric::average_non_zero;
///
/// assert_eq!(average_non_zero(&[0.0f64, 4.0, 0.0, 8.0]), 6.0);
/// assert_eq!(average_non_zero(&[0.0f32, -1.0]), 0.0);
/// ```
pub fn average_non_zero<T: FloatSample>(values: &[T]) -> T {
    let positive: Vec<T> = values.iter().copied().filter(|&v| v > T::ZERO).collect();
    if positive.is_empty() {
        return T::ZERO;
    }
    let sum: T = positive.iter().copied().sum();
    sum / T::from_count(positive.len())
}

/// Splits `items` into consecutive chunks of `size`; the last may be shorter.
pub fn chunked<T: Clone>(items: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(size.get()).map(<[T]>::to_vec).collect()
}
