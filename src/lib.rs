/*!
`bitfloat` is a library of parametric binary floating-point numbers.
A single generic type [`Binary`] is parameterized by two compile-time
widths, an exponent width `E` and a trailing-significand width `M`, and
implements the IEEE 754 style encoding: one sign bit, `E` exponent bits,
`M` mantissa bits, a bias of `2^(E-1) - 1`, an implicit leading one for
normal numbers, and the usual subnormal, zero, infinity, and NaN
encodings. Standard formats are instantiations of the same generic:
[`Half`], [`Single`], [`Double`], and the oversized [`Wide64`].

This is the API documentation.

The library defines a universal trait for all number types [`Number`],
the packed value type [`Binary`] with its five-way classification
[`Class`], conversion between any two formats, and bit-level arithmetic
kernels for negation, addition, subtraction, multiplication, and a
class-total comparison order.
*/

pub mod binary;
pub mod math;
pub mod number;

mod util;

pub use crate::binary::{Binary, Class, Double, Half, NotOrdered, Single, Wide64};
pub use crate::number::Number;
