// bitfloat: parametric binary floating-point numbers
//
// number.rs
//
// Number trait
//

/// The "digital" number representing a (projective) real number format.
///
/// Every encoding in this crate can be viewed as a finite-precision
/// number in scientific notation: `(-1)^s * c * b^exp` where `s` is the
/// sign, `c` is the integer significand, `b` is the radix, and `exp` is
/// the exponent. Specifically, `s` is either `0` or `1`, `c` is
/// non-negative, and `b` is positive. Encodings may also represent
/// non-real values, notably infinity or NaN.
///
/// Significands in this crate are bounded, so `c` is an ordinary
/// unsigned machine integer rather than an arbitrary-precision one.
pub trait Number {
    /// Returns the radix of a number.
    /// It must be strictly positive.
    fn radix() -> usize;

    /// Returns true if the number's sign bit is set.
    fn sign(&self) -> bool;

    /// Viewing this number as `(-1)^s * c * b^exp` where `c` is an
    /// integer, returns `exp`. Only well-defined for finite, non-zero
    /// numbers.
    fn exp(&self) -> Option<i64>;

    /// Viewing this number as `(-1)^s * f * b^e` where `f` is a binary
    /// fraction between 1 and 2, returns the exponent `e`. This is the
    /// preferred IEEE 754 interpretation of an exponent. Only
    /// well-defined for finite, non-zero numbers.
    fn e(&self) -> Option<i64>;

    /// Viewing this number as `(-1)^s * c * b^exp` where `c` is an
    /// integer, returns `c`. Only well-defined for finite numbers.
    fn c(&self) -> Option<u64>;

    /// Precision of the significand: the number of binary digits
    /// required to encode `c`. For values that do not encode finite
    /// numbers the result is 0.
    fn p(&self) -> u32;

    /// Returns true if this number is not a real number.
    /// Example: NaN or +/-Inf from the IEEE 754 standard.
    fn is_nar(&self) -> bool;

    /// Returns true if this number is finite.
    fn is_finite(&self) -> bool;

    /// Returns true if this number is infinite.
    fn is_infinite(&self) -> bool;

    /// Returns true if this number is zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this number is negative.
    /// This is not always well-defined, so the result is an Option.
    /// This is not necessarily the same as the sign bit (IEEE 754
    /// differentiates between -0.0 and +0.0).
    fn is_negative(&self) -> Option<bool>;

    /// Returns true if this number represents a numerical value,
    /// i.e., anything except NaN.
    fn is_numerical(&self) -> bool;
}
