// bitfloat: parametric binary floating-point numbers
//
// binary/ops.rs
//
// Arithmetic kernels: sign ops, add/sub, mul, comparison

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::warn;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::binary::{Binary, Class};
use crate::util::{bitmask, shr_round_wide, top_bit, wide_mul};

/// Error returned by [`Binary::try_cmp`] when at least one operand is
/// NaN and the operands therefore have no place in the total order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("comparison with a NaN operand is not ordered")]
pub struct NotOrdered;

impl<const E: u32, const M: u32> Binary<E, M> {
    /// Flips the sign bit. The exponent and mantissa fields, and
    /// therefore the class, are preserved bit-for-bit, NaN included.
    pub fn neg(self) -> Self {
        Self {
            sign: !self.sign,
            ..self
        }
    }

    /// Clears the sign bit, preserving the exponent and mantissa.
    pub fn abs(self) -> Self {
        Self {
            sign: false,
            ..self
        }
    }

    /// Adds two values of the same format.
    ///
    /// Finite nonzero operands are decoded, aligned at the smaller
    /// exponent in extended precision, combined sign-aware, and
    /// renormalized with rounding; overflow saturates to infinity and
    /// lost leading digits fall back into the subnormal range. An
    /// exact cancellation yields positive zero.
    pub fn add(self, rhs: Self) -> Self {
        match (self.class, rhs.class) {
            (Class::Nan, _) => return self,
            (_, Class::Nan) => return rhs,
            (Class::Inf, Class::Inf) => {
                // opposite infinities resolve to zero here, not NaN
                return if self.sign == rhs.sign {
                    self
                } else {
                    Self::zero()
                };
            }
            (Class::Inf, _) => return self,
            (_, Class::Inf) => return rhs,
            (Class::Zero, Class::Zero) => {
                return Self::signed_zero(self.sign && rhs.sign);
            }
            (Class::Zero, _) => return rhs,
            (_, Class::Zero) => return self,
            _ => {}
        }

        // order by magnitude of the exponent
        let (x, y) = if self.decode().1 < rhs.decode().1 {
            (rhs, self)
        } else {
            (self, rhs)
        };
        let (sx, ux, cx) = x.decode();
        let (sy, uy, cy) = y.decode();

        let d = ux - uy;
        if d > M as i64 {
            // the smaller operand is entirely below the rounding horizon
            return x;
        }

        // align at y's scale; the widened significand needs at most
        // M + d + 2 bits
        let a = (cx as u128) << d as u32;
        let b = cy as u128;
        let (sign, r) = if sx == sy {
            (sx, a + b)
        } else {
            match a.cmp(&b) {
                Ordering::Greater => (sx, a - b),
                Ordering::Less => (sy, b - a),
                Ordering::Equal => return Self::zero(),
            }
        };

        // biased exponent a significand with its top bit at M would
        // have at y's scale
        let base = if y.class == Class::Subnormal {
            1
        } else {
            y.exp as i64
        };

        let f = 127 - r.leading_zeros() as i64;
        if f >= M as i64 {
            // the significand grew: renormalize downward, rounding
            let mut c = shr_round_wide(r, (f - M as i64) as u32);
            let mut e = base + f - M as i64;
            if c > bitmask(M + 1) {
                c >>= 1;
                e += 1;
            }
            if e >= Self::EXP_MASK as i64 {
                return Self::infinity(sign);
            }
            Self::from_parts(sign, e as u64, c & Self::MAN_MASK)
        } else {
            // leading digits cancelled: renormalize upward into the
            // available exponent headroom, or go subnormal
            let headroom = base - 1;
            let need = M as i64 - f;
            if need <= headroom {
                let c = (r as u64) << need as u32;
                Self::from_parts(sign, (base - need) as u64, c & Self::MAN_MASK)
            } else {
                Self::from_parts(sign, 0, (r as u64) << headroom as u32)
            }
        }
    }

    /// Subtraction: addition with the right operand negated.
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Multiplies two values of the same format.
    ///
    /// The full double-width significand product is assembled from
    /// 32-bit limbs, its top bits are extracted as the candidate
    /// mantissa with rounding, and the biased exponent is clamped:
    /// underflow flushes to signed zero, overflow saturates to signed
    /// infinity.
    pub fn mul(self, rhs: Self) -> Self {
        let sign = self.sign ^ rhs.sign;
        match (self.class, rhs.class) {
            (Class::Nan, _) => return self,
            (_, Class::Nan) => return rhs,
            (Class::Zero, Class::Inf) | (Class::Inf, Class::Zero) => {
                // zero times infinity resolves to the infinite operand
                return Self::infinity(sign);
            }
            (Class::Zero, _) | (_, Class::Zero) => return Self::signed_zero(sign),
            (Class::Inf, _) | (_, Class::Inf) => return Self::infinity(sign),
            _ => {}
        }

        let (_, ux, cx) = self.decode();
        let (_, uy, cy) = rhs.decode();

        let (hi, lo) = wide_mul(cx, cy);
        let f = if hi != 0 {
            64 + top_bit(hi) as i64
        } else {
            top_bit(lo) as i64
        };

        // candidate mantissa: the product's top bits down to width M + 1
        let shift = f - M as i64;
        let mut c = if shift > 0 {
            let shift = shift as u32;
            let kept = (lo >> shift) | (hi << (64 - shift));
            if lo & bitmask(shift) != 0 {
                kept + 1
            } else {
                kept
            }
        } else {
            lo << (-shift) as u32
        };

        let mut e = ux + uy + f - 2 * M as i64 + Self::BIAS;
        if c > bitmask(M + 1) {
            c >>= 1;
            e += 1;
        }
        if e <= 0 {
            // flush underflow past the normal range to zero
            return Self::signed_zero(sign);
        }
        if e >= Self::EXP_MASK as i64 {
            return Self::infinity(sign);
        }
        Self::from_parts(sign, e as u64, c & Self::MAN_MASK)
    }

    /// Class-total order over non-NaN values: zeros of either sign are
    /// equal, a negative value is below any positive one, and
    /// same-sign values compare by `(exponent, mantissa)`, inverted
    /// when both are negative.
    fn order(self, other: Self) -> Option<Ordering> {
        if self.class == Class::Nan || other.class == Class::Nan {
            return None;
        }
        if self.class == Class::Zero && other.class == Class::Zero {
            return Some(Ordering::Equal);
        }
        match (self.sign, other.sign) {
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (sign, _) => {
                let ord = (self.exp, self.man).cmp(&(other.exp, other.man));
                Some(if sign { ord.reverse() } else { ord })
            }
        }
    }

    /// Compares two values, reporting a NaN operand as a typed error
    /// rather than the silent `false` of the comparison operators.
    pub fn try_cmp(self, other: Self) -> Result<Ordering, NotOrdered> {
        match self.order(other) {
            Some(ord) => Ok(ord),
            None => {
                warn!("comparison with a NaN operand is not ordered");
                Err(NotOrdered)
            }
        }
    }
}

impl<const E: u32, const M: u32> PartialEq for Binary<E, M> {
    fn eq(&self, other: &Self) -> bool {
        self.order(*other) == Some(Ordering::Equal)
    }
}

impl<const E: u32, const M: u32> PartialOrd for Binary<E, M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.order(*other)
    }
}

impl<const E: u32, const M: u32> Neg for Binary<E, M> {
    type Output = Self;

    fn neg(self) -> Self {
        Binary::neg(self)
    }
}

impl<const E: u32, const M: u32> Add for Binary<E, M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Binary::add(self, rhs)
    }
}

impl<const E: u32, const M: u32> Sub for Binary<E, M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Binary::sub(self, rhs)
    }
}

impl<const E: u32, const M: u32> Mul for Binary<E, M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Binary::mul(self, rhs)
    }
}

impl<const E: u32, const M: u32> AddAssign for Binary<E, M> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Binary::add(*self, rhs);
    }
}

impl<const E: u32, const M: u32> SubAssign for Binary<E, M> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Binary::sub(*self, rhs);
    }
}

impl<const E: u32, const M: u32> MulAssign for Binary<E, M> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Binary::mul(*self, rhs);
    }
}

impl<const E: u32, const M: u32> Zero for Binary<E, M> {
    fn zero() -> Self {
        Binary::zero()
    }

    fn is_zero(&self) -> bool {
        self.class == Class::Zero
    }
}

impl<const E: u32, const M: u32> One for Binary<E, M> {
    fn one() -> Self {
        Binary::one()
    }
}
