// bitfloat: parametric binary floating-point numbers
//
// binary/convert.rs
//
// Format-to-format transformation

use log::trace;

use crate::binary::{Binary, Class};
use crate::util::shr_round;

impl<const E: u32, const M: u32> Binary<E, M> {
    /// Converts a value of any other format into this one.
    ///
    /// Zero, infinity, and NaN carry over class and sign; a NaN
    /// mantissa is clamped to at least 1 so the class survives
    /// narrowing. Subnormal mantissas are realigned to the new width,
    /// truncating on narrowing. Normal numbers are re-centered around
    /// the target bias: values above the target's finite range
    /// overflow to infinity, values below its normal range are
    /// subnormalized, and everything else is widened exactly or
    /// narrowed with rounding.
    pub fn from_format<const SE: u32, const SM: u32>(src: Binary<SE, SM>) -> Self {
        if SE == E && SM == M {
            return Self::from_parts(src.sign, src.exp, src.man);
        }
        match src.class {
            Class::Zero => Self::signed_zero(src.sign),
            Class::Inf => Self::infinity(src.sign),
            Class::Subnormal => {
                let man = if M >= SM {
                    src.man << (M - SM)
                } else {
                    src.man >> (SM - M)
                };
                Self::from_parts(src.sign, 0, man)
            }
            Class::Nan => {
                let man = if M >= SM {
                    src.man << (M - SM)
                } else {
                    (src.man >> (SM - M)).max(1)
                };
                Self::from_parts(src.sign, Self::EXP_MASK, man)
            }
            Class::Normal => Self::from_normal(src),
        }
    }

    /// Converts this value into another format.
    pub fn convert<const E2: u32, const M2: u32>(self) -> Binary<E2, M2> {
        Binary::from_format(self)
    }

    fn from_normal<const SE: u32, const SM: u32>(src: Binary<SE, SM>) -> Self {
        let sign = src.sign;

        // re-center the biased exponent around the target bias
        let e = src.exp as i64 - Binary::<SE, SM>::BIAS + Self::BIAS;
        if e >= Self::EXP_MASK as i64 {
            trace!("conversion overflowed to infinity");
            return Self::infinity(sign);
        }
        if e <= 0 {
            return Self::subnormalize::<SM>(sign, e, src.man);
        }

        if M >= SM {
            // widening is exact
            return Self::from_parts(sign, e as u64, src.man << (M - SM));
        }

        // narrowing rounds; a carry out of the mantissa bumps the
        // exponent and may cascade into infinity
        let man = shr_round(src.man, SM - M);
        if man > Self::MAN_MASK {
            if e + 1 >= Self::EXP_MASK as i64 {
                trace!("rounding carry cascaded to infinity");
                return Self::infinity(sign);
            }
            return Self::from_parts(sign, (e + 1) as u64, 0);
        }
        Self::from_parts(sign, e as u64, man)
    }

    /// A normal source that lands at or below biased exponent 0 in the
    /// target format: shift the full significand down into the
    /// subnormal range, rounding. A nonzero input never truncates to
    /// true zero; past the bottom of the subnormal range the mantissa
    /// clamps to the minimum magnitude 1, keeping the sign observable.
    fn subnormalize<const SM: u32>(sign: bool, e: i64, man: u64) -> Self {
        trace!("conversion underflowed into the subnormal range");
        let full = man | (1u64 << SM);

        // realign to the target width, deferring a narrowing shift so
        // the residue is collected in one rounding step
        let (full, width, extra) = if M >= SM {
            (full << (M - SM), M + 1, 0)
        } else {
            (full, SM + 1, SM - M)
        };

        let shift = (1 - e) as u64 + extra as u64;
        if shift > width as u64 {
            return Self::from_parts(sign, 0, 1);
        }
        let man = shr_round(full, shift as u32);
        if man > Self::MAN_MASK {
            // rounded all the way back up to the smallest normal
            return Self::from_parts(sign, 1, 0);
        }
        Self::from_parts(sign, 0, man)
    }
}
