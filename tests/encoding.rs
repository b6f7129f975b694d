// bitfloat: parametric binary floating-point numbers
//
// encoding.rs
//
// Tests for the packed encoding, classification, and the host bridge

use bitfloat::{Binary, Class, Double, Half, Number, Single, Wide64};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_class(bits: u64, class: Class) {
    let x = Half::from_bits(bits);
    assert_eq!(x.class(), class, "wrong class for bits {:#06x}", bits);
}

#[test]
fn classify() {
    assert_class(0x0000, Class::Zero);
    assert_class(0x8000, Class::Zero);
    assert_class(0x0001, Class::Subnormal);
    assert_class(0x03FF, Class::Subnormal);
    assert_class(0x0400, Class::Normal);
    assert_class(0x3C00, Class::Normal);
    assert_class(0x7BFF, Class::Normal);
    assert_class(0x7C00, Class::Inf);
    assert_class(0xFC00, Class::Inf);
    assert_class(0x7C01, Class::Nan);
    assert_class(0xFE00, Class::Nan);
}

#[test]
fn default_is_positive_zero() {
    let x = Double::default();
    assert_eq!(x.to_bits(), 0);
    assert_eq!(x.class(), Class::Zero);
    assert!(!x.sign());
}

#[test]
fn bits_roundtrip_half_exhaustive() {
    for bits in 0..=0xFFFFu64 {
        let x = Half::from_bits(bits);
        assert_eq!(x.to_bits(), bits, "bit image {:#06x} did not survive", bits);
    }
}

#[test]
fn bits_roundtrip_double_random() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..10_000 {
        let bits: u64 = rng.gen();
        assert_eq!(Double::from_bits(bits).to_bits(), bits);
    }
}

#[test]
fn bits_above_the_image_are_ignored() {
    let x = Half::from_bits(0xDEAD_0000_0000_3C00);
    assert_eq!(x.to_bits(), 0x3C00);
}

#[test]
fn format_constants() {
    assert_eq!(Half::BITS, 16);
    assert_eq!(Half::EXP_MASK, 0x1F);
    assert_eq!(Half::MAN_MASK, 0x3FF);
    assert_eq!(Half::BIAS, 15);

    assert_eq!(Double::BITS, 64);
    assert_eq!(Double::BIAS, 1023);

    assert_eq!(Wide64::BITS, 64);
    assert_eq!(Wide64::BIAS, 0x7FFF_FFFF);
}

#[test]
fn named_values() {
    assert_eq!(Half::min_positive().to_bits(), 0x0001);
    assert_eq!(Half::min_normal().to_bits(), 0x0400);
    assert_eq!(Half::max_finite().to_bits(), 0x7BFF);
    assert_eq!(Half::one().to_bits(), 0x3C00);
    assert_eq!(Half::infinity(true).to_bits(), 0xFC00);
    assert!(Half::nan().is_nan());
}

#[test]
fn from_integer() {
    // integer two and double literal two share one bit image
    assert_eq!(Double::from(2i64).to_bits(), 0x4000_0000_0000_0000);
    assert_eq!(Double::from(2.0f64).to_bits(), 0x4000_0000_0000_0000);

    assert_eq!(Double::from(0i64).to_bits(), 0);
    assert_eq!(Double::from(1i64).to_bits(), (1.0f64).to_bits());
    assert_eq!(Double::from(-1i64).to_bits(), (-1.0f64).to_bits());
    assert_eq!(Double::from(3i64).to_bits(), (3.0f64).to_bits());
    assert_eq!(Double::from(i64::MIN).to_bits(), (-(2f64.powi(63))).to_bits());
    assert_eq!(Double::from(7i32).to_bits(), (7.0f64).to_bits());
}

#[test]
fn from_integer_narrow_mantissa_rounds() {
    // 2049 needs 12 significand bits; the discarded low one rounds the
    // mantissa away from zero, to 2050
    let x = Half::from(2049i64);
    assert_eq!(x.to_bits(), 0x6801);

    // an exactly representable neighbor stays exact
    assert_eq!(Half::from(2048i64).to_bits(), 0x6800);
}

#[test]
fn from_integer_overflows_to_infinity() {
    assert_eq!(Half::from(65536i64).to_bits(), 0x7C00);
    assert_eq!(Half::from(-65536i64).to_bits(), 0xFC00);

    // rounding up from just below the largest finite also cascades
    assert_eq!(Half::from(65519i64).to_bits(), 0x7C00);
    // while the largest finite itself is representable
    assert_eq!(Half::from(65504i64).to_bits(), 0x7BFF);
}

#[test]
fn native_float_bridge() {
    assert_eq!(Single::from(1.5f32).to_bits(), (1.5f32).to_bits() as u64);
    assert_eq!(f32::from(Single::from(1.5f32)), 1.5f32);

    assert_eq!(Double::from(0.1f64).to_bits(), (0.1f64).to_bits());
    assert_eq!(f64::from(Double::from(0.1f64)), 0.1f64);

    // native NaN and infinities carry their class across the bridge
    assert!(Double::from(f64::NAN).is_nan());
    assert!(Single::from(f32::INFINITY).is_infinite());
    assert!(Double::from(f64::NEG_INFINITY).sign());
}

#[test]
fn wide_format() {
    let one = Wide64::from(1i64);
    assert_eq!(one.to_bits(), 0x3FFF_FFFF_8000_0000);
    assert_eq!(f64::from(one), 1.0);
    assert_eq!(f64::from(Wide64::from(2.5f64)), 2.5);
}

#[test]
fn number_trait_views() {
    let one = Double::one();
    assert!(!Number::sign(&one));
    assert_eq!(one.exp(), Some(-52));
    assert_eq!(one.e(), Some(0));
    assert_eq!(one.c(), Some(1u64 << 52));
    assert_eq!(one.p(), 53);
    assert!(one.is_finite() && one.is_numerical() && !one.is_nar());

    let tiny = Half::from_bits(0x0001);
    assert_eq!(tiny.exp(), Some(-24));
    assert_eq!(tiny.e(), Some(-24));
    assert_eq!(tiny.c(), Some(1));
    assert_eq!(tiny.p(), 1);

    let inf = Half::infinity(false);
    assert_eq!(inf.exp(), None);
    assert_eq!(Number::c(&inf), None);
    assert!(inf.is_nar() && !inf.is_finite());
    assert_eq!(inf.is_negative(), Some(false));

    let nan = Half::nan();
    assert_eq!(nan.is_negative(), None);
    assert!(!nan.is_numerical());
    assert_eq!(<Half as Number>::radix(), 2);
}

#[test]
fn class_stays_consistent_with_fields() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10_000 {
        let x = Double::from_bits(rng.gen());
        let expect = match (x.exponent(), x.significand()) {
            (0, 0) => Class::Zero,
            (0, _) => Class::Subnormal,
            (e, 0) if e == Double::EXP_MASK => Class::Inf,
            (e, _) if e == Double::EXP_MASK => Class::Nan,
            _ => Class::Normal,
        };
        assert_eq!(x.class(), expect);
    }
}

#[test]
fn custom_formats_classify() {
    // a deliberately lopsided format still follows the class table
    type Tiny = Binary<3, 2>;
    assert_eq!(Tiny::from_bits(0b0_000_00).class(), Class::Zero);
    assert_eq!(Tiny::from_bits(0b0_000_01).class(), Class::Subnormal);
    assert_eq!(Tiny::from_bits(0b0_011_00).class(), Class::Normal);
    assert_eq!(Tiny::from_bits(0b0_111_00).class(), Class::Inf);
    assert_eq!(Tiny::from_bits(0b0_111_10).class(), Class::Nan);
    assert_eq!(Tiny::BIAS, 3);
}
