//! Saturate the wide accumulator into a 16 bit range.
use num::traits::Bounded;

/// interpolation math happens in this. wide enough to hold any difference of two 16 bit values
pub type Accumulator = i32;

/// `min <= max` is the caller's job. it is not checked
#[inline]
pub fn clip_unsigned(input: Accumulator, min: u16, max: u16) -> u16 {
    if input < Accumulator::from(min) {
        min
    } else if input > Accumulator::from(max) {
        max
    } else {
        // in range, so the cast can't truncate
        input as u16
    }
}

/// `min <= max` is the caller's job. it is not checked
#[inline]
pub fn clip_signed(input: Accumulator, min: i16, max: i16) -> i16 {
    if input < Accumulator::from(min) {
        min
    } else if input > Accumulator::from(max) {
        max
    } else {
        input as i16
    }
}

/// A 16 bit output type that an [`Accumulator`] can be clipped into.
pub trait Saturate: Copy + Bounded + Into<Accumulator> {
    fn clip(input: Accumulator, min: Self, max: Self) -> Self;

    /// clip to the type's own limits
    #[inline]
    fn saturate(input: Accumulator) -> Self {
        Self::clip(input, Self::min_value(), Self::max_value())
    }
}

impl Saturate for u16 {
    #[inline]
    fn clip(input: Accumulator, min: Self, max: Self) -> Self {
        clip_unsigned(input, min, max)
    }
}

impl Saturate for i16 {
    #[inline]
    fn clip(input: Accumulator, min: Self, max: Self) -> Self {
        clip_signed(input, min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Accumulator, Saturate, clip_signed, clip_unsigned};

    #[test]
    fn test_clip_unsigned_bounds() {
        assert_eq!(clip_unsigned(99, 100, 200), 100);
        assert_eq!(clip_unsigned(201, 100, 200), 200);
        assert_eq!(clip_unsigned(100, 100, 200), 100);
        assert_eq!(clip_unsigned(150, 100, 200), 150);
        assert_eq!(clip_unsigned(200, 100, 200), 200);

        assert_eq!(clip_unsigned(-1, 0, u16::MAX), 0);
        assert_eq!(clip_unsigned(65_536, 0, u16::MAX), u16::MAX);
        assert_eq!(clip_unsigned(Accumulator::MIN, 0, u16::MAX), 0);
        assert_eq!(clip_unsigned(Accumulator::MAX, 0, u16::MAX), u16::MAX);
    }

    #[test]
    fn test_clip_signed_bounds() {
        assert_eq!(clip_signed(-101, -100, 100), -100);
        assert_eq!(clip_signed(101, -100, 100), 100);
        assert_eq!(clip_signed(-100, -100, 100), -100);
        assert_eq!(clip_signed(0, -100, 100), 0);
        assert_eq!(clip_signed(100, -100, 100), 100);

        assert_eq!(clip_signed(-32_769, i16::MIN, i16::MAX), i16::MIN);
        assert_eq!(clip_signed(32_768, i16::MIN, i16::MAX), i16::MAX);
        assert_eq!(clip_signed(Accumulator::MIN, i16::MIN, i16::MAX), i16::MIN);
        assert_eq!(clip_signed(Accumulator::MAX, i16::MIN, i16::MAX), i16::MAX);
    }

    #[test]
    fn test_clip_is_idempotent() {
        for v in -1_000..=1_000 {
            let once = clip_signed(v, -300, 450);
            assert_eq!(clip_signed(once.into(), -300, 450), once);

            let once = clip_unsigned(v, 20, 700);
            assert_eq!(clip_unsigned(once.into(), 20, 700), once);
        }
    }

    #[test]
    fn test_clip_passes_through_in_range() {
        for v in 20..=700 {
            assert_eq!(Accumulator::from(clip_unsigned(v, 20, 700)), v);
        }
        for v in -300..=450 {
            assert_eq!(Accumulator::from(clip_signed(v, -300, 450)), v);
        }
    }

    #[test]
    fn test_min_equals_max() {
        assert_eq!(clip_unsigned(-5, 7, 7), 7);
        assert_eq!(clip_unsigned(500, 7, 7), 7);
        assert_eq!(clip_signed(-500, -7, -7), -7);
        assert_eq!(clip_signed(500, -7, -7), -7);
    }

    #[test]
    fn test_saturate_uses_type_limits() {
        assert_eq!(u16::saturate(-40_000), 0);
        assert_eq!(u16::saturate(70_000), u16::MAX);
        assert_eq!(u16::saturate(1_234), 1_234);

        assert_eq!(i16::saturate(-40_000), i16::MIN);
        assert_eq!(i16::saturate(40_000), i16::MAX);
        assert_eq!(i16::saturate(-1_234), -1_234);
    }
}
