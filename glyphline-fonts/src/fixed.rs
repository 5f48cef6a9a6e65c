//! 26.6 fixed-point numbers.
//!
//! The shaping engine reports positions in 26.6 fixed point: 26 integer bits
//! and 6 fractional bits, so one unit is 1/64 pixel. Converting a pixel value
//! in and back out loses less than 1/64 pixel.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed 26.6 fixed-point value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed26_6(pub i32);

impl Fixed26_6 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << 6);

    /// An integer number of pixels.
    pub const fn from_int(pixels: i32) -> Self {
        Self(pixels << 6)
    }

    /// Convert pixels to fixed point, truncating toward zero.
    pub fn from_f32(pixels: f32) -> Self {
        Self((f64::from(pixels) * 64.0) as i32)
    }

    /// Convert back to pixels.
    pub fn to_f32(self) -> f32 {
        (f64::from(self.0) / 64.0) as f32
    }

    /// Scale a value in font design units to this pixel size.
    ///
    /// `units_per_em` of zero yields zero rather than dividing by it.
    pub fn scale_units(self, units: f32, units_per_em: u16) -> Self {
        if units_per_em == 0 {
            return Self::ZERO;
        }
        Self::from_f32(units * self.to_f32() / f32::from(units_per_em))
    }
}

impl Add for Fixed26_6 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed26_6 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Fixed26_6 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Fixed26_6 {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Fixed26_6 {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Fixed26_6 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_within_one_64th() {
        for px in [0.0f32, 1.0, 12.3, 13.999, 17.5, 255.015_625, 1024.77, -3.2] {
            let back = Fixed26_6::from_f32(px).to_f32();
            assert!(
                (back - px).abs() < 1.0 / 64.0,
                "{px} came back as {back}"
            );
        }
    }

    #[test]
    fn test_exact_values() {
        assert_eq!(Fixed26_6::from_int(3), Fixed26_6(192));
        assert_eq!(Fixed26_6::from_f32(0.5), Fixed26_6(32));
        assert_eq!(Fixed26_6(96).to_f32(), 1.5);
        assert_eq!(Fixed26_6::ONE.to_f32(), 1.0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 1/128 is below the format's precision
        assert_eq!(Fixed26_6::from_f32(1.0 / 128.0), Fixed26_6::ZERO);
        assert_eq!(Fixed26_6::from_f32(-1.0 / 128.0), Fixed26_6::ZERO);
    }

    #[test]
    fn test_scale_units() {
        let size = Fixed26_6::from_int(16);
        assert_eq!(size.scale_units(1000.0, 2000), Fixed26_6::from_int(8));
        assert_eq!(size.scale_units(1000.0, 0), Fixed26_6::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let a = Fixed26_6::from_int(2);
        let b = Fixed26_6::from_f32(0.5);
        assert_eq!((a + b).to_f32(), 2.5);
        assert_eq!((a - b).to_f32(), 1.5);
        assert_eq!((-b).to_f32(), -0.5);
        let total: Fixed26_6 = [a, b, b].into_iter().sum();
        assert_eq!(total, Fixed26_6::from_int(3));
    }
}
