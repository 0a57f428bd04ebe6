//! Floating-point width abstraction for the reconstruction pipeline.
//!
//! Decode, unprojection and shading are written once against [`Real`] and
//! instantiated for `f64` and `f32`. Transcendental functions go through
//! `libm` so both instantiations give the same bits on every platform.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type the pipeline can be evaluated in.
pub trait Real:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;

    /// Name used in logs ("double" / "float").
    const NAME: &'static str;

    /// Narrow (or keep) an f64 value. Rounds to nearest for `f32`.
    fn from_f64(value: f64) -> Self;

    /// Widen (or keep) a stored `f32` sample. Always exact.
    fn from_f32(value: f32) -> Self;

    /// Convert a pixel index or image dimension.
    fn from_u32(value: u32) -> Self;

    fn to_f64(self) -> f64;

    /// `self` raised to `exponent`.
    fn powf(self, exponent: Self) -> Self;

    fn sqrt(self) -> Self;

    fn log2(self) -> Self;

    /// Truncate toward zero into a byte, saturating outside [0, 255].
    /// NaN maps to 0.
    fn trunc_to_u8(self) -> u8;
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const NAME: &'static str = "double";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        value as f64
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        value as f64
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline]
    fn log2(self) -> Self {
        libm::log2(self)
    }

    #[inline]
    fn trunc_to_u8(self) -> u8 {
        self as u8
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HALF: Self = 0.5;
    const NAME: &'static str = "float";

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline]
    fn from_u32(value: u32) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    #[inline]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline]
    fn log2(self) -> Self {
        libm::log2f(self)
    }

    #[inline]
    fn trunc_to_u8(self) -> u8 {
        self as u8
    }
}
