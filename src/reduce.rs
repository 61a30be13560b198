/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Argument reduction performed by the RRSIN, RRCOS and RRLOG2 instructions.
//!
//! Angles are measured in quarter turns: the hardware evaluates `sin(pi/2 x)`,
//! therefore reducing by the period is exact integer work on the significand.
use crate::bits::{
    EXPONENT_BIAS, HIDDEN_BIT, MANTISSA_MASK, biased_exponent, copysignfk, from_fields,
    mantissa_bits, sign_bit,
};

/// Splits `|x|` for `1 <= |x| < 2^25` into its integer part modulo 4 and
/// its exact fractional part.
#[inline]
fn quadrant_and_fraction(x: f32) -> (u32, f32) {
    let exponent = biased_exponent(x) as i32 - EXPONENT_BIAS;
    debug_assert!((0..=24).contains(&exponent));
    let mantissa = mantissa_bits(x);
    if exponent == 24 {
        // every value is an even integer here, the hidden bit is 0 mod 4
        return ((mantissa << 1) & 3, 0.);
    }
    let integer = (mantissa | HIDDEN_BIT) >> (23 - exponent);
    let fraction_bits = (mantissa << exponent) & MANTISSA_MASK;
    // Fraction is exact: it is a multiple of 2^(exponent - 23) below one
    let fraction = fraction_bits as f32 * f32::from_bits(0x34000000);
    (integer & 3, fraction)
}

/// Reduces argument of `sin(pi/2 x)` into [-1, 1].
///
/// The result `r` satisfies `sin(pi/2 x) == sin(pi/2 r)`:
/// - `rrsin(NaN) = NaN`, `rrsin(+-inf) = NaN`
/// - `rrsin(+-0) = +-0`, subnormals and `|x| < 1` are returned unchanged
/// - values with exponent above 24 are multiples of four and give a signed zero
/// - otherwise `frac(|x|)`, `1 - frac(|x|)`, `-frac(|x|)`, `frac(|x|) - 1`
///   for `[|x|] mod 4` equal to 0, 1, 2, 3, with the sign of `x` applied.
pub fn rrsin(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f32::NAN;
    }
    let exponent = biased_exponent(x) as i32 - EXPONENT_BIAS;
    if exponent < 0 {
        return x;
    }
    if exponent > 24 {
        return copysignfk(0., x);
    }
    let (quadrant, fraction) = quadrant_and_fraction(x);
    let r = match quadrant {
        0 => fraction,
        1 => 1. - fraction,
        2 => -fraction,
        _ => -(1. - fraction),
    };
    if sign_bit(x) != 0 { -r } else { r }
}

/// Reduces argument of `cos(pi/2 x)` into [-1, 1].
///
/// The result `r` satisfies `cos(pi/2 x) == sin(pi/2 r)`, so the same
/// sinc kernel serves both functions. Cosine is even, sign of `x` is ignored:
/// - `rrcos(NaN) = NaN`, `rrcos(+-inf) = NaN`
/// - `rrcos(+-0) = 1` and the same for subnormals
/// - `rrcos(x) = 1 - |x|` for `|x| < 1`
/// - values with exponent above 24 are multiples of four and give one
/// - otherwise `1 - frac(|x|)`, `-frac(|x|)`, `frac(|x|) - 1`, `frac(|x|)`
///   for `[|x|] mod 4` equal to 0, 1, 2, 3.
pub fn rrcos(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return f32::NAN;
    }
    if biased_exponent(x) == 0 {
        return 1.;
    }
    let exponent = biased_exponent(x) as i32 - EXPONENT_BIAS;
    if exponent < 0 {
        return 1. - x.abs();
    }
    if exponent > 24 {
        return 1.;
    }
    let (quadrant, fraction) = quadrant_and_fraction(x);
    match quadrant {
        0 => 1. - fraction,
        1 => -fraction,
        2 => -(1. - fraction),
        _ => fraction,
    }
}

/// Mantissa half of the log2 reduction.
///
/// Normal values keep their sign and get a zero exponent, so `|rrlog2m(x)|`
/// lies in [1, 2). NaN, infinities, zeros and subnormals pass through.
pub fn rrlog2m(x: f32) -> f32 {
    if !x.is_normal() {
        return x;
    }
    from_fields(sign_bit(x), EXPONENT_BIAS as u32, mantissa_bits(x))
}

/// Exponent half of the log2 reduction.
///
/// Unbiased exponent of a normal `x` as a float, zero for everything else.
pub fn rrlog2e(x: f32) -> f32 {
    if !x.is_normal() {
        return 0.;
    }
    (biased_exponent(x) as i32 - EXPONENT_BIAS) as f32
}

/// Positive normal value split as `mantissa * 2^exponent`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MantissaExponent {
    /// Lies in [1, 2)
    pub mantissa: f32,
    pub exponent: i32,
}

impl MantissaExponent {
    /// Typed form of [rrlog2m] and [rrlog2e].
    ///
    /// Returns `None` outside the domain of the logarithm reduction:
    /// non positive values, NaN, infinities and subnormals.
    pub fn new(x: f32) -> Option<MantissaExponent> {
        if !x.is_normal() || x < 0. {
            return None;
        }
        Some(MantissaExponent {
            mantissa: rrlog2m(x),
            exponent: rrlog2e(x) as i32,
        })
    }

    /// Scales mantissa back, exact for every value produced by [MantissaExponent::new]
    pub fn value(&self) -> f32 {
        let biased = (self.exponent + EXPONENT_BIAS) as u32;
        from_fields(0, biased, mantissa_bits(self.mantissa))
    }
}

/// Alias of [rrsin]
#[inline]
pub fn reduce_sin(x: f32) -> f32 {
    rrsin(x)
}

/// Alias of [rrcos]
#[inline]
pub fn reduce_cos(x: f32) -> f32 {
    rrcos(x)
}

/// Alias of [rrlog2m]
#[inline]
pub fn reduce_log2_mantissa(x: f32) -> f32 {
    rrlog2m(x)
}

/// Alias of [rrlog2e]
#[inline]
pub fn reduce_log2_exponent(x: f32) -> f32 {
    rrlog2e(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_sin(x: f64) -> f64 {
        (std::f64::consts::FRAC_PI_2 * x).sin()
    }

    fn quarter_cos(x: f64) -> f64 {
        (std::f64::consts::FRAC_PI_2 * x).cos()
    }

    #[test]
    fn test_rrsin_special() {
        assert!(rrsin(f32::NAN).is_nan());
        assert!(rrsin(f32::INFINITY).is_nan());
        assert!(rrsin(f32::NEG_INFINITY).is_nan());
        assert_eq!(rrsin(0.0).to_bits(), 0);
        assert_eq!(rrsin(-0.0).to_bits(), (-0.0f32).to_bits());
        let tiny = f32::from_bits(7);
        assert_eq!(rrsin(tiny), tiny);
        assert_eq!(rrsin(1e30).to_bits(), 0);
        assert_eq!(rrsin(-1e30).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn test_rrsin_quadrants() {
        assert_eq!(rrsin(0.25), 0.25);
        assert_eq!(rrsin(1.25), 0.75);
        assert_eq!(rrsin(2.25), -0.25);
        assert_eq!(rrsin(3.25), -0.75);
        assert_eq!(rrsin(4.25), 0.25);
        assert_eq!(rrsin(-1.25), -0.75);
        assert_eq!(rrsin(-3.25), 0.75);
        assert_eq!(rrsin(1.0), 1.0);
        assert_eq!(rrsin(3.0), -1.0);
    }

    #[test]
    fn test_rrsin_keeps_reduced_values() {
        for i in -999..1000 {
            let x = i as f32 / 1000.;
            assert_eq!(rrsin(x).to_bits(), x.to_bits());
        }
    }

    #[test]
    fn test_rrsin_preserves_sine() {
        for i in -100000..100000 {
            let x = i as f32 / 137.;
            let r = rrsin(x);
            assert!((-1.0..=1.0).contains(&r));
            let diff = (quarter_sin(r as f64) - quarter_sin(x as f64)).abs();
            assert!(diff < 1e-9, "rrsin({x}) = {r}, diff {diff}");
        }
    }

    #[test]
    fn test_rrsin_large_arguments() {
        // 1e7 periods of four quarter turns, exact in single precision
        let base = 4e7f32;
        assert_eq!(rrsin(base), 0.);
        assert_eq!(rrsin(base + 4.), 0.);
        assert_eq!(rrsin(1.6777218e7), -0.0);
        assert_eq!(rrsin(8388609.), 1.0);
        assert_eq!(rrsin(8388611.), -1.0);
        assert_eq!(rrsin(4194305.5), 0.5);
        assert_eq!(rrsin(4194306.5), -0.5);
    }

    #[test]
    fn test_rrcos() {
        assert!(rrcos(f32::NAN).is_nan());
        assert!(rrcos(f32::INFINITY).is_nan());
        assert_eq!(rrcos(0.0), 1.0);
        assert_eq!(rrcos(-0.0), 1.0);
        assert_eq!(rrcos(f32::from_bits(1)), 1.0);
        assert_eq!(rrcos(0.25), 0.75);
        assert_eq!(rrcos(-0.25), 0.75);
        assert_eq!(rrcos(1.25), -0.25);
        assert_eq!(rrcos(2.25), -0.75);
        assert_eq!(rrcos(3.25), 0.25);
        assert_eq!(rrcos(1e30), 1.0);
        for i in -100000..100000 {
            let x = i as f32 / 61.;
            let r = rrcos(x);
            assert!((-1.0..=1.0).contains(&r));
            // 1 - |x| is rounded once below a quarter turn, exact above
            let tolerance = if x.abs() < 1. {
                assert_eq!(r.to_bits(), ((1. - x.abs() as f64) as f32).to_bits());
                std::f64::consts::FRAC_PI_2 * 2f64.powi(-25)
            } else {
                1e-9
            };
            let diff = (quarter_sin(r as f64) - quarter_cos(x as f64)).abs();
            assert!(diff < tolerance, "rrcos({x}) = {r}, diff {diff}");
        }
    }

    #[test]
    fn test_rrlog2() {
        assert_eq!(rrlog2m(12.0), 1.5);
        assert_eq!(rrlog2e(12.0), 3.0);
        assert_eq!(rrlog2m(-0.375), -1.5);
        assert_eq!(rrlog2e(-0.375), -2.0);
        assert_eq!(rrlog2m(f32::INFINITY), f32::INFINITY);
        assert_eq!(rrlog2m(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(rrlog2m(f32::NAN).is_nan());
        assert_eq!(rrlog2e(f32::NAN), 0.);
        assert_eq!(rrlog2e(f32::INFINITY), 0.);
        assert_eq!(rrlog2e(f32::from_bits(3)), 0.);
        assert_eq!(rrlog2m(f32::from_bits(3)), f32::from_bits(3));
        assert_eq!(rrlog2e(f32::MIN_POSITIVE), -126.);
        assert_eq!(rrlog2e(f32::MAX), 127.);
    }

    #[test]
    fn test_rrlog2_reconstructs() {
        let mut x = 1e-37f32;
        while x < 1e37 {
            let m = rrlog2m(x);
            let e = rrlog2e(x);
            assert!((1.0..2.0).contains(&m));
            assert_eq!(m * 2f32.powi(e as i32), x);
            assert_eq!(rrlog2m(m), m);
            x *= 1.37;
        }
    }

    #[test]
    fn test_mantissa_exponent() {
        assert_eq!(MantissaExponent::new(0.0), None);
        assert_eq!(MantissaExponent::new(-2.0), None);
        assert_eq!(MantissaExponent::new(f32::INFINITY), None);
        assert_eq!(MantissaExponent::new(f32::from_bits(9)), None);
        let split = MantissaExponent::new(40.0).unwrap();
        assert_eq!(split.mantissa, 1.25);
        assert_eq!(split.exponent, 5);
        assert_eq!(split.value(), 40.0);
        assert_eq!(MantissaExponent::new(f32::MIN_POSITIVE).unwrap().value(), f32::MIN_POSITIVE);
    }
}
