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
pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
pub(crate) const EXPONENT_MASK: u32 = 0x7f80_0000;
pub(crate) const MANTISSA_MASK: u32 = 0x007f_ffff;
pub(crate) const HIDDEN_BIT: u32 = 1 << 23;
pub(crate) const EXPONENT_BIAS: i32 = 127;

/// Biased exponent field of a single precision value
#[inline(always)]
pub(crate) const fn biased_exponent(x: f32) -> u32 {
    (x.to_bits() & EXPONENT_MASK) >> 23
}

/// Stored mantissa bits without the implicit leading one
#[inline(always)]
pub(crate) const fn mantissa_bits(x: f32) -> u32 {
    x.to_bits() & MANTISSA_MASK
}

#[inline(always)]
pub(crate) const fn sign_bit(x: f32) -> u32 {
    x.to_bits() & SIGN_MASK
}

/// Packs raw fields back into a float, `exponent` is biased
#[inline(always)]
pub(crate) const fn from_fields(sign: u32, exponent: u32, mantissa: u32) -> f32 {
    f32::from_bits(
        (sign & SIGN_MASK) | ((exponent << 23) & EXPONENT_MASK) | (mantissa & MANTISSA_MASK),
    )
}

/// Copies sign from `y` to `x`
#[inline]
pub(crate) const fn copysignfk(x: f32, y: f32) -> f32 {
    f32::from_bits((x.to_bits() & !SIGN_MASK) ^ (y.to_bits() & SIGN_MASK))
}

/// Replaces exponent of a normal value with a zero unbiased exponent,
/// sign is dropped. Result lies in [1, 2).
#[inline(always)]
pub(crate) const fn unit_mantissa(x: f32) -> f32 {
    from_fields(0, EXPONENT_BIAS as u32, mantissa_bits(x))
}

/// The unit flushes subnormal operands to a zero of the same sign
/// before any elementary function sees them.
#[inline]
pub(crate) const fn flush_subnormal(x: f32) -> f32 {
    let bits = x.to_bits();
    if bits & EXPONENT_MASK == 0 {
        f32::from_bits(bits & SIGN_MASK)
    } else {
        x
    }
}

/// Round to integer towards minus infinity
#[inline]
pub(crate) const fn floorf(x: f32) -> f32 {
    const F1_23: f32 = (1u32 << 23) as f32;
    let mut fr = x - (x as i32 as f32);
    fr = if fr < 0. { fr + 1. } else { fr };
    if x.is_infinite() || x.is_nan() || (x.abs() >= F1_23) {
        x
    } else {
        copysignfk(x - fr, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let x = -6.5f32;
        assert_eq!(biased_exponent(x), 129);
        assert_eq!(mantissa_bits(x), 0x500000);
        assert_eq!(sign_bit(x), SIGN_MASK);
        assert_eq!(from_fields(SIGN_MASK, 129, 0x500000), x);
        assert_eq!(unit_mantissa(x), 1.625);
    }

    #[test]
    fn test_flush_subnormal() {
        let tiny = f32::from_bits(0x0000_0100);
        assert_eq!(flush_subnormal(tiny).to_bits(), 0);
        assert_eq!(flush_subnormal(-tiny).to_bits(), SIGN_MASK);
        assert_eq!(flush_subnormal(f32::MIN_POSITIVE), f32::MIN_POSITIVE);
        assert_eq!(flush_subnormal(-3.0), -3.0);
        assert!(flush_subnormal(f32::NAN).is_nan());
    }

    #[test]
    fn test_floorf() {
        for i in -20000..20000 {
            let x = i as f32 / 97.;
            assert_eq!(floorf(x), x.floor(), "floor mismatch for {x}");
        }
        assert_eq!(floorf(-0.25), -1.0);
        assert_eq!(floorf(1e9), 1e9);
        assert_eq!(floorf(f32::NEG_INFINITY), f32::NEG_INFINITY);
    }
}
