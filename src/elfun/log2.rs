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
use crate::bits::flush_subnormal;
use crate::elfun::cardinal::log2c_kernel;
use crate::mlaf::mlaf;
use crate::reduce::{rrlog2e, rrlog2m};

/// Shared special cases of both logarithm flavours, `None` for positive normals
#[inline]
fn log2_special(x: f32) -> Option<f32> {
    if x < 0. {
        return Some(f32::NAN);
    }
    let x = flush_subnormal(x);
    if x.is_nan() {
        return Some(x);
    }
    if x == 0. {
        return Some(f32::NEG_INFINITY);
    }
    if x.is_infinite() {
        return Some(x);
    }
    None
}

/// Base 2 logarithm, mantissa centric.
///
/// `x = m * 2^e` is split by the log2 reduction, the mantissa logarithm
/// `(m - 1) * log2c(m)` is rounded first and the exponent is added after.
/// Exact for powers of two.
pub fn log2c(x: f32) -> f32 {
    if let Some(special) = log2_special(x) {
        return special;
    }
    let m = rrlog2m(x);
    let e = rrlog2e(x);
    let t = (m - 1.) * log2c_kernel(m);
    t + e
}

/// Base 2 logarithm, exponent centric.
///
/// The exponent seeds the accumulator and the mantissa term is folded in
/// with one fused multiply-add, so the result is rounded once.
pub fn log2ce(x: f32) -> f32 {
    if let Some(special) = log2_special(x) {
        return special;
    }
    let m = rrlog2m(x);
    let e = rrlog2e(x);
    mlaf(e, m - 1., log2c_kernel(m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_special() {
        for f in [log2c, log2ce] {
            assert_eq!(f(0.), f32::NEG_INFINITY);
            assert_eq!(f(-0.), f32::NEG_INFINITY);
            assert_eq!(f(f32::from_bits(1)), f32::NEG_INFINITY);
            assert!(f(f32::from_bits(0x8000_0001)).is_nan());
            assert!(f(-1.).is_nan());
            assert!(f(f32::NEG_INFINITY).is_nan());
            assert!(f(f32::NAN).is_nan());
            assert_eq!(f(f32::INFINITY), f32::INFINITY);
            assert_eq!(f(1.), 0.);
        }
    }

    #[test]
    fn test_log2_flavours_round_differently() {
        // (input, mantissa centric, exponent centric)
        let cases = [
            (0x40049ba6u32, 0x3f8687f4u32, 0x3f8687f5u32),
            (0x4004ac08, 0x3f869ec4, 0x3f869ec3),
        ];
        for (x, rounded_twice, fused) in cases {
            let x = f32::from_bits(x);
            assert_eq!(log2c(x).to_bits(), rounded_twice, "log2c({x})");
            assert_eq!(log2ce(x).to_bits(), fused, "log2ce({x})");
            let exact = (x as f64).log2();
            for r in [log2c(x), log2ce(x)] {
                assert!((r as f64 - exact).abs() < 2f64.powi(-21) * exact.abs().max(1.));
            }
        }
    }

    #[test]
    fn test_log2_powers_of_two() {
        for e in -126..128 {
            let x = 2f32.powi(e);
            assert_eq!(log2c(x), e as f32);
            assert_eq!(log2ce(x), e as f32);
        }
        assert_eq!(log2c(8.), 3.);
    }

    #[test]
    fn test_log2_accuracy() {
        let mut x = f32::MIN_POSITIVE;
        while x < f32::MAX / 1.0071 {
            let exact = (x as f64).log2();
            let bound = 2f64.powi(-21) * exact.abs().max(1.);
            for (name, r) in [("log2c", log2c(x)), ("log2ce", log2ce(x))] {
                let diff = (r as f64 - exact).abs();
                assert!(diff < bound, "{name}({x}) = {r}, expected {exact}");
            }
            x *= 1.0071;
        }
    }

    #[test]
    fn test_log2_near_one() {
        for i in 1..5000 {
            let x = 1. + i as f32 * 1e-5;
            let exact = (x as f64).log2();
            let diff = ((log2c(x) as f64 - exact) / exact).abs();
            assert!(diff < 2f64.powi(-21), "log2c({x}) relative error {diff}");
        }
    }
}
