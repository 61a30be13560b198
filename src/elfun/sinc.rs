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
use crate::bits::{EXPONENT_BIAS, biased_exponent, flush_subnormal};
use crate::elfun::cardinal::sinc_kernel;
use crate::elfun::recip;
use crate::reduce::rrsin;
use std::f32::consts::FRAC_2_PI;

/// Normalized quarter turn sinc, `sin(pi/2 x) / (pi/2 x)`.
///
/// Inside (-1, 1) the cardinal kernel is used directly. Outside, the argument
/// is reduced with [rrsin] so the kernel only sees [-1, 1], and the division by
/// the original argument goes through the unit's reciprocal.
pub fn sinc(x: f32) -> f32 {
    let x = flush_subnormal(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    if x == 0. {
        return 1.;
    }
    if (biased_exponent(x) as i32) < EXPONENT_BIAS {
        return sinc_kernel(x.abs()) * FRAC_2_PI;
    }
    let y = rrsin(x);
    let s = if y == 0. { y } else { y * sinc_kernel(y.abs()) };
    s * recip(x) * FRAC_2_PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn sinc_f64(x: f32) -> f64 {
        let t = FRAC_PI_2 * x as f64;
        t.sin() / t
    }

    #[test]
    fn test_sinc_special() {
        assert_eq!(sinc(0.), 1.);
        assert_eq!(sinc(-0.), 1.);
        assert_eq!(sinc(f32::from_bits(3)), 1.);
        assert_eq!(sinc(f32::INFINITY), 0.);
        assert_eq!(sinc(f32::NEG_INFINITY), 0.);
        assert!(sinc(f32::NAN).is_nan());
        assert_eq!(sinc(2.), 0.);
        assert_eq!(sinc(1e20), 0.);
    }

    #[test]
    fn test_sinc_is_even() {
        for i in 1..30000 {
            let x = i as f32 / 300.;
            assert_eq!(sinc(x), sinc(-x), "sinc is not even at {x}");
        }
    }

    #[test]
    fn test_sinc_accuracy() {
        for i in -100000..100000 {
            let x = i as f32 / 2311.;
            if x == 0. {
                continue;
            }
            let r = sinc(x);
            let exact = sinc_f64(x);
            let diff = (r as f64 - exact).abs();
            assert!(diff < 2f64.powi(-21), "sinc({x}) = {r}, expected {exact}");
        }
        let mut x = 1.0001f32;
        while x < 1e6 {
            let diff = (sinc(x) as f64 - sinc_f64(x)).abs();
            assert!(diff < 2f64.powi(-21), "sinc({x}) diff {diff}");
            x *= 1.0013;
        }
    }
}
