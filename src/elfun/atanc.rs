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
use crate::elfun::cardinal::atanc_kernel;
use crate::elfun::recip;
use std::f32::consts::FRAC_2_PI;

/// Normalized arctangent cardinal, `(2/pi) atan(x) / x`.
///
/// Outside [-1, 1] the identity `atan(x) = pi/2 - atan(1/x)` keeps the kernel
/// argument inside its table: with `t = 1/|x|` the value is
/// `t * (1 - t * atanc(t))`.
pub fn atanc(x: f32) -> f32 {
    let x = flush_subnormal(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    let ax = x.abs();
    if ax == 0. {
        return FRAC_2_PI;
    }
    if ax <= 1. {
        return atanc_kernel(ax);
    }
    let t = recip(ax);
    if t == 0. {
        return 0.;
    }
    t * (1. - t * atanc_kernel(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atanc_f64(x: f32) -> f64 {
        std::f64::consts::FRAC_2_PI * (x as f64).atan() / x as f64
    }

    #[test]
    fn test_atanc_special() {
        assert_eq!(atanc(0.), FRAC_2_PI);
        assert_eq!(atanc(f32::from_bits(0x8000_0001)), FRAC_2_PI);
        assert_eq!(atanc(1.), 0.5);
        assert_eq!(atanc(-1.), 0.5);
        assert_eq!(atanc(f32::INFINITY), 0.);
        assert_eq!(atanc(f32::NEG_INFINITY), 0.);
        assert_eq!(atanc(f32::MAX), 0.);
        assert!(atanc(f32::NAN).is_nan());
    }

    #[test]
    fn test_atanc_accuracy() {
        let mut x = 1e-30f32;
        while x < 1e37 {
            for v in [x, -x] {
                let r = atanc(v);
                let exact = atanc_f64(v);
                let diff = ((r as f64 - exact) / exact).abs();
                assert!(diff < 2f64.powi(-21), "atanc({v}) = {r}, expected {exact}");
            }
            x *= 1.0093;
        }
    }
}
