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
use crate::bits::{biased_exponent, floorf};
use crate::quadratic::QuadraticTable;
use crate::tables::EXP2_COEFFS;

static EXP2_TABLE: QuadraticTable = QuadraticTable {
    name: "exp2",
    coeffs: &EXP2_COEFFS,
    arg_min: 0.0,
    arg_max: 1.0,
    small_value: 1.0,
    exponent_min: 1,
    exponent_max: 126,
};

/// Base 2 exponential as computed by the unit.
///
/// `x` splits into `floor(x)` and a fraction in [0, 1]. The fraction goes
/// through the table and the integer part is added to the exponent field.
/// Underflow below `2^-126` gives `+0`, overflow gives `+inf`.
pub fn exp2(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return if x > 0. { x } else { 0. };
    }
    if biased_exponent(x) == 0 {
        return 1.;
    }
    if x >= 128. {
        return f32::INFINITY;
    }
    if x < -126. {
        return 0.;
    }
    let xi = floorf(x);
    // exact, except for tiny negative x where it rounds up to one
    let xf = x - xi;
    let r = if xf == 0. {
        1.
    } else if xf == 1. {
        2.
    } else {
        EXP2_TABLE.evaluate(xf)
    };
    let bits = r.to_bits() as i32 + ((xi as i32) << 23);
    f32::from_bits(bits as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp2_special() {
        assert!(exp2(f32::NAN).is_nan());
        assert_eq!(exp2(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp2(f32::NEG_INFINITY).to_bits(), 0);
        assert_eq!(exp2(0.), 1.);
        assert_eq!(exp2(-0.), 1.);
        assert_eq!(exp2(f32::from_bits(0x8000_0042)), 1.);
        assert_eq!(exp2(128.), f32::INFINITY);
        assert_eq!(exp2(1000.), f32::INFINITY);
        assert_eq!(exp2(-126.5).to_bits(), 0);
        assert_eq!(exp2(-126.), f32::MIN_POSITIVE);
        assert_eq!(exp2(-1e-30), 1.);
    }

    #[test]
    fn test_exp2_integers() {
        for i in -126..128 {
            assert_eq!(exp2(i as f32), 2f32.powi(i));
        }
        assert_eq!(exp2(3.), 8.);
    }

    #[test]
    fn test_exp2_accuracy() {
        for i in -1260000..1279900 {
            let x = i as f32 / 10000.;
            let r = exp2(x);
            let exact = (x as f64).exp2();
            let diff = ((r as f64 - exact) / exact).abs();
            assert!(diff < 2f64.powi(-21), "exp2({x}) = {r}, expected {exact}");
        }
    }
}
