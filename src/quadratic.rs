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
use crate::bits::{EXPONENT_BIAS, HIDDEN_BIT, MANTISSA_MASK, biased_exponent, mantissa_bits};

pub(crate) const TABLE_SIZE: usize = 128;

/// Width of the low operand part fed into the polynomial.
const X2_BITS: u32 = 17;

/// Piecewise quadratic approximation as it is wired in the unit.
///
/// The reduced operand is aligned into a 24 bit fixed point word, the top seven
/// fraction bits select a row of coefficients and the remaining seventeen bits
/// are the polynomial argument. Evaluation is done entirely in 64 bit integers
/// and the sum is truncated to 24 significant bits.
pub(crate) struct QuadraticTable {
    pub(crate) name: &'static str,
    pub(crate) coeffs: &'static [[u32; 3]; TABLE_SIZE],
    pub(crate) arg_min: f32,
    pub(crate) arg_max: f32,
    /// Returned when both `x1` and `x2` are zero
    pub(crate) small_value: f32,
    pub(crate) exponent_min: u32,
    pub(crate) exponent_max: u32,
}

impl QuadraticTable {
    #[inline]
    pub(crate) fn evaluate(&self, x: f32) -> f32 {
        let exponent = biased_exponent(x);
        debug_assert!(
            x.is_normal() && x >= self.arg_min && x <= self.arg_max,
            "{}: argument {x} is out of table range",
            self.name
        );
        debug_assert!(
            exponent >= self.exponent_min && exponent <= self.exponent_max,
            "{}: exponent {exponent} is out of table range",
            self.name
        );

        let mut m = HIDDEN_BIT | mantissa_bits(x);
        let shift = (EXPONENT_BIAS - 1) - exponent as i32;
        if shift > 23 {
            m = 0;
        } else if shift >= 0 {
            m >>= shift;
        } else {
            // [1, 2) operands, the leading one falls off the top
            debug_assert_eq!(shift, -1);
            m <<= 1;
        }

        let x2 = (m & ((1 << X2_BITS) - 1)) as i64;
        let x1 = ((m >> X2_BITS) & (TABLE_SIZE as u32 - 1)) as usize;
        if x1 == 0 && x2 == 0 {
            return self.small_value;
        }

        let [c2, c1, c0] = self.coeffs[x1].map(|c| c as i32 as i64);
        let a0 = c0 << 32;
        let a1 = (c1 * x2) << 18;
        let a2 = c2 * x2 * x2;
        let a = a0 + a1 + a2;
        debug_assert!(a > 0, "{}: non positive polynomial sum", self.name);

        let nlz = a.leading_zeros();
        let normalized = (a as u64) << nlz;
        let mantissa = ((normalized >> 40) as u32) & MANTISSA_MASK;
        let exponent = 132 - nlz;
        f32::from_bits((exponent << 23) | mantissa)
    }
}
