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
use crate::bits::{
    EXPONENT_BIAS, biased_exponent, from_fields, mantissa_bits, sign_bit, unit_mantissa,
};
use crate::quadratic::QuadraticTable;
use crate::tables::RECIP_COEFFS;

static RECIP_TABLE: QuadraticTable = QuadraticTable {
    name: "recip",
    coeffs: &RECIP_COEFFS,
    arg_min: 1.0,
    arg_max: 2.0,
    small_value: 1.0,
    exponent_min: 127,
    exponent_max: 127,
};

/// Reciprocal as computed by the unit.
///
/// The mantissa goes through the `1/x` table on [1, 2) and the exponent is
/// negated. Results that would be subnormal are flushed, so every operand
/// above `2^126` in magnitude gives a signed zero.
pub fn recip(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return from_fields(sign_bit(x), 0, 0);
    }
    let exponent = biased_exponent(x);
    if exponent == 0 {
        return from_fields(sign_bit(x), 0xff, 0);
    }
    if exponent > 252 {
        return from_fields(sign_bit(x), 0, 0);
    }
    if x.abs() == 1. {
        return x;
    }
    let r = RECIP_TABLE.evaluate(unit_mantissa(x));
    let scaled = biased_exponent(r) as i32 - (exponent as i32 - EXPONENT_BIAS);
    from_fields(sign_bit(x), scaled as u32, mantissa_bits(r))
}
