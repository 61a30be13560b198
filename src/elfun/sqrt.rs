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
use crate::bits::{EXPONENT_BIAS, biased_exponent, from_fields, mantissa_bits, unit_mantissa};
use crate::elfun::recip;
use crate::quadratic::QuadraticTable;
use crate::tables::{SQRT2_COEFFS, SQRT_COEFFS};
use std::f32::consts::SQRT_2;

static SQRT_TABLE: QuadraticTable = QuadraticTable {
    name: "sqrt",
    coeffs: &SQRT_COEFFS,
    arg_min: 1.0,
    arg_max: 2.0,
    small_value: 1.0,
    exponent_min: 127,
    exponent_max: 127,
};

/// `sqrt(2m)` for the odd exponents
static SQRT2_TABLE: QuadraticTable = QuadraticTable {
    name: "sqrt2",
    coeffs: &SQRT2_COEFFS,
    arg_min: 1.0,
    arg_max: 2.0,
    small_value: SQRT_2,
    exponent_min: 127,
    exponent_max: 127,
};

/// Square root as computed by the unit.
///
/// Even exponents use the `sqrt(m)` table and odd ones the `sqrt(2m)` table,
/// the halved exponent is injected back. Both land in [1, 2).
/// Negative operands give NaN, subnormal ones included, positive subnormals
/// flush to `+0`.
pub fn sqrt(x: f32) -> f32 {
    if x.is_nan() {
        return x;
    }
    // negative subnormals are rejected before the flush
    if x < 0. {
        return f32::NAN;
    }
    let exponent = biased_exponent(x);
    if exponent == 0 {
        return 0.;
    }
    if x.is_infinite() {
        return x;
    }
    if x == 1. {
        return 1.;
    }
    let unbiased = exponent as i32 - EXPONENT_BIAS;
    let m = unit_mantissa(x);
    let r = if unbiased & 1 == 0 {
        SQRT_TABLE.evaluate(m)
    } else {
        SQRT2_TABLE.evaluate(m)
    };
    from_fields(0, (EXPONENT_BIAS + (unbiased >> 1)) as u32, mantissa_bits(r))
}

/// Reciprocal square root, the unit chains [sqrt] into [recip].
pub fn rsqrt(x: f32) -> f32 {
    recip(sqrt(x))
}
