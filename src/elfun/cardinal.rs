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
//! Cardinal instructions of the unit on their native domains.
//!
//! `log2c`, `sinc` and `atanc` are the functions the unit actually tabulates.
//! Each one is divided by its argument so the table stays well conditioned
//! near zero (or near one for the logarithm). The full range functions in
//! the parent module are assembled from these kernels.
use crate::bits::flush_subnormal;
use crate::quadratic::QuadraticTable;
use crate::tables::{ATANC_COEFFS, LOG2C_COEFFS, SINC_COEFFS};
use std::f32::consts::{FRAC_2_PI, FRAC_PI_2, LOG2_E};

static LOG2C_TABLE: QuadraticTable = QuadraticTable {
    name: "log2c",
    coeffs: &LOG2C_COEFFS,
    arg_min: 1.0,
    arg_max: 2.0,
    small_value: LOG2_E,
    exponent_min: 127,
    exponent_max: 127,
};

static SINC_TABLE: QuadraticTable = QuadraticTable {
    name: "sinc",
    coeffs: &SINC_COEFFS,
    arg_min: 0.0,
    arg_max: 1.0,
    small_value: FRAC_PI_2,
    exponent_min: 1,
    exponent_max: 126,
};

static ATANC_TABLE: QuadraticTable = QuadraticTable {
    name: "atanc",
    coeffs: &ATANC_COEFFS,
    arg_min: 0.0,
    arg_max: 1.0,
    small_value: FRAC_2_PI,
    exponent_min: 1,
    exponent_max: 126,
};

/// `log2(m) / (m - 1)` for `m` in [1, 2)
#[inline]
pub(crate) fn log2c_kernel(m: f32) -> f32 {
    LOG2C_TABLE.evaluate(m)
}

/// `sin(pi/2 u) / u` for normal `u` in (0, 1]
#[inline]
pub(crate) fn sinc_kernel(u: f32) -> f32 {
    if u == 1. {
        return 1.;
    }
    SINC_TABLE.evaluate(u)
}

/// `(2/pi) atan(u) / u` for normal `u` in (0, 1]
#[inline]
pub(crate) fn atanc_kernel(u: f32) -> f32 {
    if u == 1. {
        return 0.5;
    }
    ATANC_TABLE.evaluate(u)
}

/// Computes `log2(x) / (x - 1)` on [1, 2), `1/ln 2` at one.
///
/// Negative nonzero operands (subnormals included) and normal operands
/// outside [1, 2) give NaN, `+0`, `-0` and positive subnormals give `+inf`,
/// `+inf` gives zero.
pub fn log2c(x: f32) -> f32 {
    if x < 0. {
        return f32::NAN;
    }
    let x = flush_subnormal(x);
    if x.is_nan() {
        return x;
    }
    if x == 0. {
        return f32::INFINITY;
    }
    if x == f32::INFINITY {
        return 0.;
    }
    if !(1.0..2.0).contains(&x) {
        return f32::NAN;
    }
    log2c_kernel(x)
}

/// Computes `sin(pi/2 x) / x` on [-1, 1].
///
/// Even in `x`: zero gives `pi/2`, infinities give zero, `|x| > 1` is NaN.
pub fn sinc(x: f32) -> f32 {
    let x = flush_subnormal(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    let ax = x.abs();
    if ax == 0. {
        return FRAC_PI_2;
    }
    if ax > 1. {
        return f32::NAN;
    }
    sinc_kernel(ax)
}

/// Computes `(2/pi) atan(x) / x` on [-1, 1].
///
/// Even in `x`: zero gives `2/pi`, infinities give zero, `|x| > 1` is NaN.
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
    if ax > 1. {
        return f32::NAN;
    }
    atanc_kernel(ax)
}
