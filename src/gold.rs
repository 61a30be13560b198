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
//! Golden reference of the elementary functions.
//!
//! Each function evaluates in double precision with correctly rounded
//! routines and rounds once to single precision. Special values, operand
//! flushing and the unit's overflow and underflow thresholds are reproduced
//! so that a hardware result and its reference always agree in class.
use pxfm::{f_atan, f_exp2, f_log2, f_sin};
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, LOG2_E};

/// `2^126`, reciprocals of larger magnitudes are subnormal
const FLUSH_THRESHOLD: f32 = f32::from_bits(0x7e80_0000);

#[inline]
fn flush(x: f32) -> f32 {
    if x.is_subnormal() {
        0f32.copysign(x)
    } else {
        x
    }
}

/// Reference for [crate::recip]
pub fn recip_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.abs() >= FLUSH_THRESHOLD && x.is_finite() {
        // the unit flushes subnormal reciprocals
        return 0f32.copysign(x);
    }
    (1. / x as f64) as f32
}

/// Reference for [crate::sqrt]
pub fn sqrt_gold(x: f32) -> f32 {
    if x < 0. {
        return f32::NAN;
    }
    let x = flush(x);
    if x == 0. {
        return 0.;
    }
    (x as f64).sqrt() as f32
}

/// Reference for [crate::rsqrt]
pub fn rsqrt_gold(x: f32) -> f32 {
    if x < 0. {
        return f32::NAN;
    }
    let x = flush(x);
    if x == 0. {
        return f32::INFINITY;
    }
    (1. / (x as f64).sqrt()) as f32
}

/// Reference for [crate::log2c]
pub fn log2c_gold(x: f32) -> f32 {
    if x < 0. {
        return f32::NAN;
    }
    let x = flush(x);
    if x == 0. {
        return f32::NEG_INFINITY;
    }
    if x.is_nan() {
        return x;
    }
    f_log2(x as f64) as f32
}

/// Reference for [crate::log2ce], both flavours approximate the same logarithm
pub fn log2ce_gold(x: f32) -> f32 {
    log2c_gold(x)
}

/// Reference for [crate::exp2]
pub fn exp2_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.is_nan() {
        return x;
    }
    if x >= 128. {
        return f32::INFINITY;
    }
    if x < -126. {
        return 0.;
    }
    f_exp2(x as f64) as f32
}

/// Reference for [crate::sinc]
pub fn sinc_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    if x == 0. {
        return 1.;
    }
    let xd = x as f64;
    // exact, the period is four quarter turns
    let r = xd % 4.;
    (f_sin(FRAC_PI_2 * r) / (FRAC_PI_2 * xd)) as f32
}

/// Reference for [crate::atanc]
pub fn atanc_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.is_nan() {
        return x;
    }
    if x.abs() >= FLUSH_THRESHOLD {
        return 0.;
    }
    if x == 0. {
        return FRAC_2_PI as f32;
    }
    let xd = x as f64;
    (FRAC_2_PI * f_atan(xd) / xd) as f32
}

/// Reference for [crate::cardinal::log2c]
pub fn log2c_cardinal_gold(x: f32) -> f32 {
    if x < 0. {
        return f32::NAN;
    }
    let x = flush(x);
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
    if x == 1. {
        return LOG2_E as f32;
    }
    let xd = x as f64;
    (f_log2(xd) / (xd - 1.)) as f32
}

/// Reference for [crate::cardinal::sinc]
pub fn sinc_cardinal_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    let ax = x.abs();
    if ax == 0. {
        return FRAC_PI_2 as f32;
    }
    if ax > 1. {
        return f32::NAN;
    }
    let xd = ax as f64;
    (f_sin(FRAC_PI_2 * xd) / xd) as f32
}

/// Reference for [crate::cardinal::atanc]
pub fn atanc_cardinal_gold(x: f32) -> f32 {
    let x = flush(x);
    if x.is_nan() {
        return x;
    }
    if x.is_infinite() {
        return 0.;
    }
    let ax = x.abs();
    if ax == 0. {
        return FRAC_2_PI as f32;
    }
    if ax > 1. {
        return f32::NAN;
    }
    let xd = ax as f64;
    (FRAC_2_PI * f_atan(xd) / xd) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_special() {
        assert_eq!(recip_gold(0.), f32::INFINITY);
        assert_eq!(recip_gold(-0.), f32::NEG_INFINITY);
        assert_eq!(recip_gold(f32::INFINITY), 0.);
        assert_eq!(recip_gold(-f32::MAX).to_bits(), 0x8000_0000);
        assert!(sqrt_gold(-1.).is_nan());
        assert_eq!(sqrt_gold(-0.).to_bits(), 0);
        assert_eq!(sqrt_gold(f32::from_bits(3)).to_bits(), 0);
        assert!(sqrt_gold(f32::from_bits(0x8000_0003)).is_nan());
        assert!(rsqrt_gold(f32::from_bits(0x8000_0003)).is_nan());
        assert!(log2c_gold(f32::from_bits(0x8000_0003)).is_nan());
        assert!(log2ce_gold(f32::from_bits(0x8000_0003)).is_nan());
        assert!(log2c_cardinal_gold(f32::from_bits(0x8000_0003)).is_nan());
        assert_eq!(log2c_cardinal_gold(f32::from_bits(3)), f32::INFINITY);
        assert_eq!(recip_gold(FLUSH_THRESHOLD), 0.);
        assert_eq!(atanc_gold(-FLUSH_THRESHOLD), 0.);
        assert_eq!(rsqrt_gold(f32::INFINITY), 0.);
        assert_eq!(log2c_gold(0.), f32::NEG_INFINITY);
        assert_eq!(log2c_gold(f32::INFINITY), f32::INFINITY);
        assert!(log2c_gold(-2.).is_nan());
        assert_eq!(exp2_gold(f32::INFINITY), f32::INFINITY);
        assert_eq!(exp2_gold(f32::NEG_INFINITY), 0.);
        assert_eq!(exp2_gold(f32::from_bits(1)), 1.);
        assert_eq!(sinc_gold(0.), 1.);
        assert_eq!(sinc_gold(f32::INFINITY), 0.);
        assert_eq!(atanc_gold(0.), FRAC_2_PI as f32);
        assert_eq!(atanc_gold(f32::NEG_INFINITY), 0.);
    }

    #[test]
    fn test_gold_values() {
        assert_eq!(recip_gold(4.), 0.25);
        assert_eq!(sqrt_gold(9.), 3.);
        assert_eq!(log2c_gold(1024.), 10.);
        assert_eq!(exp2_gold(-3.), 0.125);
        assert_eq!(sinc_gold(1.), FRAC_2_PI as f32);
        assert_eq!(sinc_gold(4.), 0.);
        assert_eq!(atanc_gold(1.), 0.5);
        assert_eq!(log2c_cardinal_gold(1.), LOG2_E as f32);
        assert_eq!(sinc_cardinal_gold(1.), 1.);
        assert_eq!(atanc_cardinal_gold(-1.), 0.5);
        assert!(sinc_cardinal_gold(1.5).is_nan());
    }

    #[test]
    fn test_sinc_gold_period() {
        for i in 1..2000 {
            let x = i as f32 / 128.;
            let shifted = x + 4096.;
            let a = sinc_gold(x) as f64 * x as f64;
            let b = sinc_gold(shifted) as f64 * shifted as f64;
            assert!((a - b).abs() < 1e-4, "sinc period mismatch at {x}");
        }
    }
}
