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
#![forbid(unsafe_code)]
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
//! Software model of the elementary function unit of the k128cp2 vector
//! coprocessor.
//!
//! Hardware faithful functions reproduce the unit's piecewise quadratic
//! tables bit for bit, golden references (feature `gold`, enabled by default)
//! compute the same functions correctly rounded so both can be compared.
#[cfg(feature = "gold")]
mod accuracy;
mod angle;
mod bits;
mod elfun;
mod err;
mod function;
#[cfg(feature = "gold")]
mod gold;
mod lanes;
mod mlaf;
mod quadratic;
mod reduce;
mod tables;

#[cfg(feature = "gold")]
pub use accuracy::{AccuracyReport, measure, sample_range, sweep, verify};
pub use angle::{ReducedAngle, reduce_cos_radians, reduce_sin_radians};
pub use elfun::{atanc, exp2, log2c, log2ce, recip, rsqrt, sinc, sqrt};
pub use err::ElfunError;
pub use function::{ElementaryFunction, ErrorBound};
#[cfg(feature = "gold")]
pub use gold::{
    atanc_gold, exp2_gold, log2c_gold, log2ce_gold, recip_gold, rsqrt_gold, sinc_gold, sqrt_gold,
};
#[cfg(feature = "gold")]
pub use lanes::GoldLanes;
pub use lanes::{LaneExecutor, REGISTER_LANES, Reduction};
pub use reduce::{
    MantissaExponent, reduce_cos, reduce_log2_exponent, reduce_log2_mantissa, reduce_sin, rrcos,
    rrlog2e, rrlog2m, rrsin,
};

/// Cardinal instructions on their native domains.
///
/// These are the functions the unit tabulates: `log2(x) / (x - 1)` on [1, 2),
/// `sin(pi/2 x) / x` and `(2/pi) atan(x) / x` on [-1, 1].
pub mod cardinal {
    pub use crate::elfun::cardinal::{atanc, log2c, sinc};
    #[cfg(feature = "gold")]
    pub use crate::gold::{
        atanc_cardinal_gold as atanc_gold, log2c_cardinal_gold as log2c_gold,
        sinc_cardinal_gold as sinc_gold,
    };
}

/// Splits a positive normal value into mantissa in [1, 2) and exponent.
///
/// Typed form of [rrlog2m] and [rrlog2e], `None` for every other input.
#[inline]
pub fn split_log2(x: f32) -> Option<MantissaExponent> {
    MantissaExponent::new(x)
}
