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
use crate::elfun::{atanc, cardinal, exp2, log2c, log2ce, recip, rsqrt, sinc, sqrt};
use std::fmt::Display;
use std::ops::Range;

/// How far a hardware result may stray from its golden reference
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ErrorBound {
    /// `|hw - gold| <= bound * |gold|`
    Relative(f64),
    /// `|hw - gold| <= bound`
    Absolute(f64),
    /// `|hw - gold| <= bound * max(1, |gold|)`, used for logarithms whose
    /// absolute error grows with the exponent part
    LogScaled(f64),
}

impl ErrorBound {
    /// Limit the measured error is compared against
    #[inline]
    pub fn limit(self) -> f64 {
        match self {
            ErrorBound::Relative(b) | ErrorBound::Absolute(b) | ErrorBound::LogScaled(b) => b,
        }
    }

    /// Error of `hardware` against `gold` in the units of this bound.
    ///
    /// Both values are expected to be finite.
    pub fn error(self, hardware: f32, gold: f32) -> f64 {
        let diff = (hardware as f64 - gold as f64).abs();
        match self {
            ErrorBound::Relative(_) => {
                if gold == 0. {
                    diff
                } else {
                    diff / (gold as f64).abs()
                }
            }
            ErrorBound::Absolute(_) => diff,
            ErrorBound::LogScaled(_) => diff / (gold as f64).abs().max(1.),
        }
    }
}

/// Every function of the unit paired with its golden reference.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ElementaryFunction {
    Recip,
    Sqrt,
    Rsqrt,
    Log2c,
    Log2ce,
    Exp2,
    Sinc,
    Atanc,
    /// `log2(x) / (x - 1)` on [1, 2)
    CardinalLog2c,
    /// `sin(pi/2 x) / x` on [-1, 1]
    CardinalSinc,
    /// `(2/pi) atan(x) / x` on [-1, 1]
    CardinalAtanc,
}

impl ElementaryFunction {
    pub const ALL: [ElementaryFunction; 11] = [
        ElementaryFunction::Recip,
        ElementaryFunction::Sqrt,
        ElementaryFunction::Rsqrt,
        ElementaryFunction::Log2c,
        ElementaryFunction::Log2ce,
        ElementaryFunction::Exp2,
        ElementaryFunction::Sinc,
        ElementaryFunction::Atanc,
        ElementaryFunction::CardinalLog2c,
        ElementaryFunction::CardinalSinc,
        ElementaryFunction::CardinalAtanc,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ElementaryFunction::Recip => "recip",
            ElementaryFunction::Sqrt => "sqrt",
            ElementaryFunction::Rsqrt => "rsqrt",
            ElementaryFunction::Log2c => "log2c",
            ElementaryFunction::Log2ce => "log2ce",
            ElementaryFunction::Exp2 => "exp2",
            ElementaryFunction::Sinc => "sinc",
            ElementaryFunction::Atanc => "atanc",
            ElementaryFunction::CardinalLog2c => "cardinal::log2c",
            ElementaryFunction::CardinalSinc => "cardinal::sinc",
            ElementaryFunction::CardinalAtanc => "cardinal::atanc",
        }
    }

    /// Hardware faithful implementation
    pub fn hardware(self) -> fn(f32) -> f32 {
        match self {
            ElementaryFunction::Recip => recip,
            ElementaryFunction::Sqrt => sqrt,
            ElementaryFunction::Rsqrt => rsqrt,
            ElementaryFunction::Log2c => log2c,
            ElementaryFunction::Log2ce => log2ce,
            ElementaryFunction::Exp2 => exp2,
            ElementaryFunction::Sinc => sinc,
            ElementaryFunction::Atanc => atanc,
            ElementaryFunction::CardinalLog2c => cardinal::log2c,
            ElementaryFunction::CardinalSinc => cardinal::sinc,
            ElementaryFunction::CardinalAtanc => cardinal::atanc,
        }
    }

    /// Correctly rounded reference
    #[cfg(feature = "gold")]
    pub fn gold(self) -> fn(f32) -> f32 {
        use crate::gold::*;
        match self {
            ElementaryFunction::Recip => recip_gold,
            ElementaryFunction::Sqrt => sqrt_gold,
            ElementaryFunction::Rsqrt => rsqrt_gold,
            ElementaryFunction::Log2c => log2c_gold,
            ElementaryFunction::Log2ce => log2ce_gold,
            ElementaryFunction::Exp2 => exp2_gold,
            ElementaryFunction::Sinc => sinc_gold,
            ElementaryFunction::Atanc => atanc_gold,
            ElementaryFunction::CardinalLog2c => log2c_cardinal_gold,
            ElementaryFunction::CardinalSinc => sinc_cardinal_gold,
            ElementaryFunction::CardinalAtanc => atanc_cardinal_gold,
        }
    }

    /// Documented accuracy of [ElementaryFunction::hardware] against the reference
    pub fn error_bound(self) -> ErrorBound {
        let bound = f64::from_bits(0x3ea0000000000000); // 2^-21
        match self {
            ElementaryFunction::Rsqrt => ErrorBound::Relative(bound * 2.),
            ElementaryFunction::Log2c | ElementaryFunction::Log2ce => ErrorBound::LogScaled(bound),
            ElementaryFunction::Sinc => ErrorBound::Absolute(bound),
            _ => ErrorBound::Relative(bound),
        }
    }

    /// Interval sampled when the function is verified
    pub fn domain(self) -> Range<f32> {
        match self {
            ElementaryFunction::Recip | ElementaryFunction::Atanc => -1e37..1e37,
            ElementaryFunction::Sqrt | ElementaryFunction::Log2c | ElementaryFunction::Log2ce => {
                0.0..f32::MAX
            }
            ElementaryFunction::Rsqrt => f32::MIN_POSITIVE..f32::MAX,
            ElementaryFunction::Exp2 => -126.0..127.99,
            ElementaryFunction::Sinc => -1e6..1e6,
            ElementaryFunction::CardinalLog2c => 1.0..2.0,
            ElementaryFunction::CardinalSinc | ElementaryFunction::CardinalAtanc => -1.0..1.0,
        }
    }
}

impl Display for ElementaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(ElementaryFunction::Recip.error_bound().limit(), 2f64.powi(-21));
        assert_eq!(ElementaryFunction::Rsqrt.error_bound().limit(), 2f64.powi(-20));
        let bound = ErrorBound::LogScaled(1e-6);
        assert_eq!(bound.error(10.5, 10.), 0.05);
        assert_eq!(bound.error(0.5, 0.25), 0.25);
        assert_eq!(ErrorBound::Relative(1e-6).error(3., 2.), 0.5);
        assert_eq!(ErrorBound::Relative(1e-6).error(0.5, 0.), 0.5);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ElementaryFunction::ALL.iter().enumerate() {
            for b in ElementaryFunction::ALL.iter().skip(i + 1) {
                assert_ne!(a.name(), b.name());
            }
            assert!(a.domain().start < a.domain().end);
        }
    }

    #[test]
    fn test_hardware_dispatch() {
        assert_eq!((ElementaryFunction::Recip.hardware())(2.), 0.5);
        assert_eq!((ElementaryFunction::Exp2.hardware())(3.), 8.);
        assert_eq!((ElementaryFunction::CardinalSinc.hardware())(1.), 1.);
    }
}
