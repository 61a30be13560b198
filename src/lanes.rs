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
use crate::angle::{reduce_cos_radians, reduce_sin_radians};
use crate::err::ElfunError;
use crate::function::ElementaryFunction;
use crate::reduce::{rrcos, rrlog2e, rrlog2m, rrsin};

/// Single precision lanes of one 128 bit coprocessor register:
/// two 64 bit sections holding two words each.
pub const REGISTER_LANES: usize = 4;

/// Argument reduction instructions
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Reduction {
    Sin,
    Cos,
    Log2Mantissa,
    Log2Exponent,
    /// Radian argument folded to the [Reduction::Sin] format
    SinRadians,
    /// Radian argument folded to the [Reduction::Cos] format
    CosRadians,
}

impl Reduction {
    pub fn function(self) -> fn(f32) -> f32 {
        match self {
            Reduction::Sin => rrsin,
            Reduction::Cos => rrcos,
            Reduction::Log2Mantissa => rrlog2m,
            Reduction::Log2Exponent => rrlog2e,
            Reduction::SinRadians => reduce_sin_radians,
            Reduction::CosRadians => reduce_cos_radians,
        }
    }
}

/// Runs one instruction across every lane, the way the unit applies it to
/// all sections of a register at once.
pub trait LaneExecutor {
    fn lane(&self, x: f32) -> f32;

    /// Count of lanes always must match.
    fn execute(&self, src: &[f32], dst: &mut [f32]) -> Result<(), ElfunError> {
        if src.len() != dst.len() {
            return Err(ElfunError::LaneSizeMismatch);
        }
        for (src, dst) in src
            .chunks(REGISTER_LANES)
            .zip(dst.chunks_mut(REGISTER_LANES))
        {
            for (&x, y) in src.iter().zip(dst.iter_mut()) {
                *y = self.lane(x);
            }
        }
        Ok(())
    }

    fn execute_in_place(&self, lanes: &mut [f32]) {
        for x in lanes.iter_mut() {
            *x = self.lane(*x);
        }
    }

    fn execute_register(&self, register: [f32; REGISTER_LANES]) -> [f32; REGISTER_LANES] {
        register.map(|x| self.lane(x))
    }
}

impl LaneExecutor for ElementaryFunction {
    #[inline]
    fn lane(&self, x: f32) -> f32 {
        (self.hardware())(x)
    }
}

impl LaneExecutor for Reduction {
    #[inline]
    fn lane(&self, x: f32) -> f32 {
        (self.function())(x)
    }
}

/// Executes the golden reference of the wrapped function
#[cfg(feature = "gold")]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct GoldLanes(pub ElementaryFunction);

#[cfg(feature = "gold")]
impl LaneExecutor for GoldLanes {
    #[inline]
    fn lane(&self, x: f32) -> f32 {
        (self.0.gold())(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_size_mismatch() {
        let src = [1f32; 7];
        let mut dst = [0f32; 6];
        assert_eq!(
            ElementaryFunction::Recip.execute(&src, &mut dst),
            Err(ElfunError::LaneSizeMismatch)
        );
        assert_eq!(Reduction::Sin.execute(&src[..6], &mut dst), Ok(()));
    }

    #[test]
    fn test_lanes_match_scalar() {
        let src: Vec<f32> = (0..37).map(|i| i as f32 * 0.73 - 9.).collect();
        let mut dst = vec![0f32; src.len()];
        for function in ElementaryFunction::ALL {
            function.execute(&src, &mut dst).unwrap();
            for (&x, &y) in src.iter().zip(dst.iter()) {
                let expected = (function.hardware())(x);
                assert!(
                    y.to_bits() == expected.to_bits() || (y.is_nan() && expected.is_nan()),
                    "{function} lane mismatch at {x}"
                );
            }
        }
    }

    #[test]
    fn test_register_and_in_place() {
        let register = [2., 3.5, 5.25, -1.5];
        assert_eq!(
            Reduction::Sin.execute_register(register),
            [-0., -0.5, 0.75, -0.5]
        );
        assert_eq!(
            Reduction::Log2Exponent.execute_register([8., 0.5, 0., 3.]),
            [3., -1., 0., 1.]
        );
        let mut lanes = [4., 16., 0.25, 1.];
        ElementaryFunction::Sqrt.execute_in_place(&mut lanes);
        assert_eq!(lanes, [2., 4., 0.5, 1.]);
    }

    #[cfg(feature = "gold")]
    #[test]
    fn test_gold_lanes() {
        let src = [1., 2., 4., 8.];
        let mut dst = [0f32; 4];
        GoldLanes(ElementaryFunction::Log2c).execute(&src, &mut dst).unwrap();
        assert_eq!(dst, [0., 1., 2., 3.]);
    }
}
