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
//! Radian front end for the quarter turn reduction.
//!
//! The unit itself works in quarter turns, so radian arguments are scaled by
//! `2/pi` before they reach [crate::rrsin]. A single precision `2/pi` loses the
//! phase completely past a few thousand periods, therefore the product is
//! formed from a two word split of the constant and, for the largest
//! exponents, from a Payne-Hanek style long multiplication.
use crate::bits::biased_exponent;

/// High word of `2/pi`: 28 significant bits, its product with any `f32`
/// is exact in double precision.
const FRAC_2_PI_HI: f64 = f64::from_bits(0x3fe45f306e000000);
/// `2/pi - FRAC_2_PI_HI`
const FRAC_2_PI_LO: f64 = -f64::from_bits(0x3dfb1bbead603d8b);

/// Biased exponent from which the split product is no longer accurate, `|x| >= 2^28`.
const BIG_EXPONENT: u32 = 127 + 28;

/// Radian angle reduced modulo a quarter turn.
///
/// `x = (quadrant + phase) * pi/2 (mod 2 pi)`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReducedAngle {
    /// Remainder in quarter turns, lies in [-1/2, 1/2]
    pub phase: f32,
    /// Count of quarter turns modulo four
    pub quadrant: u8,
}

#[inline]
fn reduce_split(x: f32) -> (f64, i64) {
    let idh = FRAC_2_PI_HI * x as f64;
    let idl = FRAC_2_PI_LO * x as f64;
    let id = idh.round_ties_even();
    ((idh - id) + idl, id as i64)
}

/// Multiplies the significand of `u` by `1/pi` stored as 256 bits and
/// keeps the bits around the binary point.
///
/// Returns the position in sixteenths of a half turn: integer count and the
/// signed remainder in [-1/2, 1/2). Valid for `155 <= biased exponent <= 254`.
#[inline]
fn reduce_big(u: u32) -> (f64, i32) {
    const IPI: [u64; 4] = [
        0xfe5163abdebbc562,
        0xdb6295993c439041,
        0xfc2757d1f534ddc0,
        0xa2f9836e4e441529,
    ];
    let e = (u >> 23) & 0xff;
    let m: u64 = ((u as u64) & 0x7fffff) | (1 << 23);
    let p0 = m as u128 * IPI[0] as u128;
    let mut p1 = m as u128 * IPI[1] as u128;
    p1 = p1.wrapping_add(p0.wrapping_shr(64));
    let mut p2 = m as u128 * IPI[2] as u128;
    p2 = p2.wrapping_add(p1.wrapping_shr(64));
    let mut p3 = m as u128 * IPI[3] as u128;
    p3 = p3.wrapping_add(p2.wrapping_shr(64));
    let p3h = p3.wrapping_shr(64) as u64;
    let p3l = p3 as u64;
    let p2l = p2 as u64;
    let p1l = p1 as u64;
    // 155 <= e <= 254 gives 5 <= s <= 104
    let s = (e as i32).wrapping_sub(124).wrapping_sub(23);
    let mut i: i32;
    let a: i64;
    if s < 64 {
        i = (p3h << s | p3l >> (64 - s)) as i32;
        a = (p3l << s | p2l >> (64 - s)) as i64;
    } else if s == 64 {
        i = p3l as i32;
        a = p2l as i64;
    } else {
        i = (p3l << (s - 64) | p2l >> (128 - s)) as i32;
        a = (p2l << (s - 64) | p1l >> (128 - s)) as i64;
    }
    let sgn: i32 = (u as i32).wrapping_shr(31);
    let sm: i64 = a.wrapping_shr(63);
    i = i.wrapping_sub(sm as i32);
    let z = (a ^ sgn as i64) as f64 * f64::from_bits(0x3bf0000000000000);
    i = (i ^ sgn).wrapping_sub(sgn);
    (z, i)
}

impl ReducedAngle {
    /// Reduces a radian argument.
    ///
    /// NaN and infinities produce a NaN phase in quadrant zero.
    pub fn from_radians(x: f32) -> ReducedAngle {
        if !x.is_finite() {
            return ReducedAngle {
                phase: f32::NAN,
                quadrant: 0,
            };
        }
        let (phase, turns) = if biased_exponent(x) < BIG_EXPONENT {
            let (mut r, mut n) = reduce_split(x);
            if r > 0.5 {
                r -= 1.;
                n += 1;
            } else if r < -0.5 {
                r += 1.;
                n -= 1;
            }
            (r, n)
        } else {
            let (z, i) = reduce_big(x.to_bits());
            // eighths of a quarter turn
            let mut n = (i >> 3) as i64;
            let mut r = ((i & 7) as f64 + z) * 0.125;
            if r > 0.5 {
                r -= 1.;
                n += 1;
            }
            (r, n)
        };
        ReducedAngle {
            phase: phase as f32,
            quadrant: (turns & 3) as u8,
        }
    }

    /// Same angle advanced by a quarter turn, `sin` of it is `cos` of `self`
    #[inline]
    pub fn quarter_turn(self) -> ReducedAngle {
        ReducedAngle {
            phase: self.phase,
            quadrant: (self.quadrant + 1) & 3,
        }
    }

    /// Folds quadrant into the phase, producing the value [crate::rrsin] would
    /// give for the angle expressed in quarter turns.
    pub fn fold(self) -> f32 {
        match self.quadrant & 3 {
            0 => self.phase,
            1 => 1. - self.phase,
            2 => -self.phase,
            _ => self.phase - 1.,
        }
    }
}

/// Radian counterpart of [crate::rrsin]: `sin(x) == sin(pi/2 r)`
pub fn reduce_sin_radians(x: f32) -> f32 {
    ReducedAngle::from_radians(x).fold()
}

/// Radian counterpart of [crate::rrcos]: `cos(x) == sin(pi/2 r)`
pub fn reduce_cos_radians(x: f32) -> f32 {
    ReducedAngle::from_radians(x).quarter_turn().fold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_2_PI, FRAC_PI_2};

    fn quarter_sin(x: f32) -> f64 {
        (FRAC_PI_2 * x as f64).sin()
    }

    #[test]
    fn test_special_angles() {
        assert!(ReducedAngle::from_radians(f32::NAN).phase.is_nan());
        assert!(ReducedAngle::from_radians(f32::INFINITY).phase.is_nan());
        assert!(reduce_sin_radians(f32::NEG_INFINITY).is_nan());
        assert!(reduce_cos_radians(f32::NAN).is_nan());
        let zero = ReducedAngle::from_radians(0.);
        assert_eq!(zero.phase, 0.);
        assert_eq!(zero.quadrant, 0);
        assert_eq!(reduce_cos_radians(0.), 1.);
    }

    #[test]
    fn test_reduced_phase_is_kept() {
        for i in -490..=490 {
            let phase = i as f64 / 1000.;
            let x = (phase * FRAC_PI_2) as f32;
            let angle = ReducedAngle::from_radians(x);
            assert_eq!(angle.quadrant, 0, "quadrant for {x}");
            let expected = x as f64 * FRAC_2_PI;
            assert!(
                (angle.phase as f64 - expected).abs() < 1e-7,
                "phase of {x} is {}, expected {expected}",
                angle.phase
            );
        }
    }

    #[test]
    fn test_split_reduction_is_odd() {
        let mut x = 0.1f32;
        while x < 2.6e8 {
            let p = ReducedAngle::from_radians(x);
            let n = ReducedAngle::from_radians(-x);
            assert_eq!(p.phase, -n.phase);
            assert_eq!((p.quadrant + n.quadrant) & 3, 0, "quadrants of {x}");
            x *= 1.7;
        }
    }

    #[test]
    fn test_many_periods() {
        let x = (1e7 * 2. * std::f64::consts::PI) as f32;
        let angle = ReducedAngle::from_radians(x);
        let turns = x as f64 * FRAC_2_PI;
        let n = turns.round();
        let expected = turns - n;
        assert!((angle.phase as f64 - expected).abs() < 1e-6);
        assert_eq!(angle.quadrant as i64, (n as i64).rem_euclid(4));
        assert!((-0.5..=0.5).contains(&angle.phase));
        assert_eq!(angle.quadrant, 3);
        assert!((angle.phase - 0.31767356).abs() < 1e-6);
    }

    #[test]
    fn test_payne_hanek_path() {
        let x = 1e30f32;
        let diff = (quarter_sin(reduce_sin_radians(x)) - (x as f64).sin()).abs();
        assert!(diff < 1e-6, "sin(1e30) diff {diff}");
        let diff = (quarter_sin(reduce_cos_radians(x)) - (x as f64).cos()).abs();
        assert!(diff < 1e-6, "cos(1e30) diff {diff}");
    }

    #[test]
    fn test_reduction_matches_system_sine() {
        let mut rng = StdRng::seed_from_u64(0x6b31_3238);
        for _ in 0..50000 {
            let exponent = rng.random_range(100..255u32);
            let bits = (rng.random::<u32>() & 0x807f_ffff) | (exponent << 23);
            let x = f32::from_bits(bits);
            let angle = ReducedAngle::from_radians(x);
            assert!((-0.5..=0.5).contains(&angle.phase), "phase of {x}");
            let sin = quarter_sin(angle.fold());
            let cos = quarter_sin(angle.quarter_turn().fold());
            let diff = (sin - (x as f64).sin()).abs().max((cos - (x as f64).cos()).abs());
            assert!(diff < 1e-6, "reduction of {x} is off by {diff}");
        }
    }
}
