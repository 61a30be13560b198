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
#![cfg(feature = "gold")]

use cp2elfun::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BOUND: f32 = 4.76837158203125e-7; // 2^-21

fn random_positive(rng: &mut StdRng, min_exponent: u32, max_exponent: u32) -> f32 {
    let exponent = rng.random_range(min_exponent..=max_exponent);
    f32::from_bits((exponent << 23) | (rng.random::<u32>() & 0x7f_ffff))
}

#[test]
fn sqrt_squares_back() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100_000 {
        let x = random_positive(&mut rng, 1, 254);
        let r = sqrt(x) as f64;
        let diff = ((r * r - x as f64) / x as f64).abs();
        assert!(diff < 2. * 2. * BOUND as f64 + 1e-12, "sqrt({x})^2 off by {diff}");
    }
}

#[test]
fn exp2_inverts_log2c() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..100_000 {
        // log2 of the top binade may round up to 128 where exp2 overflows
        let x = random_positive(&mut rng, 1, 253);
        let y = log2c(x);
        let back = exp2(y) as f64;
        // an absolute log error e scales the result by 2^e
        let log_error = (BOUND as f64) * (y.abs() as f64).max(1.) * 2. + BOUND as f64;
        let diff = ((back - x as f64) / x as f64).abs();
        assert!(
            diff < log_error * std::f64::consts::LN_2 * 1.01 + 1e-7,
            "exp2(log2c({x})) = {back}"
        );
    }
}

#[test]
fn recip_times_x_is_one() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100_000 {
        let x = random_positive(&mut rng, 1, 252);
        let sign = if rng.random::<bool>() { -1. } else { 1. };
        let v = sign * x;
        let product = recip(v) as f64 * v as f64;
        assert!((product - 1.).abs() < BOUND as f64, "recip({v}) * {v} = {product}");
    }
    assert_eq!(recip(0.), f32::INFINITY);
    assert_eq!(recip(-0.), f32::NEG_INFINITY);
    assert_eq!(recip(f32::INFINITY), 0.);
}

#[test]
fn documented_special_values() {
    assert!(sqrt(-1.).is_nan());
    assert_eq!(log2c(0.), f32::NEG_INFINITY);
    assert_eq!(log2ce(0.), f32::NEG_INFINITY);
    assert_eq!(exp2(f32::INFINITY), f32::INFINITY);
    assert_eq!(exp2(f32::NEG_INFINITY), 0.);
    assert_eq!(sinc(0.), 1.);
    assert_eq!(sinc_gold(0.), 1.);
    assert_eq!(atanc(f32::INFINITY), 0.);
}

#[test]
fn table_regression_values() {
    assert_eq!(recip(2.), 0.5);
    assert_eq!(exp2(3.), 8.);
    assert_eq!(log2c(8.), 3.);
    assert_eq!(log2ce(8.), 3.);
    assert_eq!(sqrt(4.), 2.);
    assert_eq!(rsqrt(0.25), 2.);
    assert_eq!(cardinal::atanc(1.), 0.5);
    assert_eq!(cardinal::sinc(1.), 1.);
    assert_eq!(cardinal::log2c(1.), std::f32::consts::LOG2_E);
}

#[test]
fn reductions_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..100_000 {
        let y: f32 = rng.random_range(-0.999999..0.999999);
        assert_eq!(rrsin(y).to_bits(), y.to_bits());
        let m: f32 = rng.random_range(1.0..2.0);
        assert_eq!(rrlog2m(m), m);
        assert_eq!(rrlog2e(m), 0.);
        let angle = ReducedAngle::from_radians(y * std::f32::consts::FRAC_PI_4);
        assert_eq!(angle.quadrant, 0);
        assert!((angle.phase - y * 0.5).abs() < 2e-7);
    }
}

#[test]
fn large_quarter_turns_stay_exact() {
    for k in 0..1000 {
        let x = 4e7f32 + (k * 4) as f32;
        assert_eq!(rrsin(x), 0.);
        assert_eq!(rrcos(x), 1.);
    }
    let x = (1e7 * 2. * std::f64::consts::PI) as f32;
    let angle = ReducedAngle::from_radians(x);
    assert!((-0.5..=0.5).contains(&angle.phase));
    let reference = (x as f64).sin();
    let folded = (std::f64::consts::FRAC_PI_2 * reduce_sin_radians(x) as f64).sin();
    assert!((reference - folded).abs() < 1e-6);
    let folded = (std::f64::consts::FRAC_PI_2 * reduce_sin_radians(1e30) as f64).sin();
    assert!(((1e30f32 as f64).sin() - folded).abs() < 1e-6);
}

#[test]
fn split_log2_reconstructs() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..10_000 {
        let x = random_positive(&mut rng, 1, 254);
        let split = split_log2(x).unwrap();
        assert!((1.0..2.0).contains(&split.mantissa));
        assert_eq!(split.value(), x);
    }
    assert_eq!(split_log2(-1.), None);
}

#[test]
fn every_function_meets_its_bound() {
    for function in ElementaryFunction::ALL {
        let report = sweep(function, 50_000).unwrap();
        assert_eq!(report.special_mismatches, 0);
        assert!(report.max_error <= function.error_bound().limit(), "{function}");
    }
}

#[test]
fn random_inputs_match_reference_class() {
    let mut rng = StdRng::seed_from_u64(53);
    let inputs: Vec<f32> = (0..20_000).map(|_| f32::from_bits(rng.random())).collect();
    for function in ElementaryFunction::ALL {
        let report = measure(function, &inputs);
        assert_eq!(
            report.special_mismatches, 0,
            "{function} disagrees with reference at {:?}",
            report.first_mismatch
        );
    }
}

#[test]
fn verify_reports_violations() {
    let err = verify(ElementaryFunction::Sinc, &[]).unwrap_err();
    assert_eq!(err, ElfunError::EmptySample);
    let src = [1f32, 2., 3.];
    let mut dst = [0f32; 2];
    assert_eq!(
        ElementaryFunction::Sqrt.execute(&src, &mut dst),
        Err(ElfunError::LaneSizeMismatch)
    );
}
