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
//! Verification of the hardware functions against their golden references.
use crate::err::ElfunError;
use crate::function::{ElementaryFunction, ErrorBound};
use std::ops::Range;

/// Summary of hardware against reference over a set of inputs
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AccuracyReport {
    pub function: ElementaryFunction,
    pub samples: usize,
    /// Largest error in the units of [ElementaryFunction::error_bound]
    pub max_error: f64,
    /// Input producing [AccuracyReport::max_error]
    pub worst_input: f32,
    /// Largest distance in units in the last place among finite results
    pub max_ulps: u32,
    /// Inputs where hardware and reference disagree on NaN or infinity
    pub special_mismatches: usize,
    pub first_mismatch: Option<f32>,
}

/// Maps floats onto integers preserving their order, `-0` and `+0` coincide
#[inline]
fn ordered(x: f32) -> i64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000 != 0 {
        -((bits & 0x7fff_ffff) as i64)
    } else {
        bits as i64
    }
}

#[inline]
fn from_ordered(k: i64) -> f32 {
    if k < 0 {
        f32::from_bits((-k) as u32 | 0x8000_0000)
    } else {
        f32::from_bits(k as u32)
    }
}

/// Both values are NaN, or both are infinite with the same sign,
/// or both are finite.
#[inline]
fn same_class(a: f32, b: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    true
}

/// Spreads `count` inputs evenly over the ordered representation of `range`,
/// so every binade inside the range gets the same share of samples.
pub fn sample_range(range: Range<f32>, count: usize) -> Result<Vec<f32>, ElfunError> {
    if count == 0 {
        return Err(ElfunError::EmptySample);
    }
    if !range.start.is_finite() || !range.end.is_finite() || range.start >= range.end {
        return Err(ElfunError::InvalidRange);
    }
    let lo = ordered(range.start) as i128;
    let hi = ordered(range.end) as i128;
    let span = hi - lo;
    Ok((0..count)
        .map(|i| from_ordered((lo + span * i as i128 / count as i128) as i64))
        .collect())
}

/// Compares hardware and reference over `inputs`, never fails.
pub fn measure(function: ElementaryFunction, inputs: &[f32]) -> AccuracyReport {
    measure_pair(
        function,
        function.hardware(),
        function.gold(),
        function.error_bound(),
        inputs,
    )
}

fn measure_pair(
    function: ElementaryFunction,
    hardware: fn(f32) -> f32,
    gold: fn(f32) -> f32,
    bound: ErrorBound,
    inputs: &[f32],
) -> AccuracyReport {
    let mut report = AccuracyReport {
        function,
        samples: inputs.len(),
        max_error: 0.,
        worst_input: 0.,
        max_ulps: 0,
        special_mismatches: 0,
        first_mismatch: None,
    };
    for &x in inputs {
        let h = hardware(x);
        let g = gold(x);
        if !same_class(h, g) {
            report.special_mismatches += 1;
            if report.first_mismatch.is_none() {
                report.first_mismatch = Some(x);
            }
            continue;
        }
        if !h.is_finite() {
            continue;
        }
        let error = bound.error(h, g);
        if error > report.max_error {
            report.max_error = error;
            report.worst_input = x;
        }
        let ulps = (ordered(h) - ordered(g)).unsigned_abs();
        report.max_ulps = report.max_ulps.max(ulps.min(u32::MAX as u64) as u32);
    }
    report
}

/// Same as [measure] but fails when a special value differs or the
/// documented bound is exceeded.
pub fn verify(function: ElementaryFunction, inputs: &[f32]) -> Result<AccuracyReport, ElfunError> {
    if inputs.is_empty() {
        return Err(ElfunError::EmptySample);
    }
    let report = measure(function, inputs);
    check_report(report, function.error_bound().limit())
}

fn check_report(report: AccuracyReport, bound: f64) -> Result<AccuracyReport, ElfunError> {
    if let Some(input) = report.first_mismatch {
        return Err(ElfunError::SpecialValueMismatch {
            function: report.function.name(),
            input,
        });
    }
    if report.max_error > bound {
        return Err(ElfunError::BoundExceeded {
            function: report.function.name(),
            input: report.worst_input,
            error: report.max_error,
            bound,
        });
    }
    Ok(report)
}

/// Verifies `function` over `count` samples of its domain.
pub fn sweep(function: ElementaryFunction, count: usize) -> Result<AccuracyReport, ElfunError> {
    let inputs = sample_range(function.domain(), count)?;
    verify(function, &inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        assert_eq!(sample_range(0.0..1.0, 0), Err(ElfunError::EmptySample));
        assert_eq!(sample_range(1.0..1.0, 4), Err(ElfunError::InvalidRange));
        assert_eq!(sample_range(0.0..f32::INFINITY, 4), Err(ElfunError::InvalidRange));
        let samples = sample_range(-1.0..1.0, 1000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert_eq!(samples[0], -1.0);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert!(samples.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn test_ordered() {
        assert_eq!(ordered(0.), 0);
        assert_eq!(ordered(-0.), 0);
        assert_eq!(ordered(f32::from_bits(1)), 1);
        assert_eq!(ordered(-f32::from_bits(1)), -1);
        assert_eq!(from_ordered(ordered(-2.5)), -2.5);
        assert_eq!(ordered(1.0) - ordered(f32::from_bits(0x3f7fffff)), 1);
    }

    #[test]
    fn test_verify_empty() {
        assert_eq!(verify(ElementaryFunction::Recip, &[]), Err(ElfunError::EmptySample));
    }

    #[test]
    fn test_verify_reports_special_mismatch() {
        // zero is finite for sqrt but infinite for its reciprocal
        let report = measure_pair(
            ElementaryFunction::Sqrt,
            crate::sqrt,
            crate::gold::rsqrt_gold,
            ElementaryFunction::Sqrt.error_bound(),
            &[4., 0., 9., -0.],
        );
        assert_eq!(report.special_mismatches, 2);
        assert_eq!(report.first_mismatch, Some(0.));
        assert_eq!(
            check_report(report, 1.),
            Err(ElfunError::SpecialValueMismatch {
                function: "sqrt",
                input: 0.,
            })
        );
    }

    #[test]
    fn test_verify_reports_exceeded_bound() {
        let inputs = sample_range(1.0..2.0, 4096).unwrap();
        let report = measure(ElementaryFunction::Recip, &inputs);
        assert_eq!(report.special_mismatches, 0);
        assert!(report.max_error > 2f64.powi(-30));
        assert_eq!(check_report(report, report.max_error), Ok(report));
        match check_report(report, 2f64.powi(-30)) {
            Err(ElfunError::BoundExceeded {
                function,
                input,
                error,
                bound,
            }) => {
                assert_eq!(function, "recip");
                assert_eq!(input, report.worst_input);
                assert_eq!(error, report.max_error);
                assert_eq!(bound, 2f64.powi(-30));
            }
            other => panic!("expected an exceeded bound, got {other:?}"),
        }
    }

    #[test]
    fn test_special_inputs_agree() {
        let specials = [
            0.,
            -0.,
            f32::from_bits(1),
            -f32::from_bits(1),
            f32::from_bits(0x007f_ffff),
            -f32::from_bits(0x007f_ffff),
            f32::MIN_POSITIVE,
            f32::INFINITY,
            f32::NEG_INFINITY,
            f32::NAN,
            1.,
            -1.,
            2.,
            f32::MAX,
            -f32::MAX,
        ];
        for function in ElementaryFunction::ALL {
            let report = measure(function, &specials);
            assert_eq!(report.special_mismatches, 0, "{function} at {:?}", report.first_mismatch);
        }
    }

    #[test]
    fn test_sweep_all_functions() {
        for function in ElementaryFunction::ALL {
            match sweep(function, 200_000) {
                Ok(report) => assert!(report.max_error <= function.error_bound().limit()),
                Err(err) => panic!("{err}"),
            }
        }
    }
}
