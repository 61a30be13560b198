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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum ElfunError {
    /// Source and destination lanes have different length
    LaneSizeMismatch,
    /// Verification was requested over no inputs
    EmptySample,
    /// Sampling range is empty, reversed or not finite
    InvalidRange,
    /// Hardware result is further from the reference than the documented bound
    BoundExceeded {
        function: &'static str,
        input: f32,
        error: f64,
        bound: f64,
    },
    /// Hardware and reference disagree on NaN or infinity
    SpecialValueMismatch { function: &'static str, input: f32 },
}

impl Display for ElfunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElfunError::LaneSizeMismatch => f.write_str("Source and destination lanes must match"),
            ElfunError::EmptySample => f.write_str("Sample has no inputs"),
            ElfunError::InvalidRange => f.write_str("Sampling range is invalid"),
            ElfunError::BoundExceeded {
                function,
                input,
                error,
                bound,
            } => f.write_fmt(format_args!(
                "{function}({input:e}) error {error:e} exceeds bound {bound:e}"
            )),
            ElfunError::SpecialValueMismatch { function, input } => f.write_fmt(format_args!(
                "{function}({input:e}) special value differs from reference"
            )),
        }
    }
}

impl Error for ElfunError {}
