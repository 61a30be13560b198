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
use cp2elfun::{ElementaryFunction, measure, sample_range, verify};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_inputs(function: ElementaryFunction, count: usize, rng: &mut StdRng) -> Vec<f32> {
    let domain = function.domain();
    (0..count)
        .map(|_| rng.random_range(domain.start..domain.end))
        .collect()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(0x6b31_3238);
    println!(
        "{:<16} {:>10} {:>14} {:>14} {:>6} {:>8}",
        "function", "samples", "max error", "worst input", "ulps", "special"
    );
    for function in ElementaryFunction::ALL {
        let mut inputs = sample_range(function.domain(), 1_000_000).unwrap();
        inputs.extend(random_inputs(function, 1_000_000, &mut rng));
        let report = measure(function, &inputs);
        println!(
            "{:<16} {:>10} {:>14.6e} {:>14.6e} {:>6} {:>8}",
            function.name(),
            report.samples,
            report.max_error,
            report.worst_input,
            report.max_ulps,
            report.special_mismatches
        );
        if let Err(err) = verify(function, &inputs) {
            println!("  {err}");
        }
    }
}
