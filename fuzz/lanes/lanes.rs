#![no_main]

use cp2elfun::{ElementaryFunction, ElfunError, LaneExecutor, Reduction};
use libfuzzer_sys::fuzz_target;

const REDUCTIONS: [Reduction; 6] = [
    Reduction::Sin,
    Reduction::Cos,
    Reduction::Log2Mantissa,
    Reduction::Log2Exponent,
    Reduction::SinRadians,
    Reduction::CosRadians,
];

fuzz_target!(|data: (u8, u8, Vec<u32>)| {
    let src: Vec<f32> = data.2.iter().map(|&x| f32::from_bits(x)).collect();
    let function = ElementaryFunction::ALL[data.0 as usize % ElementaryFunction::ALL.len()];
    let reduction = REDUCTIONS[data.0 as usize % REDUCTIONS.len()];
    let dst_len = src.len().saturating_sub((data.1 % 2) as usize);
    let mut dst = vec![0f32; dst_len];

    let result = function.execute(&src, &mut dst);
    if dst_len != src.len() {
        assert_eq!(result, Err(ElfunError::LaneSizeMismatch));
        return;
    }
    assert!(result.is_ok());
    for (&x, &y) in src.iter().zip(dst.iter()) {
        let expected = (function.hardware())(x);
        assert!(y.to_bits() == expected.to_bits() || (y.is_nan() && expected.is_nan()));
    }

    reduction.execute(&src, &mut dst).unwrap();
    let mut in_place = src.clone();
    reduction.execute_in_place(&mut in_place);
    for (&a, &b) in dst.iter().zip(in_place.iter()) {
        assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()));
    }
});
