#![no_main]

use cp2elfun::{
    ElementaryFunction, MantissaExponent, ReducedAngle, rrcos, rrlog2e, rrlog2m, rrsin,
};
use libfuzzer_sys::fuzz_target;

fn same_class(a: f32, b: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    true
}

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let z0 = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let z1 = f32::from_bits(u32::from_ne_bytes([lo[4], lo[5], lo[6], lo[7]]));

    for z in [z0, z1] {
        for function in ElementaryFunction::ALL {
            let hardware = (function.hardware())(z);
            let gold = (function.gold())(z);
            assert!(
                same_class(hardware, gold),
                "{function}({z:e}) = {hardware}, reference {gold}"
            );
        }

        let s = rrsin(z);
        let c = rrcos(z);
        assert!(s.is_nan() || (-1.0..=1.0).contains(&s));
        assert!(c.is_nan() || (-1.0..=1.0).contains(&c));
        assert_eq!(z.is_finite(), !s.is_nan());

        let angle = ReducedAngle::from_radians(z);
        assert!(angle.phase.is_nan() || (-0.5..=0.5).contains(&angle.phase));
        assert!(angle.quadrant < 4);

        _ = rrlog2m(z);
        _ = rrlog2e(z);
        if let Some(split) = MantissaExponent::new(z) {
            assert_eq!(split.value(), z);
        }
    }
});
