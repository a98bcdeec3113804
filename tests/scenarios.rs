use scalar_fp16::{Format, ScalarFP16, ScalarFP16a, ScalarFP16b, hw_codes};

#[test]
fn test_fp16a_scenarios() {
    for (v, expected) in [
        (1.0_f32, 0x3C00_u32),
        (-2.0, 0xC000),
        (0.0, 0x0000),
        (65504.0, 0x7BFF),
        (1.0e6, 0x7FFF),
        (-1.0e6, 0xFFFF),
    ] {
        let x = ScalarFP16::new(v, Format::Fp16a);
        assert_eq!(x.get(), expected, "{v:e}");
        assert_eq!(ScalarFP16a::new(v).get(), expected, "{v:e}");
    }
}

#[test]
fn test_fp16a_saturates_instead_of_infinity() {
    let inf = ScalarFP16a::new(f32::INFINITY);
    assert_eq!(inf.get(), 0x7FFF);
    assert_ne!(inf.get(), 0x7C00);
    assert_eq!(inf.negate().get(), 0xFFFF);
}

#[test]
fn test_fp16b_scenarios() {
    assert_eq!(ScalarFP16b::new(1.0).get(), 0x3F80);
    assert_eq!(ScalarFP16::new(1.0, Format::Fp16b).get(), 0x3F80);
    assert_eq!(ScalarFP16b::new(f32::NAN).get(), f32::NAN.to_bits() >> 16);
}

#[test]
fn test_raw_injection_keeps_all_bits() {
    for n in [0_u32, 1, 0x3C00, 0x8000_0000, 0xFFFF_FFFF] {
        for format in [Format::Fp16a, Format::Fp16b] {
            let x = ScalarFP16::from_u32(n, format);
            assert_eq!(x.get(), n);
            assert_eq!(x.get_format(), format);
        }
    }
    assert_eq!(ScalarFP16a::from(i32::MIN).get(), 0x8000_0000);
}

#[test]
fn test_negate_round_trip() {
    let x = ScalarFP16::new(3.5, Format::Fp16a);
    let n = x.negate();
    assert_eq!(n.get(), x.get() ^ 0x8000);
    assert_eq!(n.get_format(), Format::Fp16a);
    assert_eq!(n.negate(), x);
}

#[test]
fn test_format_code_round_trip() {
    let x = ScalarFP16b::new(0.25);
    assert_eq!(x.get_format().code(), hw_codes::SFPLOADI_MOD0_FLOATB);
    assert_eq!(Format::from_code(hw_codes::SFPLOADI_MOD0_FLOATA), Ok(Format::Fp16a));
}

#[test]
fn test_values_cross_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || ScalarFP16a::new(i as f32).negate()))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[1].get(), 0xBC00);
    assert_eq!(results[2].get(), 0xC000);
}
