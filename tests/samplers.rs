use lattice_prng::{
    sample_cbd_i64_array, sample_gaussian_i64_array, sample_hwt_i8_array, Algorithm, PrgState,
};

#[test]
fn hwt_i8_sign_balance_is_plausible() {
    // spec.md §8 "HWT support and signs": |#(+1) - #(-1)| <= 3*sqrt(hwt/2)
    // with high probability.
    let mut state = PrgState::init(&[21u8; 32], Algorithm::Shake128).unwrap();
    let hwt = 200usize;
    let mut dst = [0i8; 512];
    sample_hwt_i8_array(&mut state, &mut dst, hwt).unwrap();

    let plus = dst.iter().filter(|&&v| v == 1).count();
    let minus = dst.iter().filter(|&&v| v == -1).count();
    assert_eq!(plus + minus, hwt);

    let bound = 3.0 * (hwt as f64 / 2.0).sqrt();
    assert!(
        (plus as f64 - minus as f64).abs() <= bound + 1.0,
        "sign imbalance {} exceeds bound {bound}",
        (plus as i64 - minus as i64).abs()
    );
}

#[test]
fn cbd_and_gaussian_are_independent_streams() {
    // Interleaving two different samplers against the same state should
    // just consume PRG bytes sequentially, same as any other mixed
    // sequence of calls (spec.md §4.1 "Determinism invariant").
    let seed = [13u8; 32];
    let mut a = PrgState::init(&seed, Algorithm::Shake128).unwrap();
    let mut cbd_a = [0i64; 8];
    let mut gauss_a = [0i64; 8];
    sample_cbd_i64_array(&mut a, &mut cbd_a, 8);
    sample_gaussian_i64_array(&mut a, &mut gauss_a, 2.0);

    let mut b = PrgState::init(&seed, Algorithm::Shake128).unwrap();
    let mut cbd_b = [0i64; 8];
    let mut gauss_b = [0i64; 8];
    sample_cbd_i64_array(&mut b, &mut cbd_b, 8);
    sample_gaussian_i64_array(&mut b, &mut gauss_b, 2.0);

    assert_eq!(cbd_a, cbd_b);
    assert_eq!(gauss_a, gauss_b);
}
