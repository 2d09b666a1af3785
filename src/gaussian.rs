//! Discrete Gaussian sampler via the Box–Muller transform (spec.md §4.6).
//!
//! Not constant-time: both the `ln`/`sqrt`/trig calls and `f64::round`
//! have output-dependent timing on common platforms. Callers needing
//! side-channel resistance for Gaussian sampling need a different
//! distribution (spec.md §5 "Timing discipline").

use crate::prg::PrgState;
use crate::width::WideInt;
use std::f64::consts::TAU;

/// Fills `dst` with discrete Gaussian samples of standard deviation
/// `stdev`, two at a time via Box–Muller. `f64::round` ties away from
/// zero, matching the reference's `lround`/`llround`.
///
/// # Panics
/// Panics if `dst.len()` is odd.
pub fn sample_gaussian_array<T: WideInt>(state: &mut PrgState, dst: &mut [T], stdev: f64) {
    assert_eq!(dst.len() % 2, 0, "dst_len must be even");

    let mut pairs = dst.chunks_exact_mut(2);
    for pair in &mut pairs {
        let word = crate::uniform::get_u64(state);
        let rn1 = word >> 32;
        let rn2 = word & 0xFFFF_FFFF;

        let r1 = rn1 as f64 / 4294967296.0; // 2^32, in [0, 1)
        let r2 = (rn2 as f64 + 1.0) / 4294967296.0; // avoids ln(0), in (0, 1]
        let theta = r1 * TAU;
        let rr = stdev * (-2.0 * r2.ln()).sqrt();

        pair[0] = T::from_rounded_f64((rr * theta.cos()).round());
        pair[1] = T::from_rounded_f64((rr * theta.sin()).round());
    }
}

/// Gaussian sampling into an `i32` output buffer.
pub fn sample_gaussian_i32_array(state: &mut PrgState, dst: &mut [i32], stdev: f64) {
    sample_gaussian_array(state, dst, stdev)
}

/// Gaussian sampling into an `i64` output buffer.
pub fn sample_gaussian_i64_array(state: &mut PrgState, dst: &mut [i64], stdev: f64) {
    sample_gaussian_array(state, dst, stdev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, PrgState};

    #[test]
    fn empirical_std_close_to_sigma() {
        let mut state = PrgState::init(&[4u8; 32], Algorithm::Shake128).unwrap();
        let mut dst = [0i32; 4096];
        let sigma = 3.2;
        sample_gaussian_i32_array(&mut state, &mut dst, sigma);

        let n = dst.len() as f64;
        let mean: f64 = dst.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var: f64 =
            dst.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
        let std = var.sqrt();
        assert!(
            (std - sigma).abs() / sigma < 0.03,
            "empirical std {std} not within 3% of {sigma}"
        );
    }

    #[test]
    fn reproducible_for_same_seed() {
        let mut a = PrgState::init(&[8u8; 32], Algorithm::Shake128).unwrap();
        let mut b = PrgState::init(&[8u8; 32], Algorithm::Shake128).unwrap();
        let mut dst_a = [0i32; 4096];
        let mut dst_b = [0i32; 4096];
        sample_gaussian_i32_array(&mut a, &mut dst_a, 3.2);
        sample_gaussian_i32_array(&mut b, &mut dst_b, 3.2);
        assert_eq!(dst_a, dst_b);
    }

    #[test]
    #[should_panic]
    fn odd_length_panics() {
        let mut state = PrgState::init(&[1u8; 32], Algorithm::Shake128).unwrap();
        let mut dst = [0i32; 3];
        sample_gaussian_i32_array(&mut state, &mut dst, 1.0);
    }
}
