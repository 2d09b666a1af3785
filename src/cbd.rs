//! Centered binomial distribution sampler (spec.md §4.5).

use crate::prg::PrgState;
use crate::width::WideInt;

/// Fills `dst` with `popcount(A) - popcount(B)` for independent uniform
/// `k`-bit words `A`, `B`, where `k = cbd_num_flips`. Output lies on
/// `{-k, ..., +k}` with variance `k / 2`. No rejection and no branching
/// on sampled data: every element costs exactly `2 * ceil(k / 8)` bytes
/// of PRG output.
///
/// # Panics
/// Panics if `k == 0` or `k > 64` (outside that range a single 64-bit
/// word can no longer hold the flips).
pub fn sample_cbd_array<T: WideInt>(state: &mut PrgState, dst: &mut [T], k: usize) {
    assert!(k > 0 && k <= 64, "cbd_num_flips must be in 1..=64, got {k}");
    let mask: u64 = if k == 64 { u64::MAX } else { (1u64 << k) - 1 };
    let num_bytes = k.div_ceil(8);

    for slot in dst.iter_mut() {
        let a = draw_masked_word(state, num_bytes, mask);
        let b = draw_masked_word(state, num_bytes, mask);
        let diff = a.count_ones() as i32 - b.count_ones() as i32;
        *slot = T::from_i32(diff);
    }
}

fn draw_masked_word(state: &mut PrgState, num_bytes: usize, mask: u64) -> u64 {
    let mut buf = [0u8; 8];
    state.get_bytes(&mut buf[..num_bytes]);
    u64::from_le_bytes(buf) & mask
}

/// CBD sampling into an `i32` output buffer.
pub fn sample_cbd_i32_array(state: &mut PrgState, dst: &mut [i32], k: usize) {
    sample_cbd_array(state, dst, k)
}

/// CBD sampling into an `i64` output buffer.
pub fn sample_cbd_i64_array(state: &mut PrgState, dst: &mut [i64], k: usize) {
    sample_cbd_array(state, dst, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, PrgState};

    #[test]
    fn bounded_by_k() {
        let mut state = PrgState::init(&[2u8; 32], Algorithm::Shake128).unwrap();
        let mut dst = [0i32; 4096];
        sample_cbd_i32_array(&mut state, &mut dst, 21);
        assert!(dst.iter().all(|&v| v.unsigned_abs() <= 21));
    }

    #[test]
    fn variance_close_to_k_over_two() {
        let mut state = PrgState::init(&[2u8; 32], Algorithm::Shake128).unwrap();
        let mut dst = [0i32; 4096];
        let k = 21usize;
        sample_cbd_i32_array(&mut state, &mut dst, k);

        let n = dst.len() as f64;
        let mean: f64 = dst.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var: f64 =
            dst.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
        let expected = k as f64 / 2.0;
        assert!(
            (var - expected).abs() / expected < 0.03,
            "empirical variance {var} not within 3% of {expected}"
        );
    }

    #[test]
    fn reproducible_for_same_seed() {
        let mut a = PrgState::init(&[6u8; 32], Algorithm::Shake128).unwrap();
        let mut b = PrgState::init(&[6u8; 32], Algorithm::Shake128).unwrap();
        let mut dst_a = [0i64; 256];
        let mut dst_b = [0i64; 256];
        sample_cbd_i64_array(&mut a, &mut dst_a, 9);
        sample_cbd_i64_array(&mut b, &mut dst_b, 9);
        assert_eq!(dst_a, dst_b);
    }
}
