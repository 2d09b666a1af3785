//! Isochronous rejection sampler (spec.md §4.3).
//!
//! Produces the `n - 1` swap indices the fixed Hamming-weight sampler
//! (spec.md §4.4) needs to run an in-place Fisher–Yates-style pass
//! without ever branching on a secret value. See "Efficient isochronous
//! fixed-weight sampling with applications to NTRU"
//! (<https://eprint.iacr.org/2024/548>) for why this shape is unbiased.

use crate::prg::PrgState;

/// Bit-width of the rejection sampler's random words. `n` must satisfy
/// `n <= 2^L`; 30 bits comfortably covers the vector lengths lattice
/// schemes use (hundreds to low thousands) while keeping each trial to
/// a 4-byte PRG draw.
const L: u32 = 30;

/// Fills `si[0..n-1)` so that `si[i]` is uniform on `[0, n - 1 - i)`;
/// `si[n-1]` is left at 0 (`si` is zeroed up front, and that last slot
/// is simply never written). The loop body's control flow and memory
/// access pattern depend only on the public length `n = si.len()`,
/// never on the sampled values themselves or on the sponge's internal
/// state. Scratch allocation happens at the caller (spec.md §9 "Error
/// surface": allocation failure is reported uniformly).
pub(crate) fn fill_isochronous_indices(state: &mut PrgState, si: &mut [u32]) {
    let n = si.len();
    assert!(n > 0, "n must be positive");
    let two_to_l: u64 = 1u64 << L;
    assert!(n as u64 <= two_to_l, "n must not exceed 2^{L}");

    si.fill(0);
    for i in 0..n.saturating_sub(1) {
        let s = (n - 1 - i) as u64;
        let t = two_to_l % s;
        let m = loop {
            let mut buf = [0u8; 4];
            state.get_bytes(&mut buf);
            let rnd = (u32::from_le_bytes(buf) as u64) & (two_to_l - 1);
            let m = rnd * s;
            let l = m & (two_to_l - 1);
            if l >= t {
                break m;
            }
        };
        si[i] = (m >> L) as u32;
    }
}
