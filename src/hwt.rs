//! Fixed Hamming-weight ternary sampler (spec.md §4.4).

use crate::error::PrgError;
use crate::prg::PrgState;
use crate::rejection::fill_isochronous_indices;
use crate::width::TernaryInt;

/// Fills `dst` with exactly `hwt` entries from `{-1, +1}` (each sign
/// independent and uniform) and the rest zero, with the nonzero
/// positions uniform over all `C(dst.len(), hwt)` possible supports.
///
/// The position/sign assignment in the final loop is branch-free: the
/// "is this slot nonzero" test and the sign draw are both folded into
/// bitmasks rather than `if`/`else` control flow, so memory access and
/// control flow never depend on where the nonzero entries end up.
///
/// # Panics
/// Panics if `hwt == 0`.
pub fn sample_hwt_array<T: TernaryInt>(
    state: &mut PrgState,
    dst: &mut [T],
    hwt: usize,
) -> Result<(), PrgError> {
    assert!(hwt > 0, "hwt must be positive");

    let mut si: Vec<u32> = Vec::new();
    si.try_reserve_exact(dst.len())
        .map_err(|_| PrgError::AllocationFailure)?;
    si.resize(dst.len(), 0);
    fill_isochronous_indices(state, &mut si);

    let mut c0: i64 = dst.len() as i64 - hwt as i64;
    for (i, slot) in dst.iter_mut().enumerate() {
        let below = (si[i] as i64) < c0;
        let t0: i64 = -(below as i64);
        c0 += t0;
        let tentative = 1 + t0; // 1 if nonzero slot, 0 if zero slot

        let mut rnd = [0u8; 1];
        state.get_bytes(&mut rnd);
        let sign_bit = 1i64 - (((rnd[0] & 1) as i64) << 1); // +1 or -1
        let value = (-tentative) & sign_bit;

        *slot = T::from_sign(value as i8);
    }

    zeroize::Zeroize::zeroize(&mut si);
    Ok(())
}

/// Fixed Hamming-weight sampling into an `i8` output buffer.
pub fn sample_hwt_i8_array(
    state: &mut PrgState,
    dst: &mut [i8],
    hwt: usize,
) -> Result<(), PrgError> {
    sample_hwt_array(state, dst, hwt)
}

/// Fixed Hamming-weight sampling into an `i32` output buffer.
pub fn sample_hwt_i32_array(
    state: &mut PrgState,
    dst: &mut [i32],
    hwt: usize,
) -> Result<(), PrgError> {
    sample_hwt_array(state, dst, hwt)
}

/// Fixed Hamming-weight sampling into an `i64` output buffer.
pub fn sample_hwt_i64_array(
    state: &mut PrgState,
    dst: &mut [i64],
    hwt: usize,
) -> Result<(), PrgError> {
    sample_hwt_array(state, dst, hwt)
}
