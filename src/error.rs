use core::fmt;

/// Recoverable failures surfaced by this crate.
///
/// Everything else — a range smaller than 2, an odd-length Gaussian
/// request, an oversized HKDF output, a seed of the wrong length for its
/// algorithm — is a precondition violation, not a recoverable error, and
/// is enforced with an assertion instead (see the crate-level docs).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrgError {
    /// A heap allocation required to service the call could not be
    /// satisfied.
    AllocationFailure,
}

impl fmt::Display for PrgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrgError::AllocationFailure => {
                write!(f, "allocation failure")
            }
        }
    }
}

impl std::error::Error for PrgError {}

/// Allocates a zero-filled buffer of `len` bytes, reporting allocation
/// failure through [`PrgError`] instead of aborting the process.
pub(crate) fn try_zeroed_vec(len: usize) -> Result<Vec<u8>, PrgError> {
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| PrgError::AllocationFailure)?;
    buf.resize(len, 0);
    Ok(buf)
}
