//! Thin adapter over the two admitted XOFs.
//!
//! [`PrgState`](crate::PrgState) only ever needs "absorb once, then
//! squeeze sequential blocks" — this module hides the two concrete
//! `sha3` types behind that shape so the rest of the crate can stay
//! algorithm-agnostic.

use crate::algorithm::Algorithm;
use digest::{ExtendableOutput, Update, XofReader};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

pub(crate) enum SpongeReader {
    Shake128(Shake128Reader),
    Shake256(Shake256Reader),
}

impl SpongeReader {
    /// Absorbs `seed` once and returns a reader positioned at the start
    /// of the squeeze phase. This is the "absorb-once" operation from
    /// spec.md §4.1 — calling it again on a fresh instance is how
    /// `reseed` replaces the sponge's state wholesale.
    pub(crate) fn absorb_once(algorithm: Algorithm, seed: &[u8]) -> Self {
        debug_assert_eq!(seed.len(), algorithm.seed_len());
        match algorithm {
            Algorithm::Shake128 => {
                let mut xof = Shake128::default();
                Update::update(&mut xof, seed);
                SpongeReader::Shake128(xof.finalize_xof())
            }
            Algorithm::Shake256 => {
                let mut xof = Shake256::default();
                Update::update(&mut xof, seed);
                SpongeReader::Shake256(xof.finalize_xof())
            }
        }
    }

    /// Squeezes exactly `out.len()` bytes, continuing the sequential
    /// output stream from wherever the reader left off.
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        match self {
            SpongeReader::Shake128(reader) => reader.read(out),
            SpongeReader::Shake256(reader) => reader.read(out),
        }
    }
}
