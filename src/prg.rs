use crate::algorithm::Algorithm;
use crate::error::{try_zeroed_vec, PrgError};
use crate::sponge::SpongeReader;
use rand_core::RngCore;
use zeroize::Zeroize;

/// A seeded, block-buffered byte stream.
///
/// `PrgState` owns a sponge and a `rate`-sized output buffer. Bytes are
/// produced from the buffer and the buffer is refilled one squeezed
/// block at a time, so the `n`-th byte produced for a given seed never
/// depends on how the caller chunked its `get_bytes` calls (spec.md §4.1
/// "Determinism invariant").
///
/// A `PrgState` has exclusive-access semantics: nothing here is
/// `Sync`, and concurrent use of the same instance from multiple
/// threads is not supported (spec.md §5).
pub struct PrgState {
    algorithm: Algorithm,
    reader: SpongeReader,
    buffer: Vec<u8>,
    cursor: usize,
}

impl PrgState {
    /// Absorbs `seed` once, squeezes the first block, and returns a
    /// freshly seeded generator.
    ///
    /// # Panics
    /// Panics if `seed.len()` does not match `algorithm.seed_len()` — a
    /// mismatched seed length is a precondition violation, not a
    /// recoverable error (spec.md §7.2).
    pub fn init(seed: &[u8], algorithm: Algorithm) -> Result<Self, PrgError> {
        assert_eq!(
            seed.len(),
            algorithm.seed_len(),
            "seed length {} does not match {:?}'s required length {}",
            seed.len(),
            algorithm,
            algorithm.seed_len(),
        );
        let mut buffer = try_zeroed_vec(algorithm.rate())?;
        let mut reader = SpongeReader::absorb_once(algorithm, seed);
        reader.squeeze(&mut buffer);
        Ok(Self {
            algorithm,
            reader,
            buffer,
            cursor: 0,
        })
    }

    /// Replaces the sponge's absorbed seed and discards any buffered
    /// output from the prior seed (spec.md §4.1, §9 Open Question (a):
    /// reseed *replaces*, it does not XOR into, the sponge).
    ///
    /// # Panics
    /// Panics if `seed.len()` does not match this generator's algorithm.
    pub fn reseed(&mut self, seed: &[u8]) {
        assert_eq!(
            seed.len(),
            self.algorithm.seed_len(),
            "seed length {} does not match {:?}'s required length {}",
            seed.len(),
            self.algorithm,
            self.algorithm.seed_len(),
        );
        self.reader = SpongeReader::absorb_once(self.algorithm, seed);
        self.reader.squeeze(&mut self.buffer);
        self.cursor = 0;
    }

    /// The algorithm this generator was initialized with.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Fills `dst` with exactly `dst.len()` bytes of PRG output.
    ///
    /// Implemented as a loop rather than the reference's tail recursion
    /// (spec.md §9 "Recursion in get-bytes") so a single very large
    /// request cannot grow the stack.
    pub fn get_bytes(&mut self, dst: &mut [u8]) {
        let rate = self.algorithm.rate();
        let mut written = 0;
        while written < dst.len() {
            if self.cursor == rate {
                self.reader.squeeze(&mut self.buffer);
                self.cursor = 0;
            }
            let available = rate - self.cursor;
            let remaining = dst.len() - written;
            let take = available.min(remaining);
            dst[written..written + take]
                .copy_from_slice(&self.buffer[self.cursor..self.cursor + take]);
            self.cursor += take;
            written += take;
        }
    }
}

impl RngCore for PrgState {
    fn next_u32(&mut self) -> u32 {
        crate::uniform::get_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        crate::uniform::get_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.get_bytes(dst);
    }
}

impl Drop for PrgState {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}
