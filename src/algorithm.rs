/// The sponge algorithm backing a [`crate::PrgState`].
///
/// Exactly two variants are admitted, matching the two XOFs the PRG is
/// specified over. Seed length is implied by the tag: `Shake128` expects
/// a 32-byte seed (its 128-bit security parameter), `Shake256` expects a
/// 64-byte seed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Shake128,
    Shake256,
}

impl Algorithm {
    /// Sponge rate in bytes: the number of bytes squeezed per block.
    pub const fn rate(self) -> usize {
        match self {
            Algorithm::Shake128 => 168,
            Algorithm::Shake256 => 136,
        }
    }

    /// Required seed length in bytes for this algorithm.
    pub const fn seed_len(self) -> usize {
        match self {
            Algorithm::Shake128 => 32,
            Algorithm::Shake256 => 64,
        }
    }
}
