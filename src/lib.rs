//! Cryptographically-seeded pseudorandom generation and structured
//! sampling for lattice-based cryptography.
//!
//! Given a high-entropy seed, [`PrgState`] deterministically produces
//! unbounded streams of uniform bytes via a SHAKE128/SHAKE256 sponge.
//! On top of that stream, this crate draws samples from the three
//! distributions lattice schemes (NTRU-, Ring-LWE-style) need:
//!
//! - [`sample_hwt_i32_array`] and friends — fixed Hamming-weight
//!   ternary vectors, sampled with an isochronous rejection scheme so
//!   the support of the nonzero entries never leaks through timing.
//! - [`sample_cbd_i32_array`] and friends — centered binomial
//!   distributions.
//! - [`sample_gaussian_i32_array`] and friends — discrete Gaussians via
//!   Box–Muller (not constant-time; see that module's docs).
//!
//! A small HMAC-SHA3-256 / HKDF module ([`hkdf`]) rounds out the crate
//! for deterministic key expansion, sharing [`PrgError`]'s failure
//! semantics with everything else here.
//!
//! # Example
//! ```
//! use lattice_prng::{Algorithm, PrgState};
//!
//! let seed = [0u8; 32];
//! let mut prg = PrgState::init(&seed, Algorithm::Shake128).unwrap();
//!
//! let mut bytes = [0u8; 168];
//! prg.get_bytes(&mut bytes);
//! ```
//!
//! # Security considerations
//! A [`PrgState`] has exclusive-access semantics: it is not `Sync`, and
//! concurrent use of one instance across threads is unsupported.
//! Its internal buffer is zeroized on drop, but entropy acquisition for
//! the initial seed is the caller's responsibility — this crate accepts
//! seeds, it does not generate them.

mod algorithm;
mod cbd;
mod error;
mod gaussian;
mod hwt;
mod kdf;
mod prg;
mod rejection;
mod sponge;
mod uniform;
mod width;

pub use algorithm::Algorithm;
pub use cbd::{sample_cbd_array, sample_cbd_i32_array, sample_cbd_i64_array};
pub use error::PrgError;
pub use gaussian::{
    sample_gaussian_array, sample_gaussian_i32_array, sample_gaussian_i64_array,
};
pub use hwt::{
    sample_hwt_array, sample_hwt_i32_array, sample_hwt_i64_array, sample_hwt_i8_array,
};
pub use kdf::{hkdf, hkdf_expand, hkdf_extract, hmac_sha3_256};
pub use prg::PrgState;
pub use uniform::{
    get_u32, get_u32_array, get_u32_array_in_range, get_u32_in_range, get_u64,
    get_u64_array, get_u64_array_in_range, get_u64_in_range,
};
pub use width::{TernaryInt, WideInt};
