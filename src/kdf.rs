//! HMAC-SHA3-256 and HKDF (spec.md §4.7).
//!
//! `hmac_sha3_256` deliberately does **not** implement the RFC 2104
//! short-key branch (key used directly, zero-padded, when
//! `key_len <= block_size`): the reference always hashes the key first,
//! and existing callers depend on that choice for byte-for-byte output
//! compatibility (spec.md §9 "HMAC key handling"). This is a documented
//! fork from RFC 2104, not a bug.

use crate::error::PrgError;
use digest::Digest;
use sha3::Sha3_256;

const BLOCK_SIZE: usize = 136;
const OUTPUT_SIZE: usize = 32;
/// `255 * 32` — the largest HKDF output this crate (and RFC 5869) allow.
const MAX_HKDF_OUTPUT: usize = 8160;

/// HMAC-SHA3-256, always hashing `key` through SHA3-256 before padding
/// it to the block size (see module docs).
pub fn hmac_sha3_256(key: &[u8], data: &[u8]) -> Result<[u8; OUTPUT_SIZE], PrgError> {
    let hashed_key = Sha3_256::digest(key);
    let mut key_pad = [0u8; BLOCK_SIZE];
    key_pad[..OUTPUT_SIZE].copy_from_slice(&hashed_key);

    let mut ipad = [0u8; BLOCK_SIZE];
    let mut opad = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        ipad[i] = key_pad[i] ^ 0x36;
        opad[i] = key_pad[i] ^ 0x5c;
    }

    let mut inner_input: Vec<u8> = Vec::new();
    inner_input
        .try_reserve_exact(BLOCK_SIZE + data.len())
        .map_err(|_| PrgError::AllocationFailure)?;
    inner_input.extend_from_slice(&ipad);
    inner_input.extend_from_slice(data);
    let inner = Sha3_256::digest(&inner_input);

    let mut outer_input: Vec<u8> = Vec::new();
    outer_input
        .try_reserve_exact(BLOCK_SIZE + OUTPUT_SIZE)
        .map_err(|_| PrgError::AllocationFailure)?;
    outer_input.extend_from_slice(&opad);
    outer_input.extend_from_slice(&inner);
    let out = Sha3_256::digest(&outer_input);

    zeroize::Zeroize::zeroize(&mut inner_input);
    zeroize::Zeroize::zeroize(&mut outer_input);
    Ok(out.into())
}

/// HKDF-Extract: `PRK = HMAC(salt, ikm)`.
pub fn hkdf_extract(salt: &[u8], ikm: &[u8]) -> Result<[u8; OUTPUT_SIZE], PrgError> {
    hmac_sha3_256(salt, ikm)
}

/// HKDF-Expand: produces `okm_len` bytes of output keying material from
/// `prk` and `info`.
///
/// # Panics
/// Panics if `okm_len > 8160` (`255 * 32`, spec.md §1, §4.7).
pub fn hkdf_expand(
    prk: &[u8; OUTPUT_SIZE],
    info: &[u8],
    okm_len: usize,
) -> Result<Vec<u8>, PrgError> {
    assert!(
        okm_len <= MAX_HKDF_OUTPUT,
        "okm_len {okm_len} exceeds the {MAX_HKDF_OUTPUT}-byte HKDF limit"
    );

    let n = okm_len.div_ceil(OUTPUT_SIZE);
    let mut okm: Vec<u8> = Vec::new();
    okm.try_reserve_exact(okm_len)
        .map_err(|_| PrgError::AllocationFailure)?;

    let mut t_prev: Vec<u8> = Vec::new();
    for i in 1..=n {
        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(t_prev.len() + info.len() + 1)
            .map_err(|_| PrgError::AllocationFailure)?;
        data.extend_from_slice(&t_prev);
        data.extend_from_slice(info);
        data.push(i as u8);

        let t = hmac_sha3_256(prk, &data)?;
        let take = OUTPUT_SIZE.min(okm_len - okm.len());
        okm.extend_from_slice(&t[..take]);
        t_prev = t.to_vec();
    }
    Ok(okm)
}

/// HKDF-Extract then HKDF-Expand.
///
/// # Panics
/// Panics if `okm_len > 8160`.
pub fn hkdf(
    ikm: &[u8],
    salt: &[u8],
    info: &[u8],
    okm_len: usize,
) -> Result<Vec<u8>, PrgError> {
    assert!(
        okm_len <= MAX_HKDF_OUTPUT,
        "okm_len {okm_len} exceeds the {MAX_HKDF_OUTPUT}-byte HKDF limit"
    );
    let prk = hkdf_extract(salt, ikm)?;
    hkdf_expand(&prk, info, okm_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hkdf_is_extract_then_expand() {
        let ikm = b"key";
        let salt = b"salt";
        let info = b"ctx";
        let direct = hkdf(ikm, salt, info, 42).unwrap();

        let prk = hkdf_extract(salt, ikm).unwrap();
        let composed = hkdf_expand(&prk, info, 42).unwrap();
        assert_eq!(direct, composed);
    }

    #[test]
    fn reproducible() {
        let a = hkdf(b"key", b"salt", b"ctx", 42).unwrap();
        let b = hkdf(b"key", b"salt", b"ctx", 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn full_blocks_equal_concatenated_expand() {
        let prk = hkdf_extract(b"salt", b"key").unwrap();
        let full = hkdf_expand(&prk, b"ctx", 64).unwrap();
        let half = hkdf_expand(&prk, b"ctx", 32).unwrap();
        assert_eq!(&full[..32], &half[..]);
    }

    #[test]
    #[should_panic]
    fn rejects_oversized_output() {
        let _ = hkdf(b"key", b"salt", b"ctx", 8161);
    }
}
