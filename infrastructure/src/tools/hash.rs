//! Stable hashing for synthetic tool data.
//!
//! `std`'s hasher is randomly seeded per process, so it cannot back data
//! that must be identical across runs.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `input`.
pub fn stable_hash(input: &str) -> u64 {
    input.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// `stable_hash(input) % modulus` as a `usize`; `modulus` must be non-zero.
pub fn bucket(input: &str, modulus: u64) -> usize {
    (stable_hash(input) % modulus) as usize
}
