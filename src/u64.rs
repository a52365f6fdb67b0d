//! 64-bit conversions.
//!
//! A 64-bit word is laid out as two 32-bit words: high then low for
//! big-endian, low then high for little-endian. With the `speed` feature
//! the scalar codecs are literally built from the 32-bit ones; the default
//! build uses the native 8-byte conversions, which produce the same bytes.

use crate::region;

#[cfg(feature = "speed")]
use crate::u32::{be_to_u32_at, le_to_u32_at, u32_to_be_into, u32_to_le_into};

/// Encodes `n` as 8 big-endian bytes.
#[inline]
pub fn u64_to_be(n: u64) -> [u8; 8] {
    let mut bs = [0u8; 8];
    u64_to_be_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 8 big-endian bytes at `bs[off..off + 8]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u64_to_be_into(n: u64, bs: &mut [u8], off: usize) {
    *region::write::<8>(bs, off) = n.to_be_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 8 big-endian bytes at `bs[off..off + 8]` (two 32-bit
/// writes, high word first).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u64_to_be_into(n: u64, bs: &mut [u8], off: usize) {
    let out = region::write::<8>(bs, off);

    u32_to_be_into((n >> 32) as u32, &mut out[..], 0);
    u32_to_be_into(n as u32, &mut out[..], 4);
}

/// Encodes every word of `ns` big-endian into a freshly sized buffer.
pub fn u64s_to_be(ns: &[u64]) -> Vec<u8> {
    let mut bs = vec![0u8; ns.len() * 8];
    u64s_to_be_into(ns, &mut bs, 0);
    bs
}

/// Writes every word of `ns` big-endian, back to back, starting at `off`.
///
/// # Panics
/// Panics if `8 * ns.len()` bytes do not fit at `off`. Nothing is written
/// in that case.
#[track_caller]
pub fn u64s_to_be_into(ns: &[u64], bs: &mut [u8], off: usize) {
    let out = region::span_mut(bs, off, ns.len() * 8);

    for (chunk, &n) in out.chunks_exact_mut(8).zip(ns) {
        u64_to_be_into(n, chunk, 0);
    }
}

#[cfg(not(feature = "speed"))]
/// Decodes 8 big-endian bytes.
#[inline]
pub fn be_to_u64(bs: &[u8; 8]) -> u64 {
    u64::from_be_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 8 big-endian bytes as a high and a low 32-bit word.
#[inline(always)]
pub fn be_to_u64(bs: &[u8; 8]) -> u64 {
    let hi = be_to_u32_at(bs, 0) as u64;
    let lo = be_to_u32_at(bs, 4) as u64;

    (hi << 32) | lo
}

/// Decodes the big-endian word at `bs[off..off + 8]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn be_to_u64_at(bs: &[u8], off: usize) -> u64 {
    be_to_u64(region::read::<8>(bs, off))
}

/// Decodes `len` big-endian bytes at `off` as the low-order bytes of a
/// `u64`. Missing high-order bytes are zero.
///
/// # Panics
/// Panics if `len` is not in `1..=8` or the region does not fit in `bs`.
#[track_caller]
pub fn be_to_u64_partial(bs: &[u8], off: usize, len: usize) -> u64 {
    assert!(
        (1..=8).contains(&len),
        "partial length {len} outside 1..=8"
    );

    region::span(bs, off, len)
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Fills `ns` with big-endian words read back to back from `off`.
///
/// # Panics
/// Panics if `8 * ns.len()` bytes are not available at `off`.
#[track_caller]
pub fn be_to_u64s_into(bs: &[u8], off: usize, ns: &mut [u64]) {
    let src = region::span(bs, off, ns.len() * 8);

    for (n, chunk) in ns.iter_mut().zip(src.chunks_exact(8)) {
        *n = be_to_u64_at(chunk, 0);
    }
}

/// Decodes `count` big-endian words starting at `off`.
///
/// # Panics
/// Panics if `8 * count` bytes are not available at `off`.
#[track_caller]
pub fn be_to_u64s(bs: &[u8], off: usize, count: usize) -> Vec<u64> {
    let mut ns = vec![0u64; count];
    be_to_u64s_into(bs, off, &mut ns);
    ns
}

/// Encodes `n` as 8 little-endian bytes.
#[inline]
pub fn u64_to_le(n: u64) -> [u8; 8] {
    let mut bs = [0u8; 8];
    u64_to_le_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 8 little-endian bytes at `bs[off..off + 8]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u64_to_le_into(n: u64, bs: &mut [u8], off: usize) {
    *region::write::<8>(bs, off) = n.to_le_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 8 little-endian bytes at `bs[off..off + 8]` (two 32-bit
/// writes, low word first).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u64_to_le_into(n: u64, bs: &mut [u8], off: usize) {
    let out = region::write::<8>(bs, off);

    u32_to_le_into(n as u32, &mut out[..], 0);
    u32_to_le_into((n >> 32) as u32, &mut out[..], 4);
}

/// Encodes every word of `ns` little-endian into a freshly sized buffer.
pub fn u64s_to_le(ns: &[u64]) -> Vec<u8> {
    let mut bs = vec![0u8; ns.len() * 8];
    u64s_to_le_into(ns, &mut bs, 0);
    bs
}

/// Writes every word of `ns` little-endian, back to back, starting at `off`.
///
/// # Panics
/// Panics if `8 * ns.len()` bytes do not fit at `off`. Nothing is written
/// in that case.
#[track_caller]
pub fn u64s_to_le_into(ns: &[u64], bs: &mut [u8], off: usize) {
    let out = region::span_mut(bs, off, ns.len() * 8);

    for (chunk, &n) in out.chunks_exact_mut(8).zip(ns) {
        u64_to_le_into(n, chunk, 0);
    }
}

#[cfg(not(feature = "speed"))]
/// Decodes 8 little-endian bytes.
#[inline]
pub fn le_to_u64(bs: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 8 little-endian bytes as a low and a high 32-bit word.
#[inline(always)]
pub fn le_to_u64(bs: &[u8; 8]) -> u64 {
    let lo = le_to_u32_at(bs, 0) as u64;
    let hi = le_to_u32_at(bs, 4) as u64;

    (hi << 32) | lo
}

/// Decodes the little-endian word at `bs[off..off + 8]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn le_to_u64_at(bs: &[u8], off: usize) -> u64 {
    le_to_u64(region::read::<8>(bs, off))
}

/// Fills `ns` with little-endian words read back to back from `off`.
///
/// # Panics
/// Panics if `8 * ns.len()` bytes are not available at `off`.
#[track_caller]
pub fn le_to_u64s_into(bs: &[u8], off: usize, ns: &mut [u64]) {
    let src = region::span(bs, off, ns.len() * 8);

    for (n, chunk) in ns.iter_mut().zip(src.chunks_exact(8)) {
        *n = le_to_u64_at(chunk, 0);
    }
}

/// Decodes `count` little-endian words starting at `off`.
///
/// # Panics
/// Panics if `8 * count` bytes are not available at `off`.
#[track_caller]
pub fn le_to_u64s(bs: &[u8], off: usize, count: usize) -> Vec<u64> {
    let mut ns = vec![0u64; count];
    le_to_u64s_into(bs, off, &mut ns);
    ns
}
