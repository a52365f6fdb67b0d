//! 32-bit conversions.
//!
//! Besides the scalar and array codecs in both byte orders, this module
//! holds the two narrow decoders used for protocol fields that are
//! shorter than a full word:
//!
//! - [`be_to_u32_partial`] reads 1 to 4 big-endian bytes, treating the
//!   missing high-order bytes as zero (e.g. a 3-byte handshake length).
//! - [`le_to_u24_at`] reads a 3-byte little-endian value.
//!
//! There is no little-endian partial decoder and no 24-bit encoder.

use crate::region;

/// Encodes `n` as 4 big-endian bytes.
#[inline]
pub fn u32_to_be(n: u32) -> [u8; 4] {
    let mut bs = [0u8; 4];
    u32_to_be_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 4 big-endian bytes at `bs[off..off + 4]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u32_to_be_into(n: u32, bs: &mut [u8], off: usize) {
    *region::write::<4>(bs, off) = n.to_be_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 4 big-endian bytes at `bs[off..off + 4]` (manual shifts).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u32_to_be_into(n: u32, bs: &mut [u8], off: usize) {
    let out = region::write::<4>(bs, off);

    out[0] = (n >> 24) as u8;
    out[1] = (n >> 16) as u8;
    out[2] = (n >> 8) as u8;
    out[3] = n as u8;
}

/// Encodes every word of `ns` big-endian into a freshly sized buffer.
pub fn u32s_to_be(ns: &[u32]) -> Vec<u8> {
    let mut bs = vec![0u8; ns.len() * 4];
    u32s_to_be_into(ns, &mut bs, 0);
    bs
}

/// Writes every word of `ns` big-endian, back to back, starting at `off`.
///
/// # Panics
/// Panics if `4 * ns.len()` bytes do not fit at `off`. Nothing is written
/// in that case.
#[track_caller]
pub fn u32s_to_be_into(ns: &[u32], bs: &mut [u8], off: usize) {
    let out = region::span_mut(bs, off, ns.len() * 4);

    for (chunk, &n) in out.chunks_exact_mut(4).zip(ns) {
        u32_to_be_into(n, chunk, 0);
    }
}

#[cfg(not(feature = "speed"))]
/// Decodes 4 big-endian bytes.
#[inline]
pub fn be_to_u32(bs: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 4 big-endian bytes (manual shifts).
#[inline(always)]
pub fn be_to_u32(bs: &[u8; 4]) -> u32 {
    ((bs[0] as u32) << 24) | ((bs[1] as u32) << 16) | ((bs[2] as u32) << 8) | (bs[3] as u32)
}

/// Decodes the big-endian word at `bs[off..off + 4]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn be_to_u32_at(bs: &[u8], off: usize) -> u32 {
    be_to_u32(region::read::<4>(bs, off))
}

/// Decodes `len` big-endian bytes at `off` as the low-order bytes of a
/// `u32`.
///
/// The result equals [`be_to_u32`] applied to the same bytes left-padded
/// with `4 - len` zeros.
///
/// # Panics
/// Panics if `len` is not in `1..=4` or the region does not fit in `bs`.
#[track_caller]
pub fn be_to_u32_partial(bs: &[u8], off: usize, len: usize) -> u32 {
    assert!(
        (1..=4).contains(&len),
        "partial length {len} outside 1..=4"
    );

    region::span(bs, off, len)
        .iter()
        .fold(0u32, |acc, &b| (acc << 8) | b as u32)
}

/// Fills `ns` with big-endian words read back to back from `off`.
///
/// # Panics
/// Panics if `4 * ns.len()` bytes are not available at `off`.
#[track_caller]
pub fn be_to_u32s_into(bs: &[u8], off: usize, ns: &mut [u32]) {
    let src = region::span(bs, off, ns.len() * 4);

    for (n, chunk) in ns.iter_mut().zip(src.chunks_exact(4)) {
        *n = be_to_u32_at(chunk, 0);
    }
}

/// Decodes `count` big-endian words starting at `off`.
///
/// # Panics
/// Panics if `4 * count` bytes are not available at `off`.
#[track_caller]
pub fn be_to_u32s(bs: &[u8], off: usize, count: usize) -> Vec<u32> {
    let mut ns = vec![0u32; count];
    be_to_u32s_into(bs, off, &mut ns);
    ns
}

/// Encodes `n` as 4 little-endian bytes.
#[inline]
pub fn u32_to_le(n: u32) -> [u8; 4] {
    let mut bs = [0u8; 4];
    u32_to_le_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 4 little-endian bytes at `bs[off..off + 4]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u32_to_le_into(n: u32, bs: &mut [u8], off: usize) {
    *region::write::<4>(bs, off) = n.to_le_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 4 little-endian bytes at `bs[off..off + 4]` (manual shifts).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u32_to_le_into(n: u32, bs: &mut [u8], off: usize) {
    let out = region::write::<4>(bs, off);

    out[0] = n as u8;
    out[1] = (n >> 8) as u8;
    out[2] = (n >> 16) as u8;
    out[3] = (n >> 24) as u8;
}

/// Encodes every word of `ns` little-endian into a freshly sized buffer.
pub fn u32s_to_le(ns: &[u32]) -> Vec<u8> {
    let mut bs = vec![0u8; ns.len() * 4];
    u32s_to_le_into(ns, &mut bs, 0);
    bs
}

/// Writes every word of `ns` little-endian, back to back, starting at `off`.
///
/// # Panics
/// Panics if `4 * ns.len()` bytes do not fit at `off`. Nothing is written
/// in that case.
#[track_caller]
pub fn u32s_to_le_into(ns: &[u32], bs: &mut [u8], off: usize) {
    let out = region::span_mut(bs, off, ns.len() * 4);

    for (chunk, &n) in out.chunks_exact_mut(4).zip(ns) {
        u32_to_le_into(n, chunk, 0);
    }
}

/// Decodes the 3 little-endian bytes at `bs[off..off + 3]`.
///
/// The top 8 bits of the result are always zero.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn le_to_u24_at(bs: &[u8], off: usize) -> u32 {
    let b = region::read::<3>(bs, off);

    (b[0] as u32) | ((b[1] as u32) << 8) | ((b[2] as u32) << 16)
}

#[cfg(not(feature = "speed"))]
/// Decodes 4 little-endian bytes.
#[inline]
pub fn le_to_u32(bs: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 4 little-endian bytes (manual shifts).
#[inline(always)]
pub fn le_to_u32(bs: &[u8; 4]) -> u32 {
    (bs[0] as u32) | ((bs[1] as u32) << 8) | ((bs[2] as u32) << 16) | ((bs[3] as u32) << 24)
}

/// Decodes the little-endian word at `bs[off..off + 4]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn le_to_u32_at(bs: &[u8], off: usize) -> u32 {
    le_to_u32(region::read::<4>(bs, off))
}

/// Fills `ns` with little-endian words read back to back from `off`.
///
/// # Panics
/// Panics if `4 * ns.len()` bytes are not available at `off`.
#[track_caller]
pub fn le_to_u32s_into(bs: &[u8], off: usize, ns: &mut [u32]) {
    let src = region::span(bs, off, ns.len() * 4);

    for (n, chunk) in ns.iter_mut().zip(src.chunks_exact(4)) {
        *n = le_to_u32_at(chunk, 0);
    }
}

/// Decodes `count` little-endian words starting at `off`.
///
/// # Panics
/// Panics if `4 * count` bytes are not available at `off`.
#[track_caller]
pub fn le_to_u32s(bs: &[u8], off: usize, count: usize) -> Vec<u32> {
    let mut ns = vec![0u32; count];
    le_to_u32s_into(bs, off, &mut ns);
    ns
}
