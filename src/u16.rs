//! 16-bit conversions.
//!
//! Scalars are available in both byte orders. Arrays of 16-bit words are
//! big-endian only, and decoding them is the single checked operation of
//! the crate: an odd byte count is rejected with [`PackError::OddLength`].

use crate::error::PackError;
use crate::region;

/// Encodes `n` as 2 big-endian bytes.
#[inline]
pub fn u16_to_be(n: u16) -> [u8; 2] {
    let mut bs = [0u8; 2];
    u16_to_be_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 2 big-endian bytes at `bs[off..off + 2]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u16_to_be_into(n: u16, bs: &mut [u8], off: usize) {
    *region::write::<2>(bs, off) = n.to_be_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 2 big-endian bytes at `bs[off..off + 2]` (manual shifts).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u16_to_be_into(n: u16, bs: &mut [u8], off: usize) {
    let out = region::write::<2>(bs, off);

    out[0] = (n >> 8) as u8;
    out[1] = n as u8;
}

/// Encodes every word of `ns` big-endian into a freshly sized buffer.
pub fn u16s_to_be(ns: &[u16]) -> Vec<u8> {
    let mut bs = vec![0u8; ns.len() * 2];
    u16s_to_be_into(ns, &mut bs, 0);
    bs
}

/// Writes every word of `ns` big-endian, back to back, starting at `off`.
///
/// # Panics
/// Panics if `2 * ns.len()` bytes do not fit at `off`. Nothing is written
/// in that case.
#[track_caller]
pub fn u16s_to_be_into(ns: &[u16], bs: &mut [u8], off: usize) {
    let out = region::span_mut(bs, off, ns.len() * 2);

    for (chunk, &n) in out.chunks_exact_mut(2).zip(ns) {
        u16_to_be_into(n, chunk, 0);
    }
}

#[cfg(not(feature = "speed"))]
/// Decodes 2 big-endian bytes.
#[inline]
pub fn be_to_u16(bs: &[u8; 2]) -> u16 {
    u16::from_be_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 2 big-endian bytes (manual shifts).
#[inline(always)]
pub fn be_to_u16(bs: &[u8; 2]) -> u16 {
    ((bs[0] as u16) << 8) | (bs[1] as u16)
}

/// Decodes the big-endian word at `bs[off..off + 2]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn be_to_u16_at(bs: &[u8], off: usize) -> u16 {
    be_to_u16(region::read::<2>(bs, off))
}

/// Decodes the big-endian word at `bs_off` into `ns[ns_off]`.
///
/// # Panics
/// Panics if the source region or the destination slot is out of range.
#[inline]
#[track_caller]
pub fn be_to_u16_into(bs: &[u8], bs_off: usize, ns: &mut [u16], ns_off: usize) {
    let n = be_to_u16_at(bs, bs_off);
    ns[ns_off] = n;
}

/// Decodes a whole byte sequence into big-endian 16-bit words.
///
/// Fails with [`PackError::OddLength`] when `bs.len()` is odd.
pub fn be_to_u16s(bs: &[u8]) -> Result<Vec<u16>, PackError> {
    be_to_u16s_at(bs, 0, bs.len())
}

/// Decodes `len` bytes starting at `off` into big-endian 16-bit words.
///
/// The length is validated before anything is read or allocated, so an
/// odd `len` yields an error and no output at all.
///
/// # Panics
/// Panics if an even-length region does not fit inside `bs`.
#[track_caller]
pub fn be_to_u16s_at(bs: &[u8], off: usize, len: usize) -> Result<Vec<u16>, PackError> {
    if len & 1 != 0 {
        return Err(PackError::OddLength { len });
    }

    let src = region::span(bs, off, len);

    Ok(src
        .chunks_exact(2)
        .map(|chunk| be_to_u16_at(chunk, 0))
        .collect())
}

/// Encodes `n` as 2 little-endian bytes.
#[inline]
pub fn u16_to_le(n: u16) -> [u8; 2] {
    let mut bs = [0u8; 2];
    u16_to_le_into(n, &mut bs, 0);
    bs
}

#[cfg(not(feature = "speed"))]
/// Writes `n` as 2 little-endian bytes at `bs[off..off + 2]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn u16_to_le_into(n: u16, bs: &mut [u8], off: usize) {
    *region::write::<2>(bs, off) = n.to_le_bytes();
}

#[cfg(feature = "speed")]
/// Writes `n` as 2 little-endian bytes at `bs[off..off + 2]` (manual shifts).
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline(always)]
#[track_caller]
pub fn u16_to_le_into(n: u16, bs: &mut [u8], off: usize) {
    let out = region::write::<2>(bs, off);

    out[0] = n as u8;
    out[1] = (n >> 8) as u8;
}

#[cfg(not(feature = "speed"))]
/// Decodes 2 little-endian bytes.
#[inline]
pub fn le_to_u16(bs: &[u8; 2]) -> u16 {
    u16::from_le_bytes(*bs)
}

#[cfg(feature = "speed")]
/// Decodes 2 little-endian bytes (manual shifts).
#[inline(always)]
pub fn le_to_u16(bs: &[u8; 2]) -> u16 {
    (bs[0] as u16) | ((bs[1] as u16) << 8)
}

/// Decodes the little-endian word at `bs[off..off + 2]`.
///
/// # Panics
/// Panics if the region does not fit inside `bs`.
#[inline]
#[track_caller]
pub fn le_to_u16_at(bs: &[u8], off: usize) -> u16 {
    le_to_u16(region::read::<2>(bs, off))
}
