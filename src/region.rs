//! Bounds-checked views into caller-supplied buffers.
//!
//! Every offset/length argument in the crate is resolved through these
//! helpers. A region that does not fit inside the buffer panics before a
//! single byte is read or written, so in-place writers never leave a
//! partially updated buffer behind.

#[cold]
#[inline(never)]
#[track_caller]
fn out_of_bounds(buf_len: usize, off: usize, len: usize) -> ! {
    panic!("region of {len} bytes at offset {off} exceeds buffer of length {buf_len}")
}

/// Borrows exactly `N` bytes starting at `off`.
#[inline(always)]
#[track_caller]
pub(crate) fn read<const N: usize>(bs: &[u8], off: usize) -> &[u8; N] {
    match bs.get(off..).and_then(|tail| tail.first_chunk::<N>()) {
        Some(chunk) => chunk,
        None => out_of_bounds(bs.len(), off, N),
    }
}

/// Mutably borrows exactly `N` bytes starting at `off`.
#[inline(always)]
#[track_caller]
pub(crate) fn write<const N: usize>(bs: &mut [u8], off: usize) -> &mut [u8; N] {
    let buf_len = bs.len();

    match bs.get_mut(off..).and_then(|tail| tail.first_chunk_mut::<N>()) {
        Some(chunk) => chunk,
        None => out_of_bounds(buf_len, off, N),
    }
}

/// Borrows `len` bytes starting at `off`.
#[inline(always)]
#[track_caller]
pub(crate) fn span(bs: &[u8], off: usize, len: usize) -> &[u8] {
    match bs.get(off..).and_then(|tail| tail.get(..len)) {
        Some(span) => span,
        None => out_of_bounds(bs.len(), off, len),
    }
}

/// Mutably borrows `len` bytes starting at `off`.
#[inline(always)]
#[track_caller]
pub(crate) fn span_mut(bs: &mut [u8], off: usize, len: usize) -> &mut [u8] {
    let buf_len = bs.len();

    match bs.get_mut(off..).and_then(|tail| tail.get_mut(..len)) {
        Some(span) => span,
        None => out_of_bounds(buf_len, off, len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_and_write_stay_inside_the_region() {
        let mut buf = [0xAAu8; 8];

        write::<2>(&mut buf, 3).copy_from_slice(&[1, 2]);

        assert_eq!(buf, [0xAA, 0xAA, 0xAA, 1, 2, 0xAA, 0xAA, 0xAA]);
        assert_eq!(read::<2>(&buf, 3), &[1, 2]);
        assert_eq!(span(&buf, 2, 3), &[0xAA, 1, 2]);
    }

    #[test]
    fn region_touching_the_end_is_accepted() {
        let buf = [0u8, 1, 2, 3];
        assert_eq!(read::<4>(&buf, 0), &[0, 1, 2, 3]);
        assert_eq!(span(&buf, 4, 0), &[] as &[u8]);
    }

    #[test]
    #[should_panic(expected = "exceeds buffer")]
    fn read_past_end_panics() {
        let buf = [0u8; 4];
        read::<4>(&buf, 1);
    }

    #[test]
    #[should_panic(expected = "exceeds buffer")]
    fn offset_past_end_panics() {
        let mut buf = [0u8; 4];
        span_mut(&mut buf, 5, 0);
    }
}
