//! Fixed-width integer packing for wire formats
//!
//! This crate converts 16-, 32- and 64-bit unsigned integers to and from
//! their byte representations, in big-endian and little-endian order. It
//! is the codec layer underneath protocol and cryptographic code that has
//! to control byte layout exactly: handshake message assembly, hash state
//! serialization, counter encoding.
//!
//! The focus is on **exactness and predictability**. Every function is
//! pure, stateless and synchronous; byte order is part of the function
//! name and never a runtime parameter.
//!
//! # Module overview
//!
//! - `u16`
//!   16-bit scalars in both orders, and big-endian arrays of 16-bit words.
//!   Decoding such an array is the only operation that validates its
//!   input and returns a [`PackError`].
//!
//! - `u32`
//!   32-bit scalars and arrays in both orders, plus the narrow decoders
//!   [`be_to_u32_partial`] (1 to 4 big-endian bytes) and [`le_to_u24_at`]
//!   (a 3-byte little-endian field).
//!
//! - `u64`
//!   64-bit scalars and arrays in both orders, plus [`be_to_u64_partial`]
//!   (1 to 8 big-endian bytes). A 64-bit word is always laid out as two
//!   32-bit words.
//!
//! # Naming
//!
//! | shape                         | example                          |
//! |-------------------------------|----------------------------------|
//! | encode, owned buffer          | `u32_to_be(n) -> [u8; 4]`        |
//! | encode into caller storage    | `u32_to_be_into(n, bs, off)`     |
//! | decode an exact buffer        | `be_to_u32(&[u8; 4]) -> u32`     |
//! | decode at an offset           | `be_to_u32_at(bs, off) -> u32`   |
//! | arrays                        | `u32s_to_be`, `be_to_u32s_into`  |
//!
//! # Contract violations
//!
//! Offsets and lengths are always checked. A region that does not fit
//! inside the buffer, or a partial length outside `1..=width/8`, panics
//! before any byte is touched. The odd byte count passed to
//! [`be_to_u16s`] is the one condition reported as an error value.
//!
//! # Features
//!
//! - `speed`: use hand-unrolled shift bodies instead of the core
//!   `to_*_bytes`/`from_*_bytes` conversions. The output is identical.

mod region;

pub mod error;
pub mod u16;
pub mod u32;
pub mod u64;

pub use error::PackError;

pub use crate::u16::{
    be_to_u16, be_to_u16_at, be_to_u16_into, be_to_u16s, be_to_u16s_at, le_to_u16, le_to_u16_at,
    u16_to_be, u16_to_be_into, u16_to_le, u16_to_le_into, u16s_to_be, u16s_to_be_into,
};

pub use crate::u32::{
    be_to_u32, be_to_u32_at, be_to_u32_partial, be_to_u32s, be_to_u32s_into, le_to_u24_at,
    le_to_u32, le_to_u32_at, le_to_u32s, le_to_u32s_into, u32_to_be, u32_to_be_into, u32_to_le,
    u32_to_le_into, u32s_to_be, u32s_to_be_into, u32s_to_le, u32s_to_le_into,
};

pub use crate::u64::{
    be_to_u64, be_to_u64_at, be_to_u64_partial, be_to_u64s, be_to_u64s_into, le_to_u64,
    le_to_u64_at, le_to_u64s, le_to_u64s_into, u64_to_be, u64_to_be_into, u64_to_le,
    u64_to_le_into, u64s_to_be, u64s_to_be_into, u64s_to_le, u64s_to_le_into,
};
