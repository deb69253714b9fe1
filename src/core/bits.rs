#![forbid(unsafe_code)]
// MSB-first bit packing over a fixed 264-bit buffer.
// - Large enough for the longest ENT || CS string (24 words x 11 bits).
// - Widths are at most 16 bits per call; callers never exceed capacity.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Capacity in bits: 24 words of 11 bits.
pub const MAX_BITS: usize = 264;
const MAX_BYTES: usize = MAX_BITS / 8;

/// Append-only bit string.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct BitWriter {
    buf: [u8; MAX_BYTES],
    len: usize,
}

impl fmt::Debug for BitWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitWriter")
            .field("len", &self.len)
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { buf: [0u8; MAX_BYTES], len: 0 }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push(&mut self, value: u16, width: usize) {
        debug_assert!(width <= 16);
        debug_assert!(self.len + width <= MAX_BITS);
        for shift in (0..width).rev() {
            if (value >> shift) & 1 == 1 {
                self.buf[self.len / 8] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Appends whole bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(u16::from(b), 8);
        }
    }

    /// Backing bytes covering every written bit; a trailing partial byte is
    /// zero-padded on the right.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..(self.len + 7) / 8]
    }

    /// Reader positioned at the first bit.
    pub fn reader(&self) -> BitReader<'_> {
        BitReader { bits: self, pos: 0 }
    }
}

/// Sequential reader over a `BitWriter`.
pub struct BitReader<'a> {
    bits: &'a BitWriter,
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        self.bits.len - self.pos
    }

    /// Reads the next `width` bits as an unsigned value, or `None` when fewer
    /// than `width` bits remain.
    pub fn read(&mut self, width: usize) -> Option<u16> {
        debug_assert!(width <= 16);
        if width > self.remaining() {
            return None;
        }
        let mut value = 0u16;
        for _ in 0..width {
            let bit = (self.bits.buf[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | u16::from(bit);
            self.pos += 1;
        }
        Some(value)
    }
}
