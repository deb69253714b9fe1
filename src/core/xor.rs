#![forbid(unsafe_code)]
// XOR accumulation for entropy buffers.
// - Processes 8-byte words followed by a byte tail.
// - No secret-dependent branching; length equality is enforced by callers.

/// XORs `pad` into `acc` in place.
/// Requires: `acc.len() == pad.len()`.
#[inline(always)]
pub fn xor_into(acc: &mut [u8], pad: &[u8]) {
    debug_assert_eq!(acc.len(), pad.len());
    let len = acc.len().min(pad.len());
    let mut i = 0;

    while i + 8 <= len {
        let mut a = [0u8; 8];
        let mut b = [0u8; 8];
        a.copy_from_slice(&acc[i..i + 8]);
        b.copy_from_slice(&pad[i..i + 8]);
        let x = u64::from_ne_bytes(a) ^ u64::from_ne_bytes(b);
        acc[i..i + 8].copy_from_slice(&x.to_ne_bytes());
        i += 8;
    }

    while i < len {
        acc[i] ^= pad[i];
        i += 1;
    }
}
