//! Prefix feasibility over checksummed Base58 payloads.
//!
//! Given a fixed raw payload length and a desired text prefix, find the
//! smallest and largest raw values whose base58check encoding starts with
//! that prefix.
//!
//! ## Core insight
//!
//! The prefix pins the most significant base-58 digits of the encoded
//! integer, which pins the most significant *bytes* of the raw value.
//! Base 58 and base 256 digit boundaries never line up, though, so the
//! bracket below is only an approximation:
//!
//! 1. Scale the prefix integer by `58^free` to align it with the full
//!    payload-plus-checksum integer space.
//! 2. Shift down to the byte width the prefix actually pins, rounding
//!    `lo` up and `hi` down so every completion of the undetermined low
//!    bytes stays inside the prefix bucket.
//! 3. Round-trip both boundary payloads through the real encoder. Only
//!    that agreement counts as proof; the arithmetic alone can be off by
//!    one at a digit boundary.
//!
//! Symbol order equals digit value order in the alphabet, so checking
//! the two endpoints covers every interior value.

use num_bigint::{BigInt, BigUint};

use crate::alphabet;

/// Checksum suffix base58check appends before rendering: first 4 bytes
/// of a double SHA-256 of the payload.
pub const CHECKSUM_LEN: usize = 4;

/// Fixed sizing for one identifier family.
///
/// `encoded_len` is a property of the checksum scheme at this payload
/// length, not a general base-change fact; validate it empirically when
/// introducing a new layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLayout {
    /// Raw payload length in bytes, checksum excluded.
    pub payload_len: usize,
    /// Text length of the checksummed encoding of any such payload
    /// whose leading byte is non-zero.
    pub encoded_len: usize,
}

/// Boundary witnesses for a feasible prefix.
///
/// Any payload lexicographically between `lo` and `hi` encodes to text
/// starting with the requested prefix; callers pick a concrete interior
/// completion (real digest bytes, say) at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibleRange {
    /// Smallest matching payload: pinned head bytes, zero fill.
    pub lo: Vec<u8>,
    /// Largest matching payload: pinned head bytes, 0xFF fill.
    pub hi: Vec<u8>,
    /// Encoding of `lo`, starts with the prefix.
    pub lo_text: String,
    /// Encoding of `hi`, starts with the prefix.
    pub hi_text: String,
}

/// Find the payload range whose base58check encoding starts with `prefix`.
///
/// Returns None when the prefix cannot be embedded at this layout: too
/// many symbols pinned for the payload width, or the approximate bracket
/// fails boundary verification. That is a normal negative outcome, not a
/// defect; callers should shorten the prefix.
///
/// # Panics
///
/// Panics if `prefix` contains a symbol outside the Base58 alphabet.
/// Callers sanitize first; see [`crate::statement::sanitize`].
pub fn solve(layout: &PayloadLayout, prefix: &str) -> Option<FeasibleRange> {
    let target = alphabet::decode_to_integer(prefix)
        .expect("prefix must be drawn from the base58 alphabet");

    let free_symbols = layout.encoded_len.checked_sub(prefix.len())?;
    let total_len = layout.payload_len + CHECKSUM_LEN;

    // Bytes a raw base58 decode of the prefix occupies, plus one: how
    // many leading payload-plus-checksum bytes the prefix pins down.
    let leading_ones = prefix.bytes().take_while(|&b| b == b'1').count();
    let pinned_bytes = leading_ones + ((target.bits() + 7) / 8) as usize + 1;
    if pinned_bytes > total_len {
        return None;
    }
    let shift = 8 * (total_len - pinned_bytes);

    let scale = BigUint::from(58u32).pow(free_symbols as u32);
    let scaled = &target * &scale;

    // Truncating division must never fall short of the bucket's lower
    // bound, so round up when the shift is inexact.
    let mut lo = &scaled >> shift;
    if (&lo << shift) != scaled {
        lo += 1u32;
    }

    // Largest pinned value whose every completion stays below the next
    // prefix bucket. Signed: goes negative when the prefix pins more
    // bits than the layout has to offer.
    let hi =
        (BigInt::from((&target + 1u32) * &scale) - (BigInt::from(1) << shift) + 1u32) >> shift;
    let hi = match hi.to_biguint() {
        Some(hi) if hi >= lo => hi,
        _ => return None,
    };

    let lo_bytes = fill_payload(&lo, layout.payload_len, 0x00)?;
    let hi_bytes = fill_payload(&hi, layout.payload_len, 0xFF)?;

    // Empirical round-trip on both boundaries is the actual feasibility
    // proof; the bracket above can be wrong at the margins.
    let lo_text = verify_boundary(layout, prefix, &lo_bytes)?;
    let hi_text = verify_boundary(layout, prefix, &hi_bytes)?;

    Some(FeasibleRange { lo: lo_bytes, hi: hi_bytes, lo_text, hi_text })
}

/// Place a boundary value's big-endian bytes at the head of a payload
/// and fill the undetermined tail. None if the value is too wide.
fn fill_payload(value: &BigUint, payload_len: usize, fill: u8) -> Option<Vec<u8>> {
    let head = alphabet::integer_to_bytes(value);
    if head.len() > payload_len {
        return None;
    }
    let mut payload = vec![fill; payload_len];
    payload[..head.len()].copy_from_slice(&head);
    Some(payload)
}

/// Encode a boundary payload and accept it only if the text literally
/// starts with the prefix at exactly the layout's encoded length.
fn verify_boundary(layout: &PayloadLayout, prefix: &str, payload: &[u8]) -> Option<String> {
    let text = bs58::encode(payload).with_check().into_string();
    (text.starts_with(prefix) && text.len() == layout.encoded_len).then_some(text)
}

// ============================================================================
// TESTS
// ============================================================================
