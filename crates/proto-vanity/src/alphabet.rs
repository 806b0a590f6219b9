//! Base58 alphabet primitives.
//!
//! The 58-symbol alphabet (Bitcoin style) excludes `0`, `O`, `I`, `l` to
//! avoid visual ambiguity. Symbol order equals digit value order, so the
//! integer value of a fixed-length encoding is monotonic in its text;
//! the solver's range arithmetic depends on this.

use num_bigint::BigUint;

/// Base58 alphabet: digit value = position.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse lookup table, -1 for characters outside the alphabet.
const B58_DECODE: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 0x00-0x0F
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 0x10-0x1F
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, // 0x20-0x2F
    -1,  0,  1,  2,  3,  4,  5,  6,  7,  8, -1, -1, -1, -1, -1, -1, // 0x30-0x3F ('1'-'9')
    -1,  9, 10, 11, 12, 13, 14, 15, 16, -1, 17, 18, 19, 20, 21, -1, // 0x40-0x4F ('A'-'O')
    22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, -1, -1, -1, -1, -1, // 0x50-0x5F ('P'-'Z')
    -1, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, -1, 44, 45, 46, // 0x60-0x6F ('a'-'o')
    47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, -1, -1, -1, -1, -1, // 0x70-0x7F ('p'-'z')
];

/// Decode a Base58 character to its digit value (0-57).
/// Returns None for characters outside the alphabet.
#[inline]
pub fn char_to_digit(c: u8) -> Option<u8> {
    if c >= 128 {
        return None;
    }
    let v = B58_DECODE[c as usize];
    if v < 0 { None } else { Some(v as u8) }
}

/// Check whether a character is one of the 58 alphabet symbols.
#[inline]
pub fn contains(c: char) -> bool {
    c.is_ascii() && char_to_digit(c as u8).is_some()
}

/// Interpret a Base58 word as an integer (Horner's method, most
/// significant symbol first).
///
/// Returns None if any symbol falls outside the alphabet. Sanitized
/// input never does; a None here in an integration means the caller
/// skipped sanitization.
pub fn decode_to_integer(word: &str) -> Option<BigUint> {
    let mut x = BigUint::from(0u32);
    for c in word.bytes() {
        let d = char_to_digit(c)?;
        x = x * 58u32 + u32::from(d);
    }
    Some(x)
}

/// Minimal big-endian byte representation of an integer.
///
/// No leading zero byte, except that zero itself yields `[0]`.
#[inline]
pub fn integer_to_bytes(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_and_table_agree() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(char_to_digit(c), Some(i as u8), "symbol {}", c as char);
        }
    }

    #[test]
    fn test_rejects_ambiguous_characters() {
        for c in [b'0', b'O', b'I', b'l', b'+', b'/', b' ', 0xC3] {
            assert_eq!(char_to_digit(c), None);
        }
        assert!(!contains('0'));
        assert!(!contains('é'));
        assert!(contains('1'));
        assert!(contains('z'));
    }

    #[test]
    fn test_horner_accumulation() {
        let val = |w: &str| decode_to_integer(w).unwrap();
        assert_eq!(val("1"), BigUint::from(0u32));
        assert_eq!(val("2"), BigUint::from(1u32));
        assert_eq!(val("z"), BigUint::from(57u32));
        // '2' = 1, '1' = 0: 1*58 + 0
        assert_eq!(val("21"), BigUint::from(58u32));
        // 'P' = 22, 't' = 51, '1' = 0
        assert_eq!(val("Pt1"), BigUint::from(22u32 * 58 * 58 + 51 * 58));
    }

    #[test]
    fn test_invalid_symbol_is_none() {
        assert_eq!(decode_to_integer("Pt1 JoinAscent"), None);
        assert_eq!(decode_to_integer("0"), None);
    }

    #[test]
    fn test_integer_to_bytes_minimal() {
        assert_eq!(integer_to_bytes(&BigUint::from(0x1234u32)), vec![0x12, 0x34]);
        assert_eq!(integer_to_bytes(&BigUint::from(0u32)), vec![0]);
        assert_eq!(integer_to_bytes(&BigUint::from(255u32)), vec![0xFF]);
    }

    #[test]
    fn test_agrees_with_bs58_raw_decode() {
        // No leading '1' symbols, so the raw decode is exactly the
        // minimal big-endian bytes of the word's integer value.
        for word in ["JoinAscent", "Pt1", "zzzzzzzz", "2"] {
            let ours = integer_to_bytes(&decode_to_integer(word).unwrap());
            let theirs = bs58::decode(word).into_vec().unwrap();
            assert_eq!(ours, theirs, "word {}", word);
        }
    }
}
