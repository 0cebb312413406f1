//! Slice identifier to bucket symbol mapping.
//!
//! The first two characters of a slice id encode one byte with the nibbles
//! swapped: the character at index 1 is the high nibble. The high nibble picks
//! one of 16 symbols and an odd byte moves the pick into the upper half of the
//! alphabet, so 8 byte values share each of the 32 buckets.

use crate::error::{FormatError, Result};

/// Bucket symbols, in bucket order.
pub const BASE32_ALPHABET: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v',
];

/// Map a slice id to its bucket symbol.
///
/// # Panics
///
/// Panics if `slice_id` has fewer than two characters or its first two
/// characters are not hex digits. Use [`try_slice_hash_char`] for untrusted
/// input.
pub fn slice_hash_char(slice_id: &str) -> char {
    match try_slice_hash_char(slice_id) {
        Ok(symbol) => symbol,
        Err(err) => panic!("{err}"),
    }
}

/// Map a slice id to its bucket symbol, reporting malformed ids.
///
/// Characters after the first two are ignored. Hex digits are accepted in
/// either case.
pub fn try_slice_hash_char(slice_id: &str) -> Result<char> {
    let mut chars = slice_id.chars();
    let (Some(low), Some(high)) = (chars.next(), chars.next()) else {
        return Err(FormatError::SliceIdTooShort {
            len: slice_id.chars().count(),
        });
    };

    let (Some(low), Some(high)) = (low.to_digit(16), high.to_digit(16)) else {
        return Err(FormatError::InvalidSliceHex {
            id: slice_id.to_string(),
        });
    };

    let value = (high << 4) | low;
    let offset = (value / 16) as usize;
    let half_offset = if value % 2 == 0 { 0 } else { 16 };
    Ok(BASE32_ALPHABET[offset + half_offset])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids() {
        assert_eq!(slice_hash_char("aa"), 'a');
        assert_eq!(slice_hash_char("ff"), 'v');
        assert_eq!(slice_hash_char("00"), '0');
        assert_eq!(slice_hash_char("10"), 'g');
        assert_eq!(slice_hash_char("01"), '1');
        assert_eq!(slice_hash_char("1f"), 'v');
        assert_eq!(slice_hash_char("e0"), '0');
    }

    #[test]
    fn nibbles_are_swapped() {
        // "0f" is 0xf0: even, high nibble 15.
        assert_eq!(slice_hash_char("0f"), 'f');
        // "f0" is 0x0f: odd, high nibble 0.
        assert_eq!(slice_hash_char("f0"), 'g');
    }

    #[test]
    fn trailing_characters_are_ignored() {
        assert_eq!(slice_hash_char("aa0123"), slice_hash_char("aa"));
        assert_eq!(slice_hash_char("ffzz"), 'v');
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(slice_hash_char("AA"), slice_hash_char("aa"));
        assert_eq!(slice_hash_char("fF"), 'v');
    }

    #[test]
    fn every_bucket_holds_eight_bytes() {
        let mut counts = [0usize; 32];
        for value in 0u8..=255 {
            let id = format!("{:x}{:x}", value & 0x0f, value >> 4);
            let symbol = slice_hash_char(&id);
            let bucket = BASE32_ALPHABET
                .iter()
                .position(|&c| c == symbol)
                .unwrap();
            counts[bucket] += 1;
        }
        assert!(counts.iter().all(|&count| count == 8));
    }

    #[test]
    fn rejects_short_ids() {
        assert_eq!(
            try_slice_hash_char(""),
            Err(FormatError::SliceIdTooShort { len: 0 })
        );
        assert_eq!(
            try_slice_hash_char("a"),
            Err(FormatError::SliceIdTooShort { len: 1 })
        );
    }

    #[test]
    fn rejects_non_hex_ids() {
        assert!(matches!(
            try_slice_hash_char("zz"),
            Err(FormatError::InvalidSliceHex { .. })
        ));
        assert!(matches!(
            try_slice_hash_char("a-"),
            Err(FormatError::InvalidSliceHex { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "at least 2 characters")]
    fn panics_on_short_id() {
        slice_hash_char("a");
    }
}
