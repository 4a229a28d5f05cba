use arrayref::array_refs;

/// Reduces a random word modulo the entrant count.
///
/// The word is a provider output read as a big-endian unsigned 256-bit
/// integer. The reduction runs over all four 64-bit limbs, so the result is
/// exactly `word mod entrant_count`. Returns `None` for an empty pool.
pub fn winner_index(random_word: &[u8; 32], entrant_count: u64) -> Option<u64> {
    if entrant_count == 0 {
        return None;
    }

    let (high, upper, lower, low) = array_refs![random_word, 8, 8, 8, 8];
    let modulus = entrant_count as u128;

    // acc < modulus <= u64::MAX, so the shifted accumulator never overflows
    let remainder = [high, upper, lower, low].iter().fold(0u128, |acc, limb| {
        ((acc << 64) | u64::from_be_bytes(**limb) as u128) % modulus
    });

    Some(remainder as u64)
}

/// Encodes a small integer as a 256-bit big-endian random word.
#[cfg(test)]
pub fn random_word_from_u64(value: u64) -> [u8; 32] {
    use arrayref::array_mut_ref;

    let mut word = [0u8; 32];
    *array_mut_ref![word, 24, 8] = value.to_be_bytes();
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_has_no_winner() {
        assert_eq!(winner_index(&[7u8; 32], 0), None);
    }

    #[test]
    fn test_small_words_reduce_directly() {
        for n in 1..=17u64 {
            for r in [0u64, 1, 5, 42, 99, 1_000_003, u64::MAX] {
                assert_eq!(winner_index(&random_word_from_u64(r), n), Some(r % n));
            }
        }
    }

    #[test]
    fn test_single_entrant_always_wins() {
        assert_eq!(winner_index(&[0xFF; 32], 1), Some(0));
        assert_eq!(winner_index(&random_word_from_u64(42), 1), Some(0));
    }

    #[test]
    fn test_full_width_word() {
        // 2^256 - 1 mod 7 == 1, mod 3 == 0, mod 10 == 5
        let max = [0xFF; 32];
        assert_eq!(winner_index(&max, 7), Some(1));
        assert_eq!(winner_index(&max, 3), Some(0));
        assert_eq!(winner_index(&max, 10), Some(5));
    }

    #[test]
    fn test_high_limb_counts() {
        // 2^192 mod 5 == 1 and 2^192 mod 4 == 0
        let mut word = [0u8; 32];
        word[7] = 1;
        assert_eq!(winner_index(&word, 5), Some(1));
        assert_eq!(winner_index(&word, 4), Some(0));
    }

    #[test]
    fn test_index_stays_in_range() {
        for seed in 0..=255u8 {
            let word = [seed; 32];
            for n in [2u64, 3, 4, 97, 256] {
                assert!(winner_index(&word, n).unwrap() < n);
            }
        }
    }
}
