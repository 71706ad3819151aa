//! Letter scrambling
//!
//! Produces a random permutation of a word's characters that never equals the
//! original string. Shuffles that reproduce the word are rejected and redrawn,
//! so every differing arrangement is equally likely. `Word` guarantees two
//! distinct characters, which bounds the chance of a redraw by one half.

use super::word::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// Scramble a word's characters
///
/// The result is a permutation of `word` and is guaranteed to differ from it.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use unscramble::core::{Word, is_permutation, scramble};
///
/// let word = Word::new("android").unwrap();
/// let scrambled = scramble(&word, &mut StdRng::seed_from_u64(7));
///
/// assert_ne!(scrambled, "android");
/// assert!(is_permutation(&scrambled, "android"));
/// ```
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let original = word.chars();
    let mut shuffled = original.to_vec();
    shuffled.shuffle(rng);

    while shuffled == original {
        shuffled.shuffle(rng);
    }

    shuffled.into_iter().collect()
}

/// Check whether two strings use the same multiset of characters
#[must_use]
pub fn is_permutation(a: &str, b: &str) -> bool {
    char_counts(a) == char_counts(b)
}

fn char_counts(s: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in s.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scramble_differs_and_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for text in ["intelligent", "android", "kotlin", "yoyo", "x-ray", "café"] {
            let word = Word::new(text).unwrap();
            for _ in 0..200 {
                let scrambled = scramble(&word, &mut rng);
                assert_ne!(scrambled, text);
                assert!(is_permutation(&scrambled, text), "{scrambled} vs {text}");
            }
        }
    }

    fn arrangement_counts(text: &str, samples: usize, seed: u64) -> FxHashMap<String, usize> {
        let word = Word::new(text).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = FxHashMap::default();
        for _ in 0..samples {
            *counts.entry(scramble(&word, &mut rng)).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn scramble_is_uniform_over_distinct_letters() {
        // 5 arrangements of "abc" differ from it; each expected 12 000 times
        let counts = arrangement_counts("abc", 60_000, 17);
        assert_eq!(counts.len(), 5);
        assert!(!counts.contains_key("abc"));
        for (arrangement, &count) in &counts {
            assert!(
                (11_000..=13_000).contains(&count),
                "{arrangement} drawn {count} times"
            );
        }
    }

    #[test]
    fn scramble_is_uniform_with_repeated_letters() {
        // "aaba", "abaa" and "baaa", each expected 20 000 times
        let counts = arrangement_counts("aaab", 60_000, 23);
        assert_eq!(counts.len(), 3);
        for (arrangement, &count) in &counts {
            assert!(
                (18_500..=21_500).contains(&count),
                "{arrangement} drawn {count} times"
            );
        }
    }

    #[test]
    fn scramble_two_letter_word_always_swaps() {
        // Half of all shuffles of "ab" reproduce it and are redrawn
        let word = Word::new("ab").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(scramble(&word, &mut rng), "ba");
        }
    }

    #[test]
    fn scramble_mostly_repeated_letters() {
        let word = Word::new("aaab").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let scrambled = scramble(&word, &mut rng);
            assert_ne!(scrambled, "aaab");
            assert!(is_permutation(&scrambled, "aaab"));
        }
    }

    #[test]
    fn scramble_is_deterministic_for_seed() {
        let word = Word::new("kaleidoscope").unwrap();
        let a = scramble(&word, &mut StdRng::seed_from_u64(99));
        let b = scramble(&word, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn is_permutation_checks_counts() {
        assert!(is_permutation("listen", "silent"));
        assert!(!is_permutation("listen", "silents"));
        assert!(!is_permutation("aab", "abb"));
        assert!(is_permutation("", ""));
    }
}
