//! Mnemonic password suggestions. Alternating consonant/vowel syllables stay
//! pronounceable enough to relay over the phone; a short numeric tail adds a
//! little extra keyspace. Not a substitute for a generated random secret.

use rand::rngs::OsRng;
use rand::Rng;

const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'w', 'z',
];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Produces a pronounceable password of `syllables` consonant-vowel pairs
/// followed by `digits` decimal digits.
pub fn suggest(syllables: usize, digits: usize) -> String {
    let mut out = String::with_capacity(syllables * 2 + digits);
    for _ in 0..syllables {
        out.push(CONSONANTS[OsRng.gen_range(0..CONSONANTS.len())]);
        out.push(VOWELS[OsRng.gen_range(0..VOWELS.len())]);
    }
    for _ in 0..digits {
        out.push(char::from_digit(OsRng.gen_range(0..10u32), 10).unwrap_or('0'));
    }
    out
}
