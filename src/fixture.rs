//! Seeded text and pattern generators for tests, benches and the sweep binary.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lowercase ASCII letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Random text of `len` bytes drawn uniformly from `alphabet` (ASCII only).
pub fn random_text(seed: u64, len: usize, alphabet: &[u8]) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_string(&mut rng, len, alphabet)
}

fn random_string(rng: &mut impl Rng, len: usize, alphabet: &[u8]) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// Build `count` patterns of length `1..=max_len` for `text`. Roughly half
/// are windows copied out of the text (guaranteed hits), the rest are random
/// strings over the same alphabet that may or may not occur.
pub fn sample_patterns(
    seed: u64,
    text: &str,
    count: usize,
    max_len: usize,
    alphabet: &[u8],
) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_len = max_len.max(1);
    let mut patterns = Vec::with_capacity(count);

    for _ in 0..count {
        let len = rng.gen_range(1..=max_len);
        let window = if rng.gen_bool(0.5) && len <= text.len() {
            let start = rng.gen_range(0..=text.len() - len);
            // None when the range splits a multibyte character
            text.get(start..start + len)
        } else {
            None
        };
        match window {
            Some(w) => patterns.push(w.to_string()),
            None => patterns.push(random_string(&mut rng, len, alphabet)),
        }
    }

    patterns
}

/// Borrow a `Vec<String>` as the `&[&str]` shape the strategies take.
pub fn as_refs(v: &[String]) -> Vec<&str> {
    v.iter().map(|s| s.as_str()).collect()
}
