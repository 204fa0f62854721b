// HashSetLookup: explanatory notes
//
// The lookup strategy pays up front: it fingerprints every window of the text
// whose length is between 1 and the longest pattern, stores the fingerprints
// in a set, and then answers each pattern with a single set probe. Building
// the set touches O(text_len * max_len) windows, so on short inputs this
// preprocessing dominates and the direct scan wins comfortably.
//
// Two fingerprint kinds are available:
//
// - Keyed: each window is hashed from scratch with a fixed-seed ahash state.
//   Every window costs O(k), which mirrors hashing a freshly sliced substring.
// - Polynomial: prefix hashes and a power table (base 257, wrapping u64) are
//   computed once, after which h[l..r) = h[r] - h[l]*p[r-l] is O(1) per window.
//
// Windows are byte ranges and are hashed as raw bytes, so they need not fall on
// char boundaries. For valid UTF-8 a byte-window match is exactly a `str`
// substring match.
//
// Limitation: a pattern is reported as present when its fingerprint is in the
// set. There is no second pass comparing the actual bytes, so a fingerprint
// collision is a false positive. Wrapping polynomial hashes are easy to
// collide on purpose (Thue-Morse strings do it); the keyed hash makes it
// unlikely but not impossible. False negatives cannot happen: every window a
// pattern could equal is enumerated.
use crate::core::{
    FingerprintKind, HashSetLookupConfig, SubstringSearch, expected_windows, max_pattern_len,
};
use ahash::{AHashSet as HashSet, RandomState};
use tracing::trace;

const POLY_BASE: u64 = 257;

// Fixed seeds so fingerprints are reproducible across runs.
const KEYED_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Looks patterns up in a set of fingerprints of every short window of the text.
#[derive(Clone)]
pub struct HashSetLookup {
    pub config: HashSetLookupConfig,
    keyed: RandomState,
}

impl Default for HashSetLookup {
    fn default() -> Self {
        HashSetLookup::with_config(&HashSetLookupConfig::default())
    }
}

impl HashSetLookup {
    pub fn with_config(config: &HashSetLookupConfig) -> HashSetLookup {
        let [k0, k1, k2, k3] = KEYED_SEEDS;
        HashSetLookup {
            config: config.clone(),
            keyed: RandomState::with_seeds(k0, k1, k2, k3),
        }
    }

    pub fn with_fingerprint(kind: FingerprintKind) -> HashSetLookup {
        HashSetLookup::with_config(&HashSetLookupConfig { fingerprint: kind })
    }

    // Rolling prefix hashes and powers for a byte string.
    // h[r] - h[l]*p[r-l] yields the hash of s[l..r).
    fn prefix_hashes(s: &[u8]) -> (Vec<u64>, Vec<u64>) {
        let mut h = Vec::with_capacity(s.len() + 1);
        let mut p = Vec::with_capacity(s.len() + 1);
        let mut last_h = 0u64;
        let mut last_p = 1u64;
        h.push(last_h);
        p.push(last_p);
        for &b in s {
            last_h = last_h.wrapping_mul(POLY_BASE).wrapping_add(b as u64);
            last_p = last_p.wrapping_mul(POLY_BASE);
            h.push(last_h);
            p.push(last_p);
        }
        (h, p)
    }

    fn range_hash(h: &[u64], p: &[u64], l: usize, r: usize) -> u64 {
        h[r].wrapping_sub(h[l].wrapping_mul(p[r - l]))
    }

    /// Fingerprint of a whole byte string, consistent with the window
    /// fingerprints produced by `fingerprint_windows`.
    pub fn fingerprint(&self, bytes: &[u8]) -> u64 {
        match self.config.fingerprint {
            FingerprintKind::Keyed => self.keyed.hash_one(bytes),
            FingerprintKind::Polynomial => bytes
                .iter()
                .fold(0u64, |h, &b| h.wrapping_mul(POLY_BASE).wrapping_add(b as u64)),
        }
    }

    /// Fingerprint every window of `text` with length in `1..=max_len`.
    pub fn fingerprint_windows(&self, text: &str, max_len: usize) -> HashSet<u64> {
        let bytes = text.as_bytes();
        let n = bytes.len();
        let upper = max_len.min(n);
        // grown on demand: repetitive text collapses to far fewer fingerprints
        // than there are windows
        let mut set = HashSet::new();
        let t0 = crate::instrumentation::build_timer();

        match self.config.fingerprint {
            FingerprintKind::Keyed => {
                for k in 1..=upper {
                    for start in 0..=(n - k) {
                        set.insert(self.keyed.hash_one(&bytes[start..start + k]));
                    }
                }
            }
            FingerprintKind::Polynomial => {
                let (h, p) = Self::prefix_hashes(bytes);
                for k in 1..=upper {
                    for start in 0..=(n - k) {
                        set.insert(Self::range_hash(&h, &p, start, start + k));
                    }
                }
            }
        }

        crate::instrumentation::add_windows(expected_windows(n, max_len) as u64);
        if let Some(t0) = t0 {
            crate::instrumentation::add_set_build_ns(t0.elapsed().as_nanos() as u64);
        }
        set
    }
}

impl SubstringSearch for HashSetLookup {
    fn name(&self) -> &'static str {
        "hash-set lookup"
    }

    fn search<'p>(&self, text: &str, patterns: &[&'p str]) -> Vec<&'p str> {
        if patterns.is_empty() {
            return Vec::new();
        }

        let max_len = max_pattern_len(patterns);
        let windows = self.fingerprint_windows(text, max_len);
        trace!(
            max_len,
            unique = windows.len(),
            kind = ?self.config.fingerprint,
            "built fingerprint set"
        );

        let mut out = Vec::new();
        for &pattern in patterns {
            // no window has length 0, but the empty string is in every text
            if pattern.is_empty() {
                out.push(pattern);
                continue;
            }
            crate::instrumentation::add_lookups(1);
            if windows.contains(&self.fingerprint(pattern.as_bytes())) {
                out.push(pattern);
            }
        }
        out
    }
}
