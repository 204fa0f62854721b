use rollset::core::{FingerprintKind, SubstringSearch};
use rollset::direct::DirectScan;
use rollset::fixture::{as_refs, random_text, sample_patterns};
use rollset::harness::{BenchConfig, DEMO_PATTERNS, DEMO_TEXT, run_benchmark};
use rollset::hashed::HashSetLookup;

// Ground truth independent of `str::contains`: compare every byte window.
fn oracle<'p>(text: &str, patterns: &[&'p str]) -> Vec<&'p str> {
    patterns
        .iter()
        .copied()
        .filter(|p| p.is_empty() || text.as_bytes().windows(p.len()).any(|w| w == p.as_bytes()))
        .collect()
}

fn keyed() -> HashSetLookup {
    HashSetLookup::with_fingerprint(FingerprintKind::Keyed)
}

fn polynomial() -> HashSetLookup {
    HashSetLookup::with_fingerprint(FingerprintKind::Polynomial)
}

// "hellothere" is the text's own prefix, so it is a hit alongside the five words.
fn run_demo_scenario<S: SubstringSearch>(s: S) {
    let found = s.search(DEMO_TEXT, &DEMO_PATTERNS);
    assert_eq!(found, oracle(DEMO_TEXT, &DEMO_PATTERNS), "{}", s.name());
    assert_eq!(
        found,
        vec!["hello", "there", "how", "are", "you", "hellothere"],
        "{}",
        s.name()
    );
    assert!(found.contains(&"hellothere"), "{}", s.name());
    assert!(!found.contains(&"youare") && !found.contains(&"test"), "{}", s.name());
}

#[test]
fn demo_scenario() {
    run_demo_scenario(DirectScan);
    run_demo_scenario(keyed());
    run_demo_scenario(polynomial());
}

fn run_matches_oracle_on_random_fixtures<S: SubstringSearch>(s: S) {
    for seed in 0..20u64 {
        let alphabet: &[u8] = if seed % 2 == 0 { b"ab" } else { b"abcxyz" };
        let text = random_text(seed, 40 + seed as usize * 7, alphabet);
        let pats = sample_patterns(seed + 1000, &text, 40, 9, alphabet);
        let refs = as_refs(&pats);
        assert_eq!(
            s.search(&text, &refs),
            oracle(&text, &refs),
            "{} seed={}",
            s.name(),
            seed
        );
    }
}

#[test]
fn matches_oracle_on_random_fixtures() {
    run_matches_oracle_on_random_fixtures(DirectScan);
    run_matches_oracle_on_random_fixtures(keyed());
    run_matches_oracle_on_random_fixtures(polynomial());
}

fn run_empty_pattern_set_yields_nothing<S: SubstringSearch>(s: S) {
    assert!(s.search(DEMO_TEXT, &[]).is_empty());
    assert!(s.search("", &[]).is_empty());
}

#[test]
fn empty_pattern_set_yields_nothing() {
    run_empty_pattern_set_yields_nothing(DirectScan);
    run_empty_pattern_set_yields_nothing(keyed());
    run_empty_pattern_set_yields_nothing(polynomial());
}

fn run_pattern_longer_than_text_is_excluded<S: SubstringSearch>(s: S) {
    let found = s.search("abc", &["abcd", "b", "xabc", "abc"]);
    assert_eq!(found, vec!["b", "abc"], "{}", s.name());
}

#[test]
fn pattern_longer_than_text_is_excluded() {
    run_pattern_longer_than_text_is_excluded(DirectScan);
    run_pattern_longer_than_text_is_excluded(keyed());
    run_pattern_longer_than_text_is_excluded(polynomial());
}

fn run_repeated_calls_are_identical<S: SubstringSearch>(s: S) {
    let text = random_text(5, 500, b"acgt");
    let pats = sample_patterns(6, &text, 64, 12, b"acgt");
    let refs = as_refs(&pats);
    let first = s.search_owned(&text, &refs);
    let second = s.search_owned(&text, &refs);
    assert_eq!(first, second, "{}", s.name());
}

#[test]
fn repeated_calls_are_identical() {
    run_repeated_calls_are_identical(DirectScan);
    run_repeated_calls_are_identical(keyed());
    run_repeated_calls_are_identical(polynomial());
}

fn run_duplicates_and_order_are_preserved<S: SubstringSearch>(s: S) {
    let found = s.search("hellotherehowareyou", &["you", "nope", "hello", "you", "are"]);
    assert_eq!(found, vec!["you", "hello", "you", "are"], "{}", s.name());
}

#[test]
fn duplicates_and_order_are_preserved() {
    run_duplicates_and_order_are_preserved(DirectScan);
    run_duplicates_and_order_are_preserved(keyed());
    run_duplicates_and_order_are_preserved(polynomial());
}

fn run_empty_pattern_is_always_found<S: SubstringSearch>(s: S) {
    assert_eq!(s.search("abc", &["", "zz"]), vec![""], "{}", s.name());
    assert_eq!(s.search("", &["", "a"]), vec![""], "{}", s.name());
}

#[test]
fn empty_pattern_is_always_found() {
    run_empty_pattern_is_always_found(DirectScan);
    run_empty_pattern_is_always_found(keyed());
    run_empty_pattern_is_always_found(polynomial());
}

fn run_multibyte_text_and_patterns<S: SubstringSearch>(s: S) {
    let text = "naïve café → résumé";
    let pats = ["café", "é", "→ r", "cafe", "ï", "résumé!"];
    assert_eq!(
        s.search(text, &pats),
        vec!["café", "é", "→ r", "ï"],
        "{}",
        s.name()
    );
}

#[test]
fn multibyte_text_and_patterns() {
    run_multibyte_text_and_patterns(DirectScan);
    run_multibyte_text_and_patterns(keyed());
    run_multibyte_text_and_patterns(polynomial());
}

// Lookup never misses a true match: its answer contains every oracle hit.
fn run_no_false_negatives<S: SubstringSearch>(s: S) {
    for seed in 0..10u64 {
        let text = random_text(seed, 120, b"ab");
        let pats = sample_patterns(seed, &text, 80, 16, b"ab");
        let refs = as_refs(&pats);
        let found = s.search(&text, &refs);
        for hit in oracle(&text, &refs) {
            assert!(found.contains(&hit), "{} missed {hit:?}", s.name());
        }
    }
}

#[test]
fn no_false_negatives() {
    run_no_false_negatives(DirectScan);
    run_no_false_negatives(keyed());
    run_no_false_negatives(polynomial());
}

// Thue-Morse word of length 2^order over {a, b} and its complement.
fn thue_morse_pair(order: u32) -> (String, String) {
    let word: String = (0u32..1 << order)
        .map(|j| if j.count_ones() % 2 == 0 { 'a' } else { 'b' })
        .collect();
    let complement = word
        .chars()
        .map(|c| if c == 'a' { 'b' } else { 'a' })
        .collect();
    (word, complement)
}

// The lookup trusts fingerprint equality. A wrapping base-257 polynomial hash
// cannot tell a Thue-Morse word of length 256 from its complement, so the
// complement is reported even though it does not occur.
#[test]
fn polynomial_collision_is_a_false_positive() {
    let (text, pattern) = thue_morse_pair(8);
    assert_ne!(text, pattern);

    let lookup = polynomial();
    assert_eq!(
        lookup.fingerprint(text.as_bytes()),
        lookup.fingerprint(pattern.as_bytes())
    );
    assert!(DirectScan.search(&text, &[pattern.as_str()]).is_empty());
    assert_eq!(lookup.search(&text, &[pattern.as_str()]), vec![pattern.as_str()]);
    assert!(keyed().search(&text, &[pattern.as_str()]).is_empty());
}

#[test]
fn benchmark_with_one_iteration_prints_summary() {
    let config = BenchConfig {
        iterations: 1,
        ..BenchConfig::default()
    };
    let report = run_benchmark(DEMO_TEXT, &DEMO_PATTERNS, &config).expect("benchmark runs");
    assert!(report.direct.stats.min >= 0.0);
    assert!(report.hashed.stats.min >= 0.0);
    let rendered = report.to_string();
    assert!(rendered.contains("Iterations per test: 1"));
    assert!(rendered.contains("Average time:"));
    assert!(rendered.contains("--- ANALYSIS ---"));
}
