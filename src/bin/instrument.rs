use rollset::fixture::{LOWERCASE, as_refs, random_text, sample_patterns};
use rollset::instrumentation::{counters_snapshot, reset_counters};
use rollset::{DirectScan, FingerprintKind, HashSetLookup, SubstringSearch};
use std::time::Instant;

fn run_case<S: SubstringSearch>(strategy: &S, label: &str, text: &str, patterns: &[&str]) {
    reset_counters();
    let t0 = Instant::now();
    let found = strategy.search(text, patterns);
    let dur = t0.elapsed();
    let c = counters_snapshot();
    println!(
        "{}: time={:?} matches={} windows={} set_build_ns={} lookups={} containment_checks={}",
        label,
        dur,
        found.len(),
        c.windows_fingerprinted,
        c.set_build_ns,
        c.fingerprint_lookups,
        c.containment_checks
    );
}

fn main() {
    rollset::init_logging(false);
    let text = random_text(42, 2000, LOWERCASE);
    let patterns = sample_patterns(42, &text, 250, 12, LOWERCASE);
    let refs = as_refs(&patterns);

    run_case(&DirectScan, "DirectScan", &text, &refs);
    run_case(
        &HashSetLookup::with_fingerprint(FingerprintKind::Keyed),
        "HashSetLookup(keyed)",
        &text,
        &refs,
    );
    run_case(
        &HashSetLookup::with_fingerprint(FingerprintKind::Polynomial),
        "HashSetLookup(polynomial)",
        &text,
        &refs,
    );
}
