use rollset::fixture::{LOWERCASE, as_refs, random_text, sample_patterns};
use rollset::harness::Verdict;
use rollset::{BenchConfig, FingerprintKind, HashSetLookupConfig, Result, run_benchmark};

fn run_case(text_len: usize, kind: FingerprintKind, iterations: usize) -> Result<()> {
    let text = random_text(42, text_len, LOWERCASE);
    let patterns = sample_patterns(7, &text, 32, 10, LOWERCASE);
    let refs = as_refs(&patterns);

    let config = BenchConfig {
        iterations,
        lookup: HashSetLookupConfig { fingerprint: kind },
    };
    let report = run_benchmark(&text, &refs, &config)?;
    let ratio = match report.verdict {
        Verdict::Faster(x) => 1.0 / x,
        Verdict::Slower(x) => x,
        Verdict::Similar => 1.0,
    };

    println!(
        "LEN={} KIND={:?} direct_mean_ms={:.4} hashed_mean_ms={:.4} hashed/direct={:.2} windows={} unique={} matches={}",
        text_len,
        kind,
        report.direct.stats.mean,
        report.hashed.stats.mean,
        ratio,
        report.work.windows,
        report.work.unique_fingerprints,
        report.direct.matches.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    rollset::init_logging(false);
    let lens = [16usize, 64, 256, 1024, 4096];
    let kinds = [FingerprintKind::Keyed, FingerprintKind::Polynomial];
    for &len in &lens {
        for &kind in &kinds {
            run_case(len, kind, 200)?;
        }
    }
    Ok(())
}
