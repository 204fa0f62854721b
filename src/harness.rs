//! Timing, statistics and reporting for the two strategies.
//!
//! Every call is timed on its own, with only the strategy invocation inside
//! the measured region. Instrumentation counters are switched off for the
//! timed calls; per-call counts come from one extra untimed call afterwards.
//! The report is free text rendered through `Display`.
use crate::core::{HashSetLookupConfig, SubstringSearch, expected_windows, max_pattern_len};
use crate::direct::DirectScan;
use crate::error::{Error, Result};
use crate::hashed::HashSetLookup;
use crate::instrumentation::{self, Counters};
use std::fmt;
use std::hint::black_box;
use std::time::Instant;
use tracing::debug;

/// Iteration count used when nothing else is asked for.
pub const DEFAULT_ITERATIONS: usize = 10_000_000;
/// Reduced iteration count used by the demonstration run.
pub const DEMO_ITERATIONS: usize = 1000;

pub const DEMO_TEXT: &str = "hellotherehowareyou";
pub const DEMO_PATTERNS: [&str; 8] = [
    "hello",
    "there",
    "how",
    "are",
    "you",
    "test",
    "youare",
    "hellothere",
];

/// Configuration for a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub iterations: usize,
    pub lookup: HashSetLookupConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            iterations: DEFAULT_ITERATIONS,
            lookup: HashSetLookupConfig::default(),
        }
    }
}

/// Run `f` once and return its result with the elapsed wall-clock time in
/// fractional milliseconds.
pub fn time_call<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    (result, elapsed.as_nanos() as f64 / 1_000_000.0)
}

/// Min, max and mean over a list of timing samples (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Result<Stats> {
        if samples.is_empty() {
            return Err(Error::EmptySamples);
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Ok(Stats { min, max, mean })
    }
}

/// Timings and per-call counters for one strategy.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub name: &'static str,
    pub samples: Vec<f64>,
    pub stats: Stats,
    pub counters: Counters,
    pub matches: Vec<String>,
}

/// Call `strategy` `iterations` times, timing each call separately.
pub fn time_strategy<S: SubstringSearch>(
    strategy: &S,
    text: &str,
    patterns: &[&str],
    iterations: usize,
) -> Result<StrategyRun> {
    if iterations == 0 {
        return Err(Error::ZeroIterations);
    }
    debug!(strategy = strategy.name(), iterations, "timing strategy");

    let was_enabled = instrumentation::set_enabled(false);
    let mut samples = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let (found, ms) = time_call(|| strategy.search(black_box(text), black_box(patterns)));
        samples.push(ms);
        let _ = black_box(found);
    }

    instrumentation::set_enabled(true);
    instrumentation::reset_counters();
    let matches = strategy.search(text, patterns);
    let counters = instrumentation::counters_snapshot();
    instrumentation::set_enabled(was_enabled);

    let stats = Stats::from_samples(&samples)?;
    debug!(
        strategy = strategy.name(),
        min_ms = stats.min,
        mean_ms = stats.mean,
        max_ms = stats.max,
        "strategy timed"
    );

    Ok(StrategyRun {
        name: strategy.name(),
        samples,
        stats,
        counters,
        matches: matches.into_iter().map(|s| s.to_string()).collect(),
    })
}

/// How the hash-set lookup compared with the direct scan, mean to mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Hash-set lookup was faster by this factor.
    Faster(f64),
    /// Hash-set lookup was slower by this factor.
    Slower(f64),
    Similar,
}

/// A zero or non-finite mean (a timer too coarse for the call) gives
/// `Similar`, since no finite ratio exists.
pub fn compare(direct: &Stats, hashed: &Stats) -> Verdict {
    let usable = |m: f64| m.is_finite() && m > 0.0;
    if !usable(direct.mean) || !usable(hashed.mean) {
        return Verdict::Similar;
    }
    if hashed.mean < direct.mean {
        Verdict::Faster(direct.mean / hashed.mean)
    } else if direct.mean < hashed.mean {
        Verdict::Slower(hashed.mean / direct.mean)
    } else {
        Verdict::Similar
    }
}

/// Operation counts that explain the timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkBreakdown {
    pub text_len: usize,
    pub pattern_count: usize,
    pub max_len: usize,
    /// Windows the lookup strategy fingerprints per call.
    pub windows: usize,
    /// Distinct fingerprints those windows collapse to.
    pub unique_fingerprints: usize,
    /// Containment checks the direct scan performs per call.
    pub direct_checks: usize,
}

impl WorkBreakdown {
    /// How many times more units of work the lookup does, or `None` with no patterns.
    pub fn work_ratio(&self) -> Option<f64> {
        if self.direct_checks == 0 {
            None
        } else {
            Some(self.windows as f64 / self.direct_checks as f64)
        }
    }
}

pub fn work_breakdown(text: &str, patterns: &[&str], lookup: &HashSetLookup) -> WorkBreakdown {
    let max_len = max_pattern_len(patterns);
    WorkBreakdown {
        text_len: text.len(),
        pattern_count: patterns.len(),
        max_len,
        windows: expected_windows(text.len(), max_len),
        unique_fingerprints: lookup.fingerprint_windows(text, max_len).len(),
        direct_checks: patterns.len(),
    }
}

/// Everything `run_benchmark` measured.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub iterations: usize,
    pub direct: StrategyRun,
    pub hashed: StrategyRun,
    pub verdict: Verdict,
    pub work: WorkBreakdown,
}

/// Time both strategies on identical inputs and summarise the result.
pub fn run_benchmark(text: &str, patterns: &[&str], config: &BenchConfig) -> Result<BenchmarkReport> {
    let lookup = HashSetLookup::with_config(&config.lookup);

    let direct = time_strategy(&DirectScan, text, patterns, config.iterations)?;
    let hashed = time_strategy(&lookup, text, patterns, config.iterations)?;
    let verdict = compare(&direct.stats, &hashed.stats);
    let work = work_breakdown(text, patterns, &lookup);

    Ok(BenchmarkReport {
        iterations: config.iterations,
        direct,
        hashed,
        verdict,
        work,
    })
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== PERFORMANCE ANALYSIS ===")?;
        writeln!(f, "Main string length: {}", self.work.text_len)?;
        writeln!(f, "Number of substrings to search: {}", self.work.pattern_count)?;
        writeln!(f, "Iterations per test: {}", self.iterations)?;

        writeln!(f)?;
        writeln!(f, "--- DIRECT SCAN ---")?;
        write_stats(f, &self.direct.stats)?;
        writeln!(
            f,
            "Time complexity: O(n * m * k) where n=text_len, m=num_patterns, k=pattern_len"
        )?;

        writeln!(f)?;
        writeln!(f, "--- HASH-SET LOOKUP ---")?;
        write_stats(f, &self.hashed.stats)?;
        writeln!(
            f,
            "Time complexity: O(n * max_len + m) where n=text_len, max_len=longest_pattern, m=num_patterns"
        )?;

        writeln!(f)?;
        match self.verdict {
            Verdict::Faster(x) => writeln!(f, "Hash-set lookup is {x:.2}x FASTER than direct scan!")?,
            Verdict::Slower(x) => writeln!(f, "Hash-set lookup is {x:.2}x SLOWER than direct scan!")?,
            Verdict::Similar => writeln!(f, "Both approaches have similar performance!")?,
        }

        writeln!(f)?;
        writeln!(f, "--- ANALYSIS ---")?;
        let w = &self.work;
        writeln!(
            f,
            "Hash-set lookup generates {} substrings and hashes ({} unique)",
            w.windows, w.unique_fingerprints
        )?;
        writeln!(f, "Direct scan only checks {} substrings", w.direct_checks)?;
        if let Some(ratio) = w.work_ratio() {
            writeln!(
                f,
                "Ratio: hash-set lookup does {}/{} = {:.1}x more work!",
                w.windows, w.direct_checks, ratio
            )?;
        }
        writeln!(
            f,
            "Measured per call: {} windows fingerprinted in {} ns, {} fingerprint lookups, {} containment checks",
            self.hashed.counters.windows_fingerprinted,
            self.hashed.counters.set_build_ns,
            self.hashed.counters.fingerprint_lookups,
            self.direct.counters.containment_checks
        )?;
        writeln!(f, "For small inputs, direct scan wins due to:")?;
        writeln!(f, "  - optimized substring search in the standard library")?;
        writeln!(f, "  - lower overhead for small datasets")?;
        writeln!(f, "  - the cost of building the fingerprint set on every call")?;
        writeln!(f, "Hash-set lookup benefits become apparent with:")?;
        writeln!(f, "  - very long texts")?;
        writeln!(f, "  - many patterns to search")?;
        write!(f, "  - repeated searches on the same text")
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, stats: &Stats) -> fmt::Result {
    writeln!(f, "Average time: {:.4} ms", stats.mean)?;
    writeln!(f, "Min time: {:.4} ms", stats.min)?;
    writeln!(f, "Max time: {:.4} ms", stats.max)
}

/// A single timed call of each strategy plus an agreement check.
#[derive(Debug, Clone)]
pub struct FunctionalityReport {
    pub direct: Vec<String>,
    pub direct_ms: f64,
    pub hashed: Vec<String>,
    pub hashed_ms: f64,
    pub unique_fingerprints: usize,
    pub work: WorkBreakdown,
}

impl FunctionalityReport {
    /// Both strategies returned the same patterns in the same order.
    pub fn agree(&self) -> bool {
        self.direct == self.hashed
    }
}

pub fn functionality_check(
    text: &str,
    patterns: &[&str],
    lookup_config: &HashSetLookupConfig,
) -> FunctionalityReport {
    let lookup = HashSetLookup::with_config(lookup_config);

    let (direct, direct_ms) = time_call(|| DirectScan.search(text, patterns));
    let (hashed, hashed_ms) = time_call(|| lookup.search(text, patterns));
    let work = work_breakdown(text, patterns, &lookup);

    FunctionalityReport {
        direct: direct.into_iter().map(|s| s.to_string()).collect(),
        direct_ms,
        hashed: hashed.into_iter().map(|s| s.to_string()).collect(),
        hashed_ms,
        unique_fingerprints: work.unique_fingerprints,
        work,
    }
}

impl fmt::Display for FunctionalityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== FUNCTIONALITY TEST ===")?;
        writeln!(f, "Direct scan result: {:?}", self.direct)?;
        writeln!(f, "Direct scan time: {:.4} ms", self.direct_ms)?;
        writeln!(f, "Hash-set lookup result: {:?}", self.hashed)?;
        writeln!(f, "Hash-set lookup time: {:.4} ms", self.hashed_ms)?;
        writeln!(f, "Created {} unique substring hashes", self.unique_fingerprints)?;
        writeln!(f, "Both methods match: {}", self.agree())?;

        writeln!(f)?;
        writeln!(f, "=== WHY HASH-SET LOOKUP IS SLOWER ===")?;
        writeln!(f, "Direct scan operations:")?;
        writeln!(f, "  - only checks {} substrings", self.work.direct_checks)?;
        writeln!(f, "  - no preprocessing needed")?;
        writeln!(f, "Hash-set lookup operations:")?;
        writeln!(f, "  - generates {} substrings", self.work.windows)?;
        writeln!(f, "  - computes {} hash values", self.work.windows)?;
        writeln!(f, "  - creates and manages a hash set")?;
        write!(f, "  - then checks {} hash lookups", self.work.pattern_count)?;
        if let Some(ratio) = self.work.work_ratio() {
            writeln!(f)?;
            writeln!(f)?;
            write!(
                f,
                "Ratio: hash-set lookup does {}/{} = {:.1}x more work!",
                self.work.windows, self.work.direct_checks, ratio
            )?;
        }
        Ok(())
    }
}
