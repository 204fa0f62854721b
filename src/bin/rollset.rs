use clap::Parser;
use rollset::harness::{DEMO_ITERATIONS, DEMO_PATTERNS, DEMO_TEXT, functionality_check};
use rollset::{BenchConfig, FingerprintKind, HashSetLookupConfig, Result, run_benchmark};
use tracing::info;

/// Compare a direct substring scan against a hash set of every short substring.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of timed calls per strategy
    #[arg(short = 'n', long, default_value_t = DEMO_ITERATIONS)]
    iterations: usize,

    /// Text to search (defaults to the built-in demo text)
    #[arg(short, long)]
    text: Option<String>,

    /// Pattern to search for (can be specified multiple times)
    #[arg(short = 'p', long = "pattern")]
    patterns: Vec<String>,

    /// Fingerprint used by the hash-set lookup (keyed|polynomial)
    #[arg(long, default_value = "keyed")]
    fingerprint: FingerprintKind,

    /// Log harness progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    rollset::init_logging(cli.verbose);

    let text = cli.text.as_deref().unwrap_or(DEMO_TEXT);
    let patterns: Vec<&str> = if cli.patterns.is_empty() {
        DEMO_PATTERNS.to_vec()
    } else {
        cli.patterns.iter().map(|s| s.as_str()).collect()
    };
    let lookup = HashSetLookupConfig {
        fingerprint: cli.fingerprint,
    };
    info!(
        text_len = text.len(),
        patterns = patterns.len(),
        iterations = cli.iterations,
        "starting run"
    );

    let check = functionality_check(text, &patterns, &lookup);
    println!("{check}");
    println!();

    let config = BenchConfig {
        iterations: cli.iterations,
        lookup,
    };
    let report = run_benchmark(text, &patterns, &config)?;
    println!("{report}");

    Ok(())
}
