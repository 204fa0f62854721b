pub mod core;
pub mod direct;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod hashed;
pub mod instrumentation;

pub use crate::core::{FingerprintKind, HashSetLookupConfig, SubstringSearch};
pub use crate::direct::DirectScan;
pub use crate::error::{Error, Result};
pub use crate::harness::{BenchConfig, BenchmarkReport, FunctionalityReport, Stats, run_benchmark};
pub use crate::hashed::HashSetLookup;

/// Install a `tracing` subscriber for the binaries. `RUST_LOG` wins when set;
/// otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "rollset=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
