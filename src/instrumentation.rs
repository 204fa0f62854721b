// Lightweight per-thread counters for explaining where the work goes.
// Cells instead of atomics: the harness is single-threaded and the counters
// sit on the hot path of both strategies. The harness switches them off while
// timing so the measured calls pay only for a flag check.
use std::cell::Cell;
use std::time::Instant;

thread_local! {
    static ENABLED: Cell<bool> = const { Cell::new(true) };
    static WINDOWS_FINGERPRINTED: Cell<u64> = const { Cell::new(0) };
    static FINGERPRINT_LOOKUPS: Cell<u64> = const { Cell::new(0) };
    static CONTAINMENT_CHECKS: Cell<u64> = const { Cell::new(0) };
    static SET_BUILD_NS: Cell<u64> = const { Cell::new(0) };
}

/// Snapshot of the counters since the last `reset_counters`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub windows_fingerprinted: u64,
    pub fingerprint_lookups: u64,
    pub containment_checks: u64,
    pub set_build_ns: u64,
}

/// Turn counting on or off for this thread, returning the previous setting.
pub fn set_enabled(on: bool) -> bool {
    ENABLED.with(|c| c.replace(on))
}

pub fn enabled() -> bool {
    ENABLED.with(|c| c.get())
}

/// Start a set-build timer, or `None` while counting is off.
pub fn build_timer() -> Option<Instant> {
    enabled().then(Instant::now)
}

pub fn reset_counters() {
    WINDOWS_FINGERPRINTED.with(|c| c.set(0));
    FINGERPRINT_LOOKUPS.with(|c| c.set(0));
    CONTAINMENT_CHECKS.with(|c| c.set(0));
    SET_BUILD_NS.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        windows_fingerprinted: WINDOWS_FINGERPRINTED.with(|c| c.get()),
        fingerprint_lookups: FINGERPRINT_LOOKUPS.with(|c| c.get()),
        containment_checks: CONTAINMENT_CHECKS.with(|c| c.get()),
        set_build_ns: SET_BUILD_NS.with(|c| c.get()),
    }
}

pub fn add_windows(n: u64) {
    if !enabled() {
        return;
    }
    WINDOWS_FINGERPRINTED.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_lookups(n: u64) {
    if !enabled() {
        return;
    }
    FINGERPRINT_LOOKUPS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_containment_checks(n: u64) {
    if !enabled() {
        return;
    }
    CONTAINMENT_CHECKS.with(|c| c.set(c.get().wrapping_add(n)));
}

pub fn add_set_build_ns(n: u64) {
    if !enabled() {
        return;
    }
    SET_BUILD_NS.with(|c| c.set(c.get().wrapping_add(n)));
}
