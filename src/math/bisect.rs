//! Midpoint bisection with an underflow-safe termination rule.
//!
//! All transcendental inversions in the domain library share this
//! loop: keep halving `[lo, hi]` until the midpoint no longer strictly
//! improves the bound it replaces. Comparing against the previous bound
//! (rather than testing an epsilon) terminates even when the interval
//! collapses below floating-point resolution at one endpoint.

/// Outcome of probing the bisection midpoint.
pub(crate) enum Probe {
    /// The midpoint overshoots the target: shrink the upper bound.
    High,
    /// The midpoint undershoots the target: raise the lower bound.
    Low,
    /// Stop immediately and yield this value.
    Halt(f64),
}

/// Bisects `[lo, hi]` until the midpoint stops strictly improving
/// either bound, returning the final midpoint.
pub(crate) fn bisect(mut lo: f64, mut hi: f64, mut probe: impl FnMut(f64) -> Probe) -> f64 {
    loop {
        let mid = 0.5 * (lo + hi);
        match probe(mid) {
            Probe::Halt(value) => return value,
            Probe::High => {
                if mid >= hi {
                    return mid;
                }
                hi = mid;
            }
            Probe::Low => {
                if mid <= lo {
                    return mid;
                }
                lo = mid;
            }
        }
    }
}
