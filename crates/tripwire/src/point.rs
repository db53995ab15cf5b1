/// A method targeted for interception, identified by owning type and method
/// name. Immutable once registered; the registration table is populated at
/// process start and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObservationPoint {
    pub owning_type: &'static str,
    pub method: &'static str,
}

impl ObservationPoint {
    pub const fn new(owning_type: &'static str, method: &'static str) -> Self {
        Self {
            owning_type,
            method,
        }
    }
}

/// How a registered observation point replaces the original behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookMode {
    /// Full replacement of an arbitrary method. Used for ad-hoc probes a
    /// harness installs around a real implementation at composition time.
    Replace,
    /// Replacement targeting a logging call: every error the target logs
    /// (and would otherwise swallow) becomes a crash the fuzzer can see.
    EscalateLogging,
}
