use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::intercept::Interception;
use crate::point::{HookMode, ObservationPoint};
use crate::sink::{DiagnosticSink, StdoutSink};

static INSTALLED: OnceLock<Registry> = OnceLock::new();

/// Builder for the start-time registration table.
pub struct RegistryBuilder {
    points: HashMap<ObservationPoint, HookMode>,
    sink: Arc<dyn DiagnosticSink>,
}

impl RegistryBuilder {
    /// Adds an observation point. Idempotent per point: re-registering
    /// overwrites the mode, and a single intercepted call fires exactly one
    /// event either way.
    pub fn register(mut self, point: ObservationPoint, mode: HookMode) -> Self {
        self.points.insert(point, mode);
        self
    }

    /// Replaces the diagnostic sink (default: stdout).
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Freezes the table into a local registry, for harnesses that scope
    /// interception themselves (and for tests).
    pub fn build(self) -> Registry {
        Registry {
            points: self.points,
            sink: self.sink,
        }
    }

    /// Freezes the table and installs it process-wide. The first install
    /// wins; later calls return the table already in place.
    pub fn install(self) -> &'static Registry {
        INSTALLED.get_or_init(|| self.build())
    }
}

/// The registration table: immutable once built, shared freely across
/// fuzzing workers. Lookups take `&self` and need no locking.
pub struct Registry {
    points: HashMap<ObservationPoint, HookMode>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            points: HashMap::new(),
            sink: Arc::new(StdoutSink),
        }
    }

    /// The process-wide table, if one has been installed.
    pub fn installed() -> Option<&'static Registry> {
        INSTALLED.get()
    }

    /// Armed hook for a call site, or `None` when the call is not a
    /// replacement observation point and must proceed normally. Logging
    /// points are delivered through [`logging_point`](Self::logging_point),
    /// not here.
    pub fn interception(&self, owning_type: &str, method: &str) -> Option<Interception<'_>> {
        // The table is tiny and populated once; a scan keeps the keys
        // borrowable from call-site strings.
        self.points.iter().find_map(|(point, mode)| {
            (*mode == HookMode::Replace
                && point.owning_type == owning_type
                && point.method == method)
                .then(|| Interception::new(*point, self.sink.as_ref()))
        })
    }

    /// Armed logging hook matching a `tracing` event target, if any.
    /// Targets are module paths; a registered owning type matches itself and
    /// any descendant module.
    pub fn logging_point(&self, target: &str) -> Option<Interception<'_>> {
        self.points.iter().find_map(|(point, mode)| {
            (*mode == HookMode::EscalateLogging && target_matches(target, point.owning_type))
                .then(|| Interception::new(*point, self.sink.as_ref()))
        })
    }

    pub(crate) fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }
}

fn target_matches(target: &str, registered: &str) -> bool {
    match target.strip_prefix(registered) {
        Some("") => true,
        Some(rest) => rest.starts_with("::"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPUTE: ObservationPoint = ObservationPoint::new("Target", "compute");

    #[test]
    fn lookup_hits_registered_points_only() {
        let registry = Registry::builder()
            .register(COMPUTE, HookMode::Replace)
            .build();

        assert!(registry.interception("Target", "compute").is_some());
        assert!(registry.interception("Target", "other").is_none());
        assert!(registry.interception("Other", "compute").is_none());
    }

    #[test]
    fn re_registration_overwrites_instead_of_duplicating() {
        let registry = Registry::builder()
            .register(COMPUTE, HookMode::Replace)
            .register(COMPUTE, HookMode::EscalateLogging)
            .build();

        assert_eq!(registry.points.len(), 1);
        assert_eq!(registry.points[&COMPUTE], HookMode::EscalateLogging);
        // The overwritten mode governs which lookup arms the point.
        assert!(registry.interception("Target", "compute").is_none());
        assert!(registry.logging_point("Target").is_some());
    }

    #[test]
    fn replace_lookup_ignores_logging_points() {
        let registry = Registry::builder()
            .register(
                ObservationPoint::new("rpc::logging", "error"),
                HookMode::EscalateLogging,
            )
            .build();

        assert!(registry.interception("rpc::logging", "error").is_none());
        assert!(registry.logging_point("rpc::logging").is_some());
    }

    #[test]
    fn logging_lookup_ignores_replace_points() {
        let registry = Registry::builder()
            .register(ObservationPoint::new("codec", "decode"), HookMode::Replace)
            .register(
                ObservationPoint::new("rpc::logging", "error"),
                HookMode::EscalateLogging,
            )
            .build();

        assert!(registry.logging_point("codec").is_none());
        assert!(registry.logging_point("rpc::logging").is_some());
    }

    #[test]
    fn target_matching_is_module_path_aware() {
        assert!(target_matches("rpc", "rpc"));
        assert!(target_matches("rpc::server::internal", "rpc"));
        assert!(!target_matches("rpcx", "rpc"));
        assert!(!target_matches("other::rpc", "rpc"));
    }
}
