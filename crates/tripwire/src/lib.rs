//! Error-surfacing interception for fuzzing harnesses.
//!
//! Production code often catches a failure, logs it, and carries on. A
//! coverage-guided fuzzer driving that code never sees a crash, so the input
//! that reached the error path is lost. This crate intercepts designated
//! observation points (owning type + method name) and replaces each call that
//! reaches one with a diagnostic block on a sink followed by an unconditional
//! panic, making reachability of the point visible as a crash.
//!
//! Hooks are installed by composition: a harness wraps the real
//! implementation behind a [`Registry`] lookup (for arbitrary-method probes)
//! or layers [`EscalateErrors`] onto its `tracing` subscriber (to turn
//! logged-and-swallowed errors into crashes).

mod describe;
mod error;
mod escalate;
mod event;
mod intercept;
mod point;
mod registry;
mod sink;

pub use crate::describe::{AsDebug, Describe, UNREPRESENTABLE};
pub use crate::error::ForcedObservationFailure;
pub use crate::escalate::EscalateErrors;
pub use crate::event::InterceptionEvent;
pub use crate::intercept::{Interception, Receiver};
pub use crate::point::{HookMode, ObservationPoint};
pub use crate::registry::{Registry, RegistryBuilder};
pub use crate::sink::{DiagnosticSink, MemorySink, StdoutSink};
